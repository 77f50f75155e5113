use super::ResolvedConfig;

/// Printed to stderr so the page on stdout stays intact.
pub(super) fn print_summary(config: &ResolvedConfig) {
    eprintln!("Effective configuration:");
    eprintln!("  Dataset: {}", config.location);
    eprintln!("  Remote: {}", bool_to_word(config.location.is_remote()));
    eprintln!("  Timeout: {}s", config.timeout.as_secs());
    eprintln!("  Language: {}", config.language);
    if config.query.is_empty() {
        eprintln!("  Query: (none)");
    } else {
        eprintln!("  Query: {}", config.query);
    }
    eprintln!("  Source: {}", config.source);
    eprintln!("  Output: {}", config.output.as_str());
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
