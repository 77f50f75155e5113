use anyhow::Result;
use curated_gems::render::{PageModel, render_page};
use gems_core::Session;

/// Print the rendered HTML page for the session.
pub(crate) fn print_html(session: &Session) {
    print!("{}", render_page(&PageModel::from_session(session)));
}

/// Format the current view as a JSON string.
pub(crate) fn format_view_json(session: &Session) -> Result<String> {
    let page = PageModel::from_session(session);
    Ok(serde_json::to_string_pretty(&page)?)
}

/// Print the JSON representation of the current view.
pub(crate) fn print_json(session: &Session) -> Result<()> {
    println!("{}", format_view_json(session)?);
    Ok(())
}

/// Format one `name<TAB>count` line per facet, `all` first.
pub(crate) fn format_sources(session: &Session) -> String {
    session
        .facets()
        .iter()
        .map(|row| format!("{}\t{}", row.name, row.count))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the source facets with their counts.
pub(crate) fn print_sources(session: &Session) {
    println!("{}", format_sources(session));
}
