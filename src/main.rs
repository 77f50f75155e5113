mod cli;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_html, print_json, print_sources};
use curated_gems::logging;
use gems_core::{Session, ViewStatus};
use settings::ResolvedConfig;
use workflow::BrowseWorkflow;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = parse_cli();
    logging::initialize(cli.verbose);

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    let session = load_session(&resolved).await?;

    if cli.list_sources {
        print_sources(&session);
    } else {
        print_view(resolved.output, &session)?;
    }

    Ok(exit_code(&session))
}

async fn load_session(settings: &ResolvedConfig) -> Result<Session> {
    let workflow = BrowseWorkflow::from_config(settings)?;
    Ok(workflow.run().await)
}

/// Print the current view in the chosen format.
fn print_view(format: OutputFormat, session: &Session) -> Result<()> {
    match format {
        OutputFormat::Html => print_html(session),
        OutputFormat::Json => print_json(session)?,
    }

    Ok(())
}

fn exit_code(session: &Session) -> ExitCode {
    match session.status() {
        ViewStatus::LoadFailed(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}
