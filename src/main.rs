mod cli;
mod settings;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_json, print_plain, print_themes};
use settings::ResolvedConfig;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        print_themes(reel::tui::theme::definitions());
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    reel::logging::initialize(&resolved.log_level, &resolved.log_file)
        .context("failed to set up logging")?;

    run_showcase(cli.output, resolved)
}

/// Run the showcase and print the session report in the chosen format.
fn run_showcase(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
    let report = reel::run(settings.showcase())?;

    match format {
        OutputFormat::Plain => print_plain(&report),
        OutputFormat::Json => print_json(&report)?,
    }

    Ok(())
}
