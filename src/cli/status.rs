//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "OneAuth Console Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;

    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            config
        }
        Err(crate::error::Error::Config(crate::error::ConfigError::NotFound)) => {
            println!("{} Configuration not found (using defaults)", "○".dimmed());
            println!("  → Run {} to create one", "oneauth init".cyan());
            Config::default()
        }
        Err(err) => return Err(err),
    };

    println!();

    let api_url = config.api_url(opts.api_url_ref());
    let source = if opts.api_url.is_some() {
        "(flag/env)"
    } else if config.api_url.is_some() {
        "(config)"
    } else {
        "(default)"
    };
    println!("{} API URL: {} {}", "✓".green(), api_url, source.dimmed());
    println!(
        "{} Request timeout: {}s",
        "✓".green(),
        config.timeout().as_secs()
    );

    match config.preferences.format {
        Some(ref format) => println!("{} Default format: {}", "✓".green(), format),
        None => println!("{} Default format: pretty", "○".dimmed()),
    }

    println!();

    Ok(())
}
