//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::{ListParams, OneAuthClient, UserApi};
use crate::config::Config;
use crate::error::Result;

const FORMATS: [&str; 3] = ["pretty", "table", "json"];

/// Run the init command
///
/// Interactive unless `yes` is set, in which case the current values (or the
/// `--api-url` override) are written without prompting.
pub async fn run(opts: &GlobalOptions, yes: bool) -> Result<()> {
    let existing = Config::load_or_default(opts.config_ref())?;
    let config = if yes {
        Config {
            api_url: Some(existing.api_url(opts.api_url_ref())),
            ..existing
        }
    } else {
        prompt(&existing, opts).await?
    };

    config.validate()?;
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );
    if let Some(ref url) = config.api_url {
        println!("  API URL: {}", url.bold());
    }

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "oneauth status".cyan());
    println!("  {} - List global users", "oneauth user list".cyan());

    Ok(())
}

async fn prompt(existing: &Config, opts: &GlobalOptions) -> Result<Config> {
    println!("{}", "Welcome to the OneAuth console!".bold().green());
    println!("Let's set up your API connection.\n");

    let theme = ColorfulTheme::default();

    let api_url: String = Input::with_theme(&theme)
        .with_prompt("OneAuth API URL")
        .default(existing.api_url(opts.api_url_ref()))
        .interact_text()?;

    let timeout_secs: u64 = Input::with_theme(&theme)
        .with_prompt("Request timeout (seconds)")
        .default(existing.timeout().as_secs())
        .validate_with(|v: &u64| {
            if *v > 0 {
                Ok(())
            } else {
                Err("timeout must be greater than 0")
            }
        })
        .interact_text()?;

    let current_format = existing
        .preferences
        .format
        .as_deref()
        .and_then(OutputFormat::from_name)
        .unwrap_or_default();
    let default_index = FORMATS
        .iter()
        .position(|f| OutputFormat::from_name(f) == Some(current_format))
        .unwrap_or(0);
    let format_index = Select::with_theme(&theme)
        .with_prompt("Default output format")
        .items(&FORMATS)
        .default(default_index)
        .interact()?;

    let mut config = existing.clone();
    config.api_url = Some(api_url.trim().trim_end_matches('/').to_string());
    config.timeout_secs = Some(timeout_secs);
    config.preferences.format = Some(FORMATS[format_index].to_string());

    verify(&config).await;
    Ok(config)
}

/// Try one list request so a wrong URL is noticed early. Never fatal.
async fn verify(config: &Config) {
    println!("\n{}", "Checking API connection...".cyan());

    let result = match OneAuthClient::new(&config.api_url(None), config.timeout()) {
        Ok(client) => client.list_users(&ListParams::new().page_size(1)).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(_) => println!("{}", "✓ API reachable".green()),
        Err(err) => println!("{} Could not reach API: {}", "⚠".yellow(), err),
    }
}
