//! OneAuth console - manage global users and organizations from the terminal

use clap::{CommandFactory, Parser};
use clap_complete::CompleteEnv;
use log::LevelFilter;

mod cli;
mod client;
mod config;
mod error;
mod forms;
mod output;
mod query;

use cli::args::GlobalOptions;
use cli::{Cli, CommandContext, Commands, OrgCommands, UserCommands};
use error::{Error, Result};
use output::toast;

fn main() {
    // Answers shell TAB requests when COMPLETE is set, then exits. Completers
    // start their own runtime, so this runs before ours exists.
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();
    init_logging(cli.debug);

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(Error::from)
        .and_then(|runtime| runtime.block_on(run(cli)));

    if let Err(err) = result {
        toast::error(&err.to_string());
        if let Error::Validation(ref fields) = err {
            toast::field_errors(fields);
        }
        std::process::exit(1);
    }
}

/// `--debug` forces debug level; otherwise `RUST_LOG` applies, defaulting to warnings.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init { yes } => cli::init::run(&opts, yes).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("oneauth version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
        Commands::User(cmd) => {
            let ctx = CommandContext::new(&opts)?;
            match cmd {
                UserCommands::List { query } => cli::user::list(&ctx, &query).await,
                UserCommands::Get { id } => cli::user::get(&ctx, &id).await,
                UserCommands::Create { fields, dry_run } => {
                    cli::user::create(&ctx, &fields, dry_run).await
                }
                UserCommands::Update {
                    id,
                    fields,
                    dry_run,
                } => cli::user::update(&ctx, &id, &fields, dry_run).await,
                UserCommands::Delete { id, yes, dry_run } => {
                    cli::user::delete(&ctx, &id, yes, dry_run).await
                }
            }
        }
        Commands::Org(cmd) => {
            let ctx = CommandContext::new(&opts)?;
            match cmd {
                OrgCommands::List { query } => cli::org::list(&ctx, &query).await,
                OrgCommands::Get { id } => cli::org::get(&ctx, &id).await,
                OrgCommands::Create { fields, dry_run } => {
                    cli::org::create(&ctx, &fields, dry_run).await
                }
                OrgCommands::Update {
                    id,
                    fields,
                    dry_run,
                } => cli::org::update(&ctx, &id, &fields, dry_run).await,
                OrgCommands::Delete { id, yes, dry_run } => {
                    cli::org::delete(&ctx, &id, yes, dry_run).await
                }
            }
        }
    }
}
