//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

use completions::{org_id_candidates, user_id_candidates};

pub mod args;
pub mod completions;
pub mod context;
pub mod handlers;
pub mod init;
pub mod org;
pub mod status;
pub mod user;

pub use args::{ListQueryArgs, OrgFormArgs, OutputFormat, UserFormArgs};
pub use context::CommandContext;

/// OneAuth console - manage global users and organizations
#[derive(Parser, Debug)]
#[command(name = "oneauth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "ONEAUTH_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "ONEAUTH_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API base URL
    #[arg(long = "api-url", global = true, env = "ONEAUTH_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ONEAUTH_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize OneAuth configuration
    Init {
        /// Accept defaults without prompting
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Manage global users
    #[command(subcommand)]
    User(UserCommands),

    /// Manage global organizations
    #[command(subcommand)]
    Org(OrgCommands),

    /// Generate shell completions (static)
    #[command(after_help = "\
Static completions (subcommands/flags only):
  bash:   oneauth completion bash > /etc/bash_completion.d/oneauth
  zsh:    oneauth completion zsh > \"${fpath[1]}/_oneauth\"
  fish:   oneauth completion fish > ~/.config/fish/completions/oneauth.fish

Dynamic completions (includes user and organization IDs via API):
  bash:   echo 'source <(COMPLETE=bash oneauth)' >> ~/.bashrc
  zsh:    echo 'source <(COMPLETE=zsh oneauth)' >> ~/.zshrc
  fish:   echo 'COMPLETE=fish oneauth | source' >> ~/.config/fish/config.fish

Note: Dynamic completions query the OneAuth API when you press TAB.")]
    Completion {
        /// Shell to generate completions for (static only)
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Global user subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List users with sorting, filtering and paging
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            oneauth user list                               # First page\n  \
            oneauth user list --sort name:asc --page 2      # Sorted, third page\n  \
            oneauth user list --toggle-sort email           # Cycle sort on email\n  \
            oneauth user list --filter name=jane            # Filter by name\n  \
            oneauth user list -q 'page=1&sort=name:desc'    # Resume a saved query"
    )]
    List {
        #[command(flatten)]
        query: ListQueryArgs,
    },

    /// Show a single user
    #[command(visible_alias = "g")]
    Get {
        /// User ID
        #[arg(add = user_id_candidates())]
        id: String,
    },

    /// Create a user
    #[command(after_help = "EXAMPLES:\n  \
            oneauth user create --name Jane --email jane@example.com\n  \
            oneauth user create --name Jane --email jane@example.com --dry-run")]
    Create {
        #[command(flatten)]
        fields: UserFormArgs,
        /// Preview without creating
        #[arg(long, short = 'n')]
        dry_run: bool,
    },

    /// Update a user; omitted fields keep their current values
    Update {
        /// User ID
        #[arg(add = user_id_candidates())]
        id: String,
        #[command(flatten)]
        fields: UserFormArgs,
        /// Preview without updating
        #[arg(long, short = 'n')]
        dry_run: bool,
    },

    /// Delete a user
    #[command(after_help = "EXAMPLES:\n  \
            oneauth user delete u-123          # With confirmation\n  \
            oneauth user delete u-123 --yes    # Skip confirmation\n  \
            oneauth user delete u-123 --dry-run")]
    Delete {
        /// User ID
        #[arg(add = user_id_candidates())]
        id: String,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
        /// Preview without deleting
        #[arg(long, short = 'n')]
        dry_run: bool,
    },
}

/// Global organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// List organizations with sorting, filtering and paging
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        query: ListQueryArgs,
    },

    /// Show a single organization
    #[command(visible_alias = "g")]
    Get {
        /// Organization ID
        #[arg(add = org_id_candidates())]
        id: String,
    },

    /// Create an organization
    Create {
        #[command(flatten)]
        fields: OrgFormArgs,
        /// Preview without creating
        #[arg(long, short = 'n')]
        dry_run: bool,
    },

    /// Update an organization; omitted fields keep their current values
    Update {
        /// Organization ID
        #[arg(add = org_id_candidates())]
        id: String,
        #[command(flatten)]
        fields: OrgFormArgs,
        /// Preview without updating
        #[arg(long, short = 'n')]
        dry_run: bool,
    },

    /// Delete an organization
    Delete {
        /// Organization ID
        #[arg(add = org_id_candidates())]
        id: String,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
        /// Preview without deleting
        #[arg(long, short = 'n')]
        dry_run: bool,
    },
}
