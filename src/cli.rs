use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::CommandContext;
use crate::logging;

#[derive(Parser)]
#[command(name = "slaboard")]
#[command(about = "Terminal dashboard for SLA incident tickets")]
#[command(version)]
pub struct Cli {
    /// Backend base URL (overrides SLABOARD_API_URL and the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, env = "SLABOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `slaboard=trace`
    #[arg(long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive incident dashboard (default)
    #[command(visible_alias = "d")]
    Dashboard,

    /// List incidents
    #[command(visible_alias = "ls")]
    Tickets {
        /// Only tickets with this status (`all` for no filter)
        #[arg(short, long, conflicts_with = "search")]
        status: Option<String>,

        /// Full-text search term
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show summary counters and the SLA achievement rate
    Metrics {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a single ticket
    Show {
        /// Ticket ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask the SLA assistant a question
    Chat {
        /// Message text
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Check that the backend is reachable
    Health {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (api_url, stale_responses, filters, chat.enabled, ...)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (api_url, stale_responses, filters, chat.enabled, ...)
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Whether the chosen command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Dashboard))
    }

    /// Load configuration, install logging and execute the command.
    ///
    /// The dashboard owns the terminal and sets up its own file logger.
    pub async fn run(self) -> crate::error::Result<()> {
        let interactive = self.is_interactive();
        let ctx = CommandContext::load(self.config, self.api_url, self.log)?;
        if !interactive {
            logging::init_stderr(ctx.log.as_deref(), ctx.config.log.level.as_deref());
        }
        self.command.unwrap_or(Commands::Dashboard).run(&ctx).await
    }
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self, ctx: &CommandContext) -> crate::error::Result<()> {
        use crate::commands::{
            cmd_chat, cmd_config_get, cmd_config_set, cmd_config_show, cmd_dashboard,
            cmd_health, cmd_metrics, cmd_show, cmd_tickets,
        };

        match self {
            Commands::Dashboard => cmd_dashboard(ctx).await,
            Commands::Tickets {
                status,
                search,
                json,
            } => cmd_tickets(ctx, status.as_deref(), search.as_deref(), json).await,
            Commands::Metrics { json } => cmd_metrics(ctx, json).await,
            Commands::Show { id, json } => cmd_show(ctx, &id, json).await,
            Commands::Chat { message } => cmd_chat(ctx, &message).await,
            Commands::Health { json } => cmd_health(ctx, json).await,
            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(ctx, json),
                ConfigAction::Set { key, value, json } => {
                    cmd_config_set(ctx, &key, &value, json)
                }
                ConfigAction::Get { key, json } => cmd_config_get(ctx, &key, json),
            },
        }
    }
}
