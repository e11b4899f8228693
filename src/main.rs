//! Command line front end for the navigation core.
//!
//! Walks a menu server the way the browser shell would: list apps, enter an
//! app, follow a path of menu selections, optionally paginate or search, and
//! print each screen as it arrives.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::sync::Arc;
use std::time::Duration;

use session_nav::config::ProjectConfig;
use session_nav::controller::NavigationController;
use session_nav::history::{History, MemoryHistory};
use session_nav::log_appender::setup_logging;
use session_nav::menu_service::http_client::HttpClient;
use session_nav::menu_service::menu_client::MenuClient;
use session_nav::message_broker::MessageBroker;
use session_nav::renderer::StdoutRenderer;

#[derive(Parser)]
#[command(name = "session-nav", about = "Navigate a menu server from the command line")]
struct Cli {
    /// Menu server base URL (overrides the configured one)
    #[arg(long)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the applications available to the current user
    Apps,
    /// Enter an app and follow a path of menu selections
    Navigate {
        /// App id to enter
        #[arg(long)]
        app: String,
        /// Comma-separated menu selection indices
        #[arg(long, value_delimiter = ',')]
        steps: Vec<u32>,
        /// Page of the final list screen
        #[arg(long)]
        page: Option<u64>,
        /// Search term for the final list screen
        #[arg(long)]
        search: Option<String>,
    },
    /// List the stored sessions of the current user
    Sessions,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let project_config = ProjectConfig::new().context("Failed to load configuration")?;
    setup_logging(project_config.project_dirs.data_dir())
        .context("Failed to setup logging")?;

    let server_url = cli
        .server
        .unwrap_or_else(|| project_config.settings.server_url.clone());
    info!("Using menu server at {}", server_url);

    let timeout = Duration::from_secs(project_config.settings.request_timeout_secs);
    let history = Arc::new(MemoryHistory::new());
    let client = Arc::new(MenuClient::new(HttpClient::with_timeout(&server_url, timeout)?));
    let renderer = Arc::new(StdoutRenderer);
    let broker = MessageBroker::new(32);
    let controller = NavigationController::new(history.clone(), client, renderer, broker);

    match cli.command {
        Commands::Apps => {
            controller.list_apps().await?;
        }
        Commands::Navigate {
            app,
            steps,
            page,
            search,
        } => {
            controller.select_app(&app).await?;
            for step in steps {
                controller.select_menu(step).await?;
            }
            if let Some(page) = page {
                controller.paginate(page).await?;
            }
            if let Some(term) = search {
                controller.search(&term).await?;
            }
            info!("Final fragment: {}", history.current_fragment());
        }
        Commands::Sessions => {
            controller.list_sessions().await?;
        }
    }

    Ok(())
}
