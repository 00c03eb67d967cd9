use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use push_settings::config::License;
use push_settings::gui::settings::Messages;
use push_settings::{PushContents, PushServiceType};

mod cli;

#[derive(Parser)]
#[command(name = "push-settings")]
#[command(about = "Configure push notification delivery for the server")]
#[command(version)]
struct Cli {
    /// Path to the server config file
    #[arg(short, long, global = true, default_value = "config.json")]
    config: PathBuf,

    /// Path to the license descriptor (unlicensed when omitted)
    #[arg(short, long, global = true)]
    license: Option<PathBuf>,

    /// Path to a message catalog replacing the built-in English text
    #[arg(short, long, global = true)]
    messages: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the push notification settings window
    Gui,

    /// Show the push notification settings derived from the config
    Show,

    /// Change push notification settings and save the config
    Set {
        /// Relay to use: off, mhpns, mtpns or custom
        #[arg(long)]
        service_type: Option<PushServiceType>,

        /// Relay address (custom relay only)
        #[arg(long)]
        server: Option<String>,

        /// Notification contents: generic_no_channel, generic or full
        #[arg(long)]
        contents: Option<PushContents>,

        /// Accept the hosted push notification service terms
        #[arg(long)]
        accept_terms: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let license = License::load_optional(cli.license.as_deref())?;
    let messages = match &cli.messages {
        Some(path) => Messages::from_file(path)?,
        None => Messages::english(),
    };

    match cli.command {
        Some(Commands::Show) => {
            cli::show::show_command(&cli.config, license, &messages)?;
        }
        Some(Commands::Set {
            service_type,
            server,
            contents,
            accept_terms,
        }) => {
            let edits = push_settings::gui::settings::PushEdits {
                service_type,
                server_address: server,
                contents,
                accept_terms,
            };
            cli::set::set_command(&cli.config, license, edits)?;
        }
        Some(Commands::Gui) | None => {
            push_settings::gui::run_gui(&cli.config, license, messages)?;
        }
    }

    Ok(())
}
