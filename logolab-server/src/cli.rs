use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "logolab",
    about = "Logo Lab - rate-limited logo design gateway",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, env = "LOGOLAB_CONFIG", help = "Path to a JSON config file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Start the gateway (default if no command specified)")]
    Serve {
        #[arg(short, long, help = "Port to listen on (overrides config and LOGOLAB_PORT)")]
        port: Option<u16>,

        #[arg(long, help = "Bind to 0.0.0.0 instead of 127.0.0.1")]
        lan: bool,
    },

    #[command(about = "Generate a design and both preview images")]
    Generate {
        #[arg(long, help = "Project name (upper-cased before sending)")]
        project: String,

        #[arg(long, help = "Visual identity description")]
        description: String,

        #[arg(long, env = "LOGOLAB_GATEWAY", default_value = "http://127.0.0.1:8045")]
        gateway: String,

        #[arg(long, help = "Call the providers directly instead of the gateway")]
        direct: bool,

        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(subcommand, about = "View configuration")]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Show effective configuration")]
    Show {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },
}
