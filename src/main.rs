//! `mock-response` renders scripted HTTP responses.
//!
//! # Usage
//!
//! ```text
//! mock-response render slow.toml > wire.bin
//! mock-response describe slow.toml
//! ```
//!
//! `render` writes the exact bytes a server would send, honoring the
//! script's bandwidth limit. `describe` prints the response head as JSON.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use mock_response::config::load_script;
use mock_response::observability::logging;
use mock_response::ScriptedResponse;

#[derive(Parser)]
#[command(name = "mock-response")]
#[command(about = "Render scripted HTTP responses", long_about = None)]
struct Cli {
    /// Overrides the script's log level.
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the rendered response to stdout
    Render {
        /// Response script (TOML)
        script: PathBuf,
    },
    /// Print status line, headers, policy and bandwidth as JSON
    Describe {
        /// Response script (TOML)
        script: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let path = match &cli.command {
        Commands::Render { script } | Commands::Describe { script } => script,
    };
    let script = load_script(path)?;

    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(&script.observability.log_level);
    logging::init(level);

    let mut response = script.build()?;
    tracing::info!(
        script = %path.display(),
        status = %response.status(),
        policy = %response.disruption_policy(),
        "Script loaded"
    );

    match cli.command {
        Commands::Render { .. } => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            response.render(&mut out)?;
            out.flush()?;
        }
        Commands::Describe { .. } => {
            let description = json!({
                "status": response.status(),
                "headers": response.headers().as_slice(),
                "policy": response.disruption_policy(),
                "bytes_per_second": response.bandwidth_limit(),
            });
            println!("{}", serde_json::to_string_pretty(&description)?);
        }
    }

    Ok(())
}
