//! Promo check console binary
//!
//! Reads a promo window configuration and reports whether the promotion is
//! active at the current local time.
//!
//! # Usage
//!
//! ```bash
//! # Configuration passed directly
//! promo-check "Mon: 1200-1400 Tue: 0900-1100 Fri: 0000-2400"
//!
//! # Configuration read from a file
//! promo-check --file promo.conf
//!
//! # Machine-readable output
//! promo-check --json "Fri: 0000-2400"
//! ```
//!
//! With no argument and no `--file`, the configuration is prompted for on
//! stdin. Exits with code 2 on an invalid configuration.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use promo_windows::io::ConfigLoader;
use promo_windows::services::promo;

fn main() -> anyhow::Result<ExitCode> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(false)
        .init();

    let mut json = false;
    let mut file: Option<String> = None;
    let mut literal: Option<String> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--file" => file = Some(args.next().context("--file requires a path")?),
            _ => literal = Some(arg),
        }
    }

    let config = match (literal, file) {
        (Some(config), _) => config,
        (None, Some(path)) => ConfigLoader::load_from_file(Path::new(&path))?,
        (None, None) => prompt_for_config()?,
    };

    match promo::check_promo_now(&config) {
        Ok(status) => {
            if json {
                println!("{}", serde_json::to_string(&status)?);
            } else if status.active {
                println!("Promo time!");
            } else {
                println!("Sorry, no promo right now.");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            error!("invalid configuration: {err}");
            Ok(ExitCode::from(2))
        }
    }
}

fn prompt_for_config() -> anyhow::Result<String> {
    print!("Promo configuration: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read configuration from stdin")?;
    Ok(line.trim().to_string())
}
