// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! TeachAssist - a tutoring assistant with a personal knowledge base.
//!
//! Loads configuration, initializes logging, and runs the interactive shell.

mod shell;

use colored::Colorize;

#[tokio::main]
async fn main() {
    let config = match teachassist_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            teachassist_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);
    tracing::debug!(agent = %config.agent.name, "config loaded");

    if let Err(e) = shell::run_shell(config).await {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins over the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("teachassist={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
