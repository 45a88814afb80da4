// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interactive REPL over the orchestrator.
//!
//! One session per invocation. Slash commands adjust the session's
//! knowledge-base settings; everything else is sent to the orchestrator.

use std::sync::Arc;

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use teachassist_agent::{Orchestrator, SessionContext};
use teachassist_anthropic::AnthropicProvider;
use teachassist_config::TeachAssistConfig;
use teachassist_core::{KnowledgeBaseAdapter, ProviderAdapter, TeachAssistError};
use teachassist_hotel::{AirtrotterClient, BestMatchReport, StayParams};
use teachassist_images::UnsplashClient;
use teachassist_memory::LocalKnowledgeBase;
use tracing::info;

const HELP: &str = "\
  /kb <id>            use a knowledge base id for this session
  /min-score <0..1>   minimum retrieval score
  /max-results <n>    maximum retrieved facts
  /hotel <name>       look up a hotel and its availability
  /images <query>     search for photos
  /quit, /exit        leave the shell";

/// A parsed line of shell input.
#[derive(Debug, Clone, PartialEq)]
enum ShellCommand<'a> {
    Quit,
    Help,
    SetKb(&'a str),
    MinScore(f64),
    MaxResults(usize),
    Hotel(&'a str),
    Images(&'a str),
    Message(&'a str),
    Invalid(String),
}

fn parse_command(line: &str) -> ShellCommand<'_> {
    let line = line.trim();
    if !line.starts_with('/') {
        return ShellCommand::Message(line);
    }

    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };

    match command {
        "/quit" | "/exit" => ShellCommand::Quit,
        "/help" => ShellCommand::Help,
        "/kb" => ShellCommand::SetKb(arg),
        "/min-score" => match arg.parse::<f64>() {
            Ok(score) if (0.0..=1.0).contains(&score) => ShellCommand::MinScore(score),
            _ => ShellCommand::Invalid(format!("min score must be between 0 and 1, got '{arg}'")),
        },
        "/max-results" => match arg.parse::<usize>() {
            Ok(n) if n >= 1 => ShellCommand::MaxResults(n),
            _ => ShellCommand::Invalid(format!("max results must be at least 1, got '{arg}'")),
        },
        "/hotel" if !arg.is_empty() => ShellCommand::Hotel(arg),
        "/hotel" => ShellCommand::Invalid("usage: /hotel <name>".to_string()),
        "/images" if !arg.is_empty() => ShellCommand::Images(arg),
        "/images" => ShellCommand::Invalid("usage: /images <query>".to_string()),
        other => ShellCommand::Invalid(format!("unknown command {other}; try /help")),
    }
}

/// Runs the interactive shell until `/quit`, Ctrl+C, or Ctrl+D.
pub async fn run_shell(config: TeachAssistConfig) -> Result<(), TeachAssistError> {
    let provider: Arc<dyn ProviderAdapter> =
        Arc::new(AnthropicProvider::new(&config.anthropic).inspect_err(|_| {
            eprintln!(
                "error: Anthropic API key required. Set anthropic.api_key in config or the ANTHROPIC_API_KEY env var"
            );
        })?);
    let kb: Arc<dyn KnowledgeBaseAdapter> = Arc::new(LocalKnowledgeBase::new());
    let orchestrator = Orchestrator::from_config(provider, kb, &config);
    let mut session = SessionContext::from_config(&config.memory);
    let mut hotels: Option<AirtrotterClient> = None;
    let mut images: Option<UnsplashClient> = None;

    let mut rl = DefaultEditor::new()
        .map_err(|e| TeachAssistError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", config.agent.name.bold().green());
    println!(
        "Ask a question in any subject area or store/retrieve personal information. Type {} for commands.\n",
        "/help".yellow()
    );

    let prompt = format!("{}> ", "teachassist".green());
    loop {
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(&line);

        match parse_command(&line) {
            ShellCommand::Quit => break,
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::SetKb(id) => {
                session.set_kb_id(id);
                match &session.kb_id {
                    Some(id) => println!("{}", format!("knowledge base id set to {id}").dimmed()),
                    None => println!("{}", "knowledge base override cleared".dimmed()),
                }
            }
            ShellCommand::MinScore(score) => {
                session.options.min_score = score;
                println!("{}", format!("min score set to {score}").dimmed());
            }
            ShellCommand::MaxResults(n) => {
                session.options.max_results = n;
                println!("{}", format!("max results set to {n}").dimmed());
            }
            ShellCommand::Hotel(term) => {
                if hotels.is_none() {
                    match AirtrotterClient::from_config(&config.hotel) {
                        Ok(client) => hotels = Some(client),
                        Err(e) => {
                            eprintln!("{}", e.to_string().yellow());
                            continue;
                        }
                    }
                }
                if let Some(client) = &hotels {
                    match client.best_match_availability(term, &StayParams::default()).await {
                        Ok(report) => println!("{}", describe_hotel_report(&report)),
                        Err(e) => eprintln!("{}: {e}", "error".red()),
                    }
                }
            }
            ShellCommand::Images(query) => {
                if images.is_none() {
                    match UnsplashClient::from_config(&config.images) {
                        Ok(client) => images = Some(client),
                        Err(e) => {
                            eprintln!("{}", e.to_string().yellow());
                            continue;
                        }
                    }
                }
                if let Some(client) = &images {
                    match client.search(query).await {
                        Ok(urls) => println!("{}", describe_image_results(&urls)),
                        Err(e) => eprintln!("{}: {e}", "error".red()),
                    }
                }
            }
            ShellCommand::Invalid(message) => eprintln!("{}", message.yellow()),
            ShellCommand::Message(text) => {
                let reply = orchestrator.handle(&mut session, text).await;
                println!("{reply}\n");
            }
        }
    }

    info!(turns = session.history.len() / 2, "shell session ended");
    println!("{}", "goodbye".dimmed());
    Ok(())
}

fn describe_hotel_report(report: &BestMatchReport) -> String {
    let Some(candidate) = &report.candidate else {
        return format!("No properties matched ({} searched).", report.results.len());
    };

    let name = candidate.name.as_deref().unwrap_or("unnamed property");
    let id = candidate.hotel_id.as_deref().unwrap_or("unknown id");
    let mut out = format!("Best match: {name} ({id})");
    match &report.availability {
        Some(availability) => {
            out.push_str(&format!(
                "\n{} offers in the area, {} after filters",
                teachassist_hotel::flatten_candidates(
                    &availability.raw,
                    teachassist_hotel::decode::AVAILABILITY_KEYS
                )
                .len(),
                availability.filtered.len()
            ));
            if let Some(first) = availability.filtered.first() {
                let preview = serde_json::to_string_pretty(first).unwrap_or_default();
                out.push_str(&format!("\n{preview}"));
            }
        }
        None => out.push_str("\nNo coordinates for this property; availability not checked."),
    }
    out
}

fn describe_image_results(urls: &[String]) -> String {
    if urls.is_empty() {
        return "No images found.".to_string();
    }
    urls.join("\n")
}
