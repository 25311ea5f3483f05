//! `symptoscanctl check` - submit symptoms and render the result cards.

use crate::cards::{build_cards, render_html, render_text};
use crate::client::ProxyClient;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::process::ExitCode;
use symptoscan_common::{
    duration_advisory, normalize, ApiReply, Resolver, ResultSource, SymptomQuery,
};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

pub struct CheckArgs {
    pub symptoms: String,
    pub duration: Option<String>,
    pub server: String,
    pub offline: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    NoSymptoms,
    NoMatch {
        symptoms: Vec<String>,
    },
    Found {
        source: ResultSource,
        titles: Vec<String>,
        symptoms: Vec<String>,
    },
}

/// Prefer non-empty proxy results, shown as sent, otherwise resolve locally
pub fn select_results(
    query: &SymptomQuery,
    reply: Option<ApiReply>,
    resolver: &Resolver,
) -> (ResultSource, Vec<String>) {
    match reply {
        Some(ApiReply::Remote(titles)) if !titles.is_empty() => (ResultSource::Remote, titles),
        Some(ApiReply::Fallback(names)) if !names.is_empty() => (ResultSource::Fallback, names),
        _ => (ResultSource::Fallback, resolver.resolve(query).into_vec()),
    }
}

/// Decide what to show for the input. `reply` is `None` when the proxy was
/// skipped or failed.
pub fn evaluate(raw: &str, reply: Option<ApiReply>, resolver: &Resolver) -> CheckOutcome {
    let query = normalize(raw);
    if query.is_empty() {
        return CheckOutcome::NoSymptoms;
    }

    let (source, titles) = select_results(&query, reply, resolver);
    if titles.is_empty() {
        return CheckOutcome::NoMatch {
            symptoms: query.terms,
        };
    }

    CheckOutcome::Found {
        source,
        titles,
        symptoms: query.terms,
    }
}

pub async fn run(args: CheckArgs) -> Result<ExitCode> {
    let raw = args.symptoms.trim();

    if let Some(advisory) = args.duration.as_deref().and_then(duration_advisory) {
        println!("{} {}", "[NOTICE]".yellow().bold(), advisory);
        println!();
    }

    if normalize(raw).is_empty() {
        println!("{}", "Please enter your symptoms.".yellow());
        return Ok(ExitCode::FAILURE);
    }

    let reply = if args.offline {
        None
    } else {
        let client = ProxyClient::new(&args.server)?;
        match client.symptoms(raw).await {
            Ok(reply) => Some(reply),
            Err(e) => {
                warn!("Proxy query failed: {}", e);
                None
            }
        }
    };

    let resolver = Resolver::default();
    match evaluate(raw, reply, &resolver) {
        CheckOutcome::NoSymptoms => {
            println!("{}", "Please enter your symptoms.".yellow());
            Ok(ExitCode::FAILURE)
        }
        CheckOutcome::NoMatch { symptoms } => {
            println!(
                "{}",
                format!("No matching topics found for {}.", symptoms.join(", ")).bright_red()
            );
            Ok(ExitCode::SUCCESS)
        }
        CheckOutcome::Found {
            source,
            titles,
            symptoms,
        } => {
            let cards = build_cards(&titles, &symptoms);
            match args.format {
                OutputFormat::Text => print!("{}", render_text(&cards, source)),
                OutputFormat::Html => print!("{}", render_html(&cards)),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "source": source,
                        "cards": cards,
                    }))?
                ),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
