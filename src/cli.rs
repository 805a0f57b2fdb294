//! Command-line demonstration client.
//!
//! Fetches records from a running wardbook server over its REST API and
//! prints them as `key : value` lines. Collection and id can be given
//! as arguments; without them the client falls back to an interactive
//! prompt. A debugging aid, not part of the store contract.

use std::io::{self, BufRead, Write};

use clap::Parser;
use serde_json::Value;

const COLLECTIONS: [&str; 4] = ["apps", "patients", "doctors", "symptoms"];

#[derive(Parser)]
#[command(name = "wardbook-cli")]
#[command(version, about = "Browse wardbook appointment records", long_about = None)]
pub struct Cli {
    /// Override the API URL (default: WARDBOOK_API_URL env or http://127.0.0.1:8430/api)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Collection to fetch: apps, patients, doctors, or symptoms
    pub collection: Option<String>,

    /// Primary key of a single record (omit to fetch the whole collection)
    pub id: Option<i64>,
}

pub fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let base_url = cli
        .api_url
        .or_else(|| std::env::var("WARDBOOK_API_URL").ok())
        .unwrap_or_else(|| "http://127.0.0.1:8430/api".to_string());

    let (collection, id) = match cli.collection {
        Some(collection) => (collection, cli.id),
        None => prompt_selection()?,
    };

    if !COLLECTIONS.contains(&collection.as_str()) {
        return Err(format!(
            "unknown collection {collection:?} (expected one of: {})",
            COLLECTIONS.join(", ")
        ));
    }

    let url = match id {
        Some(id) => format!("{base_url}/{collection}/{id}"),
        None => format!("{base_url}/{collection}"),
    };

    let response = reqwest::blocking::get(&url).map_err(|e| format!("request failed: {e}"))?;
    let content: Value = response
        .json()
        .map_err(|e| format!("response was not JSON: {e}"))?;

    println!("\nHere is the information.\n");
    print!("{}", format_content(&content));
    Ok(())
}

/// Interactively ask for a collection and an optional primary key.
fn prompt_selection() -> Result<(String, Option<i64>), String> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let collection = ask(&mut lines, "Collection (apps, patients, doctors, or symptoms): ")?;

    let key = ask(&mut lines, "Primary key (leave empty for the whole collection): ")?;
    let id = if key.is_empty() {
        None
    } else {
        Some(
            key.parse::<i64>()
                .map_err(|_| format!("primary key {key:?} is not a number"))?,
        )
    };

    Ok((collection, id))
}

fn ask(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<String, String> {
    print!("{prompt}");
    io::stdout().flush().map_err(|e| e.to_string())?;
    match lines.next() {
        Some(line) => Ok(line.map_err(|e| e.to_string())?.trim().to_string()),
        None => Err("no input".to_string()),
    }
}

/// Render a JSON payload as `key : value` lines, one blank line between
/// records of a list.
fn format_content(content: &Value) -> String {
    match content {
        Value::Array(records) => {
            let mut out = String::new();
            for record in records {
                out.push_str(&format_record(record));
                out.push('\n');
            }
            out
        }
        other => {
            let mut out = format_record(other);
            out.push('\n');
            out
        }
    }
}

fn format_record(record: &Value) -> String {
    match record {
        Value::Object(fields) => {
            let mut out = String::new();
            for (key, value) in fields {
                match value {
                    Value::String(s) => out.push_str(&format!("{key} : {s}\n")),
                    other => out.push_str(&format!("{key} : {other}\n")),
                }
            }
            out
        }
        other => format!("{other}\n"),
    }
}
