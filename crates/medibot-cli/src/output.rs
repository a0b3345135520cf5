//! Output formatting utilities for the CLI.

use colored::Colorize;
use serde::Serialize;

/// Print a success message.
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print a warning message.
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message);
}

/// Print an info message.
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a section header.
pub fn section(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Print JSON output.
pub fn json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let output = serde_json::to_string_pretty(value)?;
    println!("{}", output);
    Ok(())
}

/// Print a table of data.
pub fn table<T: tabled::Tabled>(data: &[T]) {
    use tabled::{settings::Style, Table};

    if data.is_empty() {
        println!("  (no data)");
        return;
    }

    let mut table = Table::new(data);
    table.with(Style::rounded());
    println!("{}", table);
}

/// Print the web sources a response was grounded on.
pub fn sources(sources: &[medibot_core::SourceLink]) {
    if sources.is_empty() {
        return;
    }
    section("Sources");
    for source in sources {
        println!("  {} {}", source.title.dimmed(), source.uri.underline());
    }
}
