//! Rendering of command results.

use serde::Serialize;
use tabled::{Table, Tabled};

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned table, for people.
    #[default]
    Table,
    /// Pretty JSON, for scripts.
    Json,
}

impl OutputFormat {
    fn list<T: Serialize + Tabled>(self, rows: &[T]) -> String {
        match self {
            Self::Table if rows.is_empty() => "No results found.".into(),
            Self::Table => Table::new(rows).to_string(),
            Self::Json => serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".into()),
        }
    }

    fn item<T: Serialize + std::fmt::Debug>(self, item: &T) -> String {
        match self {
            Self::Table => format!("{item:#?}"),
            Self::Json => serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".into()),
        }
    }
}

pub fn print_list<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) {
    println!("{}", format.list(rows));
}

pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    println!("{}", format.item(item));
}

pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

pub fn print_warning(msg: &str) {
    eprintln!("⚠ {msg}");
}
