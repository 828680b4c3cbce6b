//! Printing of parsed records.
//!
//! Labelled text goes to stdout with colored labels when the terminal
//! supports color; `--json` switches to machine readable output.

use depot_core::{ChangeRecord, Record};
use owo_colors::OwoColorize;
use serde_json::Value;
use std::fmt::Display;
use supports_color::Stream;

fn color_enabled() -> bool {
    supports_color::on(Stream::Stdout).is_some()
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    if color_enabled() {
        println!("{}: {}", label.bright_cyan(), value);
    } else {
        println!("{}: {}", label, value);
    }
}

/// Print a section heading
pub fn print_section(text: &str) {
    if color_enabled() {
        println!("{}", text.bold());
    } else {
        println!("{}", text);
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints every field of a record as `key: value`.
pub fn print_record(record: &Record) {
    for (key, value) in record.iter() {
        print_info(key, value);
    }
}

pub fn print_change(change: &ChangeRecord) {
    print_record(&change.fields);
    print_section("files:");
    if change.files.is_empty() {
        println!("  (none)");
    }
    for file in &change.files {
        match &file.action {
            Some(action) => println!("  {} {}", file.file, action),
            None => println!("  {}", file.file),
        }
    }
}

/// Prints raw p4 output, or wraps it as `{"output": ...}` for `--json`.
pub fn print_raw(text: &str, json: bool) -> anyhow::Result<()> {
    if json {
        print_json(&serde_json::json!({ "output": Value::String(text.to_string()) }))
    } else {
        print!("{}", text);
        Ok(())
    }
}
