//! Parser for `p4 change -o` reports.
//!
//! The report is a sequence of blank-line separated paragraphs, each one a
//! `Label:` followed by its value. File lines inside the `Files:` paragraph
//! carry a `#`-prefixed status marker (`\t//depot/a.c\t# edit` or
//! `\t//depot/a.c#3 edit`), and the form opens with `#` comment lines.
//!
//! Preprocessing runs as two passes, in this order:
//!
//! 1. [`mark_file_actions`] rewrites each file line's marker to the
//!    [`ACTION_SENTINEL`], leaving `path@@@action`.
//! 2. [`strip_comment_lines`] drops the comment lines.
//!
//! After pass 1 no file line contains a `#`, so pass 2 can never eat the
//! action text of a file line.

use crate::error::{CoreError, CoreResult};
use crate::parse::fields::{field_key, split_field};
use crate::parse::record::{ChangeRecord, FileAction, Record};
use once_cell::sync::Lazy;
use regex::Regex;

/// Delimiter placed between a file path and its action.
pub const ACTION_SENTINEL: &str = "@@@";

/// Tab-indented depot path, optional separator, `#` marker (with optional
/// revision), then the action text.
static FILE_ACTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(\t+)(//[^\t#\n]*?)[ \t]*#[^ \t\n]*[ \t]*([^\n]*)$")
        .unwrap_or_else(|e| panic!("invalid file action pattern: {}", e))
});

static COMMENT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^#[^\n]*(\n|$)")
        .unwrap_or_else(|e| panic!("invalid comment pattern: {}", e))
});

static DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").unwrap_or_else(|e| panic!("invalid digits pattern: {}", e)));

/// Extracts the changelist number from `change -i` output such as
/// `Change 1234 created.`: the first run of digits anywhere in the text.
pub fn parse_created_change(stdout: &str) -> CoreResult<u64> {
    let digits = DIGITS.find(stdout).ok_or_else(|| {
        CoreError::UnknownOutput(format!("no changelist number in {:?}", stdout.trim()))
    })?;
    digits.as_str().parse::<u64>().map_err(|e| {
        CoreError::UnknownOutput(format!("changelist number '{}': {}", digits.as_str(), e))
    })
}

/// Pass 1: `\t//depot/a.c\t# edit` becomes `\t//depot/a.c@@@edit`.
pub fn mark_file_actions(text: &str) -> String {
    FILE_ACTION_LINE
        .replace_all(text, format!("${{1}}${{2}}{}${{3}}", ACTION_SENTINEL).as_str())
        .into_owned()
}

/// Pass 2: removes every line that starts with `#`, newline included.
pub fn strip_comment_lines(text: &str) -> String {
    COMMENT_LINE.replace_all(text, "").into_owned()
}

/// Parses a changelist view into a [`ChangeRecord`].
pub fn parse_change(text: &str) -> ChangeRecord {
    let normalized = text.replace("\r\n", "\n");
    let marked = mark_file_actions(&normalized);
    let cleaned = strip_comment_lines(&marked);

    let mut fields = Record::new();
    let mut files = None;

    for paragraph in cleaned.split("\n\n") {
        let (label, value) = split_field(paragraph);
        let key = field_key(label);
        if key.is_empty() {
            continue;
        }
        if key == "files" {
            files = Some(parse_file_lines(value));
        } else {
            fields.set(key, value.to_string());
        }
    }

    ChangeRecord {
        fields,
        files: files.unwrap_or_default(),
    }
}

fn parse_file_lines(value: &str) -> Vec<FileAction> {
    value
        .split('\n')
        .map(|line| line.replace('\t', ""))
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut parts = line.split(ACTION_SENTINEL);
            let file = parts.next().unwrap_or_default().to_string();
            let action = parts.next().map(str::to_string);
            FileAction { file, action }
        })
        .collect()
}
