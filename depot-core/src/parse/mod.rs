// ============================================================================
// depot-core/src/parse/mod.rs
// ============================================================================
//
// OUTPUT PARSING: Recovering Records from p4 Text Reports
//
// p4 prints its reports as loosely structured `Label: value` text. This module
// turns the two report shapes the client consumes into records:
//
// - `p4 info`: one `Label: value` per line (see `info`)
// - `p4 change -o`: blank-line separated paragraphs with a nested list of
//   file/action pairs (see `change`)
//
// Labels are normalised to lower camel case keys ("Client root" ->
// "clientRoot") by `fields::field_key`.

pub mod change;
pub mod fields;
pub mod info;
pub mod record;

pub use change::{
    ACTION_SENTINEL, mark_file_actions, parse_change, parse_created_change, strip_comment_lines,
};
pub use fields::{field_key, split_field};
pub use info::parse_info;
pub use record::{ChangeRecord, FileAction, Record};
