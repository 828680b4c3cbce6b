//! Option translator: turns a [`Request`] into a [`CommandPlan`].
//!
//! Each request entry is looked up in the [`OptionSchema`] and handed to the
//! handler for its category. Unknown names and values of the wrong shape are
//! dropped without an error; they are logged at debug level so the drop is
//! at least visible with `RUST_LOG=debug`.

use crate::options::schema::{OptionCategory, OptionDescriptor, OptionSchema};
use crate::options::value::{OptionValue, Request};

/// Flag telling p4 to read a spec form from standard input.
pub const STDIN_FLAG: &str = "-i";

/// The three ordered parts of a p4 invocation derived from a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandPlan {
    pub flags: Vec<String>,
    pub positionals: Vec<String>,
    pub stdin_lines: Vec<String>,
}

impl CommandPlan {
    /// Flags followed by positionals, in invocation order.
    pub fn args(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .chain(self.positionals.iter())
            .map(String::as_str)
    }

    pub fn has_stdin(&self) -> bool {
        !self.stdin_lines.is_empty()
    }

    fn push_stdin_flag(&mut self) {
        if !self.flags.iter().any(|f| f == STDIN_FLAG) {
            self.flags.push(STDIN_FLAG.to_string());
        }
    }
}

/// Translates `request` against `schema`.
///
/// ```rust
/// use depot_core::options::{OptionSchema, Request, translate};
///
/// let request = Request::new()
///     .with("changelist", 7i64)
///     .with("files", "//depot/main/a.c");
/// let plan = translate(&request, OptionSchema::builtin());
///
/// assert_eq!(plan.flags, vec!["-c", "7"]);
/// assert_eq!(plan.positionals, vec!["//depot/main/a.c"]);
/// ```
pub fn translate(request: &Request, schema: &OptionSchema) -> CommandPlan {
    let mut plan = CommandPlan::default();

    for (name, value) in request.iter() {
        let Some(descriptor) = schema.get(name) else {
            log::debug!("Ignoring unknown option '{}'", name);
            continue;
        };

        if descriptor.category != OptionCategory::Unary
            && !descriptor.expected_type.accepts(value)
        {
            log::debug!(
                "Ignoring option '{}': expected {:?}, got {:?}",
                name,
                descriptor.expected_type,
                value
            );
            continue;
        }

        match descriptor.category {
            OptionCategory::Unary => push_unary(&mut plan, descriptor),
            OptionCategory::Mixed => push_mixed(&mut plan, descriptor, value),
            OptionCategory::Stdin => push_stdin(&mut plan, descriptor, value),
            OptionCategory::Positional => push_positional(&mut plan, value),
        }
    }

    plan
}

fn flag_of(descriptor: &OptionDescriptor) -> &str {
    descriptor.flag.as_deref().unwrap_or_default()
}

fn push_unary(plan: &mut CommandPlan, descriptor: &OptionDescriptor) {
    plan.flags.push(flag_of(descriptor).to_string());
}

fn push_mixed(plan: &mut CommandPlan, descriptor: &OptionDescriptor, value: &OptionValue) {
    plan.flags.push(flag_of(descriptor).to_string());
    plan.flags.push(value.to_string());
}

fn push_stdin(plan: &mut CommandPlan, descriptor: &OptionDescriptor, value: &OptionValue) {
    plan.stdin_lines.push(format!("{}{}", flag_of(descriptor), value));
    plan.push_stdin_flag();
}

fn push_positional(plan: &mut CommandPlan, value: &OptionValue) {
    plan.positionals.extend(value.to_list());
}
