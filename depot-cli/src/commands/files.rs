use anyhow::bail;
use depot_core::{CommandRunner, FileCommand, OptionValue, P4Client, Request};

use crate::cli::FileArgs;
use crate::output::print_raw;

/// Builds the option request for a file command from its arguments.
pub fn build_request(args: &FileArgs) -> anyhow::Result<Request> {
    let mut request = Request::new();
    if let Some(changelist) = args.changelist {
        request.set("changelist", changelist);
    }
    if let Some(filetype) = &args.filetype {
        request.set("filetype", filetype.as_str());
    }
    if args.preview {
        request.set("preview", true);
    }
    if args.unchanged {
        request.set("unchanged", true);
    }
    if args.keep_local {
        request.set("keepLocal", true);
    }
    for extra in &args.extra {
        let Some((name, value)) = extra.split_once('=') else {
            bail!("Invalid --set '{}': expected NAME=VALUE", extra);
        };
        request.set(name.trim(), parse_value(value));
    }
    if !args.files.is_empty() {
        request.set("files", args.files.clone());
    }
    Ok(request)
}

/// Values are read as JSON (`12`, `true`, `["a","b"]`, `"quoted"`);
/// anything that is not valid JSON is passed as plain text.
fn parse_value(raw: &str) -> OptionValue {
    serde_json::from_str(raw).unwrap_or_else(|_| OptionValue::Text(raw.to_string()))
}

/// Execute a pass-through file command and print p4's output
pub fn run_file_command<R: CommandRunner>(
    client: &P4Client<R>,
    command: FileCommand,
    args: &FileArgs,
    json: bool,
) -> anyhow::Result<()> {
    let request = build_request(args)?;
    let output = client.file_command(command, &request)?;
    print_raw(&output, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_order_and_types() {
        let args = FileArgs {
            files: vec!["a.c".into(), "b.c".into()],
            changelist: Some(12),
            filetype: Some("text+x".into()),
            preview: true,
            extra: vec!["force=true".into(), "_output=5".into()],
            ..Default::default()
        };
        let request = build_request(&args).unwrap();

        let names: Vec<&str> = request.iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec!["changelist", "filetype", "preview", "force", "_output", "files"]
        );
        assert_eq!(request.get("_output"), Some(&OptionValue::Number(5)));
        assert_eq!(request.get("force"), Some(&OptionValue::Bool(true)));
    }

    #[test]
    fn test_extra_values_read_as_json() {
        assert_eq!(parse_value("-3"), OptionValue::Number(-3));
        assert_eq!(parse_value("false"), OptionValue::Bool(false));
        assert_eq!(
            parse_value(r#"["//depot/a", "//depot/b"]"#),
            OptionValue::List(vec!["//depot/a".into(), "//depot/b".into()])
        );
        assert_eq!(parse_value(r#""12""#), OptionValue::Text("12".into()));
        assert_eq!(parse_value("text+x"), OptionValue::Text("text+x".into()));
        assert_eq!(
            parse_value("18446744073709551615"),
            OptionValue::Text("18446744073709551615".into())
        );
    }

    #[test]
    fn test_bad_extra_is_rejected() {
        let args = FileArgs {
            extra: vec!["novalue".into()],
            ..Default::default()
        };
        assert!(build_request(&args).is_err());
    }
}
