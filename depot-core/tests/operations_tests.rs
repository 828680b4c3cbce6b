// depot-core/tests/operations_tests.rs

#![cfg(unix)]

mod common;

use common::{init_logging, write_fake_p4};
use depot_core::{ChangeOptions, ClientConfig, CoreError, FileAction, P4Client, Request};
use std::fs;
use tempfile::tempdir;

fn client_for(dir: &std::path::Path) -> P4Client {
    init_logging();
    let p4 = write_fake_p4(dir);
    let config = ClientConfig::builder()
        .p4_binary(p4.to_string_lossy())
        .build();
    P4Client::new(config).unwrap()
}

#[test]
fn test_info_end_to_end() {
    let dir = tempdir().unwrap();
    let info = client_for(dir.path()).info().unwrap();

    assert_eq!(info.get("userName"), Some("alice"));
    assert_eq!(info.get("clientName"), Some("alice-ws"));
    assert_eq!(info.get("clientRoot"), Some("/home/alice/ws"));
    assert_eq!(info.get("serverAddress"), Some("perforce:1666"));
}

#[test]
fn test_create_then_view() {
    let dir = tempdir().unwrap();
    let client = client_for(dir.path());

    let number = client
        .changelist()
        .create(&ChangeOptions::new().description("Add parser"))
        .unwrap();
    assert_eq!(number, 77);

    let stdin = fs::read_to_string(dir.path().join("stdin.txt")).unwrap();
    assert_eq!(stdin, "Change:new\nDescription:Add parser\n");

    let change = client
        .changelist()
        .view(&ChangeOptions::new().changelist(number))
        .unwrap();
    assert_eq!(change.change(), Some("77"));
    assert_eq!(change.description(), Some("Work in progress"));
    assert_eq!(
        change.files,
        vec![
            FileAction {
                file: "//depot/main/a.c".into(),
                action: Some("edit".into()),
            },
            FileAction {
                file: "//depot/main/b.c".into(),
                action: Some("add".into()),
            },
        ]
    );
}

#[test]
fn test_edit_and_delete() {
    let dir = tempdir().unwrap();
    let client = client_for(dir.path());

    client
        .changelist()
        .edit(&ChangeOptions::new().changelist(12).description("Reworded"))
        .unwrap();
    let stdin = fs::read_to_string(dir.path().join("stdin.txt")).unwrap();
    assert_eq!(stdin, "Change:12\nDescription:Reworded\n");

    client
        .changelist()
        .delete(&ChangeOptions::new().changelist(12))
        .unwrap();

    let args = fs::read_to_string(dir.path().join("args.txt")).unwrap();
    assert_eq!(args, "change -i\nchange -d 12\n");
}

#[test]
fn test_missing_changelist_never_runs_p4() {
    let dir = tempdir().unwrap();
    let client = client_for(dir.path());

    let err = client
        .changelist()
        .view(&ChangeOptions::new())
        .unwrap_err();
    assert!(matches!(err, CoreError::MissingParameter(_)));
    assert!(!dir.path().join("args.txt").exists());
}

#[test]
fn test_file_commands() {
    let dir = tempdir().unwrap();
    let client = client_for(dir.path());

    let request = Request::new()
        .with("files", vec!["//depot/main/a.c", "//depot/main/b.c"])
        .with("bogus", "dropped");
    let out = client.edit(&request).unwrap();
    assert_eq!(
        out,
        "//depot/main/a.c - opened for edit\n//depot/main/b.c - opened for edit\n"
    );

    let err = client.revert(&request).unwrap_err();
    assert_eq!(err.stderr(), Some("revert: no such file(s).\n"));
}
