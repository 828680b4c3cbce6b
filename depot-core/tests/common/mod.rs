// depot-core/tests/common/mod.rs

// Shared helpers for tests that need a real process standing in for p4.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Routes `log` output through the test harness; safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Writes an executable `sh` script named `name` into `dir`.
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("write script");
    let mut perms = fs::metadata(&path).expect("script metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod script");
    path
}

/// A fake `p4` that answers the subcommands the client issues. Stdin sent
/// to `change -i` is saved to `<dir>/stdin.txt`; every argument vector is
/// appended to `<dir>/args.txt`.
pub fn write_fake_p4(dir: &Path) -> PathBuf {
    let body = format!(
        r#"echo "$@" >> '{dir}/args.txt'
case "$1" in
  info)
    printf 'User name: alice\nClient name: alice-ws\nClient root: /home/alice/ws\nServer address: perforce:1666\n'
    ;;
  change)
    case "$2" in
      -i)
        cat > '{dir}/stdin.txt'
        if grep -q '^Change:new' '{dir}/stdin.txt'; then
          echo "Change 77 created."
        else
          echo "Change updated."
        fi
        ;;
      -o)
        printf '# A Perforce Change Specification.\n#\n#  Change:  The change number.\n\n'
        printf 'Change:\t%s\n\nClient:\talice-ws\n\nStatus:\tpending\n\n' "$3"
        printf 'Description:\n\tWork in progress\n\nFiles:\n\t//depot/main/a.c\t# edit\n\t//depot/main/b.c\t# add\n'
        ;;
      -d)
        echo "Change $3 deleted."
        ;;
    esac
    ;;
  revert)
    echo "revert: no such file(s)." >&2
    ;;
  *)
    shift_cmd="$1"
    shift
    for f in "$@"; do echo "$f - opened for $shift_cmd"; done
    ;;
esac"#,
        dir = dir.display()
    );
    write_script(dir, "p4", &body)
}
