//! Runs invocations as real child processes.
//!
//! Stdin lines are written from a helper thread while the main thread
//! collects stdout and stderr, so a chatty tool cannot fill its output pipe
//! and stall before reading its input.

use crate::error::{CoreResult, command_failed_error, command_start_error, command_wait_error};
use crate::external::{CommandRunner, Invocation, RawOutput, StdinDelivery};
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

/// [`CommandRunner`] that spawns the configured binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> CoreResult<RawOutput> {
        let command_line = invocation.command_line();
        log::debug!("Running: {}", command_line);

        let mut cmd = Command::new(&invocation.program);
        cmd.arg(&invocation.subcommand)
            .args(invocation.plan.args())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(if invocation.plan.has_stdin() {
                Stdio::piped()
            } else {
                Stdio::null()
            });
        if let Some(dir) = &invocation.cwd {
            cmd.current_dir(dir);
        }

        let mut child = cmd.spawn().map_err(|e| {
            log::error!("Failed to start {}: {}", invocation.program, e);
            command_start_error(&invocation.program, e)
        })?;

        let writer = child.stdin.take().map(|stdin| {
            let lines = invocation.plan.stdin_lines.clone();
            thread::spawn(move || write_stdin_lines(stdin, &lines))
        });

        let output = child
            .wait_with_output()
            .map_err(|e| command_wait_error(&invocation.program, e))?;

        let stdin = match writer {
            Some(handle) => handle.join().unwrap_or(StdinDelivery::ChannelClosed {
                written: 0,
                total: invocation.plan.stdin_lines.len(),
            }),
            None => StdinDelivery::NotRequested,
        };
        if let StdinDelivery::ChannelClosed { written, total } = stdin {
            log::warn!(
                "{} closed its input after {} of {} stdin lines",
                command_line,
                written,
                total
            );
        }

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !stderr.is_empty() || !output.status.success() {
            log::error!("{} failed ({}): {}", command_line, output.status, stderr.trim_end());
            return Err(command_failed_error(&command_line, Some(output.status), stderr));
        }

        Ok(RawOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stdin,
        })
    }
}

/// Writes each line followed by `\n`, then closes the stream by dropping it.
///
/// A write failure (typically a broken pipe because the child already
/// exited) stops delivery and is reported, not raised.
pub fn write_stdin_lines<W: Write>(mut sink: W, lines: &[String]) -> StdinDelivery {
    let total = lines.len();
    for (written, line) in lines.iter().enumerate() {
        if let Err(e) = sink.write_all(format!("{}\n", line).as_bytes()) {
            log_write_failure(&e);
            return StdinDelivery::ChannelClosed { written, total };
        }
    }
    if let Err(e) = sink.flush() {
        log_write_failure(&e);
        return StdinDelivery::ChannelClosed {
            written: total,
            total,
        };
    }
    StdinDelivery::Delivered
}

fn log_write_failure(e: &io::Error) {
    if e.kind() == io::ErrorKind::BrokenPipe {
        log::debug!("stdin pipe closed by child");
    } else {
        log::warn!("Failed writing to child stdin: {}", e);
    }
}
