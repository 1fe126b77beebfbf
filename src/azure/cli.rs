//! az CLI command execution.
//!
//! Runs az commands as subprocesses and hands their stdout back for JSON
//! parsing. Failures keep the az stderr text so callers can classify them
//! (missing resources report through stderr, not the exit code).

use crate::error::{Error, Result};
use colored::Colorize;
use regex::Regex;
use std::process::Command;
use std::sync::OnceLock;

/// Hard cap on stdout size; a single VNet never comes close.
const MAX_OUTPUT_BYTES: usize = 500_000;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// Run a shell command and return its stdout.
///
/// The command string is split on spaces, with quoted substrings preserved,
/// so resource names with spaces survive intact.
///
/// # Returns
/// * `Ok(String)` - stdout on success
/// * `Err(Error::AzCli)` - nonzero exit (message carries stderr), spawn
///   failure, or oversized/non-UTF-8 output
pub fn run(cmd: &str) -> Result<String> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let cmds: Vec<&str> = split_and_strip(cmd);
    log::trace!("split cmds={:?}", cmds);

    let mut command = Command::new(cmds[0]);
    for arg in cmds.iter().skip(1) {
        command.arg(arg);
    }

    let output = command.output().map_err(|e| {
        log::error!("Command execution failed: {}", e);
        Error::AzCli(format!("failed to execute '{}': {e}", cmds[0]))
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        log::trace!(
            "code={code:?}, status={status}\nstderr=\n{stderr}",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(Error::AzCli(stderr));
    }

    log::debug!("Success cmd: {cmd}");
    log::debug!("Success output.stdout.len(): {}", output.stdout.len());

    if output.stdout.len() > MAX_OUTPUT_BYTES {
        return Err(Error::AzCli(format!(
            "response too large: {} bytes for command: {:?}",
            output.stdout.len(),
            cmds
        )));
    }

    String::from_utf8(output.stdout).map_err(|e| Error::AzCli(format!("invalid UTF-8: {e}")))
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}
