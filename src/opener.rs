//! Launching links in an external program.

use anyhow::{Context, Result, bail};
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// Split a command line into an argv vector.
///
/// This uses Unix shell-style quoting rules. Callers should treat the returned
/// vector as an executable + arguments (not as a shell script).
///
/// # Errors
///
/// Returns an error if the line is empty, has unbalanced quotes, or contains
/// no words.
pub fn parse_command_line(command_line: &str) -> Result<Vec<String>> {
    let trimmed = command_line.trim();
    if trimmed.is_empty() {
        bail!("Command line is empty");
    }

    let argv = shell_words::split(trimmed).context("Failed to parse command line")?;
    if argv.is_empty() {
        bail!("Command line produced no argv items");
    }

    Ok(argv)
}

/// Argv for opening `url` with the configured command.
///
/// # Errors
///
/// Returns an error if `command_line` cannot be parsed.
pub fn build_open_argv(command_line: &str, url: &str) -> Result<Vec<String>> {
    let mut argv = parse_command_line(command_line)?;
    argv.push(url.to_string());
    Ok(argv)
}

/// Open `url` with `command_line` in the background.
///
/// The child is detached from the terminal's stdio and reaped on a
/// background thread.
///
/// # Errors
///
/// Returns an error if the command cannot be parsed or spawned.
pub fn open_url(command_line: &str, url: &str) -> Result<()> {
    let argv = build_open_argv(command_line, url)?;
    let (program, args) = argv
        .split_first()
        .context("Command line produced no argv items")?;
    debug!(program, url, "Opening link");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to run {program}"))?;
    info!(url, "Opened link");

    std::thread::spawn(move || match child.wait() {
        Ok(status) => debug!(%status, "Opener exited"),
        Err(e) => warn!(error = %e, "Failed to wait for opener"),
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_line_rejects_empty() {
        let result = parse_command_line("   ");
        assert!(result.is_err());
        if let Err(error) = result {
            let message = format!("{error}");
            assert!(message.contains("Command line is empty"));
        }
    }

    #[test]
    fn test_parse_command_line_splits_args() -> Result<(), Box<dyn std::error::Error>> {
        let argv = parse_command_line(r#"firefox --new-tab "my profile""#)?;
        assert_eq!(argv, vec!["firefox", "--new-tab", "my profile"]);
        Ok(())
    }

    #[test]
    fn test_parse_command_line_comment_is_empty() {
        let result = parse_command_line("# comment only");
        assert!(result.is_err());
        if let Err(error) = result {
            let message = format!("{error}");
            assert!(message.contains("Command line produced no argv items"));
        }
    }

    #[test]
    fn test_parse_command_line_unbalanced_quote() {
        assert!(parse_command_line("open \"unterminated").is_err());
    }

    #[test]
    fn test_build_open_argv_appends_url() -> Result<(), Box<dyn std::error::Error>> {
        let argv = build_open_argv("xdg-open", "https://time.is")?;
        assert_eq!(argv, vec!["xdg-open", "https://time.is"]);
        Ok(())
    }

    #[test]
    fn test_open_url_missing_program_fails() {
        let result = open_url("vocabtape-no-such-opener-binary", "https://time.is");
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_open_url_spawns() -> Result<(), Box<dyn std::error::Error>> {
        open_url("true", "https://time.is")?;
        Ok(())
    }
}
