use crate::error::CommitError;
use std::process::{Command as GitCommand, ExitStatus, Output};

/// The version-control operations the commit pipeline needs.
pub trait Vcs {
    /// Staged changes as a unified diff. Empty when nothing is staged.
    fn staged_diff(&self) -> Result<String, CommitError>;

    /// Create a commit with `message` as its full text.
    fn commit(&self, message: &str) -> Result<(), CommitError>;
}

/// `Vcs` backed by the `git` executable in the current directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCli;

impl Vcs for GitCli {
    fn staged_diff(&self) -> Result<String, CommitError> {
        // One line of context keeps the prompt small.
        let args = ["diff", "--cached", "--unified=1"];
        let output = git_output(&args).map_err(CommitError::VcsInvocation)?;

        if !output.status.success() {
            return Err(CommitError::VcsInvocation(combined_output(&output)));
        }

        let diff = String::from_utf8_lossy(&output.stdout).to_string();
        log::info!("Collected staged diff ({} bytes)", diff.len());
        Ok(diff)
    }

    fn commit(&self, message: &str) -> Result<(), CommitError> {
        log::info!("Running git commit");

        // Inherit stdio so hooks and git's own summary reach the terminal.
        let status = GitCommand::new("git")
            .args(["commit", "-m", message])
            .status()
            .map_err(|e| CommitError::VcsCommit(format!("failed to run git commit: {e}")))?;

        if !status.success() {
            return Err(CommitError::VcsCommit(format!(
                "git commit {}",
                describe_exit(status)
            )));
        }

        Ok(())
    }
}

/// Run a git command and capture its output.
fn git_output(args: &[&str]) -> Result<Output, String> {
    GitCommand::new("git")
        .args(args)
        .output()
        .map_err(|e| format!("failed to run git {:?}: {e}", args))
}

/// Stdout followed by stderr, the way a terminal would have shown them.
fn combined_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).to_string();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    if text.trim().is_empty() {
        format!("git {}", describe_exit(output.status))
    } else {
        text
    }
}

fn describe_exit(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}
