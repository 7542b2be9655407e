use std::process::Command;

/// Runs a shell command to completion.
pub trait Executor {
    /// Blocks until the command exits and returns its exit code.
    /// `None` means the command could not be spawned or was killed by a signal.
    fn execute(&mut self, command: &str) -> Option<i32>;
}

/// Executes through the platform shell with inherited stdio.
#[derive(Debug, Default)]
pub struct ShellExecutor;

impl Executor for ShellExecutor {
    fn execute(&mut self, command: &str) -> Option<i32> {
        match shell_command(command).status() {
            Ok(status) => status.code(),
            Err(err) => {
                tracing::debug!(command, error = %err, "failed to spawn shell");
                None
            }
        }
    }
}

#[cfg(unix)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_successful_command() {
        assert_eq!(ShellExecutor.execute("true"), Some(0));
    }

    #[test]
    fn test_exit_code_is_retained() {
        assert_eq!(ShellExecutor.execute("exit 7"), Some(7));
    }

    #[test]
    fn test_missing_program_is_not_an_error() {
        // The shell reports 127; nothing propagates.
        assert_eq!(
            ShellExecutor.execute("gobench-definitely-not-installed-xyz"),
            Some(127)
        );
    }

    #[test]
    fn test_command_runs_to_completion() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("ran");
        let command = format!("sleep 0.05 && touch '{}'", marker.display());
        ShellExecutor.execute(&command);
        assert!(marker.exists());
    }
}
