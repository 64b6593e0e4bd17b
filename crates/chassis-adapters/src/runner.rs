//! External command execution.

use std::io;
use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use chassis_core::application::ApplicationError;
use chassis_core::application::ports::CommandRunner;
use chassis_core::error::ChassisResult;

/// Runs platform build tools as blocking child processes.
///
/// Stdio is inherited so gradle's own progress output reaches the user
/// directly; chassis only interprets the exit status.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> ChassisResult<()> {
        info!(program, ?args, cwd = %cwd.display(), "running");
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => ApplicationError::CommandNotFound {
                    program: program.to_string(),
                },
                _ => ApplicationError::FilesystemError {
                    path: cwd.to_path_buf(),
                    reason: err.to_string(),
                },
            })?;

        if status.success() {
            debug!(program, "command finished");
            return Ok(());
        }
        match status.code() {
            Some(code) => Err(ApplicationError::CommandFailed {
                program: program.to_string(),
                code,
            }
            .into()),
            None => Err(ApplicationError::CommandTerminated {
                program: program.to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn successful_commands_run_in_the_given_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("marker"), "here").unwrap();

        let result = ProcessRunner::new().run("sh", &["-c", "test -f marker"], tmp.path());

        assert!(result.is_ok());
    }

    #[test]
    fn nonzero_exits_carry_the_code() {
        let tmp = TempDir::new().unwrap();

        let err = ProcessRunner::new()
            .run("sh", &["-c", "exit 3"], tmp.path())
            .unwrap_err();

        assert_eq!(err.to_string(), "Command 'sh' exited with status 3");
    }

    #[test]
    fn missing_binaries_are_reported_as_not_found() {
        let tmp = TempDir::new().unwrap();

        let err = ProcessRunner::new()
            .run("chassis-no-such-binary", &[], tmp.path())
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Command 'chassis-no-such-binary' not found"
        );
    }
}
