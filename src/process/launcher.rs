use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::process::{Child, Command, Stdio};

use super::ProcessError;
use crate::core::state::ShellState;
use crate::parse::Invocation;

/// Spawns external commands with the redirection and signal rules the
/// invocation calls for, waiting on foreground children and handing
/// background children to the job table.
#[derive(Clone)]
pub struct ProcessLauncher;

impl Default for ProcessLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }

    pub fn launch(
        &self,
        invocation: &Invocation,
        state: &mut ShellState,
    ) -> Result<(), ProcessError> {
        // Redirect targets are opened before the child exists; a failed
        // open means the target program never runs and the status is 1.
        let Some(stdin) = stdin_for(invocation) else {
            state.set_last_status(1);
            return Ok(());
        };
        let Some(stdout) = stdout_for(invocation) else {
            state.set_last_status(1);
            return Ok(());
        };

        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.arguments[1..])
            .stdin(stdin)
            .stdout(stdout)
            .stderr(Stdio::inherit());

        let foreground = invocation.runs_in_foreground;
        unsafe {
            command.pre_exec(move || {
                // No child ever fields the shell's mode toggle.
                libc::signal(libc::SIGTSTP, libc::SIG_IGN);
                if foreground {
                    // Let the user interrupt a foreground child normally.
                    libc::signal(libc::SIGINT, libc::SIG_DFL);
                } else {
                    libc::signal(libc::SIGINT, libc::SIG_IGN);
                }
                Ok(())
            });
        }

        let child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                println!("{}: command not found", invocation.program);
                state.set_last_status(1);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        if foreground {
            self.wait_foreground(child, state)
        } else {
            println!("Background pid is {}", child.id());
            state.jobs_mut().register(child);
            Ok(())
        }
    }

    /// Blocks until this specific child changes state, then records its
    /// exit code, or the terminating signal number with a notice.
    fn wait_foreground(&self, mut child: Child, state: &mut ShellState) -> Result<(), ProcessError> {
        let status = child.wait()?;
        if let Some(signal) = status.signal() {
            println!("terminated by signal: {}", signal);
            state.set_last_status(signal);
        } else {
            state.set_last_status(status.code().unwrap_or(1));
        }
        Ok(())
    }
}

fn stdin_for(invocation: &Invocation) -> Option<Stdio> {
    match &invocation.input_redirect {
        Some(path) => match File::open(path) {
            Ok(file) => Some(Stdio::from(file)),
            Err(_) => {
                if invocation.runs_in_foreground {
                    println!("{}: no such file or directory", path);
                }
                None
            }
        },
        None if invocation.runs_in_foreground => Some(Stdio::inherit()),
        // A background child with no input file reads from the null device.
        None => Some(Stdio::null()),
    }
}

fn stdout_for(invocation: &Invocation) -> Option<Stdio> {
    match &invocation.output_redirect {
        Some(path) => {
            let opened = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o644)
                .open(path);
            match opened {
                Ok(file) => Some(Stdio::from(file)),
                // Output open failures are silent in both modes.
                Err(_) => None,
            }
        }
        None if invocation.runs_in_foreground => Some(Stdio::inherit()),
        None => Some(Stdio::null()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn launch(line: &str, state: &mut ShellState) {
        let invocation = Invocation::parse(line, false).expect("test line should parse");
        ProcessLauncher::new()
            .launch(&invocation, state)
            .expect("launch should not error");
    }

    #[test]
    fn test_foreground_exit_codes_are_recorded() {
        let mut state = ShellState::default();

        launch("true", &mut state);
        assert_eq!(state.last_status(), 0);

        launch("false", &mut state);
        assert_eq!(state.last_status(), 1);
    }

    #[test]
    fn test_signal_termination_records_signal_number() {
        let mut state = ShellState::default();
        // The child kills itself so the parent observes a signal death.
        let invocation = Invocation {
            program: "sh".to_string(),
            arguments: vec![
                "sh".to_string(),
                "-c".to_string(),
                "kill -9 $$".to_string(),
            ],
            input_redirect: None,
            output_redirect: None,
            runs_in_foreground: true,
        };
        ProcessLauncher::new()
            .launch(&invocation, &mut state)
            .expect("launch should not error");
        assert_eq!(state.last_status(), 9);
    }

    #[test]
    fn test_command_not_found_sets_status_one() {
        let mut state = ShellState::default();
        launch("venule-no-such-program-xyzzy", &mut state);
        assert_eq!(state.last_status(), 1);
        assert!(state.jobs_mut().is_empty());
    }

    #[test]
    fn test_missing_input_file_aborts_before_spawn() {
        let mut state = ShellState::default();
        launch("cat < /nonexistent/venule-input.txt", &mut state);
        assert_eq!(state.last_status(), 1);
    }

    #[test]
    fn test_output_redirect_creates_and_truncates() {
        let mut state = ShellState::default();
        let path = std::env::temp_dir().join(format!("venule-out-{}", std::process::id()));
        let path_str = path.to_string_lossy().into_owned();

        std::fs::write(&path, "stale contents that should vanish").expect("seed file");
        launch(&format!("echo fresh > {}", path_str), &mut state);
        assert_eq!(state.last_status(), 0);

        let written = std::fs::read_to_string(&path).expect("redirected output");
        assert_eq!(written, "fresh\n");
        std::fs::remove_file(&path).expect("cleanup");
    }

    #[test]
    fn test_background_child_is_registered_not_waited() {
        let mut state = ShellState::default();
        launch("true &", &mut state);
        assert_eq!(state.jobs_mut().len(), 1);

        let deadline = Instant::now() + Duration::from_secs(5);
        while !state.jobs_mut().is_empty() && Instant::now() < deadline {
            state.jobs_mut().sweep();
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(state.jobs_mut().is_empty());
    }
}
