use std::collections::BTreeMap;

mod cd;
mod exit;
mod status;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use status::StatusCommand;

use crate::core::state::ShellState;
use crate::parse::Invocation;

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    IoError(std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

/// What the caller should do after a builtin ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinAction {
    Handled,
    Exit,
}

pub trait Builtin {
    fn execute(&self, args: &[String], state: &mut ShellState)
        -> Result<BuiltinAction, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Status(StatusCommand),
    Exit(ExitCommand),
}

impl Builtin for CommandType {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
    ) -> Result<BuiltinAction, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, state),
            CommandType::Status(cmd) => cmd.execute(args, state),
            CommandType::Exit(cmd) => cmd.execute(args, state),
        }
    }
}

/// The three reserved command names, checked before any process is
/// spawned. A builtin wins even when an external program of the same
/// name exists on the search path.
pub struct BuiltinSet {
    commands: BTreeMap<String, CommandType>,
}

impl Default for BuiltinSet {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinSet {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd".to_string(), CommandType::Cd(CdCommand::new()));
        commands.insert("status".to_string(), CommandType::Status(StatusCommand::new()));
        commands.insert("exit".to_string(), CommandType::Exit(ExitCommand::new()));
        BuiltinSet { commands }
    }

    /// Runs the builtin named by the invocation, or returns `None` so the
    /// process launcher takes over. A trailing `&` was already consumed by
    /// the parser and is ignored for builtins.
    pub fn dispatch(
        &self,
        invocation: &Invocation,
        state: &mut ShellState,
    ) -> Option<Result<BuiltinAction, CommandError>> {
        let command = self.commands.get(invocation.program.as_str())?;
        Some(command.execute(&invocation.arguments[1..], state))
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Invocation {
        Invocation::parse(line, false).expect("test line should parse")
    }

    #[test]
    fn test_builtin_detection() {
        let builtins = BuiltinSet::new();
        assert!(builtins.is_builtin("cd"));
        assert!(builtins.is_builtin("status"));
        assert!(builtins.is_builtin("exit"));
        assert!(!builtins.is_builtin("ls"));
        assert!(!builtins.is_builtin(""));
    }

    #[test]
    fn test_non_builtin_falls_through() {
        let builtins = BuiltinSet::new();
        let mut state = ShellState::default();
        assert!(builtins.dispatch(&parse("ls -l"), &mut state).is_none());
    }

    #[test]
    fn test_status_is_handled_without_spawning() {
        let builtins = BuiltinSet::new();
        let mut state = ShellState::default();
        state.set_last_status(2);

        let result = builtins
            .dispatch(&parse("status"), &mut state)
            .expect("status is a builtin")
            .expect("status never fails");
        assert_eq!(result, BuiltinAction::Handled);
        // Reporting must not disturb the recorded status.
        assert_eq!(state.last_status(), 2);
    }

    #[test]
    fn test_status_ignores_trailing_ampersand() {
        let builtins = BuiltinSet::new();
        let mut state = ShellState::default();

        let result = builtins
            .dispatch(&parse("status &"), &mut state)
            .expect("status is a builtin")
            .expect("status never fails");
        assert_eq!(result, BuiltinAction::Handled);
    }

    #[test]
    fn test_exit_signals_termination() {
        let builtins = BuiltinSet::new();
        let mut state = ShellState::default();

        let result = builtins
            .dispatch(&parse("exit"), &mut state)
            .expect("exit is a builtin")
            .expect("exit never fails");
        assert_eq!(result, BuiltinAction::Exit);

        let result = builtins
            .dispatch(&parse("exit &"), &mut state)
            .expect("exit is a builtin")
            .expect("exit never fails");
        assert_eq!(result, BuiltinAction::Exit);
    }
}
