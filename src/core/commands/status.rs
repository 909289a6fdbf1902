use super::{Builtin, BuiltinAction, CommandError};
use crate::core::state::ShellState;
use std::io::{self, Write};

/// Reports the last foreground status. The value is the exit code of the
/// last foreground command, or the signal number if that command was
/// signal-terminated.
#[derive(Clone)]
pub struct StatusCommand;

impl Default for StatusCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for StatusCommand {
    fn execute(
        &self,
        _args: &[String],
        state: &mut ShellState,
    ) -> Result<BuiltinAction, CommandError> {
        writeln!(io::stdout(), "exit status: {}", state.last_status())?;
        Ok(BuiltinAction::Handled)
    }
}
