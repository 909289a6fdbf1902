use super::{Builtin, BuiltinAction, CommandError};
use crate::core::state::ShellState;

/// Tells the main loop to stop. Outstanding background children are
/// neither signalled nor waited for; they are inherited by init when the
/// interpreter exits.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for ExitCommand {
    fn execute(
        &self,
        _args: &[String],
        _state: &mut ShellState,
    ) -> Result<BuiltinAction, CommandError> {
        Ok(BuiltinAction::Exit)
    }
}
