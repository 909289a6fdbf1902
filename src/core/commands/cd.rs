use super::{Builtin, BuiltinAction, CommandError};
use crate::core::state::ShellState;
use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for CdCommand {
    fn execute(
        &self,
        args: &[String],
        _state: &mut ShellState,
    ) -> Result<BuiltinAction, CommandError> {
        if args.len() > 1 {
            return Err(CommandError::InvalidArguments(
                "cd takes at most one argument".to_string(),
            ));
        }

        let target = match args.first() {
            Some(path) => PathBuf::from(path),
            None => match dirs::home_dir() {
                Some(home) => home,
                None => return Ok(BuiltinAction::Handled),
            },
        };

        // A nonexistent target leaves the working directory and the last
        // status untouched, with no message.
        let _ = env::set_current_dir(&target);
        Ok(BuiltinAction::Handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cd_home() {
        let cmd = CdCommand::new();
        let mut state = ShellState::default();
        assert_eq!(
            cmd.execute(&[], &mut state).expect("cd never fails"),
            BuiltinAction::Handled
        );
        assert_eq!(
            env::current_dir().expect("cwd readable"),
            dirs::home_dir().expect("home dir known")
        );
    }

    #[test]
    fn test_cd_absolute_path() {
        let cmd = CdCommand::new();
        let mut state = ShellState::default();
        assert_eq!(
            cmd.execute(&["/tmp".to_string()], &mut state)
                .expect("cd never fails"),
            BuiltinAction::Handled
        );
        // /tmp may be a symlink; compare canonicalized forms.
        assert_eq!(
            env::current_dir()
                .expect("cwd readable")
                .canonicalize()
                .expect("cwd canonicalizes"),
            PathBuf::from("/tmp").canonicalize().expect("/tmp exists")
        );
    }

    #[test]
    fn test_cd_invalid_path_is_silently_ignored() {
        let cmd = CdCommand::new();
        let mut state = ShellState::default();
        state.set_last_status(3);

        let before = env::current_dir().expect("cwd readable");
        let result = cmd.execute(&["/nonexistent/venule/path".to_string()], &mut state);

        assert_eq!(result.expect("cd never fails"), BuiltinAction::Handled);
        assert_eq!(env::current_dir().expect("cwd readable"), before);
        assert_eq!(state.last_status(), 3);
    }

    #[test]
    fn test_cd_rejects_extra_arguments() {
        let cmd = CdCommand::new();
        let mut state = ShellState::default();
        let result = cmd.execute(&["a".to_string(), "b".to_string()], &mut state);
        assert!(matches!(result, Err(CommandError::InvalidArguments(_))));
    }
}
