use super::Shell;
use crate::core::commands::BuiltinAction;
use crate::error::ShellError;
use crate::parse::{expand_pid, Invocation};

pub(crate) enum LineOutcome {
    Continue,
    Exit,
}

pub(crate) trait LineHandler {
    fn handle_line(&mut self, line: &str) -> Result<LineOutcome, ShellError>;
}

impl LineHandler for Shell {
    fn handle_line(&mut self, line: &str) -> Result<LineOutcome, ShellError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(LineOutcome::Continue);
        }

        let expanded = expand_pid(trimmed, std::process::id());

        let Some(invocation) = Invocation::parse(&expanded, self.state.foreground_only()) else {
            return Ok(LineOutcome::Continue);
        };

        // Builtins win over same-named external programs.
        if let Some(result) = self.builtins.dispatch(&invocation, &mut self.state) {
            return match result? {
                BuiltinAction::Handled => Ok(LineOutcome::Continue),
                BuiltinAction::Exit => Ok(LineOutcome::Exit),
            };
        }

        self.launcher.launch(&invocation, &mut self.state)?;
        Ok(LineOutcome::Continue)
    }
}
