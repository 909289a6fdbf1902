use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rustyline::{config::Configurer, DefaultEditor};

mod executor;

use crate::{
    core::{commands::BuiltinSet, state::ShellState},
    error::ShellError,
    flags::Flags,
    process::{signal, ProcessLauncher},
};

use executor::{LineHandler, LineOutcome};

/// The two-character prompt marker. Also written by the SIGTSTP handler
/// after its mode notice, so the user always sees a fresh prompt.
const PROMPT: &str = ": ";

pub struct Shell {
    pub(crate) editor: DefaultEditor,
    pub(crate) state: ShellState,
    pub(crate) builtins: BuiltinSet,
    pub(crate) launcher: ProcessLauncher,
    pub(crate) flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let mut editor = DefaultEditor::new()?;
        editor.set_auto_add_history(true);

        // The flag is shared with the SIGTSTP handler; everything else in
        // ShellState belongs to the main loop alone.
        let foreground_only = Arc::new(AtomicBool::new(false));
        signal::ignore_interrupts()?;
        signal::install_mode_toggle(foreground_only.clone())?;

        Ok(Shell {
            editor,
            state: ShellState::new(foreground_only),
            builtins: BuiltinSet::new(),
            launcher: ProcessLauncher::new(),
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            // Reap finished background children before prompting again.
            self.state.jobs_mut().sweep();

            match self.editor.readline(PROMPT) {
                Ok(line) => match self.handle_line(&line) {
                    Ok(LineOutcome::Continue) => {}
                    Ok(LineOutcome::Exit) => break,
                    Err(e) => {
                        if !self.flags.is_set("quiet") {
                            eprintln!("{}", e);
                        }
                    }
                },
                Err(rustyline::error::ReadlineError::Interrupted) => continue,
                Err(rustyline::error::ReadlineError::Eof) => break,
                Err(e) => {
                    if !self.flags.is_set("quiet") {
                        eprintln!("Error: {}", e);
                    }
                    continue;
                }
            }
        }
        Ok(())
    }
}
