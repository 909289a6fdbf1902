use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::process::JobTable;

/// Interpreter-wide state: the last foreground status, the background
/// job table, and the foreground-only flag shared with the SIGTSTP
/// handler. Everything here is owned by the single main loop; only the
/// flag is ever touched from signal context.
pub struct ShellState {
    last_status: i32,
    jobs: JobTable,
    foreground_only: Arc<AtomicBool>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(Arc::new(AtomicBool::new(false)))
    }
}

impl ShellState {
    pub fn new(foreground_only: Arc<AtomicBool>) -> Self {
        ShellState {
            last_status: 0,
            jobs: JobTable::new(),
            foreground_only,
        }
    }

    /// Last foreground exit code, or the signal number if the last
    /// foreground command was signal-terminated.
    pub fn last_status(&self) -> i32 {
        self.last_status
    }

    pub fn set_last_status(&mut self, status: i32) {
        self.last_status = status;
    }

    pub fn jobs_mut(&mut self) -> &mut JobTable {
        &mut self.jobs
    }

    pub fn foreground_only(&self) -> bool {
        self.foreground_only.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ShellState::default();
        assert_eq!(state.last_status(), 0);
        assert!(!state.foreground_only());
    }

    #[test]
    fn test_flag_is_shared_with_handler_side() {
        let flag = Arc::new(AtomicBool::new(false));
        let state = ShellState::new(flag.clone());

        flag.store(true, Ordering::SeqCst);
        assert!(state.foreground_only());

        flag.fetch_xor(true, Ordering::SeqCst);
        assert!(!state.foreground_only());
    }

    #[test]
    fn test_last_status_roundtrip() {
        let mut state = ShellState::default();
        state.set_last_status(11);
        assert_eq!(state.last_status(), 11);
    }
}
