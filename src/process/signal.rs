use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::SIGTSTP;
use signal_hook::low_level;

use super::ProcessError;

// Written straight to fd 1 from signal context, prompt marker included.
const ENTER_NOTICE: &[u8] = b"\nEntering foreground-only mode (& is now ignored)\n: ";
const EXIT_NOTICE: &[u8] = b"\nExiting foreground-only mode\n: ";

/// Top-level SIGINT is a no-op so only a foreground child dies to Ctrl-C;
/// the interpreter itself keeps its prompt loop.
pub fn ignore_interrupts() -> Result<(), ProcessError> {
    ctrlc::set_handler(|| {}).map_err(|e| ProcessError::SignalSetup(e.to_string()))
}

/// Registers the SIGTSTP handler that flips the foreground-only flag.
///
/// The handler body is restricted to the flag toggle and write(2) of the
/// fixed notice; every other reaction happens in the main loop by polling
/// the flag.
pub fn install_mode_toggle(flag: Arc<AtomicBool>) -> Result<(), ProcessError> {
    let register_result = unsafe {
        low_level::register(SIGTSTP, move || {
            let was_foreground_only = flag.fetch_xor(true, Ordering::SeqCst);
            let notice = if was_foreground_only {
                EXIT_NOTICE
            } else {
                ENTER_NOTICE
            };
            unsafe {
                libc::write(
                    libc::STDOUT_FILENO,
                    notice.as_ptr() as *const libc::c_void,
                    notice.len(),
                );
            }
        })
    };

    register_result
        .map(|_| ())
        .map_err(|e| ProcessError::SignalSetup(e.to_string()))
}
