use std::fmt;

pub mod jobs;
pub mod launcher;
pub mod signal;

pub use jobs::JobTable;
pub use launcher::ProcessLauncher;

#[derive(Debug)]
pub enum ProcessError {
    SignalSetup(String),
    Io(std::io::Error),
}

impl From<std::io::Error> for ProcessError {
    fn from(e: std::io::Error) -> Self {
        ProcessError::Io(e)
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::SignalSetup(msg) => write!(f, "Signal setup error: {}", msg),
            ProcessError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}
