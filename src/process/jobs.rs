use std::os::unix::process::ExitStatusExt;
use std::process::{Child, ExitStatus};

/// Outstanding background children, in the order they were launched.
///
/// The table never blocks: finished children are discovered through
/// `try_wait` during the once-per-prompt sweep and removed exactly once.
#[derive(Default)]
pub struct JobTable {
    children: Vec<Child>,
}

impl JobTable {
    pub fn new() -> Self {
        JobTable {
            children: Vec::new(),
        }
    }

    pub fn register(&mut self, child: Child) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Non-blocking pass over every tracked child, reporting and dropping
    /// the ones that have terminated. Children still running stay tracked
    /// for the next sweep.
    pub fn sweep(&mut self) {
        self.children.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                println!(
                    "background pid {} is done: exit value {}",
                    child.id(),
                    exit_value(&status)
                );
                false
            }
            Ok(None) => true,
            // A wait error means the child is already gone; stop tracking it.
            Err(_) => false,
        });
    }
}

fn exit_value(status: &ExitStatus) -> i32 {
    status
        .code()
        .or_else(|| status.signal())
        .unwrap_or_default()
}
