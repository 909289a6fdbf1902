mod command;
mod expand;

pub use command::Invocation;
pub use expand::expand_pid;
