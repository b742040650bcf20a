mod command_runner;

pub use command_runner::{CommandRunner, CommandSpec, CommandStatus};
