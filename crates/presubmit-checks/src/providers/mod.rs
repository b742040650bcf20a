mod command;

pub use command::SystemCommandRunner;
