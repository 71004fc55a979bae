pub mod action;
pub mod command;
pub mod context;
pub mod module;
pub mod route;

pub use action::{Action, NavigateTarget, NotifyLevel};
pub use command::{parse_command, Command};
pub use context::Context;
pub use module::Module;
pub use route::Route;
