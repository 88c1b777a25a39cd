pub mod action;
pub mod command;
pub mod context;
pub mod module;
pub mod route;

pub use action::{Action, NotifyLevel};
pub use command::{parse_command, Command, OpenTarget};
pub use context::Context;
pub use module::Module;
pub use route::{Navigator, Route, Router};
