//! Open the file you are editing in a JetBrains-style IDE, at the same line
//! and column, inside the project window that is already open.

pub mod config;
pub mod error;
pub mod ide;
pub mod jump;
pub mod launcher;
pub mod project;
pub mod resolver;

pub use config::Config;
pub use error::JumpError;
pub use ide::IdeTarget;
pub use jump::{JumpRequest, Jumper};
pub use launcher::LaunchCommand;
pub use resolver::Resolver;
