#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod help;
pub mod session;
pub mod view;

pub use command::{Command, FilterArgs, YearAction};
pub use error::CommandError;
pub use session::{Confirm, Session};
pub use view::render_progress;
