//! Authentication command handlers.

mod login;

pub use login::{LoginCommand, LoginHandler};
