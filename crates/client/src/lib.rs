//! Headless text client for the escape-room game.
//!
//! The binary is the composition root: it reads [`ClientConfig`] from the
//! environment, installs file logging, builds the world from the room
//! registry and hands stdin/stdout to a [`Session`].

pub mod command;
pub mod config;
pub mod logging;
pub mod session;

pub use command::{Command, CommandError};
pub use config::ClientConfig;
pub use session::{Flow, Session};
