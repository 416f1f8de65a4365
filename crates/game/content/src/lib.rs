//! Static game content and loaders.
//!
//! This crate houses the room registry (the fixed map every session starts
//! from) and, behind the `loaders` feature, the TOML configuration loader.
//!
//! Content builds `escape-core` values directly; nothing here mutates a world
//! once it has been handed out.

pub mod rooms;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use rooms::{BEDROOM, ContentError, GARDEN, HALLWAY, KITCHEN, create_rooms, new_world};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult};
