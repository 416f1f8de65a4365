//! Interactable capabilities attached to [`GameObject`](crate::GameObject)s.
//!
//! Capabilities are orthogonal: an object may be pickable, a door, host an
//! enigma, or any combination. [`World::interact`](crate::World::interact) is
//! the uniform entry point that dispatches a player action to whichever
//! capability the targeted object exposes.
mod door;
mod enigma;
mod error;
pub mod pickable;

pub use door::{BasicDoor, Door, KeyGatedDoor};
pub use enigma::{Enigma, EnigmaHit};
pub use error::{DoorError, InteractError};
pub use pickable::Pickable;
