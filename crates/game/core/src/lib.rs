//! World model and puzzle rules for the escape-room game.
//!
//! `escape-core` defines rooms, the objects inside them, the capabilities
//! those objects expose to the player (pickable items, doors, key-gated doors,
//! enigmas) and the sliding-tile puzzle state machine. It performs no I/O:
//! rendering, input mapping and asset loading live in the crates built on top.
//! Every cross-container mutation flows through [`World`].
pub mod capability;
pub mod config;
pub mod error;
pub mod geometry;
pub mod object;
pub mod player;
pub mod puzzle;
pub mod room;
pub mod world;

pub use capability::{
    BasicDoor, Door, DoorError, Enigma, EnigmaHit, InteractError, KeyGatedDoor, Pickable,
};
pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError};
pub use geometry::{Aabb, Dimensions, Point2D};
pub use object::{Capabilities, GameObject, ObjectId};
pub use player::{Direction, Inventory, Player};
pub use puzzle::{EnigmaPuzzle, PieceId, PuzzleError, PuzzleRng};
pub use room::{Room, RoomId};
pub use world::{Interaction, World, WorldError};
