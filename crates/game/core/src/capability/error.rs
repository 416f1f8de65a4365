//! Interaction errors.

use crate::error::{ErrorSeverity, GameError};
use crate::object::{Capabilities, ObjectId};
use crate::puzzle::PuzzleError;
use crate::room::RoomId;

/// Rejections raised by door capabilities.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DoorError {
    #[error("door to room {destination} is locked")]
    Locked { destination: RoomId },

    #[error("door needs item {required} in the inventory")]
    MissingKey { required: ObjectId },
}

impl GameError for DoorError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Locked { .. } => "DOOR_LOCKED",
            Self::MissingKey { .. } => "DOOR_MISSING_KEY",
        }
    }
}

/// Errors raised while dispatching a player action to an object.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InteractError {
    #[error("object {object} is not in room {room}")]
    ObjectNotFound { object: ObjectId, room: RoomId },

    #[error("door leads to unregistered room {room}")]
    UnknownRoom { room: RoomId },

    /// The object exposes no capability the player can act on.
    #[error("object {object} does not support interaction")]
    NotInteractable { object: ObjectId },

    /// The door would drop the player outside the destination room.
    #[error("door {object} leads outside the bounds of room {room}")]
    ArrivalOutOfBounds { object: ObjectId, room: RoomId },

    #[error("object {object} lacks capability {required:?}")]
    MissingCapability {
        object: ObjectId,
        required: Capabilities,
    },

    #[error(transparent)]
    Door(#[from] DoorError),

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}

impl GameError for InteractError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ObjectNotFound { .. }
            | Self::NotInteractable { .. }
            | Self::MissingCapability { .. }
            | Self::ArrivalOutOfBounds { .. } => ErrorSeverity::Validation,
            Self::UnknownRoom { .. } => ErrorSeverity::Internal,
            Self::Door(err) => err.severity(),
            Self::Puzzle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ObjectNotFound { .. } => "INTERACT_OBJECT_NOT_FOUND",
            Self::UnknownRoom { .. } => "INTERACT_UNKNOWN_ROOM",
            Self::NotInteractable { .. } => "INTERACT_NOT_SUPPORTED",
            Self::MissingCapability { .. } => "INTERACT_MISSING_CAPABILITY",
            Self::ArrivalOutOfBounds { .. } => "INTERACT_ARRIVAL_OUT_OF_BOUNDS",
            Self::Door(err) => err.error_code(),
            Self::Puzzle(err) => err.error_code(),
        }
    }
}
