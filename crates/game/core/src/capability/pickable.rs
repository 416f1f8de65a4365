use super::error::InteractError;
use crate::object::ObjectId;
use crate::player::Inventory;
use crate::room::Room;

/// Capability of objects the player can carry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pickable {
    description: String,
    item_id: u32,
}

impl Pickable {
    pub fn new(description: impl Into<String>, item_id: u32) -> Self {
        Self {
            description: description.into(),
            item_id,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn item_id(&self) -> u32 {
        self.item_id
    }
}

/// Moves `object` out of `room` and appends it to `inventory`.
///
/// The dispatcher is trusted to only call this for pickable objects of the
/// room the player stands in; the capability itself is not re-checked here.
pub fn pick_up(
    room: &mut Room,
    inventory: &mut Inventory,
    object: ObjectId,
) -> Result<ObjectId, InteractError> {
    let item = room
        .remove_game_object(object)
        .ok_or(InteractError::ObjectNotFound {
            object,
            room: room.id(),
        })?;
    tracing::debug!(item = %item, room = room.name(), "picked up");
    inventory.add(item);
    Ok(object)
}
