//! Door capability.
//!
//! [`BasicDoor`] holds the lock flag and the destination. [`KeyGatedDoor`]
//! decorates any other door with an item requirement: it owns the base door,
//! delegates everything but `unlock` to it, and consults the acting player's
//! inventory before letting the base door open.
use std::fmt;

use super::error::DoorError;
use crate::geometry::Point2D;
use crate::object::ObjectId;
use crate::player::{Inventory, Player};
use crate::room::RoomId;

/// Connection between two rooms, gated by a lock.
pub trait Door: fmt::Debug + Send + Sync {
    /// Room the player ends up in after walking through.
    fn destination(&self) -> RoomId;

    fn is_locked(&self) -> bool;

    /// Item the player must carry before the door will unlock, if any.
    fn required_item(&self) -> Option<ObjectId> {
        None
    }

    /// Attempts the locked → unlocked transition.
    ///
    /// `inventory` belongs to the player attempting the unlock.
    fn unlock(&mut self, inventory: &Inventory) -> Result<(), DoorError>;

    /// Moves `player` to [`destination`](Door::destination).
    ///
    /// Rejected with [`DoorError::Locked`] while the door is locked; the player
    /// is left untouched in that case.
    fn switch_rooms(&self, player: &mut Player) -> Result<RoomId, DoorError>;

    /// Player interaction: try to walk through.
    fn on_action(&mut self, player: &mut Player) -> Result<RoomId, DoorError> {
        self.switch_rooms(player)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BasicDoor {
    destination: RoomId,
    locked: bool,
    arrival: Option<Point2D>,
}

impl BasicDoor {
    pub fn new(destination: RoomId, locked: bool) -> Self {
        Self {
            destination,
            locked,
            arrival: None,
        }
    }

    pub fn unlocked(destination: RoomId) -> Self {
        Self::new(destination, false)
    }

    pub fn locked(destination: RoomId) -> Self {
        Self::new(destination, true)
    }

    /// Where the player is placed in the destination room.
    #[must_use]
    pub fn with_arrival(mut self, arrival: Point2D) -> Self {
        self.arrival = Some(arrival);
        self
    }
}

impl Door for BasicDoor {
    fn destination(&self) -> RoomId {
        self.destination
    }

    fn is_locked(&self) -> bool {
        self.locked
    }

    fn unlock(&mut self, _inventory: &Inventory) -> Result<(), DoorError> {
        self.locked = false;
        Ok(())
    }

    fn switch_rooms(&self, player: &mut Player) -> Result<RoomId, DoorError> {
        if self.locked {
            return Err(DoorError::Locked {
                destination: self.destination,
            });
        }
        player.enter_room(self.destination, self.arrival);
        Ok(self.destination)
    }
}

/// A door that only unlocks while a specific item is in the player's inventory.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyGatedDoor<D = BasicDoor> {
    base: D,
    required: ObjectId,
}

impl<D: Door> KeyGatedDoor<D> {
    pub fn new(base: D, required: ObjectId) -> Self {
        Self { base, required }
    }

    pub fn base(&self) -> &D {
        &self.base
    }
}

impl<D: Door> Door for KeyGatedDoor<D> {
    fn destination(&self) -> RoomId {
        self.base.destination()
    }

    fn is_locked(&self) -> bool {
        self.base.is_locked()
    }

    fn required_item(&self) -> Option<ObjectId> {
        Some(self.required)
    }

    fn unlock(&mut self, inventory: &Inventory) -> Result<(), DoorError> {
        if !inventory.contains(self.required) {
            return Err(DoorError::MissingKey {
                required: self.required,
            });
        }
        self.base.unlock(inventory)
    }

    fn switch_rooms(&self, player: &mut Player) -> Result<RoomId, DoorError> {
        self.base.switch_rooms(player)
    }

    fn on_action(&mut self, player: &mut Player) -> Result<RoomId, DoorError> {
        if self.is_locked() {
            self.unlock(player.inventory())?;
            tracing::info!(key = %self.required, "key-gated door unlocked");
        }
        self.switch_rooms(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Pickable;
    use crate::geometry::Dimensions;
    use crate::object::GameObject;

    fn player() -> Player {
        Player::new(RoomId(0), Point2D::new(32.0, 32.0), Dimensions::TILE)
    }

    fn key() -> GameObject {
        GameObject::new(None, "key", Dimensions::TILE).with_pickable(Pickable::new("brass", 1))
    }

    #[test]
    fn basic_door_rejects_switch_while_locked() {
        let mut door = BasicDoor::locked(RoomId(2));
        let mut player = player();

        let err = door.switch_rooms(&mut player).unwrap_err();
        assert_eq!(
            err,
            DoorError::Locked {
                destination: RoomId(2)
            }
        );
        assert_eq!(player.current_room(), RoomId(0));

        door.unlock(player.inventory()).unwrap();
        assert!(!door.is_locked());
        assert_eq!(door.on_action(&mut player), Ok(RoomId(2)));
        assert_eq!(player.current_room(), RoomId(2));
    }

    #[test]
    fn arrival_point_moves_the_player() {
        let door = BasicDoor::unlocked(RoomId(1)).with_arrival(Point2D::new(100.0, 40.0));
        let mut player = player();
        door.switch_rooms(&mut player).unwrap();
        assert_eq!(player.position(), Point2D::new(100.0, 40.0));
    }

    #[test]
    fn key_gated_door_needs_the_key() {
        let key = key();
        let mut door = KeyGatedDoor::new(BasicDoor::locked(RoomId(3)), key.id());
        let mut player = player();

        assert_eq!(door.destination(), RoomId(3));
        assert_eq!(door.required_item(), Some(key.id()));
        assert_eq!(door.base().required_item(), None);
        assert_eq!(
            door.unlock(player.inventory()),
            Err(DoorError::MissingKey { required: key.id() })
        );
        assert!(door.is_locked());
        assert!(door.on_action(&mut player).is_err());
        assert_eq!(player.current_room(), RoomId(0));

        player.inventory_mut().add(key);
        assert_eq!(door.on_action(&mut player), Ok(RoomId(3)));
        assert!(!door.is_locked());
        assert_eq!(player.current_room(), RoomId(3));
    }

    #[test]
    fn key_gated_door_ignores_lookalike_items() {
        let key = key();
        let lookalike = self::key();
        let mut door = KeyGatedDoor::new(BasicDoor::locked(RoomId(3)), key.id());
        let mut player = player();
        player.inventory_mut().add(lookalike);

        assert!(door.unlock(player.inventory()).is_err());
    }
}
