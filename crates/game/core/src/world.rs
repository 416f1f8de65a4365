//! Session world: the fixed room list plus the player.
//!
//! `World` is the only place where an action crosses containers (an item
//! leaving a room for the inventory, the player leaving one room for another),
//! so it owns the dispatch from a targeted object to its capabilities and keeps
//! the rooms' player-presence flags in sync.
use crate::capability::{EnigmaHit, InteractError, pickable};
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::object::{Capabilities, GameObject, ObjectId};
use crate::player::{Direction, Player};
use crate::room::{Room, RoomId};

/// Outcome of a successful [`World::interact`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// The item left the room and is now in the inventory.
    PickedUp { item: ObjectId },
    /// The player walked through a door.
    Travelled { from: RoomId, to: RoomId },
    /// The object hosts a puzzle; the controller should hand input to it.
    EnigmaOpened { object: ObjectId },
}

/// Errors raised while assembling a world.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("world has no rooms")]
    NoRooms,

    #[error("room at index {index} carries id {id}")]
    RoomIdMismatch { index: usize, id: RoomId },

    #[error("room {0} is not registered")]
    UnknownRoom(RoomId),
}

impl GameError for WorldError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoRooms => "WORLD_NO_ROOMS",
            Self::RoomIdMismatch { .. } => "WORLD_ROOM_ID_MISMATCH",
            Self::UnknownRoom(_) => "WORLD_UNKNOWN_ROOM",
        }
    }
}

#[derive(Debug)]
pub struct World {
    rooms: Vec<Room>,
    player: Player,
    exit: Option<RoomId>,
    step: f64,
    reach: f64,
}

impl World {
    /// Assembles a world from the registry's rooms and the player.
    ///
    /// `rooms[i]` must carry `RoomId(i)` and the player must start in a known room.
    pub fn new(rooms: Vec<Room>, player: Player, config: &GameConfig) -> Result<Self, WorldError> {
        if rooms.is_empty() {
            return Err(WorldError::NoRooms);
        }
        if let Some((index, room)) = rooms
            .iter()
            .enumerate()
            .find(|(index, room)| room.id() != RoomId(*index))
        {
            return Err(WorldError::RoomIdMismatch {
                index,
                id: room.id(),
            });
        }

        let mut world = Self {
            rooms,
            player,
            exit: None,
            step: config.step,
            reach: config.reach,
        };
        let start = world.player.current_room();
        world
            .rooms
            .get_mut(start.0)
            .ok_or(WorldError::UnknownRoom(start))?
            .set_player_present(true);
        Ok(world)
    }

    /// Marks `exit` as the room that ends the game once entered.
    pub fn with_exit(mut self, exit: RoomId) -> Result<Self, WorldError> {
        if self.room(exit).is_none() {
            return Err(WorldError::UnknownRoom(exit));
        }
        self.exit = Some(exit);
        Ok(self)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn room_by_name(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.name() == name)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Room the player currently stands in.
    pub fn current_room(&self) -> &Room {
        // The player only ever enters rooms validated against `rooms`.
        &self.rooms[self.player.current_room().0]
    }

    pub fn has_escaped(&self) -> bool {
        self.exit == Some(self.player.current_room())
    }

    /// Object within interaction reach of the player, if any.
    pub fn target_in_reach(&self) -> Option<ObjectId> {
        self.current_room()
            .object_in_reach(self.player.bounds(), self.reach)
            .map(GameObject::id)
    }

    /// Moves the player one step, unless that would leave the room bounds.
    pub fn step_player(&mut self, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        let target = self
            .player
            .position()
            .offset(dx * self.step, dy * self.step);
        if !self
            .current_room()
            .is_position_valid(target, self.player.dimensions())
        {
            tracing::debug!(%direction, %target, "step rejected at room bounds");
            return false;
        }
        self.player.set_position(target);
        true
    }

    /// Dispatches a player action to `object` in the current room.
    ///
    /// Capabilities are tried in order: pickable, door, enigma. Objects with none
    /// of them reject the action with [`InteractError::NotInteractable`].
    pub fn interact(&mut self, object: ObjectId) -> Result<Interaction, InteractError> {
        let from = self.player.current_room();
        let room_count = self.rooms.len();
        let room = &mut self.rooms[from.0];
        let capabilities = room
            .object(object)
            .map(GameObject::capabilities)
            .ok_or(InteractError::ObjectNotFound { object, room: from })?;

        if capabilities.contains(Capabilities::PICKABLE) {
            pickable::pick_up(room, self.player.inventory_mut(), object)?;
            return Ok(Interaction::PickedUp { item: object });
        }

        if capabilities.contains(Capabilities::DOOR) {
            let door = room
                .object_mut(object)
                .and_then(GameObject::door_mut)
                .ok_or(InteractError::MissingCapability {
                    object,
                    required: Capabilities::DOOR,
                })?;
            let destination = door.destination();
            if destination.0 >= room_count {
                return Err(InteractError::UnknownRoom { room: destination });
            }
            let position = self.player.position();
            let to = door.on_action(&mut self.player).inspect_err(|err| {
                tracing::debug!(door = %object, %err, "door rejected the player");
            })?;
            let (arrival, size) = (self.player.position(), self.player.dimensions());
            let fits = self
                .rooms
                .get(to.0)
                .is_some_and(|room| room.is_position_valid(arrival, size));
            if !fits {
                self.player.enter_room(from, Some(position));
                tracing::warn!(door = %object, room = %to, "door arrival outside room bounds");
                return Err(InteractError::ArrivalOutOfBounds { object, room: to });
            }
            self.sync_presence(from, to);
            tracing::info!(
                from = self.rooms[from.0].name(),
                to = self.rooms[to.0].name(),
                "player switched rooms"
            );
            return Ok(Interaction::Travelled { from, to });
        }

        if capabilities.contains(Capabilities::ENIGMA) {
            return Ok(Interaction::EnigmaOpened { object });
        }

        Err(InteractError::NotInteractable { object })
    }

    /// Unlocks a door in the current room with the player's inventory.
    pub fn unlock_door(&mut self, object: ObjectId) -> Result<(), InteractError> {
        let from = self.player.current_room();
        let door = self.rooms[from.0]
            .object_mut(object)
            .ok_or(InteractError::ObjectNotFound { object, room: from })?
            .door_mut()
            .ok_or(InteractError::MissingCapability {
                object,
                required: Capabilities::DOOR,
            })?;
        door.unlock(self.player.inventory())?;
        tracing::debug!(door = %object, "door unlocked");
        Ok(())
    }

    /// Forwards a puzzle click to the enigma hosted by `object`.
    pub fn hit_enigma(&mut self, object: ObjectId, index: usize) -> Result<EnigmaHit, InteractError> {
        let from = self.player.current_room();
        let enigma = self.rooms[from.0]
            .object_mut(object)
            .ok_or(InteractError::ObjectNotFound { object, room: from })?
            .enigma_mut()
            .ok_or(InteractError::MissingCapability {
                object,
                required: Capabilities::ENIGMA,
            })?;
        Ok(enigma.hit(index, self.player.inventory_mut())?)
    }

    fn sync_presence(&mut self, from: RoomId, to: RoomId) {
        self.rooms[from.0].set_player_present(false);
        self.rooms[to.0].set_player_present(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{BasicDoor, Enigma, KeyGatedDoor, Pickable};
    use crate::geometry::{Dimensions, Point2D};
    use crate::puzzle::EnigmaPuzzle;

    struct Fixture {
        world: World,
        key: ObjectId,
        door: ObjectId,
        back: ObjectId,
        vase: ObjectId,
    }

    fn fixture() -> Fixture {
        let mut study = Room::new(RoomId(0), "study", Dimensions::new(128.0, 128.0), "study.tmx");
        let mut vault = Room::new(RoomId(1), "vault", Dimensions::new(128.0, 128.0), "vault.tmx");

        let key = GameObject::placed(Point2D::new(10.0, 10.0), "key", Dimensions::TILE)
            .with_pickable(Pickable::new("iron key", 1));
        let door = GameObject::placed(Point2D::new(100.0, 10.0), "vault door", Dimensions::TILE)
            .with_door(KeyGatedDoor::new(BasicDoor::locked(RoomId(1)), key.id()));
        let back = GameObject::placed(Point2D::new(10.0, 10.0), "study door", Dimensions::TILE)
            .with_door(BasicDoor::unlocked(RoomId(0)));
        let vase = GameObject::placed(Point2D::new(60.0, 60.0), "vase", Dimensions::TILE);
        let ids = (key.id(), door.id(), back.id(), vase.id());

        study.add_game_object(key);
        study.add_game_object(door);
        study.add_game_object(vase);
        vault.add_game_object(back);

        let player = Player::new(RoomId(0), Point2D::new(40.0, 40.0), Dimensions::TILE);
        let world = World::new(vec![study, vault], player, &GameConfig::default())
            .unwrap()
            .with_exit(RoomId(1))
            .unwrap();
        Fixture {
            world,
            key: ids.0,
            door: ids.1,
            back: ids.2,
            vase: ids.3,
        }
    }

    #[test]
    fn start_room_is_marked_present() {
        let fx = fixture();
        assert!(fx.world.current_room().is_player_present());
        assert!(!fx.world.room(RoomId(1)).unwrap().is_player_present());
        assert!(!fx.world.has_escaped());
    }

    #[test]
    fn rejects_malformed_room_lists() {
        let player = || Player::new(RoomId(0), Point2D::ORIGIN, Dimensions::TILE);
        let config = GameConfig::default();
        assert_eq!(
            World::new(Vec::new(), player(), &config).unwrap_err(),
            WorldError::NoRooms
        );

        let stray = Room::new(RoomId(3), "stray", Dimensions::TILE, "");
        assert_eq!(
            World::new(vec![stray], player(), &config).unwrap_err(),
            WorldError::RoomIdMismatch {
                index: 0,
                id: RoomId(3)
            }
        );
    }

    #[test]
    fn locked_door_keeps_player_in_room() {
        let mut fx = fixture();
        let err = fx.world.interact(fx.door).unwrap_err();
        assert_eq!(err, InteractError::Door(crate::DoorError::MissingKey { required: fx.key }));
        assert!(err.severity().is_recoverable());
        assert_eq!(fx.world.player().current_room(), RoomId(0));
    }

    #[test]
    fn key_opens_the_gated_door() {
        let mut fx = fixture();
        let before = fx.world.current_room().len();

        assert_eq!(
            fx.world.interact(fx.key),
            Ok(Interaction::PickedUp { item: fx.key })
        );
        assert_eq!(fx.world.current_room().len(), before - 1);
        assert!(fx.world.player().inventory().contains(fx.key));

        fx.world.unlock_door(fx.door).unwrap();
        assert_eq!(
            fx.world.interact(fx.door),
            Ok(Interaction::Travelled {
                from: RoomId(0),
                to: RoomId(1)
            })
        );
        assert!(fx.world.has_escaped());
        assert!(fx.world.current_room().is_player_present());
        assert!(!fx.world.room(RoomId(0)).unwrap().is_player_present());

        // Objects of the previous room are out of reach now.
        assert!(matches!(
            fx.world.interact(fx.door),
            Err(InteractError::ObjectNotFound { .. })
        ));
        assert!(fx.world.interact(fx.back).is_ok());
        assert_eq!(fx.world.player().current_room(), RoomId(0));
    }

    #[test]
    fn door_without_arrival_cannot_strand_the_player() {
        let mut hall = Room::new(RoomId(0), "hall", Dimensions::new(400.0, 400.0), "hall.tmx");
        let closet = Room::new(RoomId(1), "closet", Dimensions::new(64.0, 64.0), "closet.tmx");
        let door = GameObject::placed(Point2D::new(300.0, 300.0), "closet door", Dimensions::TILE)
            .with_door(BasicDoor::unlocked(RoomId(1)));
        let door_id = door.id();
        hall.add_game_object(door);

        let start = Point2D::new(300.0, 300.0);
        let player = Player::new(RoomId(0), start, Dimensions::TILE);
        let mut world = World::new(vec![hall, closet], player, &GameConfig::default()).unwrap();

        let err = world.interact(door_id).unwrap_err();
        assert_eq!(
            err,
            InteractError::ArrivalOutOfBounds {
                object: door_id,
                room: RoomId(1)
            }
        );
        assert_eq!(err.error_code(), "INTERACT_ARRIVAL_OUT_OF_BOUNDS");
        assert_eq!(world.player().current_room(), RoomId(0));
        assert_eq!(world.player().position(), start);
        assert!(world.current_room().is_player_present());
        assert!(!world.room(RoomId(1)).unwrap().is_player_present());
        assert!(world.step_player(Direction::Left));
    }

    #[test]
    fn plain_objects_are_not_interactable() {
        let mut fx = fixture();
        let err = fx.world.interact(fx.vase).unwrap_err();
        assert_eq!(err, InteractError::NotInteractable { object: fx.vase });
        assert_eq!(err.error_code(), "INTERACT_NOT_SUPPORTED");
        assert!(matches!(
            fx.world.unlock_door(fx.vase),
            Err(InteractError::MissingCapability { .. })
        ));
    }

    #[test]
    fn steps_stay_inside_room_bounds() {
        let mut fx = fixture();
        let start = fx.world.player().position();
        assert!(fx.world.step_player(Direction::Right));
        assert_eq!(
            fx.world.player().position(),
            start.offset(GameConfig::DEFAULT_STEP, 0.0)
        );

        let mut moved = 0;
        while fx.world.step_player(Direction::Up) {
            moved += 1;
        }
        assert!(moved > 0);
        assert!(fx.world.player().position().y >= 0.0);
    }

    #[test]
    fn target_in_reach_finds_nearby_object() {
        let mut fx = fixture();
        assert_eq!(fx.world.target_in_reach(), Some(fx.vase));
        for _ in 0..5 {
            fx.world.step_player(Direction::Up);
        }
        assert_eq!(fx.world.target_in_reach(), None);
    }

    #[test]
    fn enigma_reward_lands_in_inventory() {
        let mut fx = fixture();
        let reward = GameObject::new(None, "token", Dimensions::TILE)
            .with_pickable(Pickable::new("", 2));
        let reward_id = reward.id();
        let puzzle = EnigmaPuzzle::with_seed(1, 2, "strip", 0).unwrap();
        let frame = GameObject::placed(Point2D::new(60.0, 10.0), "frame", Dimensions::TILE)
            .with_enigma(Enigma::new(puzzle).with_reward(reward));
        let frame_id = frame.id();
        fx.world.rooms[0].add_game_object(frame);

        assert_eq!(
            fx.world.interact(frame_id),
            Ok(Interaction::EnigmaOpened { object: frame_id })
        );
        // 1x2 starts solved; one swap breaks it, swapping back pays out.
        assert_eq!(fx.world.hit_enigma(frame_id, 0), Ok(EnigmaHit::Selected));
        assert_eq!(fx.world.hit_enigma(frame_id, 1), Ok(EnigmaHit::Swapped));
        fx.world.hit_enigma(frame_id, 1).unwrap();
        assert_eq!(
            fx.world.hit_enigma(frame_id, 0),
            Ok(EnigmaHit::Solved {
                reward: Some(reward_id)
            })
        );
        assert!(fx.world.player().inventory().contains(reward_id));
        assert!(matches!(
            fx.world.hit_enigma(frame_id, 5),
            Err(InteractError::Puzzle(_))
        ));
    }
}
