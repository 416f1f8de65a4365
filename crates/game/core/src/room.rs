//! Rooms: bounded containers of game objects.
use std::collections::HashMap;
use std::fmt;

use crate::geometry::{Aabb, Dimensions, Point2D};
use crate::object::{GameObject, ObjectId};

/// Index of a room in the session's room list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// A room of the map.
///
/// # Invariants
///
/// - Every placed object passed [`is_position_valid`](Room::is_position_valid)
///   when it was inserted.
/// - Objects are keyed by identity; the same object is never held twice.
#[derive(Debug)]
pub struct Room {
    id: RoomId,
    name: String,
    dimensions: Dimensions,
    /// Presentation asset for the renderer; never read by the core.
    source: String,
    objects: HashMap<ObjectId, GameObject>,
    player_present: bool,
}

impl Room {
    pub fn new(
        id: RoomId,
        name: impl Into<String>,
        dimensions: Dimensions,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            dimensions,
            source: source.into(),
            objects: HashMap::new(),
            player_present: false,
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn is_player_present(&self) -> bool {
        self.player_present
    }

    pub(crate) fn set_player_present(&mut self, present: bool) {
        self.player_present = present;
    }

    /// Inserts `object`, returning whether the membership changed.
    ///
    /// Objects already present and placed objects outside the room bounds are
    /// ignored. Overlap with other objects is not checked.
    pub fn add_game_object(&mut self, object: GameObject) -> bool {
        if self.objects.contains_key(&object.id()) {
            return false;
        }
        if let Some(position) = object.position() {
            if !self.is_position_valid(position, object.dimensions()) {
                tracing::debug!(
                    room = %self.name,
                    object = %object,
                    %position,
                    "object placement outside room bounds ignored"
                );
                return false;
            }
        }
        self.objects.insert(object.id(), object);
        true
    }

    /// Removes the object with identity `id`; `None` when it is not here.
    pub fn remove_game_object(&mut self, id: ObjectId) -> Option<GameObject> {
        self.objects.remove(&id)
    }

    /// All objects in the room, in no particular order.
    pub fn game_objects(&self) -> impl Iterator<Item = &GameObject> {
        self.objects.values()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    pub fn object(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.get(&id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects.get_mut(&id)
    }

    /// First object named `name`. Names are not unique, so callers that care
    /// should prefer ids.
    pub fn find_by_name(&self, name: &str) -> Option<&GameObject> {
        self.objects.values().find(|object| object.name() == name)
    }

    /// True iff a box of size `dim` anchored at `pos` lies strictly inside the room.
    pub fn is_position_valid(&self, pos: Point2D, dim: Dimensions) -> bool {
        Aabb::new(pos, dim).fits_within(self.dimensions)
    }

    /// Object touched by `actor` once its box is grown by `reach`.
    ///
    /// When several objects qualify the one whose centre is closest wins.
    pub fn object_in_reach(&self, actor: Aabb, reach: f64) -> Option<&GameObject> {
        let area = actor.inflate(reach);
        let center = actor.center();
        self.objects
            .values()
            .filter_map(|object| object.bounds().map(|bounds| (object, bounds)))
            .filter(|(_, bounds)| bounds.intersects(&area))
            .min_by(|(_, a), (_, b)| {
                a.center()
                    .distance_squared(center)
                    .total_cmp(&b.center().distance_squared(center))
            })
            .map(|(object, _)| object)
    }
}
