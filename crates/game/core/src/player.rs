//! Player avatar and inventory.
use crate::geometry::{Aabb, Dimensions, Point2D};
use crate::object::{GameObject, ObjectId};
use crate::room::RoomId;

/// Items carried by the player, in pick-up order.
#[derive(Debug, Default)]
pub struct Inventory {
    items: Vec<GameObject>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item`. Adding an object that is already carried is a no-op.
    pub fn add(&mut self, item: GameObject) {
        if !self.contains(item.id()) {
            self.items.push(item);
        }
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<GameObject> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    pub fn get(&self, id: ObjectId) -> Option<&GameObject> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&GameObject> {
        self.items.iter().find(|item| item.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameObject> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Movement input.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset in screen space (y grows downwards).
    pub fn delta(self) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }
}

#[derive(Debug)]
pub struct Player {
    current_room: RoomId,
    position: Point2D,
    dimensions: Dimensions,
    inventory: Inventory,
}

impl Player {
    pub fn new(current_room: RoomId, position: Point2D, dimensions: Dimensions) -> Self {
        Self {
            current_room,
            position,
            dimensions,
            inventory: Inventory::new(),
        }
    }

    pub fn current_room(&self) -> RoomId {
        self.current_room
    }

    pub fn position(&self) -> Point2D {
        self.position
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.dimensions)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Teleports the player into `room`, optionally at `arrival`.
    ///
    /// Room presence flags are synced by the owning [`World`](crate::World).
    pub(crate) fn enter_room(&mut self, room: RoomId, arrival: Option<Point2D>) {
        self.current_room = room;
        if let Some(arrival) = arrival {
            self.position = arrival;
        }
    }

    pub(crate) fn set_position(&mut self, position: Point2D) {
        self.position = position;
    }
}
