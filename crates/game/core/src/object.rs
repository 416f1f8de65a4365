//! World entities.
//!
//! A [`GameObject`] is a single concrete record. Behaviour is attached through
//! optional capabilities (pickable, door, enigma) instead of a type hierarchy,
//! so any object can expose none, one or several of them.
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use bitflags::bitflags;

use crate::capability::{Door, Enigma, Pickable};
use crate::geometry::{Aabb, Dimensions, Point2D};

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a [`GameObject`].
///
/// Ids are allocated once per constructed object and never reused, so two
/// objects with identical fields are still distinct entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(u64);

impl ObjectId {
    fn allocate() -> Self {
        Self(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

bitflags! {
    /// Capabilities exposed by an object.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Capabilities: u8 {
        const PICKABLE = 1 << 0;
        const DOOR     = 1 << 1;
        const ENIGMA   = 1 << 2;
    }
}

/// Base world entity with optional placement and attached capabilities.
///
/// Not `Clone`: duplicating an object would duplicate an entity.
#[derive(Debug)]
pub struct GameObject {
    id: ObjectId,
    position: Option<Point2D>,
    name: String,
    dimensions: Dimensions,
    pickable: Option<Pickable>,
    door: Option<Box<dyn Door>>,
    enigma: Option<Enigma>,
}

impl GameObject {
    /// Creates a plain object with no capabilities.
    pub fn new(position: Option<Point2D>, name: impl Into<String>, dimensions: Dimensions) -> Self {
        Self {
            id: ObjectId::allocate(),
            position,
            name: name.into(),
            dimensions,
            pickable: None,
            door: None,
            enigma: None,
        }
    }

    /// Shorthand for an object placed at `position`.
    pub fn placed(position: Point2D, name: impl Into<String>, dimensions: Dimensions) -> Self {
        Self::new(Some(position), name, dimensions)
    }

    #[must_use]
    pub fn with_pickable(mut self, pickable: Pickable) -> Self {
        self.pickable = Some(pickable);
        self
    }

    #[must_use]
    pub fn with_door(mut self, door: impl Door + 'static) -> Self {
        self.door = Some(Box::new(door));
        self
    }

    #[must_use]
    pub fn with_enigma(mut self, enigma: Enigma) -> Self {
        self.enigma = Some(enigma);
        self
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn position(&self) -> Option<Point2D> {
        self.position
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Bounding box in world space, `None` for unplaced objects.
    pub fn bounds(&self) -> Option<Aabb> {
        self.position.map(|origin| Aabb::new(origin, self.dimensions))
    }

    pub fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::empty();
        caps.set(Capabilities::PICKABLE, self.pickable.is_some());
        caps.set(Capabilities::DOOR, self.door.is_some());
        caps.set(Capabilities::ENIGMA, self.enigma.is_some());
        caps
    }

    pub fn pickable(&self) -> Option<&Pickable> {
        self.pickable.as_ref()
    }

    pub fn door(&self) -> Option<&dyn Door> {
        self.door.as_deref()
    }

    pub fn door_mut(&mut self) -> Option<&mut (dyn Door + 'static)> {
        self.door.as_deref_mut()
    }

    pub fn enigma(&self) -> Option<&Enigma> {
        self.enigma.as_ref()
    }

    pub fn enigma_mut(&mut self) -> Option<&mut Enigma> {
        self.enigma.as_mut()
    }
}

impl fmt::Display for GameObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.id)
    }
}
