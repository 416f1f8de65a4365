//! Room registry: the fixed map of a session.
//!
//! ```text
//! bedroom ──(key from the painting enigma)──▶ hallway ◀──▶ kitchen
//!                                                │
//!                       (key from the mosaic enigma in the kitchen)
//!                                                ▼
//!                                              garden (exit)
//! ```
//!
//! The layout is fixed. Only the enigma boards vary, and they are shuffled
//! from seeds derived from [`GameConfig::seed`].
use escape_core::puzzle::puzzle_rng;
use escape_core::{
    BasicDoor, Dimensions, Enigma, EnigmaPuzzle, GameConfig, GameObject, KeyGatedDoor, Pickable,
    Player, Point2D, PuzzleError, Room, RoomId, World, WorldError,
};

pub const BEDROOM: RoomId = RoomId(0);
pub const HALLWAY: RoomId = RoomId(1);
pub const KITCHEN: RoomId = RoomId(2);
pub const GARDEN: RoomId = RoomId(3);

/// Where the player wakes up.
pub const PLAYER_START: Point2D = Point2D::new(120.0, 160.0);

/// Errors raised while building the session's rooms.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to build enigma '{name}': {source}")]
    Puzzle {
        name: &'static str,
        #[source]
        source: PuzzleError,
    },

    #[error("object '{object}' does not fit in room '{room}'")]
    Placement { room: String, object: String },

    #[error(transparent)]
    World(#[from] WorldError),
}

/// Builds the complete, named room list for a new session.
///
/// `rooms[i]` carries `RoomId(i)`; see the module constants.
pub fn create_rooms(config: &GameConfig) -> Result<Vec<Room>, ContentError> {
    let mut bedroom = Room::new(
        BEDROOM,
        "bedroom",
        Dimensions::new(256.0, 256.0),
        "rooms/bedroom.tmx",
    );
    let mut hallway = Room::new(
        HALLWAY,
        "hallway",
        Dimensions::new(384.0, 128.0),
        "rooms/hallway.tmx",
    );
    let mut kitchen = Room::new(
        KITCHEN,
        "kitchen",
        Dimensions::new(256.0, 192.0),
        "rooms/kitchen.tmx",
    );
    let mut garden = Room::new(
        GARDEN,
        "garden",
        Dimensions::new(320.0, 320.0),
        "rooms/garden.tmx",
    );

    // Bedroom: the painting hides the key to the hallway.
    let bedroom_key = GameObject::new(None, "bedroom key", Dimensions::TILE)
        .with_pickable(Pickable::new("A small key with a painted handle.", 1));
    let bedroom_door = GameObject::placed(Point2D::new(232.0, 112.0), "bedroom door", Dimensions::TILE)
        .with_door(KeyGatedDoor::new(
            BasicDoor::locked(HALLWAY).with_arrival(Point2D::new(24.0, 56.0)),
            bedroom_key.id(),
        ));
    let painting = GameObject::placed(Point2D::new(40.0, 0.0), "painting", Dimensions::tiles(2, 1))
        .with_enigma(
            Enigma::new(shuffled_puzzle("painting", 0, config)?).with_reward(bedroom_key),
        );

    fill(
        &mut bedroom,
        [
            plain(16.0, 16.0, "bed", Dimensions::tiles(2, 3)),
            plain(52.0, 16.0, "nightstand", Dimensions::TILE),
            plain(96.0, 16.0, "desk", Dimensions::tiles(3, 2)),
            plain(112.0, 52.0, "chair", Dimensions::TILE),
            plain(200.0, 16.0, "wardrobe", Dimensions::tiles(2, 3)),
            plain(16.0, 200.0, "bookshelf", Dimensions::tiles(3, 2)),
            plain(96.0, 128.0, "rug", Dimensions::tiles(4, 3)),
            plain(144.0, 0.0, "window", Dimensions::tiles(2, 1)),
            plain(176.0, 0.0, "calendar", Dimensions::TILE),
            item(56.0, 100.0, "diary", "Pages full of crossed-out dates.", 2),
            item(200.0, 120.0, "photo", "A faded photo of a garden gate.", 3),
            painting,
            bedroom_door,
        ],
    )?;

    // Kitchen: the mosaic hides the key to the front door.
    let front_key = GameObject::new(None, "front door key", Dimensions::TILE)
        .with_pickable(Pickable::new("A heavy iron key, still warm.", 4));
    let front_door = GameObject::placed(Point2D::new(352.0, 48.0), "front door", Dimensions::TILE)
        .with_door(KeyGatedDoor::new(
            BasicDoor::locked(GARDEN).with_arrival(Point2D::new(152.0, 280.0)),
            front_key.id(),
        ));
    let mosaic = GameObject::placed(Point2D::new(96.0, 0.0), "mosaic", Dimensions::tiles(2, 1))
        .with_enigma(Enigma::new(shuffled_puzzle("mosaic", 1, config)?).with_reward(front_key));

    fill(
        &mut hallway,
        [
            door(8.0, 56.0, "door to bedroom", BEDROOM, Point2D::new(208.0, 112.0)),
            door(184.0, 8.0, "door to kitchen", KITCHEN, Point2D::new(120.0, 160.0)),
            front_door,
            plain(64.0, 8.0, "coat rack", Dimensions::TILE),
            plain(120.0, 96.0, "shoe cabinet", Dimensions::tiles(2, 1)),
            plain(260.0, 8.0, "mirror", Dimensions::TILE),
        ],
    )?;

    fill(
        &mut kitchen,
        [
            door(120.0, 172.0, "door to hallway", HALLWAY, Point2D::new(184.0, 32.0)),
            mosaic,
            plain(16.0, 16.0, "fridge", Dimensions::tiles(2, 2)),
            plain(56.0, 16.0, "stove", Dimensions::tiles(2, 1)),
            plain(112.0, 80.0, "table", Dimensions::tiles(3, 2)),
            item(200.0, 40.0, "recipe card", "Three squares, three rows, three columns.", 5),
        ],
    )?;

    fill(
        &mut garden,
        [
            plain(144.0, 16.0, "gate", Dimensions::tiles(2, 1)),
            plain(40.0, 160.0, "bench", Dimensions::tiles(3, 1)),
            plain(240.0, 200.0, "fountain", Dimensions::tiles(2, 2)),
        ],
    )?;

    Ok(vec![bedroom, hallway, kitchen, garden])
}

/// Builds the session world: all rooms, the player in the bedroom, the garden as exit.
pub fn new_world(config: &GameConfig) -> Result<World, ContentError> {
    let rooms = create_rooms(config)?;
    let player = Player::new(BEDROOM, PLAYER_START, Dimensions::TILE);
    let world = World::new(rooms, player, config)?.with_exit(GARDEN)?;
    tracing::debug!(rooms = world.rooms().len(), seed = config.seed, "world created");
    Ok(world)
}

fn shuffled_puzzle(
    name: &'static str,
    ordinal: u32,
    config: &GameConfig,
) -> Result<EnigmaPuzzle, ContentError> {
    let mut puzzle = EnigmaPuzzle::new(
        config.puzzle_rows,
        config.puzzle_cols,
        name,
        puzzle_rng(config.seed, ordinal),
    )
    .map_err(|source| ContentError::Puzzle { name, source })?;
    puzzle.shuffle_pieces();
    // A board that starts solved would hand out its reward on the first swap pair.
    while puzzle.len() > 1 && puzzle.is_solved() {
        puzzle.shuffle_pieces();
    }
    Ok(puzzle)
}

fn fill<const N: usize>(room: &mut Room, objects: [GameObject; N]) -> Result<(), ContentError> {
    for object in objects {
        let name = object.name().to_owned();
        if !room.add_game_object(object) {
            return Err(ContentError::Placement {
                room: room.name().to_owned(),
                object: name,
            });
        }
    }
    Ok(())
}

fn plain(x: f64, y: f64, name: &str, dimensions: Dimensions) -> GameObject {
    GameObject::placed(Point2D::new(x, y), name, dimensions)
}

fn item(x: f64, y: f64, name: &str, description: &str, item_id: u32) -> GameObject {
    plain(x, y, name, Dimensions::TILE).with_pickable(Pickable::new(description, item_id))
}

fn door(x: f64, y: f64, name: &str, destination: RoomId, arrival: Point2D) -> GameObject {
    plain(x, y, name, Dimensions::TILE)
        .with_door(BasicDoor::unlocked(destination).with_arrival(arrival))
}
