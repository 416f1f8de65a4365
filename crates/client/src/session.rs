//! Headless game session: feeds parsed commands to a [`World`] and narrates
//! the outcome as plain text.
use std::io::{self, BufRead, Write};

use anyhow::Result;
use escape_core::{EnigmaHit, EnigmaPuzzle, GameError, GameObject, Interaction, ObjectId, World};

use crate::command::{self, Command};

/// What the loop should do after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
    Escaped,
}

pub struct Session {
    world: World,
    /// Enigma currently receiving `hit` commands.
    open_enigma: Option<ObjectId>,
}

impl Session {
    pub fn new(world: World) -> Self {
        Self {
            world,
            open_enigma: None,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn open_enigma(&self) -> Option<ObjectId> {
        self.open_enigma
    }

    /// Reads commands from `input` until the player quits, escapes, or input ends.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<Flow> {
        self.describe_room(&mut out)?;
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            let flow = match line.parse::<Command>() {
                Ok(command) => {
                    tracing::debug!(?command, "command received");
                    self.execute(command, &mut out)?
                }
                Err(command::CommandError::Empty) => Flow::Continue,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    Flow::Continue
                }
            };
            if flow != Flow::Continue {
                return Ok(flow);
            }
            write!(out, "> ")?;
            out.flush()?;
        }

        tracing::info!("input closed");
        Ok(Flow::Quit)
    }

    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        match command {
            Command::Look => self.describe_room(out)?,
            Command::Help => writeln!(out, "{}", command::help_text())?,
            Command::Quit => {
                writeln!(out, "You give up for now.")?;
                return Ok(Flow::Quit);
            }
            Command::Inventory => self.describe_inventory(out)?,
            Command::Move(direction) => {
                if self.world.step_player(direction) {
                    writeln!(out, "You step {direction} to {}.", self.world.player().position())?;
                } else {
                    writeln!(out, "Something blocks your way {direction}.")?;
                }
            }
            Command::Use(name) => return self.use_object(name.as_deref(), out),
            Command::Hit(index) => self.hit(index, out)?,
        }
        Ok(Flow::Continue)
    }

    fn use_object(&mut self, name: Option<&str>, out: &mut impl Write) -> io::Result<Flow> {
        let target = match name {
            Some(name) => self
                .world
                .current_room()
                .find_by_name(name)
                .map(GameObject::id),
            None => self.world.target_in_reach(),
        };
        let Some(target) = target else {
            match name {
                Some(name) => writeln!(out, "There is no {name} here.")?,
                None => writeln!(out, "Nothing is within reach.")?,
            }
            return Ok(Flow::Continue);
        };

        match self.world.interact(target) {
            Ok(Interaction::PickedUp { item }) => {
                let name = self
                    .world
                    .player()
                    .inventory()
                    .get(item)
                    .map_or("item", GameObject::name);
                writeln!(out, "You pick up the {name}.")?;
            }
            Ok(Interaction::Travelled { from, to }) => {
                self.open_enigma = None;
                let from = self.world.room(from).map_or("?", |room| room.name());
                let to = self.world.room(to).map_or("?", |room| room.name());
                writeln!(out, "You leave the {from} for the {to}.")?;
                if self.world.has_escaped() {
                    writeln!(out, "Fresh air. You escaped!")?;
                    tracing::info!("player escaped");
                    return Ok(Flow::Escaped);
                }
                self.describe_room(out)?;
            }
            Ok(Interaction::EnigmaOpened { object }) => {
                self.open_enigma = Some(object);
                if let Some(puzzle) = self.puzzle(object) {
                    writeln!(
                        out,
                        "The {} is a {}x{} sliding puzzle. Swap cells with 'hit <index>'.",
                        puzzle.name(),
                        puzzle.rows(),
                        puzzle.cols()
                    )?;
                    write_grid(out, puzzle)?;
                }
            }
            Err(err) => report(out, &err)?,
        }
        Ok(Flow::Continue)
    }

    fn hit(&mut self, index: usize, out: &mut impl Write) -> io::Result<()> {
        let Some(object) = self.open_enigma else {
            return writeln!(out, "No enigma is open. Use one first.");
        };

        match self.world.hit_enigma(object, index) {
            Ok(EnigmaHit::Selected) => writeln!(out, "Cell {index} selected.")?,
            Ok(EnigmaHit::Swapped) => {
                if let Some(puzzle) = self.puzzle(object) {
                    write_grid(out, puzzle)?;
                }
            }
            Ok(EnigmaHit::Solved { reward }) => {
                if let Some(puzzle) = self.puzzle(object) {
                    write_grid(out, puzzle)?;
                }
                writeln!(out, "The pieces click into place.")?;
                let reward = reward.and_then(|id| self.world.player().inventory().get(id));
                if let Some(reward) = reward {
                    writeln!(out, "A {} drops into your hands.", reward.name())?;
                }
                self.open_enigma = None;
            }
            Err(err) => report(out, &err)?,
        }
        Ok(())
    }

    fn puzzle(&self, object: ObjectId) -> Option<&EnigmaPuzzle> {
        self.world
            .current_room()
            .object(object)
            .and_then(GameObject::enigma)
            .map(|enigma| enigma.puzzle())
    }

    fn describe_room(&self, out: &mut impl Write) -> io::Result<()> {
        let room = self.world.current_room();
        writeln!(out, "You are in the {} ({}).", room.name(), room.dimensions())?;

        let mut objects: Vec<_> = room.game_objects().collect();
        objects.sort_by(|a, b| a.name().cmp(b.name()));
        for object in objects {
            match object.position() {
                Some(position) => writeln!(out, "  {} at {position}", object.name())?,
                None => writeln!(out, "  {}", object.name())?,
            }
        }

        writeln!(out, "You stand at {}.", self.world.player().position())?;
        if let Some(target) = self.world.target_in_reach().and_then(|id| room.object(id)) {
            writeln!(out, "Within reach: {}.", target.name())?;
        }
        Ok(())
    }

    fn describe_inventory(&self, out: &mut impl Write) -> io::Result<()> {
        let inventory = self.world.player().inventory();
        if inventory.is_empty() {
            return writeln!(out, "Your pockets are empty.");
        }
        for item in inventory.iter() {
            match item.pickable() {
                Some(pickable) => writeln!(out, "  {}: {}", item.name(), pickable.description())?,
                None => writeln!(out, "  {}", item.name())?,
            }
        }
        Ok(())
    }
}

fn write_grid(out: &mut impl Write, puzzle: &EnigmaPuzzle) -> io::Result<()> {
    let cols = puzzle.cols();
    for (row, pieces) in puzzle.pieces().iter().enumerate() {
        let cells: Vec<_> = pieces.iter().map(|piece| format!("{piece:>3}")).collect();
        let indices: Vec<_> = (0..cols).map(|col| format!("{:>3}", row * cols + col)).collect();
        writeln!(out, " {}    | cells {}", cells.join(""), indices.join(""))?;
    }
    if let Some(selected) = puzzle.pending_selection() {
        writeln!(out, " selected: {selected}")?;
    }
    Ok(())
}

fn report(out: &mut impl Write, err: &(impl GameError + std::fmt::Display)) -> io::Result<()> {
    if err.severity().is_internal() {
        tracing::error!(code = err.error_code(), "{}", err);
    } else {
        tracing::warn!(code = err.error_code(), severity = %err.severity(), "{}", err);
    }
    writeln!(out, "{err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use escape_core::GameConfig;

    fn session() -> Session {
        Session::new(escape_content::new_world(&GameConfig::with_seed(7)).unwrap())
    }

    fn exec(session: &mut Session, line: &str) -> (Flow, String) {
        let mut out = Vec::new();
        let flow = session.execute(line.parse().unwrap(), &mut out).unwrap();
        (flow, String::from_utf8(out).unwrap())
    }

    #[test]
    fn look_lists_bedroom_objects() {
        let mut session = session();
        let (flow, text) = exec(&mut session, "look");
        assert_eq!(flow, Flow::Continue);
        assert!(text.contains("bedroom"));
        assert!(text.contains("painting"));
        assert!(text.contains("bedroom door"));
    }

    #[test]
    fn hit_without_open_enigma_is_refused() {
        let mut session = session();
        let (_, text) = exec(&mut session, "hit 0");
        assert!(text.contains("No enigma is open"));
    }

    #[test]
    fn using_the_painting_opens_it() {
        let mut session = session();
        let (_, text) = exec(&mut session, "use painting");
        assert!(text.contains("3x3 sliding puzzle"));
        assert!(session.open_enigma().is_some());

        let (_, text) = exec(&mut session, "hit 0");
        assert!(text.contains("Cell 0 selected."));
        let (_, text) = exec(&mut session, "hit 9");
        assert!(text.contains("out of range"));
    }

    #[test]
    fn locked_door_is_reported_not_fatal() {
        let mut session = session();
        let (flow, text) = exec(&mut session, "use bedroom door");
        assert_eq!(flow, Flow::Continue);
        assert!(text.contains("inventory"));
        assert_eq!(session.world().current_room().name(), "bedroom");
    }

    #[test]
    fn pick_up_then_inventory() {
        let mut session = session();
        let (_, text) = exec(&mut session, "use diary");
        assert!(text.contains("You pick up the diary."));
        let (_, text) = exec(&mut session, "inventory");
        assert!(text.contains("diary: Pages full of crossed-out dates."));
    }

    #[test]
    fn run_stops_on_quit_and_eof() {
        let mut out = Vec::new();
        let flow = session()
            .run("dance\nlook\nquit\nlook\n".as_bytes(), &mut out)
            .unwrap();
        assert_eq!(flow, Flow::Quit);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("unknown command 'dance'"));
        assert!(text.contains("You give up for now."));

        let flow = session().run("".as_bytes(), Vec::new()).unwrap();
        assert_eq!(flow, Flow::Quit);
    }
}
