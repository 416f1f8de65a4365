use crate::object::{GameObject, ObjectId};
use crate::player::Inventory;
use crate::puzzle::{EnigmaPuzzle, PuzzleError};

/// Result of forwarding a click to an enigma.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnigmaHit {
    /// First click of a pair; the cell is now selected.
    Selected,
    /// A swap was applied and the puzzle is still unsolved.
    Swapped,
    /// A swap left the puzzle solved. `reward` is the item handed to the
    /// player by this hit, if the enigma still held one.
    Solved { reward: Option<ObjectId> },
}

/// Capability hosting a sliding puzzle inside a world object.
///
/// Solving the puzzle releases the optional reward into the solver's inventory.
#[derive(Debug)]
pub struct Enigma {
    puzzle: EnigmaPuzzle,
    reward: Option<Box<GameObject>>,
}

impl Enigma {
    pub fn new(puzzle: EnigmaPuzzle) -> Self {
        Self {
            puzzle,
            reward: None,
        }
    }

    #[must_use]
    pub fn with_reward(mut self, reward: GameObject) -> Self {
        self.reward = Some(Box::new(reward));
        self
    }

    pub fn puzzle(&self) -> &EnigmaPuzzle {
        &self.puzzle
    }

    pub fn puzzle_mut(&mut self) -> &mut EnigmaPuzzle {
        &mut self.puzzle
    }

    /// Id of the reward still waiting to be handed out.
    pub fn reward(&self) -> Option<ObjectId> {
        self.reward.as_ref().map(|reward| reward.id())
    }

    /// Forwards a click to the puzzle and pays out the reward once it is solved.
    pub fn hit(&mut self, index: usize, inventory: &mut Inventory) -> Result<EnigmaHit, PuzzleError> {
        if !self.puzzle.hit(index)? {
            return Ok(EnigmaHit::Selected);
        }
        if !self.puzzle.is_solved() {
            return Ok(EnigmaHit::Swapped);
        }

        let reward = self.reward.take().map(|reward| {
            let id = reward.id();
            tracing::info!(puzzle = self.puzzle.name(), reward = %reward, "enigma solved");
            inventory.add(*reward);
            id
        });
        Ok(EnigmaHit::Solved { reward })
    }
}
