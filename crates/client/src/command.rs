//! Text commands accepted by the session loop.
use std::str::FromStr;

use escape_core::Direction;
use strum::IntoEnumIterator;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Describe the current room.
    Look,
    Move(Direction),
    /// Act on an object by name, or on whatever is in reach.
    Use(Option<String>),
    /// Click a cell of the open enigma.
    Hit(usize),
    Inventory,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' is not a direction ({choices})", choices = directions())]
    InvalidDirection(String),

    #[error("'{0}' is not a cell index")]
    InvalidIndex(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "look" | "l" => Ok(Self::Look),
            "inventory" | "inv" | "i" => Ok(Self::Inventory),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            "use" | "u" => Ok(Self::Use((!rest.is_empty()).then(|| rest.to_owned()))),
            "move" | "go" | "m" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "move",
                        argument: "a direction",
                    });
                }
                rest.parse()
                    .map(Self::Move)
                    .map_err(|_| CommandError::InvalidDirection(rest.to_owned()))
            }
            "hit" | "h" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "hit",
                        argument: "a cell index",
                    });
                }
                rest.parse()
                    .map(Self::Hit)
                    .map_err(|_| CommandError::InvalidIndex(rest.to_owned()))
            }
            other => Err(CommandError::Unknown(other.to_owned())),
        }
    }
}

fn directions() -> String {
    Direction::iter()
        .map(|direction| direction.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn help_text() -> String {
    format!(
        "commands:\n  \
         look                 describe the room\n  \
         move <dir>           walk one step ({})\n  \
         use [name]           act on an object, or on the one in reach\n  \
         hit <index>          click a cell of the open enigma\n  \
         inventory            list carried items\n  \
         quit                 leave the game",
        directions()
    )
}
