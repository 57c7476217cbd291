use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use rand::Rng;
use thiserror::Error;

/// A colour the player has to repeat.
#[cw_serde]
#[derive(Copy)]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
}

/// The move alphabet, in the order moves are drawn from.
pub const COLORS: [Color; 4] = [Color::Red, Color::Blue, Color::Yellow, Color::Green];

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Green => "green",
        }
    }
}

/// Appends one uniformly drawn colour to a comma-joined sequence.
pub fn append_move<R: Rng>(sequence: &str, rng: &mut R) -> String {
    let color = COLORS[rng.random_range(0..COLORS.len())];
    if sequence.is_empty() {
        color.as_str().to_string()
    } else {
        format!("{sequence},{}", color.as_str())
    }
}

/// An error that can occur when submitting moves.
#[derive(Error, Debug, PartialEq)]
pub enum GameError {
    /// The game already ended and accepts no further moves.
    #[error("Game {game_id} has already ended")]
    AlreadyEnded { game_id: String },
}

/// An event emitted by a transition. Events are advisory and never part of the state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game was added to the registry.
    Created {
        game_id: String,
    },
    /// Moves were sent by someone other than the game's user and dropped.
    InvalidUser {
        game_id: String,
        user: Addr,
        sender: Addr,
    },
    /// The moves matched and the sequence grew by one.
    NewMove {
        game_id: String,
        round: u32,
    },
    /// The moves did not match and the game is over.
    Ended {
        game_id: String,
        round: u32,
    },
}

impl GameEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::Created { .. } => "Game Created",
            GameEvent::InvalidUser { .. } => "Invalid User",
            GameEvent::NewMove { .. } => "New Move",
            GameEvent::Ended { .. } => "Game Ended",
        }
    }

    pub fn value(&self) -> String {
        match self {
            GameEvent::Created { game_id } => game_id.clone(),
            GameEvent::InvalidUser {
                game_id,
                user,
                sender,
            } => format!("{game_id},{user},{sender}"),
            GameEvent::NewMove { game_id, round } | GameEvent::Ended { game_id, round } => {
                format!("{game_id},{round}")
            }
        }
    }
}

/// A single Simon game.
#[cw_serde]
pub struct Game {
    pub game_id: String,
    pub owner: Addr,
    pub user: Addr,
    pub started_at: u64,
    /// Zero while the game is active.
    pub ended_at: u64,
    pub round_count: u32,
    pub user_sequence: String,
    pub game_sequence: String,
}

impl Game {
    /// Starts a game at round one with a single generated move.
    pub fn new<R: Rng>(
        game_id: String,
        owner: Addr,
        user: Addr,
        started_at: u64,
        rng: &mut R,
    ) -> Game {
        Game {
            game_id,
            owner,
            user,
            started_at,
            ended_at: 0,
            round_count: 1,
            user_sequence: String::new(),
            game_sequence: append_move("", rng),
        }
    }

    pub fn is_active(&self) -> bool {
        self.ended_at == 0
    }

    /// Checks that the round count is at least one and matches the length of the
    /// game sequence, and that every move in it is a known colour.
    pub fn is_well_formed(&self) -> bool {
        let moves: Vec<&str> = self.game_sequence.split(',').collect();
        self.round_count >= 1
            && moves.len() == self.round_count as usize
            && moves
                .iter()
                .all(|m| COLORS.iter().any(|c| c.as_str() == *m))
    }

    /// Applies the moves submitted by `sender` at time `now`.
    ///
    /// A sender other than the game's user leaves the game untouched and yields
    /// [`GameEvent::InvalidUser`]. A matching sequence advances the round, anything
    /// else ends the game.
    pub fn submit_moves<R: Rng>(
        &mut self,
        sender: &Addr,
        moves: &str,
        now: u64,
        rng: &mut R,
    ) -> Result<GameEvent, GameError> {
        if self.user != *sender {
            return Ok(GameEvent::InvalidUser {
                game_id: self.game_id.clone(),
                user: self.user.clone(),
                sender: sender.clone(),
            });
        }
        if !self.is_active() {
            return Err(GameError::AlreadyEnded {
                game_id: self.game_id.clone(),
            });
        }

        self.user_sequence = moves.to_string();

        if self.game_sequence == moves {
            self.game_sequence = append_move(&self.game_sequence, rng);
            self.round_count += 1;
            Ok(GameEvent::NewMove {
                game_id: self.game_id.clone(),
                round: self.round_count,
            })
        } else {
            self.ended_at = now;
            Ok(GameEvent::Ended {
                game_id: self.game_id.clone(),
                round: self.round_count,
            })
        }
    }
}
