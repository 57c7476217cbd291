use crate::game::Game;
use cw_storage_plus::{Item, Map};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub name: String,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// The game registry, keyed by game id.
pub const GAMES: Map<&str, Game> = Map::new("games");

/// Number of games ever created. Only grows, and feeds game id derivation.
pub const GAME_NONCE: Item<u64> = Item::new("game_nonce");
