use cosmwasm_schema::{cw_serde, QueryResponses};

use crate::game::{Color, Game};

#[cw_serde]
pub struct InstantiateMsg {
    /// Name of the machine. Defaults to `simon`.
    pub name: Option<String>,
    /// Games the registry starts with.
    #[serde(default)]
    pub games: Vec<Game>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Start a new game for the sender.
    CreateGame {
        /// Client-side timestamp. The block time is used instead.
        timestamp: u64,
        /// The address declared as owner of the game.
        owner: String,
    },
    /// Submit the moves for the current round.
    UserMoves {
        /// The game to play.
        game_id: String,
        /// Comma-joined colours, e.g. `red,blue`.
        moves: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get every game in the registry.
    #[returns(GamesResponse)]
    Games {},
    /// Get a single game by id.
    #[returns(GameResponse)]
    Game {
        /// The id returned by the `Game Created` event.
        game_id: String,
    },
    /// Describe the machine and the actions it accepts.
    #[returns(InfoResponse)]
    Info {},
}

#[cw_serde]
pub struct GameResponse {
    pub game: Game,
}

#[cw_serde]
pub struct GamesResponse {
    pub games: Vec<Game>,
}

#[cw_serde]
pub struct InfoResponse {
    pub name: String,
    pub actions: Vec<String>,
    pub colors: Vec<Color>,
    pub game_count: u64,
}
