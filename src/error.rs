use crate::game::GameError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    StdError(#[from] StdError),
    #[error("{0}")]
    GameError(#[from] GameError),
    #[error("Game {game_id} not found")]
    GameNotFound { game_id: String },
    #[error("Game {game_id} is declared more than once in the genesis state")]
    DuplicateGame { game_id: String },
    #[error("Genesis game {game_id} has an invalid address or an inconsistent sequence")]
    InvalidGenesisGame { game_id: String },
}
