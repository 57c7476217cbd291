use crate::game::{Game, GameEvent, COLORS};
use crate::state::{Config, CONFIG, GAMES, GAME_NONCE};
use crate::{
    error::ContractError,
    msg::{ExecuteMsg, InstantiateMsg, QueryMsg},
};
use cosmwasm_std::{
    ensure, to_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response,
};

const DEFAULT_NAME: &str = "simon";

/// Type of the custom event carrying the name and value of a game event.
pub const GAME_EVENT_TYPE: &str = "simon";

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let name = msg.name.unwrap_or_else(|| DEFAULT_NAME.to_string());
    CONFIG.save(deps.storage, &Config { name: name.clone() })?;

    for game in &msg.games {
        ensure!(
            !GAMES.has(deps.storage, &game.game_id),
            ContractError::DuplicateGame {
                game_id: game.game_id.clone()
            }
        );
        let invalid = || ContractError::InvalidGenesisGame {
            game_id: game.game_id.clone(),
        };
        let owner = deps
            .api
            .addr_validate(game.owner.as_str())
            .map_err(|_| invalid())?;
        let user = deps
            .api
            .addr_validate(game.user.as_str())
            .map_err(|_| invalid())?;
        ensure!(game.is_well_formed(), invalid());

        let game = Game {
            owner,
            user,
            ..game.clone()
        };
        GAMES.save(deps.storage, &game.game_id, &game)?;
    }
    // Genesis games count as created so new ids never reuse their nonce.
    GAME_NONCE.save(deps.storage, &(msg.games.len() as u64))?;

    Ok(Response::default()
        .add_attribute("action", "instantiate")
        .add_attribute("name", name)
        .add_attribute("games", msg.games.len().to_string()))
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let api = deps.api;

    match msg {
        // The block time is authoritative, the client timestamp is ignored.
        ExecuteMsg::CreateGame {
            timestamp: _,
            owner,
        } => {
            let owner_addr = api.addr_validate(&owner)?;
            exec::create_game(deps, env, info, owner_addr)
        }
        ExecuteMsg::UserMoves { game_id, moves } => {
            exec::user_moves(deps, env, info, &game_id, &moves)
        }
    }
}

/// Wraps a game event into the custom event reported back to the sender.
fn game_event(event: &GameEvent) -> Event {
    Event::new(GAME_EVENT_TYPE)
        .add_attribute("name", event.name())
        .add_attribute("value", event.value())
}

mod exec {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};
    use sha2::{Digest, Sha256};

    pub fn create_game(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        owner_addr: Addr,
    ) -> Result<Response, ContractError> {
        let nonce = GAME_NONCE.may_load(deps.storage)?.unwrap_or_default();
        let now = env.block.time.seconds();
        let game_id = derive_game_id(&info.sender, now, nonce);

        let mut rng = move_rng(&game_id, 0, &env);
        let game = Game::new(
            game_id.clone(),
            owner_addr,
            info.sender.clone(),
            now,
            &mut rng,
        );

        GAMES.save(deps.storage, &game_id, &game)?;
        GAME_NONCE.save(deps.storage, &(nonce + 1))?;
        deps.api
            .debug(&format!("simon: {} created game {game_id}", info.sender));

        let event = GameEvent::Created {
            game_id: game_id.clone(),
        };
        Ok(Response::default()
            .add_attribute("action", "create_game")
            .add_attribute("game_id", game_id)
            .add_attribute("owner", game.owner.to_string())
            .add_attribute("user", info.sender.to_string())
            .add_event(game_event(&event)))
    }

    pub fn user_moves(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        game_id: &str,
        moves: &str,
    ) -> Result<Response, ContractError> {
        let mut game = GAMES
            .may_load(deps.storage, game_id)?
            .ok_or_else(|| ContractError::GameNotFound {
                game_id: game_id.to_string(),
            })?;

        let mut rng = move_rng(game_id, game.round_count, &env);
        let event = game.submit_moves(&info.sender, moves, env.block.time.seconds(), &mut rng)?;

        // Moves from anyone but the game's user are dropped without touching the registry.
        if let GameEvent::InvalidUser { .. } = event {
            deps.api.debug(&format!(
                "simon: {} is not the user of game {game_id}",
                info.sender
            ));
        } else {
            GAMES.save(deps.storage, game_id, &game)?;
        }

        Ok(Response::default()
            .add_attribute("action", "user_moves")
            .add_attribute("game_id", game_id)
            .add_attribute("sender", info.sender.to_string())
            .add_attribute("round", game.round_count.to_string())
            .add_event(game_event(&event)))
    }

    /// Derives a game id from the creator, the block time and the game nonce.
    ///
    /// The id is the hex encoded SHA-256 of `sender::timestamp::nonce`. The nonce
    /// only grows, so two games never share an id even within a single block.
    pub fn derive_game_id(sender: &Addr, timestamp: u64, nonce: u64) -> String {
        let digest = Sha256::digest(format!("{sender}::{timestamp}::{nonce}"));
        format!("0x{}", hex::encode(digest))
    }

    /// Seeds the move generator from the game, its round and the current block.
    fn move_rng(game_id: &str, round: u32, env: &Env) -> SmallRng {
        let digest = Sha256::digest(format!(
            "{game_id}::{round}::{}::{}",
            env.block.height,
            env.block.time.nanos()
        ));
        let mut seed = [0u8; 8];
        seed.copy_from_slice(&digest[..8]);
        SmallRng::seed_from_u64(u64::from_le_bytes(seed))
    }

}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Games {} => Ok(to_binary(&query::games(deps)?)?),
        QueryMsg::Game { game_id } => Ok(to_binary(&query::game(deps, &game_id)?)?),
        QueryMsg::Info {} => Ok(to_binary(&query::info(deps)?)?),
    }
}

mod query {
    use super::*;
    use crate::msg::{GameResponse, GamesResponse, InfoResponse};
    use cosmwasm_std::{Order, StdResult};

    pub fn games(deps: Deps) -> Result<GamesResponse, ContractError> {
        let games: StdResult<Vec<_>> = GAMES
            .range(deps.storage, None, None, Order::Ascending)
            .map(|entry| entry.map(|(_, game)| game))
            .collect();

        Ok(GamesResponse { games: games? })
    }

    pub fn game(deps: Deps, game_id: &str) -> Result<GameResponse, ContractError> {
        let game = GAMES
            .may_load(deps.storage, game_id)?
            .ok_or_else(|| ContractError::GameNotFound {
                game_id: game_id.to_string(),
            })?;
        Ok(GameResponse { game })
    }

    pub fn info(deps: Deps) -> Result<InfoResponse, ContractError> {
        let config = CONFIG.load(deps.storage)?;
        Ok(InfoResponse {
            name: config.name,
            actions: vec!["create_game".to_string(), "user_moves".to_string()],
            colors: COLORS.to_vec(),
            game_count: GAME_NONCE.may_load(deps.storage)?.unwrap_or_default(),
        })
    }
}
