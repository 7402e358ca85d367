//! Game logic: the state machine and the persistent session around it

mod session;
mod state;

pub use session::{GAME_KEY, GameSession, SavedGame, VISITED_KEY};
pub use state::{
    Advisory, DEFAULT_MAX_ROWS, GameState, GameStatus, StateError, Transition, praise,
};
