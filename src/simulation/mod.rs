pub mod replay;
pub mod snapshot;
pub mod turn;

pub use replay::{run_replay, ReplayFile, TurnReport};
pub use snapshot::{BaseStatus, TurnSnapshot};
pub use turn::{decide_turn, HeroDecision, MatchState, TurnOutcome};
