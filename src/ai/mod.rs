mod agent;
mod heuristic;
mod minimax;
mod random;

pub use agent::Agent;
pub use heuristic::{Heuristic, MaterialHeuristic, WIN_SCORE};
pub use minimax::{depth_for_columns, search, MinimaxAgent, SearchResult};
pub use random::RandomAgent;
