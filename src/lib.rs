pub mod config;
pub mod error;
pub mod grid;
pub mod model;
pub mod reachability;
pub mod sampler;
pub mod snapshot;
pub mod state_index;
pub mod transitions;

pub use error::GenerateError;
pub use grid::{Agent, Cell, Grid};
pub use reachability::is_reachable;
pub use sampler::{sample_maze, Maze, MazeLayout};
pub use state_index::StateIndexer;
pub use transitions::{format_transitions, transition_table, Action, Transition};
