//! Service layer: orchestration over the pure domain core.

pub mod game_flow;
pub mod progress;
pub mod round_selector;
pub mod source;

pub use game_flow::GameFlow;
pub use progress::ProgressStore;
pub use source::PokemonSource;
