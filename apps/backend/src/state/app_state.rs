use crate::services::GameFlow;

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    /// The game flow service owning all sessions.
    pub game: GameFlow,
}

impl AppState {
    pub fn new(game: GameFlow) -> Self {
        Self { game }
    }
}
