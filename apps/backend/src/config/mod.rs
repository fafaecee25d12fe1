pub mod game;
pub mod upstream;

pub use game::GameConfig;
pub use upstream::UpstreamConfig;
