//! Adapters to external collaborators: PokeAPI, the TTL cache and the
//! progress file.

pub mod cache;
pub mod pokeapi;
pub mod progress_file;

pub use cache::CachedSource;
pub use pokeapi::PokeApiSource;
pub use progress_file::JsonProgressStore;
