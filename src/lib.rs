//! Pokedex - An interactive PokeAPI client
//!
//! Browses location areas, catches Pokemon into an in-memory Pokedex, and
//! caches raw API responses in a time-bounded cache with background reaping.

pub mod api;
pub mod cache;
pub mod catch;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod repl;
pub mod session;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use commands::CommandRegistry;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use session::Session;
