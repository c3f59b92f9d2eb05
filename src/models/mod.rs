//! Response models for the PokeAPI
//!
//! This module defines the subset of PokeAPI JSON documents the client
//! decodes. Unknown fields are ignored.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, PokemonEncounter};
pub use pokemon::{NamedResource, Pokemon, PokemonStat, PokemonType};
