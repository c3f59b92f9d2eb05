//! Pokedex Module
//!
//! The user's in-memory collection of caught Pokemon.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::Pokemon;

/// A Pokemon in the collection and when it was caught
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

/// Caught Pokemon keyed by name, listed in name order.
#[derive(Debug, Default)]
pub struct Pokedex {
    entries: BTreeMap<String, CaughtPokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch, stamped with the current time.
    ///
    /// Catching a Pokemon that is already present replaces the old record.
    pub fn insert(&mut self, pokemon: Pokemon) -> &CaughtPokemon {
        self.insert_at(pokemon, Utc::now())
    }

    pub fn insert_at(&mut self, pokemon: Pokemon, caught_at: DateTime<Utc>) -> &CaughtPokemon {
        let name = pokemon.name.clone();
        self.entries.insert(name.clone(), CaughtPokemon { pokemon, caught_at });
        &self.entries[&name]
    }

    pub fn get(&self, name: &str) -> Option<&CaughtPokemon> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Names of every caught Pokemon in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
