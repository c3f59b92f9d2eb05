//! API Module
//!
//! HTTP client for the PokeAPI REST endpoints, reading through the response cache.
//!
//! # Endpoints
//! - `GET /pokemon/{name}/` - A single Pokemon
//! - `GET /location-area/?offset&limit` - Paged location area listing
//! - `GET /location-area/{name}/` - A single location area

pub mod client;

pub use client::PokeApiClient;
