//! Session State
//!
//! Everything the REPL commands read and mutate: the API client, the
//! Pokedex, the location paging cursor and the catch RNG.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::api::PokeApiClient;
use crate::pokedex::Pokedex;

/// Mutable state threaded through every command.
pub struct Session {
    pub client: PokeApiClient,
    pub pokedex: Pokedex,
    /// Page `map` will fetch next; `None` once the last page was shown
    pub next_url: Option<String>,
    /// Page `mapb` will fetch; `None` while on the first page
    pub previous_url: Option<String>,
    rng: Box<dyn RngCore + Send>,
}

impl Session {
    /// Creates a session with an entropy-seeded RNG.
    pub fn new(client: PokeApiClient, page_size: u32) -> Self {
        Self::with_rng(client, page_size, Box::new(StdRng::from_entropy()))
    }

    /// Creates a session with a caller-supplied RNG.
    pub fn with_rng(client: PokeApiClient, page_size: u32, rng: Box<dyn RngCore + Send>) -> Self {
        let next_url = Some(client.location_areas_url(page_size));
        Self {
            client,
            pokedex: Pokedex::new(),
            next_url,
            previous_url: None,
            rng,
        }
    }

    pub fn rng(&mut self) -> &mut dyn RngCore {
        self.rng.as_mut()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("client", &self.client)
            .field("pokedex", &self.pokedex)
            .field("next_url", &self.next_url)
            .field("previous_url", &self.previous_url)
            .finish_non_exhaustive()
    }
}
