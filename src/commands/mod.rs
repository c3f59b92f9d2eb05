//! Commands Module
//!
//! REPL command registry and the handlers it dispatches to.
//!
//! # Commands
//! - `help`, `exit`
//! - `map`, `mapb` - Page through location areas
//! - `explore <area>` - List Pokemon in an area
//! - `catch <name>`, `inspect <name>`, `pokedex`

pub mod handlers;
mod registry;

pub use registry::{Command, CommandKind, CommandRegistry, ControlFlow};
