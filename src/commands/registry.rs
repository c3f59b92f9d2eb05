//! Command Registry
//!
//! Maps command names to handlers. Built once at startup and passed by
//! reference into the REPL loop.

use std::collections::BTreeMap;
use std::io::Write;

use crate::commands::handlers;
use crate::error::Result;
use crate::session::Session;

/// Which handler a command runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

/// What the REPL should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Exit,
}

/// A named command with its help text
#[derive(Debug, Clone)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

/// The fixed set of REPL commands, ordered by name.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, Command>,
}

impl CommandRegistry {
    /// Builds the registry with every built-in command.
    pub fn new() -> Self {
        let mut registry = Self {
            commands: BTreeMap::new(),
        };

        registry.register("help", "Displays a help message", CommandKind::Help);
        registry.register("exit", "Exit the Pokedex", CommandKind::Exit);
        registry.register("map", "Display the next page of location areas", CommandKind::Map);
        registry.register("mapb", "Display the previous page of location areas", CommandKind::MapBack);
        registry.register("explore", "List the Pokemon in a location area", CommandKind::Explore);
        registry.register("catch", "Attempt to catch a Pokemon", CommandKind::Catch);
        registry.register("inspect", "Inspect a caught Pokemon's details", CommandKind::Inspect);
        registry.register("pokedex", "List caught Pokemon", CommandKind::Pokedex);

        registry
    }

    fn register(&mut self, name: &'static str, description: &'static str, kind: CommandKind) {
        self.commands.insert(
            name,
            Command {
                name,
                description,
                kind,
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    /// All commands in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    // == Dispatch ==
    /// Runs the command named by `words[0]` with the remaining words as
    /// arguments. Empty input is a no-op; unknown names print a notice.
    pub async fn dispatch(
        &self,
        words: &[String],
        session: &mut Session,
        out: &mut dyn Write,
    ) -> Result<ControlFlow> {
        let Some((name, args)) = words.split_first() else {
            return Ok(ControlFlow::Continue);
        };

        let Some(command) = self.get(name) else {
            writeln!(out, "Unknown command")?;
            return Ok(ControlFlow::Continue);
        };

        match command.kind {
            CommandKind::Help => handlers::help(self, out),
            CommandKind::Exit => handlers::exit(out),
            CommandKind::Map => handlers::map(session, out).await,
            CommandKind::MapBack => handlers::map_back(session, out).await,
            CommandKind::Explore => handlers::explore(session, args, out).await,
            CommandKind::Catch => handlers::catch(session, args, out).await,
            CommandKind::Inspect => handlers::inspect(session, args, out),
            CommandKind::Pokedex => handlers::pokedex(session, out),
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
