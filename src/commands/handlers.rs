//! Command Handlers
//!
//! One function per REPL command. Handlers write user-facing text to `out`
//! and return errors for the REPL to report.

use std::io::Write;

use tracing::debug;

use crate::catch::attempt_catch;
use crate::commands::{CommandRegistry, ControlFlow};
use crate::error::Result;
use crate::session::Session;

/// Handler for `help`
pub fn help(registry: &CommandRegistry, out: &mut dyn Write) -> Result<ControlFlow> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    for command in registry.iter() {
        writeln!(out, "{}: {}", command.name, command.description)?;
    }
    Ok(ControlFlow::Continue)
}

/// Handler for `exit`
pub fn exit(out: &mut dyn Write) -> Result<ControlFlow> {
    writeln!(out, "Closing the Pokedex... Goodbye!")?;
    Ok(ControlFlow::Exit)
}

/// Handler for `map`
///
/// Shows the next page of location areas and advances the cursor.
pub async fn map(session: &mut Session, out: &mut dyn Write) -> Result<ControlFlow> {
    let Some(url) = session.next_url.clone() else {
        writeln!(out, "you're on the last page")?;
        return Ok(ControlFlow::Continue);
    };

    show_location_page(session, &url, out).await
}

/// Handler for `mapb`
///
/// Shows the previous page of location areas and moves the cursor back.
pub async fn map_back(session: &mut Session, out: &mut dyn Write) -> Result<ControlFlow> {
    let Some(url) = session.previous_url.clone() else {
        writeln!(out, "you're on the first page")?;
        return Ok(ControlFlow::Continue);
    };

    show_location_page(session, &url, out).await
}

async fn show_location_page(
    session: &mut Session,
    url: &str,
    out: &mut dyn Write,
) -> Result<ControlFlow> {
    let page = session.client.location_areas(url).await?;
    debug!(url, results = page.results.len(), "location page");

    session.next_url = page.next;
    session.previous_url = page.previous;

    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }
    Ok(ControlFlow::Continue)
}

/// Handler for `explore <area>`
pub async fn explore(
    session: &mut Session,
    args: &[String],
    out: &mut dyn Write,
) -> Result<ControlFlow> {
    let Some(area_name) = args.first() else {
        writeln!(out, "Usage: explore <location-area>")?;
        return Ok(ControlFlow::Continue);
    };

    writeln!(out, "Exploring {}...", area_name)?;
    let area = session.client.location_area(area_name).await?;

    if area.pokemon_encounters.is_empty() {
        writeln!(out, "No Pokemon found here.")?;
        return Ok(ControlFlow::Continue);
    }

    writeln!(out, "Found Pokemon:")?;
    for name in area.pokemon_names() {
        writeln!(out, " - {}", name)?;
    }
    Ok(ControlFlow::Continue)
}

/// Handler for `catch <pokemon>`
pub async fn catch(
    session: &mut Session,
    args: &[String],
    out: &mut dyn Write,
) -> Result<ControlFlow> {
    let Some(name) = args.first() else {
        writeln!(out, "Usage: catch <pokemon-name>")?;
        return Ok(ControlFlow::Continue);
    };

    writeln!(out, "Throwing a Pokeball at {}...", name)?;

    if session.pokedex.contains(name) {
        writeln!(out, "{} is already in your Pokedex!", name)?;
        return Ok(ControlFlow::Continue);
    }

    let pokemon = session.client.pokemon(name).await?;
    let base_experience = pokemon.base_experience.unwrap_or(0);

    if attempt_catch(base_experience, session.rng()) {
        writeln!(out, "{} was caught!", pokemon.name)?;
        writeln!(out, "You may now inspect it with the inspect command.")?;
        session.pokedex.insert(pokemon);
    } else {
        writeln!(out, "{} escaped!", pokemon.name)?;
    }
    Ok(ControlFlow::Continue)
}

/// Handler for `inspect <pokemon>`
pub fn inspect(session: &Session, args: &[String], out: &mut dyn Write) -> Result<ControlFlow> {
    let Some(name) = args.first() else {
        writeln!(out, "Usage: inspect <pokemon-name>")?;
        return Ok(ControlFlow::Continue);
    };

    let Some(caught) = session.pokedex.get(name) else {
        writeln!(out, "you have not caught that pokemon")?;
        return Ok(ControlFlow::Continue);
    };

    let pokemon = &caught.pokemon;
    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, "  - {}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(out, "Types:")?;
    for slot in &pokemon.types {
        writeln!(out, "  - {}", slot.kind.name)?;
    }
    writeln!(
        out,
        "Caught: {}",
        caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    Ok(ControlFlow::Continue)
}

/// Handler for `pokedex`
pub fn pokedex(session: &Session, out: &mut dyn Write) -> Result<ControlFlow> {
    if session.pokedex.is_empty() {
        writeln!(out, "Your Pokedex is empty!")?;
        return Ok(ControlFlow::Continue);
    }

    writeln!(out, "Your Pokedex:")?;
    for name in session.pokedex.names() {
        writeln!(out, " - {}", name)?;
    }
    Ok(ControlFlow::Continue)
}
