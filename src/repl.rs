//! REPL (Read-Eval-Print Loop) for the interactive Pokedex.

use std::io::{self, Write};

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use tracing::{info, warn};

use crate::commands::{CommandRegistry, ControlFlow};
use crate::session::Session;

pub const PROMPT: &str = "Pokedex > ";

/// Lowercases `text` and splits it into whitespace-separated words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Evaluates one input line. Command errors are reported to `out` as
/// `Error: ...` and never end the loop.
pub async fn eval_line(
    registry: &CommandRegistry,
    session: &mut Session,
    line: &str,
    out: &mut dyn Write,
) -> io::Result<ControlFlow> {
    let words = clean_input(line);

    match registry.dispatch(&words, session, out).await {
        Ok(flow) => Ok(flow),
        Err(e) => {
            warn!("Command {:?} failed: {}", words.first(), e);
            writeln!(out, "Error: {}", e)?;
            Ok(ControlFlow::Continue)
        }
    }
}

/// Interactive line editor bound to a registry and session.
pub struct Repl<'a> {
    registry: &'a CommandRegistry,
    session: Session,
    editor: Editor<(), DefaultHistory>,
}

impl<'a> Repl<'a> {
    pub fn new(registry: &'a CommandRegistry, session: Session) -> anyhow::Result<Self> {
        let config = Config::builder()
            .history_ignore_space(true)
            .auto_add_history(true)
            .build();

        let editor = Editor::with_config(config)?;

        Ok(Self {
            registry,
            session,
            editor,
        })
    }

    /// Runs until `exit` or end of input, then hands the session back.
    pub async fn run(mut self) -> anyhow::Result<Session> {
        let mut stdout = io::stdout();

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    let flow = eval_line(self.registry, &mut self.session, &line, &mut stdout).await?;
                    stdout.flush()?;
                    if flow == ControlFlow::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C - discard the line but keep going
                    println!();
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(e) => {
                    warn!("Input error: {}", e);
                    return Err(e.into());
                }
            }
        }

        info!("REPL finished");
        Ok(self.session)
    }
}
