//! Interactive command loop
//!
//! Reads one command per line, dispatches it against a [`Session`] and prints
//! the result. A failing command is reported and the loop keeps going; only
//! `exit` or the end of input stops it.

mod commands;
mod input;

pub use commands::{catch_succeeds, Command, CommandError, Flow, Session};
pub use input::clean_input;

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

/// Prompt printed before each line is read
pub const PROMPT: &str = "PokeFetch > ";

/// Runs the loop until `exit` or end of input
///
/// Only I/O failures on `input` or `out` are returned; command failures are
/// printed and the loop continues. With `styled` set the prompt and error
/// lines carry ANSI colors; leave it off when `out` is not a terminal.
///
/// Reading `input` blocks the calling thread. Under `#[tokio::main]` that is
/// the thread driving the main future, and the cache sweep runs on worker
/// threads, so this is fine there; do not call it from inside a task on a
/// current-thread runtime with a real stdin.
pub async fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    styled: bool,
) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        if styled {
            write!(out, "{}", PROMPT.cyan())?;
        } else {
            write!(out, "{PROMPT}")?;
        }
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let words = clean_input(&line?);
        let Some((name, rest)) = words.split_first() else {
            continue;
        };

        let Some(command) = Command::parse(name) else {
            writeln!(out, "Unknown command: {name}")?;
            continue;
        };
        let arg = (!rest.is_empty()).then(|| rest.join(" "));

        match session.execute(command, arg.as_deref(), out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(CommandError::Io(e)) => return Err(e),
            Err(e) => {
                let message = format!("Error executing command: {e}");
                if styled {
                    writeln!(out, "{}", message.red())?;
                } else {
                    writeln!(out, "{message}")?;
                }
            }
        }
    }

    Ok(())
}
