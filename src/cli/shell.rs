//! Interactive session: one command per line, all against the same
//! in-memory state.

use crate::cli::commands::Context;
use crate::cli::parser::{Commands, ShellLine};
use crate::core::Session;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "campusclub> ";

pub fn run<R: BufRead>(input: R, ctx: &Context, session: &mut Session) -> AppResult<()> {
    info("Interactive session. Type `help` for commands, `quit` to leave.");
    prompt();

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            prompt();
            continue;
        }
        if matches!(trimmed, "quit" | "exit") {
            break;
        }

        if let Err(e) = execute_line(trimmed, ctx, session) {
            error(e);
        }
        prompt();
    }

    println!();
    debug!(activity = session.activity().len(), "shell closed");
    Ok(())
}

/// Parse and run one shell line. Usage errors (and `help`) are printed by clap.
pub fn execute_line(line: &str, ctx: &Context, session: &mut Session) -> AppResult<()> {
    let tokens = tokenize(line)?;

    let parsed = match ShellLine::try_parse_from(tokens) {
        Ok(p) => p,
        Err(e) => {
            let _ = e.print();
            return Ok(());
        }
    };

    if parsed.command == Commands::Shell {
        return Err(AppError::Shell("already inside a shell".into()));
    }

    crate::dispatch(&parsed.command, ctx, session)
}

/// Split a line on whitespace, keeping single- or double-quoted text together.
pub fn tokenize(line: &str) -> AppResult<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_token = false;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(AppError::Shell(format!("unterminated {} quote", q)));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

fn prompt() {
    print!("{}", PROMPT);
    let _ = io::stdout().flush();
}
