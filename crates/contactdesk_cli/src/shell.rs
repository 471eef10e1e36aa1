//! Interactive session: one desk, many commands.
//!
//! The contact cache and saved lists stay in memory until `exit`, so an
//! added contact's tags only show up after `reload`.

use crate::cli::ShellLine;
use crate::dispatch::{dispatch, print_response};
use clap::Parser;
use contactdesk_core::Desk;
use log::{error, info};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const PROMPT: &str = "contactdesk> ";

/// Reads commands from stdin until `exit`, `quit` or end of input.
pub fn run(desk: &mut Desk) -> ExitCode {
    println!("Type 'help' for commands, 'exit' to leave.");
    info!("event=shell_start module=cli status=ok");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("{PROMPT}");
        if let Err(err) = io::stdout().flush() {
            error!("event=shell_io module=cli status=error error={}", err);
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                error!("event=shell_io module=cli status=error error={}", err);
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if matches!(trimmed, "exit" | "quit") {
            break;
        }

        let Some(words) = shlex::split(&escape_row_refs(trimmed)) else {
            eprintln!("error: unbalanced quotes");
            continue;
        };
        match ShellLine::try_parse_from(words) {
            Ok(parsed) => print_response(&dispatch(desk, parsed.command).response),
            Err(err) => {
                let _ = err.print();
            }
        }
    }

    info!("event=shell_exit module=cli status=ok");
    ExitCode::SUCCESS
}

/// Escapes `#` at the start of an unquoted word so `#3` row references are
/// not read as comments.
fn escape_row_refs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut word_start = true;

    for ch in line.chars() {
        if escaped {
            escaped = false;
            word_start = false;
            out.push(ch);
            continue;
        }
        match quote {
            Some(open) if ch == open => quote = None,
            Some(open) => escaped = open == '"' && ch == '\\',
            None => match ch {
                '\'' | '"' => quote = Some(ch),
                '\\' => escaped = true,
                '#' if word_start => out.push('\\'),
                _ => {}
            },
        }
        word_start = quote.is_none() && ch.is_whitespace();
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_row_refs;

    fn split(line: &str) -> Vec<String> {
        shlex::split(&escape_row_refs(line)).unwrap()
    }

    #[test]
    fn row_references_survive_splitting() {
        assert_eq!(
            split("lists save Team #0 #12 \"Bob +ops\""),
            vec!["lists", "save", "Team", "#0", "#12", "Bob +ops"]
        );
    }

    #[test]
    fn quoted_and_inner_hashes_are_untouched() {
        assert_eq!(
            split("contacts add 'Desk #4 +ops' a#b \"#5\""),
            vec!["contacts", "add", "Desk #4 +ops", "a#b", "#5"]
        );
    }
}
