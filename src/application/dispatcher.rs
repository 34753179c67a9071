//! Command dispatch
//!
//! Maps a raw input line to a [`NoteManager`] operation. The first token
//! names the command (case-insensitive); the rest are its arguments.

use crate::application::NoteManager;
use crate::domain::{tokenize, NoteResult};
use log::{debug, error};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Command syntax and description pairs shown by `help`
const HELP_COMMANDS: &[(&str, &str)] = &[
    (
        r#"add "<title>" "<content>""#,
        "create a note (quotes allow spaces; content can be unquoted)",
    ),
    ("list", "list notes"),
    (r#"get|view "<title>""#, "view a note"),
    (r#"del|delete "<title>""#, "delete a note"),
    (
        r#"edit "<title>" "<content>""#,
        "edit a note (content can be unquoted)",
    ),
    (r#"search "<text>""#, "search notes"),
    ("help", "show help"),
    ("quit | exit", "exit"),
];

/// Render the command reference
pub fn help_text() -> String {
    let pad = HELP_COMMANDS
        .iter()
        .map(|(syntax, _)| syntax.len())
        .max()
        .unwrap_or(0)
        + 2;

    let mut output = String::from("Commands:");
    for (syntax, description) in HELP_COMMANDS {
        output.push_str(&format!("\n  {:<pad$} -> {}", syntax, description, pad = pad));
    }
    output
}

/// Routes input lines to a note manager and tracks whether the session
/// should keep running.
#[derive(Debug)]
pub struct Dispatcher<M: NoteManager> {
    manager: M,
    running: bool,
}

impl<M: NoteManager> Dispatcher<M> {
    pub fn new(manager: M) -> Self {
        Dispatcher {
            manager,
            running: true,
        }
    }

    /// False once `quit` or `exit` has been processed
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the session without a command
    pub fn shutdown(&mut self) {
        self.running = false;
    }

    pub fn manager(&self) -> &M {
        &self.manager
    }

    /// Process one line of input. Never panics; a fault inside the manager
    /// is reported as an `Error` result.
    pub fn process_line(&mut self, line: &str) -> NoteResult {
        if line.trim().is_empty() {
            return NoteResult::invalid("Empty command.");
        }

        let tokens = tokenize(line);
        let Some((command, args)) = tokens.split_first() else {
            return NoteResult::invalid("Empty command.");
        };
        let command = command.to_lowercase();
        debug!("event=dispatch command={} args={}", command, args.len());

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.route(&command, args)));
        outcome.unwrap_or_else(|payload| {
            let reason = panic_message(payload.as_ref());
            error!("event=dispatch status=fault command={} reason={}", command, reason);
            NoteResult::error(format!("Unexpected error: {}", reason))
        })
    }

    fn route(&mut self, command: &str, args: &[String]) -> NoteResult {
        match command {
            "help" => NoteResult::ok(help_text()),
            "list" => self.manager.view(),
            "get" | "view" => {
                if args.len() != 1 {
                    return NoteResult::invalid(r#"Usage: view "<title>""#);
                }
                self.manager.get(args)
            }
            "del" | "delete" => {
                if args.len() != 1 {
                    return NoteResult::invalid(r#"Usage: delete "<title>""#);
                }
                self.manager.remove(args)
            }
            "add" => {
                if args.len() < 2 {
                    return NoteResult::invalid(r#"Usage: add "<title>" "<content>""#);
                }
                self.manager.add(&title_and_rest(args))
            }
            "edit" => {
                if args.len() < 2 {
                    return NoteResult::invalid(r#"Usage: edit "<title>" "<new content>""#);
                }
                self.manager.edit(&title_and_rest(args))
            }
            "search" => {
                if args.is_empty() {
                    return NoteResult::invalid(r#"Usage: search "<text>""#);
                }
                self.manager.search(&[args.join(" ")])
            }
            "quit" | "exit" => {
                self.running = false;
                NoteResult::ok_empty()
            }
            _ => NoteResult::invalid("Invalid command. Type 'help' for help."),
        }
    }
}

/// `[title, rest joined by single spaces]`; requires at least two args
fn title_and_rest(args: &[String]) -> [String; 2] {
    [args[0].clone(), args[1..].join(" ")]
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown fault".to_string()
    }
}
