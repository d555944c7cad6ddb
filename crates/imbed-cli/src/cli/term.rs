//! Terminal bindings for the core's editor and notification collaborators.

use std::io::{self, BufRead, Write};

use imbed_core::host::{Editor, Notifier};

/// "Insert at cursor" for a terminal host: print the markup to stdout, so it
/// can be piped or copied back into a document.
pub struct StdoutEditor;

impl Editor for StdoutEditor {
    fn insert_at_cursor(&self, text: &str) {
        println!("{}", text);
    }
}

/// Notices on stderr; confirmation reads one line from stdin.
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn show(&self, message: &str, _duration_ms: u64) {
        eprintln!("{}", message);
    }

    fn confirm(&self, message: &str) -> bool {
        eprint!("{} [y/N] ", message);
        let _ = io::stderr().flush();
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            // EOF is a dismissal, which counts as "no".
            Ok(0) | Err(_) => false,
            Ok(_) => matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        }
    }
}
