//! Terminal surface
//!
//! Prints the board as plain text for the command-line front-end.

use std::cell::{Cell, RefCell};
use std::io::Write;

use crate::surface::Surface;
use crate::view::{BoardRender, Message, MessageKind, ParticipantsPanel};

/// Writes board output to any `Write` (stdout in the CLI, a buffer in tests)
pub struct TerminalSurface<W: Write> {
    out: RefCell<W>,
    submitting: Cell<bool>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            submitting: Cell::new(false),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_lines(&self, lines: &[String]) {
        let mut out = self.out.borrow_mut();
        for line in lines {
            if let Err(e) = writeln!(out, "{}", line) {
                tracing::warn!("Failed to write to terminal: {}", e);
                return;
            }
        }
        let _ = out.flush();
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn show_board(&self, board: &BoardRender) {
        let mut lines = Vec::new();

        match board.placeholder() {
            Some(text) => lines.push(text.to_string()),
            None => {
                for card in board.cards() {
                    let marker = if card.full { " [full]" } else { "" };
                    lines.push(format!("{}{}", card.name, marker));
                    lines.push(format!("  {}", card.description));
                    lines.push(format!("  Schedule: {}", card.schedule));
                    lines.push(format!("  Availability: {}", card.availability));
                    lines.push(String::new());
                }
                let open: Vec<&str> = board.options().iter().map(|o| o.label.as_str()).collect();
                if open.is_empty() {
                    lines.push("Open for signup: none".to_string());
                } else {
                    lines.push(format!("Open for signup: {}", open.join(", ")));
                }
            }
        }

        self.write_lines(&lines);
    }

    fn show_participants(&self, panel: &ParticipantsPanel) {
        let mut lines = vec![panel.header.clone(), panel.count_line.clone()];
        lines.extend(panel.entries.iter().map(|e| format!("  - {}", e)));
        self.write_lines(&lines);
    }

    fn show_message(&self, message: &Message) {
        let prefix = match message.kind {
            MessageKind::Info => "",
            MessageKind::Success => "OK: ",
            MessageKind::Error => "Error: ",
        };
        self.write_lines(&[format!("{}{}", prefix, message.text)]);
    }

    fn hide_message(&self) {}

    fn set_submitting(&self, submitting: bool) {
        self.submitting.set(submitting);
        if submitting {
            self.write_lines(&["Submitting...".to_string()]);
        }
    }

    fn reset_form(&self) {}
}
