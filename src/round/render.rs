//! Plain-text views: menu, help table, result lines.

use std::fmt;
use std::io::{self, Write};

use crate::core::MoveSet;
use crate::error::MoveSetError;
use crate::fairness::{Digest, HmacKey};
use crate::rules::OutcomeTable;

use super::controller::Resolution;

/// Printed after a rejected move list.
pub const USAGE: &str =
    "Usage: fair-rps move1 move2 move3 ... (Provide an odd number of unique moves >= 3)";

pub const INVALID_CHOICE: &str = "Invalid choice, please try again.";
pub const EXIT_MESSAGE: &str = "Exiting game.";

const CORNER: &str = "Moves";

/// Report a rejected move list followed by the usage line.
pub fn write_usage_error<W: Write>(out: &mut W, err: &MoveSetError) -> io::Result<()> {
    writeln!(out, "Error: {err}")?;
    writeln!(out, "{USAGE}")
}

pub fn write_digest<W: Write>(out: &mut W, digest: &Digest) -> io::Result<()> {
    writeln!(out, "HMAC: {digest}")
}

pub fn write_menu<W: Write>(out: &mut W, moves: &MoveSet) -> io::Result<()> {
    writeln!(out, "Available moves:")?;
    for (id, name) in moves.iter() {
        writeln!(out, "{} - {}", id.choice(), name)?;
    }
    writeln!(out, "0 - exit")?;
    writeln!(out, "? - help")
}

pub fn write_help<W: Write>(out: &mut W, moves: &MoveSet, table: &OutcomeTable) -> io::Result<()> {
    write!(out, "{}", HelpTable::new(moves, table))
}

pub fn write_resolution<W: Write>(
    out: &mut W,
    moves: &MoveSet,
    resolution: &Resolution,
) -> io::Result<()> {
    writeln!(out, "Your move: {}", moves.name(resolution.human))?;
    writeln!(out, "Computer move: {}", moves.name(resolution.computer))?;
    writeln!(out, "{}", resolution.outcome.verdict())
}

pub fn write_key<W: Write>(out: &mut W, key: &HmacKey) -> io::Result<()> {
    writeln!(out, "HMAC key: {}", key.to_hex())
}

/// Box-drawn outcome grid. Header row is `Moves` followed by every move;
/// each body row starts with a move and lists its outcome against every
/// column move.
pub struct HelpTable<'a> {
    moves: &'a MoveSet,
    table: &'a OutcomeTable,
}

impl<'a> HelpTable<'a> {
    pub fn new(moves: &'a MoveSet, table: &'a OutcomeTable) -> Self {
        Self { moves, table }
    }

    fn widths(&self) -> Vec<usize> {
        let label_width = ["Win", "Lose", "Draw"].iter().map(|l| l.len()).max().unwrap_or(0);
        let first = self
            .moves
            .names()
            .iter()
            .map(|n| n.chars().count())
            .chain([CORNER.len()])
            .max()
            .unwrap_or(0);
        std::iter::once(first)
            .chain(self.moves.names().iter().map(|n| n.chars().count().max(label_width)))
            .collect()
    }
}

fn rule(f: &mut fmt::Formatter<'_>, widths: &[usize], left: char, mid: char, right: char) -> fmt::Result {
    write!(f, "{left}")?;
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            write!(f, "{mid}")?;
        }
        write!(f, "{}", "─".repeat(width + 2))?;
    }
    writeln!(f, "{right}")
}

fn cells<'c>(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize],
    values: impl Iterator<Item = &'c str>,
) -> fmt::Result {
    write!(f, "│")?;
    for (value, &width) in values.zip(widths) {
        write!(f, " {value:<width$} │")?;
    }
    writeln!(f)
}

impl fmt::Display for HelpTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();

        rule(f, &widths, '┌', '┬', '┐')?;
        cells(f, &widths, std::iter::once(CORNER).chain(self.moves.names().iter().map(String::as_str)))?;

        for (id, row) in self.table.rows() {
            rule(f, &widths, '├', '┼', '┤')?;
            let labels = row.iter().map(|o| o.label());
            cells(f, &widths, std::iter::once(self.moves.name(id)).chain(labels))?;
        }

        rule(f, &widths, '└', '┴', '┘')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_menu() {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        let text = render(|out| write_menu(out, &moves));
        assert_eq!(
            text,
            "Available moves:\n1 - rock\n2 - paper\n3 - scissors\n0 - exit\n? - help\n"
        );
    }

    #[test]
    fn test_usage_error() {
        let err = MoveSet::new(["rock", "paper", "scissors", "lizard"]).unwrap_err();
        let text = render(|out| write_usage_error(out, &err));
        assert_eq!(
            text,
            format!("Error: The number of moves must be odd, got 4.\n{USAGE}\n")
        );
    }

    #[test]
    fn test_help_table() {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        let table = OutcomeTable::build(&moves);
        let text = HelpTable::new(&moves, &table).to_string();

        let expected = "\
┌──────────┬──────┬───────┬──────────┐
│ Moves    │ rock │ paper │ scissors │
├──────────┼──────┼───────┼──────────┤
│ rock     │ Draw │ Lose  │ Win      │
├──────────┼──────┼───────┼──────────┤
│ paper    │ Win  │ Draw  │ Lose     │
├──────────┼──────┼───────┼──────────┤
│ scissors │ Lose │ Win   │ Draw     │
└──────────┴──────┴───────┴──────────┘
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_help_starts_with_table() {
        let moves = MoveSet::new(["a", "b", "c"]).unwrap();
        let table = OutcomeTable::build(&moves);
        let text = render(|out| write_help(out, &moves, &table));
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with('┌'));
        assert_eq!(lines[1], "│ Moves │ a    │ b    │ c    │");
        assert!(lines.last().unwrap().starts_with('└'));
        // header, three rows, and four rules between/around them
        assert_eq!(lines.len(), 9);
    }
}
