//! Menu input parsing.

use crate::core::MoveId;

/// One line of player input, interpreted against the current menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `0`: leave without playing.
    Quit,
    /// `?`: show the outcome table.
    Help,
    /// `1..=n`: play the move at that menu position.
    Choose(MoveId),
    /// Anything else. Holds the trimmed input for diagnostics.
    Invalid(String),
}

impl Command {
    /// Interpret a raw input line for a menu of `move_count` moves.
    ///
    /// Surrounding whitespace (including the newline) is ignored. A choice
    /// must be plain ASCII digits; signs are rejected.
    ///
    /// ```
    /// use fair_rps::core::MoveId;
    /// use fair_rps::round::Command;
    ///
    /// assert_eq!(Command::parse("0\n", 3), Command::Quit);
    /// assert_eq!(Command::parse("?", 3), Command::Help);
    /// assert_eq!(Command::parse(" 2 ", 3), Command::Choose(MoveId::new(1)));
    /// assert_eq!(Command::parse("4", 3), Command::Invalid("4".into()));
    /// ```
    #[must_use]
    pub fn parse(line: &str, move_count: usize) -> Self {
        let text = line.trim();
        match text {
            "0" => Command::Quit,
            "?" => Command::Help,
            _ if !text.bytes().all(|b| b.is_ascii_digit()) => Command::Invalid(text.to_string()),
            _ => text
                .parse::<usize>()
                .ok()
                .and_then(|choice| MoveId::from_choice(choice, move_count))
                .map_or_else(|| Command::Invalid(text.to_string()), Command::Choose),
        }
    }
}
