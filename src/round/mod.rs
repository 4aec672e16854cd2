//! One round of play: phases, input commands, the controller, and the
//! text session that drives it.
//!
//! The controller (`Round`) holds no I/O. `Session` wraps it with a
//! reader and a writer and prints the transcript in protocol order:
//! digest, menu, any number of help/invalid exchanges, result, key.

pub mod command;
pub mod controller;
pub mod phase;
pub mod render;
pub mod session;

pub use command::Command;
pub use controller::{Disclosure, Resolution, Round, RoundBuilder, RoundSummary, Step};
pub use phase::Phase;
pub use render::{HelpTable, USAGE};
pub use session::{Session, SessionEnd};
