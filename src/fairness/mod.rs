//! Commit-reveal proof that the computer's move was fixed in advance.
//!
//! Ordering is the whole guarantee: the digest is published before the
//! human moves, and the key only after the outcome is shown.

pub mod commitment;
pub mod key;

pub use commitment::{commit, verify, Commitment};
pub use key::{Digest, HmacKey, DIGEST_LEN, KEY_LEN};
