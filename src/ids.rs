//! Identifier generation.
//!
//! Construction takes its identifiers from an [`IdGenerator`] passed in by
//! the caller, so tests can substitute a deterministic source for the
//! random default.

use rand::Rng;
use rand::rngs::ThreadRng;
use uuid::Uuid;

/// Characters a random identifier is drawn from.
pub const HEX_ALPHABET: &[u8; 16] = b"0123456789ABCDEF";

/// A source of opaque identifiers.
///
/// Uniqueness is statistical for the random implementations; no collision
/// detection is performed.
pub trait IdGenerator {
    /// Produces the next identifier.
    fn next_id(&mut self) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

/// Uppercase hexadecimal identifiers of a fixed length.
///
/// # Examples
///
/// ```
/// use employee_roster::ids::{IdGenerator, RandomHexIdGenerator};
///
/// let mut ids = RandomHexIdGenerator::new(8);
/// let id = ids.next_id();
/// assert_eq!(id.len(), 8);
/// assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
/// ```
#[derive(Debug, Clone)]
pub struct RandomHexIdGenerator<R = ThreadRng> {
    length: usize,
    rng: R,
}

impl RandomHexIdGenerator<ThreadRng> {
    /// Creates a generator backed by the thread-local RNG.
    pub fn new(length: usize) -> Self {
        Self::with_rng(length, rand::rng())
    }
}

impl<R: Rng> RandomHexIdGenerator<R> {
    /// Creates a generator over an explicit RNG, e.g. a seeded `StdRng`.
    pub fn with_rng(length: usize, rng: R) -> Self {
        Self { length, rng }
    }

    /// Returns the number of characters per identifier.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl<R: Rng> IdGenerator for RandomHexIdGenerator<R> {
    fn next_id(&mut self) -> String {
        (0..self.length)
            .map(|_| HEX_ALPHABET[self.rng.random_range(0..HEX_ALPHABET.len())] as char)
            .collect()
    }
}

/// Hyphenated UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Counter-based identifiers: `prefix` followed by 1, 2, 3, ...
///
/// # Examples
///
/// ```
/// use employee_roster::ids::{IdGenerator, SequentialIdGenerator};
///
/// let mut ids = SequentialIdGenerator::new("EMP");
/// assert_eq!(ids.next_id(), "EMP1");
/// assert_eq!(ids.next_id(), "EMP2");
/// ```
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first identifier is `prefix` + "1".
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
