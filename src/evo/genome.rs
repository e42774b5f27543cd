//! Genome representation for the string-evolution algorithm.
//!
//! A genome is a fixed-length sequence of characters drawn from a fixed
//! alphabet. Genomes are built once per generation and replaced wholesale;
//! only the mutation operator writes into a genome, and only into a freshly
//! produced child.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The ordered set of characters eligible to appear at any genome position.
///
/// The alphabet must contain every character of the target phrase for the
/// run to be able to converge; it may also carry extra characters that only
/// ever show up as mutation noise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from the characters of `chars`, in order.
    #[must_use]
    pub fn new(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    /// Number of characters in the alphabet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the alphabet has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether `c` is a member of the alphabet.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Draw one character uniformly at random.
    ///
    /// # Panics
    ///
    /// Panics if the alphabet is empty. Engine configuration validation
    /// rejects empty alphabets before any sampling happens.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> char {
        self.chars[rng.gen_range(0..self.chars.len())]
    }
}

/// One candidate solution: an ordered, fixed-length character sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genome {
    chars: Vec<char>,
}

impl Genome {
    /// Create a random genome of `len` characters, each drawn independently
    /// and uniformly from `alphabet`.
    ///
    /// # Panics
    ///
    /// Panics if the alphabet is empty.
    #[must_use]
    pub fn random<R: Rng>(rng: &mut R, alphabet: &Alphabet, len: usize) -> Self {
        Self {
            chars: (0..len).map(|_| alphabet.sample(rng)).collect(),
        }
    }

    /// Length of the genome.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the genome has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The characters of the genome, in position order.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Mutable view of the characters, used by the mutation operator.
    pub(crate) fn chars_mut(&mut self) -> &mut [char] {
        &mut self.chars
    }

    /// Build a genome from a slice of characters.
    #[must_use]
    pub fn from_chars(chars: &[char]) -> Self {
        Self {
            chars: chars.to_vec(),
        }
    }
}

impl From<&str> for Genome {
    fn from(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
        }
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
