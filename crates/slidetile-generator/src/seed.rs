use std::{
    fmt::{self, Display},
    str::FromStr,
};

use sha2::{Digest as _, Sha256};

/// A 32-byte seed that fully determines a generated board.
///
/// Seeds are written as 64 lowercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// use slidetile_generator::ScrambleSeed;
///
/// let seed: ScrambleSeed = "00".repeat(32).parse()?;
/// assert_eq!(seed.to_string(), "00".repeat(32));
/// # Ok::<(), slidetile_generator::ScrambleSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrambleSeed([u8; 32]);

impl ScrambleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derives a seed from arbitrary text by hashing it with SHA-256.
    ///
    /// ```
    /// use slidetile_generator::ScrambleSeed;
    ///
    /// assert_eq!(ScrambleSeed::from_phrase("abc"), ScrambleSeed::from_phrase("abc"));
    /// assert_ne!(ScrambleSeed::from_phrase("abc"), ScrambleSeed::from_phrase("abd"));
    /// ```
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Draws a seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the seed bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

/// Errors produced when parsing a [`ScrambleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ScrambleSeedError {
    /// The string is not 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// The length of the rejected string.
        len: usize,
    },
    /// A character is not a hexadecimal digit.
    #[display("invalid hex digit {ch:?} at position {index}")]
    InvalidDigit {
        /// Character offset of the invalid digit.
        index: usize,
        /// The invalid character.
        ch: char,
    },
}

impl FromStr for ScrambleSeed {
    type Err = ScrambleSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ScrambleSeedError::InvalidLength { len });
        }

        let digits = s
            .chars()
            .enumerate()
            .map(|(index, ch)| {
                ch.to_digit(16)
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or(ScrambleSeedError::InvalidDigit { index, ch })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(digits.chunks_exact(2)) {
            *byte = (pair[0] << 4) | pair[1];
        }
        Ok(Self(bytes))
    }
}

impl Display for ScrambleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
