use std::{
    fmt,
    num::NonZeroI32,
    ops::{Add, Mul, Sub},
};

/// A 16-bit signed integer with two's-complement wraparound arithmetic.
///
/// Every operation on a `Word` discards the bits above the sixteenth and
/// reinterprets the rest as signed, so a computation that overflows yields
/// the same value it would on a 16-bit machine. The arithmetic operators
/// never panic, in debug or release builds.
///
/// # Examples
///
/// ```
/// use teleporter_core::Word;
///
/// assert_eq!(Word::MAX + Word::ONE, Word::MIN);
/// assert_eq!(Word::wrap(70_000), Word::new(4_464));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(i16);

impl Word {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);
    pub const MIN: Self = Self(i16::MIN);
    pub const MAX: Self = Self(i16::MAX);

    /// Creates a word from a value that already fits.
    #[must_use]
    pub const fn new(value: i16) -> Self {
        Self(value)
    }

    /// Truncates a wide value to sixteen bits and sign-extends the result.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn wrap(value: i64) -> Self {
        Self(value as i16)
    }

    /// Returns the inner value.
    #[must_use]
    pub const fn get(self) -> i16 {
        self.0
    }

    /// Returns `true` if the word is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the word is strictly negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Returns the remainder of the word divided by `modulus`.
    ///
    /// The remainder is computed at 32-bit width and truncates toward zero,
    /// so it carries the sign of the word: `Word::new(-7).residue(5)` is `-2`.
    #[must_use]
    pub fn residue(self, modulus: NonZeroI32) -> i32 {
        i32::from(self.0) % modulus.get()
    }
}

impl Add for Word {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Word {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl Mul for Word {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0))
    }
}

impl From<i16> for Word {
    fn from(value: i16) -> Self {
        Self(value)
    }
}

impl From<Word> for i16 {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl From<Word> for i32 {
    fn from(word: Word) -> Self {
        i32::from(word.0)
    }
}

impl From<Word> for i64 {
    fn from(word: Word) -> Self {
        i64::from(word.0)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
