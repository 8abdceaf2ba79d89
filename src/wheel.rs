use crate::error::{EnigmaError, Result};
use std::fmt;

/// Number of letters on a wheel
pub const ALPHABET_LEN: usize = 26;

/// A substitution wheel: position `i` (letter `A + i`) carries `wiring[i]`.
///
/// Wheels are plain constant data. Nothing checks that the wiring is a
/// permutation when a wheel is used; a bad wiring produces wrong letters,
/// never a panic. [`Wheel::is_permutation`] and [`Wheel::is_reciprocal`]
/// exist for diagnostics and tests.
#[derive(Debug, PartialEq, Eq)]
pub struct Wheel {
    pub index: usize,
    pub name: &'static str,
    wiring: [u8; ALPHABET_LEN],
}

impl Wheel {
    pub const fn new(index: usize, name: &'static str, wiring: &[u8; ALPHABET_LEN]) -> Self {
        Self {
            index,
            name,
            wiring: *wiring,
        }
    }

    /// Alphabet position (0-25) of the letter wired at `position`
    #[inline]
    pub fn wired(&self, position: usize) -> u8 {
        self.wiring[position % ALPHABET_LEN].wrapping_sub(b'A') % ALPHABET_LEN as u8
    }

    /// Wiring as an uppercase string
    pub fn wiring(&self) -> &str {
        // Registry wirings are ASCII literals
        std::str::from_utf8(&self.wiring).unwrap_or("")
    }

    /// Every letter A-Z appears exactly once
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; ALPHABET_LEN];
        for &letter in &self.wiring {
            if !letter.is_ascii_uppercase() {
                return false;
            }
            let slot = &mut seen[(letter - b'A') as usize];
            if *slot {
                return false;
            }
            *slot = true;
        }
        true
    }

    /// Wiring is an involution (`w[w[x]] == x`), which makes the cipher its own inverse
    pub fn is_reciprocal(&self) -> bool {
        self.is_permutation()
            && (0..ALPHABET_LEN)
                .all(|i| self.wired(self.wired(i) as usize) as usize == i)
    }
}

impl fmt::Display for Wheel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.wiring())
    }
}

/// The three wheels shipped with the pocket device
pub static WHEELS: [Wheel; 3] = [
    Wheel::new(0, "WHEEL0", b"ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
    Wheel::new(1, "WHEEL1", b"ZEXKBHJFMGDRIONVTLUQSPYCWA"),
    Wheel::new(2, "WHEEL2", b"CDABWIPMFKJNHLQGOZUVSTEYXR"),
];

/// Look up a wheel by its 0-based index
pub fn wheel(index: usize) -> Result<&'static Wheel> {
    WHEELS
        .get(index)
        .ok_or_else(|| EnigmaError::InvalidWheelIndex(index.to_string()))
}

/// Parse a wheel number as typed on the command line
pub fn parse_wheel(s: &str) -> Result<&'static Wheel> {
    let index: usize = s
        .trim()
        .parse()
        .map_err(|_| EnigmaError::InvalidWheelIndex(s.to_string()))?;
    wheel(index)
}
