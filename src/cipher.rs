use crate::error::{EnigmaError, Result};
use crate::wheel::{Wheel, ALPHABET_LEN};
use tracing::{debug, trace};

const MODULUS: i64 = ALPHABET_LEN as i64;

/// Cipher a single uppercase letter through `wheel` turned to `offset`.
///
/// The letter is looked up at its position relative to the wheel's current
/// rotation, and the wheel's displacement at that position is added back to
/// the letter. For a reciprocal wheel this is its own inverse at any offset.
pub fn cipher_letter(wheel: &Wheel, offset: u8, letter: u8) -> u8 {
    let n = ALPHABET_LEN as u8;
    let user_index = letter.wrapping_sub(b'A') % n;
    let offset = offset % n;

    // position on the wheel as seen from the current rotation
    let u2 = (user_index + n - offset) % n;
    let d = wheel.wired(u2 as usize);
    let diff = (d + n - u2) % n;

    b'A' + (user_index + diff) % n
}

/// Starting offset (0-25) for a start letter, case-insensitive
pub fn start_offset(start: char) -> Result<u8> {
    if !start.is_ascii_alphabetic() {
        return Err(EnigmaError::InvalidStartLetter(start.to_string()));
    }
    Ok(start.to_ascii_uppercase() as u8 - b'A')
}

/// Advance the wheel by `step`, wrapping in both directions
#[inline]
fn turn(offset: u8, step: i64) -> u8 {
    // step is reduced first so huge values cannot overflow
    (offset as i64 + step.rem_euclid(MODULUS)).rem_euclid(MODULUS) as u8
}

/// Process a whole message with the given wheel settings.
///
/// Spaces are skipped without turning the wheel. Any other character that
/// is not an ASCII letter aborts the whole message. Encryption and
/// decryption are the same operation.
pub fn process(wheel: &Wheel, start: char, step: i64, message: &str) -> Result<String> {
    let mut offset = start_offset(start)?;
    debug!(
        wheel = wheel.name,
        offset,
        step,
        len = message.len(),
        "processing message"
    );

    let mut result = String::with_capacity(message.len());
    for ch in message.chars() {
        if ch == ' ' {
            continue;
        }
        if !ch.is_ascii_alphabetic() {
            return Err(EnigmaError::InvalidInput(ch));
        }

        let letter = ch.to_ascii_uppercase() as u8;
        let out = cipher_letter(wheel, offset, letter);
        trace!(offset, input = %ch, output = %(out as char), "cipher letter");
        result.push(out as char);
        offset = turn(offset, step);
    }

    Ok(result)
}

/// One complete key for the device: wheel, start letter and step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub wheel: &'static Wheel,
    pub start: char,
    pub step: i64,
}

impl Settings {
    /// Build settings, rejecting a start letter that is not exactly one letter
    pub fn new(wheel: &'static Wheel, start: &str, step: i64) -> Result<Self> {
        let mut chars = start.chars();
        let start = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
            _ => return Err(EnigmaError::InvalidStartLetter(start.to_string())),
        };
        Ok(Self { wheel, start, step })
    }

    pub fn apply(&self, message: &str) -> Result<String> {
        process(self.wheel, self.start, self.step, message)
    }
}

/// Parse a step value, which may be negative
pub fn parse_step(s: &str) -> Result<i64> {
    s.trim()
        .parse()
        .map_err(|_| EnigmaError::InvalidStepValue(s.to_string()))
}
