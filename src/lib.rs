//! Pocket Enigma - single-wheel substitution cipher simulator
//!
//! A simulation of the pocket Enigma sold by Bletchley Park: one cardboard
//! wheel, a start letter and a step. Each letter of the message is
//! substituted through the wheel at its current rotation, then the wheel
//! turns by the step.
//!
//! ## Settings
//!
//! ```text
//! wheel  - which of the registry wheels (0-based)
//! start  - letter the wheel is turned to before the first letter
//! step   - how far the wheel turns after each letter (may be negative)
//! ```
//!
//! Every wheel in the registry is reciprocal, so enciphering and
//! deciphering are the same operation with the same settings.
//!
//! This simulator does not use the "code the key as the first character"
//! protocol. To read a message sent that way, first cipher the single key
//! letter, then use the plaintext letter that comes back as the start.
//!
//! ## Example
//!
//! ```
//! use pocket_enigma::{format::group5, process, wheel};
//!
//! let wheel = wheel(2).unwrap();
//! let secret = process(wheel, 'J', -2, "hello world").unwrap();
//! assert_eq!(group5(&secret), "GFUIM XWZNY");
//! assert_eq!(process(wheel, 'J', -2, &secret).unwrap(), "HELLOWORLD");
//! ```

pub mod cipher;
pub mod cli;
pub mod error;
pub mod format;
pub mod wheel;

pub use cipher::{cipher_letter, process, Settings};
pub use error::{EnigmaError, Result};
pub use wheel::{wheel, Wheel, WHEELS};
