use crate::cipher::{parse_step, Settings};
use crate::error::{EnigmaError, Result};
use crate::format::group;
use crate::wheel::parse_wheel;
use tracing::info;

/// Options for the cipher command
#[derive(Debug, Clone)]
pub struct CipherOptions {
    /// Output group size, 0 for none
    pub group: usize,
}

impl Default for CipherOptions {
    fn default() -> Self {
        Self { group: 5 }
    }
}

/// Settings and message taken from positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherRequest {
    pub settings: Settings,
    pub message: String,
}

impl CipherRequest {
    /// Parse `<wheel_no> <start_letter> <step> <message...>`.
    /// Message words are joined with no separator.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        if args.len() < 4 {
            return Err(EnigmaError::InvalidArgumentCount(args.len()));
        }

        let wheel = parse_wheel(args[0].as_ref())?;
        let step = parse_step(args[2].as_ref())?;
        let settings = Settings::new(wheel, args[1].as_ref(), step)?;
        let message = args[3..].iter().map(AsRef::as_ref).collect::<String>();

        Ok(Self { settings, message })
    }
}

/// Cipher a message given as command-line words.
/// Returns the formatted output, or nothing at all on error.
pub fn run_cipher<S: AsRef<str>>(args: &[S], options: &CipherOptions) -> Result<String> {
    let request = CipherRequest::from_args(args)?;
    info!(
        wheel = request.settings.wheel.name,
        start = %request.settings.start,
        step = request.settings.step,
        "ciphering message"
    );

    let result = request.settings.apply(&request.message)?;
    Ok(group(&result, options.group))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::WHEELS;

    #[test]
    fn test_run_cipher_hello_world() {
        let out = run_cipher(&["2", "J", "-2", "hello", "world"], &CipherOptions::default()).unwrap();
        assert_eq!(out, "GFUIM XWZNY");
    }

    #[test]
    fn test_words_are_joined_without_separator() {
        let request = CipherRequest::from_args(&["1", "a", "3", "ab", "c d", "e"]).unwrap();
        assert_eq!(request.message, "abc de");
        assert_eq!(request.settings.wheel, &WHEELS[1]);
        assert_eq!(request.settings.start, 'A');
        assert_eq!(request.settings.step, 3);
    }

    #[test]
    fn test_argument_count() {
        assert_eq!(
            CipherRequest::from_args(&["2", "J", "-2"]).unwrap_err(),
            EnigmaError::InvalidArgumentCount(3)
        );
        let empty: [&str; 0] = [];
        assert_eq!(
            CipherRequest::from_args(&empty).unwrap_err(),
            EnigmaError::InvalidArgumentCount(0)
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            CipherRequest::from_args(&["7", "J", "1", "x"]).unwrap_err(),
            EnigmaError::InvalidWheelIndex("7".into())
        );
        assert_eq!(
            CipherRequest::from_args(&["1", "J", "x", "x"]).unwrap_err(),
            EnigmaError::InvalidStepValue("x".into())
        );
        assert_eq!(
            CipherRequest::from_args(&["1", "JJ", "1", "x"]).unwrap_err(),
            EnigmaError::InvalidStartLetter("JJ".into())
        );
        assert_eq!(
            run_cipher(&["1", "J", "1", "abc123"], &CipherOptions::default()).unwrap_err(),
            EnigmaError::InvalidInput('1')
        );
    }

    #[test]
    fn test_ungrouped_output() {
        let options = CipherOptions { group: 0 };
        let out = run_cipher(&["2", "J", "-2", "hello world"], &options).unwrap();
        assert_eq!(out, "GFUIMXWZNY");
    }
}
