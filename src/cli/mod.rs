pub mod encipher;
pub mod wheels;

pub use encipher::*;
pub use wheels::*;

/// User instructions shown alongside any command-line error
pub fn usage() -> String {
    let mut output = String::new();
    output.push_str("usage: pocket-enigma <wheel_no> <start_letter> <step> <message>\n");
    output.push_str("e.g. pocket-enigma 2 J -2 hello world\n");
    output.push_str("options (before the wheel number): --group <N>, --wheels, -v, -V; see --help\n");
    output
}
