use crate::wheel::WHEELS;

/// Describe every wheel in the registry
pub fn show_wheels() -> String {
    let mut output = String::new();

    output.push_str("Pocket Enigma Wheels\n");
    output.push_str("====================\n\n");

    for wheel in WHEELS.iter() {
        output.push_str(&format!(
            "  {}  {}  {}\n",
            wheel.index,
            wheel,
            if wheel.is_reciprocal() {
                "reciprocal"
            } else {
                "NOT reciprocal"
            }
        ));
    }

    output.push_str("\nA reciprocal wheel deciphers with the same settings that enciphered.\n");
    output
}
