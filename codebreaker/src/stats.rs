use pocket_enigma::wheel::ALPHABET_LEN;

/// Relative frequency (percent) of each letter A-Z in English text
pub const ENGLISH_FREQUENCIES: [f64; ALPHABET_LEN] = [
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094, 6.966, 0.153, 0.772, 4.025, 2.406,
    6.749, 7.507, 1.929, 0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.360, 0.150, 1.974, 0.074,
];

/// Index of coincidence of English text, for comparison
pub const ENGLISH_IC: f64 = 0.0667;

/// Count letters A-Z (case-insensitive), ignoring anything else
pub fn letter_counts(text: &str) -> [u64; ALPHABET_LEN] {
    let mut freq = [0u64; ALPHABET_LEN];
    for byte in text.bytes().filter(u8::is_ascii_alphabetic) {
        freq[(byte.to_ascii_uppercase() - b'A') as usize] += 1;
    }
    freq
}

/// Chi-square distance of the text's letter counts from English.
/// Lower means more English-like.
pub fn chi_square_english(text: &str) -> f64 {
    let freq = letter_counts(text);
    let total: u64 = freq.iter().sum();
    if total == 0 {
        return f64::INFINITY;
    }

    let mut chi_square = 0.0;
    for (&count, &percent) in freq.iter().zip(ENGLISH_FREQUENCIES.iter()) {
        let expected = total as f64 * percent / 100.0;
        let diff = count as f64 - expected;
        chi_square += diff * diff / expected;
    }
    chi_square
}

/// Probability that two letters drawn from the text are equal
pub fn index_of_coincidence(text: &str) -> f64 {
    let freq = letter_counts(text);
    let total: u64 = freq.iter().sum();
    if total < 2 {
        return 0.0;
    }
    let numerator: u64 = freq
        .iter()
        .map(|&c| if c > 1 { c * (c - 1) } else { 0 })
        .sum();
    numerator as f64 / (total * (total - 1)) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequencies_sum_to_one_hundred() {
        let sum: f64 = ENGLISH_FREQUENCIES.iter().sum();
        assert!((sum - 100.0).abs() < 0.1, "sum was {}", sum);
    }

    #[test]
    fn test_letter_counts_ignore_case_and_spaces() {
        let freq = letter_counts("Ab a Z!");
        assert_eq!(freq[0], 2);
        assert_eq!(freq[1], 1);
        assert_eq!(freq[25], 1);
        assert_eq!(freq.iter().sum::<u64>(), 4);
    }

    #[test]
    fn test_english_scores_below_noise() {
        let english = chi_square_english("it was the best of times it was the worst of times");
        let noise = chi_square_english("QZXJKVQZXJKVWQZXJKV");
        assert!(english < noise);
    }

    #[test]
    fn test_empty_text_scores_worst() {
        assert!(chi_square_english("").is_infinite());
        assert_eq!(index_of_coincidence(""), 0.0);
    }

    #[test]
    fn test_index_of_coincidence() {
        assert_eq!(index_of_coincidence("AAAA"), 1.0);
        assert_eq!(index_of_coincidence("ABCD"), 0.0);
        // AAB: one matching pair out of three
        assert!((index_of_coincidence("AAB") - 1.0 / 3.0).abs() < 1e-12);
    }
}
