use crate::stats::{chi_square_english, index_of_coincidence, ENGLISH_IC};
use anyhow::{bail, Result};
use pocket_enigma::wheel::{wheel, ALPHABET_LEN, WHEELS};
use pocket_enigma::{process, Wheel};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// One guess at the settings used for a ciphertext
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub wheel: usize,
    pub start: char,
    pub step: i64,
    pub plaintext: String,
    pub score: f64,
}

pub struct SearchOptions {
    /// Number of candidates to keep
    pub top: usize,
    /// Restrict the search to one wheel
    pub wheel: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { top: 5, wheel: None }
    }
}

/// Strip group spaces and uppercase, rejecting anything that is not a letter
pub fn normalize(ciphertext: &str) -> Result<String> {
    // The identity wheel validates without changing anything
    let letters = process(&WHEELS[0], 'A', 0, ciphertext)?;
    if letters.is_empty() {
        bail!("Ciphertext has no letters");
    }
    Ok(letters)
}

/// Try every wheel, start letter and step, best English-looking first.
///
/// Steps are only tried in 0..26 since the wheel turns modulo 26.
/// Settings that produce the same plaintext are reported once.
pub fn search(ciphertext: &str, options: &SearchOptions) -> Result<Vec<Candidate>> {
    let letters = normalize(ciphertext)?;
    let wheels: Vec<&'static Wheel> = match options.wheel {
        Some(index) => vec![wheel(index)?],
        None => WHEELS.iter().collect(),
    };

    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    for w in wheels {
        for start in (b'A'..=b'Z').map(char::from) {
            for step in 0..ALPHABET_LEN as i64 {
                let plaintext = process(w, start, step, &letters)?;
                if !seen.insert(plaintext.clone()) {
                    continue;
                }
                let score = chi_square_english(&plaintext);
                candidates.push(Candidate {
                    wheel: w.index,
                    start,
                    step,
                    plaintext,
                    score,
                });
            }
        }
        debug!(wheel = w.name, tried = candidates.len(), "wheel searched");
    }

    candidates.sort_by(|a, b| a.score.total_cmp(&b.score));
    candidates.truncate(options.top);
    Ok(candidates)
}

/// Render a search as a plain-text report
pub fn report(ciphertext: &str, candidates: &[Candidate]) -> Result<String> {
    let letters = normalize(ciphertext)?;

    let mut output = String::new();
    output.push_str("Pocket Enigma Codebreaker\n");
    output.push_str("=========================\n\n");
    output.push_str(&format!("Ciphertext letters: {}\n", letters.len()));
    output.push_str(&format!(
        "Index of coincidence: {:.4} (English {:.4})\n\n",
        index_of_coincidence(&letters),
        ENGLISH_IC
    ));

    output.push_str(&format!(
        "{:>4}  {:>5}  {:>5}  {:>4}  {:>9}  {}\n",
        "rank", "wheel", "start", "step", "chi-sq", "plaintext"
    ));
    for (rank, candidate) in candidates.iter().enumerate() {
        output.push_str(&format!(
            "{:>4}  {:>5}  {:>5}  {:>4}  {:>9.2}  {}\n",
            rank + 1,
            candidate.wheel,
            candidate.start,
            candidate.step,
            candidate.score,
            candidate.plaintext
        ));
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAINTEXT: &str = "it was the best of times it was the worst of times \
        it was the age of wisdom it was the age of foolishness";

    fn expected_plaintext() -> String {
        PLAINTEXT.replace(' ', "").to_uppercase()
    }

    #[test]
    fn test_search_recovers_english() {
        let ciphertext = process(&WHEELS[1], 'K', 3, PLAINTEXT).unwrap();
        let candidates = search(&ciphertext, &SearchOptions::default()).unwrap();

        assert_eq!(candidates.len(), 5);
        assert_eq!(candidates[0].plaintext, expected_plaintext());
        assert_eq!(candidates[0].wheel, 1);
        assert_eq!(candidates[0].start, 'K');
        assert_eq!(candidates[0].step, 3);
        assert!(candidates.windows(2).all(|w| w[0].score <= w[1].score));
    }

    #[test]
    fn test_negative_step_reported_mod_26() {
        let ciphertext = process(&WHEELS[2], 'J', -2, PLAINTEXT).unwrap();
        let options = SearchOptions {
            top: 1,
            wheel: Some(2),
        };
        let best = &search(&ciphertext, &options).unwrap()[0];
        assert_eq!(best.plaintext, expected_plaintext());
        assert_eq!((best.start, best.step), ('J', 24));
    }

    #[test]
    fn test_duplicate_plaintexts_collapsed() {
        // The identity wheel gives the same text for every setting
        let options = SearchOptions {
            top: usize::MAX,
            wheel: Some(0),
        };
        let candidates = search("HELLO", &options).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].plaintext, "HELLO");
    }

    #[test]
    fn test_rejects_bad_ciphertext() {
        assert!(search("ABC1", &SearchOptions::default()).is_err());
        assert!(search("   ", &SearchOptions::default()).is_err());
        let options = SearchOptions {
            top: 1,
            wheel: Some(9),
        };
        assert!(search("ABC", &options).is_err());
    }

    #[test]
    fn test_report_lists_candidates() {
        let candidates = search("GFUIM XWZNY", &SearchOptions::default()).unwrap();
        let report = report("GFUIM XWZNY", &candidates).unwrap();
        assert!(report.contains("Pocket Enigma Codebreaker"));
        assert!(report.contains("Ciphertext letters: 10"));
        assert_eq!(report.lines().filter(|l| l.trim_start().starts_with('1')).count(), 1);
    }
}
