//! Fabricated license plate generation.

use rand::seq::IndexedRandom;
use rand::Rng;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Plate template shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlateTemplate {
    /// ABC123
    LettersThenDigits,
    /// 123ABC
    DigitsThenLetters,
    /// AB1234
    ShortLettersLongDigits,
}

impl PlateTemplate {
    /// All templates the generator draws from.
    pub const ALL: &'static [PlateTemplate] = &[
        PlateTemplate::LettersThenDigits,
        PlateTemplate::DigitsThenLetters,
        PlateTemplate::ShortLettersLongDigits,
    ];

    /// Generate a plate for this template.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self {
            PlateTemplate::LettersThenDigits => {
                format!("{}{}", random_chars(rng, LETTERS, 3), random_chars(rng, DIGITS, 3))
            }
            PlateTemplate::DigitsThenLetters => {
                format!("{}{}", random_chars(rng, DIGITS, 3), random_chars(rng, LETTERS, 3))
            }
            PlateTemplate::ShortLettersLongDigits => {
                format!("{}{}", random_chars(rng, LETTERS, 2), random_chars(rng, DIGITS, 4))
            }
        }
    }

    /// Whether a plate string fits this template.
    pub fn matches(&self, plate: &str) -> bool {
        let (letter_runs, digit_runs): (&[usize], &[usize]) = match self {
            PlateTemplate::LettersThenDigits => (&[0, 3], &[3, 6]),
            PlateTemplate::DigitsThenLetters => (&[3, 6], &[0, 3]),
            PlateTemplate::ShortLettersLongDigits => (&[0, 2], &[2, 6]),
        };

        let bytes = plate.as_bytes();
        if bytes.len() != 6 {
            return false;
        }

        bytes[letter_runs[0]..letter_runs[1]]
            .iter()
            .all(|b| b.is_ascii_uppercase())
            && bytes[digit_runs[0]..digit_runs[1]]
                .iter()
                .all(|b| b.is_ascii_digit())
    }
}

/// Generate a plate from a randomly chosen template.
pub fn generate_plate<R: Rng + ?Sized>(rng: &mut R) -> String {
    let template = PlateTemplate::ALL
        .choose(rng)
        .copied()
        .unwrap_or(PlateTemplate::LettersThenDigits);
    template.generate(rng)
}

/// Whether a plate string fits any declared template.
pub fn matches_any_template(plate: &str) -> bool {
    PlateTemplate::ALL.iter().any(|t| t.matches(plate))
}

fn random_chars<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], count: usize) -> String {
    (0..count)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
        .collect()
}
