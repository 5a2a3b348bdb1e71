//! Random password generation.

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fmt;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Shortest password accepted.
pub const MIN_LENGTH: usize = 4;
/// Longest password accepted.
pub const MAX_LENGTH: usize = 128;

/// Which character classes to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    /// Number of characters
    pub length: usize,
    /// Include A-Z
    pub uppercase: bool,
    /// Include a-z
    pub lowercase: bool,
    /// Include 0-9
    pub digits: bool,
    /// Include punctuation
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl PasswordOptions {
    fn classes(&self) -> Vec<&'static [u8]> {
        [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter_map(|(enabled, set)| enabled.then_some(set))
        .collect()
    }

    /// Checks length bounds and that at least one class is enabled.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            anyhow::bail!(
                "Password length must be between {MIN_LENGTH} and {MAX_LENGTH}, got {}",
                self.length
            );
        }
        if self.classes().is_empty() {
            anyhow::bail!("At least one character set must be enabled");
        }
        Ok(())
    }
}

/// Generates a password using the thread-local RNG.
pub fn generate(options: &PasswordOptions) -> Result<String> {
    generate_with(options, &mut rand::thread_rng())
}

/// Generates a password from `rng`.
///
/// Every enabled class contributes at least one character; the rest are
/// drawn from the union of enabled classes and the result is shuffled.
pub fn generate_with<R: Rng + ?Sized>(options: &PasswordOptions, rng: &mut R) -> Result<String> {
    options.validate()?;

    let classes = options.classes();
    let pool: Vec<u8> = classes.concat();

    let mut chars: Vec<u8> = classes
        .iter()
        .filter_map(|set| set.choose(rng).copied())
        .collect();
    while chars.len() < options.length {
        if let Some(&c) = pool.choose(rng) {
            chars.push(c);
        }
    }
    chars.shuffle(rng);

    Ok(chars.into_iter().map(char::from).collect())
}

/// Rough strength rating shown next to a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    /// Short or single-class
    Weak,
    /// Reasonable length with some variety
    Medium,
    /// Long with most classes present
    Strong,
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        };
        f.write_str(label)
    }
}

/// Rates a password from its length and the number of character classes used.
#[must_use]
pub fn strength(password: &str) -> PasswordStrength {
    let variety = [
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ]
    .into_iter()
    .filter(|present| *present)
    .count();

    let length = password.chars().count();
    if length >= 12 && variety >= 3 {
        PasswordStrength::Strong
    } else if length >= 8 && variety >= 2 {
        PasswordStrength::Medium
    } else {
        PasswordStrength::Weak
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_length_respected() {
        let mut rng = StdRng::seed_from_u64(7);
        for length in [4, 16, 128] {
            let options = PasswordOptions {
                length,
                ..PasswordOptions::default()
            };
            assert_eq!(generate_with(&options, &mut rng).unwrap().len(), length);
        }
    }

    #[test]
    fn test_every_enabled_class_present() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let password = generate_with(
                &PasswordOptions {
                    length: 4,
                    ..PasswordOptions::default()
                },
                &mut rng,
            )
            .unwrap();
            assert!(password.bytes().any(|c| UPPERCASE.contains(&c)));
            assert!(password.bytes().any(|c| LOWERCASE.contains(&c)));
            assert!(password.bytes().any(|c| DIGITS.contains(&c)));
            assert!(password.bytes().any(|c| SYMBOLS.contains(&c)));
        }
    }

    #[test]
    fn test_digits_only() {
        let options = PasswordOptions {
            length: 10,
            uppercase: false,
            lowercase: false,
            digits: true,
            symbols: false,
        };
        let password = generate(&options).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_invalid_options() {
        let none = PasswordOptions {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
            ..PasswordOptions::default()
        };
        assert!(generate(&none).is_err());

        let short = PasswordOptions {
            length: 3,
            ..PasswordOptions::default()
        };
        assert!(generate(&short).is_err());
    }

    #[test]
    fn test_strength() {
        assert_eq!(strength("abc"), PasswordStrength::Weak);
        assert_eq!(strength("abcdefgh1"), PasswordStrength::Medium);
        assert_eq!(strength("Abcdefgh123!"), PasswordStrength::Strong);
    }
}
