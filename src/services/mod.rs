//! Tool logic.
//!
//! Each module is a self-contained, synchronous tool: it takes plain values
//! and returns plain values, with no dependency on the CLI or on storage.

pub mod age;
pub mod calculator;
pub mod color_scheme;
pub mod conversion;
pub mod currency;
pub mod format;
pub mod hash;
pub mod number_base;
pub mod password;

// Re-export commonly used types and functions
pub use age::{calculate_age, AgeBreakdown};
pub use calculator::{evaluate_sequence, Calculator};
pub use color_scheme::ColorScheme;
pub use conversion::{convert, convert_input, ConversionOutcome};
pub use currency::{CurrencyConverter, FetchError, RateProvider, RateSource};
pub use format::format_number;
pub use hash::HashAlgorithm;
pub use number_base::{convert_base, NumberBase};
pub use password::{PasswordOptions, PasswordStrength};
