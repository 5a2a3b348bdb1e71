//! Currency conversion with an explicit offline fallback.
//!
//! Rates come from a [`RateProvider`]. When the provider fails, the
//! converter switches to a hardcoded table of approximate USD rates and
//! reports [`RateSource::Fallback`] so callers can flag the figure as
//! approximate.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

/// Approximate rates per 1 USD, used when no live rates are available.
const FALLBACK_USD_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("JPY", 149.5),
    ("INR", 83.1),
    ("CAD", 1.36),
    ("AUD", 1.52),
    ("CHF", 0.88),
    ("CNY", 7.24),
    ("SGD", 1.34),
    ("AED", 3.67),
    ("MXN", 17.1),
    ("BRL", 4.97),
    ("KRW", 1330.0),
    ("ZAR", 18.6),
];

/// Errors from a rate provider.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The source could not be reached or read
    #[error("rate source unavailable: {0}")]
    Unavailable(String),

    /// The source answered with data that could not be parsed
    #[error("malformed rate data: {0}")]
    Malformed(String),

    /// The data was valid but lacked a requested currency
    #[error("currency not available: {0}")]
    MissingCurrency(String),
}

/// Rates quoted against a base currency (`1 base = rate target`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
    /// ISO 4217 code of the base currency
    pub base: String,
    /// Target code to units per one base
    pub rates: HashMap<String, f64>,
}

impl ExchangeRates {
    /// Units of `code` per one base unit. The base itself is always 1.
    #[must_use]
    pub fn rate(&self, code: &str) -> Option<f64> {
        if code == self.base {
            return Some(1.0);
        }
        self.rates.get(code).copied()
    }

    /// Converts `amount` of `from` into `to` through the base currency.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, FetchError> {
        let from_rate = self
            .rate(from)
            .ok_or_else(|| FetchError::MissingCurrency(from.to_string()))?;
        let to_rate = self
            .rate(to)
            .ok_or_else(|| FetchError::MissingCurrency(to.to_string()))?;
        Ok(amount / from_rate * to_rate)
    }
}

/// Source of live exchange rates.
pub trait RateProvider {
    /// Fetches rates quoted against `base`.
    fn fetch_rates(&self, base: &str) -> Result<ExchangeRates, FetchError>;
}

/// Reads rates from a JSON file shaped like `{"base": "USD", "rates": {...}}`.
#[derive(Debug, Clone)]
pub struct FileRateProvider {
    path: PathBuf,
}

impl FileRateProvider {
    /// Creates a provider reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RateProvider for FileRateProvider {
    fn fetch_rates(&self, base: &str) -> Result<ExchangeRates, FetchError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            FetchError::Unavailable(format!("{}: {e}", self.path.display()))
        })?;
        let rates: ExchangeRates = serde_json::from_str(&content)
            .map_err(|e| FetchError::Malformed(format!("{}: {e}", self.path.display())))?;

        if rates.rates.values().any(|r| !r.is_finite() || *r <= 0.0) {
            return Err(FetchError::Malformed(
                "rates must be positive numbers".to_string(),
            ));
        }

        if rates.base == base {
            Ok(rates)
        } else {
            rebase(&rates, base)
        }
    }
}

/// Provider that always fails; used when no live source is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRateProvider;

impl RateProvider for NoRateProvider {
    fn fetch_rates(&self, _base: &str) -> Result<ExchangeRates, FetchError> {
        Err(FetchError::Unavailable("no rate source configured".to_string()))
    }
}

/// Re-expresses `rates` against a different base currency.
fn rebase(rates: &ExchangeRates, base: &str) -> Result<ExchangeRates, FetchError> {
    let pivot = rates
        .rate(base)
        .ok_or_else(|| FetchError::MissingCurrency(base.to_string()))?;

    let mut rebased: HashMap<String, f64> = rates
        .rates
        .iter()
        .map(|(code, rate)| (code.clone(), rate / pivot))
        .collect();
    rebased.insert(rates.base.clone(), 1.0 / pivot);
    rebased.insert(base.to_string(), 1.0);

    Ok(ExchangeRates {
        base: base.to_string(),
        rates: rebased,
    })
}

/// The hardcoded approximate table, rebased onto `base` when possible.
#[must_use]
pub fn fallback_rates(base: &str) -> ExchangeRates {
    let usd = ExchangeRates {
        base: "USD".to_string(),
        rates: FALLBACK_USD_RATES
            .iter()
            .map(|(code, rate)| ((*code).to_string(), *rate))
            .collect(),
    };
    rebase(&usd, base).unwrap_or(usd)
}

/// Where a conversion's rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RateSource {
    /// The configured provider
    Live,
    /// The built-in approximate table
    Fallback,
}

/// A converted amount plus provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    /// Source amount
    pub amount: f64,
    /// Source currency code
    pub from: String,
    /// Target currency code
    pub to: String,
    /// Converted amount
    pub value: f64,
    /// Provenance of the rate
    pub source: RateSource,
}

/// Converts amounts, falling back to built-in rates when the provider fails.
#[derive(Debug, Clone)]
pub struct CurrencyConverter<P: RateProvider> {
    provider: P,
    base: String,
}

impl<P: RateProvider> CurrencyConverter<P> {
    /// Creates a converter quoting against `base`.
    pub fn new(provider: P, base: impl Into<String>) -> Self {
        Self {
            provider,
            base: normalize_code(&base.into()),
        }
    }

    /// Loads the rates to use: live if possible, fallback otherwise.
    pub fn rates(&self) -> (ExchangeRates, RateSource) {
        match self.provider.fetch_rates(&self.base) {
            Ok(rates) => {
                debug!("Using live exchange rates (base {})", rates.base);
                (rates, RateSource::Live)
            }
            Err(e) => {
                warn!("Exchange rate fetch failed, using fallback rates: {e}");
                (fallback_rates(&self.base), RateSource::Fallback)
            }
        }
    }

    /// Converts `amount` from one currency to another.
    ///
    /// A currency missing from live data is retried against the fallback
    /// table before giving up.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<Conversion, FetchError> {
        let from = normalize_code(from);
        let to = normalize_code(to);
        let (rates, mut source) = self.rates();

        let value = match rates.convert(amount, &from, &to) {
            Ok(v) => v,
            Err(FetchError::MissingCurrency(code)) if source == RateSource::Live => {
                warn!("Live rates lack {code}, using fallback rates");
                source = RateSource::Fallback;
                fallback_rates(&self.base).convert(amount, &from, &to)?
            }
            Err(e) => return Err(e),
        };

        Ok(Conversion {
            amount,
            from,
            to,
            value,
            source,
        })
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
