//! Calculator expression state machine.
//!
//! Mirrors a pocket calculator: operations are applied left to right as soon
//! as the next operator is pressed (`2 + 3 * 4 =` gives 20).

use anyhow::Result;
use serde::Serialize;
use std::fmt;

use super::format::format_number;

/// Decimal places shown on the calculator display.
const DISPLAY_DECIMALS: usize = 10;

/// Binary operator keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*` or `×`
    Multiply,
    /// `/` or `÷`
    Divide,
}

impl Operator {
    /// Maps a key character to an operator.
    #[must_use]
    pub const fn from_key(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | 'x' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        let result = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide if rhs == 0.0 => return None,
            Self::Divide => lhs / rhs,
        };
        result.is_finite().then_some(result)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        };
        f.write_str(symbol)
    }
}

/// Calculator state.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: String,
    accumulator: Option<f64>,
    pending: Option<Operator>,
    /// The next digit starts a fresh number instead of appending
    awaiting_operand: bool,
    error: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a cleared calculator showing "0".
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            accumulator: None,
            pending: None,
            awaiting_operand: false,
            error: false,
        }
    }

    /// Current display text ("Error" after an invalid operation).
    #[must_use]
    pub fn display(&self) -> &str {
        if self.error {
            "Error"
        } else {
            &self.display
        }
    }

    /// True while the display shows an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error
    }

    /// Current display value.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        if self.error {
            None
        } else {
            self.display.parse().ok()
        }
    }

    /// Presses a digit key (0-9). Leaves an error state.
    pub fn input_digit(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }
        if self.error {
            *self = Self::new();
        }

        if self.awaiting_operand {
            self.display = digit.to_string();
            self.awaiting_operand = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else if self.display == "-0" {
            self.display = format!("-{digit}");
        } else {
            self.display.push(char::from(b'0' + digit));
        }
    }

    /// Presses the decimal point key.
    pub fn input_decimal(&mut self) {
        if self.error {
            *self = Self::new();
        }

        if self.awaiting_operand {
            self.display = "0.".to_string();
            self.awaiting_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Presses an operator key, evaluating any pending operation first.
    pub fn set_operator(&mut self, op: Operator) {
        if self.error {
            return;
        }

        // Pressing two operators in a row replaces the first.
        if self.awaiting_operand && self.pending.is_some() {
            self.pending = Some(op);
            return;
        }

        let Some(current) = self.value() else {
            return;
        };

        let result = match (self.accumulator, self.pending) {
            (Some(lhs), Some(pending)) => match pending.apply(lhs, current) {
                Some(v) => v,
                None => {
                    self.error = true;
                    return;
                }
            },
            _ => current,
        };

        self.accumulator = Some(result);
        self.display = format_number(result, DISPLAY_DECIMALS);
        self.pending = Some(op);
        self.awaiting_operand = true;
    }

    /// Presses `=`. Returns the result, or `None` on error.
    pub fn equals(&mut self) -> Option<f64> {
        if self.error {
            return None;
        }

        if let (Some(lhs), Some(op)) = (self.accumulator, self.pending) {
            let rhs = self.value()?;
            match op.apply(lhs, rhs) {
                Some(result) => {
                    self.display = format_number(result, DISPLAY_DECIMALS);
                }
                None => {
                    self.error = true;
                    return None;
                }
            }
        }

        self.accumulator = None;
        self.pending = None;
        self.awaiting_operand = true;
        self.value()
    }

    /// Presses `C`.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Presses `±`.
    ///
    /// Right after an operator this starts a negative operand; otherwise it
    /// negates the display (including a result shown after `=`).
    pub fn toggle_sign(&mut self) {
        if self.error {
            return;
        }
        if self.awaiting_operand && self.pending.is_some() {
            self.display = "-0".to_string();
            self.awaiting_operand = false;
            return;
        }
        if let Some(stripped) = self.display.strip_prefix('-') {
            self.display = stripped.to_string();
        } else {
            self.display.insert(0, '-');
        }
    }

    /// Presses `%`, dividing the display by 100.
    ///
    /// Leaves the typing state alone, so after an operator the next digit
    /// still starts the operand.
    pub fn percent(&mut self) {
        if let Some(v) = self.value() {
            self.display = format_number(v / 100.0, DISPLAY_DECIMALS);
        }
    }

    /// Presses backspace, removing the last typed character.
    pub fn backspace(&mut self) {
        if self.error || self.awaiting_operand {
            return;
        }
        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.display = "0".to_string();
        }
    }

    /// Feeds one key. Unknown keys are rejected.
    pub fn press(&mut self, key: char) -> Result<()> {
        match key {
            '0'..='9' => self.input_digit(key as u8 - b'0'),
            '.' | ',' => self.input_decimal(),
            '=' => {
                self.equals();
            }
            'c' | 'C' => self.clear(),
            '%' => self.percent(),
            '~' | '±' => self.toggle_sign(),
            '<' => self.backspace(),
            c if c.is_whitespace() => {}
            c => match Operator::from_key(c) {
                Some(op) => self.set_operator(op),
                None => anyhow::bail!("Unsupported calculator key '{c}'"),
            },
        }
        Ok(())
    }
}

/// Runs a key sequence such as `"12+3*2="` and returns the final display.
///
/// A trailing `=` is implied. Division by zero yields `"Error"`.
///
/// ```
/// use minitools::services::calculator::evaluate_sequence;
///
/// assert_eq!(evaluate_sequence("12+3*2").unwrap(), "30");
/// assert_eq!(evaluate_sequence("1/0").unwrap(), "Error");
/// ```
pub fn evaluate_sequence(keys: &str) -> Result<String> {
    let mut calc = Calculator::new();
    for key in keys.chars() {
        calc.press(key)?;
    }
    if !keys.trim_end().ends_with('=') {
        calc.equals();
    }
    Ok(calc.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_replace_leading_zero() {
        let mut calc = Calculator::new();
        calc.input_digit(0);
        calc.input_digit(7);
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_left_to_right_chaining() {
        assert_eq!(evaluate_sequence("2+3*4=").unwrap(), "20");
        assert_eq!(evaluate_sequence("10-4/2").unwrap(), "3");
    }

    #[test]
    fn test_decimals() {
        assert_eq!(evaluate_sequence("0.1+0.2").unwrap(), "0.3");
        assert_eq!(evaluate_sequence(".5*4").unwrap(), "2");
    }

    #[test]
    fn test_operator_replacement() {
        assert_eq!(evaluate_sequence("5+*2").unwrap(), "10");
    }

    #[test]
    fn test_division_by_zero_sets_error_until_digit() {
        let mut calc = Calculator::new();
        for key in "8/0=".chars() {
            calc.press(key).unwrap();
        }
        assert!(calc.is_error());
        assert_eq!(calc.display(), "Error");
        assert_eq!(calc.value(), None);

        calc.input_digit(4);
        assert!(!calc.is_error());
        assert_eq!(calc.display(), "4");
    }

    #[test]
    fn test_percent_and_sign() {
        assert_eq!(evaluate_sequence("50%").unwrap(), "0.5");
        assert_eq!(evaluate_sequence("9~+4").unwrap(), "-5");
    }

    #[test]
    fn test_sign_after_operator_starts_negative_operand() {
        assert_eq!(evaluate_sequence("9+~4=").unwrap(), "5");
        assert_eq!(evaluate_sequence("3*~2.5").unwrap(), "-7.5");
    }

    #[test]
    fn test_sign_after_equals_negates_result() {
        assert_eq!(evaluate_sequence("6*7=~").unwrap(), "-42");
        assert_eq!(evaluate_sequence("6*7=~1").unwrap(), "1");
        assert_eq!(evaluate_sequence("6*7=~+2=").unwrap(), "-40");
    }

    #[test]
    fn test_percent_does_not_extend_previous_operand() {
        assert_eq!(evaluate_sequence("9+%4=").unwrap(), "13");
        assert_eq!(evaluate_sequence("200+10%=").unwrap(), "200.1");
    }

    #[test]
    fn test_backspace() {
        let mut calc = Calculator::new();
        for key in "123<".chars() {
            calc.press(key).unwrap();
        }
        assert_eq!(calc.display(), "12");
        calc.backspace();
        calc.backspace();
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_clear() {
        let mut calc = Calculator::new();
        for key in "9*9".chars() {
            calc.press(key).unwrap();
        }
        calc.clear();
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn test_equals_repeated_keeps_value() {
        let mut calc = Calculator::new();
        for key in "6*7==".chars() {
            calc.press(key).unwrap();
        }
        assert_eq!(calc.display(), "42");
    }

    #[test]
    fn test_unknown_key() {
        assert!(evaluate_sequence("2^3").is_err());
    }
}
