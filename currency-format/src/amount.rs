//! Amount formatting helpers.
//!
//! All amounts are in major units (dollars, not cents). None of these
//! functions fail: when the locale facility rejects a currency code they fall
//! back to the reference table, and unknown codes get defaulted metadata.

use crate::locale::{Locale, SignDisplay};
use crate::table;

/// Fraction digits used by [`AmountFormatter::locale_amount`] when a rejected
/// code is also missing from the table.
const FALLBACK_DIGITS: u32 = 2;

/// Returns the number of fraction digits displayed for `code`, or 0 if unknown.
pub fn decimal_digits(code: &str) -> u32 {
    table::lookup(code).map_or(0, |c| c.decimal_digits)
}

/// Returns true if `amount` rounds to zero at the currency's display precision.
///
/// For example returns true if `|amount| < 0.005` for USD or EUR.
pub fn is_amount_less_than_rounding_error(amount: f64, code: &str) -> bool {
    let digits = decimal_digits(code);
    amount.abs() < 1.0 / 10f64.powi(digits as i32) / 2.0
}

/// Formats `amount` in the runtime locale. See [`AmountFormatter::locale_amount`].
pub fn locale_amount(amount: f64, code: &str) -> String {
    AmountFormatter::current().locale_amount(amount, code)
}

/// Returns the currency's narrow symbol. See [`AmountFormatter::native_symbol`].
pub fn native_symbol(code: &str) -> String {
    AmountFormatter::current().native_symbol(code)
}

/// Formats `amount` as `"{symbol} {number} {CODE}"`. See
/// [`AmountFormatter::stylized_amount`].
pub fn stylized_amount(amount: f64, code: &str) -> String {
    AmountFormatter::current().stylized_amount(amount, code)
}

/// Formats amounts against a fixed [`Locale`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmountFormatter {
    locale: Locale,
}

impl AmountFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Formatter for the process-wide runtime locale.
    pub fn current() -> Self {
        Self::new(Locale::current())
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Formats `amount` as a locale-aware currency string with a narrow symbol.
    ///
    /// Codes the locale cannot format (e.g. `USDT`) are rendered as
    /// `{symbol_native}{number}` using table metadata, defaulting to 2 digits
    /// and the uppercase code as symbol.
    pub fn locale_amount(&self, amount: f64, code: &str) -> String {
        match self.locale.format_currency(amount, code) {
            Ok(formatted) => formatted,
            Err(err) => {
                tracing::debug!(error = %err, "Falling back to manual currency formatting");
                let code = code.to_uppercase();
                let metadata = table::lookup(&code);
                let digits = metadata.map_or(FALLBACK_DIGITS, |c| c.decimal_digits);
                let symbol = metadata.map_or(code.as_str(), |c| c.symbol_native);
                let number = self.locale.format_decimal(amount, digits, SignDisplay::Auto);
                format!("{symbol}{number}")
            }
        }
    }

    /// Extracts the currency symbol by formatting zero and stripping digits
    /// and separators.
    ///
    /// Falls back to the table's native symbol, then to `code` as given.
    pub fn native_symbol(&self, code: &str) -> String {
        match self.locale.format_currency(0.0, code) {
            Ok(formatted) => formatted
                .chars()
                .filter(|c| !c.is_ascii_digit() && *c != '.' && *c != ',')
                .collect::<String>()
                .trim()
                .to_string(),
            Err(err) => {
                tracing::debug!(error = %err, "Falling back to table symbol");
                table::lookup(code)
                    .map(|c| c.symbol_native)
                    .filter(|symbol| !symbol.is_empty())
                    .unwrap_or(code)
                    .to_string()
            }
        }
    }

    /// Formats `amount` as `"{symbol} {number} {CODE}"`, independent of the
    /// locale's symbol placement.
    ///
    /// Amounts that round to zero but are nonzero keep an explicit sign
    /// (`$ +0.00 USD`) so they stay distinguishable from a true zero.
    pub fn stylized_amount(&self, amount: f64, code: &str) -> String {
        let symbol = self.native_symbol(code);
        let digits = decimal_digits(code);

        let sign = if is_amount_less_than_rounding_error(amount, code) {
            SignDisplay::ExceptZero
        } else {
            SignDisplay::Auto
        };
        let total = self.locale.format_decimal(amount, digits, sign);

        format!("{} {} {}", symbol, total, code.to_uppercase())
    }

    pub fn decimal_digits(&self, code: &str) -> u32 {
        decimal_digits(code)
    }

    pub fn is_amount_less_than_rounding_error(&self, amount: f64, code: &str) -> bool {
        is_amount_less_than_rounding_error(amount, code)
    }
}
