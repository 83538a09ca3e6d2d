//! # Currency Format
//!
//! Currency reference data and display helpers for monetary amounts.
//!
//! - `table` - Static metadata per currency code (digits, native symbol)
//! - `locale` - Locale conventions and the currency formatting facility
//! - `amount` - Formatting helpers with fallbacks for unsupported codes
//!
//! # Example
//! ```
//! use currency_format::{AmountFormatter, Locale};
//!
//! let formatter = AmountFormatter::new(Locale::EN_US);
//! assert_eq!(formatter.locale_amount(1234.5, "USD"), "$1,234.50");
//! assert_eq!(formatter.locale_amount(10.0, "USDT"), "₮10.00");
//! assert_eq!(formatter.stylized_amount(0.001, "USD"), "$ +0.00 USD");
//! ```

pub mod amount;
pub mod error;
pub mod locale;
pub mod table;

pub use amount::{
    AmountFormatter, decimal_digits, is_amount_less_than_rounding_error, locale_amount,
    native_symbol, stylized_amount,
};
pub use error::FormatError;
pub use locale::{Locale, SignDisplay, SymbolPlacement};
pub use table::{CurrencyMetadata, lookup};
