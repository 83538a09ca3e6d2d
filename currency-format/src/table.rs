//! Static currency reference table.
//!
//! Currencies are declared once with [`define_currencies!`] and indexed by
//! uppercase code on first access. The table is never mutated afterwards, so
//! lookups need no synchronization.
//!
//! # Adding a New Currency
//! Add a line to the `define_currencies!` invocation at the bottom:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     GEL => ("Georgian Lari", "GEL", "₾", 2),
//! }
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

/// Display metadata for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyMetadata {
    /// Uppercase ISO 4217 code (or informal ticker, e.g. `USDT`).
    pub code: &'static str,
    pub name: &'static str,
    /// International symbol, disambiguated across currencies (`CA$`, `MX$`).
    pub symbol: &'static str,
    /// Symbol used in the currency's own locale (`$`, `Bs`, `€`).
    pub symbol_native: &'static str,
    /// Fraction digits conventionally displayed.
    pub decimal_digits: u32,
}

/// Macro to declare the reference table.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     CODE => ("Name", "symbol", "symbol_native", decimal_digits),
/// }
/// ```
macro_rules! define_currencies {
    (
        $(
            $code:ident => ($name:literal, $symbol:literal, $native:literal, $digits:expr)
        ),* $(,)?
    ) => {
        static CURRENCIES: &[CurrencyMetadata] = &[
            $(
                CurrencyMetadata {
                    code: stringify!($code),
                    name: $name,
                    symbol: $symbol,
                    symbol_native: $native,
                    decimal_digits: $digits,
                }
            ),*
        ];
    };
}

static INDEX: LazyLock<HashMap<&'static str, &'static CurrencyMetadata>> =
    LazyLock::new(|| CURRENCIES.iter().map(|c| (c.code, c)).collect());

/// Looks up a currency by code, case-insensitively.
pub fn lookup(code: &str) -> Option<&'static CurrencyMetadata> {
    INDEX.get(code.trim().to_uppercase().as_str()).copied()
}

/// Returns every known currency, sorted by code.
pub fn all() -> Vec<&'static CurrencyMetadata> {
    let mut currencies: Vec<_> = CURRENCIES.iter().collect();
    currencies.sort_by_key(|c| c.code);
    currencies
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    // Americas
    USD => ("US Dollar", "$", "$", 2),
    CAD => ("Canadian Dollar", "CA$", "$", 2),
    MXN => ("Mexican Peso", "MX$", "$", 2),
    BOB => ("Bolivian Boliviano", "Bs", "Bs", 2),
    ARS => ("Argentine Peso", "AR$", "$", 2),
    BRL => ("Brazilian Real", "R$", "R$", 2),
    CLP => ("Chilean Peso", "CL$", "$", 0),
    COP => ("Colombian Peso", "CO$", "$", 0),
    PEN => ("Peruvian Sol", "PEN", "S/", 2),
    PYG => ("Paraguayan Guarani", "₲", "₲", 0),
    UYU => ("Uruguayan Peso", "$U", "$", 2),
    // Europe
    EUR => ("Euro", "€", "€", 2),
    GBP => ("British Pound Sterling", "£", "£", 2),
    CHF => ("Swiss Franc", "CHF", "CHF", 2),
    SEK => ("Swedish Krona", "Skr", "kr", 2),
    NOK => ("Norwegian Krone", "Nkr", "kr", 2),
    DKK => ("Danish Krone", "Dkr", "kr", 2),
    PLN => ("Polish Zloty", "zł", "zł", 2),
    CZK => ("Czech Republic Koruna", "Kč", "Kč", 2),
    HUF => ("Hungarian Forint", "Ft", "Ft", 0),
    RUB => ("Russian Ruble", "RUB", "₽", 2),
    TRY => ("Turkish Lira", "TL", "₺", 2),
    // Asia / Pacific
    JPY => ("Japanese Yen", "¥", "¥", 0),
    CNY => ("Chinese Yuan", "CN¥", "¥", 2),
    KRW => ("South Korean Won", "₩", "₩", 0),
    INR => ("Indian Rupee", "Rs", "₹", 2),
    IDR => ("Indonesian Rupiah", "Rp", "Rp", 0),
    AUD => ("Australian Dollar", "AU$", "$", 2),
    NZD => ("New Zealand Dollar", "NZ$", "$", 2),
    // Middle East / Africa
    KWD => ("Kuwaiti Dinar", "KD", "KD", 3),
    BHD => ("Bahraini Dinar", "BD", "BD", 3),
    JOD => ("Jordanian Dinar", "JD", "JD", 3),
    ZAR => ("South African Rand", "R", "R", 2),
    NGN => ("Nigerian Naira", "₦", "₦", 2),
    // Informal tickers
    BTC => ("Bitcoin", "BTC", "₿", 8),
    USDT => ("Tether", "USDT", "₮", 2),
    USDC => ("USD Coin", "USDC", "USDC", 2),
}
