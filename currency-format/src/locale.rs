//! Locale conventions for number and currency formatting.
//!
//! A [`Locale`] knows its decimal and group separators and where the currency
//! symbol goes. Currency formatting only accepts well-formed ISO 4217 codes;
//! anything else (informal tickers such as `USDT`) is rejected with
//! [`FormatError::UnsupportedCurrency`] so callers can fall back.

use std::env;
use std::fmt;
use std::sync::LazyLock;

use crate::error::FormatError;
use crate::table;

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

/// Fraction digits used for well-formed codes missing from the table.
const DEFAULT_CURRENCY_DIGITS: u32 = 2;

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$1.00`
    Prefix,
    /// `Bs 1,00`
    PrefixSpaced,
    /// `1,00 €`
    SuffixSpaced,
}

/// When to render an explicit sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignDisplay {
    /// Minus sign for negative values only.
    #[default]
    Auto,
    /// `+` or `-` for every nonzero value, even one that rounds to zero.
    ExceptZero,
}

impl SignDisplay {
    fn prefix(self, amount: f64) -> &'static str {
        match self {
            _ if amount < 0.0 => "-",
            SignDisplay::ExceptZero if amount > 0.0 => "+",
            _ => "",
        }
    }
}

/// Number and currency conventions for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    tag: &'static str,
    decimal: char,
    group: char,
    placement: SymbolPlacement,
}

static LOCALES: &[Locale] = &[
    Locale::EN_US,
    Locale::new("en-GB", '.', ',', SymbolPlacement::Prefix),
    Locale::new("es-BO", ',', '.', SymbolPlacement::PrefixSpaced),
    Locale::new("es-ES", ',', '.', SymbolPlacement::SuffixSpaced),
    Locale::new("es-MX", '.', ',', SymbolPlacement::Prefix),
    Locale::new("de-DE", ',', '.', SymbolPlacement::SuffixSpaced),
    Locale::new("fr-FR", ',', NARROW_NBSP, SymbolPlacement::SuffixSpaced),
    Locale::new("pt-BR", ',', '.', SymbolPlacement::PrefixSpaced),
    Locale::new("ja-JP", '.', ',', SymbolPlacement::Prefix),
];

static CURRENT: LazyLock<Locale> = LazyLock::new(|| {
    let locale = Locale::from_env();
    tracing::debug!(locale = %locale, "Detected runtime locale");
    locale
});

impl Locale {
    /// The fallback locale.
    pub const EN_US: Locale = Locale::new("en-US", '.', ',', SymbolPlacement::Prefix);

    const fn new(
        tag: &'static str,
        decimal: char,
        group: char,
        placement: SymbolPlacement,
    ) -> Self {
        Self {
            tag,
            decimal,
            group,
            placement,
        }
    }

    /// Returns the BCP 47 tag, e.g. `es-BO`.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal
    }

    pub fn group_separator(&self) -> char {
        self.group
    }

    pub fn placement(&self) -> SymbolPlacement {
        self.placement
    }

    /// Returns all built-in locales.
    pub fn available() -> &'static [Locale] {
        LOCALES
    }

    /// Parses a BCP 47 tag or POSIX locale name (`es_BO.UTF-8`).
    ///
    /// Falls back to the first locale sharing the language subtag. Returns
    /// `None` when neither matches.
    pub fn parse(name: &str) -> Option<Locale> {
        let tag = name
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim()
            .replace('_', "-");
        if tag.is_empty() {
            return None;
        }

        if let Some(exact) = LOCALES.iter().find(|l| l.tag.eq_ignore_ascii_case(&tag)) {
            return Some(*exact);
        }

        let language = tag.split('-').next().unwrap_or_default();
        LOCALES
            .iter()
            .find(|l| {
                l.tag
                    .split('-')
                    .next()
                    .is_some_and(|lang| lang.eq_ignore_ascii_case(language))
            })
            .copied()
    }

    /// Like [`Locale::parse`], defaulting to `en-US`.
    pub fn resolve(name: &str) -> Locale {
        Self::parse(name).unwrap_or(Self::EN_US)
    }

    /// Detects the locale from `LC_ALL`, `LC_MONETARY` and `LANG`, in that order.
    pub fn from_env() -> Locale {
        ["LC_ALL", "LC_MONETARY", "LANG"]
            .iter()
            .filter_map(|var| env::var(var).ok())
            .filter(|value| !value.is_empty() && value != "C" && value != "POSIX")
            .find_map(|value| Self::parse(&value))
            .unwrap_or(Self::EN_US)
    }

    /// The process-wide runtime locale, detected once.
    pub fn current() -> Locale {
        *CURRENT
    }

    /// Formats `amount` as currency with a narrow symbol.
    ///
    /// The fraction digits come from the reference table (2 when the code is
    /// unknown). Fails for codes that are not three ASCII letters.
    pub fn format_currency(&self, amount: f64, code: &str) -> Result<String, FormatError> {
        let code = normalize_iso_code(code)?;
        let metadata = table::lookup(&code);
        let digits = metadata.map_or(DEFAULT_CURRENCY_DIGITS, |m| m.decimal_digits);
        let symbol = metadata.map_or(code.as_str(), |m| m.symbol_native);

        let sign = SignDisplay::Auto.prefix(amount);
        let number = self.format_magnitude(amount.abs(), digits);

        Ok(match self.placement {
            SymbolPlacement::Prefix => format!("{sign}{symbol}{number}"),
            SymbolPlacement::PrefixSpaced => format!("{sign}{symbol}{NBSP}{number}"),
            SymbolPlacement::SuffixSpaced => format!("{sign}{number}{NBSP}{symbol}"),
        })
    }

    /// Formats `amount` as a plain number with exactly `digits` fraction digits.
    pub fn format_decimal(&self, amount: f64, digits: u32, sign: SignDisplay) -> String {
        let sign = sign.prefix(amount);
        format!("{sign}{}", self.format_magnitude(amount.abs(), digits))
    }

    fn format_magnitude(&self, magnitude: f64, digits: u32) -> String {
        if magnitude.is_nan() {
            return "NaN".to_string();
        }
        if magnitude.is_infinite() {
            return "∞".to_string();
        }

        let fixed = format!("{:.*}", digits as usize, magnitude);
        let (integer, fraction) = match fixed.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut out = group_digits(integer, self.group);
        if let Some(fraction) = fraction {
            out.push(self.decimal);
            out.push_str(fraction);
        }
        out
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::EN_US
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown locale: {}", s))
    }
}

fn normalize_iso_code(code: &str) -> Result<String, FormatError> {
    let trimmed = code.trim();
    if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(trimmed.to_ascii_uppercase())
    } else {
        Err(FormatError::UnsupportedCurrency(code.to_string()))
    }
}

fn group_digits(integer: &str, separator: char) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len_utf8());
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
    out
}
