//! Money formatting.
//!
//! Pricing produces a [`Money`]; turning it into text is delegated to a
//! [`MoneyFormatter`] so hosts can pick their own locale rules.

use crate::money::Money;

/// Formats an amount for display.
pub trait MoneyFormatter: Send + Sync {
    fn format(&self, amount: &Money) -> String;
}

/// `R$19.90` / `$49.99` style: currency symbol followed by the amount with
/// a dot decimal separator and no grouping.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolFormatter;

impl MoneyFormatter for SymbolFormatter {
    fn format(&self, amount: &Money) -> String {
        amount.display()
    }
}

/// Locale-aware formatter with configurable separators.
#[derive(Debug, Clone)]
pub struct LocaleFormatter {
    decimal_separator: char,
    grouping_separator: Option<char>,
    symbol_spacing: bool,
}

impl LocaleFormatter {
    pub fn new(decimal_separator: char, grouping_separator: Option<char>) -> Self {
        Self {
            decimal_separator,
            grouping_separator,
            symbol_spacing: false,
        }
    }

    /// Put a space between the currency symbol and the amount.
    pub fn with_symbol_spacing(mut self, spacing: bool) -> Self {
        self.symbol_spacing = spacing;
        self
    }

    /// Brazilian Portuguese: `R$ 1.234,50`.
    pub fn pt_br() -> Self {
        Self::new(',', Some('.')).with_symbol_spacing(true)
    }

    /// US English: `$1,234.50`.
    pub fn en_us() -> Self {
        Self::new('.', Some(','))
    }

    fn group(&self, whole: u64) -> String {
        let digits = whole.to_string();
        let Some(separator) = self.grouping_separator else {
            return digits;
        };

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(ch);
        }
        grouped
    }
}

impl MoneyFormatter for LocaleFormatter {
    fn format(&self, amount: &Money) -> String {
        let (whole, fraction) = amount.split();
        let places = amount.currency.decimal_places() as usize;

        let mut number = self.group(whole);
        if places > 0 {
            number.push(self.decimal_separator);
            number.push_str(&format!("{:0places$}", fraction));
        }

        let sign = if amount.is_negative() { "-" } else { "" };
        let spacing = if self.symbol_spacing { " " } else { "" };
        format!("{}{}{}{}", sign, amount.currency.symbol(), spacing, number)
    }
}
