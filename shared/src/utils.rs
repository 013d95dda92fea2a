// Currency text handling shared by every price input: the engine's form
// session, the catalog importer and the CLI all go through this module.

/// Brazilian-locale currency parsing and formatting.
///
/// Display strings use `.` to group thousands and `,` for decimals
/// (`1.234,56`). Parsing also accepts the American decimal point when the
/// digits after a single dot make that the likelier reading.
pub mod brazilian_format {
    use std::str::FromStr;

    use anyhow::{anyhow, Result};

    use crate::models::{CurrencyInput, FinalizedPrice};

    const CURRENCY_SYMBOL: &str = "R$";

    /// Converts user-typed text (or an already canonical number) into the
    /// canonical value of a currency field.
    ///
    /// Returns `None` for empty input or text without a leading numeric part.
    /// Separator disambiguation:
    /// - both `,` and `.`: whichever comes last is the decimal point;
    /// - only `,`: decimal comma;
    /// - only `.`: several dots, or a single dot followed by 3+ digits, are
    ///   thousands groupings; a single dot followed by 1-2 digits is decimal.
    pub fn parse_currency(input: impl Into<CurrencyInput>) -> Option<f64> {
        let text = match input.into() {
            CurrencyInput::Number(n) => return n.is_finite().then_some(n),
            CurrencyInput::Text(s) => s,
            CurrencyInput::Empty => return None,
        };

        let cleaned: String = text
            .replace(CURRENCY_SYMBOL, "")
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if cleaned.is_empty() {
            return None;
        }

        parse_leading_float(&normalize_separators(&cleaned))
    }

    // Rewrites `cleaned` so that '.' is the only decimal point left.
    fn normalize_separators(cleaned: &str) -> String {
        match (cleaned.rfind(','), cleaned.rfind('.')) {
            (Some(comma), Some(dot)) if comma > dot => cleaned.replace('.', "").replacen(',', ".", 1),
            (Some(_), Some(_)) => cleaned.replace(',', ""),
            (Some(_), None) => cleaned.replacen(',', ".", 1),
            (None, Some(dot)) => {
                let single_dot = cleaned.matches('.').count() == 1;
                let fraction_len = cleaned[dot + 1..].chars().take_while(char::is_ascii_digit).count();
                if single_dot && fraction_len < 3 {
                    cleaned.to_string()
                } else {
                    cleaned.replace('.', "")
                }
            }
            (None, None) => cleaned.to_string(),
        }
    }

    // Parses the longest numeric prefix (`[+-]digits[.digits]`), ignoring
    // whatever follows it. At least one digit is required.
    fn parse_leading_float(s: &str) -> Option<f64> {
        let bytes = s.as_bytes();
        let mut end = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
        let mut digits = 0;
        let mut seen_dot = false;

        while let Some(&b) = bytes.get(end) {
            match b {
                b'0'..=b'9' => digits += 1,
                b'.' if !seen_dot => seen_dot = true,
                _ => break,
            }
            end += 1;
        }
        if digits == 0 {
            return None;
        }

        f64::from_str(&s[..end]).ok().filter(|v| v.is_finite())
    }

    /// Reformats a fragment the user is still typing.
    ///
    /// Never fails and never drops digits from the integer part (leading
    /// zeros included). A typed decimal separator is kept even before any
    /// decimal digit follows it, so `"20,"` stays `"20,"`.
    pub fn format_price_in_real_time(input: &str) -> String {
        let cleaned: String = input
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
            .collect();

        let (integer, decimal) = split_decimal(&cleaned);
        let mut display = group_thousands(&integer);
        if let Some(decimal) = decimal {
            display.push(',');
            display.push_str(&decimal);
        }
        display
    }

    fn split_decimal(cleaned: &str) -> (String, Option<String>) {
        if let Some(comma) = cleaned.rfind(',') {
            let decimal: String = digits_only(&cleaned[comma + 1..]).chars().take(2).collect();
            return (digits_only(&cleaned[..comma]), Some(decimal));
        }

        if cleaned.matches('.').count() == 1 {
            if let Some((integer, fraction)) = cleaned.split_once('.') {
                if (1..=2).contains(&fraction.len()) {
                    return (integer.to_string(), Some(fraction.to_string()));
                }
            }
        }

        (digits_only(cleaned), None)
    }

    fn digits_only(s: &str) -> String {
        s.chars().filter(char::is_ascii_digit).collect()
    }

    fn group_thousands(digits: &str) -> String {
        if digits.len() < 4 {
            return digits.to_string();
        }
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        grouped
    }

    /// Finalized display form of a price: whole numbers always get `,00`.
    /// Unparseable or empty input yields an empty string.
    pub fn format_price_for_input(input: impl Into<CurrencyInput>) -> String {
        match parse_currency(input) {
            Some(value) => {
                let mut display = format_price_in_real_time(&value.to_string());
                if !display.contains(',') {
                    display.push_str(",00");
                }
                display
            }
            None => String::new(),
        }
    }

    /// What a price field does when it loses focus: keep a positive canonical
    /// value and its normalized display, or clear the field.
    pub fn finalize_on_blur(display: &str) -> FinalizedPrice {
        match parse_currency(display) {
            Some(value) if value > 0.0 => FinalizedPrice {
                value: Some(value),
                display: format_price_for_input(value),
            },
            _ => FinalizedPrice::cleared(),
        }
    }

    // Counts such as stock quantities: "24.228" is 24228.
    pub fn parse_quantity(s: &str) -> Result<u32> {
        s.trim()
            .replace('.', "")
            .parse::<u32>()
            .map_err(|e| anyhow!("Failed to parse quantity '{}': {}", s, e))
    }

}
