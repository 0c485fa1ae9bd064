// This file is part of the inicore package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// spell-checker:ignore (ToDO) kibibytes mebibytes gibibytes

/// Shorthand unit symbols and the power of 1024 each one denotes.
///
/// `k` is kibibytes, `m` is mebibytes, `g` is gibibytes. Symbols are compared
/// against the lowercased remainder of the input, so `K` and `k` are the same
/// symbol.
pub const SHORT_NOTATION_SYMBOLS: [(&str, u32); 3] = [("k", 1), ("m", 2), ("g", 3)];

/// Parse a shorthand byte quantity into an exact number of bytes.
///
/// A shorthand string comprises an optional signed decimal amount and an
/// optional unit symbol from [`SHORT_NOTATION_SYMBOLS`]. Parsing never fails;
/// instead of rejecting input, a few leniency extensions apply:
///
/// * an unrecognized symbol (or none at all) leaves the amount unmultiplied,
/// * a missing amount counts as exactly 1 when a recognized symbol is present,
/// * the symbol is matched case-insensitively,
/// * a negative amount is supported.
///
/// A string with neither an amount nor a recognized symbol is zero bytes.
/// Amounts beyond the `i64` range clamp to the nearest representable value.
///
/// # Examples
///
/// ```rust
/// use inicore::parse_shorthand::parse_shorthand;
/// assert_eq!(2048, parse_shorthand("2k"));
/// assert_eq!(2, parse_shorthand("2z"));
/// assert_eq!(1024, parse_shorthand("k"));
/// assert_eq!(-2048, parse_shorthand("-2K"));
/// assert_eq!(0, parse_shorthand(""));
/// ```
pub fn parse_shorthand(short: &str) -> i64 {
    // Split the input into amount and symbol parts.
    // For example, if the input is "-2K", the amount is "-2" and the symbol "K".
    let unsigned = short.strip_prefix('-').unwrap_or(short);
    let digits = unsigned.chars().take_while(|c| c.is_ascii_digit()).count();
    let amount_len = if digits == 0 {
        // A sign with no digit after it belongs to the symbol part.
        0
    } else {
        short.len() - unsigned.len() + digits
    };
    let (amount, symbol) = short.split_at(amount_len);
    let symbol = symbol.to_lowercase();

    match symbol_exponent(&symbol) {
        Some(exponent) => {
            // A bare symbol counts as one unit: "k" reads as "1k".
            let amount = if amount.is_empty() {
                1
            } else {
                parse_amount(amount)
            };
            amount.saturating_mul(1024_i64.pow(exponent))
        }
        // The symbol is not recognized; the amount stands unmultiplied,
        // and no amount at all is zero bytes.
        None => parse_amount(amount),
    }
}

/// Look up the exponent a unit symbol denotes, if the symbol is recognized.
///
/// The lookup is exact; fold the symbol to lowercase first.
pub fn symbol_exponent(symbol: &str) -> Option<u32> {
    SHORT_NOTATION_SYMBOLS
        .iter()
        .find(|&&(s, _)| s == symbol)
        .map(|&(_, exponent)| exponent)
}

fn parse_amount(amount: &str) -> i64 {
    if amount.is_empty() {
        return 0;
    }
    // The scan only admits an optional '-' and ASCII digits, so the sole
    // remaining parse failure is an amount outside the i64 range.
    amount.parse().unwrap_or(if amount.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}
