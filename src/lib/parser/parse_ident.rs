// This file is part of the inicore package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Validity checking for option and variable names.

use phf::phf_set;

/// Words the ini grammar claims for itself; none of them can name an option.
pub static RESERVED_NAMES: phf::Set<&'static str> = phf_set! {
    "true", "false", "yes", "no", "on", "off", "none", "null",
};

/// Whether `name` is a well-formed identifier.
///
/// An identifier starts with an ASCII letter or underscore and continues with
/// ASCII alphanumerics or underscores. The empty string is not an identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Whether `name` can be used as an option name: a well-formed identifier
/// that is not reserved.
///
/// Reservation is case-insensitive, so `Off` is as unusable as `off`.
///
/// # Examples
///
/// ```rust
/// use inicore::parse_ident::is_valid_name;
/// assert!(is_valid_name("memory_limit"));
/// assert!(!is_valid_name("2fast"));
/// assert!(!is_valid_name("off"));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    is_identifier(name) && !RESERVED_NAMES.contains(name.to_lowercase().as_str())
}
