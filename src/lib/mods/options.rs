// This file is part of the inicore package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// spell-checker:ignore (ToDO) truthy

//! Lookup and assertion for runtime configuration options.
//!
//! [`OptionSource`] is the capability the rest of the crate is written
//! against: a named option resolves to a string value, or to nothing when the
//! source does not know it. An option that exists with an empty value and an
//! option that does not exist are deliberately distinct outcomes.
//!
//! Sources backed by the process environment ([`EnvSource`]), an ini file
//! ([`IniSource`]) and an in-memory table ([`TableSource`]) are provided;
//! callers with different backing inject their own implementation.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use crate::display::Quotable;

/// Errors raised while constructing an option source.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The options file could not be read or parsed.
    #[error("cannot load options from {}: {}", .path.quote(), .error)]
    Load {
        path: PathBuf,
        #[source]
        error: ini::Error,
    },
}

/// A provider of named runtime options.
pub trait OptionSource {
    /// Look up the value of the option named `name`.
    ///
    /// Returns `None` when the option is unknown to the source. A known
    /// option with an empty value is `Some` of the empty string, never
    /// `None`.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// Options read from the process environment.
///
/// A variable whose content is not valid Unicode is reported as unknown.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvSource;

impl OptionSource for EnvSource {
    fn lookup(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

/// Options read from an ini file.
///
/// A plain name resolves in the general section; a `section.key` name
/// resolves `key` inside `[section]`.
#[derive(Debug)]
pub struct IniSource {
    ini: Ini,
}

impl IniSource {
    /// Load options from the ini file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::Load`] when the file cannot be read or is not
    /// well-formed ini.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, OptionsError> {
        let path = path.as_ref();
        let ini = Ini::load_from_file(path).map_err(|error| OptionsError::Load {
            path: path.to_path_buf(),
            error,
        })?;
        Ok(Self { ini })
    }
}

impl OptionSource for IniSource {
    fn lookup(&self, name: &str) -> Option<String> {
        let value = match name.split_once('.') {
            Some((section, key)) => self.ini.get_from(Some(section), key),
            None => self.ini.general_section().get(name),
        };
        value.map(ToString::to_string)
    }
}

/// Options held in an in-memory table.
///
/// The fixture form of [`OptionSource`]: tests and embedders preload it with
/// whatever the run needs.
#[derive(Clone, Debug, Default)]
pub struct TableSource {
    options: HashMap<String, String>,
}

impl TableSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an option.
    pub fn set<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) -> &mut Self {
        self.options.insert(name.into(), value.into());
        self
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for TableSource {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            options: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl OptionSource for TableSource {
    fn lookup(&self, name: &str) -> Option<String> {
        self.options.get(name).cloned()
    }
}

/// An expectation to check an option value against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expected<'a> {
    /// The option compares equal to this exact string.
    Value(&'a str),
    /// The option reads as enabled (`true`) or disabled (`false`) under the
    /// boolean vocabulary of [`truthy`].
    Enabled(bool),
    /// The option exists but carries no value.
    Unset,
}

/// Interpret an option value as an ini-style boolean.
///
/// `1`, `on`, `yes` and `true` (any case) read as enabled; `0`, `off`, `no`,
/// `false`, `none`, `null` and the empty string read as disabled. Every other
/// value reads as enabled, matching the loose convention that any non-empty,
/// non-negating string switches a flag on.
pub fn truthy(value: &str) -> bool {
    !matches!(
        value.to_lowercase().as_str(),
        "" | "0" | "off" | "no" | "false" | "none" | "null"
    )
}

/// Check the option named `name` against an expectation.
///
/// Returns `None` when `source` does not know the option at all, otherwise
/// whether the value meets the expectation. An option with an empty value is
/// still a known option: it fails [`Expected::Value`] comparisons against
/// non-empty strings, reads as disabled for [`Expected::Enabled`], and is the
/// only value meeting [`Expected::Unset`].
pub fn assert_option(source: &dyn OptionSource, name: &str, expected: &Expected) -> Option<bool> {
    let value = source.lookup(name)?;
    let meets = match expected {
        Expected::Value(expected) => value == *expected,
        Expected::Enabled(enabled) => truthy(&value) == *enabled,
        Expected::Unset => value.is_empty(),
    };
    Some(meets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn table_source_distinguishes_unknown_from_empty() {
        let mut source = TableSource::new();
        source.set("error_append", "");
        assert_eq!(Some(String::new()), source.lookup("error_append"));
        assert_eq!(None, source.lookup("errorappend"));
    }

    #[test]
    fn table_source_set_replaces() {
        let mut source = TableSource::new();
        source.set("memory_limit", "2k").set("memory_limit", "4k");
        assert_eq!(Some("4k".to_string()), source.lookup("memory_limit"));
    }

    #[test]
    fn env_source_reads_process_environment() {
        env::set_var("INICORE_TEST_OPTION", "2k");
        let source = EnvSource;
        assert_eq!(
            Some("2k".to_string()),
            source.lookup("INICORE_TEST_OPTION")
        );
        assert_eq!(None, source.lookup("INICORE_TEST_OPTION_MISSING"));
        env::remove_var("INICORE_TEST_OPTION");
    }

    #[test]
    fn ini_source_lookup() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "memory_limit = 512m\n\n[logging]\nlevel = debug\n").unwrap();
        let source = IniSource::from_file(file.path()).unwrap();
        assert_eq!(Some("512m".to_string()), source.lookup("memory_limit"));
        assert_eq!(Some("debug".to_string()), source.lookup("logging.level"));
        assert_eq!(None, source.lookup("level"));
        assert_eq!(None, source.lookup("logging.missing"));
    }

    #[test]
    fn ini_source_missing_file() {
        let err = IniSource::from_file("/definitely/not/here.ini").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("cannot load options from"), "{message}");
        assert!(message.contains("here.ini"), "{message}");
    }

    #[test]
    fn assert_option_three_way() {
        let source: TableSource = [
            ("display_errors", "On"),
            ("user_agent", "curl/7.65.1"),
            ("error_append", ""),
        ]
        .into_iter()
        .collect();

        // unknown option: no verdict at all
        assert_eq!(None, assert_option(&source, "foobar", &Expected::Unset));
        assert_eq!(
            None,
            assert_option(&source, "foobar", &Expected::Enabled(false))
        );

        assert_eq!(
            Some(true),
            assert_option(&source, "user_agent", &Expected::Value("curl/7.65.1"))
        );
        assert_eq!(
            Some(false),
            assert_option(&source, "user_agent", &Expected::Value("wget"))
        );
        assert_eq!(
            Some(true),
            assert_option(&source, "display_errors", &Expected::Enabled(true))
        );
        assert_eq!(
            Some(true),
            assert_option(&source, "error_append", &Expected::Unset)
        );
        assert_eq!(
            Some(false),
            assert_option(&source, "user_agent", &Expected::Unset)
        );
        // an empty value reads as disabled
        assert_eq!(
            Some(true),
            assert_option(&source, "error_append", &Expected::Enabled(false))
        );
    }

    #[test]
    fn boolean_vocabulary() {
        for enabled in ["1", "on", "On", "ON", "yes", "true", "anything-else"] {
            assert!(truthy(enabled), "{enabled} should read as enabled");
        }
        for disabled in ["", "0", "off", "Off", "OFF", "no", "false", "None", "null"] {
            assert!(!truthy(disabled), "{disabled} should read as disabled");
        }
    }

    #[test]
    fn shorthand_options_resolve_to_bytes() {
        let source: TableSource = [("memory_limit", "512m")].into_iter().collect();
        let value = source.lookup("memory_limit").unwrap();
        assert_eq!(
            512 * 1024 * 1024,
            crate::parse_shorthand::parse_shorthand(&value)
        );
    }
}
