//! Fixture configuration records.
//!
//! A fixture definition pairs a set of typed options with the bindings it
//! must not be generated for.

use crate::error::CorpusError;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Target binding of the benchmark corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Binding {
    /// High-level C++ bindings.
    Hlcpp,
    /// Low-level (wire) C++ bindings.
    Llcpp,
    /// Unified C++ bindings.
    Cpp,
    /// Go bindings.
    Go,
    /// Rust bindings.
    Rust,
    /// Dart bindings.
    Dart,
}

impl Binding {
    /// Every binding, in a fixed order.
    pub const ALL: [Self; 6] = [
        Self::Hlcpp,
        Self::Llcpp,
        Self::Cpp,
        Self::Go,
        Self::Rust,
        Self::Dart,
    ];

    /// Identifier used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hlcpp => "hlcpp",
            Self::Llcpp => "llcpp",
            Self::Cpp => "cpp",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Dart => "dart",
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Binding {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CorpusError::UnknownBinding(s.to_string()))
    }
}

/// Typed option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    /// Integer option, e.g. an array size.
    Int(i64),
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

/// Named options passed to a fixture generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    fixture: String,
    values: BTreeMap<String, ConfigValue>,
}

impl Config {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Returns a copy labelled with the fixture it belongs to, for errors.
    #[must_use]
    pub(crate) fn for_fixture(&self, fixture: &str) -> Self {
        Self {
            fixture: fixture.to_string(),
            values: self.values.clone(),
        }
    }

    /// Returns a raw option value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.values.get(name)
    }

    /// Returns an integer option.
    ///
    /// # Errors
    /// Returns `MissingOption` if the option is not set.
    pub fn get_int(&self, name: &str) -> Result<i64, CorpusError> {
        match self.values.get(name) {
            Some(ConfigValue::Int(value)) => Ok(*value),
            None => Err(CorpusError::MissingOption {
                fixture: self.fixture.clone(),
                option: name.to_string(),
            }),
        }
    }

    /// Returns an integer option that must be a positive count.
    ///
    /// # Errors
    /// Returns `OutOfRange` for zero or negative values, otherwise as
    /// [`Config::get_int`].
    pub fn get_size(&self, name: &str) -> Result<usize, CorpusError> {
        let value = self.get_int(name)?;
        usize::try_from(value)
            .ok()
            .filter(|&v| v > 0)
            .ok_or_else(|| CorpusError::OutOfRange {
                fixture: self.fixture.clone(),
                option: name.to_string(),
                message: format!("{value} is not a positive size"),
            })
    }
}

/// One configured instance of a fixture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definition {
    /// Options for the generator.
    pub config: Config,
    /// Bindings this instance is skipped for.
    pub denylist: Vec<Binding>,
}

impl Definition {
    /// Creates a definition that applies to every binding.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            denylist: Vec::new(),
        }
    }

    /// Excludes a binding.
    #[must_use]
    pub fn deny(mut self, binding: Binding) -> Self {
        self.denylist.push(binding);
        self
    }

    /// Returns true unless `binding` is on the deny list.
    #[must_use]
    pub fn is_enabled_for(&self, binding: Binding) -> bool {
        !self.denylist.contains(&binding)
    }
}
