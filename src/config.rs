use crate::consts::{DEFAULT_TEMPLATE, MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR};
use crate::format::parse_template;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Error type for configuration validation.
///
/// Raised only while validating a configuration; once a configuration has
/// been validated it can never fail later.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Start year is after end year.
    #[error("start year {start} must be less than or equal to end year {end}")]
    YearOrder { start: u16, end: u16 },

    /// Year outside the supported range.
    #[error("year {0} must be between {MIN_YEAR} and {MAX_YEAR}")]
    YearOutOfRange(u16),

    /// Template contains characters other than Y, M, and D.
    #[error("format template may only contain Y, M, and D characters (found: {0})")]
    TemplateCharacters(String),

    /// Y block of unsupported length.
    #[error("Y blocks must be either 'YY' or 'YYYY' (found {0} characters)")]
    YearBlockLength(usize),

    /// M block of unsupported length.
    #[error("M blocks must be exactly 'MM' (found {0} characters)")]
    MonthBlockLength(usize),

    /// D block of unsupported length.
    #[error("D blocks must be exactly 'DD' (found {0} characters)")]
    DayBlockLength(usize),

    /// The same component letter appears in more than one block.
    #[error("{0} appears multiple times; combine into a single block")]
    DuplicateBlock(char),

    /// Month filter value outside 1-12.
    #[error("months must be between 1 and {MAX_MONTH} (found: {0})")]
    MonthOutOfRange(u8),

    /// Day filter value outside 1-31.
    #[error("days must be between {MIN_DAY} and {MAX_DAY} (found: {0})")]
    DayOutOfRange(u8),

    /// Unrecognized case name.
    #[error("case must be 'none', 'lower', or 'upper' (found: {0})")]
    UnknownCase(String),
}

/// Casing applied to the formatted date text (never to the affixes).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// Leave the formatted text untouched
    #[default]
    #[display(fmt = "none")]
    None,
    /// Uppercase the formatted text
    #[display(fmt = "upper")]
    Upper,
    /// Lowercase the formatted text
    #[display(fmt = "lower")]
    Lower,
}

impl Case {
    /// Applies this casing to `text`.
    pub fn apply(self, text: String) -> String {
        match self {
            Self::None => text,
            Self::Upper => text.to_uppercase(),
            Self::Lower => text.to_lowercase(),
        }
    }
}

impl FromStr for Case {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "upper" => Ok(Self::Upper),
            "lower" => Ok(Self::Lower),
            other => Err(ConfigError::UnknownCase(other.to_owned())),
        }
    }
}

/// How a calendar date is rendered into text.
///
/// Template and pattern mode are mutually exclusive by construction; a
/// pattern always overrides a template when both are offered to
/// [`DateFormat::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// Symbolic template of contiguous Y/M/D blocks, e.g. `"YYYYMMDD"` or
    /// `"DDMMYY"`. Numeric, locale-independent, joined by the separator.
    Template(String),
    /// strftime-style chrono pattern, e.g. `"%d%b%Y"`. Overrides the
    /// separator; month and day names use chrono's fixed English names.
    Pattern(String),
}

impl DateFormat {
    /// Maps the two optional CLI-style inputs onto the variant that is
    /// authoritative: a pattern wins over a template, and neither falls back
    /// to [`DEFAULT_TEMPLATE`].
    pub fn resolve(template: Option<&str>, pattern: Option<&str>) -> Self {
        match (template, pattern) {
            (_, Some(p)) => Self::Pattern(p.to_owned()),
            (Some(t), None) => Self::Template(t.to_owned()),
            (None, None) => Self::Template(DEFAULT_TEMPLATE.to_owned()),
        }
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::Template(DEFAULT_TEMPLATE.to_owned())
    }
}

/// Generation parameters for a date wordlist.
///
/// Built with [`GeneratorConfig::new`] plus the chained setters, then
/// validated once by the generator; all invariant violations surface as
/// [`ConfigError`] before any date is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// First year of the range (inclusive)
    pub(crate) start_year: u16,
    /// Last year of the range (inclusive)
    pub(crate) end_year: u16,
    /// Rendering mode, template or custom pattern
    #[serde(default)]
    pub(crate) format: DateFormat,
    /// String inserted between template blocks (ignored in pattern mode)
    #[serde(default)]
    pub(crate) separator: String,
    /// Literal text prepended to every value
    #[serde(default)]
    pub(crate) prefix: String,
    /// Literal text appended to every value
    #[serde(default)]
    pub(crate) suffix: String,
    /// Casing applied to the formatted date text
    #[serde(default)]
    pub(crate) case: Case,
    /// When set, restricts generation to these months (1-12)
    #[serde(default)]
    pub(crate) months: Option<Vec<u8>>,
    /// When set, restricts generation to these days of month (1-31);
    /// days that a given month does not have are silently skipped
    #[serde(default)]
    pub(crate) days: Option<Vec<u8>>,
    /// Produce dates from latest to earliest
    #[serde(default)]
    pub(crate) reverse: bool,
}

impl GeneratorConfig {
    /// Creates a configuration for the inclusive year range
    /// `start_year..=end_year` with default formatting (the
    /// [`DEFAULT_TEMPLATE`], no separator, no affixes, no filters).
    pub fn new(start_year: u16, end_year: u16) -> Self {
        Self {
            start_year,
            end_year,
            format: DateFormat::default(),
            separator: String::new(),
            prefix: String::new(),
            suffix: String::new(),
            case: Case::None,
            months: None,
            days: None,
            reverse: false,
        }
    }

    /// Sets a symbolic Y/M/D format template.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.format = DateFormat::Template(template.into());
        self
    }

    /// Sets a strftime-style custom pattern, overriding any template.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.format = DateFormat::Pattern(pattern.into());
        self
    }

    /// Sets the rendering mode directly.
    pub fn format(mut self, format: DateFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the string inserted between template blocks.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the literal text prepended to every value.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the literal text appended to every value.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Sets the casing applied to the formatted date text.
    pub fn case(mut self, case: Case) -> Self {
        self.case = case;
        self
    }

    /// Restricts generation to the given months (1-12).
    pub fn months(mut self, months: impl Into<Vec<u8>>) -> Self {
        self.months = Some(months.into());
        self
    }

    /// Restricts generation to the given days of month (1-31).
    pub fn days(mut self, days: impl Into<Vec<u8>>) -> Self {
        self.days = Some(days.into());
        self
    }

    /// Produces dates from latest to earliest when `reverse` is true.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Returns the first year of the range.
    pub const fn start_year(&self) -> u16 {
        self.start_year
    }

    /// Returns the last year of the range.
    pub const fn end_year(&self) -> u16 {
        self.end_year
    }

    /// Returns a validated, normalized copy of this configuration.
    ///
    /// Checks every construction invariant eagerly: year range order and
    /// bounds, template shape, and filter bounds. Normalizes the template to
    /// uppercase and sorts/deduplicates the filters. Custom patterns are not
    /// checked here; pattern syntax is the formatter's concern.
    ///
    /// # Errors
    /// Returns the [`ConfigError`] describing the first violated invariant.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let Self {
            start_year,
            end_year,
            format,
            separator,
            prefix,
            suffix,
            case,
            months,
            days,
            reverse,
        } = self;

        if start_year < MIN_YEAR || start_year > MAX_YEAR {
            return Err(ConfigError::YearOutOfRange(start_year));
        }
        if end_year < MIN_YEAR || end_year > MAX_YEAR {
            return Err(ConfigError::YearOutOfRange(end_year));
        }
        if start_year > end_year {
            return Err(ConfigError::YearOrder {
                start: start_year,
                end: end_year,
            });
        }

        let format = match format {
            DateFormat::Template(raw) => {
                let normalized = raw.trim().to_uppercase();
                parse_template(&normalized)?;
                DateFormat::Template(normalized)
            }
            pattern @ DateFormat::Pattern(_) => pattern,
        };

        let months = normalize_filter(months, MAX_MONTH, ConfigError::MonthOutOfRange)?;
        let days = normalize_filter(days, MAX_DAY, ConfigError::DayOutOfRange)?;

        Ok(Self {
            start_year,
            end_year,
            format,
            separator,
            prefix,
            suffix,
            case,
            months,
            days,
            reverse,
        })
    }
}

/// Bounds-checks a month/day filter and returns it sorted and deduplicated.
/// An empty filter means "no filter".
fn normalize_filter(
    values: Option<Vec<u8>>,
    maximum: u8,
    out_of_range: fn(u8) -> ConfigError,
) -> Result<Option<Vec<u8>>, ConfigError> {
    let Some(mut values) = values else {
        return Ok(None);
    };
    if values.is_empty() {
        return Ok(None);
    }
    for &value in &values {
        if value < 1 || value > maximum {
            return Err(out_of_range(value));
        }
    }
    values.sort_unstable();
    values.dedup();
    Ok(Some(values))
}
