//! Generate exhaustive, formatted date wordlists over a year range.
//!
//! The crate enumerates every valid proleptic Gregorian calendar date in a
//! configured range and renders each one through a format template or a
//! strftime-style custom pattern, with optional separator, casing, affixes,
//! month/day filters, and reverse ordering. Generation is lazy: dates are
//! produced one at a time and nothing is buffered unless the caller asks for
//! a materialized list.
//!
//! ```
//! use chronogen::{Case, DateGenerator, GeneratorConfig};
//!
//! let generator = DateGenerator::new(
//!     GeneratorConfig::new(2020, 2020)
//!         .template("DDMMYY")
//!         .separator("/")
//!         .case(Case::Upper),
//! )?;
//! let first = generator.generate().next();
//! assert_eq!(first.as_deref(), Some("01/01/20"));
//! # Ok::<(), chronogen::Error>(())
//! ```

mod config;
mod consts;
mod format;
mod iter;
mod prelude;
mod types;

pub use config::{Case, ConfigError, DateFormat, GeneratorConfig};
pub use consts::*;
pub use format::{parse_template, Formatter, Token};
pub use iter::DateIter;
pub use types::{days_in_month, is_leap_year, CalendarDate};

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Error type for date generation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid configuration, raised before any date is produced.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Custom pattern the date-formatting primitive cannot render.
    #[error("invalid custom pattern: {0}")]
    Pattern(String),

    /// File sink failure, propagated verbatim.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Generates formatted date strings for wordlists and test fixtures.
///
/// Construction validates the configuration and compiles the formatter, so
/// every error surfaces before the first value; afterwards generation cannot
/// fail (except for file-sink I/O). The generator is immutable and each call
/// to [`generate`](Self::generate) restarts the sequence from the beginning
/// of the configured range.
#[derive(Debug, Clone)]
pub struct DateGenerator {
    config: GeneratorConfig,
    formatter: Formatter,
}

impl DateGenerator {
    /// Validates `config` and compiles its formatter.
    ///
    /// # Errors
    /// Returns [`Error::Config`] for any violated configuration invariant
    /// and [`Error::Pattern`] for an unrenderable custom pattern.
    pub fn new(config: GeneratorConfig) -> Result<Self, Error> {
        let config = config.validated()?;
        let formatter = Formatter::new(&config)?;
        Ok(Self { config, formatter })
    }

    /// Returns the validated configuration driving this generator.
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Returns the lazy sequence of formatted date strings.
    pub fn generate(&self) -> FormattedDates<'_> {
        FormattedDates {
            dates: self.dates(),
            formatter: &self.formatter,
        }
    }

    /// Returns the underlying lazy sequence of calendar dates, unformatted.
    pub fn dates(&self) -> DateIter {
        DateIter::new(&self.config)
    }

    /// Collects the whole sequence into a list, in generation order.
    pub fn generate_to_list(&self) -> Vec<String> {
        self.generate().collect()
    }

    /// Writes every value to `destination` using the platform line ending
    /// and returns the written path.
    ///
    /// # Errors
    /// Returns [`Error::Io`] for any filesystem failure.
    pub fn write(&self, destination: impl AsRef<Path>) -> Result<PathBuf, Error> {
        self.write_with_newline(destination, DEFAULT_NEWLINE)
    }

    /// Writes every value to `destination`, each followed by `newline`
    /// (written verbatim, e.g. `"\r\n"` for Windows-targeted output), and
    /// returns the written path.
    ///
    /// Missing parent directories are created. Values are streamed through a
    /// buffered writer; the sequence is never materialized in memory, and the
    /// file handle is released on every exit path.
    ///
    /// # Errors
    /// Returns [`Error::Io`] for any filesystem failure.
    pub fn write_with_newline(
        &self,
        destination: impl AsRef<Path>,
        newline: &str,
    ) -> Result<PathBuf, Error> {
        let path = destination.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut sink = BufWriter::new(fs::File::create(path)?);
        for value in self.generate() {
            sink.write_all(value.as_bytes())?;
            sink.write_all(newline.as_bytes())?;
        }
        sink.flush()?;
        Ok(path.to_path_buf())
    }
}

impl<'a> IntoIterator for &'a DateGenerator {
    type Item = String;
    type IntoIter = FormattedDates<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.generate()
    }
}

/// Lazy sequence of formatted date strings borrowed from a generator.
#[derive(Debug, Clone)]
pub struct FormattedDates<'a> {
    dates: DateIter,
    formatter: &'a Formatter,
}

impl Iterator for FormattedDates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.dates.next().map(|date| self.formatter.format(date))
    }
}

impl std::iter::FusedIterator for FormattedDates<'_> {}

/// One-shot convenience: builds a generator for `config` and returns the
/// materialized list of formatted dates.
///
/// # Errors
/// Returns the same errors as [`DateGenerator::new`].
pub fn generate_dates(config: GeneratorConfig) -> Result<Vec<String>, Error> {
    Ok(DateGenerator::new(config)?.generate_to_list())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_template() {
        let generator = DateGenerator::new(GeneratorConfig::new(2020, 2020)).unwrap();
        let mut values = generator.generate();
        assert_eq!(values.next().as_deref(), Some("20200101"));
        assert_eq!(values.next().as_deref(), Some("20200102"));
    }

    #[test]
    fn test_generate_counts() {
        let generator = DateGenerator::new(GeneratorConfig::new(2021, 2021)).unwrap();
        assert_eq!(generator.generate().count(), 365);

        let generator = DateGenerator::new(GeneratorConfig::new(2024, 2024)).unwrap();
        assert_eq!(generator.generate().count(), 366);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let generator = DateGenerator::new(
            GeneratorConfig::new(2020, 2021)
                .template("DDMMYY")
                .separator("-")
                .reverse(true),
        )
        .unwrap();
        let first: Vec<String> = generator.generate().collect();
        let second: Vec<String> = generator.generate().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_to_list_matches_lazy_sequence() {
        let generator =
            DateGenerator::new(GeneratorConfig::new(2023, 2023).months([4])).unwrap();
        let lazy: Vec<String> = generator.generate().collect();
        assert_eq!(generator.generate_to_list(), lazy);
        assert_eq!(lazy.len(), 30);
    }

    #[test]
    fn test_into_iterator() {
        let generator =
            DateGenerator::new(GeneratorConfig::new(2020, 2020).months([1]).days([1]))
                .unwrap();
        let values: Vec<String> = (&generator).into_iter().collect();
        assert_eq!(values, vec!["20200101".to_owned()]);
    }

    #[test]
    fn test_reverse_sequence() {
        let generator =
            DateGenerator::new(GeneratorConfig::new(2020, 2020).reverse(true)).unwrap();
        let mut values = generator.generate();
        assert_eq!(values.next().as_deref(), Some("20201231"));
        assert_eq!(values.next().as_deref(), Some("20201230"));
    }

    #[test]
    fn test_invalid_range_fails_construction() {
        let result = DateGenerator::new(GeneratorConfig::new(2000, 1999));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::YearOrder { .. }))
        ));
    }

    #[test]
    fn test_invalid_pattern_fails_construction() {
        let result = DateGenerator::new(GeneratorConfig::new(2020, 2020).pattern("%Q"));
        assert!(matches!(result, Err(Error::Pattern(_))));
    }

    #[test]
    fn test_custom_pattern_precedence() {
        // A pattern given alongside a template wins; separator is ignored
        let config = GeneratorConfig::new(2023, 2023)
            .separator("/")
            .case(Case::Lower)
            .format(DateFormat::resolve(Some("YYYYMMDD"), Some("%d%b%Y")));
        let generator = DateGenerator::new(config).unwrap();
        assert_eq!(generator.generate().next().as_deref(), Some("01jan2023"));
    }

    #[test]
    fn test_generate_dates_free_function() {
        let values = generate_dates(
            GeneratorConfig::new(2000, 2000)
                .months([1])
                .days([1])
                .prefix("corp-")
                .suffix("!"),
        )
        .unwrap();
        assert_eq!(values, vec!["corp-20000101!".to_owned()]);
    }

    #[test]
    fn test_generate_dates_propagates_config_error() {
        let result = generate_dates(GeneratorConfig::new(2020, 2020).months([13]));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MonthOutOfRange(13)))
        ));
    }

    #[test]
    fn test_feb_29_across_leap_boundary() {
        let none = generate_dates(GeneratorConfig::new(2021, 2021).months([2]).days([29]))
            .unwrap();
        assert!(none.is_empty());

        let one = generate_dates(GeneratorConfig::new(2024, 2024).months([2]).days([29]))
            .unwrap();
        assert_eq!(one, vec!["20240229".to_owned()]);
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dates.txt");

        let generator =
            DateGenerator::new(GeneratorConfig::new(2021, 2021).months([2]).days([1, 2]))
                .unwrap();
        let written = generator.write(&path).unwrap();
        assert_eq!(written, path);

        let content = fs::read_to_string(&path).unwrap();
        let expected = format!("20210201{nl}20210202{nl}", nl = DEFAULT_NEWLINE);
        assert_eq!(content, expected);
    }

    #[test]
    fn test_write_with_crlf_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dates.txt");

        let generator =
            DateGenerator::new(GeneratorConfig::new(2021, 2021).months([2]).days([1]))
                .unwrap();
        generator.write_with_newline(&path, "\r\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "20210201\r\n");
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("dates.txt");

        let generator =
            DateGenerator::new(GeneratorConfig::new(2021, 2021).months([1]).days([1]))
                .unwrap();
        generator.write(&path).unwrap();

        assert!(path.is_file());
    }

    #[test]
    fn test_write_empty_sequence_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");

        // Feb 29 in a non-leap year produces nothing
        let generator =
            DateGenerator::new(GeneratorConfig::new(2021, 2021).months([2]).days([29]))
                .unwrap();
        generator.write(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_suggested_templates_all_parse() {
        for (template, _description) in SUGGESTED_TEMPLATES {
            assert!(
                parse_template(template).is_ok(),
                "suggested template {template} should parse"
            );
        }
    }
}
