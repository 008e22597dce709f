use crate::config::{Case, ConfigError, DateFormat, GeneratorConfig};
use crate::types::CalendarDate;
use crate::Error;
use chrono::NaiveDate;
use std::fmt::Write as _;

/// One component of a parsed format template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `YYYY`, the 4-digit zero-padded year
    YearFull,
    /// `YY`, the year modulo 100, zero-padded
    YearShort,
    /// `MM`, the 2-digit zero-padded month
    Month,
    /// `DD`, the 2-digit zero-padded day
    Day,
}

/// Parses a symbolic date format template into ordered component tokens.
///
/// Accepted characters are `Y`, `M`, and `D`, grouped contiguously:
/// * at most one block per letter, in any order (`DDMMYYYY`, `MMYYYY`, …);
/// * `Y` blocks must be 2 (short year) or 4 (full year) characters;
/// * `M` and `D` blocks must be exactly 2 characters.
///
/// The empty template is accepted and yields no tokens; it formats to the
/// empty string, which only the affixes then decorate.
///
/// # Errors
/// Returns the [`ConfigError`] describing the first malformed block.
pub fn parse_template(template: &str) -> Result<Vec<Token>, ConfigError> {
    let text = template.trim().to_uppercase();

    let invalid: Vec<char> = {
        let mut found: Vec<char> = text
            .chars()
            .filter(|c| !matches!(c, 'Y' | 'M' | 'D'))
            .collect();
        found.sort_unstable();
        found.dedup();
        found
    };
    if !invalid.is_empty() {
        let joined = invalid
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(ConfigError::TemplateCharacters(joined));
    }

    let mut tokens = Vec::new();
    let mut seen: Vec<char> = Vec::new();
    let mut chars = text.chars().peekable();
    while let Some(letter) = chars.next() {
        let mut length = 1;
        while chars.peek() == Some(&letter) {
            chars.next();
            length += 1;
        }
        if seen.contains(&letter) {
            return Err(ConfigError::DuplicateBlock(letter));
        }
        seen.push(letter);
        let token = match letter {
            'Y' => match length {
                4 => Token::YearFull,
                2 => Token::YearShort,
                other => return Err(ConfigError::YearBlockLength(other)),
            },
            'M' => {
                if length != 2 {
                    return Err(ConfigError::MonthBlockLength(length));
                }
                Token::Month
            }
            _ => {
                if length != 2 {
                    return Err(ConfigError::DayBlockLength(length));
                }
                Token::Day
            }
        };
        tokens.push(token);
    }
    Ok(tokens)
}

/// Rendering mode compiled from a validated configuration.
#[derive(Debug, Clone)]
enum Layout {
    Template {
        tokens: Vec<Token>,
        separator: String,
    },
    Pattern(String),
}

/// Maps one [`CalendarDate`] to its final output string.
///
/// Compiled once per generator; formatting itself is a pure function of the
/// date. Template blocks are joined by the separator, custom patterns go
/// through chrono's strftime renderer with its fixed English month and day
/// names, casing applies to the date text only, and the affixes are
/// concatenated untouched around the result.
#[derive(Debug, Clone)]
pub struct Formatter {
    layout: Layout,
    case: Case,
    prefix: String,
    suffix: String,
}

impl Formatter {
    /// Compiles the formatter for a validated configuration.
    ///
    /// A custom pattern is probe-rendered against a fixed date here, so a
    /// syntactically invalid pattern fails on first use instead of tainting
    /// every produced value.
    ///
    /// # Errors
    /// Returns [`Error::Pattern`] if the custom pattern is not valid
    /// strftime syntax for a calendar date.
    pub fn new(config: &GeneratorConfig) -> Result<Self, Error> {
        let layout = match &config.format {
            DateFormat::Template(template) => Layout::Template {
                tokens: parse_template(template)?,
                separator: config.separator.clone(),
            },
            DateFormat::Pattern(pattern) => {
                validate_pattern(pattern)?;
                Layout::Pattern(pattern.clone())
            }
        };
        Ok(Self {
            layout,
            case: config.case,
            prefix: config.prefix.clone(),
            suffix: config.suffix.clone(),
        })
    }

    /// Formats a single date.
    pub fn format(&self, date: CalendarDate) -> String {
        let text = match &self.layout {
            Layout::Template { tokens, separator } => {
                let parts: Vec<String> = tokens
                    .iter()
                    .map(|token| match token {
                        Token::YearFull => format!("{:04}", date.year()),
                        Token::YearShort => format!("{:02}", date.year() % 100),
                        Token::Month => format!("{:02}", date.month()),
                        Token::Day => format!("{:02}", date.day()),
                    })
                    .collect();
                parts.join(separator)
            }
            Layout::Pattern(pattern) => {
                // The pattern was probe-validated in new(); a static pattern
                // that renders one date renders them all.
                NaiveDate::from(date).format(pattern).to_string()
            }
        };
        let text = self.case.apply(text);
        format!("{}{}{}", self.prefix, text, self.suffix)
    }
}

/// Probe-renders `pattern` against a fixed date to surface syntax errors
/// (unknown specifiers, time-of-day fields a date cannot supply) eagerly.
fn validate_pattern(pattern: &str) -> Result<(), Error> {
    let mut probe = String::new();
    write!(probe, "{}", NaiveDate::default().format(pattern))
        .map_err(|_| Error::Pattern(pattern.to_owned()))?;
    Ok(())
}
