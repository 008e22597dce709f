/// Maximum valid year (inclusive); keeps 4-digit zero-padding exact
pub const MAX_YEAR: u16 = 9999;

/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Maximum day filter value accepted by configuration (longest month)
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Template applied when neither a template nor a custom pattern is given
pub const DEFAULT_TEMPLATE: &str = "YYYYMMDD";

/// Line ending used by the file sink unless the caller overrides it
#[cfg(windows)]
pub const DEFAULT_NEWLINE: &str = "\r\n";
/// Line ending used by the file sink unless the caller overrides it
#[cfg(not(windows))]
pub const DEFAULT_NEWLINE: &str = "\n";

/// Well-known format templates with short descriptions, for CLI listings
pub const SUGGESTED_TEMPLATES: &[(&str, &str)] = &[
    ("YYYYMMDD", "Year-Month-Day (default ISO style)"),
    ("YYMMDD", "Short year, month, day"),
    ("YYYYMM", "Year-Month"),
    ("DDMMYYYY", "Day-Month-Year"),
    ("DDMMYY", "Day-Month-Short year"),
    ("MMDDYYYY", "Month-Day-Year"),
    ("MMDD", "Month-Day"),
    ("MM", "Month"),
    ("DD", "Day"),
];
