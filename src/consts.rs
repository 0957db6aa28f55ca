/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Months in a calendar year
pub const MONTHS_IN_YEAR: i32 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;

/// Days in a week, the width of a month grid row
pub const DAYS_PER_WEEK: usize = 7;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between an ISO date and its time of day, which is ignored
pub const TIME_SEPARATOR: char = 'T';
/// Space-separated alternative to `TIME_SEPARATOR` (`2024-05-06 13:45:00`)
pub const TIME_SEPARATOR_SPACE: char = ' ';
/// Month-first format separator (legacy US format)
pub const MONTH_FIRST_SEPARATOR: char = '/';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';

/// How far back the default lower bound reaches from today
pub const DEFAULT_MIN_YEARS_BACK: u32 = 1;

/// Gap (in calendar months) between the two visible months at or above which
/// the calendars may still be moved towards each other
pub const MIN_NAVIGABLE_GAP: i32 = 2;

/// Number of years offered by a jump-to year selector
pub const YEAR_OPTIONS: usize = 30;

/// Label shown in the header when an end of the range is not chosen yet
pub const DATE_PLACEHOLDER: &str = "dd MMMM yyyy";
