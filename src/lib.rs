//! A headless dual-calendar date range picker.
//!
//! The crate owns the picker's state and decisions and leaves drawing to
//! the host toolkit. A [`DateRangePicker`] holds host options and a change
//! callback; while open it carries a [`Session`] whose transitions turn
//! clicks, hovers, month navigation and presets into a validated
//! [`DateRange`]. [`Menu`] and [`MonthView`] read a session back as
//! labels, preset flags and per-day grid state.

mod bounds;
mod config;
mod consts;
mod defaults;
mod input;
mod locale;
mod menu;
mod month;
mod navigation;
mod picker;
mod prelude;
mod range;
mod state;
mod types;
mod wrapper;

#[cfg(test)]
mod test_utils;

pub use bounds::Bounds;
pub use config::PickerConfig;
pub use consts::*;
pub use defaults::default_ranges;
pub use input::{DateInput, ParseError, parse_date_like, resolve_optional};
pub use locale::{Locale, LocaleError};
pub use menu::{Menu, PresetItem};
pub use month::{DayCell, DayState, MonthView};
pub use navigation::{Marker, MonthOrderError, NavState, NavigationAction, VisibleMonths};
pub use picker::DateRangePicker;
pub use range::{DateRange, DefinedRange, RangeError};
pub use state::{Phase, Session};
pub use types::{CalendarMonth, Month};
pub use wrapper::{DismissRequest, PickerKind, Presentation};
