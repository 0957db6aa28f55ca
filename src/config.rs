use serde::{Deserialize, Serialize};

use crate::{DateInput, DateRange, DefinedRange, Locale, PickerKind};

/// Host-supplied picker options. Every field is optional; field names
/// follow the camelCase used by hosts that hand options over as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PickerConfig {
    /// Range selected when the picker opens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_date_range: Option<DateRange>,
    /// Presets listed next to the calendars; generated from the locale when
    /// absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_ranges: Option<Vec<DefinedRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date: Option<DateInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date: Option<DateInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    /// Presentation: popover/dialog (`modal`) or inline (`box`)
    pub picker: PickerKind,
    /// In `box` mode, whether clicking the backdrop or pressing Escape
    /// closes the picker
    pub close_on_click_outside: bool,
}

impl PickerConfig {
    /// Parses options from JSON.
    ///
    /// # Errors
    /// Returns the deserializer error for malformed options, invalid
    /// ranges, presets or unknown locales. Unparseable bounds are not an
    /// error; they fall back when a session opens.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_date_range:     None,
            defined_ranges:         None,
            min_date:               None,
            max_date:               None,
            locale:                 None,
            picker:                 PickerKind::default(),
            close_on_click_outside: true,
        }
    }
}
