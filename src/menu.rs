use serde::Serialize;

use crate::{DATE_PLACEHOLDER, Marker, MonthView, Session};

/// A preset as listed in the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetItem<'a> {
    pub index:    usize,
    pub label:    &'a str,
    pub selected: bool,
}

/// Everything the menu shows, read off a session: the start/end header,
/// the two calendars and the preset list.
#[derive(Debug, Clone, Copy)]
pub struct Menu<'a> {
    session: &'a Session,
}

impl<'a> Menu<'a> {
    pub const fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Formatted start date, or the placeholder
    pub fn start_label(&self) -> String {
        self.session
            .range()
            .start()
            .map_or_else(|| DATE_PLACEHOLDER.to_owned(), |d| self.session.locale().format_long(d))
    }

    /// Formatted end date, or the placeholder
    pub fn end_label(&self) -> String {
        self.session
            .range()
            .end()
            .map_or_else(|| DATE_PLACEHOLDER.to_owned(), |d| self.session.locale().format_long(d))
    }

    pub const fn first(&self) -> MonthView<'a> {
        MonthView::new(self.session, Marker::First)
    }

    pub const fn second(&self) -> MonthView<'a> {
        MonthView::new(self.session, Marker::Second)
    }

    pub const fn calendar(&self, marker: Marker) -> MonthView<'a> {
        MonthView::new(self.session, marker)
    }

    pub fn presets(&self) -> Vec<PresetItem<'a>> {
        let selected = self.session.range();
        self.session
            .presets()
            .iter()
            .enumerate()
            .map(|(index, preset)| PresetItem { index, label: preset.label(), selected: preset.matches(selected) })
            .collect()
    }
}
