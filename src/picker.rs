use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::{
    CalendarMonth, DateRange, DismissRequest, Marker, Menu, NavigationAction, PickerConfig,
    Presentation, Session,
};

/// The picker as a host embeds it: options, a change callback, and a
/// session that exists only while the picker is open.
///
/// `on_change` fires on Apply and Clear and nowhere else. While closed,
/// every intent is ignored.
pub struct DateRangePicker<F>
where
    F: FnMut(&DateRange),
{
    config:    PickerConfig,
    on_change: F,
    today:     Option<NaiveDate>,
    session:   Option<Session>,
}

impl<F> DateRangePicker<F>
where
    F: FnMut(&DateRange),
{
    /// A closed picker
    pub fn new(config: PickerConfig, on_change: F) -> Self {
        Self { config, on_change, today: None, session: None }
    }

    /// Pins the date treated as today instead of reading the local clock
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub const fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Opening builds a fresh session; closing discards it along with
    /// anything not applied. Re-asserting the current state does nothing.
    pub fn set_open(&mut self, open: bool) {
        match (open, self.session.is_some()) {
            (true, false) => {
                let today = self.today.unwrap_or_else(|| Local::now().date_naive());
                self.session = Some(Session::open(&self.config, today));
            },
            (false, true) => {
                debug!("Closed picker session");
                self.session = None;
            },
            _ => {},
        }
    }

    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn menu(&self) -> Option<Menu<'_>> {
        self.session.as_ref().map(Menu::new)
    }

    pub const fn presentation(&self, narrow_viewport: bool) -> Presentation {
        self.config.picker.presentation(narrow_viewport)
    }

    /// Host action for an outside click or Escape while open
    pub fn dismiss(&self) -> Option<DismissRequest> {
        if !self.is_open() {
            return None;
        }
        self.config.picker.dismiss(self.config.close_on_click_outside)
    }

    pub fn day_click(&mut self, day: NaiveDate) {
        if let Some(session) = self.session.as_mut() {
            session.day_click(day);
        }
    }

    pub fn day_hover(&mut self, day: NaiveDate) -> bool {
        self.session.as_mut().is_some_and(|session| session.day_hover(day))
    }

    pub fn navigate_month(&mut self, marker: Marker, action: NavigationAction) -> bool {
        self.session
            .as_mut()
            .is_some_and(|session| session.navigate_month(marker, action))
    }

    pub fn set_month(&mut self, marker: Marker, month: CalendarMonth) -> bool {
        self.session.as_mut().is_some_and(|session| session.set_month(marker, month))
    }

    pub fn select_preset(&mut self, index: usize) -> bool {
        self.session.as_mut().is_some_and(|session| session.select_preset(index))
    }

    /// Hands the current selection to the host
    pub fn apply(&mut self) {
        if let Some(session) = self.session.as_ref() {
            let range = session.committed();
            debug!(range = %range, "Applied range");
            (self.on_change)(&range);
        }
    }

    /// Drops the selection and hands the empty range to the host
    pub fn clear(&mut self) {
        if let Some(session) = self.session.as_mut() {
            let range = session.clear();
            debug!("Cleared range");
            (self.on_change)(&range);
        }
    }
}
