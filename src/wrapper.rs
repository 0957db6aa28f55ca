//! How the picker is presented and how it may be dismissed.

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Presentation family chosen by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerKind {
    /// Floating over the page: a popover, or a dialog on narrow screens
    #[default]
    #[display(fmt = "modal")]
    Modal,
    /// Inline in the page, above a full-screen click catcher
    #[display(fmt = "box")]
    Box,
}

/// Concrete container the host should render the menu in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    #[display(fmt = "inline")]
    Inline,
    #[display(fmt = "popover")]
    Popover,
    #[display(fmt = "dialog")]
    Dialog,
}

/// What the host should do when the user clicks outside the picker or
/// presses Escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DismissRequest {
    /// Flip the box picker's visibility
    #[display(fmt = "toggle")]
    Toggle,
    /// Close the popover or dialog
    #[display(fmt = "close")]
    Close,
}

impl PickerKind {
    pub const fn presentation(self, narrow_viewport: bool) -> Presentation {
        match self {
            Self::Box => Presentation::Inline,
            Self::Modal if narrow_viewport => Presentation::Dialog,
            Self::Modal => Presentation::Popover,
        }
    }

    /// The host action an outside click or Escape requests. Box pickers
    /// ignore both when `close_on_click_outside` is off.
    pub const fn dismiss(self, close_on_click_outside: bool) -> Option<DismissRequest> {
        match self {
            Self::Box if close_on_click_outside => Some(DismissRequest::Toggle),
            Self::Box => None,
            Self::Modal => Some(DismissRequest::Close),
        }
    }
}
