//! Read-only presentation of an accepted submission.

use chrono::NaiveDate;

use crate::domain::{Gender, PersonalInfo};

pub const DIALOG_TITLE: &str = "Submitted Personal Information";
pub const RESET_LABEL: &str = "Reset form";

/// Emitted by the dialog's controls; the form controller is the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogSignal {
    ResetForm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfirmationDialog<'a> {
    pub profile_info: &'a PersonalInfo,
    pub is_open: bool,
}

impl<'a> ConfirmationDialog<'a> {
    pub fn new(profile_info: &'a PersonalInfo, is_open: bool) -> Self {
        Self {
            profile_info,
            is_open,
        }
    }

    pub fn title(&self) -> &'static str {
        DIALOG_TITLE
    }

    /// The typed gender when "Other" was chosen, the selection otherwise.
    pub fn gender_label(&self) -> &'a str {
        if Gender::is_other(&self.profile_info.gender) {
            &self.profile_info.other_gender
        } else {
            &self.profile_info.gender
        }
    }

    pub fn formatted_birthdate(&self) -> String {
        format_date(&self.profile_info.birthdate)
    }

    pub fn rows(&self) -> Vec<DialogRow> {
        vec![
            DialogRow {
                label: "Name",
                value: self.profile_info.name.clone(),
            },
            DialogRow {
                label: "Family name",
                value: self.profile_info.family_name.clone(),
            },
            DialogRow {
                label: "Gender",
                value: self.gender_label().to_string(),
            },
            DialogRow {
                label: "Birthdate",
                value: self.formatted_birthdate(),
            },
        ]
    }

    pub fn activate_reset(&self) -> DialogSignal {
        DialogSignal::ResetForm
    }
}

/// `YYYY-MM-DD` to `MM/DD/YYYY`. Anything that is not a zero-padded calendar
/// date comes back unchanged, which keeps `""` as `""`.
pub fn format_date(iso: &str) -> String {
    if !is_padded_iso_date(iso) {
        return iso.to_string();
    }
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|date| date.format("%m/%d/%Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

// chrono's %m and %d also take unpadded digits
fn is_padded_iso_date(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}
