use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    domain::{FormField, Gender},
    form::visible_fields,
};

/// Apply a key to a text buffer, returning the new contents when it changed.
pub(crate) fn edit_text(current: &str, key: &KeyEvent) -> Option<String> {
    match key.code {
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return None;
            }
            let mut next = current.to_string();
            next.push(ch);
            Some(next)
        }
        KeyCode::Backspace => {
            let mut next = current.to_string();
            next.pop()?;
            Some(next)
        }
        KeyCode::Delete => (!current.is_empty()).then(String::new),
        _ => None,
    }
}

/// Step through the gender options with Left/Right.
pub(crate) fn step_gender(current: &str, key: &KeyEvent) -> Option<String> {
    let delta: isize = match key.code {
        KeyCode::Left => -1,
        KeyCode::Right | KeyCode::Char(' ') => 1,
        _ => return None,
    };
    let len = Gender::ALL.len() as isize;
    let next = match Gender::parse(current) {
        Some(gender) => {
            let index = Gender::ALL
                .iter()
                .position(|candidate| *candidate == gender)
                .unwrap_or(0) as isize;
            (index + delta).rem_euclid(len)
        }
        None if delta < 0 => len - 1,
        None => 0,
    };
    Some(Gender::ALL[next as usize].as_str().to_string())
}

/// Keyboard focus over the currently visible fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldFocus {
    field: FormField,
}

impl Default for FieldFocus {
    fn default() -> Self {
        Self {
            field: FormField::Name,
        }
    }
}

impl FieldFocus {
    pub(crate) fn current(&self) -> FormField {
        self.field
    }

    pub(crate) fn step(&mut self, delta: isize, show_other_gender: bool) {
        let fields = visible_fields(show_other_gender);
        let len = fields.len() as isize;
        let index = fields
            .iter()
            .position(|field| *field == self.field)
            .unwrap_or(0) as isize;
        self.field = fields[(index + delta).rem_euclid(len) as usize];
    }

    /// Move off a field that is no longer shown.
    pub(crate) fn clamp(&mut self, show_other_gender: bool) {
        if !visible_fields(show_other_gender).contains(&self.field) {
            self.field = FormField::Gender;
        }
    }
}
