use crate::{domain::Gender, presentation::PopupRender};

/// Select list for the gender field.
pub(crate) struct GenderPopup {
    title: String,
    options: Vec<String>,
    selected: usize,
}

impl GenderPopup {
    pub(crate) fn new(current: &str) -> Self {
        let options: Vec<String> = Gender::ALL
            .iter()
            .map(|gender| gender.as_str().to_string())
            .collect();
        let selected = options
            .iter()
            .position(|option| option == current)
            .unwrap_or(0);
        Self {
            title: "Gender".to_string(),
            options,
            selected,
        }
    }

    pub(crate) fn select_previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        if self.selected == 0 {
            self.selected = self.options.len().saturating_sub(1);
        } else {
            self.selected -= 1;
        }
    }

    pub(crate) fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub(crate) fn selection(&self) -> Option<&str> {
        self.options.get(self.selected).map(String::as_str)
    }

    pub(crate) fn as_render(&self) -> PopupRender<'_> {
        PopupRender {
            title: &self.title,
            options: &self.options,
            selected: self.selected,
        }
    }
}
