use anyhow::Result;
use tracing::info;

use crate::{
    domain::{FormValues, PersonalInfo},
    form::FormController,
};

use super::{options::UiOptions, runtime::App};

const DEFAULT_TITLE: &str = "Personal Information";

/// Entry point for running the form in the terminal.
#[derive(Debug)]
pub struct InfoFormUI {
    title: Option<String>,
    values: Option<FormValues>,
    options: UiOptions,
}

impl Default for InfoFormUI {
    fn default() -> Self {
        Self::new()
    }
}

impl InfoFormUI {
    pub fn new() -> Self {
        Self {
            title: None,
            values: None,
            options: UiOptions::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Prefill the form; the values are not validated until edited or submitted.
    pub fn with_values(mut self, values: FormValues) -> Self {
        self.values = Some(values);
        self
    }

    /// Run until the user keeps a submission (Ok) or quits without one (Err).
    pub fn run(self) -> Result<PersonalInfo> {
        let InfoFormUI {
            title,
            values,
            options,
        } = self;

        let mut controller = FormController::default();
        if let Some(values) = values {
            controller.seed(values);
        }
        let title = title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
        info!(%title, "starting form");

        let mut app = App::new(controller, options, title);
        app.run()
    }
}
