use std::str::FromStr;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::{Result, ServiceOption};

/// Field the form endpoint reads the post-submit redirect from.
pub const REDIRECT_FIELD: &str = "_next";

/// Contact form as posted by the browser.
///
/// Checkboxes only appear in the body when ticked: `service_option` repeats
/// once per ticked service and `privacy` is absent until consent is given.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactForm {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "service_option")]
    pub service_options: Vec<String>,
    #[validate(required)]
    pub privacy: Option<String>,
}

fn not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}

impl ContactForm {
    pub fn has_consent(&self) -> bool {
        self.privacy.is_some()
    }

    pub fn is_selected(&self, option: ServiceOption) -> bool {
        self.service_options
            .iter()
            .any(|value| ServiceOption::from_str(value).is_ok_and(|parsed| parsed == option))
    }

    /// Ticked services in declaration order. Values outside the fixed list
    /// are dropped.
    pub fn selected_services(&self) -> Vec<ServiceOption> {
        ServiceOption::all()
            .filter(|option| self.is_selected(*option))
            .collect()
    }

    /// Checks the required fields and builds the payload for the form
    /// endpoint. Nothing is built without consent.
    pub fn assemble(&self, redirect_hint: &str) -> Result<Submission> {
        self.validate()?;

        let unknown = self
            .service_options
            .iter()
            .filter(|value| ServiceOption::from_str(value).is_err())
            .count();

        if unknown > 0 {
            tracing::debug!(unknown, "ignoring unknown service options");
        }

        Ok(Submission {
            name: self.name.to_owned(),
            email: self.email.to_owned(),
            message: self.message.to_owned(),
            service: ServiceOption::join(&self.selected_services()),
            redirect: redirect_hint.to_owned(),
        })
    }
}

/// Payload sent to the form endpoint, one value per field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub service: String,
    pub redirect: String,
}

impl Submission {
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("message", self.message.as_str()),
            ("service", self.service.as_str()),
            (REDIRECT_FIELD, self.redirect.as_str()),
        ]
    }
}
