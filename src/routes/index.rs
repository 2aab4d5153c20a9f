use axum::response::IntoResponse;
use nakaima_contact::{ContactForm, ServiceOption};

use crate::{
    config::SiteConfig,
    content::{CONTENT, Content},
    template::Template,
};

pub struct ServiceChoice {
    pub value: &'static str,
    pub checked: bool,
}

/// What the contact form shows: blank on first visit, the posted values
/// after a failed attempt.
pub struct ContactFormView {
    pub name: String,
    pub email: String,
    pub message: String,
    pub services: Vec<ServiceChoice>,
    pub consent: bool,
}

impl Default for ContactFormView {
    fn default() -> Self {
        Self::from(&ContactForm::default())
    }
}

impl From<&ContactForm> for ContactFormView {
    fn from(form: &ContactForm) -> Self {
        Self {
            name: form.name.to_owned(),
            email: form.email.to_owned(),
            message: form.message.to_owned(),
            services: ServiceOption::all()
                .map(|option| ServiceChoice {
                    value: option.label(),
                    checked: form.is_selected(option),
                })
                .collect(),
            consent: form.has_consent(),
        }
    }
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub site: SiteConfig,
    pub content: &'static Content,
    pub form: ContactFormView,
    pub notice: Option<&'static str>,
}

impl IndexTemplate {
    pub fn new(site: SiteConfig, form: ContactFormView, notice: Option<&'static str>) -> Self {
        Self {
            site,
            content: &CONTENT,
            form,
            notice,
        }
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate::new(
        template.site(),
        ContactFormView::default(),
        None,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_lists_every_option_unchecked() {
        let view = ContactFormView::default();
        let values = view.services.iter().map(|c| c.value).collect::<Vec<_>>();

        assert_eq!(
            values,
            vec!["話だけ聞いてみたい", "ライフコーチング", "ストレングスコーチング"]
        );
        assert!(view.services.iter().all(|c| !c.checked));
        assert!(!view.consent);
    }

    #[test]
    fn test_view_keeps_posted_values() {
        let form = ContactForm {
            name: "Taro".to_owned(),
            email: "taro@example.com".to_owned(),
            message: "hi".to_owned(),
            service_options: vec![ServiceOption::StrengthsCoaching.label().to_owned()],
            privacy: Some("on".to_owned()),
        };

        let view = ContactFormView::from(&form);

        assert_eq!(view.name, "Taro");
        assert_eq!(view.message, "hi");
        assert!(view.consent);
        assert!(view.services[2].checked);
        assert!(!view.services[0].checked);
    }
}
