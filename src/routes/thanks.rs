use axum::response::IntoResponse;

use crate::{config::SiteConfig, template::Template};

#[derive(askama::Template)]
#[template(path = "thanks.html")]
pub struct ThanksTemplate {
    pub site: SiteConfig,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ThanksTemplate {
        site: template.site(),
    })
}
