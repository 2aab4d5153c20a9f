use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use nakaima_contact::FormClient;

use crate::template::{NotFoundTemplate, Template};

mod contact;
mod health;
mod index;
mod thanks;

pub use index::{ContactFormView, IndexTemplate, ServiceChoice};

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub form_client: FormClient,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> anyhow::Result<Self> {
        let form_client = FormClient::new(config.contact.endpoint_url()?)?;

        Ok(Self {
            config,
            form_client,
        })
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            site: template.site(),
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/thanks", get(thanks::page))
        .route("/static/{*path}", get(crate::assets::serve))
        .fallback(fallback)
        .with_state(app_state)
}
