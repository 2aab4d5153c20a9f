use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use nakaima_contact::ContactForm;

use crate::{
    routes::{AppState, ContactFormView, IndexTemplate},
    template::Template,
};

/// Reloading the page after a failed post lands back on the form.
pub async fn page() -> impl IntoResponse {
    Redirect::to("/#contact-form")
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<ContactForm>,
) -> Response {
    let submission = match input.assemble(&app_state.config.contact.thanks_url) {
        Ok(submission) => submission,
        Err(err) => {
            tracing::debug!("contact form not sent: {err}");

            return template.render_with_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                IndexTemplate::new(
                    template.site(),
                    ContactFormView::from(&input),
                    Some(err.notice()),
                ),
            );
        }
    };

    if let Err(err) = app_state.form_client.submit(&submission).await {
        return template.render_with_status(
            StatusCode::BAD_GATEWAY,
            IndexTemplate::new(
                template.site(),
                ContactFormView::from(&input),
                Some(err.notice()),
            ),
        );
    }

    Redirect::to(&app_state.config.contact.thanks_url).into_response()
}
