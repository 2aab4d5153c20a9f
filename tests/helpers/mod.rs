//! Shared setup for router tests: a stand-in form endpoint and an app
//! wired to it.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Body,
    extract::{Multipart, State},
    http::{Request, Response, StatusCode, header},
    routing::post,
};
use http_body_util::BodyExt;
use nakaima::{
    AppState, Config,
    config::{ContactConfig, ObservabilityConfig, ServerConfig, SiteConfig},
};
use tokio::net::TcpListener;
use tower::ServiceExt;

pub const THANKS_URL: &str = "https://bansoshar.com/thanks";

type Inbox = Arc<Mutex<Vec<Vec<(String, String)>>>>;

pub struct FormEndpoint {
    pub url: String,
    inbox: Inbox,
}

impl FormEndpoint {
    /// Fields of every multipart post received so far.
    pub fn received(&self) -> Vec<Vec<(String, String)>> {
        self.inbox.lock().unwrap().clone()
    }
}

pub async fn spawn_form_endpoint(status: StatusCode) -> anyhow::Result<FormEndpoint> {
    let inbox = Inbox::default();
    let app = Router::new()
        .route("/f/test", post(capture))
        .with_state((status, inbox.clone()));

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move { axum::serve(listener, app).await });

    Ok(FormEndpoint {
        url: format!("http://{addr}/f/test"),
        inbox,
    })
}

/// Address nothing listens on.
pub async fn closed_endpoint() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    Ok(format!("http://{addr}/f/test"))
}

async fn capture(
    State((status, inbox)): State<(StatusCode, Inbox)>,
    mut multipart: Multipart,
) -> StatusCode {
    let mut fields = Vec::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_owned();
        let value = field.text().await.unwrap_or_default();
        fields.push((name, value));
    }

    inbox.lock().unwrap().push(fields);

    status
}

pub fn test_config(endpoint: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        site: SiteConfig::default(),
        contact: ContactConfig {
            endpoint: endpoint.to_owned(),
            thanks_url: THANKS_URL.to_owned(),
        },
        observability: ObservabilityConfig::default(),
    }
}

pub fn app(endpoint: &str) -> anyhow::Result<Router> {
    Ok(nakaima::router(AppState::new(test_config(endpoint))?))
}

pub async fn get(app: Router, uri: &str) -> anyhow::Result<Response<Body>> {
    Ok(app
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?)
}

pub async fn post_form(
    app: Router,
    fields: &[(&str, &str)],
) -> anyhow::Result<Response<Body>> {
    let body = serde_urlencoded::to_string(fields)?;
    let request = Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))?;

    Ok(app.oneshot(request).await?)
}

pub async fn body_string(response: Response<Body>) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(String::from_utf8(bytes.to_vec())?)
}

pub fn field<'a>(fields: &'a [(String, String)], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}
