use std::{
    io,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    extract::{Multipart, State},
    http::{HeaderMap, StatusCode, header},
    routing::post,
};
use tokio::net::TcpListener;
use tracing::subscriber::DefaultGuard;

#[derive(Debug, Clone)]
pub struct Received {
    pub fields: Vec<(String, String)>,
    pub accept: Option<String>,
}

impl Received {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

type Inbox = Arc<Mutex<Vec<Received>>>;

/// In-process stand-in for the third-party form endpoint. Answers every
/// multipart post with `status` and keeps what it received.
pub struct FormEndpoint {
    pub url: String,
    inbox: Inbox,
}

impl FormEndpoint {
    pub fn received(&self) -> Vec<Received> {
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
    headers: HeaderMap,
    mut multipart: Multipart,
) -> StatusCode {
    let mut fields = Vec::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_owned();
        let value = field.text().await.unwrap_or_default();
        fields.push((name, value));
    }

    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    inbox.lock().unwrap().push(Received { fields, accept });

    status
}

/// Collects formatted log lines written while its guard is alive.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Installs a subscriber writing into the buffer for the current thread.
    pub fn capture() -> (Self, DefaultGuard) {
        let buffer = Self::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        (buffer, tracing::subscriber::set_default(subscriber))
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
