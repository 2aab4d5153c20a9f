use reqwest::{header, multipart};
use url::Url;

use crate::{Error, Result, Submission};

/// Sends contact submissions to the third-party form endpoint.
///
/// One request per call: no retry, no backoff, and no timeout beyond the
/// client defaults.
#[derive(Clone, Debug)]
pub struct FormClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl FormClient {
    pub fn new(endpoint: Url) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn submit(&self, submission: &Submission) -> Result<()> {
        let form = submission
            .fields()
            .into_iter()
            .fold(multipart::Form::new(), |form, (name, value)| {
                form.text(name, value.to_owned())
            });

        let response = match self
            .http
            .post(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(endpoint = %self.endpoint, "contact submission failed: {err}");

                return Err(Error::Transport(err));
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "form endpoint rejected contact submission");

            return Err(Error::Rejected(status));
        }

        tracing::info!("contact submission accepted");

        Ok(())
    }
}
