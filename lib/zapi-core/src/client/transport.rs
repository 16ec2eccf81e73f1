use std::fmt::Debug;

use async_trait::async_trait;
use http::StatusCode;
use http::header::CONTENT_TYPE;
use url::Url;

use super::credentials::Secret;
use super::error::truncate_body;
use super::ZapiError;

/// Servlet path every ZAPI request is posted to.
pub(crate) const FILER_SERVLET_PATH: &str = "/servlets/netapp.servlets.admin.XMLrequest_filer";

/// One blocking round-trip to the filer: post a serialized request
/// document, return the raw response body.
///
/// The transport must not retry and must not mutate the document;
/// timeout and TLS policy belong to the implementation.
#[async_trait]
pub trait Transport: Debug + Send + Sync {
    /// Performs the round-trip.
    async fn round_trip(&self, document: &str) -> Result<String, ZapiError>;
}

/// The reqwest-backed transport used against real filers.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
    username: String,
    password: Secret,
}

impl HttpTransport {
    /// Creates a transport posting to the given management endpoint with
    /// HTTP basic authentication.
    #[must_use]
    pub fn new(client: reqwest::Client, endpoint: Url, username: String, password: Secret) -> Self {
        Self {
            client,
            endpoint,
            username,
            password,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn round_trip(&self, document: &str) -> Result<String, ZapiError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/xml")
            .basic_auth(&self.username, Some(self.password.as_str()))
            .body(document.to_owned())
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ZapiError::Unauthorized);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|error| format!("<unable to read response body: {error}>"));
            return Err(ZapiError::UnexpectedStatusCode {
                status_code: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        Ok(response.text().await?)
    }
}
