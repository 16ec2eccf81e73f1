//! The executor: serializes requests, drives the transport, decodes
//! responses, and runs the paginated fetch protocol.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::{ZapiIterRequest, ZapiIterable, ZapiRequest, ZapiResponse};

mod builder;
pub use self::builder::ZapiClientBuilder;

mod credentials;
pub use self::credentials::Secret;

pub(crate) mod envelope;

mod error;
pub use self::error::ZapiError;

mod iter;

mod status;
pub use self::status::{ZapiStatus, errno};

mod transport;
pub use self::transport::{HttpTransport, Transport};

#[cfg(test)]
mod integration_tests;

/// Client for a single ONTAP management endpoint.
///
/// The client owns the transport and the tunneling configuration; the
/// request objects carry everything operation-specific. Cloning is
/// cheap and clones share the underlying connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use zapi_core::ZapiClient;
/// use zapi_core::api::SystemGetVersionRequest;
///
/// # async fn example() -> Result<(), zapi_core::ZapiError> {
/// let client = ZapiClient::builder()
///     .with_host("10.0.207.8")
///     .with_credentials("admin", "netapp123")
///     .with_danger_accept_invalid_certs(true)
///     .build()?;
///
/// let response = SystemGetVersionRequest::new().execute(&client).await?;
/// let status = response.results.zapi_status();
/// # use zapi_core::api::ZapiResult as _;
/// if status.is_passed() {
///     println!("{}", response.results.version());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ZapiClient {
    transport: Arc<dyn Transport>,
    vfiler: Option<String>,
    page_limit: Option<usize>,
}

impl ZapiClient {
    /// Starts building a client.
    #[must_use]
    pub fn builder() -> ZapiClientBuilder {
        ZapiClientBuilder::default()
    }

    /// Sends one request and decodes one response, the degenerate
    /// single-page case used by every non-iterator operation.
    ///
    /// A response whose result reports `status="failed"` is still `Ok`;
    /// remote failures are the caller's to inspect.
    ///
    /// # Errors
    ///
    /// Fails on encode, transport, or decode errors.
    pub async fn execute<R: ZapiRequest>(
        &self,
        request: &R,
    ) -> Result<ZapiResponse<R::Result>, ZapiError> {
        let document = envelope::wrap(request, self.vfiler.as_deref())?;
        debug!(operation = R::NAME, "sending ZAPI request");
        let body = self.transport.round_trip(&document).await?;
        debug!(operation = R::NAME, bytes = body.len(), "received ZAPI response");

        let response = serde_xml_rs::from_str(&body).map_err(|error| {
            warn!(operation = R::NAME, %error, "failed to decode ZAPI response");
            ZapiError::DecodeError {
                operation: R::NAME,
                error,
                body: error::truncate_body(&body),
            }
        })?;
        Ok(response)
    }

    /// Fetches the complete result set of an iterator operation,
    /// transparently issuing as many page requests as needed.
    ///
    /// The request is consumed: the pagination protocol advances its
    /// continuation cursor in place between pages.
    ///
    /// # Errors
    ///
    /// Fails on the first page-level error, discarding any accumulated
    /// pages, and on an exceeded page limit when one is configured.
    pub async fn execute_iter<R>(&self, request: R) -> Result<ZapiResponse<R::Result>, ZapiError>
    where
        R: ZapiIterRequest,
        R::Result: ZapiIterable,
    {
        iter::fetch_all(self, request).await
    }

    pub(crate) fn page_limit(&self) -> Option<usize> {
        self.page_limit
    }
}
