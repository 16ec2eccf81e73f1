use std::sync::Arc;
use std::time::Duration;

use http::uri::Scheme;
use url::Url;

use super::credentials::Secret;
use super::transport::{FILER_SERVLET_PATH, HttpTransport, Transport};
use super::{ZapiClient, ZapiError};

/// Round-trip timeout applied when none is configured. Filer-side jobs
/// can keep a management request open for a long time.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

/// Builder for [`ZapiClient`] instances.
///
/// # Defaults
///
/// - **Scheme**: HTTPS (management LIFs rarely speak plain HTTP)
/// - **Host**: 127.0.0.1, **Port**: none (scheme default)
/// - **Timeout**: 90 seconds
/// - **Certificate validation**: on; see
///   [`with_danger_accept_invalid_certs`](Self::with_danger_accept_invalid_certs)
///   for filers with self-signed certificates
/// - **Vserver tunneling**: off
/// - **Page limit**: none (a paginated fetch follows tags until the
///   filer stops returning them)
#[derive(Debug, Clone, Default)]
pub struct ZapiClientBuilder {
    scheme: Option<Scheme>,
    host: Option<String>,
    port: Option<u16>,
    username: String,
    password: Secret,
    vfiler: Option<String>,
    timeout: Option<Duration>,
    accept_invalid_certs: bool,
    page_limit: Option<usize>,
    transport: Option<Arc<dyn Transport>>,
}

impl ZapiClientBuilder {
    /// Sets the URL scheme used to reach the management LIF.
    #[must_use]
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Sets the management LIF host name or address.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets an explicit management port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the HTTP basic-auth credentials.
    #[must_use]
    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<Secret>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Tunnels every request to the named vserver (SVM) instead of the
    /// cluster management scope.
    #[must_use]
    pub fn with_vfiler(mut self, vfiler: impl Into<String>) -> Self {
        self.vfiler = Some(vfiler.into());
        self
    }

    /// Sets the round-trip timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Disables TLS certificate validation.
    ///
    /// Filers commonly present self-signed certificates; enabling this
    /// accepts any certificate, so use it only on trusted networks.
    #[must_use]
    pub fn with_danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Bounds the number of page requests a single paginated fetch may
    /// issue, guarding against a filer that replays the same
    /// continuation tag forever.
    #[must_use]
    pub fn with_page_limit(mut self, limit: usize) -> Self {
        self.page_limit = Some(limit);
        self
    }

    /// Replaces the HTTP transport; used by tests and by embedders with
    /// their own connection handling.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Fails when the scheme is neither `http` nor `https`, when the
    /// endpoint URL cannot be assembled from host and port, or when the
    /// underlying HTTP client rejects its configuration.
    pub fn build(self) -> Result<ZapiClient, ZapiError> {
        let Self {
            scheme,
            host,
            port,
            username,
            password,
            vfiler,
            timeout,
            accept_invalid_certs,
            page_limit,
            transport,
        } = self;

        let transport: Arc<dyn Transport> = match transport {
            Some(transport) => transport,
            None => {
                let scheme = scheme.unwrap_or(Scheme::HTTPS);
                if scheme != Scheme::HTTP && scheme != Scheme::HTTPS {
                    return Err(ZapiError::InvalidConfiguration {
                        error: format!("unsupported scheme: {scheme}"),
                    });
                }
                let host = host.unwrap_or_else(|| "127.0.0.1".to_string());
                let authority = match port {
                    Some(port) => format!("{host}:{port}"),
                    None => host,
                };
                let endpoint =
                    format!("{scheme}://{authority}{FILER_SERVLET_PATH}").parse::<Url>()?;

                let client = reqwest::Client::builder()
                    .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
                    .danger_accept_invalid_certs(accept_invalid_certs)
                    .build()?;
                Arc::new(HttpTransport::new(client, endpoint, username, password))
            }
        };

        Ok(ZapiClient {
            transport,
            vfiler,
            page_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_build_succeeds() {
        let client = ZapiClient::builder().build();

        assert!(client.is_ok());
    }

    #[test]
    fn builder_accepts_a_full_configuration() {
        let client = ZapiClient::builder()
            .with_scheme(Scheme::HTTP)
            .with_host("filer.example.com")
            .with_port(8443)
            .with_credentials("admin", "netapp123")
            .with_vfiler("svm1")
            .with_timeout(Duration::from_secs(10))
            .with_danger_accept_invalid_certs(true)
            .with_page_limit(100)
            .build();

        assert!(client.is_ok());
    }
}
