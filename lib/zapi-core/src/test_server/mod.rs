//! In-process mock filer for exercising the HTTP transport end to end.
//!
//! [`MockFiler`] binds a local port and answers each POST with the next
//! scripted `<results>` payload, wrapped in the `<netapp>` envelope a
//! real filer would send. Every raw request document is recorded so
//! tests can assert on what actually went over the wire, including the
//! continuation tag of follow-up page requests.
//!
//! ```rust,no_run
//! use zapi_core::test_server::MockFiler;
//! use zapi_core::api::SystemGetVersionRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let filer = MockFiler::new()
//!     .with_results(r#"<results status="passed"><version>NetApp Release 9.3P8</version></results>"#)
//!     .start()
//!     .await?;
//!
//! let client = filer.client_builder().build()?;
//! let _response = SystemGetVersionRequest::new().execute(&client).await?;
//! assert_eq!(filer.requests().await.len(), 1);
//! # Ok(())
//! # }
//! ```

use std::collections::VecDeque;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use http::uri::Scheme;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;
use tracing::error;

use crate::client::envelope::{ZAPI_VERSION, ZAPI_XMLNS};
use crate::client::{ZapiClient, ZapiClientBuilder};

const FALLBACK_RESULTS: &str =
    r#"<results status="failed" reason="mock filer has no scripted response" errno="13114"></results>"#;

/// A scripted filer double, configured fluently and then started.
#[derive(Debug, Default)]
pub struct MockFiler {
    responses: VecDeque<String>,
    reject_credentials: bool,
}

struct FilerState {
    responses: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<String>>,
    reject_credentials: bool,
}

impl MockFiler {
    /// Creates a filer with an empty script; unscripted requests are
    /// answered with a failed result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues one `<results …>` payload; responses are served in
    /// enqueue order.
    #[must_use]
    pub fn with_results(mut self, results: impl Into<String>) -> Self {
        self.responses.push_back(results.into());
        self
    }

    /// Makes the filer reject every request with HTTP 401.
    #[must_use]
    pub fn with_unauthorized(mut self) -> Self {
        self.reject_credentials = true;
        self
    }

    /// Binds a local port and starts serving the script in a background
    /// task; the task is aborted when the returned handle drops.
    ///
    /// # Errors
    ///
    /// Fails when no local port can be bound.
    pub async fn start(self) -> std::io::Result<FilerHandle> {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
        let local_addr = listener.local_addr()?;

        let state = Arc::new(FilerState {
            responses: Mutex::new(self.responses),
            requests: Mutex::new(Vec::new()),
            reject_credentials: self.reject_credentials,
        });

        let accept_state = Arc::clone(&state);
        let task = tokio::spawn(async move {
            loop {
                match listener.accept().await {
                    Ok((stream, _)) => {
                        let state = Arc::clone(&accept_state);
                        tokio::spawn(async move {
                            if let Err(error) = serve_connection(stream, state).await {
                                error!(?error, "mock filer connection failed");
                            }
                        });
                    }
                    Err(error) => {
                        error!(?error, "mock filer accept failed");
                        break;
                    }
                }
            }
        });

        let handle = FilerHandle {
            local_addr,
            state,
            task: Some(task),
        };
        handle.wait_until_ready().await;
        Ok(handle)
    }
}

/// Handle to a running [`MockFiler`]; dropping it stops the server.
pub struct FilerHandle {
    local_addr: SocketAddr,
    state: Arc<FilerState>,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl FilerHandle {
    /// Address the filer is listening on.
    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// A client builder preconfigured to talk to this filer over plain
    /// HTTP with throwaway credentials.
    #[must_use]
    pub fn client_builder(&self) -> ZapiClientBuilder {
        ZapiClient::builder()
            .with_scheme(Scheme::HTTP)
            .with_host(self.local_addr.ip().to_string())
            .with_port(self.local_addr.port())
            .with_credentials("admin", "netapp123")
    }

    /// Raw request documents received so far, in arrival order.
    pub async fn requests(&self) -> Vec<String> {
        self.state.requests.lock().await.clone()
    }

    async fn wait_until_ready(&self) {
        let addr = self.local_addr;
        let connect = || async move { TcpStream::connect(addr).await };
        let backoff = ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(5))
            .with_max_times(10);
        if let Err(error) = connect.retry(&backoff).await {
            error!(?error, %addr, "mock filer did not become reachable");
        }
    }
}

impl Drop for FilerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn serve_connection(
    mut stream: TcpStream,
    state: Arc<FilerState>,
) -> std::io::Result<()> {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 4096];

    let header_end = loop {
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            return Ok(());
        }
        buffer.extend_from_slice(&chunk[..read]);
        if let Some(position) = buffer.windows(4).position(|window| window == b"\r\n\r\n") {
            break position + 4;
        }
    };

    let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buffer.len() < header_end + content_length {
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);
    }
    let body = String::from_utf8_lossy(&buffer[header_end..]).to_string();
    state.requests.lock().await.push(body);

    let response = if state.reject_credentials {
        "HTTP/1.1 401 Unauthorized\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string()
    } else {
        let results = state
            .responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| FALLBACK_RESULTS.to_string());
        let payload = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><netapp version="{ZAPI_VERSION}" xmlns="{ZAPI_XMLNS}">{results}</netapp>"#
        );
        format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            payload.len(),
            payload
        )
    };

    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await?;
    Ok(())
}
