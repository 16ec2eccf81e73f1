pub(crate) const BODY_MAX_LENGTH: usize = 1024;

/// Errors surfaced by the ZAPI client.
///
/// Remote failures reported through the `status`/`reason`/`errno` result
/// attributes are deliberately *not* represented here: a decoded response
/// with `status="failed"` is still an `Ok` value, and callers inspect it
/// through [`ZapiStatus`](super::ZapiStatus).
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ZapiError {
    /// HTTP client error from the underlying reqwest library.
    ReqwestError(reqwest::Error),

    /// URL parsing error when constructing the management endpoint.
    UrlError(url::ParseError),

    /// The filer rejected the credentials.
    #[display("response code 401 (Unauthorized): incorrect or missing credentials")]
    Unauthorized,

    /// The filer answered with a status code outside the 2xx range.
    #[display("unexpected status code {status_code}: {body}")]
    #[from(skip)]
    UnexpectedStatusCode {
        /// The HTTP status code received.
        status_code: u16,
        /// The response body, truncated for logging.
        body: String,
    },

    /// A request could not be encoded to its XML wire form.
    #[display("failed to encode `{operation}` request: {error}")]
    #[from(skip)]
    EncodeError {
        /// Wire name of the operation being encoded.
        operation: &'static str,
        /// The underlying serializer error.
        error: serde_xml_rs::Error,
    },

    /// A response body could not be decoded into the expected shape.
    #[display("failed to decode `{operation}` response: {error}\n{body}")]
    #[from(skip)]
    DecodeError {
        /// Wire name of the operation being decoded.
        operation: &'static str,
        /// The underlying deserializer error.
        error: serde_xml_rs::Error,
        /// The response body that failed to parse, truncated.
        body: String,
    },

    /// The client was configured with values it cannot use.
    #[display("invalid client configuration: {error}")]
    #[from(skip)]
    InvalidConfiguration {
        /// Description of the rejected configuration.
        error: String,
    },

    /// A paginated fetch issued more page requests than the configured
    /// bound allows.
    #[display("paginated fetch exceeded the configured page limit ({limit})")]
    #[from(skip)]
    PageLimitExceeded {
        /// The configured maximum number of page requests.
        limit: usize,
    },
}

pub(crate) fn truncate_body(body: &str) -> String {
    if body.len() > BODY_MAX_LENGTH {
        format!("{}... (truncated)", &body[..BODY_MAX_LENGTH])
    } else {
        body.to_owned()
    }
}
