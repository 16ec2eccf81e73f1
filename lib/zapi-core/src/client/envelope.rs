use tracing::error;

use crate::api::ZapiRequest;
use crate::client::ZapiError;

/// Namespace carried on every `<netapp>` envelope.
pub(crate) const ZAPI_XMLNS: &str = "http://www.netapp.com/filer/admin";

/// Protocol version announced in request envelopes.
pub(crate) const ZAPI_VERSION: &str = "1.21";

/// Encodes a request and wraps it in the `<netapp>` envelope, tunneling
/// to the named vserver when one is configured.
pub(crate) fn wrap<R: ZapiRequest>(
    request: &R,
    vfiler: Option<&str>,
) -> Result<String, ZapiError> {
    let payload = serde_xml_rs::to_string(request).map_err(|error| {
        error!(operation = R::NAME, %error, "failed to encode ZAPI request");
        ZapiError::EncodeError {
            operation: R::NAME,
            error,
        }
    })?;
    // The serializer emits a standalone document; its prolog cannot be
    // embedded inside our envelope.
    let payload = document_body(&payload);

    let document = match vfiler {
        Some(vfiler) => format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><netapp xmlns="{ZAPI_XMLNS}" version="{ZAPI_VERSION}" vfiler="{vfiler}">{payload}</netapp>"#
        ),
        None => format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><netapp xmlns="{ZAPI_XMLNS}" version="{ZAPI_VERSION}">{payload}</netapp>"#
        ),
    };
    Ok(document)
}

fn document_body(document: &str) -> &str {
    let trimmed = document.trim_start();
    match trimmed.strip_prefix("<?xml") {
        Some(rest) => match rest.split_once("?>") {
            Some((_, body)) => body.trim_start(),
            None => trimmed,
        },
        None => trimmed,
    }
}
