//! Request/response model shared by every ZAPI operation.
//!
//! Each remote operation is described by a request struct, a `results`
//! payload struct, and zero or more wrapper structs mirroring the
//! intermediate grouping elements of the XML schema. All of them follow
//! the same mechanical shape: optional fields, fluent `with_*` setters,
//! fail-fast getters. They are produced by the declarative templates in
//! the crate-internal `macros` module rather than written out by hand.
//!
//! The traits in this module are the seams the executor is generic over:
//! [`ZapiRequest`] ties a request to its operation name and result type,
//! and the [`ZapiIterRequest`]/[`ZapiIterable`] pair is what the
//! paginated fetch protocol needs from a `*-get-iter` operation.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::client::ZapiStatus;

pub(crate) mod macros;

mod common;
pub use common::AggrList;

mod export;
pub use export::*;
mod iscsi;
pub use iscsi::*;
mod job;
pub use job::*;
mod net;
pub use net::*;
mod quota;
pub use quota::*;
mod snapshot;
pub use snapshot::*;
mod system;
pub use system::*;
mod volume;
pub use volume::*;
mod vserver;
pub use vserver::*;

/// A serializable ZAPI request, tied to the wire name of its operation
/// and to the `results` payload the filer answers with.
pub trait ZapiRequest: Serialize + Debug + Send + Sync {
    /// Wire name of the operation element, e.g. `volume-get-iter`.
    const NAME: &'static str;

    /// Payload carried by the `<results>` element of the response.
    type Result: ZapiResult;
}

/// The `results` payload of a response.
///
/// Every result carries the mandatory `status`/`reason`/`errno`
/// attributes. This layer surfaces them without interpretation; use
/// [`ZapiStatus`] to decide whether the operation failed remotely.
pub trait ZapiResult: DeserializeOwned + Default + Debug + Send {
    /// The `status` attribute (`passed` or `failed`).
    fn raw_status(&self) -> &str;

    /// The human-readable `reason` attribute.
    fn raw_reason(&self) -> &str;

    /// The numeric `errno` attribute.
    fn raw_errno(&self) -> &str;

    /// Extracts the status triple for caller-side inspection.
    fn zapi_status(&self) -> ZapiStatus {
        ZapiStatus::new(self.raw_status(), self.raw_reason(), self.raw_errno())
    }
}

/// A request whose result set may span multiple pages.
///
/// The paginated fetch protocol advances the opaque continuation cursor
/// in place between page requests.
pub trait ZapiIterRequest: ZapiRequest
where
    Self::Result: ZapiIterable,
{
    /// Stores the continuation tag for the next page request.
    fn advance(&mut self, tag: &str);
}

/// Page-level access to an iterator operation's `results` payload.
///
/// These are the operations the generic pagination loop performs; the
/// per-operation impls are generated alongside the structs.
pub trait ZapiIterable: ZapiResult {
    /// Domain record type listed under `attributes-list`.
    type Record;

    /// The `next-tag` cursor; absence means the filer has no more pages.
    fn continuation(&self) -> Option<&str>;

    /// The record count reported for this page.
    fn page_records(&self) -> Option<i64>;

    /// Detaches this page's records, leaving the list absent.
    fn take_page(&mut self) -> Option<Vec<Self::Record>>;

    /// Appends records to the accumulated list, creating it when missing.
    fn extend_page(&mut self, records: Vec<Self::Record>);

    /// Number of records accumulated so far.
    fn accumulated(&self) -> i64;

    /// Overwrites the reported record count.
    fn set_record_count(&mut self, count: i64);

    /// Adopts the status triple of the page that ended the fetch.
    fn adopt_status(&mut self, last: &Self);
}

/// The `<netapp>` response envelope: protocol version and namespace
/// attributes around exactly one `<results>` payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "netapp")]
pub struct ZapiResponse<R> {
    /// Protocol version reported by the filer.
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// XML namespace of the envelope.
    #[serde(rename = "@xmlns", default, skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
    /// The operation's `results` payload.
    #[serde(rename = "results")]
    pub results: R,
}
