//! # zapi-core
//!
//! Typed Rust bindings for NetApp ONTAP's ZAPI management protocol,
//! the XML-over-HTTP RPC interface of Data ONTAP filers.
//!
//! Every remote operation is modeled as a request struct with fluent
//! `with_*` setters, a strongly typed `results` payload, and an
//! `execute` entry point. For `*-get-iter` operations, `execute` runs
//! the paginated fetch protocol: it follows the filer's opaque
//! continuation tags and returns one combined response covering the
//! whole result set.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use zapi_core::ZapiClient;
//! use zapi_core::api::{VolumeAttributes, VolumeGetIterQuery, VolumeGetIterRequest, VolumeIdAttributes};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ZapiClient::builder()
//!     .with_host("filer.example.com")
//!     .with_credentials("admin", "netapp123")
//!     .with_danger_accept_invalid_certs(true)
//!     .build()?;
//!
//! // List every volume owned by svm1, across however many pages the
//! // filer needs.
//! let response = VolumeGetIterRequest::new()
//!     .with_max_records(100_i64)
//!     .with_query(VolumeGetIterQuery::new().with_volume_attributes(
//!         VolumeAttributes::new().with_volume_id_attributes(
//!             VolumeIdAttributes::new().with_owning_vserver_name("svm1"),
//!         ),
//!     ))
//!     .execute(&client)
//!     .await?;
//!
//! for volume in response.results.attributes_list().values() {
//!     println!("{}", volume.volume_id_attributes().name());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Layout
//!
//! - [`api`]: the generated-style object model: one request/result
//!   family per operation, plus the traits the executor is generic over.
//! - [`client`]: the executor: envelope handling, the HTTP transport
//!   seam, and the pagination loop.
//! - [`test_server`]: a scripted in-process filer for end-to-end tests.
//!
//! Remote failures are data, not errors: a decoded response with
//! `status="failed"` is returned as `Ok`, and callers inspect it through
//! [`api::ZapiResult::zapi_status`]. Unset optional fields are distinct
//! from zero values, and reading one through its getter panics rather
//! than inventing a default.

pub mod api;
pub mod client;
pub mod test_server;

pub use api::{ZapiIterRequest, ZapiIterable, ZapiRequest, ZapiResponse, ZapiResult};
pub use client::{
    HttpTransport, Secret, Transport, ZapiClient, ZapiClientBuilder, ZapiError, ZapiStatus,
};
