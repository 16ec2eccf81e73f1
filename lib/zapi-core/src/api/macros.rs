//! Declarative templates for the ZAPI object families.
//!
//! The upstream protocol definition expands every operation into a
//! near-identical set of structures; these macros are the single
//! template the per-operation modules instantiate instead. Each field is
//! declared as `name: Type => "wire-tag"`: the field becomes optional,
//! unset fields are omitted from the wire, the getter fails fast on an
//! unset field (absence is not a zero value), and the `with_*` setter
//! consumes and returns the value for chaining.

/// An element-backed ZAPI object: a request, a domain record, or a
/// wrapper holding a single nested record.
macro_rules! zapi_object {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $wire:literal {
            $(
                $(#[$fmeta:meta])*
                $field:ident: $ty:ty => $tag:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename = $wire)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $tag, default, skip_serializing_if = "Option::is_none")]
                pub(crate) $field: Option<$ty>,
            )*
        }

        ::paste::paste! {
            impl $name {
                #[doc = concat!("Creates an empty `", stringify!($name), "` with every field unset.")]
                #[must_use]
                pub fn new() -> Self {
                    Self::default()
                }

                $(
                    #[doc = concat!("Returns the `", $tag, "` field.")]
                    ///
                    /// # Panics
                    ///
                    /// Panics when the field was never set.
                    #[must_use]
                    pub fn $field(&self) -> $ty {
                        match &self.$field {
                            Some(value) => value.clone(),
                            None => panic!(concat!(
                                "field `", $tag, "` of ", stringify!($name),
                                " accessed before it was set"
                            )),
                        }
                    }

                    #[doc = concat!("Sets the `", $tag, "` field, replacing any previous value.")]
                    #[must_use]
                    pub fn [<with_ $field>](mut self, value: impl Into<$ty>) -> Self {
                        self.$field = Some(value.into());
                        self
                    }
                )*
            }
        }
    };
}
pub(crate) use zapi_object;

/// A wrapper that exists solely to hold an ordered sequence of one
/// repeated child element.
macro_rules! zapi_list_wrapper {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $wire:literal {
            $field:ident: Vec<$ty:ty> => $tag:literal
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename = $wire)]
        pub struct $name {
            #[serde(rename = $tag, default, skip_serializing_if = "Vec::is_empty")]
            pub(crate) $field: Vec<$ty>,
        }

        ::paste::paste! {
            impl $name {
                #[doc = concat!("Creates an empty `", stringify!($name), "`.")]
                #[must_use]
                pub fn new() -> Self {
                    Self::default()
                }

                #[doc = concat!("Returns the repeated `", $tag, "` children in wire order.")]
                #[must_use]
                pub fn $field(&self) -> &[$ty] {
                    &self.$field
                }

                #[doc = concat!("Replaces the `", $tag, "` children.")]
                #[must_use]
                pub fn [<with_ $field>](mut self, values: Vec<$ty>) -> Self {
                    self.$field = values;
                    self
                }

                /// Returns the wrapped sequence; equivalent to the named getter.
                #[must_use]
                pub fn values(&self) -> &[$ty] {
                    &self.$field
                }

                /// Replaces the wrapped sequence; the pagination merge goes
                /// through this accessor.
                pub fn set_values(&mut self, values: Vec<$ty>) -> &mut Self {
                    self.$field = values;
                    self
                }
            }
        }
    };
}
pub(crate) use zapi_list_wrapper;

/// A `<results>` payload: the mandatory `status`/`reason`/`errno`
/// attributes plus optional operation-specific child elements.
macro_rules! zapi_result {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident: $ty:ty => $tag:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename = "results")]
        pub struct $name {
            #[serde(rename = "@status", default)]
            pub(crate) status: String,
            #[serde(rename = "@reason", default)]
            pub(crate) reason: String,
            #[serde(rename = "@errno", default)]
            pub(crate) errno: String,
            $(
                $(#[$fmeta])*
                #[serde(rename = $tag, default, skip_serializing_if = "Option::is_none")]
                pub(crate) $field: Option<$ty>,
            )*
        }

        ::paste::paste! {
            impl $name {
                #[doc = concat!("Creates an empty `", stringify!($name), "`.")]
                #[must_use]
                pub fn new() -> Self {
                    Self::default()
                }

                /// The `status` attribute reported by the filer.
                #[must_use]
                pub fn status(&self) -> &str {
                    &self.status
                }

                /// The human-readable `reason` attribute.
                #[must_use]
                pub fn reason(&self) -> &str {
                    &self.reason
                }

                /// The numeric `errno` attribute.
                #[must_use]
                pub fn errno(&self) -> &str {
                    &self.errno
                }

                $(
                    #[doc = concat!("Returns the `", $tag, "` field.")]
                    ///
                    /// # Panics
                    ///
                    /// Panics when the field was never set.
                    #[must_use]
                    pub fn $field(&self) -> $ty {
                        match &self.$field {
                            Some(value) => value.clone(),
                            None => panic!(concat!(
                                "field `", $tag, "` of ", stringify!($name),
                                " accessed before it was set"
                            )),
                        }
                    }

                    #[doc = concat!("Sets the `", $tag, "` field, replacing any previous value.")]
                    #[must_use]
                    pub fn [<with_ $field>](mut self, value: impl Into<$ty>) -> Self {
                        self.$field = Some(value.into());
                        self
                    }
                )*
            }
        }

        impl $crate::api::ZapiResult for $name {
            fn raw_status(&self) -> &str {
                &self.status
            }

            fn raw_reason(&self) -> &str {
                &self.reason
            }

            fn raw_errno(&self) -> &str {
                &self.errno
            }
        }
    };
}
pub(crate) use zapi_result;

/// Ties a request struct to its operation name and result type, and adds
/// the one-shot `execute` entry point.
macro_rules! zapi_request {
    ($request:ident => $wire:literal, result: $result:ident, response: $response:ident) => {
        impl $crate::api::ZapiRequest for $request {
            const NAME: &'static str = $wire;
            type Result = $result;
        }

        impl $request {
            /// Sends this request through the client and returns the decoded
            /// response.
            pub async fn execute(
                self,
                client: &$crate::client::ZapiClient,
            ) -> Result<$crate::api::ZapiResponse<$result>, $crate::client::ZapiError> {
                client.execute(&self).await
            }
        }

        #[doc = concat!("Response envelope of the `", $wire, "` operation.")]
        pub type $response = $crate::api::ZapiResponse<$result>;
    };
}
pub(crate) use zapi_request;

/// Expands the whole family of a `*-get-iter` operation: request, query
/// wrapper, attributes-list wrapper, result, response alias, and the
/// trait impls driving the paginated fetch protocol.
macro_rules! zapi_iter_op {
    (
        $(#[$meta:meta])*
        $prefix:ident => $wire:literal,
        record: $record:ty { $rfield:ident => $rtag:literal }
        $(, extra: {
            $(
                $(#[$xmeta:meta])*
                $xfield:ident: $xty:ty => $xtag:literal
            ),* $(,)?
        })?
    ) => {
        ::paste::paste! {
            $crate::api::macros::zapi_object! {
                $(#[$meta])*
                pub struct [<$prefix Request>] => $wire {
                    /// Projection hint: the attributes the filer should return.
                    desired_attributes: [<$prefix Query>] => "desired-attributes",
                    /// Page size hint.
                    max_records: i64 => "max-records",
                    /// Filter: only records matching this pattern are listed.
                    query: [<$prefix Query>] => "query",
                    /// Opaque continuation cursor, carried on every call after
                    /// the first.
                    tag: String => "tag",
                }
            }

            $crate::api::macros::zapi_object! {
                #[doc = concat!(
                    "Wrapper holding one optional `", $rtag,
                    "` pattern record; used for both the `query` and the `desired-attributes` elements."
                )]
                pub struct [<$prefix Query>] => "query" {
                    $rfield: $record => $rtag,
                }
            }

            $crate::api::macros::zapi_list_wrapper! {
                #[doc = concat!("Ordered sequence of `", $rtag, "` records.")]
                pub struct [<$prefix AttributesList>] => "attributes-list" {
                    $rfield: Vec<$record> => $rtag
                }
            }

            $crate::api::macros::zapi_result! {
                #[doc = concat!("`results` payload of the `", $wire, "` operation.")]
                pub struct [<$prefix Result>] {
                    /// Matching records: one page, or the combined sequence
                    /// after a full iteration.
                    attributes_list: [<$prefix AttributesList>] => "attributes-list",
                    /// Cursor for the next page; absent on the last one.
                    next_tag: String => "next-tag",
                    /// Record count of this page; recomputed on the combined
                    /// response.
                    num_records: i64 => "num-records"
                    $($(,
                        $(#[$xmeta])*
                        $xfield: $xty => $xtag
                    )*)?
                }
            }

            impl $crate::api::ZapiRequest for [<$prefix Request>] {
                const NAME: &'static str = $wire;
                type Result = [<$prefix Result>];
            }

            impl $crate::api::ZapiIterRequest for [<$prefix Request>] {
                fn advance(&mut self, tag: &str) {
                    self.tag = Some(tag.to_owned());
                }
            }

            impl $crate::api::ZapiIterable for [<$prefix Result>] {
                type Record = $record;

                fn continuation(&self) -> Option<&str> {
                    self.next_tag.as_deref()
                }

                fn page_records(&self) -> Option<i64> {
                    self.num_records
                }

                fn take_page(&mut self) -> Option<Vec<$record>> {
                    self.attributes_list.take().map(|list| list.$rfield)
                }

                fn extend_page(&mut self, records: Vec<$record>) {
                    let list = self
                        .attributes_list
                        .get_or_insert_with([<$prefix AttributesList>]::new);
                    let mut values = ::std::mem::take(&mut list.$rfield);
                    values.extend(records);
                    list.set_values(values);
                }

                fn accumulated(&self) -> i64 {
                    self.attributes_list
                        .as_ref()
                        .map_or(0, |list| list.values().len() as i64)
                }

                fn set_record_count(&mut self, count: i64) {
                    self.num_records = Some(count);
                }

                fn adopt_status(&mut self, last: &Self) {
                    self.status = last.status.clone();
                    self.reason = last.reason.clone();
                    self.errno = last.errno.clone();
                }
            }

            impl [<$prefix Request>] {
                /// Fetches every page, following continuation tags, and
                /// returns one combined response.
                pub async fn execute(
                    self,
                    client: &$crate::client::ZapiClient,
                ) -> Result<
                    $crate::api::ZapiResponse<[<$prefix Result>]>,
                    $crate::client::ZapiError,
                > {
                    client.execute_iter(self).await
                }
            }

            #[doc = concat!("Combined response of the `", $wire, "` operation.")]
            pub type [<$prefix Response>] = $crate::api::ZapiResponse<[<$prefix Result>]>;
        }
    };
}
pub(crate) use zapi_iter_op;
