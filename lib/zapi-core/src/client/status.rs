use std::fmt;

/// Well-known ZAPI errno values, as reported in the `errno` attribute of
/// a failed result.
pub mod errno {
    /// Generic API error.
    pub const EAPIERROR: &str = "13001";
    /// The request requires a higher privilege level.
    pub const EAPIPRIVILEGE: &str = "13003";
    /// The API is not known at this scope.
    pub const EAPINOTFOUND: &str = "13005";
    /// The named volume does not exist.
    pub const EVOLUMEDOESNOTEXIST: &str = "13040";
    /// Internal error on the filer.
    pub const EINTERNALERROR: &str = "13114";
    /// A request field failed validation.
    pub const EINVALIDINPUTERROR: &str = "13115";
    /// An entry with the same key already exists.
    pub const EDUPLICATEENTRY: &str = "13130";
    /// The referenced object does not exist.
    pub const EOBJECTNOTFOUND: &str = "15661";
}

/// The `status`/`reason`/`errno` triple of a decoded result.
///
/// The execute path never interprets these values; callers extract them
/// via [`ZapiResult::zapi_status`](crate::api::ZapiResult::zapi_status)
/// and decide whether the operation failed at the application level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZapiStatus {
    status: String,
    reason: String,
    errno: String,
}

impl ZapiStatus {
    pub(crate) fn new(status: &str, reason: &str, errno: &str) -> Self {
        Self {
            status: status.to_owned(),
            reason: reason.to_owned(),
            errno: errno.to_owned(),
        }
    }

    /// Whether the filer reported success.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.status == "passed"
    }

    /// Whether the failure was a privilege-level rejection.
    #[must_use]
    pub fn is_privilege_error(&self) -> bool {
        self.errno == errno::EAPIPRIVILEGE
    }

    /// Whether the request was issued at the wrong management scope
    /// (cluster vs. vserver).
    #[must_use]
    pub fn is_scope_error(&self) -> bool {
        self.errno == errno::EAPIPRIVILEGE || self.errno == errno::EAPINOTFOUND
    }

    /// Whether the referenced object is missing.
    #[must_use]
    pub fn is_object_not_found(&self) -> bool {
        self.errno == errno::EOBJECTNOTFOUND || self.errno == errno::EVOLUMEDOESNOTEXIST
    }

    /// The raw `status` attribute.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The raw `reason` attribute.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The raw `errno` attribute.
    #[must_use]
    pub fn errno(&self) -> &str {
        &self.errno
    }
}

impl fmt::Display for ZapiStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_passed() {
            write!(formatter, "API status: passed")
        } else {
            write!(
                formatter,
                "API status: {}, Reason: {}, Code: {}",
                self.status, self.reason, self.errno
            )
        }
    }
}
