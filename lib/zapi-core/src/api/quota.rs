//! Quota operations and records.

use crate::api::macros::{zapi_iter_op, zapi_object};

zapi_iter_op! {
    /// Lists quota rules, one page of `quota-entry` records at a time.
    QuotaListEntriesIter => "quota-list-entries-iter",
    record: QuotaEntry { quota_entry => "quota-entry" }
}

zapi_object! {
    /// One quota rule. Limits are strings on the wire: the filer
    /// distinguishes `-` (unlimited) from numeric values.
    pub struct QuotaEntry => "quota-entry" {
        disk_limit: String => "disk-limit",
        file_limit: String => "file-limit",
        perform_user_mapping: bool => "perform-user-mapping",
        policy: String => "policy",
        qtree: String => "qtree",
        quota_target: String => "quota-target",
        quota_type: String => "quota-type",
        soft_disk_limit: String => "soft-disk-limit",
        soft_file_limit: String => "soft-file-limit",
        threshold: String => "threshold",
        volume: String => "volume",
        vserver: String => "vserver",
    }
}
