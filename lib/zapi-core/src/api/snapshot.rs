//! Snapshot operations and records.

use crate::api::macros::{zapi_iter_op, zapi_list_wrapper, zapi_object, zapi_request, zapi_result};

zapi_iter_op! {
    /// Lists the snapshots of the volumes matching the query.
    SnapshotGetIter => "snapshot-get-iter",
    record: SnapshotInfo { snapshot_info => "snapshot-info" },
    extra: {
        /// Volumes that could not be scanned while building the page.
        volume_errors: VolumeErrorsList => "volume-errors",
    }
}

zapi_object! {
    /// One snapshot of a volume.
    pub struct SnapshotInfo => "snapshot-info" {
        access_time: i64 => "access-time",
        busy: bool => "busy",
        comment: String => "comment",
        name: String => "name",
        snapmirror_label: String => "snapmirror-label",
        snapshot_instance_uuid: String => "snapshot-instance-uuid",
        state: String => "state",
        total: i64 => "total",
        volume: String => "volume",
        vserver: String => "vserver",
    }
}

zapi_list_wrapper! {
    /// Wrapper for the repeated `volume-error` children of a snapshot page.
    pub struct VolumeErrorsList => "volume-errors" {
        volume_error: Vec<VolumeError> => "volume-error"
    }
}

zapi_object! {
    /// Error reported for one volume while collecting snapshots.
    pub struct VolumeError => "volume-error" {
        errno: i64 => "errno",
        name: String => "name",
        reason: String => "reason",
        vserver: String => "vserver",
    }
}

zapi_object! {
    /// Creates a snapshot of a volume.
    pub struct SnapshotCreateRequest => "snapshot-create" {
        /// When set, the filer detaches the snapshot creation into a job.
        asynchronous: bool => "async",
        comment: String => "comment",
        snapmirror_label: String => "snapmirror-label",
        snapshot: String => "snapshot",
        volume: String => "volume",
    }
}

zapi_result! {
    /// `results` payload of `snapshot-create`; carries only the status triple.
    pub struct SnapshotCreateResult {}
}

zapi_request! { SnapshotCreateRequest => "snapshot-create", result: SnapshotCreateResult, response: SnapshotCreateResponse }

zapi_object! {
    /// Deletes a snapshot of a volume.
    pub struct SnapshotDeleteRequest => "snapshot-delete" {
        ignore_owners: bool => "ignore-owners",
        snapshot: String => "snapshot",
        snapshot_instance_uuid: String => "snapshot-instance-uuid",
        volume: String => "volume",
    }
}

zapi_result! {
    /// `results` payload of `snapshot-delete`; carries only the status triple.
    pub struct SnapshotDeleteResult {}
}

zapi_request! { SnapshotDeleteRequest => "snapshot-delete", result: SnapshotDeleteResult, response: SnapshotDeleteResponse }
