//! Volume operations and attribute records.

use super::common::AggrList;
use crate::api::macros::{zapi_iter_op, zapi_object, zapi_request, zapi_result};

zapi_iter_op! {
    /// Lists the volumes visible to the current management scope, one
    /// page of `volume-attributes` records at a time.
    VolumeGetIter => "volume-get-iter",
    record: VolumeAttributes { volume_attributes => "volume-attributes" }
}

zapi_object! {
    /// Attribute set of one volume, grouped into the nested blocks the
    /// schema defines.
    pub struct VolumeAttributes => "volume-attributes" {
        encrypt: bool => "encrypt",
        volume_export_attributes: VolumeExportAttributes => "volume-export-attributes",
        volume_id_attributes: VolumeIdAttributes => "volume-id-attributes",
        volume_snapshot_attributes: VolumeSnapshotAttributes => "volume-snapshot-attributes",
        volume_space_attributes: VolumeSpaceAttributes => "volume-space-attributes",
        volume_state_attributes: VolumeStateAttributes => "volume-state-attributes",
    }
}

zapi_object! {
    /// Export configuration of a volume.
    pub struct VolumeExportAttributes => "volume-export-attributes" {
        policy: String => "policy",
    }
}

zapi_object! {
    /// Identity block of a volume.
    pub struct VolumeIdAttributes => "volume-id-attributes" {
        aggr_list: AggrList => "aggr-list",
        comment: String => "comment",
        containing_aggregate_name: String => "containing-aggregate-name",
        creation_time: i64 => "creation-time",
        junction_path: String => "junction-path",
        name: String => "name",
        owning_vserver_name: String => "owning-vserver-name",
        style_extended: String => "style-extended",
        uuid: String => "uuid",
    }
}

zapi_object! {
    /// Snapshot policy block of a volume.
    pub struct VolumeSnapshotAttributes => "volume-snapshot-attributes" {
        auto_snapshots_enabled: bool => "auto-snapshots-enabled",
        snapdir_access_enabled: bool => "snapdir-access-enabled",
        snapshot_policy: String => "snapshot-policy",
    }
}

zapi_object! {
    /// Capacity block of a volume.
    pub struct VolumeSpaceAttributes => "volume-space-attributes" {
        percentage_snapshot_reserve: i64 => "percentage-snapshot-reserve",
        size: i64 => "size",
        size_available: i64 => "size-available",
        size_total: i64 => "size-total",
        size_used: i64 => "size-used",
        space_guarantee: String => "space-guarantee",
    }
}

zapi_object! {
    /// State block of a volume.
    pub struct VolumeStateAttributes => "volume-state-attributes" {
        is_flexgroup: bool => "is-flexgroup",
        is_node_root: bool => "is-node-root",
        is_vserver_root: bool => "is-vserver-root",
        state: String => "state",
    }
}

zapi_object! {
    /// Creates a flexible volume synchronously.
    pub struct VolumeCreateRequest => "volume-create" {
        containing_aggr_name: String => "containing-aggr-name",
        efficiency_policy: String => "efficiency-policy",
        encrypt: bool => "encrypt",
        export_policy: String => "export-policy",
        junction_path: String => "junction-path",
        language_code: String => "language-code",
        percentage_snapshot_reserve: i64 => "percentage-snapshot-reserve",
        size: String => "size",
        snapshot_policy: String => "snapshot-policy",
        space_reserve: String => "space-reserve",
        unix_permissions: String => "unix-permissions",
        volume: String => "volume",
        volume_security_style: String => "volume-security-style",
        volume_type: String => "volume-type",
    }
}

zapi_result! {
    /// `results` payload of `volume-create`; carries only the status triple.
    pub struct VolumeCreateResult {}
}

zapi_request! { VolumeCreateRequest => "volume-create", result: VolumeCreateResult, response: VolumeCreateResponse }

zapi_object! {
    /// Creates a volume through the asynchronous job path, returning a
    /// job handle instead of blocking until completion.
    pub struct VolumeCreateAsyncRequest => "volume-create-async" {
        containing_aggr_name: String => "containing-aggr-name",
        encrypt: bool => "encrypt",
        export_policy: String => "export-policy",
        junction_path: String => "junction-path",
        max_dir_size: i64 => "max-dir-size",
        size: i64 => "size",
        snapshot_policy: String => "snapshot-policy",
        space_reserve: String => "space-reserve",
        unix_permissions: String => "unix-permissions",
        volume_name: String => "volume-name",
    }
}

zapi_result! {
    /// Async-job acknowledgement: job id plus a coarse result status.
    pub struct VolumeCreateAsyncResult {
        result_error_code: i64 => "result-error-code",
        result_error_message: String => "result-error-message",
        result_jobid: i64 => "result-jobid",
        result_status: String => "result-status",
    }
}

zapi_request! { VolumeCreateAsyncRequest => "volume-create-async", result: VolumeCreateAsyncResult, response: VolumeCreateAsyncResponse }

zapi_object! {
    /// Reads, and optionally changes, the size of a volume.
    pub struct VolumeSizeRequest => "volume-size" {
        new_size: String => "new-size",
        volume: String => "volume",
    }
}

zapi_result! {
    /// `results` payload of `volume-size`.
    pub struct VolumeSizeResult {
        is_fixed_size_flex_volume: bool => "is-fixed-size-flex-volume",
        volume_size: String => "volume-size",
    }
}

zapi_request! { VolumeSizeRequest => "volume-size", result: VolumeSizeResult, response: VolumeSizeResponse }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_chain_and_getters_observe_the_stored_value() {
        let request = VolumeCreateRequest::new()
            .with_volume("vol1")
            .with_containing_aggr_name("aggr1")
            .with_size("1g")
            .with_encrypt(true);

        assert_eq!(request.volume(), "vol1");
        assert_eq!(request.containing_aggr_name(), "aggr1");
        assert_eq!(request.size(), "1g");
        assert!(request.encrypt());
    }

    #[test]
    fn setters_overwrite_unconditionally() {
        let request = VolumeSizeRequest::new()
            .with_volume("vol1")
            .with_volume("vol2");

        assert_eq!(request.volume(), "vol2");
    }

    #[test]
    #[should_panic(expected = "accessed before it was set")]
    fn getter_panics_on_unset_field() {
        let request = VolumeCreateRequest::new();
        let _ = request.volume();
    }

    #[test]
    fn unset_fields_are_omitted_from_the_wire() {
        let request = VolumeCreateRequest::new().with_volume("vol1");

        let xml = serde_xml_rs::to_string(&request).expect("request should encode");

        assert!(xml.contains("<volume>vol1</volume>"));
        assert!(!xml.contains("size"));
        assert!(!xml.contains("junction-path"));
    }

    #[test]
    fn populated_request_round_trips() {
        let request = VolumeGetIterRequest::new()
            .with_max_records(100)
            .with_query(VolumeGetIterQuery::new().with_volume_attributes(
                VolumeAttributes::new().with_volume_id_attributes(
                    VolumeIdAttributes::new()
                        .with_name("vol1")
                        .with_owning_vserver_name("svm1"),
                ),
            ));

        let xml = serde_xml_rs::to_string(&request).expect("request should encode");
        let decoded: VolumeGetIterRequest =
            serde_xml_rs::from_str(&xml).expect("request should decode");

        assert_eq!(decoded, request);
    }

    #[test]
    fn domain_record_round_trips_with_nested_wrappers() {
        let attributes = VolumeAttributes::new()
            .with_volume_id_attributes(
                VolumeIdAttributes::new()
                    .with_name("vol1")
                    .with_aggr_list(
                        AggrList::new().with_aggr_name(vec!["aggr1".into(), "aggr2".into()]),
                    )
                    .with_creation_time(1_550_000_000_i64),
            )
            .with_volume_space_attributes(
                VolumeSpaceAttributes::new()
                    .with_size(1_073_741_824_i64)
                    .with_space_guarantee("none"),
            );

        let xml = serde_xml_rs::to_string(&attributes).expect("record should encode");
        let decoded: VolumeAttributes =
            serde_xml_rs::from_str(&xml).expect("record should decode");

        assert_eq!(decoded, attributes);
        assert_eq!(decoded.volume_id_attributes().aggr_list().values().len(), 2);
    }
}
