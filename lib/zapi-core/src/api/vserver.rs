//! Vserver (storage virtual machine) operations and records.

use super::common::AggrList;
use crate::api::macros::{zapi_iter_op, zapi_list_wrapper, zapi_object};

zapi_iter_op! {
    /// Lists the storage virtual machines of the cluster.
    VserverGetIter => "vserver-get-iter",
    record: VserverInfo { vserver_info => "vserver-info" }
}

zapi_object! {
    /// One storage virtual machine.
    pub struct VserverInfo => "vserver-info" {
        aggr_list: AggrList => "aggr-list",
        allowed_protocols: ProtocolList => "allowed-protocols",
        comment: String => "comment",
        disallowed_protocols: ProtocolList => "disallowed-protocols",
        ipspace: String => "ipspace",
        language: String => "language",
        operational_state: String => "operational-state",
        root_volume: String => "root-volume",
        root_volume_aggregate: String => "root-volume-aggregate",
        root_volume_security_style: String => "root-volume-security-style",
        snapshot_policy: String => "snapshot-policy",
        state: String => "state",
        uuid: String => "uuid",
        vserver_name: String => "vserver-name",
        vserver_subtype: String => "vserver-subtype",
        vserver_type: String => "vserver-type",
    }
}

zapi_list_wrapper! {
    /// Ordered list of access protocols; backs both the allowed and the
    /// disallowed protocol elements.
    pub struct ProtocolList => "allowed-protocols" {
        protocol: Vec<String> => "protocol"
    }
}
