//! iSCSI service and interface operations.

use crate::api::macros::{zapi_iter_op, zapi_object};

zapi_iter_op! {
    /// Lists the iSCSI data interfaces of the vserver.
    IscsiInterfaceGetIter => "iscsi-interface-get-iter",
    record: IscsiInterfaceListEntryInfo { iscsi_interface_list_entry_info => "iscsi-interface-list-entry-info" }
}

zapi_object! {
    /// One network interface with iSCSI enabled.
    pub struct IscsiInterfaceListEntryInfo => "iscsi-interface-list-entry-info" {
        current_node: String => "current-node",
        current_port: String => "current-port",
        interface_name: String => "interface-name",
        ip_address: String => "ip-address",
        ip_port: i64 => "ip-port",
        is_interface_enabled: bool => "is-interface-enabled",
        relative_port_id: i64 => "relative-port-id",
        tpgroup_name: String => "tpgroup-name",
        tpgroup_tag: i64 => "tpgroup-tag",
        vserver: String => "vserver",
    }
}

zapi_iter_op! {
    /// Lists the iSCSI services of the vserver.
    IscsiServiceGetIter => "iscsi-service-get-iter",
    record: IscsiServiceInfo { iscsi_service_info => "iscsi-service-info" }
}

zapi_object! {
    /// iSCSI service configuration of one vserver.
    pub struct IscsiServiceInfo => "iscsi-service-info" {
        alias_name: String => "alias-name",
        is_available: bool => "is-available",
        login_timeout: i64 => "login-timeout",
        max_cmds_per_session: i64 => "max-cmds-per-session",
        max_conn_per_session: i64 => "max-conn-per-session",
        node_name: String => "node-name",
        retain_timeout: i64 => "retain-timeout",
        tcp_window_size: i64 => "tcp-window-size",
        vserver: String => "vserver",
    }
}
