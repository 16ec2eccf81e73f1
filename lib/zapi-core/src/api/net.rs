//! Network interface operations.

use crate::api::macros::{zapi_iter_op, zapi_list_wrapper, zapi_object};

zapi_iter_op! {
    /// Lists logical network interfaces (LIFs).
    NetInterfaceGetIter => "net-interface-get-iter",
    record: NetInterfaceInfo { net_interface_info => "net-interface-info" }
}

zapi_object! {
    /// One logical network interface.
    pub struct NetInterfaceInfo => "net-interface-info" {
        address: String => "address",
        address_family: String => "address-family",
        administrative_status: String => "administrative-status",
        current_node: String => "current-node",
        current_port: String => "current-port",
        data_protocols: DataProtocolList => "data-protocols",
        home_node: String => "home-node",
        home_port: String => "home-port",
        interface_name: String => "interface-name",
        ipspace: String => "ipspace",
        is_auto_revert: bool => "is-auto-revert",
        is_home: bool => "is-home",
        netmask: String => "netmask",
        netmask_length: i64 => "netmask-length",
        operational_status: String => "operational-status",
        role: String => "role",
        vserver: String => "vserver",
    }
}

zapi_list_wrapper! {
    /// Ordered list of data protocols served by an interface.
    pub struct DataProtocolList => "data-protocols" {
        data_protocol: Vec<String> => "data-protocol"
    }
}
