//! Wrapper types shared by several object families.

use crate::api::macros::zapi_list_wrapper;

zapi_list_wrapper! {
    /// Ordered list of aggregate names, as nested under volume identity
    /// and vserver records.
    pub struct AggrList => "aggr-list" {
        aggr_name: Vec<String> => "aggr-name"
    }
}
