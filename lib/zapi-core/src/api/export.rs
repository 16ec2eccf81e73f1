//! Export policy and export rule operations.

use crate::api::macros::{zapi_iter_op, zapi_list_wrapper, zapi_object, zapi_request, zapi_result};

zapi_iter_op! {
    /// Lists export rules, one page of `export-rule-info` records at a time.
    ExportRuleGetIter => "export-rule-get-iter",
    record: ExportRuleInfo { export_rule_info => "export-rule-info" }
}

zapi_object! {
    /// One rule of an export policy.
    pub struct ExportRuleInfo => "export-rule-info" {
        anonymous_user_id: String => "anonymous-user-id",
        client_match: String => "client-match",
        is_allow_dev_is_enabled: bool => "is-allow-dev-is-enabled",
        is_allow_set_uid_enabled: bool => "is-allow-set-uid-enabled",
        policy_name: String => "policy-name",
        protocol: AccessProtocolList => "protocol",
        ro_rule: SecurityFlavorList => "ro-rule",
        rule_index: i64 => "rule-index",
        rw_rule: SecurityFlavorList => "rw-rule",
        super_user_security: SecurityFlavorList => "super-user-security",
        vserver_name: String => "vserver-name",
    }
}

zapi_list_wrapper! {
    /// Ordered list of access protocols an export rule applies to.
    pub struct AccessProtocolList => "protocol" {
        access_protocol: Vec<String> => "access-protocol"
    }
}

zapi_list_wrapper! {
    /// Ordered list of security flavors; backs the `ro-rule`, `rw-rule`
    /// and `super-user-security` elements.
    pub struct SecurityFlavorList => "ro-rule" {
        security_flavor: Vec<String> => "security-flavor"
    }
}

zapi_object! {
    /// Creates an export policy.
    pub struct ExportPolicyCreateRequest => "export-policy-create" {
        policy_name: String => "policy-name",
        return_record: bool => "return-record",
    }
}

zapi_result! {
    /// `results` payload of `export-policy-create`.
    pub struct ExportPolicyCreateResult {}
}

zapi_request! { ExportPolicyCreateRequest => "export-policy-create", result: ExportPolicyCreateResult, response: ExportPolicyCreateResponse }

zapi_object! {
    /// Adds a rule to an export policy.
    pub struct ExportRuleCreateRequest => "export-rule-create" {
        anonymous_user_id: String => "anonymous-user-id",
        client_match: String => "client-match",
        policy_name: String => "policy-name",
        protocol: AccessProtocolList => "protocol",
        ro_rule: SecurityFlavorList => "ro-rule",
        rule_index: i64 => "rule-index",
        rw_rule: SecurityFlavorList => "rw-rule",
        super_user_security: SecurityFlavorList => "super-user-security",
    }
}

zapi_result! {
    /// `results` payload of `export-rule-create`.
    pub struct ExportRuleCreateResult {}
}

zapi_request! { ExportRuleCreateRequest => "export-rule-create", result: ExportRuleCreateResult, response: ExportRuleCreateResponse }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_wrappers_expose_values_and_set_values() {
        let mut flavors = SecurityFlavorList::new()
            .with_security_flavor(vec!["sys".to_string(), "krb5".to_string()]);

        assert_eq!(flavors.values(), flavors.security_flavor());

        flavors.set_values(vec!["none".to_string()]);
        assert_eq!(flavors.values().len(), 1);
        assert_eq!(flavors.values()[0], "none");
    }

    #[test]
    fn rule_with_shared_wrappers_round_trips() {
        let rule = ExportRuleCreateRequest::new()
            .with_policy_name("trident")
            .with_client_match("10.0.0.0/24")
            .with_rule_index(1_i64)
            .with_protocol(
                AccessProtocolList::new().with_access_protocol(vec!["nfs".to_string()]),
            )
            .with_ro_rule(SecurityFlavorList::new().with_security_flavor(vec!["sys".to_string()]))
            .with_rw_rule(SecurityFlavorList::new().with_security_flavor(vec!["sys".to_string()]));

        let xml = serde_xml_rs::to_string(&rule).expect("request should encode");

        assert!(xml.contains("<ro-rule><security-flavor>sys</security-flavor></ro-rule>"));
        assert!(xml.contains("<rw-rule><security-flavor>sys</security-flavor></rw-rule>"));

        let decoded: ExportRuleCreateRequest =
            serde_xml_rs::from_str(&xml).expect("request should decode");
        assert_eq!(decoded, rule);
    }
}
