//! System information operations.

use crate::api::macros::{zapi_object, zapi_request, zapi_result};

zapi_object! {
    /// Reads the software version of the system.
    pub struct SystemGetVersionRequest => "system-get-version" {}
}

zapi_result! {
    /// `results` payload of `system-get-version`.
    pub struct SystemGetVersionResult {
        build_timestamp: i64 => "build-timestamp",
        is_clustered: bool => "is-clustered",
        version: String => "version",
    }
}

zapi_request! { SystemGetVersionRequest => "system-get-version", result: SystemGetVersionResult, response: SystemGetVersionResponse }

zapi_object! {
    /// Reads the highest ONTAPI version the system supports.
    pub struct SystemGetOntapiVersionRequest => "system-get-ontapi-version" {}
}

zapi_result! {
    /// `results` payload of `system-get-ontapi-version`.
    pub struct SystemGetOntapiVersionResult {
        major_version: i64 => "major-version",
        minor_version: i64 => "minor-version",
    }
}

zapi_request! { SystemGetOntapiVersionRequest => "system-get-ontapi-version", result: SystemGetOntapiVersionResult, response: SystemGetOntapiVersionResponse }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ZapiResult;

    #[test]
    fn version_results_decode_from_wire_form() {
        let xml = r#"<results status="passed"><build-timestamp>1541359362</build-timestamp><is-clustered>true</is-clustered><version>NetApp Release 9.3P8</version></results>"#;

        let result: SystemGetVersionResult =
            serde_xml_rs::from_str(xml).expect("result should decode");

        assert_eq!(result.raw_status(), "passed");
        assert_eq!(result.version(), "NetApp Release 9.3P8");
        assert!(result.is_clustered());
        assert_eq!(result.build_timestamp(), 1_541_359_362);
    }
}
