//! End-to-end coverage: real HTTP transport against the mock filer.

use crate::api::{
    SnapshotCreateRequest, VolumeGetIterRequest, ZapiResult,
};
use crate::client::ZapiError;
use crate::test_server::MockFiler;

#[tokio::test]
async fn volume_get_iter_combines_pages_over_http() {
    let filer = MockFiler::new()
        .with_results(
            r#"<results status="passed"><attributes-list><volume-attributes><volume-id-attributes><name>vol0</name><owning-vserver-name>svm1</owning-vserver-name></volume-id-attributes></volume-attributes></attributes-list><next-tag>page-2</next-tag><num-records>1</num-records></results>"#,
        )
        .with_results(
            r#"<results status="passed"><attributes-list><volume-attributes><volume-id-attributes><name>vol1</name><owning-vserver-name>svm1</owning-vserver-name></volume-id-attributes></volume-attributes></attributes-list><num-records>1</num-records></results>"#,
        )
        .start()
        .await
        .expect("mock filer should start");
    let client = filer
        .client_builder()
        .build()
        .expect("client should build");

    let response = VolumeGetIterRequest::new()
        .with_max_records(1_i64)
        .execute(&client)
        .await
        .expect("fetch should succeed");

    assert_eq!(response.results.num_records(), 2);
    let list = response.results.attributes_list();
    let names: Vec<String> = list
        .values()
        .iter()
        .map(|volume| volume.volume_id_attributes().name())
        .collect();
    assert_eq!(names, ["vol0", "vol1"]);

    let requests = filer.requests().await;
    assert_eq!(requests.len(), 2);
    assert!(requests[0].contains("<volume-get-iter>"));
    assert!(requests[0].contains("<max-records>1</max-records>"));
    assert!(!requests[0].contains("<tag>"));
    assert!(requests[1].contains("<tag>page-2</tag>"));
}

#[tokio::test]
async fn snapshot_create_round_trips_over_http() {
    let filer = MockFiler::new()
        .with_results(r#"<results status="passed"></results>"#)
        .start()
        .await
        .expect("mock filer should start");
    let client = filer
        .client_builder()
        .build()
        .expect("client should build");

    let response = SnapshotCreateRequest::new()
        .with_volume("vol1")
        .with_snapshot("snap1")
        .execute(&client)
        .await
        .expect("request should succeed");

    assert!(response.results.zapi_status().is_passed());

    let requests = filer.requests().await;
    assert_eq!(requests.len(), 1);
    assert!(requests[0].contains("<snapshot-create>"));
    assert!(requests[0].contains("<volume>vol1</volume>"));
    assert!(requests[0].contains("<snapshot>snap1</snapshot>"));
}

#[tokio::test]
async fn tunneled_requests_carry_the_vfiler_attribute_on_the_wire() {
    let filer = MockFiler::new()
        .with_results(r#"<results status="passed"></results>"#)
        .start()
        .await
        .expect("mock filer should start");
    let client = filer
        .client_builder()
        .with_vfiler("svm1")
        .build()
        .expect("client should build");

    SnapshotCreateRequest::new()
        .with_volume("vol1")
        .execute(&client)
        .await
        .expect("request should succeed");

    let requests = filer.requests().await;
    assert!(requests[0].contains(r#"vfiler="svm1""#));
}

#[tokio::test]
async fn rejected_credentials_surface_as_unauthorized() {
    let filer = MockFiler::new()
        .with_unauthorized()
        .start()
        .await
        .expect("mock filer should start");
    let client = filer
        .client_builder()
        .build()
        .expect("client should build");

    let error = SnapshotCreateRequest::new()
        .with_volume("vol1")
        .execute(&client)
        .await
        .expect_err("request should fail");

    assert!(matches!(error, ZapiError::Unauthorized));
}

#[tokio::test]
async fn remote_failures_decode_as_ok_responses() {
    let filer = MockFiler::new()
        .with_results(
            r#"<results status="failed" reason="Volume not online" errno="13042"></results>"#,
        )
        .start()
        .await
        .expect("mock filer should start");
    let client = filer
        .client_builder()
        .build()
        .expect("client should build");

    let response = SnapshotCreateRequest::new()
        .with_volume("vol1")
        .execute(&client)
        .await
        .expect("a remote failure is still a decoded response");

    let status = response.results.zapi_status();
    assert!(!status.is_passed());
    assert_eq!(status.reason(), "Volume not online");
    assert_eq!(status.errno(), "13042");
}
