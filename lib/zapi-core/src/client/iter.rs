use tracing::debug;

use crate::api::{ZapiIterRequest, ZapiIterable, ZapiResponse};
use crate::client::{ZapiClient, ZapiError};

/// Drives the paginated fetch protocol of a `*-get-iter` operation.
///
/// Issues single-page requests strictly in sequence, following the
/// opaque continuation tag, until the filer reports the end of the
/// result set; the pages are merged into one combined response.
///
/// Termination is governed by two independent checks, evaluated on every
/// page: an absent `next-tag` ends the fetch, and so does an absent or
/// zero `num-records`, even when a tag is still present. The combined
/// response adopts the status triple of the page that ended the fetch,
/// and its `num-records` is recomputed from the accumulated sequence
/// (a single page's own count may be smaller than the running total).
///
/// A transport error on any page aborts the fetch; accumulated pages are
/// discarded.
pub(crate) async fn fetch_all<R>(
    client: &ZapiClient,
    mut request: R,
) -> Result<ZapiResponse<R::Result>, ZapiError>
where
    R: ZapiIterRequest,
    R::Result: ZapiIterable,
{
    let mut combined = ZapiResponse::<R::Result>::default();
    // The combined list is present from the start, even when no page
    // carries records.
    combined.results.extend_page(Vec::new());

    let mut pages = 0_usize;
    loop {
        if let Some(limit) = client.page_limit() {
            if pages >= limit {
                return Err(ZapiError::PageLimitExceeded { limit });
            }
        }

        let mut page = client.execute(&request).await?;
        pages += 1;

        let mut done = false;
        match page.results.continuation() {
            Some(tag) => request.advance(tag),
            None => done = true,
        }
        match page.results.page_records() {
            None | Some(0) => done = true,
            Some(_) => {}
        }

        if let Some(records) = page.results.take_page() {
            combined.results.extend_page(records);
        }

        if done {
            combined.results.adopt_status(&page.results);
            let total = combined.results.accumulated();
            combined.results.set_record_count(total);
            debug!(operation = R::NAME, pages, records = total, "combined paginated response");
            return Ok(combined);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::api::{SnapshotGetIterRequest, SnapshotGetIterResponse};
    use crate::client::envelope::{ZAPI_VERSION, ZAPI_XMLNS};
    use crate::client::Transport;

    /// Transport double that replays scripted responses and records the
    /// request documents it was given.
    #[derive(Debug, Default)]
    struct ScriptedTransport {
        responses: Mutex<VecDeque<Result<String, ZapiError>>>,
        requests: Mutex<Vec<String>>,
    }

    impl ScriptedTransport {
        fn scripted(responses: Vec<Result<String, ZapiError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into_iter().collect()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().expect("requests lock").clone()
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn round_trip(&self, document: &str) -> Result<String, ZapiError> {
            self.requests
                .lock()
                .expect("requests lock")
                .push(document.to_owned());
            self.responses
                .lock()
                .expect("responses lock")
                .pop_front()
                .unwrap_or_else(|| {
                    Err(ZapiError::UnexpectedStatusCode {
                        status_code: 500,
                        body: "transport script exhausted".to_owned(),
                    })
                })
        }
    }

    fn client_with(transport: &Arc<ScriptedTransport>) -> ZapiClient {
        ZapiClient::builder()
            .with_transport(Arc::clone(transport) as Arc<dyn Transport>)
            .build()
            .expect("client should build")
    }

    /// Builds one page response listing snapshots by name.
    fn page(
        names: Option<&[&str]>,
        next_tag: Option<&str>,
        num_records: Option<i64>,
        reason: &str,
    ) -> Result<String, ZapiError> {
        let mut results = format!(r#"<results status="passed" reason="{reason}" errno="0">"#);
        if let Some(names) = names {
            results.push_str("<attributes-list>");
            for name in names {
                results.push_str(&format!(
                    "<snapshot-info><name>{name}</name></snapshot-info>"
                ));
            }
            results.push_str("</attributes-list>");
        }
        if let Some(tag) = next_tag {
            results.push_str(&format!("<next-tag>{tag}</next-tag>"));
        }
        if let Some(count) = num_records {
            results.push_str(&format!("<num-records>{count}</num-records>"));
        }
        results.push_str("</results>");
        Ok(format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><netapp version="{ZAPI_VERSION}" xmlns="{ZAPI_XMLNS}">{results}</netapp>"#
        ))
    }

    fn names(response: &SnapshotGetIterResponse) -> Vec<String> {
        response
            .results
            .attributes_list()
            .values()
            .iter()
            .map(|info| info.name())
            .collect()
    }

    #[tokio::test]
    async fn tag_exhaustion_concatenates_every_page() {
        let transport = ScriptedTransport::scripted(vec![
            page(Some(&["a", "b"]), Some("t1"), Some(2), ""),
            page(Some(&["c"]), Some("t2"), Some(1), ""),
            page(Some(&["d"]), None, Some(1), "end of records"),
        ]);
        let client = client_with(&transport);

        let response = fetch_all(&client, SnapshotGetIterRequest::new().with_max_records(2_i64))
            .await
            .expect("fetch should succeed");

        assert_eq!(transport.requests().len(), 3);
        assert_eq!(names(&response), ["a", "b", "c", "d"]);
        assert_eq!(response.results.num_records(), 4);
        assert_eq!(response.results.status(), "passed");
        assert_eq!(response.results.reason(), "end of records");
    }

    #[tokio::test]
    async fn zero_records_terminates_even_with_a_tag_present() {
        let transport =
            ScriptedTransport::scripted(vec![page(Some(&[]), Some("t1"), Some(0), "")]);
        let client = client_with(&transport);

        let response = fetch_all(&client, SnapshotGetIterRequest::new())
            .await
            .expect("fetch should succeed");

        assert_eq!(transport.requests().len(), 1);
        assert_eq!(response.results.num_records(), 0);
    }

    #[tokio::test]
    async fn absent_record_count_terminates() {
        let transport = ScriptedTransport::scripted(vec![page(Some(&["a"]), Some("t1"), None, "")]);
        let client = client_with(&transport);

        let response = fetch_all(&client, SnapshotGetIterRequest::new())
            .await
            .expect("fetch should succeed");

        assert_eq!(transport.requests().len(), 1);
        assert_eq!(names(&response), ["a"]);
        assert_eq!(response.results.num_records(), 1);
    }

    #[tokio::test]
    async fn transport_error_discards_accumulated_pages() {
        let transport = ScriptedTransport::scripted(vec![
            page(Some(&["a", "b"]), Some("t1"), Some(2), ""),
            Err(ZapiError::UnexpectedStatusCode {
                status_code: 502,
                body: "bad gateway".to_owned(),
            }),
        ]);
        let client = client_with(&transport);

        let error = fetch_all(&client, SnapshotGetIterRequest::new())
            .await
            .expect_err("fetch should fail");

        assert_eq!(transport.requests().len(), 2);
        assert!(matches!(
            error,
            ZapiError::UnexpectedStatusCode { status_code: 502, .. }
        ));
    }

    #[tokio::test]
    async fn ordering_and_duplicates_are_preserved() {
        let transport = ScriptedTransport::scripted(vec![
            page(Some(&["a", "b"]), Some("t1"), Some(2), ""),
            page(Some(&["a"]), Some("t2"), Some(1), ""),
            page(Some(&[]), None, Some(0), ""),
        ]);
        let client = client_with(&transport);

        let response = fetch_all(&client, SnapshotGetIterRequest::new())
            .await
            .expect("fetch should succeed");

        assert_eq!(names(&response), ["a", "b", "a"]);
        assert_eq!(response.results.num_records(), 3);
    }

    #[tokio::test]
    async fn each_follow_up_request_carries_the_previous_tag() {
        let transport = ScriptedTransport::scripted(vec![
            page(Some(&["a"]), Some("t1"), Some(1), ""),
            page(Some(&["b"]), Some("t2"), Some(1), ""),
            page(None, None, Some(0), ""),
        ]);
        let client = client_with(&transport);

        fetch_all(&client, SnapshotGetIterRequest::new())
            .await
            .expect("fetch should succeed");

        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        assert!(!requests[0].contains("<tag>"));
        assert!(requests[1].contains("<tag>t1</tag>"));
        assert!(requests[2].contains("<tag>t2</tag>"));
    }

    #[tokio::test]
    async fn pages_without_a_record_list_contribute_nothing() {
        let transport = ScriptedTransport::scripted(vec![
            page(None, Some("t1"), Some(3), ""),
            page(None, None, Some(0), ""),
        ]);
        let client = client_with(&transport);

        let response = fetch_all(&client, SnapshotGetIterRequest::new())
            .await
            .expect("fetch should succeed");

        assert_eq!(transport.requests().len(), 2);
        assert!(names(&response).is_empty());
        assert_eq!(response.results.num_records(), 0);
    }

    #[tokio::test]
    async fn a_cursor_loop_trips_the_page_limit() {
        let looping: Vec<_> = (0..5)
            .map(|_| page(Some(&["a"]), Some("same-tag"), Some(1), ""))
            .collect();
        let transport = ScriptedTransport::scripted(looping);
        let client = ZapiClient::builder()
            .with_transport(Arc::clone(&transport) as Arc<dyn Transport>)
            .with_page_limit(3)
            .build()
            .expect("client should build");

        let error = fetch_all(&client, SnapshotGetIterRequest::new())
            .await
            .expect_err("fetch should fail");

        assert_eq!(transport.requests().len(), 3);
        assert!(matches!(error, ZapiError::PageLimitExceeded { limit: 3 }));
    }
}
