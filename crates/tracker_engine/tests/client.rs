use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use tracker_engine::{
    ApiError, ClientSettings, JobStatus, JobsApi, ListJobsParams, ReqwestJobsApi, Stats,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> ReqwestJobsApi {
    ReqwestJobsApi::new(&server.uri(), &ClientSettings::default()).expect("client")
}

fn params(search: &str) -> ListJobsParams {
    ListJobsParams {
        search: search.to_string(),
        source: "all".to_string(),
        status: "all".to_string(),
        page: 1,
        per_page: 50,
    }
}

#[tokio::test]
async fn stats_are_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "stats": {"total": 12, "applied": 3, "pending": 8, "failed": 1}
        })))
        .mount(&server)
        .await;

    let stats = api_for(&server).stats().await.expect("stats");
    assert_eq!(
        stats,
        Stats {
            total: 12,
            applied: 3,
            pending: 8,
            failed: 1,
        }
    );
}

#[tokio::test]
async fn sources_are_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "sources": ["Big Tech", "Startups"]
        })))
        .mount(&server)
        .await;

    let sources = api_for(&server).sources().await.expect("sources");
    assert_eq!(sources, vec!["Big Tech".to_string(), "Startups".to_string()]);
}

#[tokio::test]
async fn jobs_request_carries_all_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .and(query_param("search", "rust dev"))
        .and(query_param("source", "all"))
        .and(query_param("status", "all"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "jobs": [{
                "id": 7,
                "job_id": "acme-7",
                "title": "Rust Developer",
                "company": "Acme",
                "location": null,
                "url": "https://acme.example.com/7",
                "source_category": "Startups",
                "posted_date": "2026-10-01",
                "scraped_date": "2026-10-16T08:00:00",
                "status": "pending",
                "is_new": true
            }],
            "total": 1,
            "page": 1,
            "per_page": 50,
            "total_pages": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = api_for(&server)
        .list_jobs(&params("rust dev"))
        .await
        .expect("jobs");
    assert_eq!(page.total, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.jobs.len(), 1);
    let job = &page.jobs[0];
    assert_eq!(job.id, 7);
    assert_eq!(job.location, None);
    assert!(job.is_new);
    assert_eq!(job.posted_date.as_deref(), Some("2026-10-01"));
}

#[tokio::test]
async fn jobs_query_string_is_sent_in_fixed_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "jobs": [],
            "total": 0,
            "page": 1,
            "per_page": 50,
            "total_pages": 0
        })))
        .mount(&server)
        .await;

    api_for(&server)
        .list_jobs(&params("engineer"))
        .await
        .expect("jobs");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.query(),
        Some("search=engineer&source=all&status=all&page=1&per_page=50")
    );
}

#[tokio::test]
async fn status_update_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/jobs/42/status"))
        .and(body_json(json!({"status": "applied"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "message": "Status updated"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    api_for(&server)
        .update_status(42, JobStatus::Applied)
        .await
        .expect("status update");
}

#[tokio::test]
async fn unsuccessful_envelope_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"success": false, "error": "database is locked"})),
        )
        .mount(&server)
        .await;

    let err = api_for(&server).stats().await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Unsuccessful {
            status: 500,
            message: "database is locked".to_string(),
        }
    );
}

#[tokio::test]
async fn non_json_error_maps_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sources"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = api_for(&server).sources().await.unwrap_err();
    assert_eq!(err, ApiError::HttpStatus(502));
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "jobs": "not a list"
        })))
        .mount(&server)
        .await;

    let err = api_for(&server).list_jobs(&params("")).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn base_url_path_prefix_is_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracker/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "stats": {"total": 0, "applied": 0, "pending": 0, "failed": 0}
        })))
        .mount(&server)
        .await;

    let api = ReqwestJobsApi::new(
        &format!("{}/tracker", server.uri()),
        &ClientSettings::default(),
    )
    .expect("client");
    assert!(api.base_url().path().ends_with("/tracker/"));
    assert_eq!(api.stats().await.expect("stats"), Stats::default());
}

#[tokio::test]
async fn request_timeout_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"success": true})),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..ClientSettings::default()
    };
    let api = ReqwestJobsApi::new(&server.uri(), &settings).expect("client");
    let err = api.stats().await.unwrap_err();
    assert!(matches!(err, ApiError::Timeout(_)), "got {err:?}");
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = ReqwestJobsApi::new("not a url", &ClientSettings::default()).unwrap_err();
    assert!(matches!(err, ApiError::InvalidUrl(_)));
}
