use adminkit::rest::{build_router, RequestState};
use axum_test::TestServer;
use compliance::data;
use compliance::summary::{DashboardSummary, KindCount, RiskDistribution, TopPartner};
use compliance::types::{Partner, Risk, Severity};
use compliance::AppStores;
use http::StatusCode;
use serde_json::json;
use std::sync::Arc;

fn server() -> TestServer {
    let stores = AppStores::new();
    data::seed(&stores);
    let state = RequestState::new(Arc::new(stores.hub()));
    TestServer::new(build_router(state, None, None)).expect("Failed to start test server")
}

#[tokio::test]
async fn it_should_list_the_seeded_partners() {
    let server = server();
    let response = server.get("/partners").await;
    response.assert_status(StatusCode::OK);
    let partners: Vec<Partner> = response.json();
    assert_eq!(partners.len(), 3);
    assert_eq!(partners[0].name, "Global Fabrics Ltd.");
}

#[tokio::test]
async fn it_should_create_then_fetch_a_partner() {
    let server = server();
    let response = server
        .post("/partners")
        .json(&json!({
            "name": "Acme Corp",
            "country": "Vietnam",
            "industry": "Textiles",
            "complianceScore": 90,
            "status": "active",
            "riskLevel": "low",
            "contactEmail": "hello@acme.example"
        }))
        .await;
    response.assert_status(StatusCode::OK);
    let created: Partner = response.json();
    assert!(!created.id.is_empty());
    assert_eq!(created.created_at, created.updated_at);

    let fetched: Partner = server.get(&format!("/partners/{}", created.id)).await.json();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn it_should_reject_an_invalid_partner_with_400() {
    let server = server();
    let response = server
        .post("/partners")
        .json(&json!({ "country": "Vietnam", "complianceScore": 120 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.text();
    assert!(body.contains("Name is required"));
    assert!(body.contains("Compliance Score must be at most 100"));
}

#[tokio::test]
async fn it_should_accept_widget_shaped_values_on_create() {
    let server = server();
    let response = server
        .post("/risks")
        .json(&json!({
            "partnerId": "3",
            "country": "Bangladesh",
            "riskType": "Wastewater Discharge",
            "severity": "medium",
            "source": "Site Inspection",
            "detectedDate": "2025-03-20",
            "status": "open"
        }))
        .await;
    response.assert_status(StatusCode::OK);
    let created: Risk = response.json();
    assert_eq!(created.detected_date.to_rfc3339(), "2025-03-20T00:00:00+00:00");
    assert_eq!(created.partner_name, "Dyeing Factory");

    let response = server
        .post("/partners")
        .json(&json!({
            "name": "String Score Mill",
            "country": "Laos",
            "industry": "Textiles",
            "complianceScore": "88",
            "status": "pending",
            "riskLevel": "medium"
        }))
        .await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Partner>().compliance_score, 88);
}

#[tokio::test]
async fn it_should_answer_404_for_a_missing_record() {
    let server = server();
    server
        .get("/partners/no-such-id")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .patch("/risks/no-such-id")
        .json(&json!({ "severity": "low" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_patch_a_risk_and_refresh_its_partner_snapshot() {
    let server = server();
    let response = server
        .patch("/risks/risk-1")
        .json(&json!({ "severity": "low", "partnerId": "2" }))
        .await;
    response.assert_status(StatusCode::OK);
    let updated: Risk = response.json();
    assert_eq!(updated.severity, Severity::Low);
    assert_eq!(updated.partner_name, "Raw Cotton Provider");
    assert_eq!(updated.id, "risk-1");
}

#[tokio::test]
async fn it_should_report_whether_a_delete_removed_anything() {
    let server = server();
    let hit = server.delete("/actions/action-1").await;
    hit.assert_status(StatusCode::OK);
    assert_eq!(hit.json::<serde_json::Value>()["deleted"], json!(true));

    let miss = server.delete("/actions/action-1").await;
    miss.assert_status(StatusCode::OK);
    assert_eq!(miss.json::<serde_json::Value>()["deleted"], json!(false));
}

#[tokio::test]
async fn it_should_aggregate_the_dashboard_summary() {
    let server = server();
    let summary: DashboardSummary = server.get("/dashboard/summary").await.json();
    assert_eq!(summary.partner_count, 3);
    // mean of 82, 65 and 78
    assert_eq!(summary.compliance_rate, 75);
    assert_eq!(summary.open_risks, 1);
    assert_eq!(summary.pending_actions, 2);
}

#[tokio::test]
async fn it_should_group_risks_by_type_and_rank_partners_by_score() {
    let server = server();
    let distribution: Vec<RiskDistribution> =
        server.get("/dashboard/risk-distribution").await.json();
    assert_eq!(distribution.len(), 2);
    assert!(distribution
        .iter()
        .any(|bucket| bucket.risk_type == "Child Labor" && bucket.count == 1));

    let top: Vec<TopPartner> = server.get("/dashboard/top-partners?limit=2").await.json();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].name, "Global Fabrics Ltd.");
    assert_eq!(top[1].compliance_score, 78);
}

#[tokio::test]
async fn it_should_count_records_for_every_kind_and_reject_strangers() {
    let server = server();
    let counts: Vec<KindCount> = server.get("/dashboard/record-counts").await.json();
    assert_eq!(counts.len(), 6);
    assert!(counts
        .iter()
        .any(|entry| entry.kind == "partners" && entry.count == 3));
    assert!(counts
        .iter()
        .any(|entry| entry.kind == "sdgGoals" && entry.count == 3));

    let single: KindCount = server.get("/dashboard/record-counts/risks").await.json();
    assert_eq!(single.count, 2);

    server
        .get("/dashboard/record-counts/starships")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn it_should_list_risks_and_actions_scoped_to_a_partner() {
    let server = server();
    let risks: Vec<Risk> = server.get("/partners/1/risks").await.json();
    assert_eq!(risks.len(), 1);
    assert_eq!(risks[0].id, "risk-1");

    let actions: Vec<serde_json::Value> = server.get("/partners/2/actions").await.json();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0]["id"], json!("action-2"));

    let none: Vec<Risk> = server.get("/partners/3/risks").await.json();
    assert!(none.is_empty());
}

#[tokio::test]
async fn it_should_filter_open_risks_and_unfinished_actions() {
    let server = server();
    let open: Vec<Risk> = server.get("/risks/open").await.json();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].id, "risk-1");

    let pending: Vec<serde_json::Value> = server.get("/actions/pending").await.json();
    // action-1 is pending, action-2 in progress
    assert_eq!(pending.len(), 2);
}

#[tokio::test]
async fn it_should_serve_the_openapi_document() {
    let server = server();
    let response = server.get("/apidoc/openapi.json").await;
    response.assert_status(StatusCode::OK);
    let doc: serde_json::Value = response.json();
    assert!(doc["paths"]["/partners"].is_object());
    assert!(doc["paths"]["/sdg-goals/{id}"].is_object());
    assert!(doc["paths"]["/dashboard/summary"].is_object());
}
