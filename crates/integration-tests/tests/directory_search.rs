//! Integration tests for directory search on the CRM page and JSON API.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use reqwest::StatusCode;
use serde::Deserialize;

use studio_pro_core::{Lead, LeadStatus, Member, MemberId};
use studio_pro_integration_tests::TestContext;

#[derive(Debug, Deserialize)]
struct DirectoryPayload<R> {
    query: String,
    total: usize,
    count: usize,
    records: Vec<R>,
}

async fn signed_in() -> TestContext {
    let ctx = TestContext::new().await;
    ctx.login_as_admin().await;
    ctx
}

async fn members(ctx: &TestContext, path: &str) -> DirectoryPayload<Member> {
    let resp = ctx.get(path).await;
    assert_eq!(resp.status(), StatusCode::OK, "{path}");
    resp.json().await.unwrap()
}

async fn leads(ctx: &TestContext, path: &str) -> DirectoryPayload<Lead> {
    let resp = ctx.get(path).await;
    assert_eq!(resp.status(), StatusCode::OK, "{path}");
    resp.json().await.unwrap()
}

// ============================================================================
// JSON API
// ============================================================================

#[tokio::test]
async fn test_api_members_search_jane() {
    let ctx = signed_in().await;

    let payload = members(&ctx, "/api/members?q=jane").await;
    assert_eq!(payload.query, "jane");
    assert_eq!(payload.total, 5);
    assert_eq!(payload.count, 1);
    assert_eq!(payload.records[0].id, MemberId::new(1));
    assert_eq!(payload.records[0].name, "Jane Smith");
}

#[tokio::test]
async fn test_api_members_empty_query_returns_all_in_order() {
    let ctx = signed_in().await;

    let payload = members(&ctx, "/api/members").await;
    assert_eq!(payload.count, payload.total);
    let names: Vec<&str> = payload.records.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        ["Jane Smith", "John Doe", "Alice Johnson", "Bob Wilson", "Carol Brown"]
    );
}

#[tokio::test]
async fn test_api_members_case_insensitive_email_match() {
    let ctx = signed_in().await;

    let payload = members(&ctx, "/api/members?q=WILSON%40EMAIL").await;
    assert_eq!(payload.count, 1);
    assert_eq!(payload.records[0].name, "Bob Wilson");
}

#[tokio::test]
async fn test_api_members_no_match() {
    let ctx = signed_in().await;

    let payload = members(&ctx, "/api/members?q=zumba").await;
    assert_eq!(payload.count, 0);
    assert!(payload.records.is_empty());
    assert_eq!(payload.total, 5);
}

#[tokio::test]
async fn test_api_leads_search() {
    let ctx = signed_in().await;

    let payload = leads(&ctx, "/api/leads?q=davi").await;
    assert_eq!(payload.total, 3);
    let names: Vec<&str> = payload.records.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["David Lee", "Emma Davis"]);
    assert_eq!(payload.records[1].status, LeadStatus::Contacted);
}

// ============================================================================
// CRM Page
// ============================================================================

#[tokio::test]
async fn test_crm_page_filters_members() {
    let ctx = signed_in().await;

    let body = ctx.get("/crm?q=jane").await.text().await.unwrap();
    assert!(body.contains("Jane Smith"));
    assert!(!body.contains("John Doe"));
    assert!(!body.contains("Carol Brown"));
}

#[tokio::test]
async fn test_crm_page_lists_everyone_without_query() {
    let ctx = signed_in().await;

    let body = ctx.get("/crm").await.text().await.unwrap();
    for name in ["Jane Smith", "John Doe", "Alice Johnson", "Bob Wilson", "Carol Brown"] {
        assert!(body.contains(name), "{name}");
    }
}

#[tokio::test]
async fn test_crm_page_filters_leads_tab() {
    let ctx = signed_in().await;

    let body = ctx.get("/crm?tab=leads&q=frank").await.text().await.unwrap();
    assert!(body.contains("Frank Miller"));
    assert!(!body.contains("David Lee"));
    assert!(!body.contains("Jane Smith"));
}

#[tokio::test]
async fn test_crm_page_empty_result_message() {
    let ctx = signed_in().await;

    let body = ctx.get("/crm?q=nobody-here").await.text().await.unwrap();
    assert!(body.contains("No members match"));
}

#[tokio::test]
async fn test_unknown_tab_is_bad_request() {
    let ctx = signed_in().await;

    assert_eq!(ctx.get("/crm?tab=prospects").await.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ctx.get("/marketing?tab=tiktok").await.status(), StatusCode::BAD_REQUEST);
}
