//! API Integration Tests
//!
//! Each test spawns its own server on the in-memory store. Set
//! `TEST_DATABASE_URL` to run against PostgreSQL instead; tests asserting
//! exact totals are skipped there since the tables are shared.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, test_config, uses_postgres,
    TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert!(response.headers().contains_key("x-request-id"));

    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");

    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["store"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .client
        .get(format!("{}/health", server.base_url()))
        .header("x-request-id", "wedding-test-1")
        .send()
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "wedding-test-1");
}

// ============================================================================
// RSVP Intake Tests
// ============================================================================

#[tokio::test]
async fn test_submit_rsvp() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/rsvp", &SubmitRsvp::attending(3))
        .await
        .unwrap();
    let created: SubmitRsvpResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(!created.id.is_nil());
}

#[tokio::test]
async fn test_submit_rsvp_rejects_invalid_input() {
    let server = TestServer::start().await.expect("Failed to start server");

    let mut blank_name = SubmitRsvp::attending(1);
    blank_name.guest_name = "   ".to_string();
    let response = server.post("/api/v1/rsvp", &blank_name).await.unwrap();
    assert_eq!(
        assert_error(response, StatusCode::BAD_REQUEST).await.unwrap(),
        "VALIDATION_ERROR"
    );

    let mut too_many = SubmitRsvp::attending(1);
    too_many.number_of_guests = 6;
    let response = server.post("/api/v1/rsvp", &too_many).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Two companions listed for a party of two
    let mut companions = SubmitRsvp::attending(2);
    companions.additional_guests.push(AdditionalGuest {
        name: "Extra".to_string(),
    });
    let response = server.post("/api/v1/rsvp", &companions).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_submit_rsvp_rejects_malformed_json() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .client
        .post(format!("{}/api/v1/rsvp", server.base_url()))
        .header("Content-Type", "application/json")
        .body("{\"guest_name\":")
        .send()
        .await
        .unwrap();

    assert_eq!(
        assert_error(response, StatusCode::BAD_REQUEST).await.unwrap(),
        "INVALID_BODY"
    );
}

#[tokio::test]
async fn test_submission_rate_limit() {
    let mut config = test_config().unwrap();
    config.submission_limit.window_ms = 60_000;
    config.submission_limit.max_requests = 5;
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");

    for _ in 0..5 {
        let response = server
            .post("/api/v1/rsvp", &SubmitRsvp::attending(1))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .post("/api/v1/rsvp", &SubmitRsvp::attending(1))
        .await
        .unwrap();
    let retry_after: u64 = response.headers()["retry-after"]
        .to_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!((1..=60).contains(&retry_after));
    assert_eq!(
        assert_error(response, StatusCode::TOO_MANY_REQUESTS).await.unwrap(),
        "RATE_LIMITED"
    );
}

// ============================================================================
// Dashboard Tests
// ============================================================================

#[tokio::test]
async fn test_dashboard_login() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/dashboard/login", &json!({ "password": "wrong" }))
        .await
        .unwrap();
    assert_eq!(
        assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap(),
        "INVALID_CREDENTIALS"
    );

    let token = server.dashboard_token().await.unwrap();
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_dashboard_routes_require_token() {
    let server = TestServer::start().await.expect("Failed to start server");

    for path in [
        "/api/v1/rsvp",
        "/api/v1/rsvp/recent",
        "/api/v1/rsvp/stats",
        "/api/v1/rsvp/export",
        "/api/v1/analytics",
    ] {
        let response = server.get(path).await.unwrap();
        assert_eq!(
            assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap(),
            "MISSING_AUTHORIZATION",
            "{path}"
        );

        let response = server.get_auth(path, "not-a-token").await.unwrap();
        assert_eq!(
            assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap(),
            "INVALID_TOKEN",
            "{path}"
        );
    }
}

#[tokio::test]
async fn test_list_filter_and_sort() {
    if uses_postgres() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.dashboard_token().await.unwrap();

    let mut zara = SubmitRsvp::attending(3);
    zara.guest_name = "Zara".to_string();
    let mut ade = SubmitRsvp::attending(1);
    ade.guest_name = "Ade".to_string();
    let mut mo = SubmitRsvp::declining();
    mo.guest_name = "Mo".to_string();
    for rsvp in [&zara, &ade, &mo] {
        let response = server.post("/api/v1/rsvp", rsvp).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get_auth("/api/v1/rsvp?attendance_status=attending&sort_by=name&sort_direction=asc", &token)
        .await
        .unwrap();
    let entries: Vec<RsvpEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    let names: Vec<_> = entries.iter().map(|e| e.guest_name.as_str()).collect();
    assert_eq!(names, ["Ade", "Zara"]);
    assert_eq!(entries[1].additional_guests_data.len(), 2);

    let response = server
        .get_auth("/api/v1/rsvp?attendance_status=not-attending", &token)
        .await
        .unwrap();
    let entries: Vec<RsvpEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert!(!entries[0].is_attending);

    let response = server
        .get_auth("/api/v1/rsvp?sort_by=guests&sort_direction=desc", &token)
        .await
        .unwrap();
    let entries: Vec<RsvpEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(entries[0].guest_name, "Zara");

    let response = server
        .get_auth("/api/v1/rsvp/recent?limit=2", &token)
        .await
        .unwrap();
    let entries: Vec<RsvpEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(entries.len(), 2);
}

#[tokio::test]
async fn test_list_rejects_bad_filters() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.dashboard_token().await.unwrap();

    let response = server
        .get_auth("/api/v1/rsvp?attendance_status=maybe", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .get_auth("/api/v1/rsvp?start_date=next-week", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_rsvp_stats() {
    if uses_postgres() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.dashboard_token().await.unwrap();

    for rsvp in [
        SubmitRsvp::attending(2),
        SubmitRsvp::attending(3),
        SubmitRsvp::declining(),
    ] {
        let response = server.post("/api/v1/rsvp", &rsvp).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get_auth("/api/v1/rsvp/stats", &token).await.unwrap();
    let stats: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(stats["total"], 3);
    assert_eq!(stats["attending"], 2);
    assert_eq!(stats["not_attending"], 1);
    assert_eq!(stats["total_guests"], 5);

    let daily = stats["daily_rsvps"].as_array().unwrap();
    assert_eq!(daily.last().unwrap()["total"], 3);
}

#[tokio::test]
async fn test_export_csv() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.dashboard_token().await.unwrap();

    let mut rsvp = SubmitRsvp::attending(1);
    rsvp.notes = Some("Vegetarian, no nuts".to_string());
    let response = server.post("/api/v1/rsvp", &rsvp).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/api/v1/rsvp/export", &token).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/csv"));
    assert!(response.headers()["content-disposition"]
        .to_str()
        .unwrap()
        .contains("attachment"));

    let body = response.text().await.unwrap();
    let mut lines = body.lines();
    assert!(lines.next().unwrap().starts_with("\"Primary Guest\""));
    assert!(body.contains(&format!("\"{}\"", rsvp.guest_name)));
    assert!(body.contains("\"Vegetarian; no nuts\""));
}

#[tokio::test]
async fn test_clear_requires_confirmation() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.dashboard_token().await.unwrap();

    let response = server.post("/api/v1/rsvp", &SubmitRsvp::attending(1)).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.delete_auth("/api/v1/rsvp", &token).await.unwrap();
    assert_eq!(
        assert_error(response, StatusCode::BAD_REQUEST).await.unwrap(),
        "CONFIRMATION_REQUIRED"
    );

    let response = server.delete("/api/v1/rsvp?confirm=true").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .delete_auth("/api/v1/rsvp?confirm=true", &token)
        .await
        .unwrap();
    let cleared: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(cleared["deleted"].as_u64().unwrap() >= 1);

    if !uses_postgres() {
        let response = server.get_auth("/api/v1/rsvp", &token).await.unwrap();
        let entries: Vec<RsvpEntry> = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(entries.is_empty());
    }
}

// ============================================================================
// Guest Wall Tests
// ============================================================================

async fn post_comment(server: &TestServer, token: &str, message: &str) -> CommentView {
    let response = server
        .post_as_guest("/api/v1/comments", token, &WallPost::new("Ada", message))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

#[tokio::test]
async fn test_comment_thread() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = guest_token();

    let first = post_comment(&server, &token, "Congratulations!").await;
    assert_eq!(first.likes, 0);
    assert_eq!(first.user_id.as_deref(), Some(token.as_str()));

    let second = post_comment(&server, &token, "See you there").await;

    for message in ["Thank you", "Same here"] {
        let response = server
            .post(
                &format!("/api/v1/comments/{}/replies", first.id),
                &WallPost::new("Bola", message),
            )
            .await
            .unwrap();
        let reply: ReplyView = assert_json(response, StatusCode::CREATED).await.unwrap();
        assert_eq!(reply.comment_id, first.id);
    }

    let response = server.get("/api/v1/comments").await.unwrap();
    let wall: Vec<CommentView> = assert_json(response, StatusCode::OK).await.unwrap();

    let first_pos = wall.iter().position(|c| c.id == first.id).unwrap();
    let second_pos = wall.iter().position(|c| c.id == second.id).unwrap();
    assert!(second_pos < first_pos, "newest comment comes first");

    let replies: Vec<_> = wall[first_pos]
        .replies
        .iter()
        .map(|r| r.message.as_str())
        .collect();
    assert_eq!(replies, ["Thank you", "Same here"]);
    assert!(wall[second_pos].replies.is_empty());
}

#[tokio::test]
async fn test_comment_validation() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/comments", &WallPost::new("Ada", "   "))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post("/api/v1/comments", &WallPost::new("", "Hello"))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_reply_to_missing_comment() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            &format!("/api/v1/comments/{}/replies", Uuid::new_v4()),
            &WallPost::new("Ada", "Hello?"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_likes() {
    let server = TestServer::start().await.expect("Failed to start server");
    let comment = post_comment(&server, &guest_token(), "Like me").await;

    for expected in 1..=3 {
        let response = server
            .post_empty(&format!("/api/v1/comments/{}/like", comment.id))
            .await
            .unwrap();
        let liked: LikeView = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(liked.id, comment.id);
        assert_eq!(liked.likes, expected);
    }

    let response = server
        .post(
            &format!("/api/v1/comments/{}/replies", comment.id),
            &WallPost::new("Bola", "Me too"),
        )
        .await
        .unwrap();
    let reply: ReplyView = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_empty(&format!("/api/v1/replies/{}/like", reply.id))
        .await
        .unwrap();
    let liked: LikeView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(liked.likes, 1);

    let response = server
        .post_empty(&format!("/api/v1/comments/{}/like", Uuid::new_v4()))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.post_empty("/api/v1/replies/not-a-uuid/like").await.unwrap();
    assert_eq!(
        assert_error(response, StatusCode::BAD_REQUEST).await.unwrap(),
        "INVALID_PATH_PARAMETER"
    );
}

#[tokio::test]
async fn test_delete_comment_ownership() {
    let server = TestServer::start().await.expect("Failed to start server");
    let owner = guest_token();
    let comment = post_comment(&server, &owner, "Mine").await;
    let path = format!("/api/v1/comments/{}", comment.id);

    let response = server.delete(&path).await.unwrap();
    assert_eq!(
        assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap(),
        "MISSING_GUEST_TOKEN"
    );

    let response = server.delete_as_guest(&path, &guest_token()).await.unwrap();
    assert_eq!(
        assert_error(response, StatusCode::FORBIDDEN).await.unwrap(),
        "NOT_COMMENT_AUTHOR"
    );

    let response = server.delete_as_guest(&path, &owner).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_as_guest(&path, &owner).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_reply_ownership() {
    let server = TestServer::start().await.expect("Failed to start server");
    let comment = post_comment(&server, &guest_token(), "Hello").await;
    let replier = guest_token();

    let response = server
        .post_as_guest(
            &format!("/api/v1/comments/{}/replies", comment.id),
            &replier,
            &WallPost::new("Bola", "Hi back"),
        )
        .await
        .unwrap();
    let reply: ReplyView = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/replies/{}", reply.id);

    let response = server.delete_as_guest(&path, &guest_token()).await.unwrap();
    assert_eq!(
        assert_error(response, StatusCode::FORBIDDEN).await.unwrap(),
        "NOT_REPLY_AUTHOR"
    );

    let response = server.delete_as_guest(&path, &replier).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get("/api/v1/comments").await.unwrap();
    let wall: Vec<CommentView> = assert_json(response, StatusCode::OK).await.unwrap();
    let thread = wall.iter().find(|c| c.id == comment.id).unwrap();
    assert!(thread.replies.is_empty());
}

// ============================================================================
// Analytics Tests
// ============================================================================

#[tokio::test]
async fn test_record_page_view() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/page-views", &PageViewBeacon::new("/", "session-1", None))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(body["id"].is_string());

    let response = server
        .post("/api/v1/page-views", &PageViewBeacon::new("", "session-1", None))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_analytics_report() {
    if uses_postgres() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.dashboard_token().await.unwrap();

    for (page, session, device) in [
        ("/", "s1", Some("Mobile Safari")),
        ("/", "s2", Some("Desktop")),
        ("/rsvp", "s1", Some("Mobile Safari")),
        ("/", "s3", Some("iPad")),
    ] {
        let response = server
            .post("/api/v1/page-views", &PageViewBeacon::new(page, session, device))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get_auth("/api/v1/analytics", &token).await.unwrap();
    let report: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(report["total_page_views"], 4);
    assert_eq!(report["total_visitors"], 3);
    assert_eq!(report["device_breakdown"]["mobile"], 2);
    assert_eq!(report["device_breakdown"]["desktop"], 1);
    assert_eq!(report["device_breakdown"]["tablet"], 1);
    assert_eq!(report["top_pages"][0]["page"], "/");
    assert_eq!(report["top_pages"][0]["views"], 3);
    assert_eq!(report["top_pages"][0]["percentage"], 75.0);

    let response = server
        .get_auth("/api/v1/analytics?start_date=2000-01-01&end_date=2000-01-31", &token)
        .await
        .unwrap();
    let report: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(report["total_page_views"], 0);
}
