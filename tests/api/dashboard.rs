use crate::helpers::{get_json_response_body, register_member, TestApp};

use serde_json::{json, Value};
use test_context::test_context;

fn ids(body: &Value) -> Vec<i64> {
    body["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect()
}

async fn register_many(app: &TestApp, count: usize) {
    for i in 1..=count {
        register_member(app, &format!("Member{i}")).await;
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_page_through_twenty_five_members(app: &mut TestApp) {
    register_many(app, 25).await;

    let response = app.get_dashboard(&[]).await;
    assert_eq!(response.status().as_u16(), 200);
    let body = get_json_response_body(response).await;

    let schema = json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "query": { "type": "string" },
        "page": { "type": "integer", "minimum": 1 },
        "totalPages": { "type": "integer", "minimum": 0 },
        "pageNumbers": { "type": "array", "items": { "type": "integer" } },
        "controls": { "type": "object" },
        "summary": { "type": "object" },
        "members": { "type": "array", "maxItems": 10 }
      },
      "required": [
        "query", "page", "totalPages", "pageNumbers", "controls", "summary",
        "members"
      ]
    });
    assert!(
        jsonschema::is_valid(&schema, &body),
        "response does not match schema"
    );
    assert_eq!(body["totalPages"], 3);
    assert_eq!(body["pageNumbers"], json!([1, 2, 3]));
    assert_eq!(ids(&body), (1..=10).collect::<Vec<_>>());

    let response = app.get_dashboard(&[("page", "3")]).await;
    let body = get_json_response_body(response).await;
    assert_eq!(ids(&body), (21..=25).collect::<Vec<_>>());
    assert_eq!(
        body["controls"],
        json!({ "first": true, "previous": true, "next": false, "last": false })
    );
    assert_eq!(
        body["summary"],
        json!({
            "totalMembers": 25,
            "filteredMembers": 25,
            "showingFrom": 21,
            "showingTo": 25
        })
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_clamp_out_of_range_pages(app: &mut TestApp) {
    register_many(app, 12).await;

    let response = app.get_dashboard(&[("page", "9")]).await;
    let body = get_json_response_body(response).await;
    assert_eq!(body["page"], 2);
    assert_eq!(ids(&body), vec![11, 12]);

    let response = app.get_dashboard(&[("page", "0")]).await;
    let body = get_json_response_body(response).await;
    assert_eq!(body["page"], 1);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_filter_by_query_case_insensitively(app: &mut TestApp) {
    register_many(app, 12).await;

    let body = get_json_response_body(
        app.get_dashboard(&[("query", "MEMBER1"), ("page", "2")]).await,
    )
    .await;

    assert_eq!(body["query"], "MEMBER1");
    assert_eq!(ids(&body), vec![1, 10, 11, 12]);
    assert_eq!(body["page"], 1);
    assert_eq!(body["summary"]["filteredMembers"], 4);
    assert_eq!(body["summary"]["totalMembers"], 12);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_show_empty_page_when_nothing_matches(app: &mut TestApp) {
    register_many(app, 3).await;

    let body = get_json_response_body(
        app.get_dashboard(&[("query", "nobody")]).await,
    )
    .await;

    assert_eq!(body["page"], 1);
    assert_eq!(body["totalPages"], 0);
    assert_eq!(body["members"], json!([]));
    assert_eq!(body["pageNumbers"], json!([]));
    assert_eq!(body["summary"]["showingFrom"], 0);
}
