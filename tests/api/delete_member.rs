use crate::helpers::{
    assert_error, get_json_response_body, register_member, TestApp,
};

use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_200_and_remove_member(app: &mut TestApp) {
    for name in ["Ann", "Ben", "Cho"] {
        register_member(app, name).await;
    }

    let response = app.delete_team_member("2").await;
    assert_eq!(response.status().as_u16(), 200);
    let body = get_json_response_body(response).await;
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Team member deleted successfully"
        })
    );

    let body = get_json_response_body(app.get_team_members().await).await;
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);

    let response = app.get_team_member("2").await;
    assert_error(response, 404, "Team member not found").await;
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_when_deleting_twice(app: &mut TestApp) {
    let id = register_member(app, "Ann").await.to_string();

    assert_eq!(app.delete_team_member(&id).await.status().as_u16(), 200);

    let response = app.delete_team_member(&id).await;
    assert_error(response, 404, "Team member not found").await;
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_not_reuse_deleted_ids(app: &mut TestApp) {
    register_member(app, "Ann").await;
    let id = register_member(app, "Ben").await;
    app.delete_team_member(&id.to_string()).await;

    let next_id = register_member(app, "Cho").await;
    assert_eq!(next_id, 3);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_for_malformed_id(app: &mut TestApp) {
    let response = app.delete_team_member("abc").await;
    assert_error(response, 400, "Invalid member ID").await;
}
