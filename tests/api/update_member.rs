use crate::helpers::{
    assert_error, form_from_fields, get_json_response_body, member_fields,
    member_form, member_response_schema, mock_blob_upload, register_member,
    with_avatar, TestApp, BLOB_URL, MAX_AVATAR_BYTES,
};

use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_200_and_replace_fields(app: &mut TestApp) {
    let id = register_member(app, "Ann").await.to_string();

    let fields = member_fields("Annette")
        .into_iter()
        .map(|(name, value)| match name {
            "role" => (name, "Designer".to_owned()),
            "partTimeJob" => (name, "Barista".to_owned()),
            _ => (name, value),
        })
        .collect();
    let response = app.patch_team_member(&id, form_from_fields(fields)).await;

    assert_eq!(response.status().as_u16(), 200, "{response:?}");
    let body = get_json_response_body(response).await;
    assert!(
        jsonschema::is_valid(&member_response_schema(), &body),
        "response does not match schema"
    );
    assert_eq!(body["data"]["firstName"], "Annette");
    assert_eq!(body["data"]["role"], "Designer");
    assert_eq!(body["data"]["partTimeJob"], "Barista");

    let body = get_json_response_body(app.get_team_member(&id).await).await;
    assert_eq!(body["data"]["firstName"], "Annette");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_keep_image_when_no_avatar_is_sent(app: &mut TestApp) {
    mock_blob_upload(app, 1).await;
    let response = app.post_register(with_avatar(member_form("Ann"), 64)).await;
    let id = get_json_response_body(response).await["data"]["id"].to_string();

    let response = app.patch_team_member(&id, member_form("Ann")).await;

    assert_eq!(response.status().as_u16(), 200);
    let body = get_json_response_body(response).await;
    assert_eq!(body["data"]["image"], BLOB_URL);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_replace_image_when_avatar_is_sent(app: &mut TestApp) {
    mock_blob_upload(app, 1).await;
    let id = register_member(app, "Ann").await.to_string();

    let response = app
        .patch_team_member(&id, with_avatar(member_form("Ann"), 64))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = get_json_response_body(response).await;
    assert_eq!(body["data"]["image"], BLOB_URL);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_without_uploading_for_unknown_id(app: &mut TestApp) {
    mock_blob_upload(app, 0).await;
    register_member(app, "Ann").await;

    let response = app
        .patch_team_member("42", with_avatar(member_form("Ann"), 64))
        .await;

    assert_error(response, 404, "Team member not found").await;
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_and_leave_member_untouched(app: &mut TestApp) {
    mock_blob_upload(app, 0).await;
    let id = register_member(app, "Ann").await.to_string();

    let fields = member_fields("Annette")
        .into_iter()
        .filter(|(name, _)| *name != "goal")
        .collect();
    let response = app.patch_team_member(&id, form_from_fields(fields)).await;
    assert_error(
        response,
        400,
        "All fields except part-time job and avatar are required",
    )
    .await;

    let form = with_avatar(member_form("Annette"), MAX_AVATAR_BYTES);
    let response = app.patch_team_member(&id, form).await;
    assert_error(response, 400, "Avatar file size must be less than 4MB").await;

    let body = get_json_response_body(app.get_team_member(&id).await).await;
    assert_eq!(body["data"]["firstName"], "Ann");
}
