use reqwest::{
    multipart::{Form, Part},
    Client, Response, StatusCode,
};
use secrecy::Secret;
use serde_json::{json, Value};
use std::sync::Arc;
pub use team_directory::domain::MAX_AVATAR_BYTES;
use team_directory::{
    app_state::{AppState, MemberStoreType},
    services::{data_stores::HashmapMemberStore, HttpBlobStore},
    utils::constants::test,
    Application,
};
use test_context::AsyncTestContext;
use tokio::sync::RwLock;
use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

pub const BLOB_URL: &str = "https://blob.example.com/avatar-abc.png";

pub struct TestApp {
    pub address: String,
    pub blob_server: MockServer,
    pub http_client: reqwest::Client,
    pub member_store: MemberStoreType,
}

impl TestApp {
    pub async fn new() -> Self {
        let member_store: MemberStoreType =
            Arc::new(RwLock::new(HashmapMemberStore::default()));

        let blob_server = MockServer::start().await;
        let blob_store = Arc::new(configure_blob_store(blob_server.uri()));

        let app_state = AppState::new(member_store.clone(), blob_store);

        let app = Application::build(app_state, test::APP_ADDRESS)
            .await
            .expect("Failed to build app");
        let address = format!("http://{}", app.address.clone());

        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run());

        let http_client = reqwest::Client::new();

        Self {
            address,
            blob_server,
            http_client,
            member_store,
        }
    }

    pub async fn post_register(&self, form: Form) -> Response {
        self.http_client
            .post(format!("{}/api/register", &self.address))
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_team_members(&self) -> Response {
        self.http_client
            .get(format!("{}/api/team-members", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_team_member(&self, id: &str) -> Response {
        self.http_client
            .get(format!("{}/api/team-member/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn patch_team_member(&self, id: &str, form: Form) -> Response {
        self.http_client
            .patch(format!("{}/api/team-member/{}", &self.address, id))
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_team_member(&self, id: &str) -> Response {
        self.http_client
            .delete(format!("{}/api/team-member/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_avatar_upload(
        &self,
        filename: Option<&str>,
        body: Vec<u8>,
    ) -> Response {
        let mut request = self
            .http_client
            .post(format!("{}/api/avatar/upload", &self.address))
            .header("content-type", "image/png")
            .body(body);
        if let Some(filename) = filename {
            request = request.query(&[("filename", filename)]);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn post_avatar_update(&self, form: Form) -> Response {
        self.http_client
            .post(format!("{}/api/avatar/update", &self.address))
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_dashboard(&self, params: &[(&str, &str)]) -> Response {
        self.http_client
            .get(format!("{}/api/dashboard", &self.address))
            .query(params)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_landing_grid(&self, params: &[(&str, &str)]) -> Response {
        self.http_client
            .get(format!("{}/api/landing-grid", &self.address))
            .query(params)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        TestApp::new().await
    }
}

fn configure_blob_store(base_url: String) -> HttpBlobStore {
    let http_client = Client::builder()
        .timeout(test::blob_store::TIMEOUT)
        .build()
        .expect("Failed to build HTTP client");

    HttpBlobStore::new(
        base_url,
        Secret::new("blob_token".to_owned()),
        http_client,
    )
}

/// Every required field filled in, keyed by wire name.
pub fn member_fields(first_name: &str) -> Vec<(&'static str, String)> {
    vec![
        ("firstName", first_name.to_owned()),
        ("lastName", "Sato".to_owned()),
        ("furigana", "さとう".to_owned()),
        ("nickname", format!("{first_name}-chan")),
        ("role", "Engineer".to_owned()),
        ("partTimeJob", String::new()),
        ("description", "Writes code".to_owned()),
        ("age", "24".to_owned()),
        ("joinReason", "Curiosity".to_owned()),
        ("goal", "Ship it".to_owned()),
        ("message", "Hello".to_owned()),
    ]
}

pub fn form_from_fields(fields: Vec<(&'static str, String)>) -> Form {
    fields
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value))
}

pub fn member_form(first_name: &str) -> Form {
    form_from_fields(member_fields(first_name))
}

pub fn with_avatar(form: Form, size: usize) -> Form {
    let part = Part::bytes(vec![0u8; size])
        .file_name("avatar.png")
        .mime_str("image/png")
        .expect("Failed to build avatar part");
    form.part("avatar", part)
}

/// Answers blob uploads and checks that exactly `expected_uploads` arrive.
pub async fn mock_blob_upload(app: &TestApp, expected_uploads: u64) {
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": BLOB_URL,
            "downloadUrl": format!("{BLOB_URL}?download=1"),
            "pathname": "avatar-abc.png",
            "contentType": "image/png",
            "contentDisposition": "inline; filename=\"avatar-abc.png\""
        })))
        .expect(expected_uploads)
        .mount(&app.blob_server)
        .await;
}

pub async fn mock_blob_failure(app: &TestApp) {
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&app.blob_server)
        .await;
}

pub async fn get_json_response_body(response: Response) -> Value {
    let body: Value = response
        .json()
        .await
        .expect("failed to parse response body JSON");
    body
}

pub async fn register_member(app: &TestApp, first_name: &str) -> i64 {
    let response = app.post_register(member_form(first_name)).await;
    assert_eq!(
        response.status(),
        StatusCode::CREATED,
        "Failed to register member: {first_name}"
    );
    let body = get_json_response_body(response).await;
    body["data"]["id"]
        .as_i64()
        .expect("Failed to read id from JSON response")
}

pub async fn assert_error(response: Response, status: u16, message: &str) {
    assert_eq!(response.status().as_u16(), status, "{response:?}");
    let body = get_json_response_body(response).await;
    assert_eq!(
        body.get("error").and_then(Value::as_str),
        Some(message),
        "Unexpected error body: {body}"
    );
}

pub fn member_schema() -> Value {
    json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "id": { "type": "integer", "minimum": 1 },
        "firstName": { "type": "string", "minLength": 1 },
        "lastName": { "type": "string", "minLength": 1 },
        "furigana": { "type": "string", "minLength": 1 },
        "nickname": { "type": "string", "minLength": 1 },
        "image": { "type": "string" },
        "role": { "type": "string", "minLength": 1 },
        "partTimeJob": { "type": "string" },
        "description": { "type": "string", "minLength": 1 },
        "age": { "type": "integer", "minimum": 18, "maximum": 100 },
        "joinReason": { "type": "string", "minLength": 1 },
        "goal": { "type": "string", "minLength": 1 },
        "message": { "type": "string", "minLength": 1 }
      },
      "required": [
        "id", "firstName", "lastName", "furigana", "nickname", "image",
        "role", "partTimeJob", "description", "age", "joinReason", "goal",
        "message"
      ]
    })
}

pub fn member_response_schema() -> Value {
    json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "success": { "type": "boolean" },
        "data": member_schema()
      },
      "required": ["success", "data"]
    })
}
