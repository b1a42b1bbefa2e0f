use color_eyre::eyre::{eyre, Result, WrapErr};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::sync::Arc;
use tokio::sync::RwLock;

use team_directory::{
    app_state::AppState,
    get_postgres_pool,
    services::{data_stores::PostgresMemberStore, HttpBlobStore},
    utils::{
        constants::{
            prod, BLOB_READ_WRITE_TOKEN, BLOB_STORE_BASE_URL, DATABASE_URL,
        },
        tracing::init_tracing,
    },
    Application,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let pg_pool = get_postgres_pool(&DATABASE_URL)
        .await
        .wrap_err("Failed to create Postgres connection pool")?;

    sqlx::migrate!()
        .run(&pg_pool)
        .await
        .wrap_err("Failed to run migrations")?;

    let member_store =
        Arc::new(RwLock::new(PostgresMemberStore::new(pg_pool.clone())));

    let http_client = Client::builder()
        .timeout(prod::blob_store::TIMEOUT)
        .build()
        .wrap_err("Failed to build HTTP client")?;
    let blob_store = Arc::new(HttpBlobStore::new(
        BLOB_STORE_BASE_URL.to_owned(),
        Secret::new(BLOB_READ_WRITE_TOKEN.expose_secret().to_owned()),
        http_client,
    ));

    let app_state = AppState::new(member_store, blob_store);

    let app = Application::build(app_state, prod::APP_ADDRESS)
        .await
        .map_err(|e| eyre!("Failed to build app: {e}"))?;

    app.run().await.wrap_err("Failed to run app")?;

    pg_pool.close().await;
    Ok(())
}
