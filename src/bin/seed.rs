use color_eyre::eyre::{eyre, Result, WrapErr};
use std::path::PathBuf;

use team_directory::{
    domain::MemberStore,
    get_postgres_pool,
    services::data_stores::PostgresMemberStore,
    utils::{
        constants::DATABASE_URL, seed::load_seed_members,
        tracing::init_tracing,
    },
};

const DEFAULT_SEED_FILE: &str = "data/team-members.json";

/// Replaces every team member with the contents of a seed file.
///
/// Usage: `seed [path]`, defaulting to `data/team-members.json`.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_FILE));
    let members = load_seed_members(&path)?;

    let pg_pool = get_postgres_pool(&DATABASE_URL)
        .await
        .wrap_err("Failed to create Postgres connection pool")?;
    sqlx::migrate!()
        .run(&pg_pool)
        .await
        .wrap_err("Failed to run migrations")?;

    let mut store = PostgresMemberStore::new(pg_pool.clone());

    tracing::info!("Start seeding...");
    store
        .delete_members()
        .await
        .map_err(|e| eyre!("Failed to clear team members: {e}"))?;
    tracing::info!("Cleared existing team members");

    for member in members {
        let member = store
            .add_member(member)
            .await
            .map_err(|e| eyre!("Failed to create team member: {e}"))?;
        tracing::info!(
            id = member.id.value_of(),
            "Created team member: {}",
            member.full_name()
        );
    }
    tracing::info!("Seeding finished.");

    pg_pool.close().await;
    Ok(())
}
