use dotenvy::dotenv;
use lazy_static::lazy_static;
use secrecy::Secret;
use std::env as std_env;

lazy_static! {
    pub static ref DATABASE_URL: Secret<String> =
        load_required_secret(env::DATABASE_URL_ENV_VAR);
    pub static ref BLOB_READ_WRITE_TOKEN: Secret<String> =
        load_required_secret(env::BLOB_READ_WRITE_TOKEN_ENV_VAR);
    pub static ref BLOB_STORE_BASE_URL: String = load_or_default(
        env::BLOB_STORE_BASE_URL_ENV_VAR,
        prod::blob_store::BASE_URL
    );
}

fn load_env() {
    dotenv().ok();
}

fn load_required_secret(variable_name: &str) -> Secret<String> {
    load_env();
    let value = std_env::var(variable_name)
        .unwrap_or_else(|_| panic!("{variable_name} must be set."));
    if value.is_empty() {
        panic!("{variable_name} must not be empty.");
    }
    Secret::new(value)
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) => {
            if value.is_empty() {
                String::from(default_value)
            } else {
                value
            }
        }
        Err(_) => String::from(default_value),
    }
}

pub mod env {
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const BLOB_READ_WRITE_TOKEN_ENV_VAR: &str = "BLOB_READ_WRITE_TOKEN";
    pub const BLOB_STORE_BASE_URL_ENV_VAR: &str = "BLOB_STORE_BASE_URL";
}

/// Leaves room for a full form next to an avatar just over the avatar limit,
/// so oversized avatars are reported as such instead of as a cut-off body.
pub const MAX_REQUEST_BODY_BYTES: usize = 16 * 1024 * 1024;

pub const ALLOWED_ORIGINS: [&str; 2] =
    ["http://localhost:3000", "http://127.0.0.1:3000"];

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub mod blob_store {
        use std::time::Duration;

        pub const BASE_URL: &str = "https://blob.vercel-storage.com";
        pub const TIMEOUT: Duration = std::time::Duration::from_secs(30);
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub mod blob_store {
        use std::time::Duration;

        pub const TIMEOUT: Duration = std::time::Duration::from_millis(500);
    }
}
