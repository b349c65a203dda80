use std::path::PathBuf;

/// Default gateway base URL when none is configured on the builder.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const DASHBOARD_STATS_PATH: &str = "/api/dashboard/stats";
pub const ACCOUNTS_PATH: &str = "/api/accounts";
pub const MY_ACCOUNTS_PATH: &str = "/api/accounts/my";
pub const PRODUCTS_PATH: &str = "/api/v1/product";
pub const FD_CALCULATE_PATH: &str = "/api/fd/calculate";

pub fn account_path(id: &str) -> String {
    format!("{}/{}", ACCOUNTS_PATH, id)
}

pub fn account_transactions_path(id: &str) -> String {
    format!("{}/{}/transactions", ACCOUNTS_PATH, id)
}

pub fn product_path(id: &str) -> String {
    format!("{}/{}", PRODUCTS_PATH, id)
}

/// Default location of the persisted session token
/// (e.g. `~/.config/fdbank-sdk/session.token` on Linux).
pub fn default_session_file() -> PathBuf {
    if let Some(config) = dirs::config_dir() {
        config.join("fdbank-sdk").join("session.token")
    } else {
        PathBuf::from(".fdbank-sdk").join("session.token")
    }
}
