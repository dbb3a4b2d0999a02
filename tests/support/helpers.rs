// tests/support/helpers.rs
use domain_outcomes::Outcome;
use once_cell::sync::Lazy;

use super::mocks::TitleEmpty;

static TRACING: Lazy<()> = Lazy::new(|| {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
        .ok();
});

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

pub fn validate_title(raw: &str) -> Outcome<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Outcome::error(TitleEmpty)
    } else {
        Outcome::success(trimmed.to_owned())
    }
}
