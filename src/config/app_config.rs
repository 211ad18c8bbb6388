use std::time::Duration;

use crate::shared::application::retry_policy::RetryPolicy;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_database: String,
    pub persistence_timeout_ms: u64,
    pub retry_max_attempts: u32,
    pub retry_initial_backoff_ms: u64,
    pub retry_max_backoff_ms: u64,
    pub notification_queue_capacity: usize,
    pub notification_max_attempts: u32,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env_or("PORT", 8081),
            postgres_host: std::env::var("POSTGRES_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            postgres_port: env_or("POSTGRES_PORT", 5432),
            postgres_user: std::env::var("POSTGRES_USER")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_password: std::env::var("POSTGRES_PASSWORD")
                .unwrap_or_else(|_| "admin".to_string()),
            postgres_database: std::env::var("POSTGRES_DATABASE")
                .unwrap_or_else(|_| "event_budget".to_string()),
            persistence_timeout_ms: env_or("PERSISTENCE_TIMEOUT_MS", 5_000),
            retry_max_attempts: env_or("RETRY_MAX_ATTEMPTS", 3),
            retry_initial_backoff_ms: env_or("RETRY_INITIAL_BACKOFF_MS", 100),
            retry_max_backoff_ms: env_or("RETRY_MAX_BACKOFF_MS", 2_000),
            notification_queue_capacity: env_or("NOTIFICATION_QUEUE_CAPACITY", 1_024),
            notification_max_attempts: env_or("NOTIFICATION_MAX_ATTEMPTS", 5),
            log_filter: std::env::var("LOG_FILTER")
                .unwrap_or_else(|_| "event_budget_workflow=info,tower_http=info".to_string()),
        }
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_database
        )
    }

    pub fn persistence_timeout(&self) -> Duration {
        Duration::from_millis(self.persistence_timeout_ms)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry_max_attempts,
            Duration::from_millis(self.retry_initial_backoff_ms),
            Duration::from_millis(self.retry_max_backoff_ms),
            self.persistence_timeout(),
        )
    }

    pub fn notification_retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.notification_max_attempts,
            Duration::from_millis(self.retry_initial_backoff_ms),
            Duration::from_millis(self.retry_max_backoff_ms),
            self.persistence_timeout(),
        )
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}
