use clap::Parser;
use once_cell::sync::Lazy;
use sea_orm::prelude::Decimal;

/// Activities closing within this many days trigger a warning notice.
pub const NOTIFICATION_WINDOW_DAYS: i64 = 7;

/// Course averages below this grade trigger a danger notice.
pub const LOW_AVERAGE_THRESHOLD: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

pub const MAX_NOTIFICATIONS_PER_KIND: usize = 10;
pub const MAX_NOTIFICATIONS: usize = 20;

pub static APP_CONFIG: Lazy<Config> = Lazy::new(Config::parse);

#[derive(Debug, Parser, Clone)]
pub struct Config {
    #[clap(long, env, default_value_t = 8080)]
    pub port: u16,

    #[clap(long, env, default_value_t = true)]
    pub swagger_enabled: bool,

    #[clap(long, env, default_value = "info")]
    pub log_level: String,

    #[clap(long, env)]
    pub database_url: String,

    #[clap(long, env, default_value_t = 10)]
    pub database_max_connections: u32,

    #[clap(long, env, default_value_t = true)]
    pub run_migrations: bool,

    #[clap(long, env, default_value = "*")]
    pub cors_allowed_origins: String,

    #[clap(long, env, default_value = "local")]
    pub app_env: String,
}
