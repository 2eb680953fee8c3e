use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::str::FromStr;
use tinylink_generator::DigestAlgorithm;
use tinylink_telemetry::LogFormat;

pub const LISTEN_ADDR_ENV: &str = "TINYLINK_GATEWAY_LISTEN_ADDR";
pub const BASE_URL_ENV: &str = "TINYLINK_BASE_URL";
pub const STORAGE_BACKEND_ENV: &str = "TINYLINK_STORAGE_BACKEND";
pub const MYSQL_DSN_ENV: &str = "TINYLINK_MYSQL_DSN";
pub const MYSQL_MAX_CONNECTIONS_ENV: &str = "TINYLINK_MYSQL_MAX_CONNECTIONS";
pub const MYSQL_MIGRATE_ENV: &str = "TINYLINK_MYSQL_MIGRATE";
pub const CODE_LENGTH_ENV: &str = "TINYLINK_CODE_LENGTH";
pub const DIGEST_ENV: &str = "TINYLINK_DIGEST";
pub const MAX_RANDOM_ATTEMPTS_ENV: &str = "TINYLINK_MAX_RANDOM_ATTEMPTS";
pub const LOG_FORMAT_ENV: &str = "TINYLINK_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const MAX_RANDOM_ATTEMPTS_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "mysql")]
    Mysql,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Mysql => write!(f, "mysql"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "pretty")]
    Pretty,
    #[value(name = "json")]
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tinylink-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Public origin used to build `short_url` in responses.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = MYSQL_DSN_ENV, required_if_eq("storage", "mysql"))]
    pub mysql_dsn: Option<String>,

    #[arg(long, env = MYSQL_MAX_CONNECTIONS_ENV, default_value_t = 20)]
    pub mysql_max_connections: u32,

    /// Create the `urls` table on startup if it is missing.
    #[arg(long, env = MYSQL_MIGRATE_ENV, default_value_t = false)]
    pub mysql_migrate: bool,

    #[arg(long, env = CODE_LENGTH_ENV, default_value_t = 7)]
    pub code_length: usize,

    /// `sha256` or `sha512`.
    #[arg(
        long,
        env = DIGEST_ENV,
        value_parser = DigestAlgorithm::from_str,
        default_value = "sha256"
    )]
    pub digest: DigestAlgorithm,

    /// Random candidates tried after the deterministic one collides.
    #[arg(
        long,
        env = MAX_RANDOM_ATTEMPTS_ENV,
        value_parser = clap::value_parser!(u32).range(0..=MAX_RANDOM_ATTEMPTS_LIMIT as i64),
        default_value_t = 3
    )]
    pub max_random_attempts: u32,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,
}
