use std::net::IpAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_name: String,
    pub host: IpAddr,
    pub port: u16,
    pub cors_origins: CorsOrigins,
    pub max_body_size: usize,
    pub log_level: String,
    pub mail: MailConfig,
}

/// Outbound notification settings. Sender and recipient are fixed for the
/// lifetime of the process.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub from: String,
    pub to: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let database_name = env_required("DB_NAME")?;

        let host: IpAddr = env_or("FORMRELAY_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FORMRELAY_HOST: {e}"))?;

        let port: u16 = env_or("FORMRELAY_PORT", "8001")
            .parse()
            .map_err(|e| format!("Invalid FORMRELAY_PORT: {e}"))?;

        let cors_origins = parse_cors_origins(&env_or("FORMRELAY_CORS_ORIGINS", "*"));

        let max_body_size: usize = env_or("FORMRELAY_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid FORMRELAY_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("FORMRELAY_LOG_LEVEL", "info");

        let timeout_secs: u64 = env_or("FORMRELAY_MAIL_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|e| format!("Invalid FORMRELAY_MAIL_TIMEOUT_SECS: {e}"))?;

        let mail = MailConfig {
            api_key: std::env::var("RESEND_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            api_url: env_or("RESEND_API_URL", "https://api.resend.com"),
            from: env_or("FORMRELAY_MAIL_FROM", "Collective Vox <onboarding@resend.dev>"),
            to: env_or("FORMRELAY_MAIL_TO", "collectivevox@gmail.com"),
            timeout: Duration::from_secs(timeout_secs),
        };

        Ok(Config {
            database_url,
            database_name,
            host,
            port,
            cors_origins,
            max_body_size,
            log_level,
            mail,
        })
    }
}

pub fn parse_cors_origins(raw: &str) -> CorsOrigins {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        CorsOrigins::Any
    } else {
        CorsOrigins::List(origins)
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
