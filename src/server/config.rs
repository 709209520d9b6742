use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REPORT_THRESHOLD: u64 = 5;

pub struct Config {
    pub database_url: String,
    /// Root of the uploaded file tree.
    pub upload_dir: PathBuf,
    pub bind_addr: String,
    /// Distinct reports after which a post is hidden.
    pub report_threshold: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            upload_dir: PathBuf::from(required("UPLOAD_DIR")?),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            report_threshold: match std::env::var("REPORT_THRESHOLD") {
                Ok(value) => parse_threshold(&value)?,
                Err(_) => DEFAULT_REPORT_THRESHOLD,
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_threshold(value: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: "REPORT_THRESHOLD".to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    match value.trim().parse::<u64>() {
        Ok(0) => Err(invalid("must be at least 1")),
        Ok(threshold) => Ok(threshold),
        Err(e) => Err(invalid(&e.to_string())),
    }
}
