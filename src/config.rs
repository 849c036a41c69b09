use std::net::IpAddr;
use std::path::PathBuf;

pub const DEFAULT_SECRET_KEY: &str = "dev-secret-change-me";
pub const DEFAULT_ADMIN_USER: &str = "admin";
pub const DEFAULT_ADMIN_PASS: &str = "1234";

/// File name of the spreadsheet written by the export, inside the instance dir.
pub const EXPORT_FILE_NAME: &str = "clients_export.xlsx";

#[derive(Debug, Clone)]
pub struct Config {
    pub instance_dir: PathBuf,
    pub database_path: PathBuf,
    pub export_path: PathBuf,
    pub secret_key: String,
    pub admin: AdminCredentials,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let instance_dir = PathBuf::from(env_or("LEADCAPTURE_INSTANCE_DIR", "instance"));

        let database_path = std::env::var("LEADCAPTURE_DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| instance_dir.join("app.db"));

        let export_path = instance_dir.join(EXPORT_FILE_NAME);

        let secret_key = env_or("LEADCAPTURE_SECRET_KEY", DEFAULT_SECRET_KEY);
        if secret_key.is_empty() {
            return Err("LEADCAPTURE_SECRET_KEY must not be empty".to_string());
        }

        let admin = AdminCredentials {
            username: env_or("LEADCAPTURE_ADMIN_USER", DEFAULT_ADMIN_USER),
            password: env_or("LEADCAPTURE_ADMIN_PASS", DEFAULT_ADMIN_PASS),
        };

        let host: IpAddr = env_or("LEADCAPTURE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid LEADCAPTURE_HOST: {e}"))?;

        let port: u16 = env_or("LEADCAPTURE_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid LEADCAPTURE_PORT: {e}"))?;

        let log_level = env_or("LEADCAPTURE_LOG_LEVEL", "info");

        Ok(Config {
            instance_dir,
            database_path,
            export_path,
            secret_key,
            admin,
            host,
            port,
            log_level,
        })
    }

    /// Names of settings still running on their built-in development values.
    pub fn insecure_defaults(&self) -> Vec<&'static str> {
        let mut defaults = Vec::new();
        if self.secret_key == DEFAULT_SECRET_KEY {
            defaults.push("LEADCAPTURE_SECRET_KEY");
        }
        if self.admin.username == DEFAULT_ADMIN_USER && self.admin.password == DEFAULT_ADMIN_PASS {
            defaults.push("LEADCAPTURE_ADMIN_USER/LEADCAPTURE_ADMIN_PASS");
        }
        defaults
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
