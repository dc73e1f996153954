use dotenv::dotenv;
use std::env;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Se assente il server usa lo store in memoria
    pub database_url: Option<String>,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub connection_lifetime_secs: u64,
    pub app_env: String,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Costruisce la configurazione da una funzione di lookup qualsiasi (usata dai test)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if database_url.is_none() {
            warn!("DATABASE_URL not set, messages will be kept in memory only");
        }

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = lookup("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|| "10".to_string())
            .parse::<u32>()
            .map_err(|_| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;

        let connection_lifetime_secs = lookup("DB_CONNECTION_LIFETIME_SECS")
            .unwrap_or_else(|| "1800".to_string())
            .parse::<u64>()
            .map_err(|_| {
                "Invalid DB_CONNECTION_LIFETIME_SECS: must be a positive number".to_string()
            })?;

        let app_env = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());

        Ok(Config {
            database_url,
            server_host,
            server_port,
            max_connections,
            connection_lifetime_secs,
            app_env,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Logga la configurazione (nascondendo le credenziali del database)
    pub fn print_info(&self) {
        info!("Server Configuration:");
        info!("   Environment: {}", self.app_env);
        info!("   Server Address: {}", self.bind_address());
        match &self.database_url {
            Some(url) => info!("   Database: {}", Self::mask_url(url)),
            None => info!("   Database: in-memory"),
        }
        info!("   Max DB Connections: {}", self.max_connections);
        info!("   Connection Lifetime: {}s", self.connection_lifetime_secs);
    }

    /// Maschera l'URL del database per il logging
    fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.find('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        "***".to_string()
    }
}
