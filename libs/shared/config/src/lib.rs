use std::env;
use std::str::FromStr;

use tracing::warn;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:3000";

/// Where the resource cells keep their rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Supabase,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            "supabase" | "postgrest" => Ok(StorageBackend::Supabase),
            other => Err(format!("unknown storage backend: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_backend: StorageBackend,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub public_base_url: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::Memory,
            supabase_url: String::new(),
            supabase_anon_key: String::new(),
            public_base_url: DEFAULT_PUBLIC_BASE_URL.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(raw) => raw.parse().unwrap_or_else(|e: String| {
                warn!("{}, using in-memory storage", e);
                StorageBackend::Memory
            }),
            None => StorageBackend::Memory,
        };

        let mut config = Self {
            storage_backend,
            supabase_url: lookup("SUPABASE_URL")
                .unwrap_or_else(|| {
                    if storage_backend == StorageBackend::Supabase {
                        warn!("SUPABASE_URL not set, using empty value");
                    }
                    String::new()
                }),
            supabase_anon_key: lookup("SUPABASE_ANON_PUBLIC_KEY")
                .unwrap_or_else(|| {
                    if storage_backend == StorageBackend::Supabase {
                        warn!("SUPABASE_ANON_PUBLIC_KEY not set, using empty value");
                    }
                    String::new()
                }),
            public_base_url: lookup("PUBLIC_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_PUBLIC_BASE_URL.to_string()),
            port: match lookup("PORT") {
                Some(raw) => raw.parse().unwrap_or_else(|_| {
                    warn!("PORT '{}' is not a valid port, using {}", raw, DEFAULT_PORT);
                    DEFAULT_PORT
                }),
                None => DEFAULT_PORT,
            },
        };

        if config.storage_backend == StorageBackend::Supabase && !config.is_supabase_configured() {
            warn!("Supabase storage selected but not configured - falling back to in-memory storage");
            config.storage_backend = StorageBackend::Memory;
        }

        config
    }

    pub fn is_supabase_configured(&self) -> bool {
        !self.supabase_url.is_empty() && !self.supabase_anon_key.is_empty()
    }
}
