use std::collections::HashSet;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use password_hash::rand_core::OsRng;
use sha2::{Digest, Sha256};

pub const DEFAULT_SENSITIVE_PATHS: &[&str] = &[
    "/.env",
    "/.git/",
    "/.git/config",
    "/.gitignore",
    "/wp-config.php",
    "/wp-config.inc.php",
    "/wp-config.bak",
    "/wp-config.txt",
    "/settings.py",
    "/config.php",
    "/config.inc.php",
    "/config.bak",
    "/.htaccess",
    "/.htpasswd",
    "/.ssh/",
    "/.aws/",
    "/.docker/",
    "/docker-compose.yml",
    "/docker-compose.yaml",
    "/.env.local",
    "/.env.production",
    "/.env.development",
    "/.env.test",
    "/.env.backup",
    "/composer.json",
    "/package.json",
    "/yarn.lock",
    "/package-lock.json",
    "/.idea/",
    "/.vscode/",
    "/.DS_Store",
    "/web.config",
    "/application.properties",
    "/application.yml",
    "/application.yaml",
    "/application-dev.properties",
    "/application-prod.properties",
    "/application-local.properties",
];

/// Compares two secrets without leaking the position of the first mismatch.
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    let da = Sha256::digest(a.as_bytes());
    let db = Sha256::digest(b.as_bytes());
    da.iter().zip(db.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// `scheme://host[:port]` of a Referer URL.
pub fn origin_of_referer(referer: &str) -> Option<String> {
    let url = url::Url::parse(referer).ok()?;
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    })
}

#[derive(Debug, Clone, Default)]
pub struct OriginPolicy {
    allowed_origins: HashSet<String>,
    server_api_key: Option<String>,
}

impl OriginPolicy {
    pub fn new(allowed_origins: &[String], server_api_key: Option<String>) -> Self {
        Self {
            allowed_origins: allowed_origins
                .iter()
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            server_api_key: server_api_key.filter(|k| !k.trim().is_empty() && k != "null"),
        }
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        !origin.is_empty() && self.allowed_origins.contains(origin)
    }

    pub fn is_valid_api_key(&self, presented: &str) -> bool {
        match &self.server_api_key {
            Some(key) if !presented.trim().is_empty() => constant_time_eq(key, presented),
            _ => false,
        }
    }

    pub fn has_origins(&self) -> bool {
        !self.allowed_origins.is_empty()
    }

    /// Whether a browser-style request carrying these headers may pass.
    pub fn admits(&self, origin: Option<&str>, referer: Option<&str>) -> bool {
        if let Some(o) = origin.filter(|o| !o.trim().is_empty()) {
            if self.is_allowed(o) {
                return true;
            }
        }
        match referer.filter(|r| !r.trim().is_empty()) {
            Some(r) => origin_of_referer(r)
                .map(|o| self.is_allowed(&o))
                .unwrap_or(false),
            None => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProbePolicy {
    patterns: Vec<String>,
}

impl ProbePolicy {
    /// Uses `configured` (comma separated) when it has entries, else the built-in list.
    pub fn new(configured: Option<&str>) -> Self {
        let custom: Vec<String> = configured
            .unwrap_or_default()
            .split(',')
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        let patterns = if custom.is_empty() {
            DEFAULT_SENSITIVE_PATHS
                .iter()
                .map(|p| p.to_lowercase())
                .collect()
        } else {
            custom
        };
        Self { patterns }
    }

    pub fn is_sensitive(&self, path: &str) -> bool {
        let lowered = path.to_lowercase();
        self.patterns.iter().any(|p| lowered.starts_with(p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for ProbePolicy {
    fn default() -> Self {
        Self::new(None)
    }
}

/// The single admin account, with its password kept only as an argon2 hash.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password_hash: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl AdminCredentials {
    pub fn hash(username: &str, password: &str) -> anyhow::Result<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?
            .to_string();
        Ok(Self {
            username: username.to_string(),
            password_hash,
        })
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        let user_ok = constant_time_eq(&self.username, username);
        let Ok(parsed) = PasswordHash::new(&self.password_hash) else {
            return false;
        };
        let pass_ok = Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok();
        user_ok && pass_ok
    }
}
