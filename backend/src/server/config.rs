//! Application settings and the server configuration built from them.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

use actix_web::cookie::{Key, SameSite};
use mockable::Env;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;

use dad_rental::outbound::password::DEFAULT_MEMORY_KIB;
use dad_rental::outbound::persistence::DbPool;

use super::BuildMode;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const COOKIE_SECURE_ENV: &str = "DADS_COOKIE_SECURE";
const ALLOW_EPHEMERAL_ENV: &str = "DADS_ALLOW_EPHEMERAL_SESSION_KEY";
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";

/// Startup settings merged from CLI flags, `DADS_*` variables and config files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DADS")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL URL; without one the in-memory store is used.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// File holding the session signing key.
    pub session_key_file: Option<PathBuf>,
    /// Argon2 memory cost in KiB for new passwords.
    pub password_memory_kib: Option<u32>,
}

impl AppSettings {
    /// Listen address, defaulting to `0.0.0.0:8080`.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(SocketAddr::V4(SocketAddrV4::new(
            Ipv4Addr::UNSPECIFIED,
            DEFAULT_PORT,
        )))
    }

    /// Non-empty database URL, if configured.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size, defaulting to ten connections.
    #[must_use]
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Session key path, defaulting to the mounted secret.
    #[must_use]
    pub fn session_key_file(&self) -> PathBuf {
        self.session_key_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_KEY_FILE))
    }

    /// Argon2 memory cost, defaulting to the library recommendation.
    #[must_use]
    pub fn password_memory_kib(&self) -> u32 {
        self.password_memory_kib.unwrap_or(DEFAULT_MEMORY_KIB)
    }
}

/// Cookie toggles read straight from the environment.
///
/// These stay out of [`AppSettings`] so an unset variable keeps its secure
/// default instead of collapsing to an absent CLI flag.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SessionFlags {
    /// Whether the session cookie carries the `Secure` flag.
    pub cookie_secure: bool,
    /// Permit a temporary session key when the key file is unreadable.
    pub allow_ephemeral: bool,
}

/// A session toggle holds something other than a boolean.
#[derive(thiserror::Error, Debug, Eq, PartialEq)]
#[error("invalid value for {name}='{value}'; expected {expected}")]
pub struct InvalidFlag {
    name: &'static str,
    value: String,
    expected: &'static str,
}

/// Read the session toggles; unset variables keep `Secure` on and
/// ephemeral keys off.
///
/// Debug builds warn and fall back on unparsable values.
///
/// # Errors
/// Returns [`InvalidFlag`] in release builds when a variable is not a
/// recognised boolean.
pub fn session_flags_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<SessionFlags, InvalidFlag> {
    Ok(SessionFlags {
        cookie_secure: flag_from_env(env, mode, COOKIE_SECURE_ENV, true)?,
        allow_ephemeral: flag_from_env(env, mode, ALLOW_EPHEMERAL_ENV, false)?,
    })
}

fn flag_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
    name: &'static str,
    default: bool,
) -> Result<bool, InvalidFlag> {
    let Some(value) = env.string(name) else {
        return Ok(default);
    };
    match parse_bool(&value) {
        Some(flag) => Ok(flag),
        None if mode.is_debug() => {
            warn!(variable = name, value = %value, default, "invalid boolean; using default");
            Ok(default)
        }
        None => Err(InvalidFlag {
            name,
            value,
            expected: BOOL_EXPECTED,
        }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) password_memory_kib: u32,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration; repositories default to in-memory.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site: SameSite::Lax,
            bind_addr,
            password_memory_kib: DEFAULT_MEMORY_KIB,
            db_pool: None,
        }
    }

    /// Use PostgreSQL-backed repositories.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Override the Argon2 memory cost.
    #[must_use]
    pub fn with_password_memory(mut self, memory_kib: u32) -> Self {
        self.password_memory_kib = memory_kib;
        self
    }
}
