use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;
use std::fmt;
use thiserror::Error;

/// 設定読み込みのエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// ストア接続設定
///
/// 組み込み側のアプリケーションがCatalog Storeの構築時に渡す。
/// グローバル状態は持たない。
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "library".to_string(),
            user: "postgres".to_string(),
            password: String::new(),
        }
    }
}

// パスワードはログに出さない
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl StoreConfig {
    /// 環境変数から読み込む
    ///
    /// 未設定の項目はデフォルト値を使う。
    /// - CATALOG_DB_HOST
    /// - CATALOG_DB_PORT
    /// - CATALOG_DB_NAME
    /// - CATALOG_DB_USER
    /// - CATALOG_DB_PASSWORD
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意のキー検索関数から読み込む（テスト用に環境変数から切り離してある）
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("CATALOG_DB_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "CATALOG_DB_PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("CATALOG_DB_HOST").unwrap_or(defaults.host),
            port,
            database: lookup("CATALOG_DB_NAME").unwrap_or(defaults.database),
            user: lookup("CATALOG_DB_USER").unwrap_or(defaults.user),
            password: lookup("CATALOG_DB_PASSWORD").unwrap_or(defaults.password),
        })
    }

    /// sqlxの接続オプションに変換する
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }
}

/// HTTPサーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
        Self {
            bind_addr: format!("0.0.0.0:{}", port),
        }
    }
}
