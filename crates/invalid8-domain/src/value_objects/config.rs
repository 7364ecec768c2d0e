//! Backend connection settings
//!
//! Plain data consumed by the adapter constructors in `invalid8-providers`
//! and embedded in the application configuration.

use serde::{Deserialize, Serialize};

/// Default Redis port
pub const DEFAULT_REDIS_PORT: u16 = 6379;

/// Redis connection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RedisConfig {
    /// Server hostname
    pub host: String,
    /// Server port
    pub port: u16,
    /// Optional password
    pub password: Option<String>,
    /// Optional database index
    pub db: Option<i64>,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_REDIS_PORT,
            password: None,
            db: None,
        }
    }
}

impl RedisConfig {
    /// Settings for `host` on the default port
    pub fn new<S: Into<String>>(host: S) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }

    /// Set the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the password
    pub fn with_password<S: Into<String>>(mut self, password: S) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the database index
    pub fn with_db(mut self, db: i64) -> Self {
        self.db = Some(db);
        self
    }

    /// Connection URL, e.g. `redis://:secret@localhost:6379/2`
    pub fn connection_url(&self) -> String {
        let auth = self
            .password
            .as_ref()
            .map(|password| format!(":{password}@"))
            .unwrap_or_default();
        let db = self.db.map(|db| format!("/{db}")).unwrap_or_default();
        format!("redis://{}{}:{}{}", auth, self.host, self.port, db)
    }
}

/// Kafka connection settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KafkaConfig {
    /// Bootstrap brokers (`host:port`)
    pub brokers: Vec<String>,
    /// Client id
    pub client_id: Option<String>,
    /// Consumer group id
    pub group_id: Option<String>,
}

impl KafkaConfig {
    /// Settings for the given brokers
    pub fn new<I, S>(brokers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            brokers: brokers.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

/// RabbitMQ connection settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RabbitMqConfig {
    /// AMQP url, e.g. `amqp://localhost:5672`
    pub url: String,
    /// Exchange name
    pub exchange: Option<String>,
    /// Exchange type (`topic`, `fanout`, ...)
    pub exchange_type: Option<String>,
    /// Whether the exchange is durable
    pub durable: Option<bool>,
}

impl RabbitMqConfig {
    /// Settings for the given url
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}
