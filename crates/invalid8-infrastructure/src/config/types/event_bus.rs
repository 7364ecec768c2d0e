//! EventBus configuration types

use crate::constants::{DEFAULT_KAFKA_BROKER, DEFAULT_RABBITMQ_URL};
use invalid8_domain::constants::{KAFKA_ADAPTER_NAME, MEMORY_ADAPTER_NAME, RABBITMQ_ADAPTER_NAME};
use invalid8_domain::error::Error;
use invalid8_domain::value_objects::{KafkaConfig, RabbitMqConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// EventBus backends
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventBusKind {
    /// In-process fan-out - default
    #[default]
    Memory,
    /// Kafka placeholder
    Kafka,
    /// RabbitMQ placeholder
    RabbitMq,
}

impl EventBusKind {
    /// Every known backend
    pub const ALL: [EventBusKind; 3] = [EventBusKind::Memory, EventBusKind::Kafka, EventBusKind::RabbitMq];

    /// Name used in configuration and reported by the bus
    pub fn as_str(&self) -> &'static str {
        match self {
            EventBusKind::Memory => MEMORY_ADAPTER_NAME,
            EventBusKind::Kafka => KAFKA_ADAPTER_NAME,
            EventBusKind::RabbitMq => RABBITMQ_ADAPTER_NAME,
        }
    }

    /// Names of every known backend
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(EventBusKind::as_str).collect()
    }
}

impl fmt::Display for EventBusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventBusKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownAdapter {
                name: name.to_string(),
                available: Self::names(),
            })
    }
}

/// EventBus configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventBusConfig {
    /// EventBus backend to use
    pub provider: EventBusKind,
    /// Kafka settings (used when `provider = "kafka"`)
    pub kafka: KafkaConfig,
    /// RabbitMQ settings (used when `provider = "rabbitmq"`)
    pub rabbitmq: RabbitMqConfig,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            provider: EventBusKind::Memory,
            kafka: KafkaConfig::new([DEFAULT_KAFKA_BROKER]),
            rabbitmq: RabbitMqConfig::new(DEFAULT_RABBITMQ_URL),
        }
    }
}

impl EventBusConfig {
    /// Config for the in-memory bus (default)
    pub fn memory() -> Self {
        Self::default()
    }

    /// Config for Kafka
    pub fn kafka(kafka: KafkaConfig) -> Self {
        Self {
            provider: EventBusKind::Kafka,
            kafka,
            ..Default::default()
        }
    }

    /// Config for RabbitMQ
    pub fn rabbitmq(rabbitmq: RabbitMqConfig) -> Self {
        Self {
            provider: EventBusKind::RabbitMq,
            rabbitmq,
            ..Default::default()
        }
    }
}
