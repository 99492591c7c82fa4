//! CLI argument definitions for the datagen binary.

use clap::Args;
use datagen_kafka::SinkConfig;
use std::path::PathBuf;
use std::time::Duration;

/// Kafka connection options.
#[derive(Args, Clone, Debug)]
pub struct BrokerOpts {
    /// Kafka brokers (comma-separated, e.g., "localhost:9092")
    #[arg(long, env = "KAFKA_BROKERS", default_value = "localhost:9092")]
    pub brokers: String,

    /// SASL/PLAIN username (credentials are applied only when both username
    /// and password are set)
    #[arg(long, env = "KAFKA_SASL_USERNAME")]
    pub sasl_username: Option<String>,

    /// SASL/PLAIN password
    #[arg(long, env = "KAFKA_SASL_PASSWORD")]
    pub sasl_password: Option<String>,

    /// Pending unacknowledged publishes allowed before publish blocks
    #[arg(long, default_value = "1")]
    pub max_in_flight: usize,

    /// Timeout for the initial broker metadata fetch in milliseconds
    #[arg(long, default_value = "10000")]
    pub connect_timeout_ms: u64,
}

impl BrokerOpts {
    /// Build the sink configuration from these options.
    pub fn to_sink_config(&self) -> SinkConfig {
        SinkConfig {
            brokers: self.brokers.clone(),
            username: self.sasl_username.clone(),
            password: self.sasl_password.clone(),
            max_in_flight: self.max_in_flight,
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            ..SinkConfig::default()
        }
    }
}

/// Generation and publishing options.
#[derive(Args, Clone, Debug)]
pub struct DatagenOpts {
    /// Path to schema YAML file
    #[arg(long, short = 's')]
    pub schema: PathBuf,

    /// Topic template; segments may reference record fields
    /// (e.g., "sensors/{region}/reading")
    #[arg(long, env = "DATAGEN_TOPIC")]
    pub topic: String,

    /// Key specifier; a literal or a single "{field}" placeholder. When
    /// omitted, messages are sent unkeyed and the broker assigns partitions
    #[arg(long, env = "DATAGEN_KEY")]
    pub key: Option<String>,

    /// Delay between publishes in milliseconds
    #[arg(long, default_value = "1000")]
    pub publish_delay_ms: u64,

    /// Random seed for deterministic generation (same seed = same data);
    /// a seed in the schema file takes precedence
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Stop after publishing this many messages (default: run until interrupted)
    #[arg(long)]
    pub count: Option<u64>,

    /// How long to wait for in-flight publishes on shutdown, in milliseconds
    #[arg(long, default_value = "500")]
    pub termination_grace_ms: u64,
}

impl DatagenOpts {
    /// Delay between publishes.
    pub fn publish_delay(&self) -> Duration {
        Duration::from_millis(self.publish_delay_ms)
    }

    /// Grace period for draining in-flight publishes on shutdown.
    pub fn termination_grace(&self) -> Duration {
        Duration::from_millis(self.termination_grace_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        datagen: DatagenOpts,

        #[command(flatten)]
        broker: BrokerOpts,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::parse_from([
            "datagen",
            "--schema",
            "schemas/sensors.yaml",
            "--topic",
            "sensors/{region}/reading",
        ]);

        assert_eq!(cli.datagen.key, None);
        assert_eq!(cli.datagen.publish_delay_ms, 1000);
        assert_eq!(cli.datagen.seed, 42);
        assert_eq!(cli.datagen.count, None);
        assert_eq!(cli.datagen.termination_grace_ms, 500);
        assert_eq!(cli.broker.max_in_flight, 1);
    }

    #[test]
    fn test_explicit_values() {
        let cli = TestCli::parse_from([
            "datagen",
            "-s",
            "schemas/orders.yaml",
            "--topic",
            "orders",
            "--key",
            "{order_id}",
            "--publish-delay-ms",
            "250",
            "--count",
            "1000",
            "--brokers",
            "broker-1:9092,broker-2:9092",
        ]);

        assert_eq!(cli.datagen.schema, PathBuf::from("schemas/orders.yaml"));
        assert_eq!(cli.datagen.key.as_deref(), Some("{order_id}"));
        assert_eq!(cli.datagen.publish_delay(), Duration::from_millis(250));
        assert_eq!(cli.datagen.count, Some(1000));
        assert_eq!(cli.broker.brokers, "broker-1:9092,broker-2:9092");
    }

    #[test]
    fn test_to_sink_config() {
        let opts = BrokerOpts {
            brokers: "kafka:9092".to_string(),
            sasl_username: Some("datagen".to_string()),
            sasl_password: Some("secret".to_string()),
            max_in_flight: 4,
            connect_timeout_ms: 2_000,
        };

        let config = opts.to_sink_config();
        assert_eq!(config.brokers, "kafka:9092");
        assert_eq!(config.username.as_deref(), Some("datagen"));
        assert_eq!(config.max_in_flight, 4);
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.message_timeout, Duration::from_secs(30));
    }
}
