//! Command-line interface for datagen
//!
//! # Usage Examples
//!
//! ```bash
//! # Publish sensor readings once per second until Ctrl+C
//! datagen \
//!   --schema schemas/sensors.yaml \
//!   --topic "sensors/{region}/reading" \
//!   --key "{sensor_id}"
//!
//! # Publish a fixed number of order events, keyed by order id
//! datagen \
//!   --schema schemas/orders.yaml \
//!   --topic orders \
//!   --key "{order_id}" \
//!   --publish-delay-ms 0 \
//!   --count 10000
//!
//! # Authenticated brokers via environment
//! KAFKA_BROKERS=broker-1:9092 \
//! KAFKA_SASL_USERNAME=datagen \
//! KAFKA_SASL_PASSWORD=secret \
//! datagen --schema schemas/sensors.yaml --topic "sensors/{region}/reading"
//! ```
//!
//! The topic template and key specifier may reference schema fields with
//! `{field}` placeholders. Both are validated against the schema before the
//! generator is built or Kafka is contacted, so a typo in a template fails
//! immediately instead of after connecting.

use anyhow::Context;
use clap::Parser;
use datagen::config::{BrokerOpts, DatagenOpts};
use datagen::run::PublishLoop;
use datagen::shutdown::install_ctrl_c_handler;
use datagen_core::Schema;
use datagen_generator::DataGenerator;
use datagen_kafka::KafkaSink;
use datagen_template::{validate_key_spec, validate_topic_template};

#[derive(Parser)]
#[command(name = "datagen")]
#[command(about = "Generate randomized records and publish them to Kafka topics")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    datagen: DatagenOpts,

    #[command(flatten)]
    broker: BrokerOpts,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let schema = Schema::from_file(&cli.datagen.schema)
        .with_context(|| format!("Failed to load schema from {:?}", cli.datagen.schema))?;

    // Templates are checked before the generator or the connection exist,
    // so a configuration error never costs broker resources
    validate_topic_template(&cli.datagen.topic, &schema)
        .with_context(|| format!("Invalid topic template '{}'", cli.datagen.topic))?;
    if let Some(key) = &cli.datagen.key {
        validate_key_spec(key, &schema)
            .with_context(|| format!("Invalid key specifier '{key}'"))?;
    }

    let seed = schema.seed.unwrap_or(cli.datagen.seed);
    let generator =
        DataGenerator::new(schema, seed).context("Invalid generator configuration in schema")?;

    tracing::info!(
        "Publishing records to '{}' every {}ms (seed={})",
        cli.datagen.topic,
        cli.datagen.publish_delay_ms,
        seed
    );

    let sink = KafkaSink::connect(&cli.broker.to_sink_config())
        .with_context(|| format!("Failed to connect to Kafka at {}", cli.broker.brokers))?;

    let mut publish_loop = PublishLoop::new(generator, sink, cli.datagen.topic.clone())
        .with_publish_delay(cli.datagen.publish_delay())
        .with_termination_grace(cli.datagen.termination_grace());
    if let Some(key) = &cli.datagen.key {
        publish_loop = publish_loop.with_key_spec(key.clone());
    }
    if let Some(count) = cli.datagen.count {
        publish_loop = publish_loop.with_message_count(count);
    }

    install_ctrl_c_handler(&publish_loop.shutdown_token());

    let stats = publish_loop.run().await?;

    tracing::info!(
        "Done: {} messages in {:?} ({:.2} msg/sec)",
        stats.messages_published,
        stats.total_duration,
        stats.messages_per_second()
    );

    Ok(())
}
