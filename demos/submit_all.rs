//! Post one metric set for every built-in provider.
//!
//! ```bash
//! TRACE_AUTH_TOKEN=... TRACE_USER_ID=... RUST_LOG=trace_metrics=debug \
//!     cargo run --example submit_all
//! ```
//!
//! `TRACE_API_BASE_URL` / `TRACE_APP_BASE_URL` redirect the requests, e.g. to a
//! local stub server.

use trace_metrics::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let token = std::env::var("TRACE_AUTH_TOKEN")
        .map_err(|_| "TRACE_AUTH_TOKEN must be set to your authorization token")?;
    let mut credentials = Credentials::new(token);
    if let Ok(user_id) = std::env::var("TRACE_USER_ID") {
        credentials = credentials.with_user_id(user_id);
    }

    let client = MetricsClient::new(ClientConfig::from_env())?;

    let metrics = MetricSet::new()
        .with_metric("accuracy", 0.95)
        .with_metric("f1_score", 0.91);
    let metadata = SubmissionMetadata::new("chat-application", "1.0.0", "transportation")
        .with_url("https://api.example.com/chat");

    for provider in Provider::ALL {
        println!("\nPosting {provider} metrics:");
        match client
            .submit(&metrics, &credentials, &metadata, provider)
            .await
        {
            Ok(body) => println!("  accepted: {body}"),
            Err(SubmitError::Http { status, body }) => {
                println!("  rejected with status {status}: {body}")
            }
            Err(err) => println!("  failed ({:?}): {err}", err.category()),
        }
    }

    Ok(())
}
