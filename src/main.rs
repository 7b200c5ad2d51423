mod application;
mod client;
mod dto;
mod error;
mod service;

use application::{ApplicationEnv, TracingEnv};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Ignore error because .env file is not required
    // as long as env variables are set
    let _ = dotenvy::dotenv();

    let tracing_env = TracingEnv::parse();
    application::setup_tracing(&tracing_env)?;

    let env = match ApplicationEnv::parse() {
        Ok(env) => env,
        Err(err) => {
            // notifier may be unconfigured, only log
            tracing::error!(%err, "critical: cannot start without configuration");
            return Err(err.into());
        }
    };

    let polling_service = application::create_polling_service(&env)?;
    polling_service.run().await;

    Ok(())
}
