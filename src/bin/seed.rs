use pizza_restaurants_rs::{modules::seed, types::ToContext, utils::config::Config};
use std::process::ExitCode;

async fn run() -> Result<seed::Summary, Box<dyn std::error::Error>> {
    let ctx = Config::from_env()?.to_context().await?;

    Ok(seed::seed(&ctx.db_conn.pool).await?)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(summary) => {
            tracing::info!(
                "Seeded {} restaurants, {} pizzas and {} restaurant pizzas",
                summary.restaurants,
                summary.pizzas,
                summary.restaurant_pizzas
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
