use tokio::io::BufReader;
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ecommerce_cli::{app, config::AppConfig, console::Console};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    // Logs go to stderr so they never interleave with the tables on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run());
    // After an interrupt the stdin reader is still parked in a blocking read;
    // do not wait for it.
    runtime.shutdown_background();
    result
}

async fn run() -> anyhow::Result<()> {
    let (interrupt_tx, interrupt_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("interrupt received");
            let _ = interrupt_tx.send(true);
        }
    });

    let mut console = Console::new(
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
        interrupt_rx,
    );

    app::run(&mut console, AppConfig::from_env()).await?;
    Ok(())
}
