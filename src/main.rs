use sunnetna::{init_tracing, load_config, run_api_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    init_tracing();

    tracing::info!("Loaded configuration:\n{}", config);

    run_api_server(config).await?;
    Ok(())
}
