use special_today::{resolve_dataset_path, router, AppState, Dataset};
use std::{env, net::SocketAddr};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let dataset_path = resolve_dataset_path();
    let dataset = match Dataset::load(&dataset_path).await {
        Ok(dataset) => dataset,
        Err(err) => {
            error!("cannot start without dataset {}: {err}", dataset_path.display());
            return Err(err.into());
        }
    };
    info!(
        "loaded {} special day records from {}",
        dataset.len(),
        dataset_path.display()
    );

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let site_url = env::var("SITE_URL").unwrap_or_else(|_| format!("http://localhost:{port}"));

    let app = router(AppState::new(dataset, site_url));
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
