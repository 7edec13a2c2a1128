use std::{net::TcpListener, sync::Arc};

use anyhow::Context;
use carrier_scrape::{
    configuration::get_configuration,
    services::{CsvExporter, Droid},
    startup::run,
};
use env_logger::Env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().context("Failed to read configuration.")?;

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener =
        TcpListener::bind(&address).with_context(|| format!("Failed to bind {}", address))?;

    let droid = Droid::new(configuration.scraper.clone())?;
    let exporter = CsvExporter::new(configuration.export.path);

    log::info!(
        "Serving on http://{} (webdriver at {})",
        address,
        configuration.scraper.webdriver_url
    );

    run(listener, Arc::new(droid), exporter)?.await?;

    Ok(())
}
