use std::io;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use rvrpapers::{
    catalog::Catalog,
    config::{ArxivConfig, Config},
    fetch::ArxivClient,
    model::Edition,
    report::Report
};

fn main() -> anyhow::Result<()> {
    // logs go to stderr, stdout is the listing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rvrpapers=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    let catalog = Catalog::load(config.catalog_path.as_deref())
        .context("failed to load catalog")?;
    let edition = catalog.edition(&config.edition)?;

    let mut stdout = io::stdout().lock();
    if let Err(e) = Report::write_edition(&mut stdout, edition) {
        warn!(error = %e, "failed to write listing");
    }

    if config.arxiv.probe {
        probe_arxiv(&config.arxiv, edition);
    }
    Ok(())
}

fn probe_arxiv(config: &ArxivConfig, edition: &Edition) {
    let client = match ArxivClient::new(config.clone()) {
        Ok(client) => client,
        Err(e) => {
            warn!(error = %e, "could not build arXiv client");
            return;
        }
    };
    let answered = client.probe(&edition.search_terms, config.max_results);
    info!(answered, attempted = edition.search_terms.len(), "arXiv probe finished");
}
