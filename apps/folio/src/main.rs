use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio::config::Config;
use folio::models::PortfolioConfig;
use folio::render::{render_page, Document, RenderOptions};

fn main() -> Result<()> {
    // Load configuration first so RUST_LOG from .env applies to logging
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting folio v{}", env!("CARGO_PKG_VERSION"));

    // A missing configuration falls back to the shell's default content
    let portfolio = PortfolioConfig::load(&config.portfolio_config).with_context(|| {
        format!(
            "Failed to load portfolio configuration from {}",
            config.portfolio_config.display()
        )
    })?;

    let shell = fs::read_to_string(&config.page_shell).with_context(|| {
        format!("Failed to read page shell {}", config.page_shell.display())
    })?;

    let mut doc = Document::parse(shell);
    let options = RenderOptions {
        publications_per_page: config.publications_per_page,
    };
    let report = render_page(&mut doc, portfolio.as_ref(), &options);

    match &config.output_path {
        Some(path) => {
            fs::write(path, doc.as_str())
                .with_context(|| format!("Failed to write rendered page to {}", path.display()))?;
            info!("Wrote {} ({} fragments)", path.display(), report.total_fragments());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(doc.as_str().as_bytes())
                .context("Failed to write rendered page to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}
