// Demonstration driver: fills a scaling container with the configured seed,
// runs the configured processor over the configured batch and prints both.
//
// usage: procscale [BATCH]    e.g. procscale 1,2,3
//
// Demo output goes to stdout, logs go to stderr.

use std::io::{self, Write};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use procscale::container::ThresholdScalingContainer;
use procscale::error::{ProcscaleError, Result};
use procscale::sample::{create_sample_data, fibonacci};
use procscale::settings::Settings;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_logging(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|e| ProcscaleError::Logging(e.to_string()))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| ProcscaleError::Logging(e.to_string()))
}

fn main() -> Result<()> {
    let mut settings = Settings::load()?;
    if let Some(batch) = std::env::args().nth(1) {
        settings.batch = Settings::parse_batch(&batch)?;
    }
    init_logging(&settings.log_filter)?;
    info!(processor = ?settings.processor, "procscale v{} starting", VERSION);
    debug!(?settings, "settings loaded");

    // ------------- container -------------
    let mut container = ThresholdScalingContainer::new();
    container.extend(settings.seed.iter().copied());
    debug!(%container, "container seeded");
    writeln!(io::stdout(), "Size: {}", container.size())?;

    // ------------- processor -------------
    let mut processor = settings.processor.build();
    processor.process_batch(&settings.batch);
    let mut line = String::new();
    for item in processor.results() {
        line += &(item.to_string() + " ");
    }
    writeln!(io::stdout(), "{}", line)?;
    if settings.print_stats {
        let stats = serde_json::to_string(&processor.stats())?;
        writeln!(io::stdout(), "{}", stats)?;
    }

    // ------------- samples -------------
    if settings.print_samples {
        for record in create_sample_data() {
            writeln!(io::stdout(), "Sample data: {}", record)?;
        }
    }
    if let Some(n) = settings.fibonacci {
        writeln!(io::stdout(), "fibonacci({}) = {}", n, fibonacci(n))?;
    }

    info!(results = processor.results().len(), "procscale done");
    Ok(())
}
