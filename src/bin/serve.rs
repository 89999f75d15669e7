//! Serve review classifications over HTTP

use std::sync::Arc;

use anyhow::anyhow;
use log::{error, info};
use pico_args::Arguments;
use review_classifier::{
    pipelines::text_classification::{FittedModel, LoadableModel},
    server::{self, ClassificationService, Config},
};

const HELP: &str = "\
Usage: serve [OPTIONS]

Options:
  -h, --help           Print help
  -c, --config         A YAML config file (host, port, model_path)

Serves POST /classify with a body of {\"reviews\": [\"...\", ...]}.
";

#[derive(Debug)]
struct Args {
    config: Option<String>,
}

impl Args {
    fn parse() -> anyhow::Result<Option<Self>> {
        let mut pargs = Arguments::from_env();

        // Help has a higher priority and should be handled separately.
        if pargs.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let args = Args {
            config: pargs.opt_value_from_str(["-c", "--config"])?,
        };

        let remaining = pargs.finish();
        if !remaining.is_empty() {
            return Err(anyhow!("Unexpected arguments: {:?}", remaining));
        }

        Ok(Some(args))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let Some(args) = Args::parse()? else {
        print!("{}", HELP);

        return Ok(());
    };

    let config = match &args.config {
        Some(path) => Config::load(path).await?,
        None => Config::default(),
    };

    // A missing or corrupt artifact is fatal: never start serving without a model
    let model = FittedModel::load(&config.model_path).await.map_err(|e| {
        error!("Unable to load model: {}", e);

        anyhow!("Unable to load model {}: {}", config.model_path.display(), e)
    })?;

    info!("Model ready, classes {:?}", model.classes());

    let service = ClassificationService::new(Arc::new(model));

    server::serve(&config, service).await
}
