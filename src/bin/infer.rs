//! Command line tool for spot-checking a fitted model against labeled reviews

use std::path::PathBuf;

use pico_args::Arguments;
use review_classifier::{
    datasets::{reviews::Dataset, LoadableDataset},
    pipelines::text_classification::infer,
    server::Config,
};

const HELP: &str = "\
Usage: infer [OPTIONS]

Options:
  -h, --help           Print help
  -m, --model          The model artifact to use (defaults to 'models/best_model.json')
  -d, --data-dir       The path to the top-level data directory (defaults to 'data')
  -f, --file           A specific `text,label` CSV file, instead of the test split
  -n, --samples        Number of random rows to classify (defaults to 10)
";

#[derive(Debug)]
struct Args {
    /// Prints the usage menu
    help: bool,

    /// The model artifact to use
    model: Option<PathBuf>,

    /// The top-level data directory
    data_dir: Option<String>,

    /// A specific dataset file
    file: Option<PathBuf>,

    /// Number of samples
    samples: Option<usize>,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut pargs = Arguments::from_env();

    let args = Args {
        help: pargs.contains(["-h", "--help"]),
        model: pargs.opt_value_from_str(["-m", "--model"])?,
        data_dir: pargs.opt_value_from_str(["-d", "--data-dir"])?,
        file: pargs.opt_value_from_str(["-f", "--file"])?,
        samples: pargs.opt_value_from_str(["-n", "--samples"])?,
    };

    Ok(args)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = parse_args()?;

    if args.help {
        println!("{}", HELP);
        return Ok(());
    }

    let artifact = args.model.unwrap_or_else(|| Config::default().model_path);

    let dataset = match &args.file {
        Some(file) => Dataset::load(file).await?,
        None => Dataset::load_split(args.data_dir.as_deref().unwrap_or("data"), "test").await?,
    };

    let samples = dataset.samples(args.samples.unwrap_or(10));
    let input: Vec<String> = samples.iter().map(|item| item.text.clone()).collect();

    // Get model predictions
    let predictions = infer(&artifact, input).await?;

    let mut correct = 0;

    // Print out predictions for each sample
    for (i, (item, prediction)) in samples.iter().zip(&predictions).enumerate() {
        if item.label == prediction.label {
            correct += 1;
        }

        println!(
            "\n=== Item {i} ===\
             \n- Text: {}\
             \n- Class: {}\
             \n- Probabilities: {:?}\
             \n- Expected: {}\
             \n================",
            item.text, prediction.label, prediction.probabilities, item.label
        );
    }

    println!("\n{} of {} correct", correct, predictions.len());

    Ok(())
}
