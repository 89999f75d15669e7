//! Command line tool to clean (and optionally tokenize) a labeled review dataset

use std::path::PathBuf;

use anyhow::anyhow;
use log::info;
use pico_args::Arguments;
use review_classifier::{
    datasets::{reviews::Dataset, LengthFilter, LoadableDataset},
    preprocessing::{
        stemmer::{snowball, Identity, Stemmer},
        IntoCorpus, Language, StopWordSet, TextCleaner, Tokenizer, Transformer,
    },
};

const HELP: &str = "\
Usage: clean INPUT OUTPUT [OPTIONS]

Arguments:
  INPUT                A CSV file with `text,label` columns
  OUTPUT               Where to write the cleaned CSV file

Options:
  -h, --help           Print help
  -t, --tokenize       Also remove stop words and stem
  -l, --language       Language for stemming and stop words (defaults to 'english')
  -s, --stop-words     A newline-delimited stop-word file, replacing the built-in list
  --no-stem            Remove stop words without stemming
  --min-words          Drop rows with fewer words after processing
  --max-words          Drop rows with more words after processing
";

#[derive(Debug)]
struct Args {
    input: PathBuf,
    output: PathBuf,
    tokenize: bool,
    language: Option<String>,
    stop_words: Option<String>,
    stem: bool,
    min_words: Option<usize>,
    max_words: Option<usize>,
}

impl Args {
    fn parse() -> anyhow::Result<Option<Self>> {
        let mut pargs = Arguments::from_env();

        // Help has a higher priority and should be handled separately.
        if pargs.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let args = Args {
            tokenize: pargs.contains(["-t", "--tokenize"]),
            language: pargs.opt_value_from_str(["-l", "--language"])?,
            stop_words: pargs.opt_value_from_str(["-s", "--stop-words"])?,
            stem: !(pargs.contains("--no-stem")),
            min_words: pargs.opt_value_from_str("--min-words")?,
            max_words: pargs.opt_value_from_str("--max-words")?,
            input: pargs.free_from_str().map_err(|e| match e {
                pico_args::Error::MissingArgument => anyhow!("Missing required argument: INPUT"),
                _ => anyhow!("{}", e),
            })?,
            output: pargs.free_from_str().map_err(|e| match e {
                pico_args::Error::MissingArgument => anyhow!("Missing required argument: OUTPUT"),
                _ => anyhow!("{}", e),
            })?,
        };

        Ok(Some(args))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let Some(args) = Args::parse()? else {
        print!("{}", HELP);

        return Ok(());
    };

    let language = match &args.language {
        Some(name) => Language::try_from(name.as_str())?,
        None => Language::default(),
    };

    let dataset = Dataset::load(&args.input).await?;
    let corpus = TextCleaner.transform(dataset.into_corpus());

    let corpus = if args.tokenize {
        let stop_words = match &args.stop_words {
            Some(path) => StopWordSet::from_file(path).await?,
            None => StopWordSet::for_language(language),
        };

        let stemmer: Box<dyn Stemmer> = if args.stem {
            Box::new(snowball(language))
        } else {
            Box::new(Identity)
        };

        info!(
            "Tokenizing with {} stop words ({}), stemming: {}",
            stop_words.len(),
            language,
            args.stem
        );

        Tokenizer::new(stemmer, stop_words).transform(corpus)
    } else {
        corpus
    };

    let mut dataset = dataset.with_texts(corpus)?;

    if args.min_words.is_some() || args.max_words.is_some() {
        let filter = LengthFilter::new(args.min_words.unwrap_or(0), args.max_words);

        dataset = filter.apply(dataset);
    }

    dataset.save(&args.output).await?;

    Ok(())
}
