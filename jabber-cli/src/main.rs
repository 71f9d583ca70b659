use std::path::PathBuf;

use clap::Parser;
use log::info;

use jabber_core::corpus::SyllableSource;
use jabber_core::io::{output_file_name, write_sentences};
use jabber_core::model::transition_model::TransitionModel;
use jabber_core::{GeneratorConfig, Grammar, Jabberwocky};

/// Generates Jabberwocky sentences from a syllabified corpus.
#[derive(Parser, Debug)]
#[command(name = "jabberwocky", version, about)]
struct Args {
    /// Target language: turkish (tr) or ukrainian (uk)
    #[arg(short, long)]
    language: Grammar,

    /// Corpus file, one syllabified word per line (defaults to ./data/<language>.dat)
    #[arg(short, long)]
    corpus: Option<PathBuf>,

    /// JSON configuration file; the flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of pseudowords to generate
    #[arg(short = 'w', long)]
    n_words: Option<usize>,

    /// Number of sentences to generate
    #[arg(short = 's', long)]
    n_sent: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Directory the sentence file is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Rebuild the model even if a cached one exists
    #[arg(long)]
    no_cache: bool,
}

impl Args {
    fn generator_config(&self) -> jabber_core::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_json_file(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(n_words) = self.n_words {
            config.n_words = n_words;
        }
        if let Some(n_sent) = self.n_sent {
            config.n_sent = n_sent;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }

    fn corpus_path(&self) -> PathBuf {
        self.corpus.clone().unwrap_or_else(|| {
            PathBuf::from("./data").join(format!("{}.dat", self.language.language_name().to_lowercase()))
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = args.generator_config()?;
    let corpus_path = args.corpus_path();
    let source = SyllableSource::pre_segmented(args.language, config.corpus_limit);

    // The cache sits next to the corpus (corpus.dat -> corpus.bin)
    let model = if args.no_cache {
        let (sequences, stem_count) = source.read(&corpus_path)?;
        TransitionModel::build_parallel(&sequences, stem_count)?
    } else {
        TransitionModel::load_or_build(&corpus_path, &source.cache_key(), || source.read(&corpus_path))?
    };
    info!(
        "model ready: {} initial syllables, {} states",
        model.initial_weights().len(),
        model.matrix().len()
    );

    let generator = Jabberwocky::new(args.language, model, config);
    let mut rng = generator.rng();
    let sentences = generator.generate(&mut rng)?;

    for sentence in &sentences {
        print!("{sentence}");
    }

    let output = args.output_dir.join(output_file_name(args.language));
    write_sentences(&output, &sentences)?;
    println!("Wrote {} sentences to {}", sentences.len(), output.display());

    Ok(())
}
