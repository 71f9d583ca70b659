use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use log::{error, info};
use serde::Deserialize;

use jabber_core::corpus::SyllableSource;
use jabber_core::io::{file_stem, list_files};
use jabber_core::model::transition_model::TransitionModel;
use jabber_core::{GeneratorConfig, Grammar, Jabberwocky};

const DATA_DIR: &str = "./data";
const COUNT_ERROR: &str = "Please enter an integer to the number of pseudoword and sentence fields";

/// Query parameters for the `/v1/generate` endpoint.
///
/// Counts arrive as text so that non-integer input is answered with a
/// readable message instead of a generic deserialization error.
#[derive(Deserialize)]
struct GenerateParams {
	language: Option<String>,
	n_words: Option<String>,
	n_sent: Option<String>,
	seed: Option<String>,
}

/// Transition models, built or loaded on first use and kept for the
/// lifetime of the server.
#[derive(Default)]
struct SharedData {
	models: HashMap<Grammar, Arc<TransitionModel>>,
}

impl SharedData {
	fn model(&mut self, grammar: Grammar, limit: usize) -> jabber_core::Result<Arc<TransitionModel>> {
		if let Some(model) = self.models.get(&grammar) {
			return Ok(model.clone());
		}

		let corpus_path = corpus_path(grammar);
		let source = SyllableSource::pre_segmented(grammar, limit);
		let model = Arc::new(TransitionModel::load_or_build(&corpus_path, &source.cache_key(), || {
			source.read(&corpus_path)
		})?);
		self.models.insert(grammar, model.clone());
		Ok(model)
	}
}

/// Generates the sentence text of one request, loading the model if needed.
///
/// Runs on the blocking pool: a first request may build a whole model.
fn generate_text(data: &Mutex<SharedData>, grammar: Grammar, config: GeneratorConfig) -> Result<String, String> {
	let model = {
		let mut shared_data = data.lock().map_err(|_| "Model lock failed".to_owned())?;
		shared_data.model(grammar, config.corpus_limit).map_err(|e| {
			error!("cannot load the {grammar} model: {e}");
			format!("Failed to load model: {e}")
		})?
	};

	let generator = Jabberwocky::new(grammar, model, config);
	let mut rng = generator.rng();
	let sentences = generator.generate(&mut rng).map_err(|e| e.to_string())?;
	Ok(sentences.concat())
}

fn corpus_path(grammar: Grammar) -> PathBuf {
	Path::new(DATA_DIR).join(format!("{}.dat", grammar.language_name().to_lowercase()))
}

fn parse_count(value: &Option<String>, default: usize) -> Result<usize, String> {
	match value {
		None => Ok(default),
		Some(text) => text.trim().parse::<usize>().map_err(|_| COUNT_ERROR.to_owned()),
	}
}

impl GenerateParams {
	/// Turns the query into a grammar and a run configuration.
	fn resolve(&self) -> Result<(Grammar, GeneratorConfig), String> {
		let grammar = match &self.language {
			Some(language) => language.parse::<Grammar>().map_err(|e| e.to_string())?,
			None => return Err("Missing language".into()),
		};

		let defaults = GeneratorConfig::default();
		let seed = match &self.seed {
			None => None,
			Some(s) => Some(s.trim().parse::<u64>().map_err(|_| "Seed must be an unsigned integer".to_owned())?),
		};

		let config = GeneratorConfig {
			n_words: parse_count(&self.n_words, defaults.n_words)?,
			n_sent: parse_count(&self.n_sent, defaults.n_sent)?,
			seed,
			..defaults
		};
		Ok((grammar, config))
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates Jabberwocky sentences for the requested language. The sentences
/// are returned as plain text, one per line.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let (grammar, config) = match query.resolve() {
		Ok(resolved) => resolved,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	let result = web::block(move || generate_text(&data, grammar, config)).await;

	match result {
		Ok(Ok(text)) => HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(text),
		Ok(Err(e)) => HttpResponse::InternalServerError().body(e),
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/languages`
///
/// Lists the languages with a corpus under `./data`.
#[get("/v1/languages")]
async fn get_languages() -> impl Responder {
	let files = match list_files(DATA_DIR, "dat") {
		Ok(files) => files,
		Err(_) => return HttpResponse::InternalServerError().body("Failed to list corpora"),
	};

	let languages: Vec<String> = files
		.iter()
		.filter_map(|path| file_stem(path).ok())
		.filter_map(|stem| stem.parse::<Grammar>().ok())
		.map(|grammar| grammar.language_name().to_owned())
		.collect();
	HttpResponse::Ok().body(languages.join("\n"))
}

/// Main entry point for the server.
///
/// Starts an Actix-web HTTP server on 127.0.0.1:5000. Models are loaded
/// lazily, on the first request for each language.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let shared_data = web::Data::new(Mutex::new(SharedData::default()));
	info!("serving corpora from {DATA_DIR} on 127.0.0.1:5000");

	HttpServer::new(move || {
		let cors = Cors::default().allow_any_origin().allowed_methods(vec!["GET"]);
		App::new()
			.wrap(cors)
			.app_data(shared_data.clone())
			.service(get_generated)
			.service(get_languages)
	})
	.bind(("127.0.0.1", 5000))?
	.run()
	.await
}

#[cfg(test)]
mod tests {
	use super::*;

	fn params(language: &str, n_words: &str, n_sent: &str) -> GenerateParams {
		GenerateParams {
			language: Some(language.to_owned()),
			n_words: Some(n_words.to_owned()),
			n_sent: Some(n_sent.to_owned()),
			seed: None,
		}
	}

	#[test]
	fn test_resolve_counts() {
		let (grammar, config) = params("Ukrainian", "120", "3").resolve().unwrap();
		assert_eq!(grammar, Grammar::Ukrainian);
		assert_eq!(config.n_words, 120);
		assert_eq!(config.n_sent, 3);
	}

	#[test]
	fn test_non_integer_count_is_rejected() {
		assert_eq!(params("Turkish", "many", "3").resolve().unwrap_err(), COUNT_ERROR);
		assert_eq!(params("Turkish", "10", "2.5").resolve().unwrap_err(), COUNT_ERROR);
	}

	#[test]
	fn test_unknown_language_is_rejected() {
		assert!(params("Klingon", "10", "2").resolve().is_err());
	}

	#[test]
	fn test_generate_text_uses_the_loaded_model() {
		let syllables = ["ka", "ta", "ma", "la", "na", "sa", "ba", "da"];
		let corpus: Vec<Vec<String>> = syllables
			.iter()
			.flat_map(|first| syllables.iter().map(move |second| vec![first.to_string(), second.to_string()]))
			.collect();
		let model = Arc::new(TransitionModel::build(&corpus, corpus.len()));

		let mut shared_data = SharedData::default();
		shared_data.models.insert(Grammar::Turkish, model.clone());
		let data = Mutex::new(shared_data);

		let config = GeneratorConfig {
			n_words: 60,
			n_sent: 3,
			seed: Some(4),
			..GeneratorConfig::default()
		};
		let text = generate_text(&data, Grammar::Turkish, config).unwrap();
		assert_eq!(text.lines().count(), 3);
		assert!(text.ends_with(".\n"));

		let cached = data.lock().unwrap().model(Grammar::Turkish, 50_000).unwrap();
		assert!(Arc::ptr_eq(&cached, &model));
	}

	#[test]
	fn test_corpus_path() {
		assert_eq!(corpus_path(Grammar::Turkish), Path::new("./data/turkish.dat"));
	}
}
