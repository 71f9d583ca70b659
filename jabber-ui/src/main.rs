use std::time::Duration;

use eframe::{egui, Frame};
use egui::Context;
use log::{error, info};

use reqwest::blocking::Client;

use jabber_core::Grammar;
use jabber_core::io::{output_file_name, write_sentences};

const COUNT_ERROR: &str = "Please enter an integer to the number of pseudoword and sentence fields";

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    ///
    /// Building a large model on first use can take a while, hence the
    /// generous timeout.
    fn new() -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(120, 0))
            .build()?;
        Ok(Self { client })
    }

    /// Sends a GET request to `/v1/generate` with query parameters.
    fn get_generated(&self, params: &[(&str, String)]) -> reqwest::Result<String> {
        let response = self.client
            .get("http://127.0.0.1:5000/v1/generate")
            .query(params)
            .send()?
            .error_for_status()?;
        response.text()
    }

    /// Sends a GET request to `/v1/languages`.
    fn get_languages(&self) -> reqwest::Result<String> {
        let response = self.client
            .get("http://127.0.0.1:5000/v1/languages")
            .send()?
            .error_for_status()?;
        response.text()
    }
}

/// Dialog state (MUST persist between frames in egui).
struct GeneratorUI {
    rest: RESTContext,
    languages: Vec<Grammar>,
    language: Grammar,

    // Kept as text so that non-integer input can be reported
    n_words: String,
    n_sent: String,

    show_count_error: bool,
    status: Option<String>,
    sentences: String,
}

/// Parses both count fields; `None` unless both are integers.
fn parse_counts(n_words: &str, n_sent: &str) -> Option<(usize, usize)> {
    let n_words = n_words.trim().parse::<usize>().ok()?;
    let n_sent = n_sent.trim().parse::<usize>().ok()?;
    Some((n_words, n_sent))
}

impl GeneratorUI {
    /// Initializes the dialog with the defaults: 300 pseudowords, 5 sentences.
    fn new() -> reqwest::Result<Self> {
        let mut generator = Self {
            rest: RESTContext::new()?,
            languages: Grammar::ALL.to_vec(),
            language: Grammar::Turkish,
            n_words: "300".to_owned(),
            n_sent: "5".to_owned(),
            show_count_error: false,
            status: None,
            sentences: String::new(),
        };
        generator.get_languages();
        Ok(generator)
    }

    /// Restricts the language choice to the corpora the server has.
    fn get_languages(&mut self) {
        match self.rest.get_languages() {
            Ok(text) => {
                let available: Vec<Grammar> = text
                    .lines()
                    .filter_map(|line| line.trim().parse::<Grammar>().ok())
                    .collect();
                if !available.is_empty() {
                    self.language = available[0];
                    self.languages = available;
                }
            }
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    /// Validates the fields, asks the server for sentences and saves them.
    fn generate(&mut self) {
        let Some((n_words, n_sent)) = parse_counts(&self.n_words, &self.n_sent) else {
            self.show_count_error = true;
            return;
        };

        let params = [
            ("language", self.language.language_name().to_owned()),
            ("n_words", n_words.to_string()),
            ("n_sent", n_sent.to_string()),
        ];
        let text = match self.rest.get_generated(&params) {
            Ok(text) => text,
            Err(e) => {
                self.status = Some(format!("Error: {e}"));
                return;
            }
        };

        let sentences: Vec<String> = text.lines().map(|line| format!("{line}\n")).collect();
        let file_name = output_file_name(self.language);
        match write_sentences(&file_name, &sentences) {
            Ok(()) => {
                info!("saved {} sentences to {file_name}", sentences.len());
                self.status = Some(format!("Saved to {file_name}"));
            }
            Err(e) => {
                error!("cannot write {file_name}: {e}");
                self.status = Some(format!("Error: {e}"));
            }
        }
        self.sentences = text;
    }
}

impl eframe::App for GeneratorUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        if self.show_count_error {
            egui::Window::new("error message")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(COUNT_ERROR);
                    if ui.button("OK").clicked() {
                        self.show_count_error = false;
                    }
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Grid::new("generator_grid")
                .num_columns(2)
                .spacing([20.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.label("Language");
                    egui::ComboBox::from_id_salt("language")
                        .selected_text(self.language.language_name())
                        .show_ui(ui, |ui| {
                            for language in &self.languages {
                                ui.selectable_value(&mut self.language, *language, language.language_name());
                            }
                        });
                    ui.end_row();

                    ui.label("Number of pseudowords to be generated");
                    ui.text_edit_singleline(&mut self.n_words);
                    ui.end_row();

                    ui.label("Number of sentences to be generated");
                    ui.text_edit_singleline(&mut self.n_sent);
                    ui.end_row();
                });

            ui.separator();

            let enabled = !self.show_count_error;
            if ui
                .add_enabled(enabled, egui::Button::new("Generate").min_size([200.0, 40.0].into()))
                .clicked()
            {
                self.generate();
            }

            if let Some(status) = &self.status {
                ui.label(status);
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                if self.sentences.is_empty() {
                    ui.label("Click Generate to start");
                } else {
                    ui.label(&self.sentences);
                }
            });
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 420.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Jabberwocky Generator",
        options,
        Box::new(|_| Ok(Box::new(GeneratorUI::new()?))),
    )
}
