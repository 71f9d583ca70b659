use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::grammar::Grammar;

/// Reads a UTF-8 text file and returns its non-empty lines, trimmed.
///
/// - Splits on `\n` / `\r\n`
/// - A byte-order mark on the first line is dropped
pub fn read_lines<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents
		.trim_start_matches('\u{feff}')
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect())
}

/// Builds a path next to `input_path` with another extension.
///
/// Example:
/// `data/turkish.dat` + `"bin"` → `data/turkish.bin`
pub fn build_output_path<P: AsRef<Path>>(input_path: P, output_extension: &str) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}

/// Base filename without extension.
///
/// `"./data/ukrainian.dat"` → `"ukrainian"`
pub fn file_stem<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Paths of the files in `dir` with the given extension, sorted by name.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}

/// Output file name for a grammar: `<Language>_Jabberwockysent.txt`.
pub fn output_file_name(grammar: Grammar) -> String {
	format!("{}_Jabberwockysent.txt", grammar.language_name())
}

/// Writes `sentences` one after another to a UTF-8 file.
///
/// Sentences already end with a newline; nothing is added between them.
pub fn write_sentences<P: AsRef<Path>>(path: P, sentences: &[String]) -> io::Result<()> {
	let mut writer = BufWriter::new(File::create(path)?);
	for sentence in sentences {
		writer.write_all(sentence.as_bytes())?;
	}
	writer.flush()
}
