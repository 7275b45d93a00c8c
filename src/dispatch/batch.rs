use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::naming::{classify, HotkeyFile};
use crate::config::{ConvertOptions, FailurePolicy};
use crate::emitter::write_document;
use crate::error::ConvertError;
use crate::extractor::{extract_blocks, extract_blocks_strict};
use crate::mapper::{parse_block, parse_block_with_mode, ParseMode, Record, Variant};

/// One converted file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: PathBuf,
    pub output: PathBuf,
    pub records: usize,
}

/// A file that could not be converted
#[derive(Debug)]
pub struct FileFailure {
    pub input: PathBuf,
    pub error: anyhow::Error,
}

/// Outcome of converting a directory
#[derive(Debug, Default)]
pub struct BatchReport {
    pub conversions: Vec<Conversion>,
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total_records(&self) -> usize {
        self.conversions.iter().map(|c| c.records).sum()
    }

    /// `(output path, record count)` for each converted file
    pub fn outputs(&self) -> Vec<(&Path, usize)> {
        self.conversions
            .iter()
            .map(|c| (c.output.as_path(), c.records))
            .collect()
    }
}

/// Extract and map every block of a hotkey file's text
pub fn convert_text(
    text: &str,
    variant: Variant,
    mode: ParseMode,
) -> Result<Vec<Record>, ConvertError> {
    match mode {
        ParseMode::Lenient => Ok(extract_blocks(text)
            .map(|block| parse_block(block.text, variant))
            .collect()),
        ParseMode::Strict => extract_blocks_strict(text)?
            .into_iter()
            .map(|block| {
                parse_block_with_mode(block.text, variant, mode).map_err(|err| match err {
                    // Block lines count from the start marker's line
                    ConvertError::MalformedLine { line, text } => ConvertError::MalformedLine {
                        line: block.line + line - 1,
                        text,
                    },
                    other => other,
                })
            })
            .collect(),
    }
}

/// Convert one hotkey file into `output_dir`, returning where it went and how many records it held
pub fn convert_file(
    input: &Path,
    file: &HotkeyFile,
    output_dir: &Path,
    mode: ParseMode,
) -> Result<Conversion> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let records = convert_text(&text, file.variant, mode)
        .with_context(|| format!("Failed to parse {}", input.display()))?;
    debug!(
        "[dispatch] {} -> {} blocks as {:?}",
        input.display(),
        records.len(),
        file.variant
    );

    let output = output_dir.join(&file.output_name);
    let handle = File::create(&output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(handle);
    write_document(&mut writer, &file.category, &records)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(Conversion {
        input: input.to_path_buf(),
        output,
        records: records.len(),
    })
}

/// Find legacy hotkey files directly inside `dir`.
///
/// Function files come first, then button files, each sorted by name.
/// Names that don't match either pattern are skipped.
pub fn discover(dir: &Path) -> Result<Vec<(PathBuf, HotkeyFile)>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            warn!("[dispatch] Skipping non UTF-8 name: {}", path.display());
            continue;
        };

        match classify(name) {
            Some(file) => found.push((path.to_path_buf(), file)),
            None => debug!("[dispatch] Skipping {}", name),
        }
    }

    found.sort_by_key(|(_, file)| file.kind);
    Ok(found)
}

/// Convert every hotkey file in the input directory
pub fn convert_directory(options: &ConvertOptions) -> Result<BatchReport> {
    convert_directory_with(options, |_| {})
}

/// Like [`convert_directory`], calling `on_converted` as each file finishes.
///
/// With [`FailurePolicy::Continue`] a failed file is recorded in the report
/// and the batch carries on; with [`FailurePolicy::Abort`] the first failure
/// is returned as the error.
pub fn convert_directory_with<F>(
    options: &ConvertOptions,
    mut on_converted: F,
) -> Result<BatchReport>
where
    F: FnMut(&Conversion),
{
    let input_dir = options.input_path();
    let output_dir = options.output_path();

    let files = discover(input_dir)?;
    info!(
        "[dispatch] Found {} hotkey files in {}",
        files.len(),
        input_dir.display()
    );

    if !files.is_empty() {
        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    }

    let mut report = BatchReport::default();

    for (input, file) in files {
        match convert_file(&input, &file, output_dir, options.parse_mode()) {
            Ok(conversion) => {
                info!(
                    "[dispatch] {} -> {} ({} records)",
                    input.display(),
                    conversion.output.display(),
                    conversion.records
                );
                on_converted(&conversion);
                report.conversions.push(conversion);
            }
            Err(error) if options.policy() == FailurePolicy::Abort => return Err(error),
            Err(error) => {
                warn!("[dispatch] {:#}", error);
                report.failures.push(FileFailure { input, error });
            }
        }
    }

    Ok(report)
}
