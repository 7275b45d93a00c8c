use crate::mapper::ParseMode;
use std::path::{Path, PathBuf};

/// What a batch does when one file fails to convert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the failure and move on to the next file
    #[default]
    Continue,
    /// Stop the batch at the first failure
    Abort,
}

/// Settings for converting a directory of hotkey files
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    input_dir: PathBuf,
    output_dir: Option<PathBuf>,
    mode: ParseMode,
    failure_policy: FailurePolicy,
}

impl ConvertOptions {
    /// Options for `input_dir`, writing output next to the input files
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: None,
            mode: ParseMode::default(),
            failure_policy: FailurePolicy::default(),
        }
    }

    /// Write converted files into `dir` instead of the input directory
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn input_path(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_path(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(&self.input_dir)
    }

    pub fn parse_mode(&self) -> ParseMode {
        self.mode
    }

    pub fn policy(&self) -> FailurePolicy {
        self.failure_policy
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::new(".")
    }
}
