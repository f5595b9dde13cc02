use std::path::{Path, PathBuf};

/// Configuration for parsing one source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    pub(crate) file_path: Option<PathBuf>,
    pub(crate) max_depth: usize,
}

impl ParseConfig {
    /// How deep the transformer may recurse into the parse tree before it gives up with
    /// [sc_error::CompileError::NestingTooDeep].
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    pub fn new() -> Self {
        Self {
            file_path: None,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    pub fn with_file_path(self, file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: Some(file_path.into()),
            ..self
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new()
    }
}
