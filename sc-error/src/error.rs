use crate::span::Span;

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompileError {
    #[error("Syntax error at {span}: {message}")]
    SyntaxError { message: String, span: Span },
    #[error("Unsupported construct \"{rule}\" at {span}. This form is valid syntax but cannot be lowered yet.")]
    UnsupportedConstruct { rule: String, span: Span },
    #[error("Parameter \"{name}\" is declared more than once in this function.")]
    DuplicateParameter { name: String, span: Span },
    #[error("Nesting exceeds the limit of {limit} levels.")]
    NestingTooDeep { limit: usize, span: Span },
    #[error("Could not read \"{}\": {kind}", .path.display())]
    Io { path: PathBuf, kind: io::ErrorKind },
}

impl CompileError {
    /// The region of source the error refers to. I/O errors have no source and report an empty
    /// span at the start of the unit.
    pub fn span(&self) -> Span {
        use CompileError::*;
        match self {
            SyntaxError { span, .. } => *span,
            UnsupportedConstruct { span, .. } => *span,
            DuplicateParameter { span, .. } => *span,
            NestingTooDeep { span, .. } => *span,
            Io { .. } => Span::new(0, 0, 1, 1),
        }
    }

    pub fn line_col(&self) -> (usize, usize) {
        let span = self.span();
        (span.line, span.col)
    }

    pub fn to_friendly_error_string(&self) -> String {
        self.to_string()
    }
}
