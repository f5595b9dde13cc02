//! Tools related to accumulating compile errors while a parse tree is lowered, so that one pass
//! can report every problem in a source unit instead of stopping at the first.

use crate::error::CompileError;

/// Runs `$fn_expr`, moves its errors into `$errors` and yields its value, or evaluates
/// `$error_recovery` (typically `return err(errors)` or `continue`) when there is none.
#[macro_export]
macro_rules! check {
    ($fn_expr: expr, $error_recovery: expr, $errors: ident $(,)?) => {{
        let mut res = $fn_expr;
        $errors.append(&mut res.errors);
        #[allow(clippy::manual_unwrap_or)]
        match res.value {
            None => $error_recovery,
            Some(value) => value,
        }
    }};
}

/// Denotes a non-recoverable state
pub fn err<T>(errors: Vec<CompileError>) -> CompileResult<T> {
    CompileResult {
        value: None,
        errors,
    }
}

/// Denotes a recovered or non-error state
pub fn ok<T>(value: T, errors: Vec<CompileError>) -> CompileResult<T> {
    CompileResult {
        value: Some(value),
        errors,
    }
}

#[derive(Debug, Clone)]
pub struct CompileResult<T> {
    pub value: Option<T>,
    pub errors: Vec<CompileError>,
}

impl<T> CompileResult<T> {
    pub fn is_ok(&self) -> bool {
        self.value.is_some() && self.errors.is_empty()
    }

    pub fn ok(mut self, errors: &mut Vec<CompileError>) -> Option<T> {
        errors.append(&mut self.errors);
        self.value
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> CompileResult<U> {
        match self.value {
            None => err(self.errors),
            Some(value) => ok(f(value), self.errors),
        }
    }

    /// Drops the value when any error was collected, so a unit with errors never yields a
    /// partially built result.
    pub fn strict(self) -> Self {
        if self.errors.is_empty() {
            self
        } else {
            err(self.errors)
        }
    }
}
