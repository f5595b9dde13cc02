//! Parser and typed AST for `sc`.
//!
//! Source text is matched against the pest grammar in `sc.pest`, and the resulting parse tree
//! is lowered into the [ast] node model by the transformer.

pub mod ast;
mod config;
mod dump;
mod parser;
pub mod projection;
mod transform;

#[cfg(test)]
mod test_utils;

pub use config::ParseConfig;
pub use dump::dump_pair;
pub use parser::{Rule, ScParser};
pub use projection::{as_dict, AsDict};
pub use sc_error::{CompileError, CompileResult, Span};
pub use transform::{transform, AstNode};

use ast::Program;
use pest::{iterators::Pair, Parser};
use sc_error::err;
use std::{fs, path::Path};
use tracing::debug;

/// Parses a source unit with the default configuration.
pub fn parse(input: &str) -> CompileResult<Program> {
    parse_with_config(input, &ParseConfig::default())
}

/// Reads and parses the source unit at `path`.
pub fn parse_file(path: impl AsRef<Path>) -> CompileResult<Program> {
    let path = path.as_ref();
    let input = match fs::read_to_string(path) {
        Ok(input) => input,
        Err(e) => {
            return err(vec![CompileError::Io {
                path: path.to_path_buf(),
                kind: e.kind(),
            }])
        }
    };
    parse_with_config(&input, &ParseConfig::default().with_file_path(path))
}

/// Parses a source unit. The resulting [Program] is only present when no error was found.
pub fn parse_with_config(input: &str, config: &ParseConfig) -> CompileResult<Program> {
    debug!(path = ?config.file_path, len = input.len(), "parsing source unit");
    let root = match parse_tree(input) {
        Ok(root) => root,
        Err(e) => {
            debug!(error = %e, "syntax error");
            return err(vec![e]);
        }
    };

    let res = transform(root, config)
        .map(|node| match node {
            AstNode::Program(program) => program,
            other => unreachable!("a program lowered to {other:?}"),
        })
        .strict();
    match &res.value {
        Some(program) => debug!(statements = program.statements().len(), "parsed source unit"),
        None => debug!(errors = res.errors.len(), "source unit has errors"),
    }
    res
}

/// Runs the grammar over `input` and returns the `program` node of the parse tree.
pub fn parse_tree(input: &str) -> Result<Pair<'_, Rule>, CompileError> {
    let mut pairs = ScParser::parse(Rule::program, input).map_err(parser::syntax_error)?;
    Ok(pairs
        .next()
        .expect("a successful parse always yields the `program` node"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io;

    #[test]
    fn syntax_errors_yield_no_program() {
        let res = parse("let x ;");
        assert!(res.value.is_none());
        assert_matches!(
            res.errors.as_slice(),
            [CompileError::SyntaxError { span, .. }] if (span.line, span.col) == (1, 7)
        );
    }

    #[test]
    fn missing_files_are_io_errors() {
        let res = parse_file("does/not/exist.sc");
        assert!(res.value.is_none());
        assert_matches!(
            res.errors.as_slice(),
            [CompileError::Io { path, kind: io::ErrorKind::NotFound }]
                if path == Path::new("does/not/exist.sc")
        );
    }

    #[test]
    fn transforms_are_independent() {
        let first = parse("let a: u8;").value.unwrap();
        let second = parse("let a: u8;").value.unwrap();
        assert_eq!(first.id(), second.id());
        assert_eq!(first.to_string(), second.to_string());
    }
}
