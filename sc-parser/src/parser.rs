use pest::error::{Error, ErrorVariant, InputLocation, LineColLocation};
use pest_derive::Parser;
use sc_error::{CompileError, Span};

#[derive(Parser)]
#[grammar = "sc.pest"]
pub struct ScParser;

/// Converts a pest failure into a [CompileError::SyntaxError] pointing at the first token the
/// grammar could not accept.
pub(crate) fn syntax_error(err: Error<Rule>) -> CompileError {
    let err = err.renamed_rules(|rule| match rule {
        Rule::colon => "`:`".into(),
        Rule::assign => "`=`".into(),
        Rule::semicolon => "`;`".into(),
        Rule::comma => "`,`".into(),
        Rule::lparen => "`(`".into(),
        Rule::rparen => "`)`".into(),
        Rule::arrow => "`->`".into(),
        Rule::lbrace => "`{`".into(),
        Rule::rbrace => "`}`".into(),
        Rule::kw_let => "`let`".into(),
        Rule::kw_fn => "`fn`".into(),
        Rule::EOI => "end of input".into(),
        other => format!("{other:?}"),
    });
    let (line, col) = match err.line_col {
        LineColLocation::Pos(line_col) => line_col,
        LineColLocation::Span(start, _) => start,
    };
    let (start, end) = match err.location {
        InputLocation::Pos(pos) => (pos, pos),
        InputLocation::Span(span) => span,
    };
    let message = match err.variant {
        ErrorVariant::CustomError { message } => message,
        ErrorVariant::ParsingError {
            positives,
            negatives,
        } => format!("expected one of {positives:?}, did not expect any of {negatives:?}"),
    };
    CompileError::SyntaxError {
        message,
        span: Span::new(start, end, line, col),
    }
}
