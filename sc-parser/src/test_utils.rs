use crate::{ast::Program, ast::Type, dump::dump_pair, parse, ParseConfig, Rule, ScParser};

use pest::{iterators::Pair, Parser};

/// Parses `input` as the whole of `rule`, panicking on a syntax error.
pub(crate) fn parse_rule(rule: Rule, input: &str) -> Pair<'_, Rule> {
    let pair = ScParser::parse(rule, input)
        .unwrap_or_else(|e| panic!("{input:?} is not a valid {rule:?}:\n{e}"))
        .next()
        .unwrap();
    assert_eq!(
        pair.as_str(),
        input,
        "{rule:?} did not consume the whole input"
    );
    pair
}

pub(crate) fn dump(rule: Rule, input: &str) -> String {
    dump_pair(&parse_rule(rule, input))
}

pub(crate) fn parse_ok(input: &str) -> Program {
    let res = parse(input);
    assert!(res.errors.is_empty(), "{input:?} failed: {:?}", res.errors);
    res.value.unwrap()
}

pub(crate) fn parse_type(input: &str) -> Type {
    let pair = parse_rule(Rule::type_expr, input);
    let config = ParseConfig::default();
    let mut ctx = crate::transform::Transformer::new(&config);
    let res = ctx.lower_type(pair);
    assert!(res.errors.is_empty(), "{input:?} failed: {:?}", res.errors);
    res.value.unwrap()
}
