//! Lowering of the pest parse tree into the typed AST.

use crate::{
    ast::{Expression, FnDef, NodeId, Program, Statement, StmtLet, Type},
    dump::dump_pair,
    ParseConfig, Rule,
};

use pest::iterators::Pair;
use sc_error::{err, CompileError, CompileResult, Span};
use tracing::{error, trace};

/// A node produced by lowering a single parse tree node.
#[derive(Debug)]
pub enum AstNode {
    Program(Program),
    Statement(Statement),
}

impl From<Statement> for AstNode {
    fn from(stmt: Statement) -> Self {
        AstNode::Statement(stmt)
    }
}

impl From<Expression> for AstNode {
    fn from(expr: Expression) -> Self {
        AstNode::Statement(Statement::Expression(expr))
    }
}

/// Transforms a parse tree rooted at `pair` into the corresponding AST node.
///
/// Node ids start from zero for each call.
pub fn transform(pair: Pair<'_, Rule>, config: &ParseConfig) -> CompileResult<AstNode> {
    Transformer::new(config).lower(pair)
}

/// State carried through one lowering pass.
pub(crate) struct Transformer<'cfg> {
    config: &'cfg ParseConfig,
    next_id: u32,
    depth: usize,
}

impl<'cfg> Transformer<'cfg> {
    pub(crate) fn new(config: &'cfg ParseConfig) -> Self {
        Transformer {
            config,
            next_id: 0,
            depth: 0,
        }
    }

    pub(crate) fn node_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn lower(&mut self, pair: Pair<'_, Rule>) -> CompileResult<AstNode> {
        if self.depth >= self.config.max_depth {
            let span = span_of(&pair);
            error!(limit = self.config.max_depth, %span, "nesting too deep");
            return err(vec![CompileError::NestingTooDeep {
                limit: self.config.max_depth,
                span,
            }]);
        }
        self.depth += 1;
        let res = self.lower_rule(pair);
        self.depth -= 1;
        res
    }

    fn lower_rule(&mut self, pair: Pair<'_, Rule>) -> CompileResult<AstNode> {
        let rule = pair.as_rule();
        trace!(?rule, depth = self.depth, "lowering");
        match rule {
            Rule::program | Rule::block => {
                Program::parse_from_pair(pair, self).map(AstNode::Program)
            }
            Rule::statement => {
                let inner = pair
                    .into_inner()
                    .next()
                    .expect("a statement always wraps exactly one form");
                self.lower(inner)
            }
            Rule::let_typed_uninitialized | Rule::let_fn_def => {
                StmtLet::parse_from_pair(pair, self).map(|stmt| Statement::Let(stmt).into())
            }
            Rule::type_expr | Rule::reftype | Rule::fn_type => {
                Type::parse_from_pair(pair, self).map(|ty| Expression::Type(ty).into())
            }
            Rule::fn_def => {
                FnDef::parse_from_pair(pair, self).map(|fn_def| Expression::FnDef(fn_def).into())
            }
            Rule::let_initialized | Rule::int_literal => self.unsupported(pair),
            Rule::fn_type_params | Rule::fn_def_params | Rule::ident | Rule::primitive => {
                unreachable!("`{rule:?}` is consumed by the production that contains it")
            }
            Rule::EOI
            | Rule::WHITESPACE
            | Rule::COMMENT
            | Rule::ident_char
            | Rule::kw_let
            | Rule::kw_fn
            | Rule::colon
            | Rule::assign
            | Rule::semicolon
            | Rule::comma
            | Rule::lparen
            | Rule::rparen
            | Rule::arrow
            | Rule::lbrace
            | Rule::rbrace
            | Rule::let_keyword
            | Rule::fn_keyword
            | Rule::ascribe
            | Rule::bind
            | Rule::terminate
            | Rule::separate
            | Rule::open_paren
            | Rule::close_paren
            | Rule::returns
            | Rule::open_block
            | Rule::close_block => unreachable!("`{rule:?}` never heads a parse tree node"),
        }
    }

    fn unsupported(&self, pair: Pair<'_, Rule>) -> CompileResult<AstNode> {
        let rule = pair.as_rule();
        let span = span_of(&pair);
        error!(
            ?rule,
            %span,
            path = ?self.config.file_path,
            tree = ?dump_pair(&pair),
            "unsupported construct"
        );
        err(vec![CompileError::UnsupportedConstruct {
            rule: format!("{rule:?}"),
            span,
        }])
    }

    pub(crate) fn lower_program(&mut self, pair: Pair<'_, Rule>) -> CompileResult<Program> {
        self.lower(pair).map(|node| match node {
            AstNode::Program(program) => program,
            other => unreachable!("expected a program, lowered {other:?}"),
        })
    }

    pub(crate) fn lower_statement(&mut self, pair: Pair<'_, Rule>) -> CompileResult<Statement> {
        self.lower(pair).map(|node| match node {
            AstNode::Statement(stmt) => stmt,
            other => unreachable!("expected a statement, lowered {other:?}"),
        })
    }

    pub(crate) fn lower_expression(&mut self, pair: Pair<'_, Rule>) -> CompileResult<Expression> {
        self.lower(pair).map(|node| match node {
            AstNode::Statement(Statement::Expression(expr)) => expr,
            other => unreachable!("expected an expression, lowered {other:?}"),
        })
    }

    pub(crate) fn lower_type(&mut self, pair: Pair<'_, Rule>) -> CompileResult<Type> {
        self.lower(pair).map(|node| match node {
            AstNode::Statement(Statement::Expression(Expression::Type(ty))) => ty,
            other => unreachable!("expected a type, lowered {other:?}"),
        })
    }
}

pub(crate) fn span_of(pair: &Pair<'_, Rule>) -> Span {
    let span = pair.as_span();
    let (line, col) = span.start_pos().line_col();
    Span::new(span.start(), span.end(), line, col)
}
