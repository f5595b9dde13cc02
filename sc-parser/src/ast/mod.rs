//! The typed AST a `sc` source unit lowers to.
//!
//! Nodes are immutable once built. Every node carries a [NodeId] that is unique within the
//! parse that produced it; two nodes are the same node only if their ids are equal.

mod fn_def;
mod stmt_let;
mod type_expr;

pub use fn_def::FnDef;
pub use stmt_let::StmtLet;
pub use type_expr::{FnTypeExpr, PrimitiveKind, Type, TypeBase, TypeExpr};

use crate::{transform::Transformer, Rule};

use pest::iterators::Pair;
use sc_error::{check, err, ok, CompileResult};

/// Identity of a node within one parsed unit, assigned in pre-order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) const fn new(index: u32) -> Self {
        NodeId(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// An ordered sequence of statements: a whole source unit or a function body.
#[derive(Debug)]
pub struct Program {
    pub(crate) id: NodeId,
    pub(crate) statements: Vec<Statement>,
}

impl Program {
    pub(crate) fn empty(id: NodeId) -> Self {
        Program {
            id,
            statements: vec![],
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Lowers a `program` or a `block`.
    pub(crate) fn parse_from_pair(
        pair: Pair<'_, Rule>,
        ctx: &mut Transformer,
    ) -> CompileResult<Self> {
        let id = ctx.node_id();
        let mut errors = Vec::new();
        let mut statements = Vec::new();
        for pair in pair.into_inner() {
            if pair.as_rule() == Rule::EOI {
                continue;
            }
            let statement = check!(ctx.lower_statement(pair), continue, errors);
            statements.push(statement);
        }
        if !errors.is_empty() {
            return err(errors);
        }
        ok(Program { id, statements }, errors)
    }
}

#[derive(Debug)]
pub enum Statement {
    Let(StmtLet),
    Expression(Expression),
}

impl Statement {
    pub fn id(&self) -> NodeId {
        match self {
            Statement::Let(stmt) => stmt.id(),
            Statement::Expression(expr) => expr.id(),
        }
    }
}

#[derive(Debug)]
pub enum Expression {
    Type(Type),
    FnDef(FnDef),
}

impl Expression {
    pub fn id(&self) -> NodeId {
        match self {
            Expression::Type(ty) => ty.id(),
            Expression::FnDef(fn_def) => fn_def.id(),
        }
    }
}
