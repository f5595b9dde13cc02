use super::{Expression, NodeId, Type};
use crate::{transform::Transformer, Rule};

use pest::iterators::Pair;
use sc_error::CompileResult;

/// A `let` binding. Exactly one of its type and its value is resolved; the constructors below
/// are the only way to build one.
#[derive(Debug)]
pub struct StmtLet {
    pub(crate) id: NodeId,
    pub(crate) name: String,
    pub(crate) ty: Option<Type>,
    pub(crate) value: Option<Expression>,
}

impl StmtLet {
    /// `let name: ty;`
    pub(crate) fn typed(id: NodeId, name: String, ty: Type) -> Self {
        StmtLet {
            id,
            name,
            ty: Some(ty),
            value: None,
        }
    }

    /// `let name = value;`
    pub(crate) fn bound(id: NodeId, name: String, value: Expression) -> Self {
        StmtLet {
            id,
            name,
            ty: None,
            value: Some(value),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> Option<&Type> {
        self.ty.as_ref()
    }

    pub fn value(&self) -> Option<&Expression> {
        self.value.as_ref()
    }

    pub(crate) fn parse_from_pair(
        pair: Pair<'_, Rule>,
        ctx: &mut Transformer,
    ) -> CompileResult<Self> {
        let id = ctx.node_id();
        let rule = pair.as_rule();
        let mut parts = pair.into_inner();
        let name = parts
            .next()
            .expect("a let always names its binding")
            .as_str()
            .to_string();
        let rhs = parts
            .next()
            .expect("a let always has a type or a value");
        match rule {
            Rule::let_typed_uninitialized => ctx
                .lower_type(rhs)
                .map(|ty| StmtLet::typed(id, name, ty)),
            Rule::let_fn_def => ctx
                .lower_expression(rhs)
                .map(|value| StmtLet::bound(id, name, value)),
            rule => unreachable!("`{rule:?}` is not a let production"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{PrimitiveKind, Statement},
        test_utils::parse_ok,
    };
    use assert_matches::assert_matches;

    fn only_let(source: &str) -> StmtLet {
        let program = parse_ok(source);
        match program.statements {
            mut statements if statements.len() == 1 => match statements.remove(0) {
                Statement::Let(stmt) => stmt,
                other => panic!("expected a let, got {other:?}"),
            },
            statements => panic!("expected one statement, got {statements:?}"),
        }
    }

    #[test]
    fn typed_let_has_no_value() {
        let stmt = only_let("let x: u32;");
        assert_eq!(stmt.name(), "x");
        assert!(stmt.value().is_none());
        assert_matches!(
            stmt.ty(),
            Some(Type::Expr(ty)) if ty.primitive_kind() == Some(PrimitiveKind::U32) && !ty.is_reference()
        );
    }

    #[test]
    fn fn_let_has_no_type() {
        let stmt = only_let("let f = fn(a: i32) -> i32;");
        assert_eq!(stmt.name(), "f");
        assert!(stmt.ty().is_none());
        assert_matches!(stmt.value(), Some(Expression::FnDef(_)));
    }

    #[test]
    fn exactly_one_side_is_resolved() {
        let program = parse_ok(
            "let a: &u16; let b = fn() -> u8; let c: fn(i8) -> i8; let d = fn(x: u8) -> u8 {};",
        );
        for stmt in program.statements() {
            let Statement::Let(stmt) = stmt else {
                panic!("expected a let, got {stmt:?}");
            };
            assert!(stmt.ty().is_some() != stmt.value().is_some(), "{stmt:?}");
        }
    }

    #[test]
    fn underscored_and_alphanumeric_names() {
        assert_eq!(only_let("let _tmp_1: i8;").name(), "_tmp_1");
        assert_eq!(only_let("let fnord: i8;").name(), "fnord");
    }
}
