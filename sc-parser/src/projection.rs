//! Inspectable views of the AST: a structural JSON projection used by fixtures and a compact
//! textual rendering for logs and error output.

use crate::ast::{
    Expression, FnDef, FnTypeExpr, PrimitiveKind, Program, Statement, StmtLet, Type, TypeBase,
    TypeExpr,
};

use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};
use std::fmt;

/// Projects a node onto a JSON value. The node's kind is stored under `"node"`, unresolved
/// fields project to `null`.
pub trait AsDict {
    fn as_dict(&self) -> Value;
}

pub fn as_dict(program: &Program) -> Value {
    program.as_dict()
}

impl AsDict for Program {
    fn as_dict(&self) -> Value {
        json!({
            "node": "Program",
            "statements": self.statements().iter().map(AsDict::as_dict).collect::<Vec<_>>(),
        })
    }
}

impl AsDict for Statement {
    fn as_dict(&self) -> Value {
        match self {
            Statement::Let(stmt) => stmt.as_dict(),
            Statement::Expression(expr) => expr.as_dict(),
        }
    }
}

impl AsDict for Expression {
    fn as_dict(&self) -> Value {
        match self {
            Expression::Type(ty) => ty.as_dict(),
            Expression::FnDef(fn_def) => fn_def.as_dict(),
        }
    }
}

impl AsDict for Type {
    fn as_dict(&self) -> Value {
        match self {
            Type::Expr(ty) => ty.as_dict(),
            Type::Fn(ty) => ty.as_dict(),
        }
    }
}

impl AsDict for TypeExpr {
    fn as_dict(&self) -> Value {
        let base = match self.base() {
            None => Value::Null,
            Some(TypeBase::Primitive(kind)) => Value::from(kind.as_str()),
            Some(TypeBase::Expression(expr)) => expr.as_dict(),
        };
        json!({
            "node": "TypeExpr",
            "base": base,
            "is_reference": self.is_reference(),
        })
    }
}

impl AsDict for FnTypeExpr {
    fn as_dict(&self) -> Value {
        json!({
            "node": "FnTypeExpr",
            "params": self.params().iter().map(AsDict::as_dict).collect::<Vec<_>>(),
            "ret": self.ret().as_dict(),
        })
    }
}

impl AsDict for FnDef {
    fn as_dict(&self) -> Value {
        let params = self
            .params()
            .iter()
            .map(|(name, ty)| (name.clone(), ty.as_dict()))
            .collect::<Map<_, _>>();
        json!({
            "node": "FnDef",
            "params": params,
            "ret": self.ret().as_dict(),
            "body": self.body().as_dict(),
            "has_body": self.has_body(),
        })
    }
}

impl AsDict for StmtLet {
    fn as_dict(&self) -> Value {
        json!({
            "node": "StmtLet",
            "name": self.name(),
            "type": self.ty().map_or(Value::Null, AsDict::as_dict),
            "value": self.value().map_or(Value::Null, AsDict::as_dict),
        })
    }
}

impl Serialize for Program {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_dict().serialize(serializer)
    }
}

fn write_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = T>,
    separator: &str,
) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Program[")?;
        write_separated(f, self.statements(), "; ")?;
        f.write_str("]")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => stmt.fmt(f),
            Statement::Expression(expr) => expr.fmt(f),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Type(ty) => ty.fmt(f),
            Expression::FnDef(fn_def) => fn_def.fmt(f),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Expr(ty) => ty.fmt(f),
            Type::Fn(ty) => ty.fmt(f),
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_reference() {
            f.write_str("&")?;
        }
        match self.base() {
            None => f.write_str("?"),
            Some(TypeBase::Primitive(kind)) => f.write_str(kind.as_str()),
            Some(TypeBase::Expression(expr)) => expr.fmt(f),
        }
    }
}

impl fmt::Display for FnTypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_separated(f, self.params(), ", ")?;
        write!(f, ") -> {}", self.ret())
    }
}

impl fmt::Display for FnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_separated(
            f,
            self.params()
                .iter()
                .map(|(name, ty)| format!("{name}: {ty}")),
            ", ",
        )?;
        write!(f, ") -> {}", self.ret())?;
        if !self.has_body() {
            return Ok(());
        }
        if self.body().is_empty() {
            return f.write_str(" {}");
        }
        f.write_str(" { ")?;
        write_separated(f, self.body().statements(), "; ")?;
        f.write_str(" }")
    }
}

impl fmt::Display for StmtLet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Let({}: ", self.name())?;
        match self.ty() {
            Some(ty) => write!(f, "{ty}")?,
            None => f.write_str("_")?,
        }
        f.write_str(" = ")?;
        match self.value() {
            Some(value) => write!(f, "{value}")?,
            None => f.write_str("_")?,
        }
        f.write_str(")")
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::parse_ok;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_lets() {
        assert_eq!(parse_ok("let x: u32;").to_string(), "Program[Let(x: u32 = _)]");
        assert_eq!(
            parse_ok("let x: u32; let y: &i8;").to_string(),
            "Program[Let(x: u32 = _); Let(y: &i8 = _)]"
        );
        assert_eq!(
            parse_ok("let f = fn(a: i32, b: i32) -> i32 { };").to_string(),
            "Program[Let(f: _ = fn(a: i32, b: i32) -> i32 {})]"
        );
    }

    #[test]
    fn renders_types() {
        assert_eq!(
            parse_ok("let g: fn(u8) -> &u8;").to_string(),
            "Program[Let(g: fn(u8) -> &u8 = _)]"
        );
        assert_eq!(
            parse_ok("let r: &&u16;").to_string(),
            "Program[Let(r: &&u16 = _)]"
        );
    }

    #[test]
    fn renders_bodies_only_when_present() {
        assert_eq!(
            parse_ok("let f = fn() -> u8; let g = fn() -> u8 { let x: u8; };").to_string(),
            "Program[Let(f: _ = fn() -> u8); Let(g: _ = fn() -> u8 { Let(x: u8 = _) })]"
        );
    }

    #[test]
    fn projects_typed_let() {
        assert_eq!(
            as_dict(&parse_ok("let x: u32;")),
            json!({
                "node": "Program",
                "statements": [{
                    "node": "StmtLet",
                    "name": "x",
                    "type": { "node": "TypeExpr", "base": "u32", "is_reference": false },
                    "value": null,
                }],
            })
        );
    }

    #[test]
    fn projects_nested_references() {
        let program = parse_ok("let r: &&u8;");
        assert_eq!(
            program.as_dict()["statements"][0]["type"],
            json!({
                "node": "TypeExpr",
                "base": { "node": "TypeExpr", "base": "u8", "is_reference": true },
                "is_reference": true,
            })
        );
    }

    #[test]
    fn fn_def_params_keep_declaration_order() {
        let program = parse_ok("let f = fn(z: u8, a: i8) -> u8;");
        let projected = serde_json::to_string(&program).unwrap();
        let z = projected.find("\"z\"").unwrap();
        let a = projected.find("\"a\"").unwrap();
        assert!(z < a, "{projected}");
        assert_eq!(
            program.as_dict()["statements"][0]["value"]["body"],
            json!({ "node": "Program", "statements": [] })
        );
    }

    #[test]
    fn declarations_and_empty_bodies_project_differently() {
        let program = parse_ok("let decl = fn() -> u8; let empty = fn() -> u8 {};");
        let projected = program.as_dict();
        let decl = &projected["statements"][0]["value"];
        let empty = &projected["statements"][1]["value"];
        assert_eq!(decl["body"], empty["body"]);
        assert_eq!(decl["has_body"], json!(false));
        assert_eq!(empty["has_body"], json!(true));
        assert_ne!(decl, empty);
    }
}
