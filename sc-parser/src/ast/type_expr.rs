use super::{Expression, NodeId};
use crate::{transform::Transformer, Rule};

use pest::iterators::Pair;
use sc_error::{err, ok, CompileResult};

/// The primitive integer types, by signedness and width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::U8,
        PrimitiveKind::I8,
        PrimitiveKind::U16,
        PrimitiveKind::I16,
        PrimitiveKind::U32,
        PrimitiveKind::I32,
        PrimitiveKind::U64,
        PrimitiveKind::I64,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        use PrimitiveKind::*;
        match self {
            U8 => "u8",
            I8 => "i8",
            U16 => "u16",
            I16 => "i16",
            U32 => "u32",
            I32 => "i32",
            U64 => "u64",
            I64 => "i64",
        }
    }
}

/// Any type expression: a plain or reference [TypeExpr], or a function type.
#[derive(Debug)]
pub enum Type {
    Expr(TypeExpr),
    Fn(FnTypeExpr),
}

impl Type {
    pub fn id(&self) -> NodeId {
        match self {
            Type::Expr(ty) => ty.id,
            Type::Fn(ty) => ty.id,
        }
    }

    /// Lowers a `type_expr`, `reftype` or `fn_type`.
    pub(crate) fn parse_from_pair(
        pair: Pair<'_, Rule>,
        ctx: &mut Transformer,
    ) -> CompileResult<Self> {
        match pair.as_rule() {
            Rule::type_expr => {
                let inner = pair
                    .into_inner()
                    .next()
                    .expect("a type always has exactly one child");
                match inner.as_rule() {
                    Rule::primitive => {
                        ok(Type::Expr(TypeExpr::parse_primitive(inner, ctx)), vec![])
                    }
                    _ => ctx.lower_type(inner),
                }
            }
            Rule::reftype => TypeExpr::parse_reference(pair, ctx).map(Type::Expr),
            Rule::fn_type => FnTypeExpr::parse_from_pair(pair, ctx).map(Type::Fn),
            rule => unreachable!("`{rule:?}` is not a type production"),
        }
    }
}

/// What a [TypeExpr] denotes before any reference is applied.
#[derive(Debug)]
pub enum TypeBase {
    Primitive(PrimitiveKind),
    /// A type that cannot be flattened into this node, such as the target of `&&u8`.
    Expression(Box<Expression>),
}

/// A primitive type, optionally behind a reference.
///
/// An unresolved base (`None`) is never treated as a primitive.
#[derive(Debug)]
pub struct TypeExpr {
    pub(crate) id: NodeId,
    pub(crate) base: Option<TypeBase>,
    pub(crate) is_reference: bool,
}

impl TypeExpr {
    pub(crate) fn primitive(id: NodeId, kind: PrimitiveKind) -> Self {
        TypeExpr {
            id,
            base: Some(TypeBase::Primitive(kind)),
            is_reference: false,
        }
    }

    /// Builds `&target`. A plain non-reference target has its base copied into the new node;
    /// anything else is kept whole as the base so no reference layer is lost.
    pub(crate) fn reference_to(id: NodeId, target: Type) -> Self {
        let base = match target {
            Type::Expr(TypeExpr {
                base,
                is_reference: false,
                ..
            }) => base,
            target => Some(TypeBase::Expression(Box::new(Expression::Type(target)))),
        };
        TypeExpr {
            id,
            base,
            is_reference: true,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn base(&self) -> Option<&TypeBase> {
        self.base.as_ref()
    }

    pub fn is_reference(&self) -> bool {
        self.is_reference
    }

    pub fn is_resolved(&self) -> bool {
        self.base.is_some()
    }

    /// The primitive this type names, ignoring whether it is taken by reference.
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self.base {
            Some(TypeBase::Primitive(kind)) => Some(kind),
            _ => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        self.primitive_kind().is_some()
    }

    fn parse_primitive(pair: Pair<'_, Rule>, ctx: &mut Transformer) -> Self {
        TypeExpr::primitive(ctx.node_id(), primitive_kind_of(&pair))
    }

    fn parse_reference(pair: Pair<'_, Rule>, ctx: &mut Transformer) -> CompileResult<Self> {
        let id = ctx.node_id();
        let target = pair
            .into_inner()
            .next()
            .expect("a reference always has a target");
        match target.as_rule() {
            Rule::primitive => ok(
                TypeExpr {
                    id,
                    base: Some(TypeBase::Primitive(primitive_kind_of(&target))),
                    is_reference: true,
                },
                vec![],
            ),
            _ => ctx
                .lower_type(target)
                .map(|target| TypeExpr::reference_to(id, target)),
        }
    }
}

fn primitive_kind_of(pair: &Pair<'_, Rule>) -> PrimitiveKind {
    PrimitiveKind::from_name(pair.as_str()).unwrap_or_else(|| {
        panic!(
            "`{}` was accepted as a primitive but names no primitive kind",
            pair.as_str()
        )
    })
}

/// A function type: ordered parameter types and a return type.
#[derive(Debug)]
pub struct FnTypeExpr {
    pub(crate) id: NodeId,
    pub(crate) params: Vec<Type>,
    pub(crate) ret: Box<Type>,
}

impl FnTypeExpr {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn params(&self) -> &[Type] {
        &self.params
    }

    pub fn ret(&self) -> &Type {
        &self.ret
    }

    pub(crate) fn parse_from_pair(
        pair: Pair<'_, Rule>,
        ctx: &mut Transformer,
    ) -> CompileResult<Self> {
        let id = ctx.node_id();
        let mut errors = Vec::new();
        let mut parts = pair.into_inner();
        let param_list = parts.next().expect("a function type always lists its parameters");
        let ret = parts.next().expect("a function type always has a return type");

        let mut params = Vec::new();
        for param in param_list.into_inner() {
            if let Some(param) = ctx.lower_type(param).ok(&mut errors) {
                params.push(param);
            }
        }
        let ret = ctx.lower_type(ret).ok(&mut errors);

        match ret {
            Some(ret) if errors.is_empty() => ok(
                FnTypeExpr {
                    id,
                    params,
                    ret: Box::new(ret),
                },
                errors,
            ),
            _ => err(errors),
        }
    }
}
