use super::{NodeId, Program, Type};
use crate::{transform::span_of, transform::Transformer, Rule};

use indexmap::IndexMap;
use pest::iterators::Pair;
use sc_error::{err, ok, CompileError, CompileResult};

/// A function definition.
///
/// Parameters are keyed by name in declaration order. A definition written without a body still
/// owns an empty [Program]; [FnDef::has_body] tells the two apart.
#[derive(Debug)]
pub struct FnDef {
    pub(crate) id: NodeId,
    pub(crate) params: IndexMap<String, Type>,
    pub(crate) ret: Box<Type>,
    pub(crate) body: Program,
    pub(crate) has_body: bool,
}

impl FnDef {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn params(&self) -> &IndexMap<String, Type> {
        &self.params
    }

    pub fn ret(&self) -> &Type {
        &self.ret
    }

    pub fn body(&self) -> &Program {
        &self.body
    }

    pub fn has_body(&self) -> bool {
        self.has_body
    }

    pub(crate) fn parse_from_pair(
        pair: Pair<'_, Rule>,
        ctx: &mut Transformer,
    ) -> CompileResult<Self> {
        let id = ctx.node_id();
        let mut errors = Vec::new();
        let mut parts = pair.into_inner();
        let param_list = parts
            .next()
            .expect("a function definition always lists its parameters");
        let ret = parts
            .next()
            .expect("a function definition always has a return type");
        let block = parts.next();

        // The parameter list is a flat run of name tokens each followed by a type.
        let mut params = IndexMap::new();
        let mut pending_name: Option<Pair<Rule>> = None;
        for part in param_list.into_inner() {
            match part.as_rule() {
                Rule::ident => {
                    if let Some(name) = pending_name.replace(part) {
                        panic!(
                            "parameter `{}` is not followed by a type in the parse tree",
                            name.as_str()
                        );
                    }
                }
                _ => {
                    let name = pending_name.take().unwrap_or_else(|| {
                        panic!(
                            "parameter type `{}` is not preceded by a name in the parse tree",
                            part.as_str()
                        )
                    });
                    let ty = ctx.lower_type(part).ok(&mut errors);
                    if params.contains_key(name.as_str()) {
                        errors.push(CompileError::DuplicateParameter {
                            name: name.as_str().to_string(),
                            span: span_of(&name),
                        });
                        continue;
                    }
                    if let Some(ty) = ty {
                        params.insert(name.as_str().to_string(), ty);
                    }
                }
            }
        }
        if let Some(name) = pending_name {
            panic!(
                "parameter `{}` is not followed by a type in the parse tree",
                name.as_str()
            );
        }

        let ret = ctx.lower_type(ret).ok(&mut errors);
        let has_body = block.is_some();
        let body = match block {
            Some(block) => ctx.lower_program(block).ok(&mut errors),
            None => Some(Program::empty(ctx.node_id())),
        };

        match (ret, body) {
            (Some(ret), Some(body)) if errors.is_empty() => ok(
                FnDef {
                    id,
                    params,
                    ret: Box::new(ret),
                    body,
                    has_body,
                },
                errors,
            ),
            _ => err(errors),
        }
    }
}
