//! Errors produced while turning `sc` source text into an AST, and the tools used to
//! accumulate them while a tree is being lowered.

#[macro_use]
pub mod result;
pub mod error;
pub mod span;

pub use error::CompileError;
pub use result::{err, ok, CompileResult};
pub use span::Span;
