//! C text rendering.
//!
//! Everything here is a pure function from the resolved model to text that the
//! stub emitter splices into generated sources.

mod decl;
mod signature;
mod size;

pub use decl::{decl_str, dims_str, member_decl, member_type, CTypeMapper};
pub use signature::{create_prototype, prototype, Direction, Side};
pub use size::{size_expr, token_str, Access, RefPath};
