//! EDL IR - Resolved Interface Description Model
//!
//! This crate contains the data structures the code generator consumes once an
//! interface description has been parsed and resolved:
//! - [`Type`]: closed tree of primitive, named and wrapper types
//! - [`Decl`]: a parameter, field or return slot with dimensions and attributes
//! - [`Attrs`] and [`Token`]: buffer annotations (`size`, `count`, `string`, ...)
//! - [`UserType`], [`Function`], [`Edl`]: aggregates, calls and the registry
//!
//! Everything here is built once by the parser and read-only afterwards.
//! Nothing in the model renders text; that is the job of `edl_codegen`.

mod decl;
mod edl;
mod ty;

pub use decl::{Attrs, Decl, Dims, Token};
pub use edl::{AggregateKind, Edl, Function, UserType};
pub use ty::Type;
