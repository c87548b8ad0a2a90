//! Marshaling size expressions.
//!
//! Builds the C expression for the number of bytes a declaration occupies
//! when it crosses the enclave boundary. Rules apply in a fixed order and the
//! first match wins:
//!
//! 1. `string`/`wstring`: `<name>_len * sizeof(<char type>)`
//! 2. fixed dimensions: `sizeof` of the whole dimensioned declaration
//! 3. foreign array: `sizeof(<foreign name>)`
//! 4. `size` and `count`: `(<size> * <count>)`
//! 5. `count` only: `((size_t)<count> * <element size>)`
//! 6. `size` only: `<size>`
//! 7. otherwise: `<element size>`
//!
//! The element size is `sizeof` of the pointee for pointers and
//! `sizeof(*(T)0)` for foreign types flagged `isptr`.

use std::fmt;

use edl_ir::{Decl, Token, Type};

use super::decl::{decl_str, CTypeMapper};
use crate::CodegenError;

/// One step of a [`RefPath`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Access {
    /// Member access on a value: `name.`
    Field(String),
    /// Member access through a pointer: `name->`
    Deref(String),
}

/// Where name references in a size expression are reached from.
///
/// Generated code often only holds a pointer to a marshaling block, so a
/// `count(n)` annotation has to render as `args->n` rather than `n`. The path
/// is applied uniformly to every name reference; literals are left alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RefPath {
    steps: Vec<Access>,
}

impl RefPath {
    /// The empty path: references render as bare names.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.steps.push(Access::Field(name.into()));
        self
    }

    #[must_use]
    pub fn deref(mut self, name: impl Into<String>) -> Self {
        self.steps.push(Access::Deref(name.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Access] {
        &self.steps
    }
}

impl fmt::Display for RefPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            match step {
                Access::Field(name) => write!(f, "{name}.")?,
                Access::Deref(name) => write!(f, "{name}->")?,
            }
        }
        Ok(())
    }
}

/// Render an annotation token, reaching references through `path`.
pub fn token_str(token: &Token, path: &RefPath) -> String {
    match token {
        Token::Literal(value) => value.clone(),
        Token::Name(name) => format!("{path}{name}"),
        Token::Length(name) => format!("{path}{name}_len"),
    }
}

/// Size of a single element, when the declaration has one.
fn element_size(decl: &Decl) -> Option<String> {
    match &decl.ty {
        Type::Ptr(inner) => Some(format!(
            "sizeof({})",
            CTypeMapper::map_type_unqualified(inner)
        )),
        Type::Foreign(name) if decl.attrs.as_ref().is_some_and(|a| a.is_ptr) => {
            Some(format!("sizeof(*({name})0)"))
        }
        _ => None,
    }
}

fn missing_operand(decl: &Decl) -> CodegenError {
    match &decl.ty {
        Type::Foreign(name) => CodegenError::ForeignWithoutShape {
            decl: decl.name.clone(),
            name: name.clone(),
        },
        _ => CodegenError::NoSizeOperand {
            decl: decl.name.clone(),
        },
    }
}

/// Build the byte-count expression for `decl`.
///
/// Fails when the chosen rule needs an element size the declaration cannot
/// provide, e.g. a foreign type with `count` but neither `isary` nor `isptr`.
pub fn size_expr(decl: &Decl, path: &RefPath) -> Result<String, CodegenError> {
    let expr = build(decl, path)?;
    tracing::trace!(decl = %decl.name, %expr, "size expression");
    Ok(expr)
}

fn build(decl: &Decl, path: &RefPath) -> Result<String, CodegenError> {
    if let Some(len) = decl.length_companion() {
        return Ok(format!(
            "{} * sizeof({})",
            token_str(&len, path),
            CTypeMapper::base_type(&decl.ty)
        ));
    }
    if decl.is_array() {
        return Ok(format!("sizeof({})", decl_str("", &decl.ty, &decl.dims)));
    }
    if let Some(name) = decl.foreign_array() {
        return Ok(format!("sizeof({name})"));
    }

    let element = element_size(decl);
    let size = decl.attrs.as_ref().and_then(|a| a.size.as_ref());
    let count = decl.attrs.as_ref().and_then(|a| a.count.as_ref());

    match (size, count) {
        (Some(size), Some(count)) => Ok(format!(
            "({} * {})",
            token_str(size, path),
            token_str(count, path)
        )),
        (None, Some(count)) => {
            let element = element.ok_or_else(|| missing_operand(decl))?;
            Ok(format!("((size_t){} * {element})", token_str(count, path)))
        }
        (Some(size), None) => Ok(token_str(size, path)),
        (None, None) => element.ok_or_else(|| missing_operand(decl)),
    }
}
