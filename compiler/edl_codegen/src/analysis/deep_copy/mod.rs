//! Deep-copy eligibility.
//!
//! A pointer parameter needs a recursive copy when it points at a registered
//! struct whose members carry their own annotations: copying the struct as a
//! flat blob would leave those members pointing into the other side's memory.
//!
//! # Eligibility
//!
//! 1. The declaration carries attributes (a bare pointer has nothing to marshal)
//! 2. Its type is one `Ptr`, optionally around one `Const`, around a
//!    `Struct` or `Foreign` type (the parser may present EDL structs as foreign)
//! 3. That name resolves to a registered struct
//! 4. At least one field of the struct carries attributes

use edl_ir::{AggregateKind, Decl, Edl, Type, UserType};

/// Outcome of deep-copy classification for one declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeepCopy<'a> {
    /// Recursive copy required through this struct.
    Eligible(&'a UserType),
    /// A registered struct without annotated members; a flat copy is enough.
    Flat(&'a UserType),
    /// Points at a foreign type the registry does not define.
    Opaque(&'a str),
    /// Points at a struct name the registry does not define.
    Unresolved(&'a str),
    /// Not an annotated pointer to a struct.
    NotApplicable,
}

impl<'a> DeepCopy<'a> {
    pub fn is_eligible(&self) -> bool {
        matches!(self, DeepCopy::Eligible(_))
    }

    /// The struct to recurse into, when eligible.
    pub fn user_type(&self) -> Option<&'a UserType> {
        match *self {
            DeepCopy::Eligible(user_type) => Some(user_type),
            _ => None,
        }
    }
}

/// Members of `user_type` that need their own marshaling.
///
/// Only structs are ever deep-copied; unions and enums yield nothing.
pub fn deep_copy_fields(user_type: &UserType) -> impl Iterator<Item = &Decl> {
    let fields: &[Decl] = if user_type.kind == AggregateKind::Struct {
        &user_type.fields
    } else {
        &[]
    };
    fields.iter().filter(|field| field.attrs.is_some())
}

/// The aggregate name a declaration points at, if it has the pointer shape.
fn pointee_name(decl: &Decl) -> Option<(&str, bool)> {
    let Type::Ptr(inner) = &decl.ty else {
        return None;
    };
    let inner = match inner.as_ref() {
        Type::Const(inner) => inner.as_ref(),
        other => other,
    };
    match inner {
        Type::Struct(name) => Some((name, false)),
        Type::Foreign(name) => Some((name, true)),
        _ => None,
    }
}

/// Classify `decl` for deep copying against the registry in `edl`.
#[tracing::instrument(level = "trace", skip_all, fields(decl = %decl.name))]
pub fn classify_deep_copy<'a>(edl: &'a Edl, decl: &'a Decl) -> DeepCopy<'a> {
    if decl.attrs.is_none() {
        return DeepCopy::NotApplicable;
    }
    let Some((name, foreign)) = pointee_name(decl) else {
        return DeepCopy::NotApplicable;
    };
    let Some(user_type) = edl.user_type(name) else {
        tracing::debug!(name, foreign, "deep copy target not registered");
        return if foreign {
            DeepCopy::Opaque(name)
        } else {
            DeepCopy::Unresolved(name)
        };
    };
    if user_type.kind != AggregateKind::Struct {
        return DeepCopy::NotApplicable;
    }
    if deep_copy_fields(user_type).next().is_some() {
        DeepCopy::Eligible(user_type)
    } else {
        DeepCopy::Flat(user_type)
    }
}

/// The struct `decl` must be deep-copied through, if any.
pub fn deep_copy_type<'a>(edl: &'a Edl, decl: &'a Decl) -> Option<&'a UserType> {
    classify_deep_copy(edl, decl).user_type()
}
