//! Model validation.
//!
//! Finds the declarations the renderers would turn into empty or incomplete C
//! text, before any of it is emitted. Diagnostics come out in declaration
//! order: user types first, then trusted and untrusted functions.

use rustc_hash::FxHashSet;

use edl_ir::{AggregateKind, Decl, Edl, Function, Type, UserType};

use crate::c::CTypeMapper;
use crate::CodegenError;

/// Validate every user type and function of `edl`.
#[tracing::instrument(level = "debug", skip_all, fields(edl = %edl.name))]
pub fn validate(edl: &Edl) -> Vec<CodegenError> {
    let mut errors = Vec::new();
    for user_type in edl.types() {
        validate_user_type(edl, user_type, &mut errors);
    }
    for func in edl.trusted_funcs.iter().chain(&edl.untrusted_funcs) {
        validate_function(edl, func, &mut errors);
    }
    tracing::debug!(count = errors.len(), "validation complete");
    errors
}

fn validate_user_type(edl: &Edl, user_type: &UserType, errors: &mut Vec<CodegenError>) {
    let siblings: FxHashSet<&str> = user_type.fields.iter().map(|f| f.name.as_str()).collect();
    let scope = Scope {
        owner: &user_type.name,
        siblings: &siblings,
    };
    for field in &user_type.fields {
        validate_decl(edl, &scope, field, errors);
    }
}

fn validate_function(edl: &Edl, func: &Function, errors: &mut Vec<CodegenError>) {
    check_type(edl, &format!("{}::return", func.name), &func.ret, errors);
    let siblings: FxHashSet<&str> = func.params.iter().map(|p| p.name.as_str()).collect();
    let scope = Scope {
        owner: &func.name,
        siblings: &siblings,
    };
    for param in &func.params {
        validate_decl(edl, &scope, param, errors);
    }
}

/// Names a declaration's annotations may refer to.
struct Scope<'a> {
    owner: &'a str,
    siblings: &'a FxHashSet<&'a str>,
}

fn validate_decl(edl: &Edl, scope: &Scope<'_>, decl: &Decl, errors: &mut Vec<CodegenError>) {
    let qualified = format!("{}::{}", scope.owner, decl.name);
    check_type(edl, &qualified, &decl.ty, errors);

    let Some(attrs) = &decl.attrs else {
        return;
    };

    for token in attrs.size_tokens() {
        if let Some(name) = token.referenced_name() {
            if !scope.siblings.contains(name) {
                errors.push(CodegenError::UnknownReference {
                    decl: qualified.clone(),
                    reference: name.to_string(),
                });
            }
        }
    }

    if (attrs.string && !points_to(&decl.ty, &Type::Char))
        || (attrs.wstring && !points_to(&decl.ty, &Type::WChar))
    {
        errors.push(CodegenError::StringNotCharPointer {
            decl: qualified.clone(),
            ty: CTypeMapper::map_type(&decl.ty),
        });
    }

    if let Type::Foreign(name) = &decl.ty {
        let sized = attrs.size.is_some() || attrs.count.is_some();
        if sized && !attrs.is_array && !attrs.is_ptr {
            errors.push(CodegenError::ForeignWithoutShape {
                decl: qualified,
                name: name.clone(),
            });
        }
    }
}

/// Whether `ty` is a pointer to (possibly const) `elem`.
fn points_to(ty: &Type, elem: &Type) -> bool {
    matches!(ty, Type::Ptr(inner) if inner.unqualified() == elem)
}

fn check_type(edl: &Edl, decl: &str, ty: &Type, errors: &mut Vec<CodegenError>) {
    let expected = match ty {
        Type::Const(inner) | Type::Ptr(inner) => {
            check_type(edl, decl, inner, errors);
            return;
        }
        Type::Unsigned(inner) => {
            if !inner.is_integer() {
                errors.push(CodegenError::UnsignedNonInteger {
                    decl: decl.to_string(),
                    ty: CTypeMapper::map_type(inner),
                });
            }
            return;
        }
        Type::Enum(_) => AggregateKind::Enum,
        Type::Struct(_) => AggregateKind::Struct,
        Type::Union(_) => AggregateKind::Union,
        _ => return,
    };
    let Some(name) = ty.name() else {
        return;
    };
    if edl.user_type(name).map(|t| t.kind) != Some(expected) {
        errors.push(CodegenError::UnresolvedType {
            decl: decl.to_string(),
            name: name.to_string(),
        });
    }
}

#[cfg(test)]
mod tests;
