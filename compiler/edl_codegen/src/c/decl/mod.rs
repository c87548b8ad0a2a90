//! Type Mapping: EDL Types → C Declarations
//!
//! - Primitives map to a fixed spelling (`int8_t`, `short int`, `long double`, ...)
//! - `Const` prefixes its inner type, except over a pointer where it follows it
//! - Aggregates render as keyword plus name, foreign types as their bare name
//! - `Ptr` appends `*` with no space so the result concatenates against a name
//! - Member declarations drop `const` and carry arrays as pointers

use edl_ir::{Decl, Type};

/// Type mapper for converting EDL types to C type text.
pub struct CTypeMapper;

impl CTypeMapper {
    /// Map a type to its C spelling.
    pub fn map_type(ty: &Type) -> String {
        Self::render(ty, true)
    }

    /// Map a type to its C spelling with every `const` qualifier dropped.
    pub fn map_type_unqualified(ty: &Type) -> String {
        Self::render(ty, false)
    }

    /// Spelling of the first named or primitive type under any `Const`/`Ptr`
    /// layers, as needed for `sizeof` of an element.
    pub fn base_type(ty: &Type) -> String {
        Self::map_type(ty.base())
    }

    fn render(ty: &Type, keep_const: bool) -> String {
        match ty {
            Type::Bool => "bool".to_string(),
            Type::Char => "char".to_string(),
            Type::Short => "short int".to_string(),
            Type::Int => "int".to_string(),
            Type::Long => "long int".to_string(),
            Type::LLong => "long long".to_string(),
            Type::Float => "float".to_string(),
            Type::Double => "double".to_string(),
            Type::LDouble => "long double".to_string(),
            Type::Int8 => "int8_t".to_string(),
            Type::Int16 => "int16_t".to_string(),
            Type::Int32 => "int32_t".to_string(),
            Type::Int64 => "int64_t".to_string(),
            Type::UInt8 => "uint8_t".to_string(),
            Type::UInt16 => "uint16_t".to_string(),
            Type::UInt32 => "uint32_t".to_string(),
            Type::UInt64 => "uint64_t".to_string(),
            Type::WChar => "wchar_t".to_string(),
            Type::Void => "void".to_string(),
            Type::SizeT => "size_t".to_string(),
            Type::Unsigned(inner) => format!("unsigned {}", Self::render(inner, keep_const)),
            Type::Enum(name) => format!("enum {name}"),
            Type::Struct(name) => format!("struct {name}"),
            Type::Union(name) => format!("union {name}"),
            // A const pointer qualifies the pointer itself, not the pointee.
            Type::Const(inner) if keep_const && inner.is_ptr() => {
                format!("{} const", Self::render(inner, true))
            }
            Type::Const(inner) if keep_const => format!("const {}", Self::render(inner, true)),
            Type::Const(inner) => Self::render(inner, false),
            Type::Ptr(inner) => format!("{}*", Self::render(inner, keep_const)),
            Type::Foreign(name) => name.clone(),
        }
    }
}

/// Render array bounds as `[d0][d1]...`.
pub fn dims_str(dims: &[String]) -> String {
    dims.iter().map(|d| format!("[{d}]")).collect()
}

/// Render a full declaration: type, name and array bounds.
///
/// A space separates type and name only when the name starts with an
/// identifier character, so an empty name yields an abstract declarator
/// (`int[2]`) usable inside `sizeof`.
pub fn decl_str(name: &str, ty: &Type, dims: &[String]) -> String {
    let ty = CTypeMapper::map_type(ty);
    let dims = dims_str(dims);
    if starts_identifier(name) {
        format!("{ty} {name}{dims}")
    } else {
        format!("{ty}{name}{dims}")
    }
}

fn starts_identifier(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
}

fn foreign_array_comment(name: &str) -> String {
    format!("/* foreign array of type {name} */ void*")
}

/// Type text of a marshaled struct member.
///
/// Arrays become pointers to their element type and `const` is dropped.
pub fn member_type(decl: &Decl) -> String {
    if let Some(name) = decl.foreign_array() {
        return foreign_array_comment(name);
    }
    let ty = CTypeMapper::map_type_unqualified(&decl.ty);
    if decl.is_array() {
        format!("{ty}*")
    } else {
        ty
    }
}

/// Declaration of a marshaled struct member.
pub fn member_decl(decl: &Decl) -> String {
    if let Some(name) = decl.foreign_array() {
        return format!("{} {}", foreign_array_comment(name), decl.name);
    }
    let ty = CTypeMapper::map_type_unqualified(&decl.ty);
    let sep = if decl.is_array() { "* " } else { " " };
    format!("{ty}{sep}{}", decl.name)
}

#[cfg(test)]
mod tests;
