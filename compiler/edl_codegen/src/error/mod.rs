//! Codegen errors.
//!
//! Every condition that would otherwise degrade into empty or incomplete C text
//! gets its own code so the driver can report it before emitting anything.

use std::fmt;

/// Error codes for code generation diagnostics.
///
/// All codes live in the E5xxx (codegen) range.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unresolved aggregate reference
    E5001,
    /// `unsigned` applied to a non-integer type
    E5002,
    /// Size or count names no sibling
    E5003,
    /// String attribute on a non-character pointer
    E5004,
    /// Foreign type sized without an array or pointer flag
    E5005,
    /// Nothing to compute a size from
    E5006,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E5001 => "E5001",
            ErrorCode::E5002 => "E5002",
            ErrorCode::E5003 => "E5003",
            ErrorCode::E5004 => "E5004",
            ErrorCode::E5005 => "E5005",
            ErrorCode::E5006 => "E5006",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A code generation error.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CodegenError {
    /// A named `enum`/`struct`/`union` that is missing from the registry or
    /// registered as a different kind.
    UnresolvedType { decl: String, name: String },
    UnsignedNonInteger { decl: String, ty: String },
    /// A `size`/`count` token naming neither a parameter nor a field.
    UnknownReference { decl: String, reference: String },
    StringNotCharPointer { decl: String, ty: String },
    /// A foreign type with `size`/`count` but neither `isary` nor `isptr`,
    /// leaving the element size unknown.
    ForeignWithoutShape { decl: String, name: String },
    NoSizeOperand { decl: String },
}

impl CodegenError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CodegenError::UnresolvedType { .. } => ErrorCode::E5001,
            CodegenError::UnsignedNonInteger { .. } => ErrorCode::E5002,
            CodegenError::UnknownReference { .. } => ErrorCode::E5003,
            CodegenError::StringNotCharPointer { .. } => ErrorCode::E5004,
            CodegenError::ForeignWithoutShape { .. } => ErrorCode::E5005,
            CodegenError::NoSizeOperand { .. } => ErrorCode::E5006,
        }
    }

    /// Name of the declaration the error was found on.
    pub fn decl(&self) -> &str {
        match self {
            CodegenError::UnresolvedType { decl, .. }
            | CodegenError::UnsignedNonInteger { decl, .. }
            | CodegenError::UnknownReference { decl, .. }
            | CodegenError::StringNotCharPointer { decl, .. }
            | CodegenError::ForeignWithoutShape { decl, .. }
            | CodegenError::NoSizeOperand { decl } => decl,
        }
    }
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.code())?;
        match self {
            CodegenError::UnresolvedType { decl, name } => {
                write!(f, "`{decl}`: unknown user type `{name}`")
            }
            CodegenError::UnsignedNonInteger { decl, ty } => {
                write!(f, "`{decl}`: `unsigned` cannot be applied to `{ty}`")
            }
            CodegenError::UnknownReference { decl, reference } => {
                write!(f, "`{decl}`: size or count refers to unknown `{reference}`")
            }
            CodegenError::StringNotCharPointer { decl, ty } => {
                write!(
                    f,
                    "`{decl}`: string attributes require a character pointer, found `{ty}`"
                )
            }
            CodegenError::ForeignWithoutShape { decl, name } => {
                write!(
                    f,
                    "`{decl}`: foreign type `{name}` has size or count but is neither isary nor isptr"
                )
            }
            CodegenError::NoSizeOperand { decl } => {
                write!(f, "`{decl}`: cannot compute a byte size")
            }
        }
    }
}

impl std::error::Error for CodegenError {}
