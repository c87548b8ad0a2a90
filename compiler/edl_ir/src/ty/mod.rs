//! Type nodes of the interface description.
//!
//! Types form an immutable tree: `Ptr`, `Const` and `Unsigned` exclusively own
//! their inner type, named variants carry the name to resolve against the
//! [`Edl`](crate::Edl) registry.

/// A type as written in the interface description.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    Bool,
    Char,
    Short,
    Int,
    Long,
    LLong,
    Float,
    Double,
    LDouble,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    WChar,
    Void,
    SizeT,
    /// `unsigned` applied to an integer type.
    Unsigned(Box<Type>),
    Enum(String),
    Struct(String),
    Union(String),
    /// Adds immutability to the inner type.
    Const(Box<Type>),
    /// One level of indirection.
    Ptr(Box<Type>),
    /// Opaque type declared outside the interface description.
    Foreign(String),
}

impl Type {
    /// Wrap `inner` in one level of indirection.
    pub fn ptr(inner: Type) -> Self {
        Type::Ptr(Box::new(inner))
    }

    /// Wrap `inner` in a `const` qualifier.
    pub fn const_(inner: Type) -> Self {
        Type::Const(Box::new(inner))
    }

    /// Wrap `inner` in an `unsigned` specifier.
    pub fn unsigned(inner: Type) -> Self {
        Type::Unsigned(Box::new(inner))
    }

    pub fn struct_(name: impl Into<String>) -> Self {
        Type::Struct(name.into())
    }

    pub fn union(name: impl Into<String>) -> Self {
        Type::Union(name.into())
    }

    pub fn enum_(name: impl Into<String>) -> Self {
        Type::Enum(name.into())
    }

    pub fn foreign(name: impl Into<String>) -> Self {
        Type::Foreign(name.into())
    }

    /// The type one `Ptr`/`Const`/`Unsigned` layer down, if any.
    pub fn inner(&self) -> Option<&Type> {
        match self {
            Type::Ptr(inner) | Type::Const(inner) | Type::Unsigned(inner) => Some(inner),
            _ => None,
        }
    }

    /// Name carried by `Enum`, `Struct`, `Union` and `Foreign`.
    pub fn name(&self) -> Option<&str> {
        match self {
            Type::Enum(name) | Type::Struct(name) | Type::Union(name) | Type::Foreign(name) => {
                Some(name)
            }
            _ => None,
        }
    }

    pub fn is_ptr(&self) -> bool {
        matches!(self, Type::Ptr(_))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }

    /// Whether `unsigned` may be applied to this type.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Type::Char | Type::Short | Type::Int | Type::Long | Type::LLong
        )
    }

    /// Strip `Const` layers only.
    pub fn unqualified(&self) -> &Type {
        match self {
            Type::Const(inner) => inner.unqualified(),
            _ => self,
        }
    }

    /// Strip every `Const` and `Ptr` layer down to the first named or
    /// primitive type.
    pub fn base(&self) -> &Type {
        match self {
            Type::Const(inner) | Type::Ptr(inner) => inner.base(),
            _ => self,
        }
    }
}
