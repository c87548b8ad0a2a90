//! Declarations and their buffer annotations.

use crate::Type;

/// Array bounds in declared order. Empty means "not an array".
///
/// Bounds stay textual since they may be literals or named constants.
pub type Dims = Vec<String>;

/// Operand of a `size`/`count` annotation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// A numeric literal, rendered verbatim.
    Literal(String),
    /// A sibling parameter or field.
    Name(String),
    /// The implicit length companion of a string parameter (`<name>_len`).
    Length(String),
}

impl Token {
    pub fn literal(value: impl Into<String>) -> Self {
        Token::Literal(value.into())
    }

    pub fn name(name: impl Into<String>) -> Self {
        Token::Name(name.into())
    }

    /// The sibling this token refers to, if it names one directly.
    pub fn referenced_name(&self) -> Option<&str> {
        match self {
            Token::Name(name) => Some(name),
            Token::Literal(_) | Token::Length(_) => None,
        }
    }
}

/// Annotations attached to a declaration.
///
/// The language does not make `size` and `count` mutually exclusive; the
/// size-expression builder applies a fixed precedence instead.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attrs {
    pub is_in: bool,
    pub is_out: bool,
    pub user_check: bool,
    /// A `Foreign` type used as an array.
    pub is_array: bool,
    /// A `Foreign` type used as a pointer.
    pub is_ptr: bool,
    pub string: bool,
    pub wstring: bool,
    pub size: Option<Token>,
    pub count: Option<Token>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_in(mut self) -> Self {
        self.is_in = true;
        self
    }

    #[must_use]
    pub fn with_out(mut self) -> Self {
        self.is_out = true;
        self
    }

    /// Pointer passed through unchecked; the annotation adds no size.
    #[must_use]
    pub fn with_user_check(mut self) -> Self {
        self.user_check = true;
        self
    }

    #[must_use]
    pub fn with_string(mut self) -> Self {
        self.string = true;
        self
    }

    #[must_use]
    pub fn with_wstring(mut self) -> Self {
        self.wstring = true;
        self
    }

    #[must_use]
    pub fn with_array(mut self) -> Self {
        self.is_array = true;
        self
    }

    #[must_use]
    pub fn with_ptr(mut self) -> Self {
        self.is_ptr = true;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: Token) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn with_count(mut self, count: Token) -> Self {
        self.count = Some(count);
        self
    }

    /// Character-buffer semantics with an implicit length.
    pub fn is_string(&self) -> bool {
        self.string || self.wstring
    }

    /// The `size` and `count` tokens that are present.
    pub fn size_tokens(&self) -> impl Iterator<Item = &Token> {
        self.size.iter().chain(self.count.iter())
    }
}

/// A name bound to a type: one parameter, field or return slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decl {
    pub name: String,
    pub ty: Type,
    pub dims: Dims,
    pub attrs: Option<Attrs>,
}

impl Decl {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Decl {
            name: name.into(),
            ty,
            dims: Dims::new(),
            attrs: None,
        }
    }

    #[must_use]
    pub fn with_dims<I, S>(mut self, dims: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dims = dims.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = Some(attrs);
        self
    }

    pub fn is_array(&self) -> bool {
        !self.dims.is_empty()
    }

    /// The `Foreign` type name when the declaration uses it as an array.
    pub fn foreign_array(&self) -> Option<&str> {
        match (&self.ty, &self.attrs) {
            (Type::Foreign(name), Some(attrs)) if attrs.is_array => Some(name),
            _ => None,
        }
    }

    /// The implicit length companion of a string declaration.
    ///
    /// `None` unless the declaration carries `string` or `wstring`.
    pub fn length_companion(&self) -> Option<Token> {
        self.attrs
            .as_ref()
            .filter(|attrs| attrs.is_string())
            .map(|_| Token::Length(self.name.clone()))
    }
}

#[cfg(test)]
mod tests;
