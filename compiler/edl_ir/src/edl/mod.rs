//! Aggregates, functions and the interface registry.

use rustc_hash::FxHashMap;

use crate::{Decl, Type};

/// Kind of a user-defined aggregate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AggregateKind {
    Struct,
    Union,
    Enum,
}

/// A named aggregate defined in the interface description.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserType {
    pub name: String,
    pub kind: AggregateKind,
    /// Members in declared order. Empty for enums.
    pub fields: Vec<Decl>,
}

impl UserType {
    pub fn struct_(name: impl Into<String>, fields: Vec<Decl>) -> Self {
        UserType {
            name: name.into(),
            kind: AggregateKind::Struct,
            fields,
        }
    }

    pub fn union(name: impl Into<String>, fields: Vec<Decl>) -> Self {
        UserType {
            name: name.into(),
            kind: AggregateKind::Union,
            fields,
        }
    }

    pub fn enum_(name: impl Into<String>) -> Self {
        UserType {
            name: name.into(),
            kind: AggregateKind::Enum,
            fields: Vec::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Decl> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A boundary call: name, return type and parameters in declared order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Function {
    pub name: String,
    pub ret: Type,
    pub params: Vec<Decl>,
}

impl Function {
    pub fn new(name: impl Into<String>, ret: Type, params: Vec<Decl>) -> Self {
        Function {
            name: name.into(),
            ret,
            params,
        }
    }

    pub fn param(&self, name: &str) -> Option<&Decl> {
        self.params.iter().find(|p| p.name == name)
    }
}

/// A resolved interface description.
///
/// User types keep their declared order for deterministic output; lookups go
/// through a name index built on insertion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "EdlData"))]
pub struct Edl {
    pub name: String,
    types: Vec<UserType>,
    /// Derived from `types`; rebuilt on deserialization.
    #[cfg_attr(feature = "serde", serde(skip))]
    index: FxHashMap<String, usize>,
    /// Calls implemented inside the enclave.
    pub trusted_funcs: Vec<Function>,
    /// Calls implemented by the host.
    pub untrusted_funcs: Vec<Function>,
}

impl Edl {
    pub fn new(name: impl Into<String>) -> Self {
        Edl {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Register a user type. A later definition with the same name replaces
    /// the earlier one in place.
    pub fn add_type(&mut self, user_type: UserType) {
        if let Some(&slot) = self.index.get(&user_type.name) {
            self.types[slot] = user_type;
        } else {
            self.index.insert(user_type.name.clone(), self.types.len());
            self.types.push(user_type);
        }
    }

    #[must_use]
    pub fn with_type(mut self, user_type: UserType) -> Self {
        self.add_type(user_type);
        self
    }

    #[must_use]
    pub fn with_trusted(mut self, func: Function) -> Self {
        self.trusted_funcs.push(func);
        self
    }

    #[must_use]
    pub fn with_untrusted(mut self, func: Function) -> Self {
        self.untrusted_funcs.push(func);
        self
    }

    /// Look up a user type by name.
    pub fn user_type(&self, name: &str) -> Option<&UserType> {
        self.index.get(name).and_then(|&slot| self.types.get(slot))
    }

    /// User types in declared order.
    pub fn types(&self) -> &[UserType] {
        &self.types
    }
}

/// Serialized form of [`Edl`], without the name index.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct EdlData {
    name: String,
    types: Vec<UserType>,
    trusted_funcs: Vec<Function>,
    untrusted_funcs: Vec<Function>,
}

#[cfg(feature = "serde")]
impl From<EdlData> for Edl {
    fn from(data: EdlData) -> Self {
        let mut edl = Edl {
            name: data.name,
            trusted_funcs: data.trusted_funcs,
            untrusted_funcs: data.untrusted_funcs,
            ..Edl::default()
        };
        for user_type in data.types {
            edl.add_type(user_type);
        }
        edl
    }
}
