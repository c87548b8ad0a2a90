//! Analysis passes for code generation.
//!
//! These run over the resolved model before any text is emitted: validation
//! reports declarations that cannot be rendered, deep-copy classification
//! decides which parameters need recursive marshaling.

mod deep_copy;
mod validate;

pub use deep_copy::{classify_deep_copy, deep_copy_fields, deep_copy_type, DeepCopy};
pub use validate::validate;
