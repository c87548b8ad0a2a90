//! C Text Generation for Enclave Boundary Stubs
//!
//! This crate turns a resolved interface description into the text fragments a
//! stub emitter splices into generated C:
//!
//! 1. **Declarations** - parameter, field and member declarations
//! 2. **Size expressions** - bytes to copy when a parameter crosses the boundary
//! 3. **Signatures** - ecall/ocall prototypes for the trusted and untrusted side
//! 4. **Deep-copy detection** - which pointer parameters need recursive copies
//!
//! # Architecture
//!
//! ```text
//!        Edl (edl_ir)
//!          ↓
//!   validate / classify_deep_copy   (report bad declarations, pick copy mode)
//!          ↓
//!   decl_str / size_expr / prototype (pure text rendering)
//!          ↓
//!   CodegenContext                    (banners + output buffer for one file)
//! ```
//!
//! Every renderer is a pure function of its arguments and the read-only
//! registry; calls may happen in any order.

pub mod analysis;
pub mod c;
mod context;
mod error;

use std::sync::Once;

pub use analysis::{classify_deep_copy, deep_copy_fields, deep_copy_type, validate, DeepCopy};
pub use c::{
    create_prototype, decl_str, dims_str, member_decl, member_type, prototype, size_expr,
    token_str, Access, CTypeMapper, Direction, RefPath, Side,
};
pub use context::{include_guard, CodegenContext};
pub use error::{CodegenError, ErrorCode};

static TRACING_INIT: Once = Once::new();

/// Install a `fmt` subscriber filtered by `RUST_LOG`, for example
/// `RUST_LOG=edl_codegen=trace`.
///
/// Does nothing when `RUST_LOG` is unset or unparsable, or when the host
/// already installed a global subscriber. Repeated calls are no-ops.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .try_init();
        if installed.is_err() {
            tracing::debug!("global subscriber already set");
        }
    });
}
