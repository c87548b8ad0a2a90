//! Call signatures for generated stubs.
//!
//! The same function renders differently depending on which way the call
//! crosses the boundary and which side the generated file is compiled for.
//! When the side that *makes* the call is generated, the stub returns
//! `oe_result_t` and the real return value moves to a `_retval`
//! out-parameter; calls into the enclave additionally take the enclave handle.

use edl_ir::Function;

use super::decl::{decl_str, CTypeMapper};

/// Which way a call crosses the boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Host calls into the enclave.
    Ecall,
    /// Enclave calls out to the host.
    Ocall,
}

/// The side a generated file is compiled for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Inside the enclave.
    Trusted,
    /// The host process.
    Untrusted,
}

impl Direction {
    /// Whether `side` issues this call through a generated stub rather than
    /// implementing it.
    fn is_stub_on(self, side: Side) -> bool {
        matches!(
            (self, side),
            (Direction::Ecall, Side::Untrusted) | (Direction::Ocall, Side::Trusted)
        )
    }
}

/// Render the prototype of `func` for `direction` as seen from `side`.
pub fn prototype(func: &Function, direction: Direction, side: Side) -> String {
    let stub = direction.is_stub_on(side);
    let ret = if stub {
        "oe_result_t".to_string()
    } else {
        CTypeMapper::map_type(&func.ret)
    };

    let mut args = Vec::with_capacity(func.params.len() + 2);
    if direction == Direction::Ecall && side == Side::Untrusted {
        args.push("oe_enclave_t* enclave".to_string());
    }
    if stub && !func.ret.is_void() {
        args.push(format!("{}* _retval", CTypeMapper::map_type(&func.ret)));
    }
    args.extend(
        func.params
            .iter()
            .map(|p| decl_str(&p.name, &p.ty, &p.dims)),
    );

    let args = match args.as_slice() {
        [] if direction == Direction::Ocall && side == Side::Trusted => "(\n    )".to_string(),
        [] => "(void)".to_string(),
        [single] => format!("({single})"),
        many => format!("(\n    {})", many.join(",\n    ")),
    };
    format!("{ret} {}{args}", func.name)
}

/// Render the prototype of the enclave-creation entry point for `edl_name`.
pub fn create_prototype(edl_name: &str) -> String {
    format!(
        "oe_result_t oe_create_{edl_name}_enclave(\n    \
         const char* path,\n    \
         oe_enclave_type_t type,\n    \
         uint32_t flags,\n    \
         const oe_enclave_setting_t* settings,\n    \
         uint32_t setting_count,\n    \
         oe_enclave_t** enclave)"
    )
}
