//! Code generation context and output buffer.
//!
//! The `CodegenContext` ties the read-only interface model to the text being
//! produced for one generated file: indentation, include-guard banners and
//! the rendered lines themselves.

use edl_ir::Edl;

/// Preamble written at the top of every generated file.
const AUTOGEN_PREAMBLE: [&str; 3] = [
    "/*",
    " *  This file is auto generated by oeedger8r. DO NOT EDIT.",
    " */",
];

/// Include guard for a file generated from `edl_name`, e.g.
/// `include_guard("demo", "t.h")` is `EDGER8R_DEMO_T_H`.
pub fn include_guard(edl_name: &str, suffix: &str) -> String {
    let mut guard = String::with_capacity(edl_name.len() + suffix.len() + 9);
    guard.push_str("EDGER8R_");
    for c in edl_name.chars().chain(std::iter::once('_')).chain(suffix.chars()) {
        if c.is_ascii_alphanumeric() {
            guard.push(c.to_ascii_uppercase());
        } else {
            guard.push('_');
        }
    }
    guard
}

/// Code generation context.
///
/// Holds the interface being generated and the output of one file.
pub struct CodegenContext<'a> {
    /// The resolved interface description.
    pub edl: &'a Edl,
    /// Current indentation level.
    indent: usize,
    /// Generated code output.
    output: String,
}

impl<'a> CodegenContext<'a> {
    /// Create a new codegen context.
    pub fn new(edl: &'a Edl) -> Self {
        Self {
            edl,
            indent: 0,
            output: String::with_capacity(4096),
        }
    }

    /// Write the generated-file preamble and open the include guard.
    pub fn header(&mut self, guard: &str) {
        for line in AUTOGEN_PREAMBLE {
            self.writeln(line);
        }
        self.writeln(&format!("#ifndef {guard}"));
        self.writeln(&format!("#define {guard}"));
    }

    /// Close the include guard opened by [`header`](Self::header).
    pub fn footer(&mut self, guard: &str) {
        self.writeln(&format!("#endif // {guard}"));
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write a line to output (with indentation and newline).
    pub fn writeln(&mut self, s: &str) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
        self.output.push_str(s);
        self.output.push('\n');
    }

    /// Write a newline.
    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    /// Take the generated output.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}
