//! Tests for model validation.

use super::*;
use crate::ErrorCode;
use edl_ir::{Attrs, Token};
use pretty_assertions::assert_eq;

fn codes(errors: &[CodegenError]) -> Vec<ErrorCode> {
    errors.iter().map(CodegenError::code).collect()
}

fn single_call(params: Vec<Decl>) -> Edl {
    Edl::new("demo").with_trusted(Function::new("call", Type::Void, params))
}

#[test]
fn well_formed_model_has_no_errors() {
    let edl = Edl::new("demo")
        .with_type(UserType::struct_(
            "buffer",
            vec![
                Decl::new("data", Type::ptr(Type::UInt8))
                    .with_attrs(Attrs::new().with_count(Token::name("len"))),
                Decl::new("len", Type::SizeT),
            ],
        ))
        .with_type(UserType::enum_("mode"))
        .with_trusted(Function::new(
            "send",
            Type::enum_("mode"),
            vec![
                Decl::new("buf", Type::ptr(Type::struct_("buffer"))).with_attrs(Attrs::new().with_in()),
                Decl::new("msg", Type::ptr(Type::const_(Type::Char)))
                    .with_attrs(Attrs::new().with_in().with_string()),
                Decl::new("n", Type::unsigned(Type::Int)),
            ],
        ))
        .with_untrusted(Function::new(
            "log",
            Type::Void,
            vec![Decl::new("h", Type::foreign("handle_t"))
                .with_attrs(Attrs::new().with_ptr().with_count(Token::literal("1")))],
        ));
    assert_eq!(validate(&edl), Vec::new());
}

#[test]
fn unresolved_aggregate_is_reported() {
    let edl = single_call(vec![Decl::new("p", Type::ptr(Type::struct_("missing")))]);
    assert_eq!(
        validate(&edl),
        vec![CodegenError::UnresolvedType {
            decl: "call::p".into(),
            name: "missing".into(),
        }]
    );
}

#[test]
fn kind_mismatch_is_unresolved() {
    let edl = single_call(vec![Decl::new("u", Type::union("shape"))])
        .with_type(UserType::struct_("shape", Vec::new()));
    assert_eq!(codes(&validate(&edl)), vec![ErrorCode::E5001]);
}

#[test]
fn unresolved_return_type() {
    let edl = Edl::new("demo").with_untrusted(Function::new("get", Type::struct_("gone"), Vec::new()));
    assert_eq!(
        validate(&edl),
        vec![CodegenError::UnresolvedType {
            decl: "get::return".into(),
            name: "gone".into(),
        }]
    );
}

#[test]
fn unsigned_float_is_reported() {
    let edl = single_call(vec![Decl::new("f", Type::unsigned(Type::Double))]);
    assert_eq!(codes(&validate(&edl)), vec![ErrorCode::E5002]);
}

#[test]
fn unknown_count_reference() {
    let edl = single_call(vec![Decl::new("p", Type::ptr(Type::Int))
        .with_attrs(Attrs::new().with_count(Token::name("n")).with_size(Token::literal("4")))]);
    assert_eq!(
        validate(&edl),
        vec![CodegenError::UnknownReference {
            decl: "call::p".into(),
            reference: "n".into(),
        }]
    );
}

#[test]
fn field_references_resolve_against_fields() {
    let edl = Edl::new("demo").with_type(UserType::struct_(
        "s",
        vec![Decl::new("p", Type::ptr(Type::Int)).with_attrs(Attrs::new().with_size(Token::name("bytes")))],
    ));
    assert_eq!(codes(&validate(&edl)), vec![ErrorCode::E5003]);
}

#[test]
fn string_on_non_char_pointer() {
    let edl = single_call(vec![
        Decl::new("a", Type::ptr(Type::Int)).with_attrs(Attrs::new().with_string()),
        Decl::new("b", Type::ptr(Type::Char)).with_attrs(Attrs::new().with_wstring()),
        Decl::new("c", Type::Char).with_attrs(Attrs::new().with_string()),
        Decl::new("d", Type::ptr(Type::WChar)).with_attrs(Attrs::new().with_wstring()),
    ]);
    let errors = validate(&edl);
    let decls: Vec<_> = errors.iter().map(CodegenError::decl).collect();
    assert_eq!(decls, vec!["call::a", "call::b", "call::c"]);
    assert_eq!(codes(&errors), vec![ErrorCode::E5004; 3]);
}

#[test]
fn shapeless_foreign_with_count() {
    let edl = single_call(vec![
        Decl::new("n", Type::SizeT),
        Decl::new("h", Type::foreign("obj_t")).with_attrs(Attrs::new().with_count(Token::name("n"))),
    ]);
    assert_eq!(
        validate(&edl),
        vec![CodegenError::ForeignWithoutShape {
            decl: "call::h".into(),
            name: "obj_t".into(),
        }]
    );
}

#[test]
fn errors_follow_declaration_order() {
    let edl = Edl::new("demo")
        .with_untrusted(Function::new("second", Type::Void, vec![Decl::new("x", Type::enum_("e2"))]))
        .with_trusted(Function::new("first", Type::Void, vec![Decl::new("x", Type::enum_("e1"))]))
        .with_type(UserType::struct_("s", vec![Decl::new("f", Type::union("u0"))]));
    let decls: Vec<_> = validate(&edl).iter().map(|e| e.decl().to_string()).collect();
    assert_eq!(decls, vec!["s::f", "first::x", "second::x"]);
}
