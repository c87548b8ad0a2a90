use super::*;
use pretty_assertions::assert_eq;

#[test]
fn length_companion_only_for_strings() {
    let msg = Decl::new("msg", Type::ptr(Type::Char)).with_attrs(Attrs::new().with_in().with_string());
    assert_eq!(msg.length_companion(), Some(Token::Length("msg".into())));

    let buf = Decl::new("buf", Type::ptr(Type::Char)).with_attrs(Attrs::new().with_in());
    assert_eq!(buf.length_companion(), None);

    let bare = Decl::new("bare", Type::ptr(Type::Char));
    assert_eq!(bare.length_companion(), None);
}

#[test]
fn wstring_is_string() {
    let attrs = Attrs::new().with_wstring();
    assert!(attrs.is_string());
    assert!(!Attrs::new().is_string());
}

#[test]
fn foreign_array_requires_flag() {
    let arr = Decl::new("a", Type::foreign("buf_t")).with_attrs(Attrs::new().with_array());
    assert_eq!(arr.foreign_array(), Some("buf_t"));

    let plain = Decl::new("a", Type::foreign("buf_t")).with_attrs(Attrs::new().with_ptr());
    assert_eq!(plain.foreign_array(), None);

    let not_foreign = Decl::new("a", Type::Int).with_attrs(Attrs::new().with_array());
    assert_eq!(not_foreign.foreign_array(), None);
}

#[test]
fn size_tokens_in_order() {
    let attrs = Attrs::new()
        .with_count(Token::name("n"))
        .with_size(Token::literal("4"));
    let tokens: Vec<_> = attrs.size_tokens().collect();
    assert_eq!(tokens, vec![&Token::literal("4"), &Token::name("n")]);
}

#[test]
fn referenced_names() {
    assert_eq!(Token::name("n").referenced_name(), Some("n"));
    assert_eq!(Token::Length("s".into()).referenced_name(), None);
}

#[test]
fn dims_keep_declared_order() {
    let d = Decl::new("m", Type::Int).with_dims(["2", "N"]);
    assert!(d.is_array());
    assert_eq!(d.dims, vec!["2".to_string(), "N".to_string()]);
}

#[test]
fn direction_annotations_carry_no_size() {
    let attrs = Attrs::new().with_in().with_out().with_user_check();
    assert!(attrs.is_in && attrs.is_out && attrs.user_check);
    assert!(!attrs.is_string());
    assert_eq!(attrs.size_tokens().count(), 0);
}
