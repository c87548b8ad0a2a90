//! Tests for declaration rendering.

use super::*;
use edl_ir::{Attrs, Decl};

mod type_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn primitive_table() {
        let table = [
            (Type::Bool, "bool"),
            (Type::Char, "char"),
            (Type::Short, "short int"),
            (Type::Int, "int"),
            (Type::Long, "long int"),
            (Type::LLong, "long long"),
            (Type::Float, "float"),
            (Type::Double, "double"),
            (Type::LDouble, "long double"),
            (Type::Int8, "int8_t"),
            (Type::Int16, "int16_t"),
            (Type::Int32, "int32_t"),
            (Type::Int64, "int64_t"),
            (Type::UInt8, "uint8_t"),
            (Type::UInt16, "uint16_t"),
            (Type::UInt32, "uint32_t"),
            (Type::UInt64, "uint64_t"),
            (Type::WChar, "wchar_t"),
            (Type::Void, "void"),
            (Type::SizeT, "size_t"),
        ];
        for (ty, expected) in table {
            assert_eq!(CTypeMapper::map_type(&ty), expected, "{ty:?}");
        }
    }

    #[test]
    fn named_types() {
        assert_eq!(CTypeMapper::map_type(&Type::enum_("color")), "enum color");
        assert_eq!(CTypeMapper::map_type(&Type::struct_("point")), "struct point");
        assert_eq!(CTypeMapper::map_type(&Type::union("num")), "union num");
        assert_eq!(CTypeMapper::map_type(&Type::foreign("HANDLE")), "HANDLE");
    }

    #[test]
    fn unsigned_prefixes_inner() {
        assert_eq!(CTypeMapper::map_type(&Type::unsigned(Type::Short)), "unsigned short int");
        assert_eq!(CTypeMapper::map_type(&Type::unsigned(Type::LLong)), "unsigned long long");
    }

    #[test]
    fn const_ptr_order_matters() {
        let const_ptr = Type::const_(Type::ptr(Type::Char));
        let ptr_const = Type::ptr(Type::const_(Type::Char));
        assert_eq!(CTypeMapper::map_type(&const_ptr), "char* const");
        assert_eq!(CTypeMapper::map_type(&ptr_const), "const char*");

        let ptr_const_ptr = Type::ptr(Type::const_(Type::ptr(Type::Int)));
        let const_ptr_ptr = Type::const_(Type::ptr(Type::ptr(Type::Int)));
        assert_eq!(CTypeMapper::map_type(&ptr_const_ptr), "int* const*");
        assert_eq!(CTypeMapper::map_type(&const_ptr_ptr), "int** const");
    }

    #[test]
    fn unqualified_drops_every_const() {
        let ty = Type::ptr(Type::const_(Type::ptr(Type::const_(Type::struct_("s")))));
        assert_eq!(CTypeMapper::map_type(&ty), "const struct s* const*");
        assert_eq!(CTypeMapper::map_type_unqualified(&ty), "struct s**");
    }

    #[test]
    fn base_type_unwraps_indirection() {
        let ty = Type::ptr(Type::const_(Type::struct_("s")));
        assert_eq!(CTypeMapper::base_type(&ty), "struct s");
        assert_eq!(CTypeMapper::base_type(&Type::ptr(Type::foreign("obj_t"))), "obj_t");
        assert_eq!(CTypeMapper::base_type(&Type::ptr(Type::unsigned(Type::Int))), "unsigned int");
    }
}

mod decl_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn identifier_name_gets_space() {
        assert_eq!(decl_str("x", &Type::Int, &[]), "int x");
        assert_eq!(decl_str("_x", &Type::ptr(Type::Char), &[]), "char* _x");
    }

    #[test]
    fn const_pointer_declaration() {
        let ty = Type::const_(Type::ptr(Type::Char));
        assert_eq!(decl_str("p", &ty, &[]), "char* const p");
    }

    #[test]
    fn empty_name_is_abstract_declarator() {
        let dims = vec!["2".to_string()];
        assert_eq!(decl_str("", &Type::Int, &dims), "int[2]");
        assert_eq!(decl_str("", &Type::ptr(Type::Int), &[]), "int*");
    }

    #[test]
    fn dims_in_declared_order() {
        let dims = vec!["2".to_string(), "LEN".to_string()];
        assert_eq!(dims_str(&dims), "[2][LEN]");
        assert_eq!(decl_str("m", &Type::Double, &dims), "double m[2][LEN]");
        assert_eq!(dims_str(&[]), "");
    }
}

mod member_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn array_member_becomes_pointer() {
        let d = Decl::new("vals", Type::const_(Type::Int)).with_dims(["4"]);
        assert_eq!(member_decl(&d), "int* vals");
        assert_eq!(member_type(&d), "int*");
    }

    #[test]
    fn scalar_member() {
        let d = Decl::new("s", Type::ptr(Type::const_(Type::Char)));
        assert_eq!(member_decl(&d), "char* s");
        assert_eq!(member_type(&d), "char*");
    }

    #[test]
    fn foreign_array_member() {
        let d = Decl::new("blob", Type::foreign("blob_t")).with_attrs(Attrs::new().with_array());
        assert_eq!(member_decl(&d), "/* foreign array of type blob_t */ void* blob");
        assert_eq!(member_type(&d), "/* foreign array of type blob_t */ void*");
    }

    #[test]
    fn foreign_pointer_member_is_plain() {
        let d = Decl::new("h", Type::foreign("handle_t")).with_attrs(Attrs::new().with_ptr());
        assert_eq!(member_decl(&d), "handle_t h");
    }
}
