#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use syn::parse_quote;

fn expand_err(input: &DeriveInput) -> String {
    match expand(input) {
        Ok(tokens) => panic!("expected an error, got: {tokens}"),
        Err(err) => err.to_string(),
    }
}

#[test]
fn test_enum_with_aliases() {
    let input: DeriveInput = parse_quote! {
        enum Lang {
            #[alias("")]
            None,
            #[alias("uk")]
            Ukraine,
            #[alias("en")]
            English,
        }
    };

    let tokens = expand(&input).expect("enum should expand").to_string();

    assert!(tokens.contains("ShapeKind :: Enum"));
    assert!(tokens.contains("\"Ukraine\""));
    assert!(tokens.contains("Some (\"uk\")"));
    assert!(tokens.contains("Some (\"\")"));
    assert!(tokens.contains("Lang :: English as i64"));
}

#[test]
fn test_enum_without_alias_uses_none() {
    let input: DeriveInput = parse_quote! {
        enum Flag {
            On,
        }
    };

    let tokens = expand(&input).unwrap().to_string();
    assert!(tokens.contains("\"On\""));
    assert!(tokens.contains("Flag :: On as i64"));
    assert!(!tokens.contains("Some (\""));
}

#[test]
fn test_default_variant_index() {
    let input: DeriveInput = parse_quote! {
        enum Level {
            Low,
            #[default]
            Medium,
            High,
        }
    };

    let tokens = expand(&input).unwrap().to_string();
    assert!(tokens.contains("Option :: Some (1)"));
}

#[test]
fn test_struct_is_described_as_struct() {
    let input: DeriveInput = parse_quote! {
        struct Payload {
            lang: String,
        }
    };

    let tokens = expand(&input).unwrap().to_string();
    assert!(tokens.contains("ShapeKind :: Struct"));
    assert!(!tokens.contains("MemberShape"));
}

#[test]
fn test_rejects_variant_fields() {
    let input: DeriveInput = parse_quote! {
        enum Value {
            Text(String),
        }
    };
    assert!(expand_err(&input).contains("only supports fieldless variants"));
}

#[test]
fn test_rejects_empty_enum() {
    let input: DeriveInput = parse_quote! {
        enum Never {}
    };
    assert!(expand_err(&input).contains("at least one variant"));
}

#[test]
fn test_rejects_generics() {
    let input: DeriveInput = parse_quote! {
        enum Tagged<T> {
            A,
            B,
        }
    };
    assert!(expand_err(&input).contains("does not support generic types"));
}

#[test]
fn test_rejects_union() {
    let input: DeriveInput = parse_quote! {
        union Bits {
            a: u32,
            b: f32,
        }
    };
    assert!(expand_err(&input).contains("does not support unions"));
}

#[test]
fn test_rejects_duplicate_alias() {
    let input: DeriveInput = parse_quote! {
        enum Lang {
            #[alias("uk")]
            #[alias("ua")]
            Ukraine,
        }
    };
    assert!(expand_err(&input).contains("duplicate #[alias] attribute"));
}

#[test]
fn test_rejects_non_string_alias() {
    let input: DeriveInput = parse_quote! {
        enum Lang {
            #[alias(42)]
            Ukraine,
        }
    };
    assert!(expand(&input).is_err());
}

#[test]
fn test_wide_unsigned_repr_checks_ordinal_range() {
    let input: DeriveInput = parse_quote! {
        #[repr(C, u64)]
        enum Mask {
            Low = 1,
            High = 0x7fff_ffff_ffff_ffff,
        }
    };

    let tokens = expand(&input).unwrap().to_string();
    assert!(tokens.contains("Mask :: High as u128"));
    assert!(tokens.contains("Mask::High discriminant exceeds i64::MAX"));
}

#[test]
fn test_i128_repr_checks_both_bounds() {
    let input: DeriveInput = parse_quote! {
        #[repr(i128)]
        enum Offset {
            Back = -1,
            Ahead = 1,
        }
    };

    let tokens = expand(&input).unwrap().to_string();
    assert!(tokens.contains("Offset :: Back as i128"));
    assert!(tokens.contains("i64 :: MIN"));
}

#[test]
fn test_narrow_repr_has_no_range_check() {
    let input: DeriveInput = parse_quote! {
        #[repr(u32)]
        enum Port {
            Http = 80,
        }
    };

    let tokens = expand(&input).unwrap().to_string();
    assert!(!tokens.contains("as u128"));
    assert!(!tokens.contains("assert"));
}
