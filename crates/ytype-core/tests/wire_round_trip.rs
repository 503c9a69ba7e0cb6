//! # Wire Round-Trip Tests
//!
//! Exercises the public API the way a protocol decoder does: wire string
//! in, validated value out, canonical string back. Each section pins one
//! observable contract of the value types.

use ytype_core::{
    Decimal, Decimal64, ErrorKind, IdentityRef, IdentityStatement, Int32, LeafType, UInt8,
    ValueError, YangValue,
};

fn kind<T: std::fmt::Debug>(r: Result<T, ValueError>) -> ErrorKind {
    r.expect_err("expected a validation failure").kind()
}

// ---------------------------------------------------------------------------
// int32
// ---------------------------------------------------------------------------

#[test]
fn int32_extremes_round_trip() {
    for v in [i32::MIN, -1, 0, 1, i32::MAX] {
        let text = Int32::new(v).canonical_string();
        assert_eq!(Int32::parse(&text).unwrap().value(), v);
    }
}

#[test]
fn int32_from_float() {
    assert_eq!(Int32::from_number(1_000_000.75f64).unwrap().value(), 1_000_000);
    assert_eq!(Int32::from_number(-17.2f32).unwrap().value(), -17);
    assert_eq!(kind(Int32::from_number(3.0e9f64)), ErrorKind::OutOfRange);
    assert_eq!(kind(Int32::from_number(-3.0e9f64)), ErrorKind::OutOfRange);
}

#[test]
fn int32_from_decimal() {
    let d = Decimal::from_str_exact("2147483647.0").unwrap();
    assert_eq!(Int32::from_number(d).unwrap().value(), i32::MAX);
    let d = Decimal::from_str_exact("2147483647.01").unwrap();
    assert_eq!(kind(Int32::from_number(d)), ErrorKind::OutOfRange);
}

#[test]
fn integer_is_fromstr() {
    let v: UInt8 = "255".parse().unwrap();
    assert_eq!(v, 255u8);
    assert_eq!(kind("256".parse::<UInt8>()), ErrorKind::BadValue);
}

// ---------------------------------------------------------------------------
// decimal64
// ---------------------------------------------------------------------------

#[test]
fn decimal64_two_fraction_digits() {
    let max = Decimal64::parse("92233720368547758.07", 2).unwrap();
    assert_eq!(max.min().to_string(), "-92233720368547758.08");
    assert_eq!(max.max().to_string(), "92233720368547758.07");
    assert_eq!(max.canonical_string(), "92233720368547758.07");

    assert_eq!(
        kind(Decimal64::parse("92233720368547758.08", 2)),
        ErrorKind::OutOfRange
    );
}

#[test]
fn decimal64_fraction_digits_domain() {
    assert_eq!(kind(Decimal64::parse("1", 0)), ErrorKind::ConstraintViolation);
    assert_eq!(kind(Decimal64::parse("1", 19)), ErrorKind::ConstraintViolation);
    for fd in 1..=18 {
        assert!(Decimal64::parse("1", fd).is_ok(), "fd {fd}");
    }
}

#[test]
fn decimal64_parse_error_precedes_constraint() {
    assert_eq!(kind(Decimal64::parse("1e5", 2)), ErrorKind::BadValue);
    assert_eq!(kind(Decimal64::parse("not-a-number", 0)), ErrorKind::BadValue);
}

#[test]
fn decimal64_literal_classification() {
    let cases: &[(&str, u8, ErrorKind)] = &[
        // Well-formed but far beyond any bound.
        ("100000000000000000000000000000", 2, ErrorKind::OutOfRange),
        ("1000000000000000000000000000000000000000", 2, ErrorKind::OutOfRange),
        ("-1000000000000000000000000000000000000000", 18, ErrorKind::OutOfRange),
        ("9223372036854775808", 1, ErrorKind::OutOfRange),
        ("10", 18, ErrorKind::OutOfRange),
        // Not literals.
        ("1_000.5", 2, ErrorKind::BadValue),
        (".5", 2, ErrorKind::BadValue),
        ("5.", 2, ErrorKind::BadValue),
        ("1E5", 2, ErrorKind::BadValue),
        ("+", 2, ErrorKind::BadValue),
        ("1.5 ", 2, ErrorKind::BadValue),
        // More fraction digits than fraction-digits allows.
        ("0.0000000000000000000000000000001", 18, ErrorKind::BadValue),
        ("1.125", 2, ErrorKind::BadValue),
        // Parameter invalid.
        ("1.5", 19, ErrorKind::ConstraintViolation),
    ];
    for &(literal, fd, expected) in cases {
        assert_eq!(
            kind(Decimal64::parse(literal, fd)),
            expected,
            "{literal:?} fd {fd}"
        );
    }
}

#[test]
fn decimal64_from_number_classification() {
    assert_eq!(kind(Decimal64::from_number(1e-30f64, 18)), ErrorKind::BadValue);
    assert_eq!(kind(Decimal64::from_number(1e30f64, 2)), ErrorKind::OutOfRange);
    assert_eq!(kind(Decimal64::from_number(f64::INFINITY, 2)), ErrorKind::OutOfRange);
    assert_eq!(
        Decimal64::from_number(9.2f64, 18).unwrap().canonical_string(),
        "9.2"
    );
}

#[test]
fn decimal64_every_fraction_digit_round_trips() {
    for fd in 1u8..=18 {
        let literal = format!("-1.{}", "9".repeat(usize::from(fd)));
        let first = Decimal64::parse(&literal, fd).unwrap();
        let second = Decimal64::parse(&first.canonical_string(), fd).unwrap();
        assert_eq!(second.canonical_string(), literal);
        assert_eq!(first, second);
    }
}

#[test]
fn decimal64_check_after_construction_holds() {
    let mut d = Decimal64::parse("-0.5", 1).unwrap();
    assert!(d.check().is_ok());
    assert_eq!(d.fraction_digits(), 1);
}

// ---------------------------------------------------------------------------
// identityref
// ---------------------------------------------------------------------------

#[test]
fn identityref_wire_form() {
    let wire = "eth urn:example:module eth-mod";
    let r = IdentityRef::parse(wire).unwrap();
    assert_eq!(r.canonical_string(), wire);

    assert_eq!(kind(IdentityRef::parse("a b")), ErrorKind::BadValue);
    assert_eq!(kind(IdentityRef::parse("a b c d")), ErrorKind::BadValue);
}

#[test]
fn identityref_construction_paths_agree() {
    let (id, ns, prefix) = ("eth", "urn:example:module", "eth-mod");
    let from_fields = IdentityRef::new(id, ns, prefix).unwrap();
    let from_wire = IdentityRef::parse(&format!("{id} {ns} {prefix}")).unwrap();
    let from_statement =
        IdentityRef::from_statement(IdentityStatement::new(id, ns, prefix).unwrap()).unwrap();

    assert_eq!(from_fields, from_wire);
    assert_eq!(from_fields, from_statement);
    assert_eq!(from_fields, from_fields.statement().clone());
    assert_eq!(from_fields, from_fields.statement().to_tree());
}

#[test]
fn identityref_never_equals_unrelated_scalar() {
    let r = YangValue::IdentityRef(IdentityRef::parse("eth urn:example:module eth-mod").unwrap());
    let n = YangValue::Int32(Int32::new(7));
    assert_ne!(r, n);
}

// ---------------------------------------------------------------------------
// leaf descriptors
// ---------------------------------------------------------------------------

#[test]
fn descriptor_drives_decoding() {
    let leaves = [
        ("type: int32\n", "-42", "-42"),
        ("type: uint8\nrange: \"10..20\"\n", "015", "15"),
        ("type: decimal64\nfraction-digits: 3\n", "2.500", "2.500"),
        ("type: identityref\n", "a urn:b c", "a urn:b c"),
    ];
    for (yaml, wire, canonical) in leaves {
        let leaf = LeafType::from_yaml(yaml).unwrap();
        assert_eq!(leaf.parse(wire).unwrap().canonical_string(), canonical, "{yaml}");
    }
}

// ---------------------------------------------------------------------------
// threading
// ---------------------------------------------------------------------------

#[test]
fn values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Int32>();
    assert_send_sync::<Decimal64>();
    assert_send_sync::<IdentityRef>();
    assert_send_sync::<YangValue>();
}
