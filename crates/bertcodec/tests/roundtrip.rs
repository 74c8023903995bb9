use bertcodec::value::tags::{BERT, NIL};
use bertcodec::{decode, encode, Atom, BertError, BertMap, RegexFlags, RegexValue, Value};
use chrono::{DateTime, TimeZone, Utc};

/// Encode twice, decode once, and check the encodings agree.
fn roundtrip(value: &Value) -> Value {
    let first = encode(value).expect("value should encode");
    let second = encode(value).expect("value should encode twice");
    let decoded = decode(&first).expect("encoding should decode");
    assert_eq!(first, second, "encoding must be deterministic");
    decoded
}

fn assert_roundtrip(value: Value) {
    assert_eq!(roundtrip(&value), value);
}

fn caseless() -> RegexFlags {
    RegexFlags::CASE_INSENSITIVE | RegexFlags::LOCALE_INVARIANT
}

#[test]
fn numbers() {
    for i in [7, 0, 255, -1, i64::from(i32::MIN), i64::from(i32::MAX), i64::MIN, i64::MAX] {
        assert_roundtrip(Value::Integer(i));
    }
    for f in [f64::MIN, f64::MAX, f64::EPSILON, f64::NAN, f64::NEG_INFINITY, f64::INFINITY] {
        assert_roundtrip(Value::Float(f));
    }
}

#[test]
fn text_comes_back_as_its_bytes() {
    let runes = "unicode: ᚠᛇᚻ᛫ᛒᛦᚦ᛫ᚠᚱᚩᚠᚢᚱ᛫ᚠᛁᚱᚪ᛫ᚷᛖᚻᚹᛦᛚᚳᚢᛗ";
    for s in ["", "nonempty", runes] {
        assert_eq!(roundtrip(&Value::from(s)), Value::binary(s.as_bytes().to_vec()));
    }
}

#[test]
fn atoms() {
    assert_roundtrip(Value::Atom(Atom::new("")));
    assert_roundtrip(Value::Atom(Atom::new("nonempty")));
}

#[test]
fn tuples() {
    assert_eq!(encode(&Value::Tuple(Vec::new())).unwrap().as_ref(), &[131, 104, 0]);
    assert_roundtrip(Value::Tuple(Vec::new()));
    assert_roundtrip(Value::tuple([Value::Nil]));
    assert_roundtrip(Value::tuple([
        Value::List(Vec::new()),
        Value::Tuple(Vec::new()),
        Value::tuple([Value::Nil]),
        Value::Integer(17),
    ]));
    assert_roundtrip(Value::tuple((0..300).map(Value::Integer)));
}

#[test]
fn lists() {
    assert_roundtrip(Value::List(Vec::new()));
    assert_roundtrip(Value::List(vec![
        Value::Integer(17),
        Value::Nil,
        Value::List(vec![Value::Float(0.0), Value::Nil]),
        Value::Float(7.7),
    ]));
}

#[test]
fn nil_and_booleans() {
    assert_roundtrip(Value::Nil);
    assert_roundtrip(Value::Bool(true));
    assert_roundtrip(Value::Bool(false));
}

#[test]
fn binaries() {
    let bytes = Value::binary(&[7u8, 8, 9, 0, 255][..]);
    assert_roundtrip(Value::binary(Vec::new()));
    assert_roundtrip(bytes.clone());
    assert_roundtrip(Value::tuple([bytes]));
    assert_roundtrip(Value::List(vec![
        Value::Nil,
        Value::binary(&b"foo"[..]),
        Value::binary(&[9u8, 0, 255][..]),
    ]));
}

#[test]
fn times_survive_to_the_millisecond() {
    for instant in [Utc::now(), DateTime::<Utc>::MIN_UTC, DateTime::<Utc>::MAX_UTC] {
        let Value::Time(back) = roundtrip(&Value::Time(instant)) else {
            panic!("time should decode as time");
        };
        let drift = (instant - back).num_microseconds().expect("drift fits");
        assert!(drift.abs() < 1_000, "{instant} came back as {back}");
    }
}

#[test]
fn regexes() {
    for regex in [
        RegexValue::new("", RegexFlags::EMPTY),
        RegexValue::new("foo", caseless()),
        RegexValue::new("x.*y", RegexFlags::MULTI_LINE),
        RegexValue::new("a", RegexFlags::EXPLICIT_CAPTURE),
        RegexValue::new("b", RegexFlags::DOT_MATCHES_NEW_LINE),
        RegexValue::new("^ᚠ+$", caseless() | RegexFlags::MULTI_LINE),
    ] {
        assert_roundtrip(Value::Regex(regex));
    }
}

#[test]
fn unsupported_regex_flags_fail_to_encode() {
    for flags in [
        RegexFlags::IGNORE_WHITESPACE,
        RegexFlags::RIGHT_TO_LEFT,
        RegexFlags::SWAP_GREED,
        RegexFlags::CASE_INSENSITIVE,
        RegexFlags::LOCALE_INVARIANT,
    ] {
        let result = encode(&Value::Regex(RegexValue::new("", flags)));
        assert!(
            matches!(result, Err(BertError::UnsupportedOption(_))),
            "{flags} should be rejected"
        );
    }
}

#[test]
fn dicts() {
    assert_roundtrip(Value::Map(BertMap::new()));

    let map = Value::map([
        (Value::Float(0.1), Value::Float(7.7)),
        (Value::Float(8.7), Value::Integer(9)),
        (Value::Integer(-2), Value::Integer(3)),
        (Value::Integer(666), Value::Integer(3)),
        (Value::from("foo"), Value::binary(&b"bar"[..])),
        (Value::from(""), Value::binary(&b"empty"[..])),
        (Value::from("x"), Value::Nil),
        (Value::from("a"), Value::Tuple(Vec::new())),
        (Value::from("b"), Value::tuple([Value::Integer(7)])),
        (Value::from("c"), Value::Map(BertMap::new())),
        (Value::from("d"), Value::map([("P", Value::binary(&b"Q"[..]))])),
    ]);
    assert_roundtrip(map);
}

#[test]
fn record_like_map() {
    let record = Value::map([
        ("foo", Value::Integer(777)),
        ("bar", Value::Float(8.88)),
        ("nothing", Value::Nil),
        ("tuple", Value::Atom(Atom::new("something"))),
        ("date", Value::Time(Utc.timestamp_opt(0, 0).unwrap())),
    ]);
    let decoded = roundtrip(&record);
    assert_eq!(decoded, record);
    assert_eq!(decoded.get("foo"), Some(&Value::Integer(777)));
}

#[test]
fn binary_map_keys_come_back_as_text() {
    let map = Value::map([(Value::binary(&b"key"[..]), Value::binary(&b"value"[..]))]);
    let decoded = roundtrip(&map);
    let entries = decoded.as_map().unwrap();
    assert!(entries.contains_key(&Value::from("key")));
    assert!(!entries.contains_key(&Value::binary(&b"key"[..])));
    // Only keys are coerced.
    assert_eq!(decoded.get("key"), Some(&Value::binary(&b"value"[..])));
}

#[test]
fn text_and_binary_keys_with_the_same_bytes_collide() {
    let map = Value::map([
        (Value::from("k"), Value::Integer(1)),
        (Value::binary(&b"k"[..]), Value::Integer(2)),
    ]);
    assert_eq!(map.as_map().unwrap().len(), 2);

    let bytes = encode(&map).unwrap();
    match decode(&bytes) {
        Err(BertError::InvalidBertTag(message)) => {
            assert!(message.contains("duplicate dict key"), "{message}");
        }
        other => panic!("expected a duplicate key error, got {other:?}"),
    }
}

#[test]
fn tag_shaped_tuples_are_not_reinterpreted_on_encode() {
    let spelled = Value::tuple([Value::Atom(BERT), Value::Atom(NIL)]);
    assert_eq!(roundtrip(&spelled), Value::Nil);

    let bogus = Value::tuple([Value::Atom(BERT), Value::Atom(Atom::new("bogus_atom"))]);
    let bytes = encode(&bogus).unwrap();
    assert!(matches!(decode(&bytes), Err(BertError::InvalidBertTag(_))));
}

#[test]
fn decoding_leaves_the_buffer_untouched() {
    let value = Value::map([("k", Value::List(vec![Value::Nil, Value::from("v")]))]);
    let encoded = encode(&value).unwrap();
    let buffer = encoded.to_vec();
    decode(&buffer).unwrap();
    decode(&buffer).unwrap();
    assert_eq!(buffer.as_slice(), encoded.as_ref());
    assert_eq!(encode(&value).unwrap(), encoded);
}

#[test]
fn wire_bytes() {
    let nil: &[u8] = &[131, 104, 2, 119, 4, b'b', b'e', b'r', b't', 119, 3, b'n', b'i', b'l'];
    assert_eq!(encode(&Value::Nil).unwrap().as_ref(), nil);

    let empty_map: &[u8] = &[
        131, 104, 3, 119, 4, b'b', b'e', b'r', b't', 119, 4, b'd', b'i', b'c', b't', 106,
    ];
    assert_eq!(encode(&Value::Map(BertMap::new())).unwrap().as_ref(), empty_map);

    let list = Value::List(vec![Value::Integer(1), Value::Nil, Value::Integer(3)]);
    let mut expected = vec![131, 108, 0, 0, 0, 3, 97, 1];
    expected.extend_from_slice(&nil[1..]);
    expected.extend_from_slice(&[97, 3, 106]);
    assert_eq!(encode(&list).unwrap().as_ref(), expected.as_slice());
}

#[test]
fn caseless_multiline_options_on_the_wire() {
    let regex = Value::Regex(RegexValue::new("x", caseless() | RegexFlags::MULTI_LINE));
    let term = bertcodec::value::encode(&regex).unwrap();
    let expected = bertcodec::Term::tuple(vec![
        bertcodec::Term::Atom(BERT),
        bertcodec::Term::Atom(Atom::new("regex")),
        bertcodec::Term::binary(&b"x"[..]),
        bertcodec::Term::list(vec![
            bertcodec::Term::Atom(Atom::new("unicode")),
            bertcodec::Term::Atom(Atom::new("caseless")),
            bertcodec::Term::Atom(Atom::new("multiline")),
        ]),
    ]);
    assert_eq!(term, expected);
}

#[cfg(feature = "serde")]
#[test]
fn term_config_from_json() {
    let config: bertcodec::TermConfig =
        serde_json::from_str(r#"{"max_depth": 8}"#).expect("config should parse");
    assert_eq!(config.max_depth, 8);
    assert_eq!(
        config.max_binary_size,
        bertcodec::TermConfig::default().max_binary_size
    );

    let codec = bertcodec::BertCodec::with_config(config);
    let deep = (0..16).fold(Value::Integer(0), |inner, _| Value::List(vec![inner]));
    assert!(codec.encode(&deep).is_err());
}
