#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::{BTreeMap, HashMap};

use dynval::{
    decode, decode_value, dynval, from_value, to_value, DecodeError, DynDecode, DynEncode,
    DynValue, ErrorCode, HostValue,
};

#[allow(non_snake_case)]
#[derive(Debug, Default, PartialEq, DynEncode, DynDecode)]
struct TestStruct {
    #[dynval(tag = "name")]
    Name: String,
    #[dynval(tag = "age")]
    Age: i64,
    #[dynval(tag = "-")]
    Ignored: String,
    Default: String,
}

#[derive(Debug, Default, PartialEq, DynEncode, DynDecode)]
struct ComplexStruct {
    nested: TestStruct,
    list: Vec<i32>,
}

#[test]
fn scalars_round_trip() {
    let mut s = String::new();
    decode(&to_value("hello"), &mut s).unwrap();
    assert_eq!(s, "hello");

    let mut i = 0i32;
    decode(&to_value(&123), &mut i).unwrap();
    assert_eq!(i, 123);

    let mut f = 0.0f64;
    decode(&to_value(&2.75), &mut f).unwrap();
    assert!((f - 2.75).abs() < f64::EPSILON);

    let mut b = false;
    decode(&to_value(&true), &mut b).unwrap();
    assert!(b);

    let mut by = 0u8;
    decode(&to_value(&255u8), &mut by).unwrap();
    assert_eq!(by, 255);
}

#[test]
fn records_round_trip() {
    let src = TestStruct {
        Name: "Alice".into(),
        Age: 30,
        Ignored: "secret".into(),
        Default: "visible".into(),
    };
    let mut out = TestStruct::default();
    decode(&to_value(&src), &mut out).unwrap();
    assert_eq!(
        out,
        TestStruct {
            Name: "Alice".into(),
            Age: 30,
            Ignored: String::new(),
            Default: "visible".into(),
        }
    );
}

#[test]
fn excluded_field_ignores_source_key() {
    let src = dynval!({"name": "n", "-": "x", "Ignored": "leak"});
    let mut out = TestStruct::default();
    decode(&src, &mut out).unwrap();
    assert!(out.Ignored.is_empty());
}

#[test]
fn nested_records() {
    let src = ComplexStruct {
        nested: TestStruct {
            Name: "Diff".into(),
            Age: 40,
            ..TestStruct::default()
        },
        list: vec![5, 6],
    };
    let out: ComplexStruct = from_value(&to_value(&src)).unwrap();
    assert_eq!(out, src);
}

#[test]
fn missing_and_null_fields_keep_current_values() {
    let mut out = TestStruct {
        Name: "keep".into(),
        Age: 7,
        ..TestStruct::default()
    };
    decode(&dynval!({"name": null}), &mut out).unwrap();
    assert_eq!(out.Name, "keep");
    assert_eq!(out.Age, 7);
}

#[test]
fn any_map_materializes_numbers_as_floats() {
    let src = to_value(&dynval!({"x": 10, "y": "z"}));
    let mut res: HashMap<String, DynValue> = HashMap::new();
    decode(&src, &mut res).unwrap();
    assert_eq!(res["x"], DynValue::Number(10.0));
    assert_eq!(res["y"], dynval!("z"));
}

#[test]
fn empty_map() {
    let src = to_value(&HashMap::<String, i32>::new());
    let mut res: HashMap<String, i32> = HashMap::new();
    decode(&src, &mut res).unwrap();
    assert!(res.is_empty());
}

#[test]
fn maps_overlay_existing_entries() {
    let mut dest = BTreeMap::new();
    dest.insert(String::from("b"), 2);
    decode(&dynval!({"a": 1}), &mut dest).unwrap();
    assert_eq!(dest.len(), 2);
    assert_eq!(dest["a"], 1);
    assert_eq!(dest["b"], 2);
}

#[test]
fn sequences_are_replaced() {
    let mut res = vec![9, 9, 9, 9];
    decode(&to_value(&vec![1, 2, 3]), &mut res).unwrap();
    assert_eq!(res, vec![1, 2, 3]);

    let mut any: Vec<DynValue> = Vec::new();
    decode(&dynval!([1, "a"]), &mut any).unwrap();
    assert_eq!(any.len(), 2);
}

#[test]
fn bytes_from_string_and_array() {
    let mut out: Vec<u8> = Vec::new();
    decode(&to_value(&b"binary data".to_vec()), &mut out).unwrap();
    assert_eq!(out, b"binary data");

    decode(&dynval!([1, 2]), &mut out).unwrap();
    assert_eq!(out, vec![1, 2]);

    let mut nested: Vec<Vec<u8>> = Vec::new();
    decode(&to_value(&vec![b"one".to_vec(), b"two".to_vec()]), &mut nested).unwrap();
    assert_eq!(nested, vec![b"one".to_vec(), b"two".to_vec()]);
}

#[test]
fn non_ascii_text_bytes_round_trip() {
    let mut out: Vec<u8> = Vec::new();
    decode(&dynval!("café"), &mut out).unwrap();
    assert_eq!(out, "café".as_bytes());

    // The bytes of one character do not depend on the rest of the string.
    decode(&dynval!("café\u{263a}"), &mut out).unwrap();
    assert_eq!(out, "café\u{263a}".as_bytes());
    assert_eq!(&out[..5], &[99, 97, 102, 195, 169]);

    let invalid = vec![0x63u8, 0xe9, 0xff];
    let back: Vec<u8> = from_value(&to_value(&invalid)).unwrap();
    assert_eq!(back, invalid);
}

#[test]
fn byte_elements_narrow_like_scalar_bytes() {
    let mut out: Vec<u8> = Vec::new();
    decode(&dynval!([300, (-1), 7.9]), &mut out).unwrap();
    assert_eq!(out, vec![255, 0, 7]);

    let mut scalar = 0u8;
    for (src, want) in [(300, 255u8), (-1, 0), (7, 7)] {
        decode(&dynval!(src), &mut scalar).unwrap();
        assert_eq!(scalar, want);
    }
}

#[test]
fn byte_field_in_record() {
    #[derive(Default, DynEncode, DynDecode)]
    struct ByteStruct {
        data: Vec<u8>,
    }

    let v = to_value(&ByteStruct {
        data: b"hello".to_vec(),
    });
    assert_eq!(v, dynval!({"data": "hello"}));
    let back: ByteStruct = from_value(&v).unwrap();
    assert_eq!(back.data, b"hello");
}

#[test]
fn shape_mismatches_are_silent() {
    let mut s = TestStruct {
        Name: "orig".into(),
        ..TestStruct::default()
    };
    decode(&dynval!("not object"), &mut s).unwrap();
    assert_eq!(s.Name, "orig");

    let mut sl = vec![1];
    decode(&dynval!({}), &mut sl).unwrap();
    assert_eq!(sl, vec![1]);

    let mut n = 5i32;
    decode(&dynval!("5"), &mut n).unwrap();
    assert_eq!(n, 5);

    let mut text = String::from("t");
    decode(&dynval!(5), &mut text).unwrap();
    assert_eq!(text, "t");
}

#[test]
fn invalid_destinations() {
    let err = decode(&DynValue::Null, None::<&mut i32>).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidDestination);

    let i = 0i32;
    let err = decode(&DynValue::Null, &i).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidDestination);
}

#[test]
fn any_destination_mirrors_source() {
    let src = to_value(&dynval!({"bool": true, "null": null, "list": [false, 42.0]}));
    let mut res = DynValue::Null;
    decode(&src, &mut res).unwrap();
    assert_eq!(res.get("bool"), Some(&DynValue::Bool(true)));
    assert_eq!(res.get("null"), Some(&DynValue::Null));
    let list = res.get("list").and_then(DynValue::as_array).unwrap();
    assert_eq!(list[0], DynValue::Bool(false));
    assert_eq!(list[1], DynValue::Number(42.0));
    assert_eq!(decode_value(&src), res);
}

#[test]
fn narrowing_truncates_and_saturates() {
    let mut i = 0i32;
    decode(&dynval!(3.9), &mut i).unwrap();
    assert_eq!(i, 3);

    let mut u = 0u8;
    decode(&dynval!(300), &mut u).unwrap();
    assert_eq!(u, 255);

    decode(&dynval!((-1)), &mut u).unwrap();
    assert_eq!(u, 0);
}

/// Accepts odd numbers and rejects even ones.
#[derive(Debug, Default, PartialEq)]
struct Odd(u32);

impl DynDecode for Odd {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn decode_from<H: HostValue>(&mut self, source: &H) -> Result<(), DecodeError> {
        let n = source.as_number().unwrap_or_default();
        if n % 2.0 == 0.0 {
            return Err(DecodeError::rejected("even"));
        }
        self.0 = n as u32;
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, DynDecode)]
struct Outer {
    a: u32,
    inner: Vec<Odd>,
    b: u32,
}

#[test]
fn nested_errors_stop_the_record_at_the_failing_field() {
    let src = dynval!({"a": 1, "inner": [1, 2, 3], "b": 5});
    let mut out = Outer::default();
    let err = decode(&src, &mut out).unwrap_err();
    assert_eq!(err.code, ErrorCode::Rejected("even"));
    assert_eq!(
        out,
        Outer {
            a: 1,
            inner: Vec::new(),
            b: 0,
        }
    );
}

#[test]
fn nested_errors_pass_through_containers() {
    let mut seq: Vec<Odd> = vec![Odd(9)];
    let err = decode(&dynval!([3, 4, 5]), &mut seq).unwrap_err();
    assert_eq!(err.code, ErrorCode::Rejected("even"));
    assert_eq!(seq, vec![Odd(9)]);

    let mut map: HashMap<String, Odd> = HashMap::new();
    let err = decode(&dynval!({"x": 2}), &mut map).unwrap_err();
    assert_eq!(err.code, ErrorCode::Rejected("even"));
    assert!(map.is_empty());

    let mut opt: Option<Odd> = None;
    let err = decode(&dynval!(2), &mut opt).unwrap_err();
    assert_eq!(err.code, ErrorCode::Rejected("even"));
    assert_eq!(opt, None);

    let mut pair = (Odd(1), 0u32);
    let err = decode(&dynval!([2, 7]), &mut pair).unwrap_err();
    assert_eq!(err.code, ErrorCode::Rejected("even"));
    assert_eq!(pair, (Odd(1), 0));

    let ok: Vec<Odd> = from_value(&dynval!([1, 3])).unwrap();
    assert_eq!(ok, vec![Odd(1), Odd(3)]);
}
