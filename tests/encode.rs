#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use dynval::{dynval, to_value, DynEncode, DynValue, Opaque, Rendered};

#[allow(non_snake_case)]
#[derive(Default, DynEncode)]
struct TestStruct {
    #[dynval(tag = "name")]
    Name: String,
    #[dynval(tag = "age")]
    Age: i64,
    #[dynval(tag = "-")]
    Ignored: String,
    Default: String,
}

#[test]
fn scalars() {
    assert_eq!(to_value(&()), DynValue::Null);
    assert_eq!(to_value("hello"), dynval!("hello"));
    assert_eq!(to_value(&123i32), DynValue::Number(123.0));
    assert_eq!(to_value(&1i8), DynValue::Number(1.0));
    assert_eq!(to_value(&1i16), DynValue::Number(1.0));
    assert_eq!(to_value(&1i64), DynValue::Number(1.0));
    assert_eq!(to_value(&1usize), DynValue::Number(1.0));
    assert_eq!(to_value(&1u8), DynValue::Number(1.0));
    assert_eq!(to_value(&1u16), DynValue::Number(1.0));
    assert_eq!(to_value(&1u32), DynValue::Number(1.0));
    assert_eq!(to_value(&1u64), DynValue::Number(1.0));
    assert_eq!(to_value(&1.5f32), DynValue::Number(1.5));
    assert_eq!(to_value(&1.5f64), DynValue::Number(1.5));
    assert_eq!(to_value(&true), DynValue::Bool(true));
    assert_eq!(to_value(&'x'), dynval!("x"));
}

#[test]
fn large_integers_lose_precision() {
    let v = to_value(&(u64::MAX));
    assert_eq!(v.as_f64(), Some(18_446_744_073_709_551_615_f64));
}

#[test]
fn bytes_become_strings() {
    assert_eq!(to_value(&b"xyz".to_vec()), dynval!("xyz"));
    assert_eq!(to_value(&b"xyz"[..]), dynval!("xyz"));
    assert_eq!(to_value(b"xyz"), dynval!("xyz"));
    assert_eq!(to_value(&Vec::<u8>::new()), dynval!(""));
}

#[test]
fn utf8_bytes_encode_as_their_text() {
    assert_eq!(to_value(&"café".as_bytes().to_vec()), dynval!("café"));
    assert_eq!(to_value("\u{263a}".as_bytes()), dynval!("\u{263a}"));
}

#[test]
fn invalid_utf8_bytes_encode_as_numbers() {
    let v = to_value(&vec![0x00u8, 0x7f, 0x80, 0xff]);
    assert_eq!(v, dynval!([0, 127, 128, 255]));
}

#[test]
fn sequences() {
    assert_eq!(to_value(&vec![1, 2]), dynval!([1, 2]));
    assert_eq!(to_value(&vec!["a", "b"]), dynval!(["a", "b"]));
    assert_eq!(to_value(&vec![1.1, 2.2]), dynval!([1.1, 2.2]));
    assert_eq!(to_value(&Vec::<i32>::new()), dynval!([]));
    assert_eq!(to_value(&[true, false]), dynval!([true, false]));

    let mixed = vec![dynval!(1), dynval!("a")];
    assert_eq!(to_value(&mixed), dynval!([1, "a"]));

    // Only u8 gets the string form.
    assert_eq!(to_value(&vec![1u16, 2]), dynval!([1, 2]));
    assert_eq!(to_value(&vec![1i8, 2]), dynval!([1, 2]));
}

#[test]
fn nested_byte_sequences_become_string_arrays() {
    let input = vec![b"one".to_vec(), b"two".to_vec()];
    assert_eq!(to_value(&input), dynval!(["one", "two"]));
}

#[test]
fn maps() {
    let mut any = HashMap::new();
    any.insert("a", dynval!(1));
    assert_eq!(to_value(&any), dynval!({"a": 1}));

    let mut strings = BTreeMap::new();
    strings.insert(String::from("a"), String::from("b"));
    assert_eq!(to_value(&strings), dynval!({"a": "b"}));

    let empty: HashMap<String, i32> = HashMap::new();
    let v = to_value(&empty);
    assert_eq!(v.as_object().map(dynval::Object::len), Some(0));
}

#[test]
fn records_use_resolved_keys() {
    let v = to_value(&TestStruct {
        Name: "Alice".into(),
        Age: 30,
        Ignored: "secret".into(),
        Default: "visible".into(),
    });
    assert_eq!(
        v,
        dynval!({"name": "Alice", "age": 30, "Default": "visible"})
    );
    assert!(v.get("Ignored").is_none());
}

#[test]
fn references_and_options() {
    let s = TestStruct {
        Name: "Bob".into(),
        ..TestStruct::default()
    };
    let boxed = Box::new(&s);
    assert_eq!(to_value(&boxed).get("name"), Some(&dynval!("Bob")));
    assert_eq!(to_value(&Rc::new(5u8)), dynval!(5));

    let absent: Option<Box<TestStruct>> = None;
    assert_eq!(to_value(&absent), DynValue::Null);
    assert_eq!(to_value(&Some(3)), dynval!(3));
}

#[test]
fn tuples_become_arrays() {
    assert_eq!(to_value(&(1, "a", true)), dynval!([1, "a", true]));
}

#[test]
fn non_data_values_fall_back_to_strings() {
    let f: fn(u8) -> u8 = |x| x;
    let v = to_value(&Opaque(f));
    assert!(v.as_str().unwrap().contains("fn(u8)"));

    let addr: std::net::Ipv4Addr = "10.0.0.1".parse().unwrap();
    assert_eq!(to_value(&Rendered(addr)), dynval!("10.0.0.1"));
}
