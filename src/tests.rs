use bytes::Bytes;

use super::*;

fn sample_values() -> Vec<Value> {
    let mut info = Dict::new();
    info.insert("name", Value::string("example.txt"));
    info.insert("length", Value::Integer(1024));
    info.insert("piece length", Value::Integer(16384));
    info.insert("pieces", Value::from(vec![0u8, 255, 19, b'e', b':']));

    let mut torrent = Dict::new();
    torrent.insert("info", Value::Dict(info));
    torrent.insert("announce", Value::string("http://tracker.example.com/announce"));
    torrent.insert(
        "announce-list",
        Value::from(vec![
            Value::from(vec![Value::string("udp://a.example:6969")]),
            Value::from(vec![Value::string("udp://b.example:6969")]),
        ]),
    );

    let mut binary_keys = Dict::new();
    binary_keys.insert(vec![0xffu8, 0x00], Value::Integer(-1));
    binary_keys.insert(vec![0x00u8], Value::Integer(i64::MIN));
    binary_keys.insert(Bytes::new(), Value::Integer(i64::MAX));

    vec![
        Value::Integer(0),
        Value::Integer(-7),
        Value::string(""),
        Value::string("spam"),
        Value::List(List::new()),
        Value::Dict(Dict::new()),
        Value::Dict(torrent),
        Value::Dict(binary_keys),
        Value::from(vec![
            Value::from(vec![Value::from(vec![Value::Integer(3)])]),
            Value::Dict(Dict::new()),
            Value::string("3:abc"),
        ]),
    ]
}

fn assert_sorted(value: &Value) {
    match value {
        Value::Dict(dict) => {
            let keys: Vec<&Bytes> = dict.keys().collect();
            assert!(keys.windows(2).all(|w| w[0] < w[1]), "{:?}", keys);
            dict.values().for_each(assert_sorted);
        }
        Value::List(list) => list.iter().for_each(assert_sorted),
        Value::Integer(_) | Value::Bytes(_) => {}
    }
}

#[test]
fn test_roundtrip() {
    // Keys must be sorted lexicographically for bencode roundtrip
    let original = b"d8:announce15:http://test.com4:infod4:name4:test12:piece lengthi16384eee";
    let decoded = decode(original).unwrap();
    let encoded = encode(&decoded).unwrap();
    assert_eq!(encoded, original);
}

#[test]
fn test_roundtrip_values() {
    for value in sample_values() {
        let encoded = encode(&value).unwrap();
        assert_eq!(decode(&encoded).unwrap(), value);
    }
}

#[test]
fn test_canonical_idempotence() {
    for value in sample_values() {
        let first = encode(&value).unwrap();
        let second = encode(&decode(&first).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_sorted_keys_invariant() {
    for value in sample_values() {
        assert_sorted(&value);
    }
    assert_sorted(&decode(b"d1:bd1:zi1e1:ai2ee1:ai3ee").unwrap());
}

#[test]
fn test_nested_structures() {
    let data = b"d4:spaml1:a1:bee";
    let decoded = decode(data).unwrap();
    assert_eq!(
        decoded.get(b"spam"),
        Some(&Value::from(vec![Value::string("a"), Value::string("b")]))
    );
    let encoded = encode(&decoded).unwrap();
    assert_eq!(encoded, data);
}

#[test]
fn test_non_canonical_input_is_normalized() {
    let decoded = decode(b"d4:spam4:eggs3:cow3:mooe").unwrap();
    assert_eq!(encode(&decoded).unwrap(), b"d3:cow3:moo4:spam4:eggse");
}

#[test]
fn test_roundtrip_with_empty_slots() {
    let mut list = List::with_slots(2);
    list.set(1, Value::Integer(5));
    let mut dict = Dict::new();
    dict.insert_slot("gone");
    dict.insert("kept", Value::List(list));

    let value = Value::Dict(dict);
    let encoded = encode(&value).unwrap();
    assert_eq!(encoded, b"d4:keptli5eee");
    assert_eq!(decode(&encoded).unwrap(), value);
}

#[test]
fn test_delimited_roundtrip() {
    let data = b"d5:first:i627237e6:second:5:valuee";
    let config = DecoderConfig::default().with_dialect(Dialect::Delimited);
    let value = decode_with_config(data, config).unwrap();
    assert_eq!(value.get(b"first").and_then(Value::as_integer), Some(627237));

    let mut encoder = Encoder::with_config(
        Vec::new(),
        EncoderConfig::default().with_dialect(Dialect::Delimited),
    );
    encoder.encode(&value).unwrap();
    assert_eq!(encoder.into_inner(), data);

    assert_eq!(encode(&value).unwrap(), b"d5:firsti627237e6:second5:valuee");
}

#[test]
fn test_value_accessors() {
    let value = Value::Integer(42);
    assert_eq!(value.as_integer(), Some(42));
    assert_eq!(value.kind(), ValueKind::Integer);
    assert!(value.as_bytes().is_none());

    let value = Value::Bytes(Bytes::from_static(b"test"));
    assert_eq!(value.as_str(), Some("test"));
    assert!(value.as_integer().is_none());

    let value = Value::Bytes(Bytes::from_static(b"\xff"));
    assert!(value.as_str().is_none());
    assert!(value.as_bytes().is_some());

    let value = Value::List(List::new());
    assert!(value.as_list().is_some());
    assert!(value.as_dict().is_none());
    assert_eq!(value.kind().to_string(), "list");
    assert!(value.into_list().is_some());

    let value = Value::from(String::from("owned"));
    assert_eq!(value.get(b"anything"), None);
    assert_eq!(value.as_str(), Some("owned"));
}

#[test]
fn test_values_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
    assert_send_sync::<BencodeError>();

    let value = std::sync::Arc::new(decode(b"d3:cow3:mooe").unwrap());
    let handle = {
        let value = value.clone();
        std::thread::spawn(move || encode(&value).unwrap())
    };
    assert_eq!(handle.join().unwrap(), b"d3:cow3:mooe");
}
