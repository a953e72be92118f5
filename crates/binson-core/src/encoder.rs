//! Binson encoder — serializes a [`Value`] tree into its canonical bytes.
//!
//! Encoding is deterministic and infallible: object fields are written in
//! ascending name order (the `BTreeMap` storage already iterates that way),
//! integers and length prefixes are packed at their minimal width, and
//! doubles are written bit-exact little-endian. Two trees with equal content
//! always produce identical bytes, whatever order their fields were built in.
//!
//! # Example
//! ```
//! use binson_core::{encode, Array, Value};
//!
//! let arr = Array::new().put(4).put("hi");
//! assert_eq!(
//!     encode(&Value::Array(arr)),
//!     [0x42, 0x10, 0x04, 0x14, 0x02, 0x68, 0x69, 0x43],
//! );
//! ```

use crate::pack;
use crate::types::{Array, Object, Value};

/// Encode a value tree into its canonical Binson byte sequence.
///
/// Encoding has no error conditions — the value model only admits valid
/// variants. The one contract requirement is on payload size: text and bytes
/// payloads longer than [`pack::MAX_PAYLOAD_LEN`] have no wire
/// representation, and encoding panics if one is present.
pub fn encode(value: &Value) -> Vec<u8> {
    let mut out = Vec::new();
    write_value(value, &mut out);
    out
}

pub(crate) fn write_object(object: &Object, out: &mut Vec<u8>) {
    out.push(pack::BEGIN);
    for (name, value) in object.iter() {
        write_text(name, out);
        write_value(value, out);
    }
    out.push(pack::END);
}

pub(crate) fn write_array(array: &Array, out: &mut Vec<u8>) {
    out.push(pack::BEGIN_ARRAY);
    for value in array.iter() {
        write_value(value, out);
    }
    out.push(pack::END_ARRAY);
}

fn write_value(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Object(object) => write_object(object, out),
        Value::Array(array) => write_array(array, out),
        Value::Integer(n) => write_integer(*n, out),
        Value::Text(text) => write_text(text, out),
        Value::Bytes(bytes) => write_len_prefixed(pack::BYTES1, bytes, out),
        Value::Boolean(b) => out.push(if *b { pack::TRUE } else { pack::FALSE }),
        Value::Double(d) => {
            out.push(pack::DOUBLE);
            out.extend_from_slice(&d.to_le_bytes());
        }
    }
}

fn write_integer(value: i64, out: &mut Vec<u8>) {
    let packed = pack::pack_integer(value);
    out.push(pack::integer_tag(packed.len()));
    out.extend_from_slice(&packed);
}

fn write_text(text: &str, out: &mut Vec<u8>) {
    write_len_prefixed(pack::STRING1, text.as_bytes(), out);
}

fn write_len_prefixed(base_tag: u8, payload: &[u8], out: &mut Vec<u8>) {
    assert!(
        payload.len() <= pack::MAX_PAYLOAD_LEN,
        "payload of {} bytes exceeds the 2^31 - 1 wire limit",
        payload.len()
    );
    let packed = pack::pack_integer(payload.len() as i64);
    out.push(pack::length_tag(base_tag, packed.len()));
    out.extend_from_slice(&packed);
    out.extend_from_slice(payload);
}
