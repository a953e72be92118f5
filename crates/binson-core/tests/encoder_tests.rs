//! Encoder contract tests: exact canonical bytes for every variant, the
//! ascending-name ordering rule, and the minimal-width packing boundaries.

use binson_core::{encode, pack, Array, Object, Value};

/// Render bytes as a lowercase hex string for compact fixture comparison.
fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

// ============================================================================
// Concrete vectors, one per variant
// ============================================================================

#[test]
fn encode_empty_object() {
    assert_eq!(hex(&Object::new().to_bytes()), "4041");
}

#[test]
fn encode_integer_field() {
    let obj = Object::new().put("a", 4);
    assert_eq!(hex(&obj.to_bytes()), "40140161100441");
}

#[test]
fn encode_text_field() {
    let obj = Object::new().put("b", "Gris");
    assert_eq!(hex(&obj.to_bytes()), "4014016214044772697341");
}

#[test]
fn encode_nested_object() {
    let obj = Object::new().put("c", Object::new().put("d", "Hej"));
    assert_eq!(hex(&obj.to_bytes()), "4014016340140164140348656a4141");
}

#[test]
fn encode_nested_array() {
    let obj = Object::new().put("a", Array::new().put(Array::new()).put(2));
    assert_eq!(hex(&obj.to_bytes()), "4014016142424310024341");
}

#[test]
fn encode_bytes_field() {
    let obj = Object::new().put("a", vec![1u8, 2, 3]);
    assert_eq!(hex(&obj.to_bytes()), "40140161180301020341");
}

#[test]
fn encode_boolean_fields() {
    let obj = Object::new().put("a", true).put("b", false);
    assert_eq!(hex(&obj.to_bytes()), "40140161441401624541");
}

#[test]
fn encode_double_field() {
    let obj = Object::new().put("a", 23.005);
    assert_eq!(hex(&obj.to_bytes()), "4014016146e17a14ae4701374041");
}

#[test]
fn encode_one_field_of_each_variant() {
    let obj = Object::new()
        .put("a", 4)
        .put("b", "gigi")
        .put("c", Object::new())
        .put("d", Array::new())
        .put("e", vec![1u8, 2, 3])
        .put("f", true)
        .put("g", 30.33);
    assert_eq!(
        hex(&obj.to_bytes()),
        "401401611004140162140467696769140163404114016442431401651803010203140166441401674614ae47e17a543e4041"
    );
}

#[test]
fn encode_array_of_each_variant() {
    let arr = Array::new()
        .put(4)
        .put("gigi")
        .put(Object::new())
        .put(Array::new())
        .put(vec![1u8, 2, 3])
        .put(false)
        .put(30.33);
    assert_eq!(
        hex(&arr.to_bytes()),
        "421004140467696769404142431803010203454614ae47e17a543e4043"
    );
}

#[test]
fn encode_value_rooted_at_array() {
    let value = Value::Array(Array::new().put(4).put("hi"));
    assert_eq!(
        encode(&value),
        [0x42, 0x10, 0x04, 0x14, 0x02, 0x68, 0x69, 0x43]
    );
}

#[test]
fn encode_empty_text_and_empty_bytes() {
    let obj = Object::new().put("s", "").put("y", Vec::<u8>::new());
    // Zero-length payloads still carry a one-byte length prefix.
    assert_eq!(hex(&obj.to_bytes()), "401401731400140179180041");
}

// ============================================================================
// Canonical ordering
// ============================================================================

#[test]
fn encode_sorts_fields_by_name() {
    let forward = Object::new().put("a", 1).put("b", 2).put("c", 3);
    let reverse = Object::new().put("c", 3).put("b", 2).put("a", 1);
    assert_eq!(forward.to_bytes(), reverse.to_bytes());
}

#[test]
fn encode_ordering_is_bytewise() {
    // 'B' (0x42) sorts before 'a' (0x61): byte order, not natural order.
    let obj = Object::new().put("a", 1).put("B", 2);
    assert_eq!(hex(&obj.to_bytes()), "401401421002140161100141");
}

#[test]
fn encode_last_write_wins_then_sorts() {
    let obj = Object::new().put("k", 1).put("k", "replaced");
    assert_eq!(hex(&obj.to_bytes()), "4014016b14087265706c6163656441");
}

#[test]
fn encode_array_preserves_insertion_order() {
    let arr = Array::new().put(3).put(1).put(2);
    assert_eq!(hex(&arr.to_bytes()), "4210031001100243");
}

// ============================================================================
// Minimal-width integers
// ============================================================================

#[test]
fn integer_width_boundaries() {
    assert_eq!(pack::integer_width(0), 1);
    assert_eq!(pack::integer_width(127), 1);
    assert_eq!(pack::integer_width(-128), 1);
    assert_eq!(pack::integer_width(128), 2);
    assert_eq!(pack::integer_width(-129), 2);
    assert_eq!(pack::integer_width(32767), 2);
    assert_eq!(pack::integer_width(-32768), 2);
    assert_eq!(pack::integer_width(32768), 4);
    assert_eq!(pack::integer_width(-32769), 4);
    assert_eq!(pack::integer_width(2147483647), 4);
    assert_eq!(pack::integer_width(-2147483648), 4);
    assert_eq!(pack::integer_width(2147483648), 8);
    assert_eq!(pack::integer_width(-2147483649), 8);
    assert_eq!(pack::integer_width(i64::MAX), 8);
    assert_eq!(pack::integer_width(i64::MIN), 8);
}

#[test]
fn pack_integer_is_little_endian_twos_complement() {
    assert_eq!(pack::pack_integer(4), [0x04]);
    assert_eq!(pack::pack_integer(-1), [0xff]);
    assert_eq!(pack::pack_integer(-128), [0x80]);
    assert_eq!(pack::pack_integer(128), [0x80, 0x00]);
    assert_eq!(pack::pack_integer(-129), [0x7f, 0xff]);
    assert_eq!(pack::pack_integer(32768), [0x00, 0x80, 0x00, 0x00]);
    assert_eq!(
        pack::pack_integer(2147483648),
        [0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00]
    );
}

#[test]
fn encode_integer_width_tags() {
    assert_eq!(hex(&Object::new().put("a", 127).to_bytes()), "40140161107f41");
    assert_eq!(
        hex(&Object::new().put("a", 128).to_bytes()),
        "4014016111800041"
    );
    assert_eq!(
        hex(&Object::new().put("a", 32768).to_bytes()),
        "40140161120080000041"
    );
    assert_eq!(
        hex(&Object::new().put("a", 2147483648i64).to_bytes()),
        "4014016113000000800000000041"
    );
}

#[test]
fn encode_negative_integers_at_minimal_width() {
    assert_eq!(hex(&Object::new().put("a", -1).to_bytes()), "4014016110ff41");
    assert_eq!(
        hex(&Object::new().put("a", -129).to_bytes()),
        "40140161117fff41"
    );
    assert_eq!(
        hex(&Object::new().put("a", i64::MIN).to_bytes()),
        "4014016113000000000000008041"
    );
}

// ============================================================================
// Minimal-width lengths (1/2/4-byte subset only)
// ============================================================================

#[test]
fn encode_text_length_tag_widens_at_128() {
    // Layout: 40, name ("s" = 14 01 73), value tag at index 4, length after.
    let short = Object::new().put("s", "x".repeat(127)).to_bytes();
    assert_eq!(short[4], 0x14);
    assert_eq!(short[5], 127);

    let long = Object::new().put("s", "x".repeat(128)).to_bytes();
    assert_eq!(long[4], 0x15);
    assert_eq!(&long[5..7], [0x80, 0x00]);
}

#[test]
fn encode_text_length_tag_widens_at_32768() {
    let text = "x".repeat(32768);
    let bytes = Object::new().put("s", text).to_bytes();
    assert_eq!(bytes[4], 0x16);
    assert_eq!(&bytes[5..9], [0x00, 0x80, 0x00, 0x00]);
}

#[test]
fn encode_bytes_length_tags_mirror_text() {
    let short = Object::new().put("y", vec![0u8; 127]).to_bytes();
    assert_eq!(short[4], 0x18);

    let mid = Object::new().put("y", vec![0u8; 128]).to_bytes();
    assert_eq!(mid[4], 0x19);

    let wide = Object::new().put("y", vec![0u8; 32768]).to_bytes();
    assert_eq!(wide[4], 0x1a);
}

#[test]
fn encode_multibyte_utf8_length_counts_bytes() {
    // "héj" is 4 bytes of UTF-8, not 3 characters.
    let obj = Object::new().put("s", "héj");
    assert_eq!(hex(&obj.to_bytes()), "40140173140468c3a96a41");
}

// ============================================================================
// Doubles
// ============================================================================

#[test]
fn encode_double_is_bit_exact_little_endian() {
    let bytes = Object::new().put("d", 1.0f64).to_bytes();
    assert_eq!(&bytes[4..13], {
        let mut expected = vec![0x46];
        expected.extend_from_slice(&1.0f64.to_le_bytes());
        expected
    });
}

#[test]
fn encode_negative_zero_keeps_its_sign_bit() {
    let pos = Object::new().put("d", 0.0f64).to_bytes();
    let neg = Object::new().put("d", -0.0f64).to_bytes();
    assert_ne!(pos, neg);
    assert_eq!(neg[12], 0x80);
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn encode_is_deterministic() {
    let obj = Object::new()
        .put("n", 9000)
        .put("t", "text")
        .put("inner", Object::new().put("ok", true));
    assert_eq!(obj.to_bytes(), obj.to_bytes());
    assert_eq!(obj.to_bytes(), obj.clone().to_bytes());
}
