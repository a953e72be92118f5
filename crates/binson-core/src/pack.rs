//! Wire-level tag grammar and the minimal-width integer packer.
//!
//! Every value on the wire starts with one tag byte. The numeric and
//! length-bearing tags come in families — four integer widths, three text
//! lengths, three bytes lengths — and the family member is always chosen by
//! the packing rule below, never independently of it: the narrowest signed
//! two's-complement width that fits the value decides both the payload bytes
//! and the tag.

/// Begin/end markers for objects.
pub const BEGIN: u8 = 0x40;
pub const END: u8 = 0x41;

/// Begin/end markers for arrays.
pub const BEGIN_ARRAY: u8 = 0x42;
pub const END_ARRAY: u8 = 0x43;

/// Boolean tags; the tag itself is the whole encoding.
pub const TRUE: u8 = 0x44;
pub const FALSE: u8 = 0x45;

/// IEEE-754 double, 8 little-endian payload bytes.
pub const DOUBLE: u8 = 0x46;

/// Integer tags, 1/2/4/8-byte little-endian signed payload.
pub const INTEGER1: u8 = 0x10;
pub const INTEGER2: u8 = 0x11;
pub const INTEGER4: u8 = 0x12;
pub const INTEGER8: u8 = 0x13;

/// Text tags, 1/2/4-byte length prefix then that many UTF-8 bytes.
pub const STRING1: u8 = 0x14;
pub const STRING2: u8 = 0x15;
pub const STRING4: u8 = 0x16;

/// Bytes tags, same length-prefix scheme over an opaque payload.
pub const BYTES1: u8 = 0x18;
pub const BYTES2: u8 = 0x19;
pub const BYTES4: u8 = 0x1a;

/// Longest text/bytes payload representable on the wire (2^31 - 1 bytes).
///
/// Lengths are never negative, so the 8-byte integer width is not a valid
/// length prefix; the encoder enforces this bound before packing.
pub const MAX_PAYLOAD_LEN: usize = i32::MAX as usize;

/// Width in bytes of the narrowest signed representation of `value`:
/// 1 if it fits `i8`, else 2 for `i16`, else 4 for `i32`, else 8.
pub fn integer_width(value: i64) -> usize {
    if i8::try_from(value).is_ok() {
        1
    } else if i16::try_from(value).is_ok() {
        2
    } else if i32::try_from(value).is_ok() {
        4
    } else {
        8
    }
}

/// Pack `value` little-endian at its minimal width.
///
/// Truncating the little-endian `i64` representation keeps exactly the bytes
/// of the equivalent narrower two's-complement integer, so no per-width
/// conversion is needed. Pure: same input, same bytes.
pub fn pack_integer(value: i64) -> Vec<u8> {
    let width = integer_width(value);
    value.to_le_bytes()[..width].to_vec()
}

/// Tag byte for an integer packed at `width` bytes.
pub(crate) fn integer_tag(width: usize) -> u8 {
    match width {
        1 => INTEGER1,
        2 => INTEGER2,
        4 => INTEGER4,
        _ => INTEGER8,
    }
}

/// Tag byte for a text/bytes length packed at `width` bytes, relative to the
/// family base tag ([`STRING1`] or [`BYTES1`]).
pub(crate) fn length_tag(base: u8, width: usize) -> u8 {
    match width {
        1 => base,
        2 => base + 1,
        4 => base + 2,
        _ => unreachable!("length prefix wider than 4 bytes"),
    }
}

/// Payload width implied by an integer or length tag.
pub(crate) fn payload_width(tag: u8) -> usize {
    match tag {
        INTEGER1 | STRING1 | BYTES1 => 1,
        INTEGER2 | STRING2 | BYTES2 => 2,
        INTEGER4 | STRING4 | BYTES4 => 4,
        _ => 8,
    }
}

/// Whether `byte` is one of the defined tag bytes.
pub(crate) fn is_defined_tag(byte: u8) -> bool {
    matches!(
        byte,
        BEGIN..=DOUBLE | INTEGER1..=INTEGER8 | STRING1..=STRING4 | BYTES1..=BYTES4
    )
}
