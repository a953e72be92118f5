//! Binson decoder — parses a byte buffer back into a value tree.
//!
//! A cursor walks the buffer one tag byte at a time; no lookahead beyond the
//! current tag is ever needed. The root must be an object and the whole
//! buffer must be consumed. Any malformed condition aborts the parse with a
//! [`DecodeError`] — the decoder never returns a partial tree and never
//! recovers. Text and bytes payloads are copied out of the input, so the
//! resulting tree borrows nothing from the buffer.
//!
//! Recursion depth is bounded only by the nesting depth of the input;
//! callers that accept untrusted, pathologically deep data must impose
//! their own depth limit before decoding.

use crate::error::{DecodeError, Result};
use crate::pack;
use crate::types::{Array, Object, Value};

/// Decode a Binson buffer into the object it encodes.
///
/// Fails if the root value is not an object, the input is truncated or
/// contains an undefined tag, a length prefix is negative, a text payload is
/// not UTF-8, or bytes remain after the root object's end marker.
pub fn decode(data: &[u8]) -> Result<Object> {
    let mut reader = Reader { buf: data, pos: 0 };
    let tag = reader.read_tag()?;
    if tag != pack::BEGIN {
        return Err(if pack::is_defined_tag(tag) {
            DecodeError::RootNotObject { tag }
        } else {
            DecodeError::UnknownTag { tag, offset: 0 }
        });
    }
    let object = read_object(&mut reader)?;
    if reader.remaining() > 0 {
        return Err(DecodeError::TrailingData {
            remaining: reader.remaining(),
        });
    }
    Ok(object)
}

/// Cursor over the input buffer. Reads only ever move forward.
struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn offset(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn read_tag(&mut self) -> Result<u8> {
        let byte = *self
            .buf
            .get(self.pos)
            .ok_or(DecodeError::Truncated { offset: self.pos })?;
        self.pos += 1;
        Ok(byte)
    }

    fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(DecodeError::Truncated { offset: self.pos });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }
}

/// Loop reading `(name, value)` pairs until the end-object marker.
/// The begin marker has already been consumed.
fn read_object(reader: &mut Reader<'_>) -> Result<Object> {
    let mut object = Object::new();
    loop {
        let tag_offset = reader.offset();
        let tag = reader.read_tag()?;
        if tag == pack::END {
            return Ok(object);
        }
        let name = match tag {
            pack::STRING1 | pack::STRING2 | pack::STRING4 => read_text(tag, reader)?,
            _ if pack::is_defined_tag(tag) => {
                return Err(DecodeError::FieldNameNotText {
                    tag,
                    offset: tag_offset,
                })
            }
            _ => {
                return Err(DecodeError::UnknownTag {
                    tag,
                    offset: tag_offset,
                })
            }
        };
        let value_offset = reader.offset();
        let value_tag = reader.read_tag()?;
        let value = read_value(value_tag, value_offset, reader)?;
        object = object.put(name, value);
    }
}

/// Loop parsing values until the end-array marker.
fn read_array(reader: &mut Reader<'_>) -> Result<Array> {
    let mut array = Array::new();
    loop {
        let tag_offset = reader.offset();
        let tag = reader.read_tag()?;
        if tag == pack::END_ARRAY {
            return Ok(array);
        }
        array = array.put(read_value(tag, tag_offset, reader)?);
    }
}

/// Dispatch on a value's tag byte. `tag_offset` is where the tag was read,
/// for error reporting.
fn read_value(tag: u8, tag_offset: usize, reader: &mut Reader<'_>) -> Result<Value> {
    match tag {
        pack::BEGIN => Ok(Value::Object(read_object(reader)?)),
        pack::BEGIN_ARRAY => Ok(Value::Array(read_array(reader)?)),
        pack::STRING1 | pack::STRING2 | pack::STRING4 => Ok(Value::Text(read_text(tag, reader)?)),
        pack::BYTES1 | pack::BYTES2 | pack::BYTES4 => {
            Ok(Value::Bytes(read_len_prefixed(tag, reader)?.to_vec()))
        }
        pack::INTEGER1 | pack::INTEGER2 | pack::INTEGER4 | pack::INTEGER8 => {
            Ok(Value::Integer(read_packed(tag, reader)?))
        }
        pack::TRUE => Ok(Value::Boolean(true)),
        pack::FALSE => Ok(Value::Boolean(false)),
        pack::DOUBLE => {
            let bytes = reader.read_exact(8)?;
            let mut raw = [0u8; 8];
            raw.copy_from_slice(bytes);
            Ok(Value::Double(f64::from_le_bytes(raw)))
        }
        _ => Err(DecodeError::UnknownTag {
            tag,
            offset: tag_offset,
        }),
    }
}

/// Read a packed integer of the width implied by `tag`, sign-extended to 64
/// bits.
fn read_packed(tag: u8, reader: &mut Reader<'_>) -> Result<i64> {
    let width = pack::payload_width(tag);
    let bytes = reader.read_exact(width)?;
    Ok(match width {
        1 => i64::from(bytes[0] as i8),
        2 => i64::from(i16::from_le_bytes([bytes[0], bytes[1]])),
        4 => i64::from(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
        _ => {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(bytes);
            i64::from_le_bytes(raw)
        }
    })
}

/// Read a length prefix of the width implied by `tag`, then that many raw
/// payload bytes. A negative length is malformed, whatever width carried it.
fn read_len_prefixed<'a>(tag: u8, reader: &mut Reader<'a>) -> Result<&'a [u8]> {
    let length_offset = reader.offset();
    let length = read_packed(tag, reader)?;
    if length < 0 {
        return Err(DecodeError::NegativeLength {
            length,
            offset: length_offset,
        });
    }
    reader.read_exact(length as usize)
}

fn read_text(tag: u8, reader: &mut Reader<'_>) -> Result<String> {
    let payload = read_len_prefixed(tag, reader)?;
    let offset = reader.offset() - payload.len();
    match std::str::from_utf8(payload) {
        Ok(text) => Ok(text.to_owned()),
        Err(source) => Err(DecodeError::InvalidUtf8 { offset, source }),
    }
}
