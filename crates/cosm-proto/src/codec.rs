//! Protobuf binary codec.
//!
//! Typed encoding and decoding go through `prost`, which emits fields in
//! ascending tag order, omits proto3 default values and always writes minimal
//! varints, so the same logical value always yields the same bytes.
//!
//! On top of that this module provides a structural wire scanner. It walks
//! the top-level fields of a message without a schema, reports where each
//! field lives, and pinpoints the byte offset of any malformation. The
//! registry uses it to capture unknown fields so they survive a
//! decode/re-encode cycle.

use bytes::BufMut;
use prost::Message;

use crate::error::DecodeError;

/// Largest field number protobuf allows.
const MAX_TAG: u32 = (1 << 29) - 1;

/// Maximum encoded length of a varint.
const MAX_VARINT_LEN: usize = 10;

// -----------------------------------------------------------------------
// Typed encode / decode
// -----------------------------------------------------------------------

/// Encode a message to its canonical protobuf bytes.
pub fn encode<M: Message>(value: &M) -> Vec<u8> {
    value.encode_to_vec()
}

/// Decode a message, validating the wire structure first.
///
/// Structural problems (truncation, bad varints, bad length prefixes,
/// unsupported wire types) are reported with the byte offset at which they
/// were found. Semantic failures detected by `prost` (invalid UTF-8, bad
/// nested payloads) carry no offset.
///
/// # Arguments
/// * `bytes` - The serialized message.
///
/// # Returns
/// The decoded message, or a `DecodeError`.
pub fn decode<M: Message + Default>(bytes: &[u8]) -> Result<M, DecodeError> {
    scan_fields(bytes)?;
    M::decode(bytes).map_err(DecodeError::from)
}

// -----------------------------------------------------------------------
// Wire scanning
// -----------------------------------------------------------------------

/// Protobuf wire types accepted by the scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    Fixed32 = 5,
}

impl WireType {
    fn from_raw(raw: u64, offset: usize) -> Result<Self, DecodeError> {
        match raw {
            0 => Ok(WireType::Varint),
            1 => Ok(WireType::Fixed64),
            2 => Ok(WireType::LengthDelimited),
            5 => Ok(WireType::Fixed32),
            3 | 4 => Err(DecodeError::at(offset, "group wire types are not supported")),
            other => Err(DecodeError::at(offset, format!("invalid wire type {}", other))),
        }
    }
}

/// Location of one top-level field inside a serialized message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpan {
    /// Field number.
    pub tag: u32,
    /// Wire type of the field.
    pub wire_type: WireType,
    /// Offset of the first byte of the field key.
    pub start: usize,
    /// Offset one past the last byte of the field value.
    pub end: usize,
}

/// Walk the top-level fields of a serialized message.
///
/// # Arguments
/// * `bytes` - The serialized message.
///
/// # Returns
/// One `FieldSpan` per field in wire order, or a `DecodeError` naming the
/// offset of the first malformed byte.
pub fn scan_fields(bytes: &[u8]) -> Result<Vec<FieldSpan>, DecodeError> {
    let mut reader = WireReader::new(bytes);
    let mut spans = Vec::new();
    while !reader.is_empty() {
        let start = reader.pos();
        let key = reader.read_varint()?;
        let tag = key >> 3;
        if tag == 0 || tag > MAX_TAG as u64 {
            return Err(DecodeError::at(start, format!("invalid field number {}", tag)));
        }
        let wire_type = WireType::from_raw(key & 0x7, start)?;
        match wire_type {
            WireType::Varint => {
                reader.read_varint()?;
            }
            WireType::Fixed64 => {
                reader.read_bytes(8)?;
            }
            WireType::Fixed32 => {
                reader.read_bytes(4)?;
            }
            WireType::LengthDelimited => {
                let len_offset = reader.pos();
                let len = reader.read_varint()?;
                let len = usize::try_from(len).map_err(|_| {
                    DecodeError::at(len_offset, "length prefix overflows usize")
                })?;
                if len > reader.remaining() {
                    return Err(DecodeError::at(
                        len_offset,
                        format!(
                            "length prefix {} exceeds remaining {} bytes",
                            len,
                            reader.remaining()
                        ),
                    ));
                }
                reader.read_bytes(len)?;
            }
        }
        spans.push(FieldSpan {
            tag: tag as u32,
            wire_type,
            start,
            end: reader.pos(),
        });
    }
    Ok(spans)
}

/// Cursor over protobuf wire bytes.
struct WireReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        WireReader { data, pos: 0 }
    }

    fn pos(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if n > self.remaining() {
            return Err(DecodeError::at(
                self.pos,
                format!("truncated input: need {} bytes, have {}", n, self.remaining()),
            ));
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn read_varint(&mut self) -> Result<u64, DecodeError> {
        let start = self.pos;
        let mut value: u64 = 0;
        for i in 0..MAX_VARINT_LEN {
            let byte = match self.data.get(self.pos) {
                Some(b) => *b,
                None => return Err(DecodeError::at(start, "truncated varint")),
            };
            self.pos += 1;
            // The tenth byte may only carry the single remaining bit.
            if i == MAX_VARINT_LEN - 1 && byte > 0x01 {
                return Err(DecodeError::at(start, "varint overflows 64 bits"));
            }
            value |= u64::from(byte & 0x7f) << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(DecodeError::at(start, "varint overflows 64 bits"))
    }
}

// -----------------------------------------------------------------------
// Unknown field preservation
// -----------------------------------------------------------------------

/// A top-level field the schema does not declare, kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownField {
    pub tag: u32,
    pub wire_type: WireType,
    /// Raw bytes including the field key.
    pub raw: Vec<u8>,
}

/// The undeclared top-level fields of a decoded message, in wire order.
///
/// Only top-level fields are captured. Unknown fields inside nested messages
/// are dropped by the typed view; callers that need byte-exact fidelity keep
/// the original bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnknownFields {
    fields: Vec<UnknownField>,
}

impl UnknownFields {
    /// Collect every top-level field of `bytes` whose number is not in `known_tags`.
    pub fn capture(bytes: &[u8], known_tags: &[u32]) -> Result<Self, DecodeError> {
        let fields = scan_fields(bytes)?
            .into_iter()
            .filter(|span| !known_tags.contains(&span.tag))
            .map(|span| UnknownField {
                tag: span.tag,
                wire_type: span.wire_type,
                raw: bytes[span.start..span.end].to_vec(),
            })
            .collect();
        Ok(UnknownFields { fields })
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnknownField> {
        self.fields.iter()
    }

    /// Field numbers of the captured fields.
    pub fn tags(&self) -> Vec<u32> {
        self.fields.iter().map(|f| f.tag).collect()
    }

    /// Append the captured fields, in their original order, to `buf`.
    pub fn write_to(&self, buf: &mut impl BufMut) {
        for field in &self.fields {
            buf.put_slice(&field.raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_known_layout() {
        // field 1 varint 150, field 2 string "hi", field 3 fixed32
        let bytes = hex::decode("089601120268691d01000000").unwrap();
        let spans = scan_fields(&bytes).unwrap();
        assert_eq!(spans.len(), 3);
        assert_eq!((spans[0].tag, spans[0].wire_type, spans[0].start, spans[0].end), (1, WireType::Varint, 0, 3));
        assert_eq!((spans[1].tag, spans[1].wire_type, spans[1].start, spans[1].end), (2, WireType::LengthDelimited, 3, 7));
        assert_eq!((spans[2].tag, spans[2].wire_type, spans[2].start, spans[2].end), (3, WireType::Fixed32, 7, 12));
    }

    #[test]
    fn test_scan_reports_offsets() {
        struct Case {
            name: &'static str,
            hex: &'static str,
            offset: usize,
        }
        let cases = vec![
            Case { name: "truncated varint value", hex: "0896", offset: 1 },
            Case { name: "truncated key", hex: "0801ff", offset: 2 },
            Case { name: "length beyond input", hex: "0801120568", offset: 3 },
            Case { name: "start group", hex: "0b", offset: 0 },
            Case { name: "invalid wire type", hex: "08010f", offset: 2 },
            Case { name: "field number zero", hex: "0001", offset: 0 },
            Case { name: "truncated fixed64", hex: "0901020304", offset: 1 },
            Case { name: "varint overflow", hex: "08ffffffffffffffffff7f", offset: 1 },
        ];
        for case in &cases {
            let bytes = hex::decode(case.hex).unwrap();
            let err = scan_fields(&bytes).expect_err(case.name);
            assert_eq!(err.offset, Some(case.offset), "case: {} ({})", case.name, err);
        }
    }

    #[test]
    fn test_capture_unknown_fields() {
        // field 1 varint, field 9 string "x", field 2 varint
        let bytes = hex::decode("08014a01781002").unwrap();
        let unknown = UnknownFields::capture(&bytes, &[1, 2]).unwrap();
        assert_eq!(unknown.tags(), vec![9]);
        let mut out: Vec<u8> = Vec::new();
        unknown.write_to(&mut out);
        assert_eq!(hex::encode(out), "4a0178");

        let none = UnknownFields::capture(&bytes, &[1, 2, 9]).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        use crate::cosmos::base::v1beta1::Coin;
        // denom = 0xff
        let bytes = hex::decode("0a01ff").unwrap();
        let err = decode::<Coin>(&bytes).unwrap_err();
        assert_eq!(err.offset, None);

        let ok: Coin = decode(&hex::decode("0a0575636f736d120131").unwrap()).unwrap();
        assert_eq!(ok.denom, "ucosm");
        assert_eq!(ok.amount, "1");
    }
}
