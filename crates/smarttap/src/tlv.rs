//! BER-TLV decoding into a tag → values mapping
//!
//! Only the subset of BER-TLV needed by the Smart Tap response grammar is
//! handled: multi-byte tags using the `0x1F` continuation rule, and short or
//! long form lengths of up to four bytes. Values are returned raw; composite
//! values are decoded again by the caller at the next schema level.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;

use alloy_primitives::hex;
use bytes::Bytes;
use thiserror::Error;

use crate::util::unsigned_from_be_bytes;

/// Low five bits of a first tag byte announcing subsequent tag bytes
const TAG_NUMBER_CONTINUES: u8 = 0x1F;
/// High bit of a subsequent tag byte announcing another tag byte
const TAG_MORE_BYTES: u8 = 0x80;
/// Length byte flag announcing the long form
const LENGTH_LONG_FORM: u8 = 0x80;
/// Longest long-form length accepted, in bytes
const MAX_LENGTH_OCTETS: usize = 4;

/// Errors raised while decoding a TLV layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TlvError {
    #[error("truncated tag at offset {offset}")]
    TruncatedTag { offset: usize },

    #[error("truncated length at offset {offset}")]
    TruncatedLength { offset: usize },

    #[error("truncated value at offset {offset}: declared {declared} byte(s), {available} available")]
    TruncatedValue {
        offset: usize,
        declared: usize,
        available: usize,
    },

    #[error("length at offset {offset} uses {octets} bytes, at most 4 supported")]
    LengthTooLarge { offset: usize, octets: usize },
}

/// Tag identifier, rendered as uppercase hex (`6F`, `BF0C`, ...)
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagId(Vec<u8>);

impl TagId {
    /// Raw tag bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for TagId {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl Borrow<[u8]> for TagId {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(&self.0))
    }
}

impl fmt::Debug for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TagId({self})")
    }
}

/// Decoded TLV layer: every tag maps to its values in encounter order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlvMap {
    entries: HashMap<TagId, Vec<Bytes>>,
}

impl TlvMap {
    /// All values recorded for `tag`, never empty when present
    pub fn get(&self, tag: &[u8]) -> Option<&[Bytes]> {
        self.entries.get(tag).map(Vec::as_slice)
    }

    /// First value recorded for `tag`
    pub fn first(&self, tag: &[u8]) -> Option<&Bytes> {
        self.get(tag).and_then(<[Bytes]>::first)
    }

    pub fn contains(&self, tag: &[u8]) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct tags
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, TagId, Vec<Bytes>> {
        self.entries.iter()
    }

    fn push(&mut self, tag: TagId, value: Bytes) {
        self.entries.entry(tag).or_default().push(value);
    }
}

impl<'a> IntoIterator for &'a TlvMap {
    type Item = (&'a TagId, &'a Vec<Bytes>);
    type IntoIter = hash_map::Iter<'a, TagId, Vec<Bytes>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Decode a flat sequence of TLV objects.
///
/// Returned values are slices of `data`, no bytes are copied. An empty buffer
/// decodes to an empty map.
pub fn decode(data: Bytes) -> Result<TlvMap, TlvError> {
    let mut map = TlvMap::default();
    let mut offset = 0;

    while offset < data.len() {
        let (tag, length_offset) = read_tag(&data, offset)?;
        let (length, value_offset) = read_length(&data, length_offset)?;

        let available = data.len() - value_offset;
        if length > available {
            return Err(TlvError::TruncatedValue {
                offset: value_offset,
                declared: length,
                available,
            });
        }

        let end = value_offset + length;
        map.push(tag, data.slice(value_offset..end));
        offset = end;
    }

    Ok(map)
}

/// Decode a borrowed buffer, copying it once
pub fn decode_slice(data: &[u8]) -> Result<TlvMap, TlvError> {
    decode(Bytes::copy_from_slice(data))
}

fn read_tag(data: &[u8], offset: usize) -> Result<(TagId, usize), TlvError> {
    let first = *data
        .get(offset)
        .ok_or(TlvError::TruncatedTag { offset })?;
    let mut end = offset + 1;

    if first & TAG_NUMBER_CONTINUES == TAG_NUMBER_CONTINUES {
        loop {
            let byte = *data.get(end).ok_or(TlvError::TruncatedTag { offset })?;
            end += 1;
            if byte & TAG_MORE_BYTES == 0 {
                break;
            }
        }
    }

    Ok((TagId::from(&data[offset..end]), end))
}

fn read_length(data: &[u8], offset: usize) -> Result<(usize, usize), TlvError> {
    let first = *data
        .get(offset)
        .ok_or(TlvError::TruncatedLength { offset })?;

    if first & LENGTH_LONG_FORM == 0 {
        return Ok((first as usize, offset + 1));
    }

    let octets = (first & !LENGTH_LONG_FORM) as usize;
    if octets == 0 {
        return Ok((0, offset + 1));
    }
    if octets > MAX_LENGTH_OCTETS {
        return Err(TlvError::LengthTooLarge { offset, octets });
    }

    let start = offset + 1;
    let bytes = data
        .get(start..start + octets)
        .ok_or(TlvError::TruncatedLength { offset })?;
    let length = unsigned_from_be_bytes(bytes).ok_or(TlvError::LengthTooLarge { offset, octets })?;

    Ok((length as usize, start + octets))
}
