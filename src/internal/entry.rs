use byteorder::{BigEndian, ReadBytesExt};
use internal::tags;
use std::io::{self, Cursor, Read, Seek, SeekFrom};

// ========================================================================= //

/// A decoded (tag id, value) pair produced from one tag record.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Entry {
    tag: i32,
    value: EntryValue,
}

impl Entry {
    pub(crate) fn new(tag: i32, value: EntryValue) -> Entry {
        Entry { tag, value }
    }

    /// Returns the tag id this value was stored under.
    pub fn tag(&self) -> i32 { self.tag }

    /// Returns the decoded value, consuming the entry.
    pub fn into_value(self) -> EntryValue { self.value }
}

// ========================================================================= //

/// A decoded metadata value from a header store.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum EntryValue {
    /// An array of chars.
    Char(Vec<u8>),
    /// An array of 8-bit integers.
    Int8(Vec<i8>),
    /// An array of 16-bit integers.
    Int16(Vec<i16>),
    /// An array of 32-bit integers.
    Int32(Vec<i32>),
    /// An array of 64-bit integers.
    Int64(Vec<i64>),
    /// A single string.
    String(String),
    /// A single localized string.
    I18nString(String),
    /// A single binary blob.
    Binary(Vec<u8>),
}

impl EntryValue {
    /// Decodes the value described by one tag record.  The store cursor is
    /// seeked to `offset` and the bytes there are interpreted according to
    /// `typenum`.  Returns `Ok(None)` for a binary value whose tag carries
    /// no known length; any other failure to decode is an error, which the
    /// caller may treat as non-fatal.
    pub(crate) fn read(store: &mut Cursor<&[u8]>, tag: i32, typenum: i32,
                       offset: u32, count: u32)
                       -> io::Result<Option<EntryValue>> {
        let store_size = store.get_ref().len() as u64;
        if offset as u64 > store_size {
            invalid_data!("Entry offset ({}) is past the end of the store \
                           ({} bytes)",
                          offset,
                          store_size);
        }
        store.seek(SeekFrom::Start(offset as u64))?;
        match typenum {
            tags::TYPE_CHAR => {
                let mut buffer = vec![0u8; count as usize];
                store.read_exact(&mut buffer)?;
                Ok(Some(EntryValue::Char(buffer)))
            }
            tags::TYPE_INT8 => {
                let mut array = Vec::with_capacity(count as usize);
                for _ in 0..count {
                    array.push(store.read_i8()?);
                }
                Ok(Some(EntryValue::Int8(array)))
            }
            tags::TYPE_INT16 => {
                let mut array = Vec::with_capacity(count as usize);
                for _ in 0..count {
                    array.push(store.read_i16::<BigEndian>()?);
                }
                Ok(Some(EntryValue::Int16(array)))
            }
            tags::TYPE_INT32 => {
                let mut array = Vec::with_capacity(count as usize);
                for _ in 0..count {
                    array.push(store.read_i32::<BigEndian>()?);
                }
                Ok(Some(EntryValue::Int32(array)))
            }
            tags::TYPE_INT64 => {
                let mut array = Vec::with_capacity(count as usize);
                for _ in 0..count {
                    array.push(store.read_i64::<BigEndian>()?);
                }
                Ok(Some(EntryValue::Int64(array)))
            }
            // The count field is not meaningful for strings; they run until
            // a NUL terminator.
            tags::TYPE_STRING => {
                let string = read_nul_terminated_string(store)?;
                Ok(Some(EntryValue::String(string)))
            }
            tags::TYPE_I18NSTRING => {
                let string = read_nul_terminated_string(store)?;
                Ok(Some(EntryValue::I18nString(string)))
            }
            tags::TYPE_BIN => {
                // The record carries no length for binary data at this
                // format level, so only tags with a fixed, known size can
                // be decoded.
                let size = match tag {
                    tags::SIGTAG_MD5 => tags::MD5_SIZE,
                    tags::SIGTAG_PGP => tags::PGP_SIZE,
                    _ => return Ok(None),
                };
                let mut buffer = vec![0u8; size];
                store.read_exact(&mut buffer)?;
                Ok(Some(EntryValue::Binary(buffer)))
            }
            _ => invalid_data!("Invalid type in tag record ({})", typenum),
        }
    }

    /// Returns the string contents, if this is a string or localized
    /// string value.
    pub fn as_str(&self) -> Option<&str> {
        match *self {
            EntryValue::String(ref string) => Some(string.as_str()),
            EntryValue::I18nString(ref string) => Some(string.as_str()),
            _ => None,
        }
    }
}

/// Reads bytes up to (but not including) a NUL terminator.  A store that
/// runs out before the terminator yields the partial string.
fn read_nul_terminated_string(reader: &mut Cursor<&[u8]>)
                              -> io::Result<String> {
    let mut buffer = Vec::<u8>::new();
    loop {
        let byte = match reader.read_u8() {
            Ok(byte) => byte,
            Err(ref err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(err) => return Err(err),
        };
        if byte == 0 {
            break;
        }
        buffer.push(byte);
    }
    match String::from_utf8(buffer) {
        Ok(string) => Ok(string),
        Err(_) => invalid_data!("Invalid UTF-8 in header string entry"),
    }
}

// ========================================================================= //

#[cfg(test)]
mod tests {
    use super::EntryValue;
    use internal::tags;
    use std::io::Cursor;

    fn decode(store: &[u8], tag: i32, typenum: i32, offset: u32, count: u32)
              -> Option<EntryValue> {
        let mut cursor = Cursor::new(store);
        EntryValue::read(&mut cursor, tag, typenum, offset, count).unwrap()
    }

    #[test]
    fn decode_char_array() {
        let value = decode(b"xy", tags::TAG_NAME, tags::TYPE_CHAR, 0, 2);
        assert_eq!(value, Some(EntryValue::Char(vec![b'x', b'y'])));
    }

    #[test]
    fn decode_int8_array() {
        let value = decode(&[0xff, 0x7f], tags::TAG_SIZE, tags::TYPE_INT8,
                           0, 2);
        assert_eq!(value, Some(EntryValue::Int8(vec![-1, 127])));
    }

    #[test]
    fn decode_int16_array() {
        let value = decode(&[0x12, 0x34, 0xff, 0xfe], tags::TAG_SIZE,
                           tags::TYPE_INT16, 0, 2);
        assert_eq!(value, Some(EntryValue::Int16(vec![0x1234, -2])));
    }

    #[test]
    fn decode_int32_at_offset() {
        let value = decode(&[0, 0, 0, 0, 0, 1, 0x86, 0xa0], tags::TAG_SIZE,
                           tags::TYPE_INT32, 4, 1);
        assert_eq!(value, Some(EntryValue::Int32(vec![100000])));
    }

    #[test]
    fn decode_int64() {
        let store = &[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];
        let value = decode(store, tags::TAG_SIZE, tags::TYPE_INT64, 0, 1);
        assert_eq!(value, Some(EntryValue::Int64(vec![-1])));
    }

    #[test]
    fn decode_string() {
        let value = decode(b"foo\x00bar\x00", tags::TAG_NAME,
                           tags::TYPE_STRING, 0, 1);
        assert_eq!(value, Some(EntryValue::String("foo".to_string())));
    }

    #[test]
    fn string_count_is_ignored() {
        let value = decode(b"foo\x00", tags::TAG_NAME, tags::TYPE_STRING,
                           0, 7);
        assert_eq!(value, Some(EntryValue::String("foo".to_string())));
    }

    #[test]
    fn truncated_string_is_tolerated() {
        let value = decode(b"fo", tags::TAG_NAME, tags::TYPE_STRING, 0, 1);
        assert_eq!(value, Some(EntryValue::String("fo".to_string())));
    }

    #[test]
    fn decode_i18n_string() {
        let value = decode(b"hola\x00", tags::TAG_SUMMARY,
                           tags::TYPE_I18NSTRING, 0, 1);
        assert_eq!(value,
                   Some(EntryValue::I18nString("hola".to_string())));
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let mut cursor = Cursor::new(&b"\xff\xfe\x00"[..]);
        let result = EntryValue::read(&mut cursor, tags::TAG_NAME,
                                      tags::TYPE_STRING, 0, 1);
        assert!(result.is_err());
    }

    #[test]
    fn decode_md5_digest() {
        let store: Vec<u8> = (0u8..16).collect();
        let value = decode(&store, tags::SIGTAG_MD5, tags::TYPE_BIN, 0, 16);
        assert_eq!(value, Some(EntryValue::Binary(store.clone())));
    }

    #[test]
    fn decode_pgp_blob() {
        let store = vec![0xabu8; tags::PGP_SIZE];
        let value = decode(&store, tags::SIGTAG_PGP, tags::TYPE_BIN, 0, 1);
        assert_eq!(value, Some(EntryValue::Binary(store.clone())));
    }

    #[test]
    fn binary_with_unknown_length_is_absent() {
        let value = decode(b"whatever", tags::TAG_GIF, tags::TYPE_BIN, 0, 8);
        assert_eq!(value, None);
    }

    #[test]
    fn offset_past_store_is_an_error() {
        let mut cursor = Cursor::new(&b"abcd"[..]);
        let result = EntryValue::read(&mut cursor, tags::TAG_SIZE,
                                      tags::TYPE_INT32, 100, 1);
        assert!(result.is_err());
    }

    #[test]
    fn fixed_width_read_past_store_is_an_error() {
        let mut cursor = Cursor::new(&b"ab"[..]);
        let result = EntryValue::read(&mut cursor, tags::TAG_SIZE,
                                      tags::TYPE_INT32, 0, 1);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_type_is_an_error() {
        let mut cursor = Cursor::new(&b"abcd"[..]);
        let result = EntryValue::read(&mut cursor, tags::TAG_NAME, 37, 0, 1);
        assert!(result.is_err());
    }

    #[test]
    fn decoding_is_pure() {
        let store = &b"\x00\x00\x00\x2afoo\x00"[..];
        let mut cursor = Cursor::new(store);
        let first = EntryValue::read(&mut cursor, tags::TAG_SIZE,
                                     tags::TYPE_INT32, 0, 1)
            .unwrap();
        let second = EntryValue::read(&mut cursor, tags::TAG_SIZE,
                                      tags::TYPE_INT32, 0, 1)
            .unwrap();
        assert_eq!(first, second);
    }
}

// ========================================================================= //
