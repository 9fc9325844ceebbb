use byteorder::{BigEndian, ReadBytesExt};
use internal::entry::{Entry, EntryValue};
use internal::tags;
use std::io::{self, Cursor, Read};

// ========================================================================= //

/// The three magic bytes that open every structure header.
pub(crate) const MAGIC_NUMBER: &[u8] = &[0x8e, 0xad, 0xe8];

/// Size in bytes of a structure header.
pub(crate) const STRUCTURE_HEADER_SIZE: usize = 16;

/// Size in bytes of one tag record.
pub(crate) const TAG_RECORD_SIZE: usize = 16;

// ========================================================================= //

/// The fixed 16-byte record that frames a tag-record array and its store.
pub(crate) struct StructureHeader {
    tag_count: u32,
    store_size: u32,
}

impl StructureHeader {
    pub(crate) fn read(buffer: &[u8; STRUCTURE_HEADER_SIZE])
                       -> io::Result<StructureHeader> {
        let mut reader = Cursor::new(&buffer[..]);
        let mut magic = [0u8; 3];
        reader.read_exact(&mut magic)?;
        if &magic[..] != MAGIC_NUMBER {
            invalid_data!("Invalid header magic number ({:02x}{:02x}{:02x})",
                          magic[0],
                          magic[1],
                          magic[2]);
        }
        let _version = reader.read_u8()?;
        let mut reserved = [0u8; 4];
        reader.read_exact(&mut reserved)?;
        let tag_count = reader.read_u32::<BigEndian>()?;
        let store_size = reader.read_u32::<BigEndian>()?;
        Ok(StructureHeader {
               tag_count,
               store_size,
           })
    }

    /// Returns the number of tag records following this header.
    pub(crate) fn tag_count(&self) -> u32 { self.tag_count }

    /// Returns the size in bytes of the store following the tag records.
    pub(crate) fn store_size(&self) -> u32 { self.store_size }
}

// ========================================================================= //

/// The decoded entries of one structure header, in tag-record order.
pub(crate) struct Header {
    entries: Vec<Entry>,
}

impl Header {
    /// Decodes the tag records of one structure header against its store.
    /// Records whose tag id is out of range or unrecognized are dropped
    /// silently; a record whose value fails to decode is skipped without
    /// aborting the rest of the header.
    pub(crate) fn parse(structure: &StructureHeader, records: &[u8],
                        store: &[u8]) -> io::Result<Header> {
        debug_assert_eq!(records.len(),
                         structure.tag_count() as usize * TAG_RECORD_SIZE);
        let mut reader = Cursor::new(records);
        let mut cursor = Cursor::new(store);
        let mut entries = Vec::new();
        for _ in 0..structure.tag_count() {
            let tag = reader.read_i32::<BigEndian>()?;
            let typenum = reader.read_i32::<BigEndian>()?;
            let offset = reader.read_u32::<BigEndian>()?;
            let count = reader.read_u32::<BigEndian>()?;
            if tag < tags::TAG_MIN_NUMBER || tag > tags::TAG_MAX_NUMBER {
                continue;
            }
            if !tags::is_known(tag) {
                continue;
            }
            match EntryValue::read(&mut cursor, tag, typenum, offset, count) {
                Ok(Some(value)) => entries.push(Entry::new(tag, value)),
                Ok(None) => {}
                Err(err) => {
                    warn!("Skipping malformed entry for tag {}: {}",
                          tag,
                          err);
                }
            }
        }
        Ok(Header { entries })
    }

    pub(crate) fn into_entries(self) -> Vec<Entry> { self.entries }
}

// ========================================================================= //

#[cfg(test)]
mod tests {
    use super::{Header, StructureHeader, STRUCTURE_HEADER_SIZE};
    use byteorder::{BigEndian, WriteBytesExt};
    use internal::entry::EntryValue;
    use internal::tags;

    fn structure(tag_count: u32, store_size: u32)
                 -> [u8; STRUCTURE_HEADER_SIZE] {
        let mut buffer = [0u8; STRUCTURE_HEADER_SIZE];
        buffer[0..3].copy_from_slice(&[0x8e, 0xad, 0xe8]);
        buffer[3] = 1;
        (&mut buffer[8..12]).write_u32::<BigEndian>(tag_count).unwrap();
        (&mut buffer[12..16]).write_u32::<BigEndian>(store_size).unwrap();
        buffer
    }

    fn record(tag: i32, typenum: i32, offset: u32, count: u32) -> Vec<u8> {
        let mut buffer = Vec::new();
        buffer.write_i32::<BigEndian>(tag).unwrap();
        buffer.write_i32::<BigEndian>(typenum).unwrap();
        buffer.write_u32::<BigEndian>(offset).unwrap();
        buffer.write_u32::<BigEndian>(count).unwrap();
        buffer
    }

    #[test]
    fn read_structure_header() {
        let structure = StructureHeader::read(&structure(3, 99)).unwrap();
        assert_eq!(structure.tag_count(), 3);
        assert_eq!(structure.store_size(), 99);
    }

    #[test]
    fn bad_structure_magic() {
        let mut buffer = structure(0, 0);
        buffer[0] = 0;
        assert!(StructureHeader::read(&buffer).is_err());
    }

    #[test]
    fn out_of_range_tags_are_dropped() {
        let store = b"foo\x00";
        let mut records = record(999, tags::TYPE_STRING, 0, 1);
        records.extend(record(1147, tags::TYPE_STRING, 0, 1));
        records.extend(record(tags::TAG_NAME, tags::TYPE_STRING, 0, 1));
        let structure = StructureHeader::read(&structure(3, 4)).unwrap();
        let header = Header::parse(&structure, &records, store).unwrap();
        let entries = header.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].tag(), tags::TAG_NAME);
    }

    #[test]
    fn unrecognized_in_range_tags_are_dropped() {
        let store = b"foo\x00";
        let records = record(1100, tags::TYPE_STRING, 0, 1);
        let structure = StructureHeader::read(&structure(1, 4)).unwrap();
        let header = Header::parse(&structure, &records, store).unwrap();
        assert!(header.into_entries().is_empty());
    }

    #[test]
    fn malformed_entry_is_skipped() {
        let store = b"foo\x00";
        let mut records = record(tags::TAG_SIZE, tags::TYPE_INT32, 100, 1);
        records.extend(record(tags::TAG_NAME, tags::TYPE_STRING, 0, 1));
        let structure = StructureHeader::read(&structure(2, 4)).unwrap();
        let header = Header::parse(&structure, &records, store).unwrap();
        let mut entries = header.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.remove(0).into_value(),
                   EntryValue::String("foo".to_string()));
    }

    #[test]
    fn entries_keep_record_order() {
        let store = b"foo\x001.0\x00";
        let mut records = record(tags::TAG_VERSION, tags::TYPE_STRING, 4, 1);
        records.extend(record(tags::TAG_NAME, tags::TYPE_STRING, 0, 1));
        let structure = StructureHeader::read(&structure(2, 8)).unwrap();
        let header = Header::parse(&structure, &records, store).unwrap();
        let entries = header.into_entries();
        assert_eq!(entries[0].tag(), tags::TAG_VERSION);
        assert_eq!(entries[1].tag(), tags::TAG_NAME);
    }
}

// ========================================================================= //
