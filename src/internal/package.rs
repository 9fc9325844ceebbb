use internal::entry::EntryValue;
use internal::header::{self, Header, StructureHeader};
use internal::lead::{Lead, PackageType};
use internal::magic;
use internal::tags;
use std::collections::BTreeMap;
use std::io::{self, Read, Seek, SeekFrom};

// ========================================================================= //

/// The decoded metadata of one RPM package file.
#[derive(Debug)]
pub struct Package {
    package_type: PackageType,
    entries: BTreeMap<i32, EntryValue>,
}

impl Package {
    /// Reads package metadata from a seekable byte source positioned at the
    /// start of an RPM file.  The source is consumed; the returned package
    /// owns only the decoded entries.
    ///
    /// Fails with an `InvalidData` error if the lead, the signature header
    /// framing, or the information header is malformed.  Individual entries
    /// that fail to decode are skipped rather than failing the whole read.
    pub fn read<R: Read + Seek>(mut reader: R) -> io::Result<Package> {
        let lead = Lead::read(reader.by_ref())?;
        // The signature header's entries are not decoded; its magic number
        // only marks where to start looking for the information header.
        let signature_start =
            match magic::find(&mut reader, header::MAGIC_NUMBER)? {
                Some(offset) => offset,
                None => invalid_data!("Signature header not found"),
            };
        let resume = signature_start + header::MAGIC_NUMBER.len() as u64;
        reader.seek(SeekFrom::Start(resume))?;
        let info_start = match magic::find(&mut reader,
                                           header::MAGIC_NUMBER)? {
            Some(offset) => offset,
            None => invalid_data!("Information header not found"),
        };
        reader.seek(SeekFrom::Start(info_start))?;
        let mut buffer = [0u8; header::STRUCTURE_HEADER_SIZE];
        reader.read_exact(&mut buffer)?;
        let structure = StructureHeader::read(&buffer)?;
        let mut records = vec![0u8;
                               structure.tag_count() as usize *
                                   header::TAG_RECORD_SIZE];
        reader.read_exact(&mut records)?;
        let mut store = vec![0u8; structure.store_size() as usize];
        reader.read_exact(&mut store)?;
        let header = Header::parse(&structure, &records, &store)?;
        let mut entries = BTreeMap::new();
        for entry in header.into_entries() {
            // Last write wins if a malformed package repeats a tag.
            entries.insert(entry.tag(), entry.into_value());
        }
        Ok(Package {
               package_type: lead.package_type(),
               entries,
           })
    }

    /// Returns what type of package this is (binary or source).
    pub fn package_type(&self) -> PackageType { self.package_type }

    /// Returns true if this is a binary package.
    pub fn is_binary(&self) -> bool {
        self.package_type == PackageType::Binary
    }

    /// Returns true if this is a source package.
    pub fn is_source(&self) -> bool {
        self.package_type == PackageType::Source
    }

    /// Returns the map of all decoded entries.
    pub fn map(&self) -> &BTreeMap<i32, EntryValue> { &self.entries }

    /// Returns the value for the given tag, if any.
    pub fn get(&self, tag: i32) -> Option<&EntryValue> {
        self.entries.get(&tag)
    }

    /// Returns the value for the given tag, if it is present and is a
    /// string.
    pub fn get_string(&self, tag: i32) -> Option<&str> {
        self.get(tag).and_then(EntryValue::as_str)
    }

    /// Returns the package name.
    pub fn name(&self) -> Option<&str> { self.get_string(tags::TAG_NAME) }

    /// Returns the package version string.
    pub fn version(&self) -> Option<&str> {
        self.get_string(tags::TAG_VERSION)
    }

    /// Returns the package release string.
    pub fn release(&self) -> Option<&str> {
        self.get_string(tags::TAG_RELEASE)
    }

    /// Returns the architecture the package is for.
    pub fn arch(&self) -> Option<&str> { self.get_string(tags::TAG_ARCH) }

    /// Returns the long package description.
    pub fn description(&self) -> Option<&str> {
        self.get_string(tags::TAG_DESCRIPTION)
    }

    /// Returns the package name and version, joined as `"name-version"`.
    pub fn package(&self) -> Option<String> {
        let name = self.name()?;
        let version = self.version()?;
        Some(format!("{}-{}", name, version))
    }

    /// Returns the conventional file name for this package, e.g.
    /// `"foo-1.0-1.x86_64.rpm"` (with a `".src.rpm"` extension for source
    /// packages).
    pub fn filename(&self) -> Option<String> {
        let package = self.package()?;
        let release = self.release()?;
        let arch = self.arch()?;
        let extension = match self.package_type {
            PackageType::Binary => "rpm",
            PackageType::Source => "src.rpm",
        };
        Some(format!("{}-{}.{}.{}", package, release, arch, extension))
    }
}

// ========================================================================= //
