use byteorder::{BigEndian, ReadBytesExt};
use std::io::{self, Read};

// ========================================================================= //

pub(crate) const MAGIC_NUMBER: u32 = 0xedabeedb;

/// Size in bytes of a package lead.
pub(crate) const LEAD_SIZE: usize = 96;

// ========================================================================= //

/// The "Lead" section of an RPM package file.  Only the package type
/// survives parsing; the other lead fields are legacy and the real
/// metadata lives in the header sections.
pub(crate) struct Lead {
    package_type: PackageType,
}

impl Lead {
    /// Reads in an RPM package file lead section.
    pub(crate) fn read<R: Read>(mut reader: R) -> io::Result<Lead> {
        let magic_number = reader.read_u32::<BigEndian>()?;
        if magic_number != MAGIC_NUMBER {
            invalid_data!("Not an RPM package (invalid lead magic number)");
        }
        let _version_major = reader.read_u8()?;
        let _version_minor = reader.read_u8()?;
        let package_type_num = reader.read_u16::<BigEndian>()?;
        let package_type = match PackageType::from_number(package_type_num) {
            Some(ptype) => ptype,
            None => {
                invalid_data!("Unknown package type ({})", package_type_num);
            }
        };
        // archnum(2) name(66) osnum(2) sigtype(2) reserved(16)
        let mut rest = [0u8; LEAD_SIZE - 8];
        reader.read_exact(&mut rest)?;
        Ok(Lead { package_type })
    }

    /// Returns what type of package this is (binary or source).
    pub(crate) fn package_type(&self) -> PackageType { self.package_type }
}

// ========================================================================= //

/// A type of RPM package.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PackageType {
    /// A binary package.
    Binary,
    /// A source package.
    Source,
}

impl PackageType {
    pub(crate) fn from_number(number: u16) -> Option<PackageType> {
        match number {
            0 => Some(PackageType::Binary),
            1 => Some(PackageType::Source),
            _ => None,
        }
    }
}

// ========================================================================= //


// ========================================================================= //
