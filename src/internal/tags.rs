//! Tag id and data type id constants for the RPM header format.
//!
//! Tag ids identify metadata fields in a header's tag-record directory;
//! type ids select how the field's bytes in the store are decoded.

// ========================================================================= //

/// Data type id for an array of single characters.
pub const TYPE_CHAR: i32 = 1;
/// Data type id for an array of 8-bit integers.
pub const TYPE_INT8: i32 = 2;
/// Data type id for an array of big-endian 16-bit integers.
pub const TYPE_INT16: i32 = 3;
/// Data type id for an array of big-endian 32-bit integers.
pub const TYPE_INT32: i32 = 4;
/// Data type id for an array of big-endian 64-bit integers.
pub const TYPE_INT64: i32 = 5;
/// Data type id for a single NUL-terminated string.
pub const TYPE_STRING: i32 = 6;
/// Data type id for a binary blob.
pub const TYPE_BIN: i32 = 7;
/// Data type id for an array of NUL-terminated strings.
pub const TYPE_STRING_ARRAY: i32 = 8;
/// Data type id for a single localized NUL-terminated string.
pub const TYPE_I18NSTRING: i32 = 9;

// ========================================================================= //

/// Smallest tag id that can appear in an information header.
pub const TAG_MIN_NUMBER: i32 = 1000;
/// Largest tag id that can appear in an information header.
pub const TAG_MAX_NUMBER: i32 = 1146;

/// Tag for the package name.
pub const TAG_NAME: i32 = 1000;
/// Tag for the package version string.
pub const TAG_VERSION: i32 = 1001;
/// Tag for the package release string.
pub const TAG_RELEASE: i32 = 1002;
/// Tag for the package serial (epoch) number.
pub const TAG_SERIAL: i32 = 1003;
/// Tag for the one-line package summary.
pub const TAG_SUMMARY: i32 = 1004;
/// Tag for the long package description.
pub const TAG_DESCRIPTION: i32 = 1005;
/// Tag for the build timestamp, in seconds since the epoch.
pub const TAG_BUILDTIME: i32 = 1006;
/// Tag for the name of the host the package was built on.
pub const TAG_BUILDHOST: i32 = 1007;
/// Tag for the install timestamp, in seconds since the epoch.
pub const TAG_INSTALLTIME: i32 = 1008;
/// Tag for the total installed size of the package, in bytes.
pub const TAG_SIZE: i32 = 1009;
/// Tag for the distribution the package belongs to.
pub const TAG_DISTRIBUTION: i32 = 1010;
/// Tag for the package vendor.
pub const TAG_VENDOR: i32 = 1011;
/// Tag for the package's GIF icon.
pub const TAG_GIF: i32 = 1012;
/// Tag for the package's XPM icon.
pub const TAG_XPM: i32 = 1013;
/// Tag for the package license (historically called "copyright").
pub const TAG_COPYRIGHT: i32 = 1014;
/// Tag for the packager's name and email address.
pub const TAG_PACKAGER: i32 = 1015;
/// Tag for the package group.
pub const TAG_GROUP: i32 = 1016;
/// Tag for the package changelog.
pub const TAG_CHANGELOG: i32 = 1017;
/// Tag for the source archives used to build the package.
pub const TAG_SOURCE: i32 = 1018;
/// Tag for the patches applied while building the package.
pub const TAG_PATCH: i32 = 1019;
/// Tag for the package's upstream URL.
pub const TAG_URL: i32 = 1020;
/// Tag for the operating system the package is for.
pub const TAG_OS: i32 = 1021;
/// Tag for the architecture the package is for.
pub const TAG_ARCH: i32 = 1022;

// ========================================================================= //

/// Tag for a 128-bit MD5 digest, in the signature tag space.
pub const SIGTAG_MD5: i32 = 1004;
/// Tag for a PGP signature blob, in the signature tag space.
pub const SIGTAG_PGP: i32 = 1005;

/// Size in bytes of an MD5 digest entry.
pub const MD5_SIZE: usize = 16;
/// Size in bytes of a PGP signature entry.
pub const PGP_SIZE: usize = 152;

// ========================================================================= //

// Tag ids whose entries are decoded from an information header; records
// with any other tag id are dropped.
#[cfg_attr(rustfmt, rustfmt_skip)]
const KNOWN_TAGS: &[i32] = &[
    TAG_NAME, TAG_VERSION, TAG_RELEASE, TAG_SERIAL, TAG_SUMMARY,
    TAG_DESCRIPTION, TAG_BUILDTIME, TAG_BUILDHOST, TAG_INSTALLTIME,
    TAG_SIZE, TAG_DISTRIBUTION, TAG_VENDOR, TAG_GIF, TAG_XPM,
    TAG_COPYRIGHT, TAG_PACKAGER, TAG_GROUP, TAG_CHANGELOG, TAG_SOURCE,
    TAG_PATCH, TAG_URL, TAG_OS, TAG_ARCH,
];

/// Returns true if the given tag id is in the recognized tag set.
pub fn is_known(tag: i32) -> bool { KNOWN_TAGS.contains(&tag) }

// ========================================================================= //

#[cfg(test)]
mod tests {
    use super::{is_known, KNOWN_TAGS, TAG_MAX_NUMBER, TAG_MIN_NUMBER};
    use std::collections::HashSet;

    #[test]
    fn tags_are_unique() {
        let mut tags = HashSet::new();
        for &tag in KNOWN_TAGS.iter() {
            assert!(!tags.contains(&tag));
            tags.insert(tag);
        }
    }

    #[test]
    fn tags_are_within_valid_range() {
        for &tag in KNOWN_TAGS.iter() {
            assert!(tag >= TAG_MIN_NUMBER && tag <= TAG_MAX_NUMBER);
        }
    }

    #[test]
    fn unrecognized_tags() {
        assert!(!is_known(TAG_MIN_NUMBER - 1));
        assert!(!is_known(1100));
        assert!(!is_known(TAG_MAX_NUMBER));
    }
}

// ========================================================================= //
