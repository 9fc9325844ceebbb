//! A library for reading metadata from [RPM
//! packages](https://en.wikipedia.org/wiki/Rpm_(software)).
//!
//! The entry point is [`Package::read`](struct.Package.html#method.read),
//! which consumes any seekable byte source and decodes the package's
//! information header into a queryable tag table.

#![warn(missing_docs)]

extern crate byteorder;
#[macro_use]
extern crate log;

mod internal;

pub use internal::entry::EntryValue;
pub use internal::lead::PackageType;
pub use internal::package::Package;
pub use internal::tags;

// ========================================================================= //
