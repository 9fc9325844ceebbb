use byteorder::ReadBytesExt;
use std::io::{self, Read, Seek, SeekFrom};

// ========================================================================= //

/// Scans forward from the reader's current position for the first exact
/// occurrence of `pattern`, one byte at a time.  Returns the absolute offset
/// at which the pattern begins, or `None` if the pattern doesn't occur
/// before end-of-stream (including when fewer than `pattern.len()` bytes
/// remain).  The reader's position afterwards is unspecified; callers must
/// re-seek.
pub(crate) fn find<R: Read + Seek>(reader: &mut R, pattern: &[u8])
                                   -> io::Result<Option<u64>> {
    debug_assert!(!pattern.is_empty());
    let mut end = reader.seek(SeekFrom::Current(0))?;
    let mut window: Vec<u8> = Vec::with_capacity(pattern.len());
    loop {
        let byte = match reader.read_u8() {
            Ok(byte) => byte,
            Err(ref err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                return Ok(None);
            }
            Err(err) => return Err(err),
        };
        end += 1;
        if window.len() == pattern.len() {
            window.remove(0);
        }
        window.push(byte);
        if window[..] == *pattern {
            return Ok(Some(end - pattern.len() as u64));
        }
    }
}

// ========================================================================= //


// ========================================================================= //
