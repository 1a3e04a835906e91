// Raw status code dumps
//
// A status code's bits are logical, its bytes are not: the same code reads
// back differently under the wrong byte order. Callers always pick one.

use std::io::{self, Read, Write};

use byteorder::{ByteOrder, ReadBytesExt, WriteBytesExt};

use crate::error::CodecError;
use crate::status_code::StatusCode;

const CODE_BYTES: usize = 4;

#[derive(Debug)]
pub enum DumpError {
    Io(io::Error),
    Codec(CodecError),
}

impl std::fmt::Display for DumpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DumpError::Io(err) => write!(f, "I/O error reading code dump: {}", err),
            DumpError::Codec(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DumpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DumpError::Io(err) => Some(err),
            DumpError::Codec(err) => Some(err),
        }
    }
}

impl From<io::Error> for DumpError {
    fn from(err: io::Error) -> Self {
        DumpError::Io(err)
    }
}

/// Reads consecutive 4-byte codes until end of input.
pub fn read_codes<B: ByteOrder, R: Read>(mut reader: R) -> Result<Vec<StatusCode>, DumpError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let trailing = bytes.len() % CODE_BYTES;
    if trailing != 0 {
        return Err(DumpError::Codec(CodecError::TruncatedDump { trailing }));
    }

    let mut cursor = bytes.as_slice();
    let mut codes = Vec::with_capacity(bytes.len() / CODE_BYTES);
    while !cursor.is_empty() {
        codes.push(StatusCode::from_bits(cursor.read_u32::<B>()?));
    }
    Ok(codes)
}

pub fn write_codes<B: ByteOrder, W: Write>(
    mut writer: W,
    codes: &[StatusCode],
) -> Result<(), DumpError> {
    for code in codes {
        writer.write_u32::<B>(code.bits())?;
    }
    writer.flush()?;
    Ok(())
}
