//! Encoding and decoding between named flags and status codes.

use std::collections::BTreeSet;

use log::debug;

use crate::error::CodecError;
use crate::flag_bit::{FlagBits, CODE_BITS};
use crate::flag_spec::FlagSpec;
use crate::status_code::StatusCode;

/// Packs the asserted flags into a status code. No flags means success.
pub fn encode<I, S>(spec: &FlagSpec, asserted: I) -> Result<StatusCode, CodecError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut bits: u32 = 0;
    for name in asserted {
        let position = spec.position(name.as_ref())?;
        bits = FlagBits::with_bit(bits, position);
    }
    debug!("encoded status code {:#034b}", bits);
    Ok(StatusCode::from_bits(bits))
}

/// Names whose bit is set. Bits no flag declares are ignored.
pub fn decode(spec: &FlagSpec, code: StatusCode) -> BTreeSet<String> {
    decode_ordered(spec, code)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Like [`decode`], but in declaration order and borrowing from the table.
pub fn decode_ordered(spec: &FlagSpec, code: StatusCode) -> Vec<&str> {
    let extra = unknown_bits(spec, code);
    if extra != 0 {
        debug!("status code {} has reserved bits set: {:#b}", code, extra);
    }
    spec.flags()
        .iter()
        .filter(|flag| FlagBits::is_bit_active(code.bits(), flag.position))
        .map(|flag| flag.name.as_str())
        .collect()
}

pub fn is_set(spec: &FlagSpec, code: StatusCode, name: &str) -> Result<bool, CodecError> {
    let position = spec.position(name)?;
    Ok(FlagBits::is_bit_active(code.bits(), position))
}

/// Bits set in `code` that `spec` does not declare.
pub fn unknown_bits(spec: &FlagSpec, code: StatusCode) -> u32 {
    code.bits() & !spec.mask()
}

/// Fixed-width binary digits, most significant bit first.
pub fn to_binary_string(code: StatusCode, width: u32) -> Result<String, CodecError> {
    if width > CODE_BITS {
        return Err(CodecError::WidthTooLarge {
            width,
            max: CODE_BITS,
        });
    }
    let required = FlagBits::bit_length(code.bits()).max(1);
    if width < required {
        return Err(CodecError::InvalidWidth { width, required });
    }
    let digits = (0..width)
        .rev()
        .map(|index| {
            if FlagBits::is_bit_active(code.bits(), index) {
                '1'
            } else {
                '0'
            }
        })
        .collect();
    Ok(digits)
}

/// ORs codes from consecutive checks into one.
pub fn combine<I>(codes: I) -> StatusCode
where
    I: IntoIterator<Item = StatusCode>,
{
    codes
        .into_iter()
        .fold(StatusCode::SUCCESS, |acc, code| acc | code)
}
