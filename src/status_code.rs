use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A status code returned across a call boundary.
///
/// Each bit is the state of one flag from a [`crate::FlagSpec`]. Zero means
/// success. The bit positions are logical, so the value is independent of
/// byte order until it is written out as bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct StatusCode(u32);

impl StatusCode {
    pub const SUCCESS: StatusCode = StatusCode(0);

    pub const fn from_bits(bits: u32) -> Self {
        StatusCode(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_success(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for StatusCode {
    fn from(bits: u32) -> Self {
        StatusCode(bits)
    }
}

impl From<StatusCode> for u32 {
    fn from(code: StatusCode) -> Self {
        code.0
    }
}

impl BitOr for StatusCode {
    type Output = StatusCode;

    fn bitor(self, rhs: StatusCode) -> StatusCode {
        StatusCode(self.0 | rhs.0)
    }
}

impl BitOrAssign for StatusCode {
    fn bitor_assign(&mut self, rhs: StatusCode) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Binary for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}
