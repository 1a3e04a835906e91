// Error types for the status code codec
//
// These are errors of the codec itself (a flag table or call site that
// does not match), not the conditions a status code carries.

use log::error;
use std::fmt;

/// Numeric code and message for a codec error.
pub trait ErrorCode {
    fn code(&self) -> i32;

    fn message(&self) -> String;
}

/// Codec error code constants
///
/// Error code range: 1001-1009
pub struct CodecErrorCodes {}

impl CodecErrorCodes {
    pub const UNKNOWN_FLAG: i32 = 1001;
    pub const INVALID_WIDTH: i32 = 1002;
    pub const DUPLICATE_FLAG: i32 = 1003;
    pub const DUPLICATE_POSITION: i32 = 1004;
    pub const POSITION_OUT_OF_RANGE: i32 = 1005;
    pub const TOO_MANY_FLAGS: i32 = 1006;
    pub const EMPTY_NAME: i32 = 1007;
    pub const TRUNCATED_DUMP: i32 = 1008;
    pub const WIDTH_TOO_LARGE: i32 = 1009;
}

/// Log a codec error together with the call site that hit it.
pub fn log_codec_error(err: &CodecError, context: &str) {
    error!(
        "Codec error in {}: code={}, message={}",
        context,
        err.code(),
        err.message()
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A flag name that the active flag table does not declare
    UnknownFlag { name: String },

    /// A rendering width that cannot hold the bits it must show
    InvalidWidth { width: u32, required: u32 },

    /// A rendering width wider than a status code
    WidthTooLarge { width: u32, max: u32 },

    DuplicateFlag { name: String },

    DuplicatePosition { position: u32 },

    /// Bit position does not fit in a status code
    PositionOutOfRange { name: String, position: u32 },

    TooManyFlags { count: usize },

    EmptyName,

    /// A code dump ended in the middle of a code
    TruncatedDump { trailing: usize },
}

impl ErrorCode for CodecError {
    fn code(&self) -> i32 {
        match self {
            CodecError::UnknownFlag { .. } => CodecErrorCodes::UNKNOWN_FLAG,
            CodecError::InvalidWidth { .. } => CodecErrorCodes::INVALID_WIDTH,
            CodecError::WidthTooLarge { .. } => CodecErrorCodes::WIDTH_TOO_LARGE,
            CodecError::DuplicateFlag { .. } => CodecErrorCodes::DUPLICATE_FLAG,
            CodecError::DuplicatePosition { .. } => CodecErrorCodes::DUPLICATE_POSITION,
            CodecError::PositionOutOfRange { .. } => CodecErrorCodes::POSITION_OUT_OF_RANGE,
            CodecError::TooManyFlags { .. } => CodecErrorCodes::TOO_MANY_FLAGS,
            CodecError::EmptyName => CodecErrorCodes::EMPTY_NAME,
            CodecError::TruncatedDump { .. } => CodecErrorCodes::TRUNCATED_DUMP,
        }
    }

    fn message(&self) -> String {
        match self {
            CodecError::UnknownFlag { name } => format!("Unknown flag: {}", name),
            CodecError::InvalidWidth { width, required } => {
                format!("Invalid width {}: need at least {}", width, required)
            }
            CodecError::WidthTooLarge { width, max } => {
                format!("Invalid width {}: status codes have {} bits", width, max)
            }
            CodecError::DuplicateFlag { name } => format!("Flag declared twice: {}", name),
            CodecError::DuplicatePosition { position } => {
                format!("Bit position {} assigned twice", position)
            }
            CodecError::PositionOutOfRange { name, position } => {
                format!("Flag {} at bit {} does not fit in 32 bits", name, position)
            }
            CodecError::TooManyFlags { count } => {
                format!("{} flags declared, at most 32 fit", count)
            }
            CodecError::EmptyName => "Flag name is empty".to_string(),
            CodecError::TruncatedDump { trailing } => {
                format!("Code dump ends with {} stray bytes", trailing)
            }
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message(), self.code())
    }
}

impl std::error::Error for CodecError {}
