//! Status codes as named bit flags.
//!
//! A function returns a plain [`StatusCode`]; the caller reads it back with
//! the same [`FlagSpec`]. Zero means success.

pub mod code_dump;
pub mod codec;
pub mod error;
pub mod flag_bit;
pub mod flag_spec;
pub mod status_code;

pub use codec::{combine, decode, decode_ordered, encode, is_set, to_binary_string, unknown_bits};
pub use error::{log_codec_error, CodecError, CodecErrorCodes, ErrorCode};
pub use flag_spec::{Flag, FlagSpec};
pub use status_code::StatusCode;
