use std::collections::HashSet;

use crate::codec;
use crate::error::CodecError;
use crate::flag_bit::{FlagBits, CODE_BITS};
use crate::status_code::StatusCode;

/// A named flag and the bit it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    pub name: String,
    pub position: u32,
}

/// The table of named flags shared by whoever produces a status code and
/// whoever reads it.
///
/// Validated once at construction and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSpec {
    flags: Vec<Flag>,
}

impl FlagSpec {
    /// Assigns positions in declaration order, the first name at bit 0.
    pub fn new<I, S>(names: I) -> Result<Self, CodecError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pairs = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| (name, u32::try_from(i).unwrap_or(u32::MAX)));
        Self::with_positions(pairs)
    }

    /// Builds a table from explicit positions. Gaps are reserved bits.
    pub fn with_positions<I, S>(pairs: I) -> Result<Self, CodecError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let flags: Vec<Flag> = pairs
            .into_iter()
            .map(|(name, position)| Flag {
                name: name.into(),
                position,
            })
            .collect();

        if flags.len() > CODE_BITS as usize {
            return Err(CodecError::TooManyFlags { count: flags.len() });
        }

        let mut names = HashSet::new();
        let mut positions = HashSet::new();
        for flag in &flags {
            if flag.name.is_empty() {
                return Err(CodecError::EmptyName);
            }
            if flag.position >= CODE_BITS {
                return Err(CodecError::PositionOutOfRange {
                    name: flag.name.clone(),
                    position: flag.position,
                });
            }
            if !names.insert(flag.name.as_str()) {
                return Err(CodecError::DuplicateFlag {
                    name: flag.name.clone(),
                });
            }
            if !positions.insert(flag.position) {
                return Err(CodecError::DuplicatePosition {
                    position: flag.position,
                });
            }
        }

        Ok(FlagSpec { flags })
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn position(&self, name: &str) -> Result<u32, CodecError> {
        self.flags
            .iter()
            .find(|flag| flag.name == name)
            .map(|flag| flag.position)
            .ok_or_else(|| CodecError::UnknownFlag {
                name: name.to_string(),
            })
    }

    /// Every declared bit set.
    pub fn mask(&self) -> u32 {
        self.flags
            .iter()
            .fold(0, |mask, flag| FlagBits::with_bit(mask, flag.position))
    }

    /// Smallest rendering width that shows every declared flag.
    pub fn required_width(&self) -> u32 {
        self.flags
            .iter()
            .map(|flag| flag.position + 1)
            .max()
            .unwrap_or(0)
    }

    /// Renders the declared bits of `code` like [`codec::to_binary_string`],
    /// but rejects a width too narrow for this table's highest flag.
    /// Reserved bits are not shown; see [`codec::unknown_bits`].
    pub fn render(&self, code: StatusCode, width: u32) -> Result<String, CodecError> {
        let required = self.required_width();
        if width < required {
            return Err(CodecError::InvalidWidth { width, required });
        }
        codec::to_binary_string(StatusCode::from_bits(code.bits() & self.mask()), width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order_positions() {
        let spec = FlagSpec::new(["a", "b", "c", "d"]).unwrap();
        assert_eq!(spec.len(), 4);
        assert_eq!(spec.position("a").unwrap(), 0);
        assert_eq!(spec.position("d").unwrap(), 3);
        assert_eq!(spec.mask(), 0b1111);
        assert_eq!(spec.required_width(), 4);
    }

    #[test]
    fn test_explicit_positions_with_gap() {
        let spec = FlagSpec::with_positions([("io", 0), ("fatal_error", 5)]).unwrap();
        assert_eq!(spec.position("fatal_error").unwrap(), 5);
        assert_eq!(spec.mask(), 0b100001);
        assert_eq!(spec.required_width(), 6);
    }

    #[test]
    fn test_empty_spec() {
        let spec = FlagSpec::new(Vec::<String>::new()).unwrap();
        assert!(spec.is_empty());
        assert_eq!(spec.mask(), 0);
        assert_eq!(spec.required_width(), 0);
    }

    #[test]
    fn test_rejects_duplicate_name() {
        let err = FlagSpec::new(["a", "b", "a"]).unwrap_err();
        assert_eq!(
            err,
            CodecError::DuplicateFlag {
                name: "a".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_position() {
        let err = FlagSpec::with_positions([("a", 2), ("b", 2)]).unwrap_err();
        assert_eq!(err, CodecError::DuplicatePosition { position: 2 });
    }

    #[test]
    fn test_rejects_out_of_range_position() {
        let err = FlagSpec::with_positions([("a", 32)]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::PositionOutOfRange { position: 32, .. }
        ));
    }

    #[test]
    fn test_rejects_too_many_flags() {
        let names: Vec<String> = (0..33).map(|i| format!("f{}", i)).collect();
        let err = FlagSpec::new(names).unwrap_err();
        assert_eq!(err, CodecError::TooManyFlags { count: 33 });

        let names: Vec<String> = (0..32).map(|i| format!("f{}", i)).collect();
        let spec = FlagSpec::new(names).unwrap();
        assert_eq!(spec.mask(), u32::MAX);
    }

    #[test]
    fn test_rejects_empty_name() {
        assert_eq!(FlagSpec::new(["a", ""]).unwrap_err(), CodecError::EmptyName);
    }

    #[test]
    fn test_unknown_position() {
        let spec = FlagSpec::new(["a"]).unwrap();
        assert!(matches!(
            spec.position("nonexistent"),
            Err(CodecError::UnknownFlag { .. })
        ));
    }

    #[test]
    fn test_render_checks_spec_width() {
        let spec = FlagSpec::new(["a", "b", "c", "d"]).unwrap();
        assert_eq!(
            spec.render(StatusCode::from_bits(2), 3).unwrap_err(),
            CodecError::InvalidWidth {
                width: 3,
                required: 4
            }
        );
        assert_eq!(spec.render(StatusCode::from_bits(2), 4).unwrap(), "0010");
    }

    #[test]
    fn test_render_hides_reserved_bits() {
        let spec = FlagSpec::with_positions([("a", 0), ("d", 3)]).unwrap();
        assert_eq!(spec.render(StatusCode::from_bits(0x10F), 4).unwrap(), "1001");
        assert_eq!(
            spec.render(StatusCode::from_bits(0x100), 8).unwrap(),
            "00000000"
        );
    }
}
