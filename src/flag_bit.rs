/// Number of bits in a status code.
pub const CODE_BITS: u32 = u32::BITS;

pub struct FlagBits;
impl FlagBits {
    pub fn is_bit_active(flag: u32, index: u32) -> bool {
        index < CODE_BITS && ((flag >> index) & 1) == 1
    }

    pub fn with_bit(flag: u32, index: u32) -> u32 {
        flag | Self::bit(index)
    }

    pub fn bit(index: u32) -> u32 {
        1u32.checked_shl(index).unwrap_or(0)
    }

    /// Number of bits needed to print `flag` without losing set bits.
    pub fn bit_length(flag: u32) -> u32 {
        CODE_BITS - flag.leading_zeros()
    }
}
