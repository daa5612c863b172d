//
// Bit-field helpers for firmware flag words and color channel masks.
//

/// Returns the state (0 or 1) of bit `index` of `value`.
///
/// Indexes past the width of `u64` read as 0.
#[inline]
pub fn bit<T>(value: T, index: u32) -> u8
where
    T: Into<u64>,
{
    match value.into().checked_shr(index) {
	Some(shifted) => (shifted & 1) as u8,
	None => 0,
    }
}

/// Returns a mask of `size` ones starting at bit `position`.
#[inline]
pub fn mask(position: u32, size: u32) -> u64 {
    let ones = match size {
	0 => 0,
	_ if size >= 64 => u64::MAX,
	_ => (1_u64 << size) - 1,
    };
    ones.checked_shl(position).unwrap_or(0)
}

/// Extracts `size` bits of `value` starting at bit `position`.
#[inline]
pub fn field<T>(value: T, position: u32, size: u32) -> u64
where
    T: Into<u64>,
{
    let value = value.into();
    (value & mask(position, size)).checked_shr(position).unwrap_or(0)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_reads_each_position() {
	assert_eq!(bit(0x80_u8, 7), 1);
	assert_eq!(bit(0x80_u8, 6), 0);
	assert_eq!(bit(0x4000_u16, 14), 1);
	assert_eq!(bit(1_u32 << 31, 31), 1);
	assert_eq!(bit(u64::MAX, 63), 1);
    }

    #[test]
    fn bit_past_width_is_zero() {
	assert_eq!(bit(0xff_u8, 8), 0);
	assert_eq!(bit(u64::MAX, 64), 0);
	assert_eq!(bit(u64::MAX, 200), 0);
    }

    #[test]
    fn masks_and_fields() {
	assert_eq!(mask(16, 8), 0x00ff_0000);
	assert_eq!(mask(11, 5), 0xf800);
	assert_eq!(mask(0, 0), 0);
	assert_eq!(mask(0, 64), u64::MAX);
	assert_eq!(mask(64, 1), 0);

	assert_eq!(field(0x12345678_u32, 8, 8), 0x56);
	assert_eq!(field(0xf800_u16, 11, 5), 0x1f);
	assert_eq!(field(0xffff_u16, 70, 4), 0);
    }
}
