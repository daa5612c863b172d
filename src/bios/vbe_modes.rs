//
// Well-known mode numbers and mode number flags
//

/// 640x480, 256 colors
pub const MODE_640X480: u16 = 0x101;
/// 800x600, 256 colors
pub const MODE_800X600: u16 = 0x103;
/// 1024x768, 256 colors
pub const MODE_1024X768: u16 = 0x105;
/// 1280x1024, 256 colors
pub const MODE_1280X1024: u16 = 0x107;

/// Legacy VGA 80x25 text mode.
pub const TEXT_MODE_80X25: u16 = 0x03;
/// Mode number that returns to text mode through INT 10h AH=00h.
pub const SET_TEXT_MODE: u16 = 0x03;

/// Terminates the video mode list.
pub const VIDEO_MODE_LIST_END: u16 = 0xffff;

/// Bit 14 of a mode number passed to AX=4F02h: use the linear frame
/// buffer instead of banked windows. Not a mode attribute bit.
pub const LINEAR_FRAME_BUFFER_BIT: u32 = 14;

/// Bit 8 of a mode number: VESA-defined mode (as opposed to VGA/OEM).
pub const VESA_MODE_BIT: u32 = 8;

/// Returns `mode` with the linear frame buffer bit set.
pub const fn with_linear_frame_buffer(mode: u16) -> u16 {
    mode | 1 << LINEAR_FRAME_BUFFER_BIT
}

/// Returns true if `mode` is in the VESA-defined range.
pub fn is_vesa_mode(mode: u16) -> bool {
    crate::bits::bit(mode, VESA_MODE_BIT) != 0
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_frame_buffer_flag() {
	assert_eq!(with_linear_frame_buffer(MODE_1024X768), 0x4105);
	assert_eq!(with_linear_frame_buffer(0x4105), 0x4105);
    }

    #[test]
    fn vesa_range() {
	assert!(is_vesa_mode(MODE_640X480));
	assert!(is_vesa_mode(MODE_1280X1024));
	assert!(!is_vesa_mode(TEXT_MODE_80X25));
    }
}
