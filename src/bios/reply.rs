//
// RawReplyBlock - Scratch region filled by the real-mode bridge
//

use core::fmt;


/// Bytes exchanged with the firmware for one VBE call.
///
/// Large enough for the 512-byte VbeInfoBlock; the ModeInfoBlock uses
/// the first 256 bytes. All multi-byte fields are little-endian.
#[derive(Clone)]
#[repr(C, align(16))]
pub struct RawReplyBlock {
    bytes: [u8; Self::SIZE],
}

const _: () = assert!(RawReplyBlock::SIZE >= 0x100);

impl RawReplyBlock {
    pub const SIZE: usize = 0x200;

    pub const fn zeroed() -> Self {
	Self {
	    bytes: [0; Self::SIZE],
	}
    }

    /// Builds a block from `data`; missing trailing bytes are zero and
    /// excess bytes are ignored.
    pub fn from_bytes(data: &[u8]) -> Self {
	let mut block = Self::zeroed();
	let len = data.len().min(Self::SIZE);
	block.bytes[..len].copy_from_slice(&data[..len]);
	block
    }

    pub fn as_bytes(&self) -> &[u8; Self::SIZE] {
	&self.bytes
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8; Self::SIZE] {
	&mut self.bytes
    }

    pub fn clear(&mut self) {
	self.bytes.fill(0);
    }

    #[inline]
    pub fn u8_at(&self, offset: usize) -> u8 {
	self.bytes[offset]
    }

    #[inline]
    pub fn u16_at(&self, offset: usize) -> u16 {
	u16::from_le_bytes([self.bytes[offset], self.bytes[offset + 1]])
    }

    #[inline]
    pub fn u32_at(&self, offset: usize) -> u32 {
	u32::from_le_bytes([self.bytes[offset],
			    self.bytes[offset + 1],
			    self.bytes[offset + 2],
			    self.bytes[offset + 3]])
    }

    #[inline]
    pub fn array_at<const N: usize>(&self, offset: usize) -> [u8; N] {
	let mut array = [0; N];
	array.copy_from_slice(&self.bytes[offset..offset + N]);
	array
    }

    /// Returns true if every byte in `range` is zero.
    pub fn is_zero(&self, range: core::ops::Range<usize>) -> bool {
	self.bytes[range].iter().all(|&byte| byte == 0)
    }

    pub fn put_u8(&mut self, offset: usize, value: u8) {
	self.bytes[offset] = value;
    }

    pub fn put_u16(&mut self, offset: usize, value: u16) {
	self.bytes[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
    }

    pub fn put_u32(&mut self, offset: usize, value: u32) {
	self.bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }

    pub fn put_bytes(&mut self, offset: usize, data: &[u8]) {
	self.bytes[offset..offset + data.len()].copy_from_slice(data);
    }
}

impl Default for RawReplyBlock {
    fn default() -> Self {
	Self::zeroed()
    }
}

impl fmt::Debug for RawReplyBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	// Show the ModeInfoBlock-sized head only.
	f.debug_struct("RawReplyBlock")
	    .field("head", &&self.bytes[..0x40])
	    .finish_non_exhaustive()
    }
}
