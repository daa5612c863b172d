use core::fmt;

use super::PhysAddr;


/// X86 Far Pointer (i.e., segment and offset)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct X86FarPtr {
    pub offset: u16,
    pub segment: u16,
}

impl X86FarPtr {
    /// Returns null far pointer.
    pub const fn null() -> Self {
	Self {
	    offset: 0,
	    segment: 0,
	}
    }

    /// Splits a far pointer as stored by the firmware:
    /// segment in the high 16 bits, offset in the low 16 bits.
    pub const fn from_u32(far_ptr: u32) -> Self {
	Self {
	    offset: (far_ptr & 0xffff) as u16,
	    segment: (far_ptr >> 16) as u16,
	}
    }

    /// Packs the far pointer back into its firmware representation.
    pub const fn to_u32(&self) -> u32 {
	(self.segment as u32) << 16 | (self.offset as u32)
    }

    /// Converts an linear address into an X86 far pointer
    /// if the linear address is in 20-bit address space.
    pub fn from_linear_addr(linear_addr: usize) -> Option<Self> {
	if linear_addr < (1_usize << 20) {
	    Some(Self {
		offset: (linear_addr as u16) & 0x000f,
		segment: (linear_addr >> 4) as u16,
	    })
	} else {
	    None
	}
    }

    pub const fn is_null(&self) -> bool {
	self.segment == 0 && self.offset == 0
    }

    /// Converts the X86 far pointer into a physical address.
    ///
    /// The sum wraps at the 1MB boundary like real mode without A20.
    pub const fn to_phys(&self) -> PhysAddr {
	let base = (self.segment as u32) << 4;
	PhysAddr::new((base + self.offset as u32) & PhysAddr::REAL_MODE_MASK)
    }

    /// Converts the X86 far pointer into a linear address.
    pub fn to_linear_addr(&self) -> usize {
	self.to_phys().as_usize()
    }
}


impl fmt::Display for X86FarPtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	write!(f, "{:04x}:{:04x}", self.segment, self.offset)
    }
}
