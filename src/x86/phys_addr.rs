use core::fmt;

use super::X86FarPtr;


/// Physical address resolved from a firmware pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhysAddr(u32);

impl PhysAddr {
    /// Addresses reachable from real mode (20 bits).
    pub const REAL_MODE_MASK: u32 = 0x000f_ffff;

    pub const fn new(addr: u32) -> Self {
	Self(addr)
    }

    /// Resolves a segment:offset far pointer as stored by the firmware.
    pub const fn resolve(far_ptr: u32) -> Self {
	X86FarPtr::from_u32(far_ptr).to_phys()
    }

    /// Takes a flat 32-bit physical address verbatim (e.g. PhysBasePtr).
    pub const fn flat(addr: u32) -> Self {
	Self(addr)
    }

    pub const fn as_u32(&self) -> u32 {
	self.0
    }

    pub const fn as_usize(&self) -> usize {
	self.0 as usize
    }

    /// Returns the address `count` bytes further, or None on overflow.
    pub const fn checked_add(&self, count: u32) -> Option<Self> {
	match self.0.checked_add(count) {
	    Some(addr) => Some(Self(addr)),
	    None => None,
	}
    }
}

impl fmt::Display for PhysAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	write!(f, "{:#x}", self.0)
    }
}

impl fmt::LowerHex for PhysAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	fmt::LowerHex::fmt(&self.0, f)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_pure() {
	let first = PhysAddr::resolve(0xa000_0000);
	let second = PhysAddr::resolve(0xa000_0000);
	assert_eq!(first, second);
	assert_eq!(first, PhysAddr::new(0xa_0000));
	assert_eq!(PhysAddr::resolve(0x0000_ffff), PhysAddr::new(0xffff));
    }

    #[test]
    fn flat_is_verbatim() {
	assert_eq!(PhysAddr::flat(0xfd00_0000).as_u32(), 0xfd00_0000);
    }

    #[test]
    fn checked_add_stops_at_overflow() {
	assert_eq!(PhysAddr::new(0x500).checked_add(2),
		   Some(PhysAddr::new(0x502)));
	assert_eq!(PhysAddr::new(u32::MAX).checked_add(1), None);
    }
}
