use core::fmt;


/// VBE revision as reported in VbeInfoBlock.VbeVersion.
///
/// The word is BCD-like: high byte major, low byte minor
/// (0x0102 = 1.2, 0x0300 = 3.0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VbeVersion {
    pub major: u8,
    pub minor: u8,
}

impl VbeVersion {
    pub const V1_0: Self = Self::new(1, 0);
    pub const V1_1: Self = Self::new(1, 1);
    pub const V1_2: Self = Self::new(1, 2);
    pub const V2_0: Self = Self::new(2, 0);
    pub const V3_0: Self = Self::new(3, 0);

    pub const fn new(major: u8, minor: u8) -> Self {
	Self { major, minor }
    }

    pub const fn from_word(word: u16) -> Self {
	Self {
	    major: (word >> 8) as u8,
	    minor: (word & 0xff) as u8,
	}
    }

    pub const fn to_word(&self) -> u16 {
	(self.major as u16) << 8 | self.minor as u16
    }

    /// Returns true if fields introduced in `required` are defined.
    pub fn supports(&self, required: VbeVersion) -> bool {
	*self >= required
    }
}

impl fmt::Display for VbeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	write!(f, "{:x}.{:x}", self.major, self.minor)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_version_word() {
	assert_eq!(VbeVersion::from_word(0x0200), VbeVersion::V2_0);
	assert_eq!(VbeVersion::from_word(0x0102), VbeVersion::V1_2);
	assert_eq!(VbeVersion::from_word(0x0300).to_word(), 0x0300);
    }

    #[test]
    fn orders_by_major_then_minor() {
	assert!(VbeVersion::V1_1 < VbeVersion::V1_2);
	assert!(VbeVersion::V1_2 < VbeVersion::V2_0);
	assert!(VbeVersion::new(2, 1) < VbeVersion::V3_0);
	assert!(VbeVersion::V3_0.supports(VbeVersion::V2_0));
	assert!(!VbeVersion::V1_1.supports(VbeVersion::V1_2));
    }

    #[test]
    fn displays_major_dot_minor() {
	assert_eq!(format!("{}", VbeVersion::V2_0), "2.0");
	assert_eq!(format!("{}", VbeVersion::from_word(0x0102)), "1.2");
    }
}
