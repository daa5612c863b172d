//
// FieldGroup - Optional, revision-gated groups of decoded fields
//

use core::fmt;

use crate::bios::VbeVersion;


/// Why a field group carries no data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Absence {
    /// The group was introduced in `required`, newer than the firmware.
    RevisionGap { required: VbeVersion },
    /// Color masks are defined for direct color (6) and YUV (7) only.
    NotDirectColor { memory_model: u8 },
    /// Mode attribute bit 7 is clear.
    NoLinearFrameBuffer,
}

impl fmt::Display for Absence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	match self {
	    Self::RevisionGap { required } =>
		write!(f, "not available for this revision (VBE {}+)",
		       required),
	    Self::NotDirectColor { memory_model } =>
		write!(f, "not available for memory model {}", memory_model),
	    Self::NoLinearFrameBuffer =>
		write!(f, "not available (no linear frame buffer)"),
	}
    }
}


/// A group of fields that is either decoded or explicitly absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldGroup<T> {
    Present(T),
    Absent(Absence),
}

impl<T> FieldGroup<T> {
    /// Decodes the group with `decode` only if `version` supports it.
    pub fn gated<F>(version: VbeVersion, required: VbeVersion, decode: F)
		    -> Self
    where
	F: FnOnce() -> T,
    {
	if version.supports(required) {
	    Self::Present(decode())
	} else {
	    Self::Absent(Absence::RevisionGap { required })
	}
    }

    pub fn is_present(&self) -> bool {
	matches!(self, Self::Present(_))
    }

    pub fn present(&self) -> Option<&T> {
	match self {
	    Self::Present(value) => Some(value),
	    Self::Absent(_) => None,
	}
    }

    pub fn absence(&self) -> Option<Absence> {
	match self {
	    Self::Present(_) => None,
	    Self::Absent(absence) => Some(*absence),
	}
    }

    pub fn map<U, F>(self, f: F) -> FieldGroup<U>
    where
	F: FnOnce(T) -> U,
    {
	match self {
	    Self::Present(value) => FieldGroup::Present(f(value)),
	    Self::Absent(absence) => FieldGroup::Absent(absence),
	}
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gated_skips_decoder_for_old_revisions() {
	let group: FieldGroup<u8> = FieldGroup::gated(
	    VbeVersion::V1_1, VbeVersion::V1_2, || panic!("decoded"));
	assert_eq!(group.absence(),
		   Some(Absence::RevisionGap { required: VbeVersion::V1_2 }));

	let group = FieldGroup::gated(
	    VbeVersion::V1_2, VbeVersion::V1_2, || 42_u8);
	assert_eq!(group.present(), Some(&42));
	assert_eq!(group.map(|v| v as u16 * 2), FieldGroup::Present(84_u16));
    }

    #[test]
    fn absence_labels() {
	let gap = Absence::RevisionGap { required: VbeVersion::V3_0 };
	assert_eq!(format!("{}", gap),
		   "not available for this revision (VBE 3.0+)");
	assert_eq!(format!("{}", Absence::NotDirectColor { memory_model: 4 }),
		   "not available for memory model 4");
    }
}
