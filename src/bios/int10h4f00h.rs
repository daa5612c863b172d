/*!

BIOS INT 10h AX=4F00h : Return VBE Controller Information

# Resource

* [VESA BIOS Extension Core Function Standard Version 3.0](http://www.petesqbsite.com/sections/tutorials/tuts/vbe3.pdf) (VESA, 1998-09-16)

# Supplementary Resources

* [VESA Video Modes](https://wiki.osdev.org/VESA_Video_Modes) (OS Dev)
* [Display Industry Standards Archive](https://glenwing.github.io/docs/) (Glen Wing)

 */

use bitflags::bitflags;

use super::{LmbiosRegs, RawReplyBlock, RealModeBridge, VbeVersion};
use crate::bits;
use crate::error::VbeError;
use crate::field_group::FieldGroup;
use crate::x86::X86FarPtr;


/// AL=00h
pub const SERVICE: u8 = 0x00;

/// Signature of a valid reply.
pub const VESA_SIGNATURE: [u8; 4] = *b"VESA";

/// Signature written before the call to request VBE 2.0+ information.
pub const VBE2_SIGNATURE: [u8; 4] = *b"VBE2";


// VbeInfoBlock layout
const SIGNATURE: usize = 0x00;		//00-03: VBE Signature
const VERSION: usize = 0x04;		//04-05: VBE Version
const OEM_STRING_PTR: usize = 0x06;	//06-09: OEM String (far ptr)
const CAPABILITIES: usize = 0x0a;	//0A-0D: Capabilities of gra ctrl
const VIDEO_MODE_PTR: usize = 0x0e;	//0E-11: Video Mode List (far ptr)
const TOTAL_MEMORY: usize = 0x12;	//12-13: Number of 64KB memory blocks
// Added for VBE 2.0+
const OEM_SOFTWARE_REV: usize = 0x14;	//14-15: VBE impl Software Revision
const OEM_VENDOR_NAME_PTR: usize = 0x16;//16-19: Vender Name String (far ptr)
const OEM_PRODUCT_NAME_PTR: usize = 0x1a;//1A-1D: Product Name String
const OEM_PRODUCT_REV_PTR: usize = 0x1e;//1E-21: Product Rev String
//22-FF: (reserved), 100-1FF: Data Area for OEM Strings


/// Bit indexes of the capabilities field.
pub const DAC: u32 = 0;
pub const VGA: u32 = 1;
pub const RAMDAC: u32 = 2;

bitflags! {
    /// Capabilities of the graphics controller.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Capabilities: u32 {
	/// DAC width is switchable to 8 bits per primary color.
	const DAC_SWITCHABLE = 1 << DAC;
	/// Controller is not VGA compatible.
	const NOT_VGA_COMPATIBLE = 1 << VGA;
	/// RAMDAC requires the blank bit in function 09h.
	const RAMDAC_BLANK = 1 << RAMDAC;
	/// Hardware stereoscopic signaling supported.
	const HW_STEREO = 1 << 3;
	/// Stereo signaling via the VESA EVC connector.
	const STEREO_EVC = 1 << 4;
    }
}

impl Capabilities {
    pub fn dac_switchable(&self) -> bool {
	bits::bit(self.bits(), DAC) != 0
    }

    pub fn vga_compatible(&self) -> bool {
	bits::bit(self.bits(), VGA) == 0
    }

    pub fn ramdac_blank(&self) -> bool {
	bits::bit(self.bits(), RAMDAC) != 0
    }
}


/// Fields added by VBE 2.0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OemExtension {
    pub software_rev: u16,
    pub vendor_name_ptr: X86FarPtr,
    pub product_name_ptr: X86FarPtr,
    pub product_rev_ptr: X86FarPtr,
}


/// Decoded VBE Controller Information
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerInfo {
    pub signature: [u8; 4],
    pub version: VbeVersion,
    pub oem_string_ptr: X86FarPtr,
    pub capabilities: Capabilities,
    pub video_mode_ptr: X86FarPtr,
    /// Number of 64KB memory blocks.
    pub total_memory: u16,
    pub oem_extension: FieldGroup<OemExtension>,
}

impl ControllerInfo {
    /// Decodes a VbeInfoBlock.
    ///
    /// Nothing past the signature is looked at unless it reads "VESA".
    pub fn decode(block: &RawReplyBlock) -> Result<Self, VbeError> {
	let signature = block.array_at::<4>(SIGNATURE);
	if signature != VESA_SIGNATURE {
	    return Err(VbeError::InvalidResponse { signature });
	}

	let version = VbeVersion::from_word(block.u16_at(VERSION));

	let oem_extension = FieldGroup::gated(version, VbeVersion::V2_0, || {
	    OemExtension {
		software_rev: block.u16_at(OEM_SOFTWARE_REV),
		vendor_name_ptr:
		    X86FarPtr::from_u32(block.u32_at(OEM_VENDOR_NAME_PTR)),
		product_name_ptr:
		    X86FarPtr::from_u32(block.u32_at(OEM_PRODUCT_NAME_PTR)),
		product_rev_ptr:
		    X86FarPtr::from_u32(block.u32_at(OEM_PRODUCT_REV_PTR)),
	    }
	});

	Ok(Self {
	    signature,
	    version,
	    oem_string_ptr: X86FarPtr::from_u32(block.u32_at(OEM_STRING_PTR)),
	    capabilities:
		Capabilities::from_bits_retain(block.u32_at(CAPABILITIES)),
	    video_mode_ptr: X86FarPtr::from_u32(block.u32_at(VIDEO_MODE_PTR)),
	    total_memory: block.u16_at(TOTAL_MEMORY),
	    oem_extension,
	})
    }

    /// Total video memory in bytes.
    pub fn total_memory_bytes(&self) -> u32 {
	(self.total_memory as u32) << 16
    }
}


/// Calls BIOS INT 10h AX=4F00h (Return VBE Controller Information).
///
/// With `request_vbe2` the signature is pre-set to "VBE2" so that VBE 2.0+
/// firmware fills in the extended fields.
pub fn call<B>(bridge: &mut B, request_vbe2: bool)
	       -> Result<ControllerInfo, VbeError>
where
    B: RealModeBridge,
{
    let mut reply = RawReplyBlock::zeroed();
    if request_vbe2 {
	reply.put_bytes(SIGNATURE, &VBE2_SIGNATURE);
    }

    // INT 10h AH=4Fh AL=00h
    // IN
    //   ES:DI = Address of VbeInfoBlock
    // OUT
    //   AX    = Status
    let mut regs = LmbiosRegs::vbe(SERVICE);

    log::trace!("IN:  EAX={:#x}", regs.eax);

    bridge.invoke(&mut regs, &mut reply)?;

    log::trace!("OUT: EAX={:#x}", regs.eax);

    regs.vbe_status()?;

    let info = ControllerInfo::decode(&reply)?;

    log::debug!("VBE {} controller, {} KB, modes at {}",
		info.version, info.total_memory_bytes() >> 10,
		info.video_mode_ptr);

    Ok(info)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_group::Absence;

    fn vesa_block(version: u16) -> RawReplyBlock {
	let mut block = RawReplyBlock::zeroed();
	block.put_bytes(SIGNATURE, b"VESA");
	block.put_u16(VERSION, version);
	block.put_u32(OEM_STRING_PTR, 0xc000_7e00);
	block.put_u32(CAPABILITIES, 0x0000_0001);
	block.put_u32(VIDEO_MODE_PTR, 0x0000_0522);
	block.put_u16(TOTAL_MEMORY, 0x0100);
	block.put_u16(OEM_SOFTWARE_REV, 0x0203);
	block.put_u32(OEM_VENDOR_NAME_PTR, 0xc000_7e10);
	block.put_u32(OEM_PRODUCT_NAME_PTR, 0xc000_7e20);
	block.put_u32(OEM_PRODUCT_REV_PTR, 0xc000_7e30);
	block
    }

    #[test]
    fn decodes_fields_verbatim() {
	let info = ControllerInfo::decode(&vesa_block(0x0300)).unwrap();

	assert_eq!(info.signature, *b"VESA");
	assert_eq!(info.version, VbeVersion::V3_0);
	assert_eq!(info.oem_string_ptr.to_u32(), 0xc000_7e00);
	assert_eq!(info.video_mode_ptr.to_u32(), 0x0000_0522);
	assert_eq!(info.total_memory, 0x0100);
	assert_eq!(info.total_memory_bytes(), 16 << 20);
	assert!(info.capabilities.dac_switchable());
	assert!(info.capabilities.vga_compatible());
	assert!(!info.capabilities.ramdac_blank());

	let ext = info.oem_extension.present().unwrap();
	assert_eq!(ext.software_rev, 0x0203);
	assert_eq!(ext.vendor_name_ptr.to_u32(), 0xc000_7e10);
	assert_eq!(ext.product_name_ptr.to_u32(), 0xc000_7e20);
	assert_eq!(ext.product_rev_ptr.to_u32(), 0xc000_7e30);
    }

    #[test]
    fn oem_extension_needs_vbe2() {
	let info = ControllerInfo::decode(&vesa_block(0x0102)).unwrap();
	assert_eq!(info.version, VbeVersion::V1_2);
	assert_eq!(info.oem_extension,
		   FieldGroup::Absent(
		       Absence::RevisionGap { required: VbeVersion::V2_0 }));
    }

    #[test]
    fn rejects_wrong_signature() {
	let mut block = vesa_block(0x0200);
	block.put_bytes(SIGNATURE, b"VBE2");
	assert_eq!(ControllerInfo::decode(&block),
		   Err(VbeError::InvalidResponse { signature: *b"VBE2" }));

	assert_eq!(ControllerInfo::decode(&RawReplyBlock::zeroed()),
		   Err(VbeError::InvalidResponse { signature: [0; 4] }));
    }

    #[test]
    fn unknown_capability_bits_are_kept() {
	let mut block = vesa_block(0x0200);
	block.put_u32(CAPABILITIES, 0x8000_0002);
	let info = ControllerInfo::decode(&block).unwrap();
	assert_eq!(info.capabilities.bits(), 0x8000_0002);
	assert!(!info.capabilities.vga_compatible());
    }
}
