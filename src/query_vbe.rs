//
// Query VESA BIOS Extentions using BIOS INT 10h AX=4Fxxh
//

use alloc::vec::Vec;
use core::fmt;

use spin::Mutex;

use crate::bios::{self, ControllerInfo, ModeDescriptor, RealModeBridge,
		  VbeVersion};
use crate::bios::vbe_modes::VIDEO_MODE_LIST_END;
use crate::error::{BridgeFault, VbeError};
use crate::field_group::FieldGroup;
use crate::x86::X86FarPtr;


/// Tunables for VBE queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VbeConfig {
    /// Pre-set the signature to "VBE2" to get VBE 2.0+ fields.
    pub request_vbe2: bool,
    /// Stop reading an unterminated mode list after this many entries.
    pub max_modes: usize,
    /// Stop reading an unterminated OEM string after this many bytes.
    pub max_string_len: usize,
}

impl Default for VbeConfig {
    fn default() -> Self {
	Self {
	    request_vbe2: true,
	    max_modes: 256,
	    max_string_len: 256,
	}
    }
}


/// VESA BIOS Extensions, queried through a real-mode bridge.
///
/// The bridge is locked from the interrupt until the reply is fully
/// decoded, since every call overwrites the scratch region.
pub struct Vbe<B> {
    bridge: Mutex<B>,
    config: VbeConfig,
}

impl<B> Vbe<B>
where
    B: RealModeBridge,
{
    pub fn new(bridge: B) -> Self {
	Self::with_config(bridge, VbeConfig::default())
    }

    pub fn with_config(bridge: B, config: VbeConfig) -> Self {
	Self {
	    bridge: Mutex::new(bridge),
	    config,
	}
    }

    pub fn config(&self) -> &VbeConfig {
	&self.config
    }

    pub fn into_inner(self) -> B {
	self.bridge.into_inner()
    }

    /// Returns VBE controller information, the supported mode list, and
    /// the OEM strings.
    pub fn controller_info(&self) -> Result<VbeInfo, VbeError> {
	let mut bridge = self.bridge.lock();

	let controller =
	    bios::int10h4f00h::call(&mut *bridge, self.config.request_vbe2)?;

	// The mode list and strings may live in the scratch region itself,
	// so they are read before the lock is released.
	let mode_list = ModeList::read(&mut *bridge, controller.video_mode_ptr,
				       self.config.max_modes)?;

	let max_len = self.config.max_string_len;
	let mut oem = OemStrings {
	    oem_string: VbeString::read_opt(&mut *bridge,
					    controller.oem_string_ptr,
					    max_len),
	    ..Default::default()
	};
	if let FieldGroup::Present(ext) = &controller.oem_extension {
	    oem.vendor_name =
		VbeString::read_opt(&mut *bridge, ext.vendor_name_ptr, max_len);
	    oem.product_name =
		VbeString::read_opt(&mut *bridge, ext.product_name_ptr, max_len);
	    oem.product_rev =
		VbeString::read_opt(&mut *bridge, ext.product_rev_ptr, max_len);
	}

	Ok(VbeInfo {
	    controller,
	    mode_list,
	    oem,
	})
    }

    /// Returns information on `mode`, trusting only the field groups
    /// defined by `version`.
    pub fn mode_info(&self, mode: u16, version: VbeVersion)
		     -> Result<ModeDescriptor, VbeError> {
	let mut bridge = self.bridge.lock();
	bios::int10h4f01h::call(&mut *bridge, mode, version)
    }
}


/// Controller information plus what its far pointers lead to.
#[derive(Clone, Debug)]
pub struct VbeInfo {
    pub controller: ControllerInfo,
    pub mode_list: ModeList,
    pub oem: OemStrings,
}

impl VbeInfo {
    pub fn version(&self) -> VbeVersion {
	self.controller.version
    }

    pub fn modes(&self) -> &[u16] {
	&self.mode_list.modes
    }
}


/// Supported mode numbers read from VbeInfoBlock.VideoModePtr.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModeList {
    pub ptr: X86FarPtr,
    pub modes: Vec<u16>,
    /// False if the list was cut at `max_modes` without reaching 0xFFFF.
    pub terminated: bool,
}

impl ModeList {
    pub fn read<B>(bridge: &mut B, ptr: X86FarPtr, max_modes: usize)
		   -> Result<Self, BridgeFault>
    where
	B: RealModeBridge,
    {
	let mut list = Self {
	    ptr,
	    modes: Vec::new(),
	    terminated: false,
	};

	if ptr.is_null() {
	    log::warn!("VideoModePtr is null");
	    list.terminated = true;
	    return Ok(list);
	}

	let mut addr = ptr.to_phys();
	while list.modes.len() < max_modes {
	    let mode = bridge.read_u16(addr)?;
	    if mode == VIDEO_MODE_LIST_END {
		list.terminated = true;
		return Ok(list);
	    }
	    list.modes.push(mode);

	    match addr.checked_add(2) {
		Some(next) => addr = next,
		None => break,
	    }
	}

	log::warn!("mode list at {} not terminated after {} modes",
		   ptr, list.modes.len());
	Ok(list)
    }
}


/// OEM strings; each is None if its pointer is null or unreadable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OemStrings {
    pub oem_string: Option<VbeString>,
    pub vendor_name: Option<VbeString>,
    pub product_name: Option<VbeString>,
    pub product_rev: Option<VbeString>,
}


/// A NUL-terminated string in real-mode memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VbeString {
    pub ptr: X86FarPtr,
    pub string: Vec<u8>,
}

impl VbeString {
    pub fn read<B>(bridge: &mut B, ptr: X86FarPtr, max_len: usize)
		   -> Result<Self, BridgeFault>
    where
	B: RealModeBridge,
    {
	let mut string = Vec::new();
	let mut addr = ptr.to_phys();

	while string.len() < max_len {
	    let mut ch = [0_u8; 1];
	    bridge.read_real_mode(addr, &mut ch)?;
	    if ch[0] == 0 {
		break;
	    }
	    string.push(ch[0]);

	    match addr.checked_add(1) {
		Some(next) => addr = next,
		None => break,
	    }
	}

	Ok(Self { ptr, string })
    }

    // OEM strings are informational; a bad pointer is not worth failing
    // the whole query for.
    fn read_opt<B>(bridge: &mut B, ptr: X86FarPtr, max_len: usize)
		   -> Option<Self>
    where
	B: RealModeBridge,
    {
	if ptr.is_null() {
	    return None;
	}

	match Self::read(bridge, ptr, max_len) {
	    Ok(string) => Some(string),
	    Err(fault) => {
		log::warn!("OEM string at {}: {}", ptr, fault);
		None
	    },
	}
    }
}

impl fmt::Display for VbeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	write!(f, "{} \"", self.ptr)?;

	for byte in &self.string {
	    let ch =
		match *byte {
		    0x20 ..= 0x7e => *byte,
		    _ => b'.'
		};
	    write!(f, "{}", ch as char)?;
	}

	write!(f, "\"")
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::bios::{RawReplyBlock, ScriptedBridge, ScriptedReply};
    use crate::x86::PhysAddr;

    #[test]
    fn mode_list_stops_at_terminator() {
	let mut bridge = ScriptedBridge::new();
	bridge.map_mode_list(PhysAddr::new(0xc_0100), &[0x101, 0x103, 0x105]);

	let list = ModeList::read(&mut bridge, X86FarPtr::from_u32(0xc000_0100),
				  16).unwrap();
	assert_eq!(list.modes, [0x101, 0x103, 0x105]);
	assert!(list.terminated);
    }

    #[test]
    fn mode_list_is_capped() {
	let mut bridge = ScriptedBridge::new();
	bridge.map_mode_list(PhysAddr::new(0xc_0100), &[0x101, 0x103, 0x105]);

	let list = ModeList::read(&mut bridge, X86FarPtr::from_u32(0xc000_0100),
				  2).unwrap();
	assert_eq!(list.modes, [0x101, 0x103]);
	assert!(!list.terminated);
    }

    #[test]
    fn mode_list_read_fault_propagates() {
	let mut bridge = ScriptedBridge::new();
	assert_eq!(ModeList::read(&mut bridge,
				  X86FarPtr::from_u32(0xc000_0100), 16),
		   Err(BridgeFault::Unmapped { addr: 0xc_0100, len: 2 }));
    }

    #[test]
    fn strings_are_read_up_to_nul() {
	let mut bridge = ScriptedBridge::new();
	bridge.map(PhysAddr::new(0xc_7e00), b"Bochs\x01VBE\0tail");

	let string = VbeString::read(&mut bridge,
				     X86FarPtr::from_u32(0xc000_7e00),
				     64).unwrap();
	assert_eq!(string.string, b"Bochs\x01VBE");
	assert_eq!(format!("{}", string), "c000:7e00 \"Bochs.VBE\"");

	let string = VbeString::read(&mut bridge,
				     X86FarPtr::from_u32(0xc000_7e00),
				     3).unwrap();
	assert_eq!(string.string, b"Boc");
    }

    #[test]
    fn mode_info_passes_mode_in_cx() {
	let mut block = RawReplyBlock::zeroed();
	block.put_u16(0x00, 0x0001);

	let mut bridge = ScriptedBridge::new();
	bridge.push_reply(ScriptedReply::ok(block));

	let vbe = Vbe::new(bridge);
	let desc = vbe.mode_info(0x4118, VbeVersion::V1_0).unwrap();
	assert_eq!(desc.mode, 0x4118);

	let bridge = vbe.into_inner();
	assert_eq!(bridge.calls()[0].regs.eax, 0x4f01);
	assert_eq!(bridge.calls()[0].regs.ecx, 0x4118);
    }
}
