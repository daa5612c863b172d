/*!

Human-readable reports of decoded VBE structures.

Absent field groups are printed with their [`Absence`] label, so a
group the firmware did not define never shows up as zeros.

 */

use alloc::string::String;
use core::fmt::{self, Write};

use crate::bios::int10h4f00h::{self, Capabilities, ControllerInfo};
use crate::bios::int10h4f01h::{ColorChannels, Geometry, ModeAttributes,
			       ModeDescriptor, Window};
use crate::bits;
use crate::field_group::{Absence, FieldGroup};
use crate::query_vbe::{ModeList, OemStrings, VbeInfo, VbeString};


/// Controller report, optionally with the mode list and OEM strings.
pub struct ControllerReport<'a> {
    pub info: &'a ControllerInfo,
    pub mode_list: Option<&'a ModeList>,
    pub oem: Option<&'a OemStrings>,
}

impl<'a> ControllerReport<'a> {
    pub fn new(info: &'a ControllerInfo) -> Self {
	Self {
	    info,
	    mode_list: None,
	    oem: None,
	}
    }

    pub fn from_vbe_info(vbe_info: &'a VbeInfo) -> Self {
	Self {
	    info: &vbe_info.controller,
	    mode_list: Some(&vbe_info.mode_list),
	    oem: Some(&vbe_info.oem),
	}
    }

    fn fmt_capabilities(f: &mut fmt::Formatter<'_>, caps: Capabilities)
			-> fmt::Result {
	write!(f, "  Capabilities: {:#x}", caps.bits())?;

	// Bit 0 : The Width of Digital-to-Analog Converter
	if bits::bit(caps.bits(), int10h4f00h::DAC) != 0 {
	    write!(f, ", DAC width = 6 or 8 bits")?;
	} else {
	    write!(f, ", DAC width = 6 bits")?;
	}

	// Bit 1 : VGA Compatibility
	if bits::bit(caps.bits(), int10h4f00h::VGA) != 0 {
	    write!(f, ", not VGA compatible")?;
	} else {
	    write!(f, ", VGA compatible")?;
	}

	// Bit 2 : RAMDAC operation
	if bits::bit(caps.bits(), int10h4f00h::RAMDAC) != 0 {
	    write!(f, ", special RAMDAC operation")?;
	} else {
	    write!(f, ", normal RAMDAC operation")?;
	}

	if caps.contains(Capabilities::HW_STEREO) {
	    write!(f, ", hardware stereoscopic signaling")?;
	    if caps.contains(Capabilities::STEREO_EVC) {
		write!(f, " via VESA EVC connector")?;
	    } else {
		write!(f, " via external VESA stereo connector")?;
	    }
	}

	writeln!(f)
    }

    fn fmt_string(f: &mut fmt::Formatter<'_>, title: &str,
		  string: Option<&VbeString>) -> fmt::Result {
	match string {
	    Some(string) => writeln!(f, "  {}: {}", title, string),
	    None => writeln!(f, "  {}: not available", title),
	}
    }
}

impl fmt::Display for ControllerReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	let info = self.info;

	writeln!(f, "VbeInfoBlock:")?;
	write!(f, "  Signature: ")?;
	for byte in &info.signature {
	    write!(f, "{}", *byte as char)?;
	}
	writeln!(f)?;
	writeln!(f, "  Version: {}", info.version)?;
	Self::fmt_capabilities(f, info.capabilities)?;

	write!(f, "  Mode List: {}", info.video_mode_ptr)?;
	match self.mode_list {
	    Some(list) => {
		for mode in &list.modes {
		    write!(f, " {:04x}", mode)?;
		}
		if !list.terminated {
		    write!(f, " ... (unterminated)")?;
		}
		writeln!(f)?;
	    },
	    None => writeln!(f, " (not read)")?,
	}

	writeln!(f, "  Total Memory: {} KB ({} x 64KB)",
		 info.total_memory_bytes() >> 10, info.total_memory)?;

	if let Some(oem) = self.oem {
	    Self::fmt_string(f, "OEM String", oem.oem_string.as_ref())?;
	} else {
	    writeln!(f, "  OEM String: {}", info.oem_string_ptr)?;
	}

	match &info.oem_extension {
	    FieldGroup::Present(ext) => {
		writeln!(f, "  OEM Software Revision: {:#x}",
			 ext.software_rev)?;
		if let Some(oem) = self.oem {
		    Self::fmt_string(f, "OEM Vendor Name",
				     oem.vendor_name.as_ref())?;
		    Self::fmt_string(f, "OEM Product Name",
				     oem.product_name.as_ref())?;
		    Self::fmt_string(f, "OEM Product Revision",
				     oem.product_rev.as_ref())?;
		} else {
		    writeln!(f, "  OEM Vendor Name: {}", ext.vendor_name_ptr)?;
		    writeln!(f, "  OEM Product Name: {}",
			     ext.product_name_ptr)?;
		    writeln!(f, "  OEM Product Revision: {}",
			     ext.product_rev_ptr)?;
		}
	    },
	    FieldGroup::Absent(absence) =>
		writeln!(f, "  OEM Extension: {}", absence)?,
	}

	Ok(())
    }
}


/// Mode descriptor report.
pub struct ModeReport<'a>(pub &'a ModeDescriptor);

impl ModeReport<'_> {
    fn fmt_attributes(f: &mut fmt::Formatter<'_>, attrs: ModeAttributes)
		      -> fmt::Result {
	const NAMES: [(ModeAttributes, &str); 13] = [
	    (ModeAttributes::SUPPORTED, "Supported"),
	    (ModeAttributes::EXTENDED_INFO, "Extended Information"),
	    (ModeAttributes::TTY_OUTPUT, "TTY Output"),
	    (ModeAttributes::COLOR, "Color"),
	    (ModeAttributes::GRAPHICS, "Graphics"),
	    (ModeAttributes::NOT_VGA_COMPATIBLE, "Not VGA Compatible"),
	    (ModeAttributes::NO_VGA_WINDOWED, "No Windowed Memory"),
	    (ModeAttributes::LINEAR_FRAME_BUFFER, "Linear Frame Buffer"),
	    (ModeAttributes::DOUBLE_SCAN, "Double Scan"),
	    (ModeAttributes::INTERLACED, "Interlaced"),
	    (ModeAttributes::TRIPLE_BUFFER, "Triple Buffering"),
	    (ModeAttributes::STEREOSCOPIC, "Stereoscopic"),
	    (ModeAttributes::DUAL_DISPLAY_START, "Dual Display Start Address"),
	];

	write!(f, "  Attributes: {:#x}", attrs.bits())?;
	for (flag, name) in NAMES {
	    if attrs.contains(flag) {
		write!(f, ", {}", name)?;
	    }
	}
	writeln!(f)
    }

    fn fmt_window(f: &mut fmt::Formatter<'_>, title: &str, window: &Window)
		  -> fmt::Result {
	writeln!(f, "  Window {}: attributes={:#x}, segment={:#x}",
		 title, window.attributes.bits(), window.segment)
    }

    fn fmt_channels(f: &mut fmt::Formatter<'_>, channels: &ColorChannels)
		    -> fmt::Result {
	for (name, channel) in [("R", &channels.red),
				("G", &channels.green),
				("B", &channels.blue),
				("X", &channels.reserved)] {
	    write!(f, " {}={}@{} ({:#010x})",
		   name, channel.size, channel.position, channel.mask())?;
	}
	Ok(())
    }

    fn fmt_absent(f: &mut fmt::Formatter<'_>, title: &str, absence: &Absence)
		  -> fmt::Result {
	writeln!(f, "  {}: {}", title, absence)
    }
}

impl fmt::Display for ModeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	let desc = self.0;

	writeln!(f, "ModeInfoBlock {:#06x} (VBE {}):", desc.mode, desc.revision)?;
	Self::fmt_attributes(f, desc.attributes)?;
	Self::fmt_window(f, "A", &desc.window_a)?;
	Self::fmt_window(f, "B", &desc.window_b)?;
	writeln!(f, "  Window Granularity: {} KB, Size: {} KB, Function: {}",
		 desc.win_granularity, desc.win_size, desc.win_func_ptr)?;
	writeln!(f, "  Bytes per Scan Line: {}", desc.bytes_per_scan_line)?;

	match &desc.geometry {
	    FieldGroup::Present(g) => {
		writeln!(f, "  Resolution: {}x{}, bpp={}",
			 g.x_resolution, g.y_resolution, g.bits_per_pixel)?;
		writeln!(f, "  Memory Model: {} = {}", g.memory_model,
			 Geometry::memory_model_name(g.memory_model))?;
		writeln!(f, "  Char Cell: {}x{}, Planes: {}, \
			     Banks: {} x {} KB, Image Pages: {}",
			 g.x_char_size, g.y_char_size, g.number_of_planes,
			 g.number_of_banks, g.bank_size,
			 g.number_of_image_pages)?;
	    },
	    FieldGroup::Absent(absence) =>
		Self::fmt_absent(f, "Resolution", absence)?,
	}

	match &desc.direct_color {
	    FieldGroup::Present(dc) => {
		write!(f, "  Direct Color:")?;
		Self::fmt_channels(f, &dc.channels)?;
		writeln!(f, ", attributes={:#x}", dc.attributes.bits())?;
	    },
	    FieldGroup::Absent(absence) =>
		Self::fmt_absent(f, "Direct Color", absence)?,
	}

	match &desc.framebuffer {
	    FieldGroup::Present(addr) =>
		writeln!(f, "  Frame Buffer Address: {}", addr)?,
	    FieldGroup::Absent(absence) =>
		Self::fmt_absent(f, "Frame Buffer Address", absence)?,
	}

	match &desc.linear {
	    FieldGroup::Present(lin) => {
		writeln!(f, "  Linear: Bytes per Scan Line: {}, \
			     Image Pages: banked={} linear={}",
			 lin.bytes_per_scan_line,
			 lin.bnk_number_of_image_pages,
			 lin.lin_number_of_image_pages)?;
		write!(f, "  Linear Color:")?;
		Self::fmt_channels(f, &lin.channels)?;
		writeln!(f)?;
		writeln!(f, "  Max Pixel Clock: {} Hz", lin.max_pixel_clock)?;
	    },
	    FieldGroup::Absent(absence) =>
		Self::fmt_absent(f, "Linear", absence)?,
	}

	Ok(())
    }
}


/// Renders `desc` as text.
pub fn format_report(desc: &ModeDescriptor) -> String {
    let mut text = String::new();
    // Writing into a String cannot fail.
    let _ = write!(text, "{}", ModeReport(desc));
    text
}

/// Renders controller information, mode list, and OEM strings as text.
pub fn format_controller_report(vbe_info: &VbeInfo) -> String {
    let mut text = String::new();
    let _ = write!(text, "{}", ControllerReport::from_vbe_info(vbe_info));
    text
}
