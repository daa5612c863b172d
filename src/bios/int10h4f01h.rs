/*!

BIOS INT 10h AX=4F01h : Return VBE Mode Information

# Resource

* [VESA BIOS Extension Core Function Standard Version 3.0](http://www.petesqbsite.com/sections/tutorials/tuts/vbe3.pdf) (VESA, 1998-09-16)

# Supplementary Resources

* [VESA Video Modes](https://wiki.osdev.org/VESA_Video_Modes) (OS Dev)
* [Display Industry Standards Archive](https://glenwing.github.io/docs/) (Glen Wing)

The reply is decoded field by field from the raw block. Which groups of
fields are trusted depends on the VBE version reported by the
controller, the memory model, and the mode attributes; every group that
is not trusted is surfaced as [`FieldGroup::Absent`].

 */

use bitflags::bitflags;

use super::{LmbiosRegs, RawReplyBlock, RealModeBridge, VbeVersion};
use crate::bits;
use crate::error::VbeError;
use crate::field_group::{Absence, FieldGroup};
use crate::x86::{PhysAddr, X86FarPtr};


/// AL=01h
pub const SERVICE: u8 = 0x01;


// ModeInfoBlock layout
// Mandatory information for all VBE revisions
const MODE_ATTRIBUTES: usize = 0x00;	//00-01: Mode Attributes
const WIN_A_ATTRIBUTES: usize = 0x02;	//02   : Window A Attributes
const WIN_B_ATTRIBUTES: usize = 0x03;	//03   : Window B Attributes
const WIN_GRANULARITY: usize = 0x04;	//04-05: Window Granularity
const WIN_SIZE: usize = 0x06;		//06-07: Window Size
const WIN_A_SEGMENT: usize = 0x08;	//08-09: Window A Start Segment
const WIN_B_SEGMENT: usize = 0x0a;	//0A-0B: Window B Start Segment
const WIN_FUNC_PTR: usize = 0x0c;	//0C-0F: Pointer to Window Function
const BYTES_PER_SCAN_LINE: usize = 0x10;//10-11: Bytes per Scan Line
const MANDATORY_END: usize = 0x12;

// Mandatory information for VBE 1.2 and above
const X_RESOLUTION: usize = 0x12;	//12-13: Horizontal Resolution
const Y_RESOLUTION: usize = 0x14;	//14-15: Vertical Resolution
const X_CHAR_SIZE: usize = 0x16;	//16   : Character Cell Width
const Y_CHAR_SIZE: usize = 0x17;	//17   : Character Cell Height
const NUMBER_OF_PLANES: usize = 0x18;	//18   : Number of Memory Planes
const BITS_PER_PIXEL: usize = 0x19;	//19   : Bits per Pixel
const NUMBER_OF_BANKS: usize = 0x1a;	//1A   : Number of Banks
const MEMORY_MODEL: usize = 0x1b;	//1B   : Memory Model Type
const BANK_SIZE: usize = 0x1c;		//1C   : Bank Size in KB
const NUMBER_OF_IMAGE_PAGES: usize = 0x1d;//1D : Number of Images
//1E: (reserved for page function)

// Direct Color fields (direct color and YUV memory models)
const RED_MASK_SIZE: usize = 0x1f;	//1F   : Size of Direct Color Red Mask
//20-26: field position / mask size pairs for red, green, blue, rsvd
const DIRECT_COLOR_MODE_INFO: usize = 0x27;//27: Direct Color Mode Attributes

// Mandatory information for VBE 2.0 and above
const PHYS_BASE_PTR: usize = 0x28;	//28-2B: Physical Address for FrameBuf
//2C-31: (reserved)

// Mandatory information for VBE 3.0 and above
const LIN_BYTES_PER_SCAN_LINE: usize = 0x32;//32-33: Bytes per Scan Line
const BNK_NUMBER_OF_IMAGE_PAGES: usize = 0x34;//34: Number of Images (Banked)
const LIN_NUMBER_OF_IMAGE_PAGES: usize = 0x35;//35: Number of Images (Linear)
const LIN_RED_MASK_SIZE: usize = 0x36;	//36   : Size of Direct Color Red Mask
//37-3D: field position / mask size pairs for red, green, blue, rsvd
const MAX_PIXEL_CLOCK: usize = 0x3e;	//3E-41: Maximum Pixel Clock (Hz)
//42-FF: (reserved)


/// Bit of the mode attributes telling a linear frame buffer is available.
pub const LINEAR_FRAME_BUFFER_ATTRIBUTE_BIT: u32 = 7;

bitflags! {
    /// Mode attributes (offset 00h).
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ModeAttributes: u16 {
	const SUPPORTED = 1 << 0;
	/// VBE 1.2+: the optional information is present.
	const EXTENDED_INFO = 1 << 1;
	const TTY_OUTPUT = 1 << 2;
	const COLOR = 1 << 3;
	const GRAPHICS = 1 << 4;
	const NOT_VGA_COMPATIBLE = 1 << 5;
	const NO_VGA_WINDOWED = 1 << 6;
	const LINEAR_FRAME_BUFFER = 1 << LINEAR_FRAME_BUFFER_ATTRIBUTE_BIT;
	const DOUBLE_SCAN = 1 << 8;
	const INTERLACED = 1 << 9;
	const TRIPLE_BUFFER = 1 << 10;
	const STEREOSCOPIC = 1 << 11;
	const DUAL_DISPLAY_START = 1 << 12;
    }
}

bitflags! {
    /// Window A/B attributes (offsets 02h and 03h).
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct WindowAttributes: u8 {
	const RELOCATABLE = 1 << 0;
	const READABLE = 1 << 1;
	const WRITABLE = 1 << 2;
    }
}

bitflags! {
    /// Direct color mode attributes (offset 27h).
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct DirectColorAttributes: u8 {
	const PROGRAMMABLE_RAMP = 1 << 0;
	const RESERVED_USABLE = 1 << 1;
    }
}


/// One banked memory window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub attributes: WindowAttributes,
    pub segment: u16,
}


/// VBE 1.2+ resolution and pixel geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub x_resolution: u16,
    pub y_resolution: u16,
    pub x_char_size: u8,
    pub y_char_size: u8,
    pub number_of_planes: u8,
    pub bits_per_pixel: u8,
    pub number_of_banks: u8,
    pub memory_model: u8,
    /// Bank size in KB.
    pub bank_size: u8,
    pub number_of_image_pages: u8,
}

impl Geometry {
    pub const MEM_TEXT: u8 = 0;
    pub const MEM_CGA: u8 = 1;
    pub const MEM_HERCULES: u8 = 2;
    pub const MEM_PLANAR: u8 = 3;
    pub const MEM_PACKED_PIXEL: u8 = 4;
    pub const MEM_NON_CHAIN4: u8 = 5;
    pub const MEM_DIRECT_COLOR: u8 = 6;
    pub const MEM_YUV: u8 = 7;

    fn decode(block: &RawReplyBlock) -> Self {
	Self {
	    x_resolution: block.u16_at(X_RESOLUTION),
	    y_resolution: block.u16_at(Y_RESOLUTION),
	    x_char_size: block.u8_at(X_CHAR_SIZE),
	    y_char_size: block.u8_at(Y_CHAR_SIZE),
	    number_of_planes: block.u8_at(NUMBER_OF_PLANES),
	    bits_per_pixel: block.u8_at(BITS_PER_PIXEL),
	    number_of_banks: block.u8_at(NUMBER_OF_BANKS),
	    memory_model: block.u8_at(MEMORY_MODEL),
	    bank_size: block.u8_at(BANK_SIZE),
	    number_of_image_pages: block.u8_at(NUMBER_OF_IMAGE_PAGES),
	}
    }

    /// Color channel masks are only defined for these models.
    pub fn has_direct_color_model(&self) -> bool {
	matches!(self.memory_model, Self::MEM_DIRECT_COLOR | Self::MEM_YUV)
    }

    pub fn memory_model_name(memory_model: u8) -> &'static str {
	match memory_model {
	    Self::MEM_TEXT => "Text Mode",
	    Self::MEM_CGA => "CGA Graphics",
	    Self::MEM_HERCULES => "Hercules Graphics",
	    Self::MEM_PLANAR => "Planar",
	    Self::MEM_PACKED_PIXEL => "Packed Pixel",
	    Self::MEM_NON_CHAIN4 => "Non-chain 4, 256 color",
	    Self::MEM_DIRECT_COLOR => "Direct Color",
	    Self::MEM_YUV => "YUV",
	    0x08 ..= 0x0f => "Reserved (VESA)",
	    _ => "OEM",
	}
    }
}


/// Size and position of one color channel inside a pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChannelMask {
    pub size: u8,
    pub position: u8,
}

impl ChannelMask {
    /// Bits the channel occupies in a pixel value.
    pub fn mask(&self) -> u32 {
	bits::mask(self.position as u32, self.size as u32) as u32
    }

    /// Extracts the channel from a pixel value.
    pub fn extract(&self, pixel: u32) -> u32 {
	bits::field(pixel, self.position as u32, self.size as u32) as u32
    }
}


/// Red, green, blue, and reserved channel masks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorChannels {
    pub red: ChannelMask,
    pub green: ChannelMask,
    pub blue: ChannelMask,
    pub reserved: ChannelMask,
}

impl ColorChannels {
    // Four (mask size, field position) byte pairs starting at `offset`.
    fn decode(block: &RawReplyBlock, offset: usize) -> Self {
	let channel = |index: usize| ChannelMask {
	    size: block.u8_at(offset + index * 2),
	    position: block.u8_at(offset + index * 2 + 1),
	};

	Self {
	    red: channel(0),
	    green: channel(1),
	    blue: channel(2),
	    reserved: channel(3),
	}
    }
}


/// Direct color fields (memory models 6 and 7).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectColor {
    pub channels: ColorChannels,
    pub attributes: DirectColorAttributes,
}

impl DirectColor {
    fn decode(block: &RawReplyBlock) -> Self {
	Self {
	    channels: ColorChannels::decode(block, RED_MASK_SIZE),
	    attributes: DirectColorAttributes::from_bits_retain(
		block.u8_at(DIRECT_COLOR_MODE_INFO)),
	}
    }
}


/// VBE 3.0+ linear mode fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearInfo {
    pub bytes_per_scan_line: u16,
    pub bnk_number_of_image_pages: u8,
    pub lin_number_of_image_pages: u8,
    pub channels: ColorChannels,
    /// Maximum pixel clock in Hz.
    pub max_pixel_clock: u32,
}

impl LinearInfo {
    fn decode(block: &RawReplyBlock) -> Self {
	Self {
	    bytes_per_scan_line: block.u16_at(LIN_BYTES_PER_SCAN_LINE),
	    bnk_number_of_image_pages: block.u8_at(BNK_NUMBER_OF_IMAGE_PAGES),
	    lin_number_of_image_pages: block.u8_at(LIN_NUMBER_OF_IMAGE_PAGES),
	    channels: ColorChannels::decode(block, LIN_RED_MASK_SIZE),
	    max_pixel_clock: block.u32_at(MAX_PIXEL_CLOCK),
	}
    }
}


/// Decoded VBE Mode Information
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeDescriptor {
    pub mode: u16,
    /// VBE version the field groups were gated with.
    pub revision: VbeVersion,

    pub attributes: ModeAttributes,
    pub window_a: Window,
    pub window_b: Window,
    /// Window granularity in KB.
    pub win_granularity: u16,
    /// Window size in KB.
    pub win_size: u16,
    pub win_func_ptr: X86FarPtr,
    pub bytes_per_scan_line: u16,

    pub geometry: FieldGroup<Geometry>,
    pub direct_color: FieldGroup<DirectColor>,
    pub framebuffer: FieldGroup<PhysAddr>,
    pub linear: FieldGroup<LinearInfo>,
}

impl ModeDescriptor {
    /// Decodes a ModeInfoBlock returned for `mode` by VBE `version`.
    pub fn decode(mode: u16, version: VbeVersion, block: &RawReplyBlock)
		  -> Result<Self, VbeError> {
	// Firmware may answer an unknown mode with a zeroed block and a
	// successful status.
	if block.is_zero(MODE_ATTRIBUTES..MANDATORY_END) {
	    return Err(VbeError::UnsupportedMode { mode });
	}

	let attributes =
	    ModeAttributes::from_bits_retain(block.u16_at(MODE_ATTRIBUTES));
	if !attributes.contains(ModeAttributes::SUPPORTED) {
	    log::warn!("mode {:#06x}: not supported in hardware \
			(attributes={:#x})", mode, attributes.bits());
	}

	let geometry =
	    FieldGroup::gated(version, VbeVersion::V1_2,
			      || Geometry::decode(block));

	let direct_color = match &geometry {
	    FieldGroup::Present(geometry)
		if geometry.has_direct_color_model() =>
		FieldGroup::Present(DirectColor::decode(block)),
	    FieldGroup::Present(geometry) =>
		FieldGroup::Absent(Absence::NotDirectColor {
		    memory_model: geometry.memory_model,
		}),
	    FieldGroup::Absent(absence) => FieldGroup::Absent(*absence),
	};

	let framebuffer = if !version.supports(VbeVersion::V2_0) {
	    FieldGroup::Absent(Absence::RevisionGap {
		required: VbeVersion::V2_0,
	    })
	} else if bits::bit(attributes.bits(),
			    LINEAR_FRAME_BUFFER_ATTRIBUTE_BIT) != 0 {
	    // PhysBasePtr is a flat 32-bit address, not a far pointer.
	    FieldGroup::Present(PhysAddr::flat(block.u32_at(PHYS_BASE_PTR)))
	} else {
	    FieldGroup::Absent(Absence::NoLinearFrameBuffer)
	};

	let linear =
	    FieldGroup::gated(version, VbeVersion::V3_0,
			      || LinearInfo::decode(block));

	Ok(Self {
	    mode,
	    revision: version,
	    attributes,
	    window_a: Window {
		attributes: WindowAttributes::from_bits_retain(
		    block.u8_at(WIN_A_ATTRIBUTES)),
		segment: block.u16_at(WIN_A_SEGMENT),
	    },
	    window_b: Window {
		attributes: WindowAttributes::from_bits_retain(
		    block.u8_at(WIN_B_ATTRIBUTES)),
		segment: block.u16_at(WIN_B_SEGMENT),
	    },
	    win_granularity: block.u16_at(WIN_GRANULARITY),
	    win_size: block.u16_at(WIN_SIZE),
	    win_func_ptr: X86FarPtr::from_u32(block.u32_at(WIN_FUNC_PTR)),
	    bytes_per_scan_line: block.u16_at(BYTES_PER_SCAN_LINE),
	    geometry,
	    direct_color,
	    framebuffer,
	    linear,
	})
    }

    pub fn is_graphics_mode(&self) -> bool {
	self.attributes.contains(ModeAttributes::GRAPHICS)
    }

    pub fn has_linear_frame_buffer(&self) -> bool {
	self.framebuffer.is_present()
    }

    /// Packed pixel or direct color, the models usable through a plain
    /// linear frame buffer.
    pub fn is_linear_drawable(&self) -> bool {
	match self.geometry.present() {
	    Some(geometry) => matches!(geometry.memory_model,
				       Geometry::MEM_PACKED_PIXEL |
				       Geometry::MEM_DIRECT_COLOR),
	    None => false,
	}
    }
}


/// Calls BIOS INT 10h AX=4F01h (Return VBE Mode Information).
///
/// `version` is the one reported by the controller; it decides which
/// field groups of the reply are trusted.
pub fn call<B>(bridge: &mut B, mode: u16, version: VbeVersion)
	       -> Result<ModeDescriptor, VbeError>
where
    B: RealModeBridge,
{
    let mut reply = RawReplyBlock::zeroed();

    // INT 10h AH=4Fh AL=01h
    // IN
    //   CX    = Mode Number
    //   ES:DI = Address of ModeInfoBlock
    // OUT
    //   AX    = Status
    let mut regs = LmbiosRegs {
	ecx: mode as u32,	// Mode Number
	..LmbiosRegs::vbe(SERVICE)
    };

    log::trace!("IN:  EAX={:#x}, ECX={:#x}", regs.eax, regs.ecx);

    bridge.invoke(&mut regs, &mut reply)?;

    log::trace!("OUT: EAX={:#x}", regs.eax);

    regs.vbe_status()?;

    let descriptor = ModeDescriptor::decode(mode, version, &reply)?;

    log::debug!("mode {:#06x}: attributes={:#x}, geometry={}, \
		 direct color={}, frame buffer={}, linear={}",
		mode, descriptor.attributes.bits(),
		descriptor.geometry.is_present(),
		descriptor.direct_color.is_present(),
		descriptor.framebuffer.is_present(),
		descriptor.linear.is_present());

    Ok(descriptor)
}


#[cfg(test)]
mod tests {
    use super::*;

    // 1024x768, 32bpp direct color, LFB at 0xFD000000
    fn direct_color_block() -> RawReplyBlock {
	let mut block = RawReplyBlock::zeroed();
	block.put_u16(MODE_ATTRIBUTES, 0x009b);
	block.put_u8(WIN_A_ATTRIBUTES, 0x07);
	block.put_u16(WIN_GRANULARITY, 64);
	block.put_u16(WIN_SIZE, 64);
	block.put_u16(WIN_A_SEGMENT, 0xa000);
	block.put_u32(WIN_FUNC_PTR, 0xc000_1234);
	block.put_u16(BYTES_PER_SCAN_LINE, 4096);
	block.put_u16(X_RESOLUTION, 1024);
	block.put_u16(Y_RESOLUTION, 768);
	block.put_u8(X_CHAR_SIZE, 8);
	block.put_u8(Y_CHAR_SIZE, 16);
	block.put_u8(NUMBER_OF_PLANES, 1);
	block.put_u8(BITS_PER_PIXEL, 32);
	block.put_u8(NUMBER_OF_BANKS, 1);
	block.put_u8(MEMORY_MODEL, Geometry::MEM_DIRECT_COLOR);
	block.put_u8(NUMBER_OF_IMAGE_PAGES, 3);
	block.put_bytes(RED_MASK_SIZE, &[8, 16, 8, 8, 8, 0, 8, 24]);
	block.put_u8(DIRECT_COLOR_MODE_INFO, 0x02);
	block.put_u32(PHYS_BASE_PTR, 0xfd00_0000);
	block.put_u16(LIN_BYTES_PER_SCAN_LINE, 4096);
	block.put_u8(BNK_NUMBER_OF_IMAGE_PAGES, 3);
	block.put_u8(LIN_NUMBER_OF_IMAGE_PAGES, 7);
	block.put_bytes(LIN_RED_MASK_SIZE, &[8, 16, 8, 8, 8, 0, 8, 24]);
	block.put_u32(MAX_PIXEL_CLOCK, 135_000_000);
	block
    }

    #[test]
    fn decodes_mandatory_fields() {
	let desc = ModeDescriptor::decode(0x118, VbeVersion::V1_0,
					  &direct_color_block()).unwrap();
	assert_eq!(desc.mode, 0x118);
	assert!(desc.attributes.contains(ModeAttributes::SUPPORTED |
					 ModeAttributes::GRAPHICS |
					 ModeAttributes::LINEAR_FRAME_BUFFER));
	assert_eq!(desc.window_a.attributes, WindowAttributes::all());
	assert_eq!(desc.window_a.segment, 0xa000);
	assert_eq!(desc.window_b.attributes, WindowAttributes::empty());
	assert_eq!(desc.win_granularity, 64);
	assert_eq!(desc.win_size, 64);
	assert_eq!(desc.win_func_ptr, X86FarPtr::from_u32(0xc000_1234));
	assert_eq!(desc.bytes_per_scan_line, 4096);
    }

    #[test]
    fn vbe3_decodes_every_group() {
	let desc = ModeDescriptor::decode(0x118, VbeVersion::V3_0,
					  &direct_color_block()).unwrap();

	let geometry = desc.geometry.present().unwrap();
	assert_eq!((geometry.x_resolution, geometry.y_resolution), (1024, 768));
	assert_eq!(geometry.bits_per_pixel, 32);
	assert_eq!(geometry.number_of_image_pages, 3);

	let direct = desc.direct_color.present().unwrap();
	assert_eq!(direct.channels.red, ChannelMask { size: 8, position: 16 });
	assert_eq!(direct.channels.green, ChannelMask { size: 8, position: 8 });
	assert_eq!(direct.channels.blue, ChannelMask { size: 8, position: 0 });
	assert_eq!(direct.channels.reserved,
		   ChannelMask { size: 8, position: 24 });
	assert_eq!(direct.channels.red.mask(), 0x00ff_0000);
	assert_eq!(direct.channels.red.extract(0x0012_3456), 0x12);
	assert_eq!(direct.attributes, DirectColorAttributes::RESERVED_USABLE);

	assert_eq!(desc.framebuffer,
		   FieldGroup::Present(PhysAddr::new(0xfd00_0000)));

	let linear = desc.linear.present().unwrap();
	assert_eq!(linear.bytes_per_scan_line, 4096);
	assert_eq!(linear.bnk_number_of_image_pages, 3);
	assert_eq!(linear.lin_number_of_image_pages, 7);
	assert_eq!(linear.channels.blue.mask(), 0x0000_00ff);
	assert_eq!(linear.max_pixel_clock, 135_000_000);

	assert!(desc.is_graphics_mode());
	assert!(desc.has_linear_frame_buffer());
	assert!(desc.is_linear_drawable());
    }

    #[test]
    fn vbe11_hides_geometry_even_when_bytes_are_set() {
	let desc = ModeDescriptor::decode(0x118, VbeVersion::V1_1,
					  &direct_color_block()).unwrap();
	let gap = Absence::RevisionGap { required: VbeVersion::V1_2 };
	assert_eq!(desc.geometry, FieldGroup::Absent(gap));
	assert_eq!(desc.direct_color, FieldGroup::Absent(gap));
	assert_eq!(desc.framebuffer.absence(),
		   Some(Absence::RevisionGap { required: VbeVersion::V2_0 }));
	assert_eq!(desc.linear.absence(),
		   Some(Absence::RevisionGap { required: VbeVersion::V3_0 }));
	assert!(!desc.is_linear_drawable());
    }

    #[test]
    fn packed_pixel_hides_color_masks() {
	let mut block = direct_color_block();
	block.put_u8(MEMORY_MODEL, Geometry::MEM_PACKED_PIXEL);
	block.put_u8(BITS_PER_PIXEL, 8);

	let desc = ModeDescriptor::decode(0x105, VbeVersion::V3_0,
					  &block).unwrap();
	assert_eq!(desc.direct_color,
		   FieldGroup::Absent(Absence::NotDirectColor {
		       memory_model: Geometry::MEM_PACKED_PIXEL,
		   }));
	assert!(desc.is_linear_drawable());
    }

    #[test]
    fn yuv_has_color_masks() {
	let mut block = direct_color_block();
	block.put_u8(MEMORY_MODEL, Geometry::MEM_YUV);
	let desc = ModeDescriptor::decode(0x118, VbeVersion::V1_2,
					  &block).unwrap();
	assert!(desc.direct_color.is_present());
	assert!(!desc.is_linear_drawable());
    }

    #[test]
    fn frame_buffer_needs_attribute_bit() {
	let mut block = direct_color_block();
	block.put_u16(MODE_ATTRIBUTES, 0x001b);
	let desc = ModeDescriptor::decode(0x118, VbeVersion::V2_0,
					  &block).unwrap();
	assert_eq!(desc.framebuffer,
		   FieldGroup::Absent(Absence::NoLinearFrameBuffer));
	assert!(!desc.has_linear_frame_buffer());
    }

    #[test]
    fn zeroed_block_is_unsupported_mode() {
	assert_eq!(ModeDescriptor::decode(0x1ff, VbeVersion::V3_0,
					  &RawReplyBlock::zeroed()),
		   Err(VbeError::UnsupportedMode { mode: 0x1ff }));
    }

    #[test]
    fn memory_model_names() {
	assert_eq!(Geometry::memory_model_name(4), "Packed Pixel");
	assert_eq!(Geometry::memory_model_name(6), "Direct Color");
	assert_eq!(Geometry::memory_model_name(0x0a), "Reserved (VESA)");
	assert_eq!(Geometry::memory_model_name(0x20), "OEM");
    }
}
