use core::mem::size_of;

use crate::error::FirmwareStatus;


//
// Function numbers
//	  0x00 -   0xFF : Software Interrupt Number (INT n)
//	 0x100 -  0x3FF : (reserved)
//	 0x400 - 0xFFFE : Subroutine address
//	0xFFFF          : (unsupported)
//

/// Register file exchanged with the real-mode bridge.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LmbiosRegs {	// Offset:
    pub fun: u16,	// 00-01 : Function number	(IN)
    pub flags: u16,	// 02-03 : FLAGS		(OUT)
    pub eax: u32,	// 04-07 : EAX			(IN/OUT)
    pub ebx: u32,	// 08-0B : EBX			(IN/OUT)
    pub ecx: u32,	// 0C-0F : ECX			(IN/OUT)
    pub edx: u32,	// 10-13 : EDX			(IN/OUT)
    pub esi: u32,	// 14-17 : ESI			(IN/OUT)
    pub edi: u32,	// 18-1B : EDI			(IN/OUT)
    pub ebp: u32,	// 1C-1F : EBP			(IN/OUT)
    pub ds: u16,	// 20-21 : DS			(IN/OUT)
    pub es: u16,	// 22-23 : ES			(IN/OUT)
}

const _: () = assert!(size_of::<LmbiosRegs>() == 0x24);


/// INT 10h: Video Services
pub const VBE_INTERRUPT: u16 = 0x10;

/// AH=4Fh: VESA BIOS Extensions
pub const VBE_FUNCTION: u8 = 0x4f;


impl LmbiosRegs {
    /// Registers for INT 10h AX=4Fxxh with `service` in AL.
    pub fn vbe(service: u8) -> Self {
	Self {
	    fun: VBE_INTERRUPT,
	    eax: (VBE_FUNCTION as u32) << 8 | service as u32,
	    ..Default::default()
	}
    }

    #[inline]
    pub fn ax(&self) -> u16 {
	self.eax as u16
    }

    /// Checks the VBE status returned in AX.
    pub fn vbe_status(&self) -> Result<(), FirmwareStatus> {
	FirmwareStatus::check(self.ax())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vbe_registers() {
	let regs = LmbiosRegs::vbe(0x01);
	assert_eq!(regs.fun, 0x10);
	assert_eq!(regs.eax, 0x4f01);
	assert_eq!(regs.ecx, 0);
    }

    #[test]
    fn status_uses_low_word_only() {
	let regs = LmbiosRegs {
	    eax: 0xdead_004f,
	    ..Default::default()
	};
	assert_eq!(regs.vbe_status(), Ok(()));
    }
}
