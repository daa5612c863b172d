//
// Errors reported by VBE queries.
//

use core::fmt;


/// Why the real-mode bridge could not carry out a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BridgeFault {
    /// The scratch region is not addressable from real mode.
    ScratchUnreachable,
    /// Requested memory lies outside what the bridge can read.
    Unmapped { addr: u32, len: usize },
    /// The bridge has no scripted or real handler for the call.
    Unavailable,
}

impl fmt::Display for BridgeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	match self {
	    Self::ScratchUnreachable =>
		write!(f, "scratch region is above 1MB"),
	    Self::Unmapped { addr, len } =>
		write!(f, "{} bytes at {:#x} are not readable", len, addr),
	    Self::Unavailable =>
		write!(f, "real-mode bridge unavailable"),
	}
    }
}


/// Non-successful outcome of a VBE function call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirmwareStatus {
    /// AL != 4Fh: the VBE function itself is not supported.
    FunctionNotSupported { al: u8 },
    /// AH = 01h
    Failed,
    /// AH = 02h: not supported in the current hardware configuration.
    NotSupported,
    /// AH = 03h: invalid in the current video mode.
    InvalidFunction,
    /// Any other AH value.
    Unknown { ah: u8 },
    /// The bridge failed before or after the interrupt.
    Bridge(BridgeFault),
}

impl FirmwareStatus {
    pub const FUNCTION_CALL_SUCCESSFUL: u8 = 0x00;
    pub const FUNCTION_CALL_FAILED: u8 = 0x01;
    pub const FUNCTION_NOT_SUPPORTED: u8 = 0x02;
    pub const FUNCTION_INVALID: u8 = 0x03;

    /// AL value returned by every implemented VBE function.
    pub const VBE_FUNCTION_SUPPORTED: u8 = 0x4f;

    /// Interprets AX as returned by INT 10h AH=4Fh.
    pub fn check(ax: u16) -> Result<(), Self> {
	let al = (ax & 0xff) as u8;
	let ah = (ax >> 8) as u8;

	if al != Self::VBE_FUNCTION_SUPPORTED {
	    return Err(Self::FunctionNotSupported { al });
	}

	match ah {
	    Self::FUNCTION_CALL_SUCCESSFUL => Ok(()),
	    Self::FUNCTION_CALL_FAILED => Err(Self::Failed),
	    Self::FUNCTION_NOT_SUPPORTED => Err(Self::NotSupported),
	    Self::FUNCTION_INVALID => Err(Self::InvalidFunction),
	    _ => Err(Self::Unknown { ah }),
	}
    }
}

impl fmt::Display for FirmwareStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	match self {
	    Self::FunctionNotSupported { al } =>
		write!(f, "VBE function not supported (AL={:#04x})", al),
	    Self::Failed =>
		write!(f, "function call failed"),
	    Self::NotSupported =>
		write!(f, "function not supported in current hardware \
			   configuration"),
	    Self::InvalidFunction =>
		write!(f, "function invalid in current video mode"),
	    Self::Unknown { ah } =>
		write!(f, "unknown status (AH={:#04x})", ah),
	    Self::Bridge(fault) =>
		write!(f, "bridge fault: {}", fault),
	}
    }
}

impl From<BridgeFault> for FirmwareStatus {
    fn from(fault: BridgeFault) -> Self {
	Self::Bridge(fault)
    }
}


/// Errors returned by VBE queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VbeError {
    /// The firmware (or the bridge) reported a failure. Not retried.
    Firmware(FirmwareStatus),
    /// The controller info block does not start with "VESA".
    InvalidResponse { signature: [u8; 4] },
    /// The firmware returned an all-zero mode info block.
    UnsupportedMode { mode: u16 },
}

impl fmt::Display for VbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	match self {
	    Self::Firmware(status) =>
		write!(f, "firmware error: {}", status),
	    Self::InvalidResponse { signature } => {
		write!(f, "invalid response: signature ")?;
		for byte in signature {
		    match *byte {
			0x20 ..= 0x7e => write!(f, "{}", *byte as char)?,
			_ => write!(f, "\\x{:02x}", byte)?,
		    }
		}
		Ok(())
	    },
	    Self::UnsupportedMode { mode } =>
		write!(f, "mode {:#06x} is not supported", mode),
	}
    }
}

impl From<FirmwareStatus> for VbeError {
    fn from(status: FirmwareStatus) -> Self {
	Self::Firmware(status)
    }
}

impl From<BridgeFault> for VbeError {
    fn from(fault: BridgeFault) -> Self {
	Self::Firmware(FirmwareStatus::Bridge(fault))
    }
}
