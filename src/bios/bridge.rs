//
// RealModeBridge - Executes BIOS interrupts on behalf of the caller
//

use super::{LmbiosRegs, RawReplyBlock};
use crate::error::BridgeFault;
use crate::x86::PhysAddr;


/// Executes a real-mode BIOS interrupt.
///
/// Only one call may be in flight at a time and the scratch region is
/// overwritten by every call, so callers hold exclusive access (see
/// [`crate::query_vbe::Vbe`]) from `invoke` until the reply is decoded.
pub trait RealModeBridge {
    /// Runs `INT regs.fun`.
    ///
    /// `reply` is copied into the bridge's scratch region, ES:DI is set to
    /// point at that region, the interrupt is executed, and the region is
    /// copied back into `reply`. Output registers are left in `regs`.
    fn invoke(&mut self, regs: &mut LmbiosRegs, reply: &mut RawReplyBlock)
	      -> Result<(), BridgeFault>;

    /// Copies real-mode memory starting at `addr` into `buf`.
    fn read_real_mode(&mut self, addr: PhysAddr, buf: &mut [u8])
		      -> Result<(), BridgeFault>;

    /// Reads one little-endian word of real-mode memory.
    fn read_u16(&mut self, addr: PhysAddr) -> Result<u16, BridgeFault> {
	let mut word = [0_u8; 2];
	self.read_real_mode(addr, &mut word)?;
	Ok(u16::from_le_bytes(word))
    }
}

impl<B> RealModeBridge for &mut B
where
    B: RealModeBridge + ?Sized,
{
    fn invoke(&mut self, regs: &mut LmbiosRegs, reply: &mut RawReplyBlock)
	      -> Result<(), BridgeFault> {
	(**self).invoke(regs, reply)
    }

    fn read_real_mode(&mut self, addr: PhysAddr, buf: &mut [u8])
		      -> Result<(), BridgeFault> {
	(**self).read_real_mode(addr, buf)
    }
}
