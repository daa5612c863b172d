//
// Lmbios - Real-mode bridge backed by the lmbios assembly shim
//

use core::ptr::{self, NonNull};

use spin::Mutex;

use super::{ffi, LmbiosRegs, RawReplyBlock, RealModeBridge};
use crate::error::BridgeFault;
use crate::x86::{PhysAddr, X86FarPtr, X86GetAddr};


// The shim has a single real-mode stack; serialize every caller.
static LMBIOS_TICKET: Mutex<()> = Mutex::new(());


pub struct Lmbios {
    scratch: NonNull<RawReplyBlock>,
    scratch_fp: X86FarPtr,
}

impl X86GetAddr for RawReplyBlock {}

impl Lmbios {
    /// Uses `scratch` as the region ES:DI points at during calls.
    ///
    /// # Safety
    ///
    /// `scratch` must be identity mapped, valid for reads and writes of a
    /// whole `RawReplyBlock`, and used by nobody else while the bridge
    /// lives. The first 1MB must be identity mapped for `read_real_mode`.
    pub unsafe fn new(scratch: NonNull<RawReplyBlock>)
		      -> Result<Self, BridgeFault> {
	let scratch_fp = scratch.as_ref().get_far_ptr()
	    .ok_or(BridgeFault::ScratchUnreachable)?;

	// The whole block must be reachable through ES:DI.
	if scratch.as_ptr() as usize + RawReplyBlock::SIZE > 1_usize << 20 {
	    return Err(BridgeFault::ScratchUnreachable);
	}

	Ok(Self {
	    scratch,
	    scratch_fp,
	})
    }
}

impl RealModeBridge for Lmbios {
    fn invoke(&mut self, regs: &mut LmbiosRegs, reply: &mut RawReplyBlock)
	      -> Result<(), BridgeFault> {
	regs.es = self.scratch_fp.segment;
	regs.edi = self.scratch_fp.offset as u32;

	let _guard = LMBIOS_TICKET.lock();

	log::trace!("IN:  FUN={:#x}, EAX={:#x}, ECX={:#x}, ES:EDI={:#x}:{:#x}",
		    regs.fun, regs.eax, regs.ecx, regs.es, regs.edi);

	unsafe {
	    ptr::write_volatile(self.scratch.as_ptr(), reply.clone());
	    ffi::lmbios_call(regs);
	    *reply = ptr::read_volatile(self.scratch.as_ptr());
	}

	log::trace!("OUT: EAX={:#x}, FLAGS={:#x}", regs.eax, regs.flags);

	Ok(())
    }

    fn read_real_mode(&mut self, addr: PhysAddr, buf: &mut [u8])
		      -> Result<(), BridgeFault> {
	let unmapped = BridgeFault::Unmapped {
	    addr: addr.as_u32(),
	    len: buf.len(),
	};

	// Address 0 is the IVT; nothing VBE hands out lives there.
	if addr.as_u32() == 0 {
	    return Err(unmapped);
	}
	match addr.as_usize().checked_add(buf.len()) {
	    Some(end) if end <= 1_usize << 20 => {},
	    _ => return Err(unmapped),
	}

	unsafe {
	    ptr::copy_nonoverlapping(addr.as_usize() as *const u8,
				     buf.as_mut_ptr(),
				     buf.len());
	}

	Ok(())
    }
}

unsafe impl Send for Lmbios {}
