/*!

A real-mode bridge that replays scripted firmware replies.

Useful wherever no BIOS is available: each `invoke` pops the next
scripted reply, and `read_real_mode` serves bytes from memory regions
registered up front (plus the scratch region itself, where firmware may
legally place the mode list and OEM strings).

 */

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use super::{LmbiosRegs, RawReplyBlock, RealModeBridge};
use crate::error::BridgeFault;
use crate::x86::{PhysAddr, X86FarPtr};


/// One scripted firmware answer.
#[derive(Clone, Debug)]
pub struct ScriptedReply {
    /// AX as returned by the firmware.
    pub ax: u16,
    /// Contents of the scratch region after the call, if written.
    pub block: Option<RawReplyBlock>,
}

impl ScriptedReply {
    /// Successful call (AX=004Fh) leaving `block` in the scratch region.
    pub fn ok(block: RawReplyBlock) -> Self {
	Self {
	    ax: 0x004f,
	    block: Some(block),
	}
    }

    /// Call returning `ax` without touching the scratch region.
    pub fn status(ax: u16) -> Self {
	Self {
	    ax,
	    block: None,
	}
    }
}


/// A call as observed by the bridge.
#[derive(Clone, Debug)]
pub struct ScriptedCall {
    pub regs: LmbiosRegs,
    pub request: RawReplyBlock,
}


pub struct ScriptedBridge {
    scratch_addr: PhysAddr,
    scratch: RawReplyBlock,
    replies: VecDeque<ScriptedReply>,
    regions: Vec<(PhysAddr, Vec<u8>)>,
    calls: Vec<ScriptedCall>,
}

impl ScriptedBridge {
    /// Where the scratch region pretends to live.
    pub const DEFAULT_SCRATCH: PhysAddr = PhysAddr::new(0x0500);

    pub fn new() -> Self {
	Self {
	    scratch_addr: Self::DEFAULT_SCRATCH,
	    scratch: RawReplyBlock::zeroed(),
	    replies: VecDeque::new(),
	    regions: Vec::new(),
	    calls: Vec::new(),
	}
    }

    pub fn scratch_addr(&self) -> PhysAddr {
	self.scratch_addr
    }

    /// Queues the reply for the next unanswered call.
    pub fn push_reply(&mut self, reply: ScriptedReply) -> &mut Self {
	self.replies.push_back(reply);
	self
    }

    /// Makes `data` readable at `addr`.
    pub fn map(&mut self, addr: PhysAddr, data: &[u8]) -> &mut Self {
	self.regions.push((addr, data.to_vec()));
	self
    }

    /// Makes a 0xFFFF-terminated mode list readable at `addr`.
    pub fn map_mode_list(&mut self, addr: PhysAddr, modes: &[u16])
			 -> &mut Self {
	let mut data = Vec::with_capacity((modes.len() + 1) * 2);
	for mode in modes.iter().chain(core::iter::once(&0xffff)) {
	    data.extend_from_slice(&mode.to_le_bytes());
	}
	self.regions.push((addr, data));
	self
    }

    /// Calls seen so far, oldest first.
    pub fn calls(&self) -> &[ScriptedCall] {
	&self.calls
    }

    pub fn pending_replies(&self) -> usize {
	self.replies.len()
    }

    fn read_from(base: PhysAddr, data: &[u8], addr: PhysAddr, buf: &mut [u8])
		 -> bool {
	let Some(start) = addr.as_u32().checked_sub(base.as_u32()) else {
	    return false;
	};
	let start = start as usize;
	match start.checked_add(buf.len()) {
	    Some(end) if end <= data.len() => {
		buf.copy_from_slice(&data[start..end]);
		true
	    },
	    _ => false,
	}
    }
}

impl Default for ScriptedBridge {
    fn default() -> Self {
	Self::new()
    }
}

impl RealModeBridge for ScriptedBridge {
    fn invoke(&mut self, regs: &mut LmbiosRegs, reply: &mut RawReplyBlock)
	      -> Result<(), BridgeFault> {
	let scratch_fp = X86FarPtr::from_linear_addr(self.scratch_addr.as_usize())
	    .ok_or(BridgeFault::ScratchUnreachable)?;
	regs.es = scratch_fp.segment;
	regs.edi = scratch_fp.offset as u32;

	self.calls.push(ScriptedCall {
	    regs: *regs,
	    request: reply.clone(),
	});

	let scripted = self.replies.pop_front()
	    .ok_or(BridgeFault::Unavailable)?;

	self.scratch = reply.clone();
	if let Some(block) = scripted.block {
	    self.scratch = block;
	}
	*reply = self.scratch.clone();

	regs.eax = (regs.eax & 0xffff_0000) | scripted.ax as u32;

	Ok(())
    }

    fn read_real_mode(&mut self, addr: PhysAddr, buf: &mut [u8])
		      -> Result<(), BridgeFault> {
	if Self::read_from(self.scratch_addr, self.scratch.as_bytes(),
			   addr, buf) {
	    return Ok(());
	}

	for (base, data) in &self.regions {
	    if Self::read_from(*base, data, addr, buf) {
		return Ok(());
	    }
	}

	Err(BridgeFault::Unmapped {
	    addr: addr.as_u32(),
	    len: buf.len(),
	})
    }
}
