pub mod bridge;
#[cfg(feature = "lmbios")]
pub mod ffi;
pub mod int10h4f00h;
pub mod int10h4f01h;
#[cfg(feature = "lmbios")]
pub mod lmbios;
pub mod lmbios_regs;
pub mod reply;
pub mod scripted;
pub mod vbe_modes;
pub mod version;

pub use bridge::RealModeBridge;
pub use int10h4f00h::ControllerInfo;
pub use int10h4f01h::ModeDescriptor;
#[cfg(feature = "lmbios")]
pub use lmbios::Lmbios;
pub use lmbios_regs::LmbiosRegs;
pub use reply::RawReplyBlock;
pub use scripted::{ScriptedBridge, ScriptedReply};
pub use version::VbeVersion;
