pub mod phys_addr;
pub mod x86_far_ptr;
pub mod x86_get_addr;

pub use self::phys_addr::PhysAddr;
pub use self::x86_far_ptr::X86FarPtr;
pub use self::x86_get_addr::X86GetAddr;
