use super::LmbiosRegs;

extern "C" {
    /// Switches to real mode, runs the function in `regs.fun`, and
    /// switches back. Provided by the lmbios assembly shim.
    pub fn lmbios_call(regs: &mut LmbiosRegs) -> u16;
}

