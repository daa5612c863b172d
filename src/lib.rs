/*!

Queries the VESA BIOS Extensions (VBE) through a real-mode bridge and
decodes controller and mode information into revision-aware structures.

```no_run
use nostd_vbe::bios::{ScriptedBridge, vbe_modes};
use nostd_vbe::query_vbe::Vbe;
use nostd_vbe::report;

let vbe = Vbe::new(ScriptedBridge::new());
if let Ok(info) = vbe.controller_info() {
    if let Ok(desc) = vbe.mode_info(vbe_modes::MODE_1024X768, info.version()) {
	let _text = report::format_report(&desc);
    }
}
```

 */

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod bios;
pub mod bits;
pub mod error;
pub mod field_group;
pub mod man_video;
pub mod query_vbe;
pub mod report;
pub mod x86;

pub use error::{BridgeFault, FirmwareStatus, VbeError};
pub use field_group::{Absence, FieldGroup};
