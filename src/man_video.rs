/*!

Finds the best video mode using VESA BIOS Extentions (INT 10h AX=4Fxxh).

Only discovery is done here; the mode is not set.

*/


use crate::bios::{ModeDescriptor, RealModeBridge};
use crate::error::{FirmwareStatus, VbeError};
use crate::query_vbe::{Vbe, VbeInfo};


/// Returns the listed graphics mode closest to `width` x `height` at
/// `bpp` bits per pixel.
///
/// Candidates are graphics modes with a linear frame buffer and a packed
/// pixel or direct color memory model. An exact match wins; otherwise the
/// nearest size, then the nearest bpp. Modes the firmware refuses to
/// describe are skipped; a bridge fault ends the search with an error.
pub fn find_graphics_mode<B>(vbe: &Vbe<B>, info: &VbeInfo,
			     width: u16, height: u16, bpp: u8)
			     -> Result<Option<ModeDescriptor>, VbeError>
where
    B: RealModeBridge,
{
    let mut desired_size = DesiredSize::new(width, height, bpp);

    for &mode in info.modes() {
	let desc = match vbe.mode_info(mode, info.version()) {
	    Ok(desc) => desc,
	    Err(err @ VbeError::Firmware(FirmwareStatus::Bridge(_))) => {
		log::warn!("mode {:#06x}: {}", mode, err);
		return Err(err);
	    },
	    Err(err @ VbeError::UnsupportedMode { .. }) |
	    Err(err @ VbeError::Firmware(_)) => {
		log::debug!("mode {:#06x} skipped: {}", mode, err);
		continue;
	    },
	    Err(err) => return Err(err),
	};

	if !(desc.is_graphics_mode() &&
	     desc.has_linear_frame_buffer() &&
	     desc.is_linear_drawable()) {
	    continue;
	}

	let Some((x, y, depth)) = desc.geometry.present()
	    .map(|g| (g.x_resolution, g.y_resolution, g.bits_per_pixel))
	else {
	    continue;
	};

	if desired_size.does_match(desc, x, y, depth) {
	    break;
	}
    }

    let best_mode = desired_size.into_best_mode();

    if let Some(best) = &best_mode {
	log::debug!("best mode for {}x{}x{}: {:#06x}",
		    width, height, bpp, best.mode);
    }

    Ok(best_mode)
}


struct DesiredSize {
    // Desired Size and BPP (fixed variables)
    x: u16,			// Desired Width
    y: u16,			// Desired Height
    bpp: u8,			// Desired Bits per Pixel (BPP)

    // Current Best Mode (working variables)
    best_mode: Option<ModeDescriptor>,
    min_size_diff: u64,		// Square of the distance from the desired size
    min_bpp_diff: u8,		// Difference from the desired bpp
}

impl DesiredSize {
    // Returns the initial value.
    fn new(x: u16, y: u16, bpp: u8) -> Self {
	Self {
	    x,
	    y,
	    bpp,
	    best_mode: None,		// = No mode is examined.
	    min_size_diff: u64::MAX,	// = Theoretically worst value
	    min_bpp_diff: u8::MAX,	// = Theoretically worst value
	}
    }

    // Returns the square of the distance from the desired size.
    fn size_diff(&self, x: u16, y: u16) -> u64 {
	let x_diff = self.x.abs_diff(x) as u64;
	let y_diff = self.y.abs_diff(y) as u64;
	x_diff * x_diff + y_diff * y_diff
    }

    // Returns the difference from the desired bits per pixel (bpp).
    fn bpp_diff(&self, bpp: u8) -> u8 {
	self.bpp.abs_diff(bpp)
    }

    // If given (x, y, bpp) are equal to the desired numbers, returns true.
    // Otherwise, if given (x, y, bpp) are better than the current best mode,
    // save the mode.  Then, returns false.
    fn does_match(&mut self, mode: ModeDescriptor, x: u16, y: u16, bpp: u8)
		  -> bool {
	if self.x == x && self.y == y && self.bpp == bpp {
	    self.min_size_diff = 0;
	    self.min_bpp_diff = 0;
	    self.best_mode = Some(mode);
	    return true;
	}

	let size_diff = self.size_diff(x, y);
	let bpp_diff = self.bpp_diff(bpp);

	if size_diff < self.min_size_diff ||
	    (size_diff == self.min_size_diff && bpp_diff < self.min_bpp_diff) {
	    self.min_size_diff = size_diff;
	    self.min_bpp_diff = bpp_diff;
	    self.best_mode = Some(mode);
	}
	false
    }

    fn into_best_mode(self) -> Option<ModeDescriptor> {
	self.best_mode
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_diff_covers_full_u16_range() {
	let desired_size = DesiredSize::new(u16::MAX, u16::MAX, 8);
	assert_eq!(desired_size.size_diff(0, 0), 2 * 65535 * 65535);
	assert_eq!(desired_size.size_diff(u16::MAX, u16::MAX), 0);
    }
}
