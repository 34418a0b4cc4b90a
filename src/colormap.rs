use std::fmt;

use arrayvec::ArrayVec;
use colorgrad::Gradient;

/// Number of discrete samples every built-in colormap defines.
pub const NATIVE_SAMPLES: u32 = 256;

/// A resolved colormap: a gradient plus the native resolution it is sampled
/// at. Sampling maps index `i` to position `i / (N - 1)` of the gradient's
/// [0, 1] domain, so the row always covers both endpoints.
pub struct Colormap {
    name: String,
    gradient: Box<dyn Gradient>,
    samples: u32,
    reversed: bool,
}

impl Colormap {
    pub(crate) fn new(name: &str, gradient: Box<dyn Gradient>, reversed: bool) -> Self {
        Colormap {
            name: name.to_string(),
            gradient,
            samples: NATIVE_SAMPLES,
            reversed,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The native resolution N.
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Color at index `i` of the sample range, as RGBA bytes.
    pub fn color_at(&self, index: u32) -> [u8; 4] {
        let mut t = index as f32 / (self.samples - 1) as f32;
        if self.reversed {
            t = 1.0 - t;
        }
        self.gradient.at(t).to_rgba8()
    }

    /// The sample buffer: one row of `samples()` RGBA pixels, flattened.
    pub fn sample_row(&self) -> Vec<u8> {
        (0..self.samples)
            .flat_map(|i| ArrayVec::from(self.color_at(i)).into_iter())
            .collect()
    }
}

impl fmt::Debug for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Colormap")
            .field("name", &self.name)
            .field("samples", &self.samples)
            .field("reversed", &self.reversed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::registry;
    use pretty_assertions::assert_eq;

    #[test]
    fn row_is_n_rgba_pixels() {
        let cmap = registry::resolve_spec("plasma").unwrap();
        assert_eq!(cmap.sample_row().len(), cmap.samples() as usize * 4);
    }

    #[test]
    fn row_is_deterministic() {
        let cmap = registry::resolve_spec("viridis").unwrap();
        assert_eq!(cmap.sample_row(), cmap.sample_row());
    }

    #[test]
    fn presets_are_opaque() {
        let cmap = registry::resolve_spec("plasma").unwrap();
        let row = cmap.sample_row();
        assert!(row.chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn row_covers_both_endpoints() {
        let cmap = registry::resolve_spec("plasma").unwrap();
        assert_eq!(&cmap.color_at(0)[..], &cmap.sample_row()[..4]);
        let last = (cmap.samples() - 1) as usize * 4;
        assert_eq!(
            &cmap.color_at(cmap.samples() - 1)[..],
            &cmap.sample_row()[last..]
        );
        assert_ne!(cmap.color_at(0), cmap.color_at(cmap.samples() - 1));
    }
}
