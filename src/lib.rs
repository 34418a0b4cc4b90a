use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbaImage;
use log::*;

pub mod colormap;
pub mod registry;

pub use colormap::Colormap;

/// Specifier used when none is given on the command line.
pub const DEFAULT_SPEC: &str = "plasma";

/// Default destination for a colormap resolved from the attribute path
/// `attr`. Consumers that load the texture by a fixed name usually expect
/// plain `colormap.bmp`; renaming is left to the caller.
pub fn default_outfile(attr: &str) -> String {
    format!("colormap_{}.bmp", attr)
}

/// Resolve `spec`, sample the colormap at its native resolution and write
/// the row to `outfile`, or to [`default_outfile`] when `outfile` is `None`.
/// Returns the path written. The destination is overwritten if it exists.
pub fn export(spec: &str, outfile: Option<&str>) -> Result<PathBuf> {
    let (module, attr) = registry::split_spec(spec);
    let cmap = registry::resolve(module, attr)?;
    let dest = outfile
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default_outfile(attr)));
    info!("Sampling {} at {} points", cmap.name(), cmap.samples());
    let row = cmap.sample_row();
    save_texture(cmap.samples(), row, &dest)?;
    Ok(dest)
}

/// Export every built-in colormap to its default file name in the current
/// directory. Stops at the first failure.
pub fn export_all() -> Result<Vec<PathBuf>> {
    registry::preset::NAMES
        .iter()
        .map(|name| export(name, None))
        .collect()
}

/// Encode the sample buffer as a `width`x1 image, with the format inferred
/// from the destination's file extension.
fn save_texture(width: u32, row: Vec<u8>, dest: &Path) -> Result<()> {
    info!("Saving {} {}x1", dest.display(), width);
    let img = RgbaImage::from_raw(width, 1, row)
        .context("sample buffer does not match the image dimensions")?;
    img.save(dest)
        .with_context(|| format!("cannot write {}", dest.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::registry::ResolveError;
    use crate::*;
    use image::GenericImageView;
    use pretty_assertions::assert_eq;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("colormap-tex-{}-{}", std::process::id(), name))
    }

    #[test]
    fn default_outfile_embeds_the_attribute_path() {
        assert_eq!(default_outfile("plasma"), "colormap_plasma.bmp");
        assert_eq!(default_outfile("preset.magma"), "colormap_preset.magma.bmp");
    }

    #[test]
    fn export_writes_a_one_row_texture() {
        let dest = scratch("plasma.bmp");
        let written = export("plasma", Some(dest.to_str().unwrap())).unwrap();
        assert_eq!(written, dest);
        let img = image::open(&dest).unwrap();
        assert_eq!(img.dimensions(), (256, 1));
        std::fs::remove_file(dest).unwrap();
    }

    #[test]
    fn export_accepts_qualified_specifiers() {
        let dest = scratch("qualified.bmp");
        export("colorgrad:preset.viridis", Some(dest.to_str().unwrap())).unwrap();
        let img = image::open(&dest).unwrap();
        assert_eq!(img.dimensions(), (256, 1));
        std::fs::remove_file(dest).unwrap();
    }

    #[test]
    fn export_is_idempotent() {
        let first = scratch("idem-1.bmp");
        let second = scratch("idem-2.bmp");
        export("inferno", Some(first.to_str().unwrap())).unwrap();
        export("inferno", Some(second.to_str().unwrap())).unwrap();
        assert_eq!(
            std::fs::read(&first).unwrap(),
            std::fs::read(&second).unwrap()
        );
        std::fs::remove_file(first).unwrap();
        std::fs::remove_file(second).unwrap();
    }

    #[test]
    fn unknown_module_propagates() {
        let err = export("nonexistent_module:x", None).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ResolveError>(),
            Some(&ResolveError::UnknownModule("nonexistent_module".to_string()))
        );
    }

    #[test]
    fn unknown_attribute_propagates() {
        let err = export("plasma.nonexistent_attr", None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ResolveError>(),
            Some(ResolveError::UnknownAttribute { .. })
        ));
    }

    #[test]
    fn unwritable_destination_is_an_io_error() {
        let dest = scratch("missing-dir").join("colormap.bmp");
        assert!(export("plasma", Some(dest.to_str().unwrap())).is_err());
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let dest = scratch("plasma.notanimage");
        assert!(export("plasma", Some(dest.to_str().unwrap())).is_err());
    }
}
