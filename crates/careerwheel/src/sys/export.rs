use cairo::{Context, Format, ImageSurface};
use radial::{Accents, SurfaceSize, Wheel, backend};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PNG encoding error: {0}")]
    Png(#[from] cairo::IoError),
}

/// Writes `wheel` to a PNG whose pixel size is the wheel size times
/// `pixel_ratio`. When no drawing surface can be created nothing is
/// written and `false` is returned.
pub fn render_png(
    wheel: &Wheel,
    path: &Path,
    pixel_ratio: f64,
    accents: &Accents,
) -> Result<bool, ExportError> {
    let size = SurfaceSize::new(wheel.config().size, pixel_ratio);
    let surface = match ImageSurface::create(Format::ARgb32, size.backing, size.backing) {
        Ok(s) => s,
        Err(e) => {
            log::error!("Failed to create {0}x{0} surface: {1}", size.backing, e);
            return Ok(false);
        }
    };

    let cr = Context::new(&surface)
        .inspect_err(|e| log::error!("Failed to acquire drawing context: {}", e))
        .ok();
    if !backend::draw(cr.as_ref(), wheel, size.ratio, None, accents) {
        return Ok(false);
    }
    drop(cr);

    let mut file = fs_err::File::create(path)?;
    surface.write_to_png(&mut file)?;
    log::info!("Wrote {}x{} wheel to {}", size.backing, size.backing, path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use radial::WheelConfig;

    #[test]
    fn test_render_png_writes_scaled_image() {
        let wheel = Wheel::new(WheelConfig {
            size: 64.0,
            inner_radius: 8.0,
            ..WheelConfig::with_labels(["", "", ""])
        });
        let path = std::env::temp_dir().join(format!(
            "careerwheel-export-{}.png",
            std::process::id()
        ));

        assert!(render_png(&wheel, &path, 2.0, &Accents::default()).unwrap());

        let bytes = fs_err::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        // IHDR width and height, big-endian.
        assert_eq!(u32::from_be_bytes(bytes[16..20].try_into().unwrap()), 128);
        assert_eq!(u32::from_be_bytes(bytes[20..24].try_into().unwrap()), 128);

        let _ = fs_err::remove_file(&path);
    }

    #[test]
    fn test_render_png_reports_io_errors() {
        let wheel = Wheel::new(WheelConfig::with_labels([""]));
        let path = Path::new("/nonexistent-dir/careerwheel/out.png");
        assert!(matches!(
            render_png(&wheel, path, 1.0, &Accents::default()),
            Err(ExportError::Io(_))
        ));
    }
}
