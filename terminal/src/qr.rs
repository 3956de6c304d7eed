use std::io;
use std::path::{Path, PathBuf};

use shorten_core::QrImage;

/// Write the decoded image to `path`, adding an extension matching its media
/// type when `path` has none. Returns `Ok(None)` when the image is not a
/// base64 `data:` URI and there is nothing to write.
pub fn save(image: &QrImage, path: &Path) -> io::Result<Option<PathBuf>> {
    let (_, bytes) = match image.decode() {
        Ok(decoded) => decoded,
        Err(err) => {
            tracing::warn!(error = %err, "QR image cannot be saved");
            return Ok(None);
        }
    };

    let target = match (path.extension(), image.extension()) {
        (None, Some(ext)) => path.with_extension(ext),
        _ => path.to_path_buf(),
    };
    std::fs::write(&target, bytes)?;
    tracing::info!(path = %target.display(), "saved QR code");
    Ok(Some(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("shorten-qr-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn adds_extension_from_media_type() {
        let dir = scratch_dir("ext");
        let image = QrImage("data:image/svg+xml;base64,PHN2Zy8+".to_string());

        let written = save(&image, &dir.join("code")).unwrap().unwrap();
        assert_eq!(written, dir.join("code.svg"));
        assert_eq!(std::fs::read(&written).unwrap(), b"<svg/>");

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn keeps_explicit_extension() {
        let dir = scratch_dir("keep");
        let image = QrImage("data:image/svg+xml;base64,PHN2Zy8+".to_string());

        let written = save(&image, &dir.join("code.img")).unwrap().unwrap();
        assert_eq!(written, dir.join("code.img"));

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn skips_non_data_uri() {
        let image = QrImage("https://example.com/qr.png".to_string());
        assert_eq!(save(&image, Path::new("unused")).unwrap(), None);
    }
}
