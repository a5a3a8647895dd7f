// Turns an image file (or its bytes) into the RGBA PixelBuffer the magnifier reads.
// Any format the `image` crate understands works; everything is converted to RGBA8.

use crate::error::Error;
use crate::pixels::{PixelBuffer, PixelSource};
use image::DynamicImage;
use log::info;
use std::path::Path;

/// Decode the file at `path`.
pub fn load_path(path: &Path) -> Result<PixelBuffer, Error> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::ImageDecode(format!("{}: {e}", path.display())))?;
    let buf = decode_bytes(&bytes).map_err(|e| match e {
        Error::ImageDecode(msg) => Error::ImageDecode(format!("{}: {msg}", path.display())),
        other => other,
    })?;
    info!("Loaded {} ({}x{})", path.display(), buf.width(), buf.height());
    Ok(buf)
}

/// Decode an in-memory image, guessing the format from its header.
pub fn decode_bytes(bytes: &[u8]) -> Result<PixelBuffer, Error> {
    let img = image::load_from_memory(bytes).map_err(|e| Error::ImageDecode(e.to_string()))?;
    into_buffer(img)
}

fn into_buffer(img: DynamicImage) -> Result<PixelBuffer, Error> {
    let rgba = img.into_rgba8();
    let (w, h) = rgba.dimensions();
    PixelBuffer::new(w, h, rgba.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(img: &RgbaImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn decodes_png_to_rgba() {
        let mut img = RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 255]));
        img.put_pixel(2, 1, Rgba([200, 100, 50, 128]));
        let buf = decode_bytes(&png_bytes(&img)).unwrap();
        assert_eq!((buf.width(), buf.height()), (3, 2));
        assert_eq!(buf.pixel_at(2, 1), Some(Rgba([200, 100, 50, 128])));
        assert_eq!(buf.pixel_at(0, 0), Some(Rgba([1, 2, 3, 255])));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = decode_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, Error::ImageDecode(_)));
    }

    #[test]
    fn load_path_decodes_file_contents() {
        let img = RgbaImage::from_pixel(2, 5, Rgba([10, 20, 30, 255]));
        let path = std::env::temp_dir().join(format!("pixel-picker-load-{}.png", std::process::id()));
        std::fs::write(&path, png_bytes(&img)).unwrap();
        let buf = load_path(&path);
        std::fs::remove_file(&path).unwrap();
        let buf = buf.unwrap();
        assert_eq!((buf.width(), buf.height()), (2, 5));
        assert_eq!(buf.pixel_at(1, 4), Some(Rgba([10, 20, 30, 255])));
    }

    #[test]
    fn bad_file_error_names_the_path() {
        let path = std::env::temp_dir().join(format!("pixel-picker-bad-{}.png", std::process::id()));
        std::fs::write(&path, b"not a png").unwrap();
        let err = load_path(&path);
        std::fs::remove_file(&path).unwrap();
        match err {
            Err(Error::ImageDecode(msg)) => assert!(msg.contains("pixel-picker-bad-")),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_a_decode_error() {
        let err = load_path(Path::new("/nonexistent/picture.png")).unwrap_err();
        assert!(matches!(err, Error::ImageDecode(_)));
    }
}
