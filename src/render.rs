//! Renderers. They only read `size()` and `get(x, y)` from the matrix.

use std::fmt::Write as _;
use std::path::Path;

use image::{GrayImage, ImageResult, Luma};

use crate::models::QrMatrix;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// SVG document with one `<path>` holding a closed square per dark module.
///
/// The quiet zone is measured in modules.
pub fn to_svg_string(matrix: &QrMatrix, module_size: usize, quiet_zone: usize) -> String {
    let size = matrix.size();
    let margin = quiet_zone * module_size;
    let total = size * module_size + 2 * margin;

    let mut path = String::new();
    for y in 0..size {
        let py = margin + y * module_size;
        for x in 0..size {
            if matrix.get(x, y) {
                let px = margin + x * module_size;
                let _ = write!(
                    path,
                    "M{px} {py}H{}V{}H{px}Z",
                    px + module_size,
                    py + module_size
                );
            }
        }
    }

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {total} {total}\" shape-rendering=\"crispEdges\">\
         <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\
         <path d=\"{path}\" fill=\"#000000\"/>\
         </svg>"
    )
}

/// Two characters per module, one line per row
pub fn to_text(matrix: &QrMatrix) -> String {
    let size = matrix.size();
    let mut out = String::with_capacity(size * (size * 2 * 3 + 1));
    for y in 0..size {
        for x in 0..size {
            out.push_str(if matrix.get(x, y) { "\u{2588}\u{2588}" } else { "  " });
        }
        out.push('\n');
    }
    out
}

/// Grayscale raster, `module_size` pixels per module with a light quiet zone
pub fn to_image(matrix: &QrMatrix, module_size: u32, quiet_zone: u32) -> GrayImage {
    let size = matrix.size() as u32;
    let margin = quiet_zone * module_size;
    let total = size * module_size + 2 * margin;

    GrayImage::from_fn(total, total, |px, py| {
        if px < margin || py < margin || module_size == 0 {
            return LIGHT;
        }
        let (x, y) = ((px - margin) / module_size, (py - margin) / module_size);
        if x < size && y < size && matrix.get(x as usize, y as usize) {
            DARK
        } else {
            LIGHT
        }
    })
}

/// Render and write a PNG (format picked from the extension by `image`)
pub fn save_png(
    matrix: &QrMatrix,
    path: impl AsRef<Path>,
    module_size: u32,
    quiet_zone: u32,
) -> ImageResult<()> {
    to_image(matrix, module_size, quiet_zone).save(path)
}
