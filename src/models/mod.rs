/// Module grid with its reserved mask
pub mod matrix;
/// Symbol parameters and the encode result
pub mod qr_code;

pub use matrix::QrMatrix;
pub use qr_code::{ECLevel, EncodedQr, MaskPattern, Mode, Version};
