pub mod analysis;
pub mod common;
pub mod ocr;
