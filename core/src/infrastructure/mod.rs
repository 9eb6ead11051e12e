pub mod ocr;
pub mod webhook;
