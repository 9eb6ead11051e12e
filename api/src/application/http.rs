pub mod analysis;
pub mod health;
pub mod ocr;
pub mod server;
