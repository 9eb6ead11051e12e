pub mod entities;
pub mod envelope;
pub mod normalizer;
pub mod parser;
pub mod ports;
pub mod sanitizer;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use normalizer::{AnalysisOutcome, OutcomeKind};
pub use ports::*;
pub use value_objects::*;
