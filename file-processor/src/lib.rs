pub mod download;
pub mod error;
pub mod metadata;
pub mod processor;
pub mod strategies;
pub mod strategy;
pub mod strategy_factory;
pub mod worksheet;

pub use error::ProcessingError;
pub use metadata::FileMetadata;
pub use processor::FileProcessor;
pub use strategy::FileProcessingStrategy;
pub use worksheet::{CellValue, MemoryWorksheet, Worksheet};
