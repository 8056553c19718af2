pub mod listing;
pub mod model;

// Re-export commonly used types/functions for consumers
pub use listing::{disassemble_range, Line};
pub use model::{load_raw_bin, read_word, Image, Segment};
