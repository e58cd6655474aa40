pub mod orders;
pub mod summary;
pub mod traits;

// Re-export
pub use orders::FileOrderSource;
pub use summary::FileSummarySink;
pub use traits::{OrderSource, SummarySink};
