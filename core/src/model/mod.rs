pub mod order;
pub mod summary;
