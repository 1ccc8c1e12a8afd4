pub mod sink;
pub mod traits;
