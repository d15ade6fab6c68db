//! Command implementations.

pub mod confidence;
pub mod migrate;

pub use self::confidence::execute_confidence;
pub use self::migrate::execute_migrate;
