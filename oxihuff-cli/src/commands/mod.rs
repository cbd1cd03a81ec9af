//! Command implementations for OxiHuff CLI.

pub mod compress;
pub mod table;
pub mod train;

pub use compress::{cmd_compress, cmd_decompress};
pub use table::cmd_table;
pub use test::cmd_test;
pub use train::cmd_train;
