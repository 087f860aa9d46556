
pub use common::*;
