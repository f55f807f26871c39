//! Stream decorators: transforms that wrap an owned stream and rewrite the
//! bytes flowing through it.

pub mod compress;
pub mod encrypt;

pub use compress::*;
pub use encrypt::*;
