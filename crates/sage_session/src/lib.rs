//! Pieces shared by every stage of the compiler: source handling, spans and
//! the target platform description.

pub mod platform;
pub mod sourcemap;
pub mod span;
