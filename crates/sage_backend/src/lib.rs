//! The sage backend: assembly text emission and wrappers around the external
//! assembler and linker.

pub mod assembler;
pub mod codegen;
pub mod linker;

pub use assembler::{Assembler, AssemblerError};
pub use codegen::{generate, CodegenError};
pub use linker::{Linker, LinkerError};
