use std::path::Path;

use sage_backend::{Assembler, AssemblerError, CodegenError, Linker, LinkerError};
use sage_frontend::ast::Program;
use sage_frontend::token::Token;
use sage_frontend::{Lexer, ParseError};
use sage_session::platform::{Platform, PlatformError};
use sage_session::sourcemap::Source;

#[derive(thiserror::Error, Debug)]
pub enum CompilerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Syntax(String),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),

    #[error(transparent)]
    Assembler(#[from] AssemblerError),

    #[error(transparent)]
    Linker(#[from] LinkerError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type CompilerResult<T> = Result<T, CompilerError>;

/// One compilation of one source, front to back. Owns the source text (with
/// its line table, for error locations) and the target platform; each stage
/// fails fast, so the first error aborts the whole build.
pub struct Compilation {
    source: Source,
    platform: Platform,
}

impl Compilation {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> CompilerResult<Self> {
        Ok(Self::with_platform(name, text, Platform::host()?))
    }

    pub fn with_platform(
        name: impl Into<String>,
        text: impl Into<String>,
        platform: Platform,
    ) -> Self {
        Self {
            source: Source::new(name, text),
            platform,
        }
    }

    pub fn tokens(&self) -> Vec<Token> {
        sage_frontend::tokenize(self.source.text())
    }

    pub fn parse(&self) -> CompilerResult<Program> {
        sage_frontend::parse(Lexer::new(self.source.text()))
            .map_err(|err| self.render_syntax_error(err))
    }

    pub fn build_asm(&self) -> CompilerResult<String> {
        let program = self.parse()?;
        let asm = sage_backend::generate(&program, &self.platform)?;
        Ok(asm)
    }

    /// Compiles, assembles and links, leaving intermediate files in
    /// `workdir` and the executable at `output`.
    pub fn build_executable(&self, workdir: &Path, output: &Path) -> CompilerResult<()> {
        let asm = self.build_asm()?;

        let asm_path = workdir.join("out.s");
        std::fs::write(&asm_path, asm)?;

        let obj_path = workdir.join("out.o");
        Assembler::Nasm.assemble(&asm_path, &obj_path)?;
        Linker::Ld.link(&[&obj_path], output)?;

        Ok(())
    }

    fn render_syntax_error(&self, err: ParseError) -> CompilerError {
        let location = match self.source.byte_to_line_col(err.span.start) {
            Some((line, col)) => format!("{}:{line}:{col}", self.source.name()),
            None => self.source.name().to_owned(),
        };

        CompilerError::Syntax(format!("{err} at {location}"))
    }
}
