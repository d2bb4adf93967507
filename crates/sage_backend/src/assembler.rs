use std::ffi::OsStr;
use std::process::Command;

#[derive(thiserror::Error, Debug)]
pub enum AssemblerError {
    #[error("couldn't run assembler: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "assembler exited with code {code} and stderr output:\n{}",
        String::from_utf8_lossy(.stderr)
    )]
    Exited { code: i32, stderr: Vec<u8> },

    #[error(
        "assembler terminated with stderr output:\n{}",
        String::from_utf8_lossy(.stderr)
    )]
    Terminated { stderr: Vec<u8> },
}

/// An external assembler turning emitted assembly text into a relocatable
/// object. The emitted dialect is NASM's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assembler {
    Nasm,
}

impl Assembler {
    pub fn assemble<P0: AsRef<OsStr>, P1: AsRef<OsStr>>(
        &self,
        asm_file: P0,
        output: P1,
    ) -> Result<(), AssemblerError> {
        let mut cmd = match self {
            Self::Nasm => {
                let mut cmd = Command::new("nasm");

                cmd.args(["-f", "elf64"]);
                cmd.arg(asm_file);

                cmd.arg("-o");
                cmd.arg(output);

                cmd
            }
        };

        let output = cmd.output()?;

        if output.status.success() {
            Ok(())
        } else {
            match output.status.code() {
                Some(code) => Err(AssemblerError::Exited {
                    code,
                    stderr: output.stderr,
                }),

                None => Err(AssemblerError::Terminated {
                    stderr: output.stderr,
                }),
            }
        }
    }
}
