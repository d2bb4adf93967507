use std::ffi::OsStr;
use std::process::Command;

#[derive(thiserror::Error, Debug)]
pub enum LinkerError {
    #[error("couldn't run linker: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "linker exited with code {code} and stderr output:\n{}",
        String::from_utf8_lossy(.stderr)
    )]
    Exited { code: i32, stderr: Vec<u8> },

    #[error(
        "linker terminated with stderr output:\n{}",
        String::from_utf8_lossy(.stderr)
    )]
    Terminated { stderr: Vec<u8> },
}

/// The emitted code exports `_start` and exits via syscall, so objects are
/// linked directly with `ld` rather than through a C compiler driver (which
/// would supply its own `_start`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linker {
    Ld,
}

impl Linker {
    pub fn link<P0: AsRef<OsStr>, P1: AsRef<OsStr>>(
        &self,
        obj_files: &[P0],
        output: P1,
    ) -> Result<(), LinkerError> {
        let mut cmd = match self {
            Self::Ld => {
                let mut cmd = Command::new("ld");

                cmd.arg("-o");
                cmd.arg(output);

                cmd.args(obj_files);

                cmd
            }
        };

        let output = cmd.output()?;

        if output.status.success() {
            Ok(())
        } else {
            match output.status.code() {
                Some(code) => Err(LinkerError::Exited {
                    code,
                    stderr: output.stderr,
                }),

                None => Err(LinkerError::Terminated {
                    stderr: output.stderr,
                }),
            }
        }
    }
}
