use target_lexicon::{Architecture, OperatingSystem, Triple};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    #[error("{0} target architecture unsupported")]
    ArchUnsupported(Architecture),

    #[error("{0} operating system unsupported")]
    OsUnsupported(OperatingSystem),
}

/// Process-exit convention of the compilation target.
///
/// The code generator reads the exit syscall number from here rather than
/// hard-coding it, so adding another syscall-based target is a matter of
/// extending [`Platform::for_target`].
#[derive(Debug, Clone)]
pub struct Platform {
    pub target: Triple,
    pub exit_syscall: u32,
}

impl Platform {
    /// The platform for the machine the compiler is running on.
    pub fn host() -> Result<Self, PlatformError> {
        Self::for_target(Triple::host())
    }

    pub fn for_target(target: Triple) -> Result<Self, PlatformError> {
        match target.architecture {
            Architecture::X86_64 => {}
            other => return Err(PlatformError::ArchUnsupported(other)),
        }

        let exit_syscall = match target.operating_system {
            OperatingSystem::Linux => 60,
            other => return Err(PlatformError::OsUnsupported(other)),
        };

        Ok(Self {
            target,
            exit_syscall,
        })
    }
}
