//! Host platform, as far as wrapper selection cares

/// Platform family deciding between `mvnw` and `mvnw.cmd`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows, which needs the `.cmd` wrapper
    Windows,
    /// Everything else
    Unix,
}

impl Platform {
    /// Platform this binary was built for
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }
}
