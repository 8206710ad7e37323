/// Answers questions about the operating system the resolver runs on.
pub trait Platform {
    fn is_windows(&self) -> bool;
}

/// The platform this binary was compiled for.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostPlatform;

impl Platform for HostPlatform {
    fn is_windows(&self) -> bool {
        cfg!(windows)
    }
}

/// A platform with a fixed answer, used to force one branch or the other.
#[derive(Debug, Clone, Copy)]
pub struct FixedPlatform {
    pub windows: bool,
}

impl FixedPlatform {
    pub fn windows() -> Self {
        Self { windows: true }
    }

    pub fn unix() -> Self {
        Self { windows: false }
    }
}

impl Platform for FixedPlatform {
    fn is_windows(&self) -> bool {
        self.windows
    }
}
