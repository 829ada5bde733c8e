//! Caller identity.

use std::fmt;

/// Effective user id of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity(pub u32);

impl Identity {
    /// The superuser.
    pub const ROOT: Identity = Identity(0);

    /// Effective uid of the current process.
    pub fn effective() -> Self {
        // SAFETY: geteuid takes no arguments, cannot fail and touches no memory we own.
        Identity(unsafe { libc::geteuid() })
    }

    pub fn is_privileged(self) -> bool {
        self == Self::ROOT
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "uid {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_uid_zero_is_privileged() {
        assert!(Identity(0).is_privileged());
        assert!(!Identity(1).is_privileged());
        assert!(!Identity(1000).is_privileged());
        assert!(!Identity(u32::MAX).is_privileged());
    }

    #[test]
    fn test_effective_matches_libc() {
        let expected = unsafe { libc::geteuid() };
        assert_eq!(Identity::effective(), Identity(expected));
    }

    #[test]
    fn test_display() {
        assert_eq!(Identity(1000).to_string(), "uid 1000");
    }
}
