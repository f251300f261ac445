//! Platform-specific limits for the bounded containers.
//!
//! The only value the containers consume is [`MAX_STRING_LENGTH`]: every
//! `BoundedString<N>` must satisfy `N < MAX_STRING_LENGTH` or the build fails.
//! The profile is selected once, at build time, via feature flags:
//!
//! - `embedded-small`: 8-bit microcontrollers (AVR class)
//! - `embedded-medium`: 32-bit microcontrollers (ARM Cortex-M class)
//! - Default: hosted builds (desktop, server, test runners)
//!
//! # Usage
//!
//! ```rust
//! use vsl_foundation::{limits, BoundedString};
//!
//! const NAME_LEN: usize = 16;
//! const _: () = assert!(NAME_LEN < limits::MAX_STRING_LENGTH);
//!
//! let name = BoundedString::<NAME_LEN>::from("sensor-7");
//! assert_eq!(name, "sensor-7");
//! ```

/// Limits that do not depend on the target platform
pub mod fixed {
    /// Longest decimal rendering of an `i32`: 10 digits and a sign
    pub const I32_MAX_DECIMAL_LEN: usize = 11;

    /// Scratch space used while rendering integers (digits, sign and margin)
    pub const INT_SCRATCH_LEN: usize = 12;
}

/// Platform profile for 8-bit microcontrollers
#[cfg(feature = "embedded-small")]
pub mod platform {
    /// Name of the active profile
    pub const PROFILE: &str = "embedded-small";

    /// Exclusive upper bound on `BoundedString` capacity
    pub const MAX_STRING_LENGTH: usize = 128;
}

/// Platform profile for 32-bit microcontrollers
/// Note: embedded-small takes priority if both features are enabled
#[cfg(all(feature = "embedded-medium", not(feature = "embedded-small")))]
pub mod platform {
    /// Name of the active profile
    pub const PROFILE: &str = "embedded-medium";

    /// Exclusive upper bound on `BoundedString` capacity
    pub const MAX_STRING_LENGTH: usize = 4096;
}

/// Platform profile for hosted builds (default)
#[cfg(not(any(feature = "embedded-small", feature = "embedded-medium")))]
pub mod platform {
    /// Name of the active profile
    pub const PROFILE: &str = "hosted";

    /// Exclusive upper bound on `BoundedString` capacity
    pub const MAX_STRING_LENGTH: usize = 65536;
}

// Re-export platform limits at module level for convenience
pub use fixed::*;
pub use platform::*;

/// Compile-time assertions to ensure limits are reasonable
mod assertions {
    use super::{fixed::*, platform::*};

    // The smallest profile must still hold a rendered i32
    const _: () = assert!(
        MAX_STRING_LENGTH > I32_MAX_DECIMAL_LEN,
        "String limit cannot hold a formatted i32"
    );
    const _: () = assert!(
        INT_SCRATCH_LEN > I32_MAX_DECIMAL_LEN,
        "Integer scratch buffer too small"
    );
}
