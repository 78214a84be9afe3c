// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Loading**: Poll intervals of the image load waiter
//! - **Layout**: Fixed page bands around the inline comparison box
//! - **Report**: Where the screen list lives on a remote report
//! - **Diagnostics**: Activity buffer bounds

// ==========================================================================
// Loading Defaults
// ==========================================================================

/// Poll interval while an inline comparison waits for its images (ms).
pub const DEFAULT_INLINE_POLL_INTERVAL_MS: u64 = 500;

/// Poll interval while the overlay waits for its images (ms).
pub const DEFAULT_OVERLAY_POLL_INTERVAL_MS: u64 = 100;

/// Shortest accepted poll interval (ms).
pub const MIN_POLL_INTERVAL_MS: u64 = 100;

/// Longest accepted poll interval (ms).
pub const MAX_POLL_INTERVAL_MS: u64 = 500;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Height of the header band the inline box never rises into (px).
pub const DEFAULT_HEADER_BAND_PX: f32 = 140.0;

/// Space kept free below the inline box (px).
pub const DEFAULT_FOOTER_MARGIN_PX: f32 = 25.0;

/// Width of the blend slider bar (px).
pub const DEFAULT_SLIDER_WIDTH_PX: f32 = 300.0;

// ==========================================================================
// Report Defaults
// ==========================================================================

/// Path of the screen list JSON, relative to a remote report base.
pub const DEFAULT_LIST_PATH: &str = "data/JSONData";

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_defaults_within_bounds() {
        for value in [
            DEFAULT_INLINE_POLL_INTERVAL_MS,
            DEFAULT_OVERLAY_POLL_INTERVAL_MS,
        ] {
            assert!((MIN_POLL_INTERVAL_MS..=MAX_POLL_INTERVAL_MS).contains(&value));
        }
    }

    #[test]
    fn diagnostics_default_within_bounds() {
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
    }
}
