// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the carousel's gesture and layout constants.
//!
//! This module is the single source of truth for the tuning constants used
//! across the widget. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: pinch/double-tap zoom bounds for the full-screen viewer
//! - **Gestures**: velocity-to-offset factors for pan and pinch handling
//! - **Dismiss**: pan-to-dismiss threshold and backdrop opacity bounds
//! - **Indicator**: page-dot sizing
//! - **Spinner**: loading placeholder animation

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Unzoomed scale. At this scale a vertical pan drags the overlay towards
/// dismissal instead of repositioning the image.
pub const MIN_SCALE: f32 = 1.0;

/// Maximum zoom scale, also the target of a double-tap zoom.
pub const MAX_SCALE: f32 = 3.0;

// ==========================================================================
// Gesture Factors
// ==========================================================================

/// Pinch velocity contribution per gesture-changed event.
pub const PINCH_VELOCITY_FACTOR: f32 = 0.03;

/// Vertical pan velocity contribution per event while unzoomed
/// (pan-to-dismiss).
pub const DISMISS_VELOCITY_FACTOR: f32 = 0.014;

/// Pan velocity contribution per event while zoomed
/// (pan-to-reposition).
pub const REPOSITION_VELOCITY_FACTOR: f32 = 0.04;

// ==========================================================================
// Dismiss Defaults
// ==========================================================================

/// Vertical offset (in points) beyond which releasing a pan dismisses the
/// full-screen viewer.
pub const DISMISS_OFFSET_THRESHOLD: f32 = 100.0;

/// Backdrop opacity lost per point of vertical drag offset.
pub const OPACITY_PER_POINT: f32 = 0.01;

/// Opacity floor while dragging, so the overlay never fully vanishes
/// before the release decision.
pub const MIN_DISMISS_OPACITY: f32 = 0.1;

// ==========================================================================
// Indicator Defaults
// ==========================================================================

/// Diameter of a page-indicator dot, in logical pixels.
pub const INDICATOR_DOT_SIZE: f32 = 8.0;

/// Horizontal spacing between page-indicator dots.
pub const INDICATOR_DOT_SPACING: f32 = 8.0;

// ==========================================================================
// Spinner Defaults
// ==========================================================================

/// Loading spinner rotation speed in radians per tick.
pub const SPINNER_SPEED: f32 = 0.1;

/// Loading spinner diameter in logical pixels.
pub const SPINNER_SIZE: f32 = 32.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Scale validation
    assert!(MIN_SCALE == 1.0);
    assert!(MAX_SCALE > MIN_SCALE);

    // Gesture factor validation
    assert!(PINCH_VELOCITY_FACTOR > 0.0);
    assert!(DISMISS_VELOCITY_FACTOR > 0.0);
    assert!(REPOSITION_VELOCITY_FACTOR > 0.0);

    // Dismiss validation
    assert!(DISMISS_OFFSET_THRESHOLD > 0.0);
    assert!(MIN_DISMISS_OPACITY > 0.0);
    assert!(MIN_DISMISS_OPACITY < 1.0);
    // A fully released drag (offset 0) must map back to full opacity.
    assert!(DISMISS_OFFSET_THRESHOLD * OPACITY_PER_POINT == 1.0);

    // Indicator validation
    assert!(INDICATOR_DOT_SIZE > 0.0);
    assert!(INDICATOR_DOT_SPACING >= 0.0);

    // Spinner validation
    assert!(SPINNER_SPEED > 0.0);
    assert!(SPINNER_SIZE > 0.0);
};
