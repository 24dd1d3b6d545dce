//! Configuration for the refresh controller.
//!
//! Defaults reproduce the reference pull-to-refresh feel: a 100-unit
//! activation threshold, a damping factor of 3 and the usual settle timings.
//! Hosts can override any subset from TOML:
//!
//! ```
//! use lattice_refresh::RefreshConfig;
//!
//! let config = RefreshConfig::from_toml_str(r#"
//! activation_threshold = 120
//! completion_settle_delay_ms = 800
//! footer_enabled = false
//! "#).unwrap();
//!
//! assert_eq!(config.activation_threshold, 120);
//! assert_eq!(config.damping_factor, 3.0);
//! assert!(!config.footer_enabled);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::error::{RefreshError, Result};

/// Default activation threshold in density-independent units.
pub const DEFAULT_ACTIVATION_THRESHOLD: u32 = 100;

/// Resting height of a collapsed header. Never zero, so the header row stays
/// attached to the layout and keeps producing attach/detach events.
pub const DEFAULT_COLLAPSED_HEIGHT: u32 = 1;

/// Default divisor applied to raw drag distance.
pub const DEFAULT_DAMPING_FACTOR: f32 = 3.0;

/// Default duration of the status indicator flip, in milliseconds.
pub const DEFAULT_INDICATOR_ROTATION_MS: u64 = 150;

/// Default duration of the settle animation after a drag is released.
pub const DEFAULT_RELEASE_SETTLE_MS: u64 = 300;

/// Default duration of the expand animation for a programmatic refresh.
pub const DEFAULT_PROGRAMMATIC_EXPAND_MS: u64 = 500;

/// Default pause between a completed refresh and the return to normal.
pub const DEFAULT_COMPLETION_SETTLE_DELAY_MS: u64 = 600;

/// Tunables for the refresh controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Header height past which a release triggers a refresh.
    pub activation_threshold: u32,
    /// Height of the collapsed header.
    pub collapsed_height: u32,
    /// Divisor applied to the accumulated drag distance.
    pub damping_factor: f32,
    /// Duration of the status indicator flip. Presentation only.
    pub indicator_rotation_ms: u64,
    /// Duration of the height animation after a release.
    pub release_settle_ms: u64,
    /// Duration of the expand animation for `set_refreshing(true)`.
    pub programmatic_expand_ms: u64,
    /// Pause after a completed refresh before returning to normal.
    pub completion_settle_delay_ms: u64,
    /// Easing applied to every height animation.
    pub easing: Easing,
    /// Whether the header sentinel is injected initially.
    pub header_enabled: bool,
    /// Whether the footer sentinel is injected initially.
    pub footer_enabled: bool,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            activation_threshold: DEFAULT_ACTIVATION_THRESHOLD,
            collapsed_height: DEFAULT_COLLAPSED_HEIGHT,
            damping_factor: DEFAULT_DAMPING_FACTOR,
            indicator_rotation_ms: DEFAULT_INDICATOR_ROTATION_MS,
            release_settle_ms: DEFAULT_RELEASE_SETTLE_MS,
            programmatic_expand_ms: DEFAULT_PROGRAMMATIC_EXPAND_MS,
            completion_settle_delay_ms: DEFAULT_COMPLETION_SETTLE_DELAY_MS,
            easing: Easing::default(),
            header_enabled: true,
            footer_enabled: true,
        }
    }
}

impl RefreshConfig {
    /// Parse a configuration from TOML. Missing keys take their defaults.
    ///
    /// The result is validated before it is returned.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values describe a usable controller.
    pub fn validate(&self) -> Result<()> {
        if self.collapsed_height == 0 {
            return Err(RefreshError::invalid_config(
                "collapsed_height must be at least 1",
            ));
        }
        if self.activation_threshold <= self.collapsed_height {
            return Err(RefreshError::invalid_config(format!(
                "activation_threshold ({}) must exceed collapsed_height ({})",
                self.activation_threshold, self.collapsed_height
            )));
        }
        if !(self.damping_factor.is_finite() && self.damping_factor > 0.0) {
            return Err(RefreshError::invalid_config(format!(
                "damping_factor must be a positive number, got {}",
                self.damping_factor
            )));
        }
        Ok(())
    }

    /// Convert the density-independent threshold into physical units.
    ///
    /// `scale_factor` is the display's pixels-per-unit ratio.
    pub fn with_scale_factor(mut self, scale_factor: f32) -> Self {
        let scaled = (self.activation_threshold as f32 * scale_factor).round() as u32;
        self.activation_threshold = scaled.max(self.collapsed_height + 1);
        self
    }

    /// Set the activation threshold.
    pub fn with_activation_threshold(mut self, threshold: u32) -> Self {
        self.activation_threshold = threshold;
        self
    }

    /// Set the completion settle delay.
    pub fn with_completion_settle_delay(mut self, delay: Duration) -> Self {
        self.completion_settle_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Enable or disable the sentinels.
    pub fn with_sentinels(mut self, header: bool, footer: bool) -> Self {
        self.header_enabled = header;
        self.footer_enabled = footer;
        self
    }

    /// Duration of the status indicator flip.
    pub fn indicator_rotation(&self) -> Duration {
        Duration::from_millis(self.indicator_rotation_ms)
    }

    /// Duration of the height animation after a release.
    pub fn release_settle(&self) -> Duration {
        Duration::from_millis(self.release_settle_ms)
    }

    /// Duration of the programmatic expand animation.
    pub fn programmatic_expand(&self) -> Duration {
        Duration::from_millis(self.programmatic_expand_ms)
    }

    /// Pause after a completed refresh before returning to normal.
    pub fn completion_settle_delay(&self) -> Duration {
        Duration::from_millis(self.completion_settle_delay_ms)
    }
}
