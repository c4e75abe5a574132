//! Hook configuration.
//!
//! Every field has a default matching the host's stock markup, so an empty
//! object (or no config at all) yields a working hook.

use board_core::Side;
use board_rules::GridRules;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, HookError};

/// Configuration for a mounted board hook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HookConfig {
    /// Enables press-drag-release moves. When false only click-click
    /// selection is active.
    pub drag_enabled: bool,
    /// Name of the outbound positional selection event.
    pub event_name: String,
    /// Cell attribute carrying the row label.
    pub row_attribute: String,
    /// Cell attribute carrying the column label.
    pub col_attribute: String,
    /// Cell attribute carrying the occupant code.
    pub val_attribute: String,
    /// Selector for board cells, relative to the board table.
    pub cell_selector: String,
    /// Class toggled on the cell under a dragged piece.
    pub hover_class: String,
    /// Background color flashed on a rejected destination.
    pub reject_color: String,
    /// Duration of the rejection flash in milliseconds.
    pub reject_duration_ms: u32,
    /// Opacity of the floating drag proxy.
    pub proxy_opacity: f64,
    /// Stacking order of the floating drag proxy.
    pub proxy_z_index: i32,
    /// Only this side's pieces may move. `null` lets both sides move.
    pub side_to_move: Option<Side>,
}

impl Default for HookConfig {
    fn default() -> Self {
        HookConfig {
            drag_enabled: true,
            event_name: "select_position".to_string(),
            row_attribute: "phx-value-row".to_string(),
            col_attribute: "phx-value-col".to_string(),
            val_attribute: "phx-value-val".to_string(),
            cell_selector: "tbody td".to_string(),
            hover_class: "drop-hover".to_string(),
            reject_color: "#ffdddd".to_string(),
            reject_duration_ms: 300,
            proxy_opacity: 0.95,
            proxy_z_index: 9999,
            side_to_move: Some(Side::Player),
        }
    }
}

impl HookConfig {
    /// Configuration for the click-only variant.
    pub fn click_only() -> Self {
        HookConfig {
            drag_enabled: false,
            ..HookConfig::default()
        }
    }

    /// Parses and validates a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, HookError> {
        let config: HookConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every field holds a usable value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = [
            ("eventName", &self.event_name),
            ("rowAttribute", &self.row_attribute),
            ("colAttribute", &self.col_attribute),
            ("valAttribute", &self.val_attribute),
            ("cellSelector", &self.cell_selector),
            ("hoverClass", &self.hover_class),
        ];
        if let Some((field, _)) = names.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::EmptyField(*field));
        }
        if self.reject_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if !(0.0..=1.0).contains(&self.proxy_opacity) {
            return Err(ConfigError::OpacityOutOfRange(self.proxy_opacity));
        }
        Ok(())
    }

    /// The movement rules this configuration selects.
    pub fn rules(&self) -> GridRules {
        match self.side_to_move {
            Some(side) => GridRules::with_side_to_move(side),
            None => GridRules::new(),
        }
    }
}
