//! Default placement per floating component

use geometry::{Alignment, PreferredSide};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::PlacementRequest;

/// Floating components that call into the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloatingKind {
    Tooltip,
    Dropdown,
    Select,
}

impl FloatingKind {
    pub const ALL: [FloatingKind; 3] = [
        FloatingKind::Tooltip,
        FloatingKind::Dropdown,
        FloatingKind::Select,
    ];

    /// The request the component uses when nothing is configured
    pub fn default_request(self) -> PlacementRequest {
        match self {
            FloatingKind::Tooltip => PlacementRequest::new(PreferredSide::Top, Alignment::Center)
                .with_offset(8.0)
                .with_padding(8.0),
            FloatingKind::Dropdown => {
                PlacementRequest::new(PreferredSide::Bottom, Alignment::Start)
                    .with_offset(4.0)
                    .with_padding(8.0)
            }
            FloatingKind::Select => PlacementRequest::new(PreferredSide::Bottom, Alignment::Start)
                .with_offset(2.0)
                .with_padding(8.0),
        }
    }

    /// Arrow size in pixels, if the component draws one
    pub fn arrow_size(self) -> Option<f64> {
        match self {
            FloatingKind::Tooltip => Some(8.0),
            FloatingKind::Dropdown | FloatingKind::Select => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FloatingKind::Tooltip => "tooltip",
            FloatingKind::Dropdown => "dropdown",
            FloatingKind::Select => "select",
        }
    }
}

impl fmt::Display for FloatingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_defaults() {
        let req = FloatingKind::Tooltip.default_request();
        assert_eq!(req.preferred_side, PreferredSide::Top);
        assert_eq!(req.alignment, Alignment::Center);
        assert_eq!(req.offset, 8.0);
        assert_eq!(FloatingKind::Tooltip.arrow_size(), Some(8.0));
    }

    #[test]
    fn test_menus_open_downward_without_arrow() {
        for kind in [FloatingKind::Dropdown, FloatingKind::Select] {
            let req = kind.default_request();
            assert_eq!(req.preferred_side, PreferredSide::Bottom);
            assert_eq!(req.alignment, Alignment::Start);
            assert!(kind.arrow_size().is_none());
        }
    }
}
