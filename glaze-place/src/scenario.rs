//! JSON positioning scenarios

use anyhow::Result;
use geometry::{Rect, Viewport};
use positioning::{
    compute_arrow_offset, compute_position, ArrowOffset, FloatingKind, PlacementRequest,
    PlacementResult, PositioningConfig,
};
use serde::{Deserialize, Serialize};

/// Either a placement string such as `"bottom-start"` or a full request
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RequestInput {
    Placement(String),
    Full(PlacementRequest),
}

/// One measured layout to place
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub reference: Rect,
    pub floating: Rect,
    pub viewport: Viewport,
    /// Component whose configured defaults fill in the request
    #[serde(default)]
    pub kind: Option<FloatingKind>,
    #[serde(default)]
    pub request: Option<RequestInput>,
    /// Overrides the arrow size configured for `kind`
    #[serde(default)]
    pub arrow_size: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub placement: PlacementResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrow: Option<ArrowOffset>,
}

impl Scenario {
    /// The request to use once config defaults are applied.
    ///
    /// A placement string only sets side and alignment; offset and padding
    /// come from the configured request for `kind`.
    pub fn resolve_request(&self, config: &PositioningConfig) -> Result<PlacementRequest> {
        let base = self
            .kind
            .map(|kind| config.request_for(kind))
            .unwrap_or_default();

        let request = match &self.request {
            None => base,
            Some(RequestInput::Full(request)) => *request,
            Some(RequestInput::Placement(placement)) => {
                let parsed: PlacementRequest = placement.parse()?;
                PlacementRequest {
                    preferred_side: parsed.preferred_side,
                    alignment: parsed.alignment,
                    ..base
                }
            }
        };
        Ok(request)
    }

    pub fn evaluate(&self, config: &PositioningConfig) -> Result<Outcome> {
        let request = self.resolve_request(config)?;
        let placement = compute_position(&self.reference, &self.floating, &self.viewport, &request);

        let arrow_size = self
            .arrow_size
            .or_else(|| self.kind.and_then(|kind| config.arrow_size_for(kind)));
        let arrow = arrow_size.map(|size| {
            let placed = placement.floating_rect(&self.floating);
            compute_arrow_offset(&self.reference, &placed, placement.resolved_side, size)
        });

        tracing::info!(
            request = %request,
            side = %placement.resolved_side,
            flipped = placement.flipped,
            "scenario placed"
        );

        Ok(Outcome { placement, arrow })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geometry::{Alignment, PreferredSide, Side};

    fn scenario(json: &str) -> Scenario {
        serde_json::from_str(json).unwrap()
    }

    const LAYOUT: &str = r#""reference":{"top":700,"left":100,"width":80,"height":30},
        "floating":{"top":0,"left":0,"width":120,"height":200},
        "viewport":{"width":1024,"height":768}"#;

    #[test]
    fn test_full_request() {
        let s = scenario(&format!(
            r#"{{{LAYOUT},"request":{{"preferredSide":"bottom","alignment":"start","offset":8,"boundaryPadding":16}}}}"#
        ));
        let outcome = s.evaluate(&PositioningConfig::default()).unwrap();

        assert_eq!(outcome.placement.resolved_side, Side::Top);
        assert_eq!((outcome.placement.x, outcome.placement.y), (100.0, 492.0));
        assert!(outcome.arrow.is_none());
    }

    #[test]
    fn test_placement_string_takes_kind_spacing() {
        let s = scenario(&format!(r#"{{{LAYOUT},"kind":"tooltip","request":"right-end"}}"#));
        let request = s.resolve_request(&PositioningConfig::default()).unwrap();

        assert_eq!(request.preferred_side, PreferredSide::Right);
        assert_eq!(request.alignment, Alignment::End);
        assert_eq!(request.offset, 8.0);
        assert_eq!(request.boundary_padding, 8.0);
    }

    #[test]
    fn test_kind_adds_arrow() {
        let s = scenario(&format!(r#"{{{LAYOUT},"kind":"tooltip"}}"#));
        let outcome = s.evaluate(&PositioningConfig::default()).unwrap();

        let arrow = outcome.arrow.unwrap();
        assert_eq!(arrow.rotation_degrees, 180.0);
        assert_eq!(arrow.y, 200.0);
    }

    #[test]
    fn test_bad_placement_string() {
        let s = scenario(&format!(r#"{{{LAYOUT},"request":"sideways"}}"#));
        assert!(s.evaluate(&PositioningConfig::default()).is_err());
    }
}
