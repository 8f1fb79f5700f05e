//! Per-layer user parameters, normalized so that extrusion never sees an
//! invalid thickness or placement.

use tracing::debug;

/// Thickness used when a layer's height is absent or unusable.
pub const DEFAULT_THICKNESS: f64 = 2.0;

/// A raw layer height as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ThicknessValue {
    Number(f64),
    Text(String),
}

impl ThicknessValue {
    /// Returns the usable thickness, or `None` if the value does not parse or
    /// is not a finite positive number.
    #[must_use]
    pub fn positive(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        (value.is_finite() && value > 0.0).then_some(value)
    }
}

impl From<f64> for ThicknessValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ThicknessValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for ThicknessValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// How a layer is placed relative to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Starts at the previous layer's top.
    #[default]
    Stack,
    /// Shares the previous layer's base.
    Same,
}

impl Placement {
    /// Parses a placement mode. Only `"same"` is recognized; anything else stacks.
    #[must_use]
    pub fn parse(mode: &str) -> Self {
        match mode {
            "same" => Self::Same,
            "stack" => Self::Stack,
            other => {
                debug!(mode = other, "unrecognized placement, stacking");
                Self::Stack
            }
        }
    }
}

impl From<&str> for Placement {
    fn from(mode: &str) -> Self {
        Self::parse(mode)
    }
}

/// Normalized parameters for one layer.
#[derive(Debug, Clone, Copy, PartialEq)]
///
/// Only [`LayerSpec::new`] builds a spec, so `thickness` is always finite and
/// positive.
pub struct LayerSpec {
    index: usize,
    thickness: f64,
    placement: Placement,
}

impl LayerSpec {
    /// Builds a spec, substituting [`DEFAULT_THICKNESS`] for a missing or
    /// unusable thickness and [`Placement::Stack`] for a missing placement.
    #[must_use]
    pub fn new(index: usize, thickness: Option<&ThicknessValue>, placement: Option<&str>) -> Self {
        let thickness = match thickness.map(|value| (value, value.positive())) {
            Some((_, Some(value))) => value,
            Some((raw, None)) => {
                debug!(layer = index, ?raw, "invalid layer thickness, using default");
                DEFAULT_THICKNESS
            }
            None => DEFAULT_THICKNESS,
        };
        Self {
            index,
            thickness,
            placement: placement.map(Placement::parse).unwrap_or_default(),
        }
    }

    /// Zero-based layer index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Z extent of the layer, always positive.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }
}

/// Builds specs for `num_layers` layers. Entries missing from `heights` or
/// `positions` fall back to the defaults.
#[must_use]
pub fn layer_specs<S: AsRef<str>>(
    num_layers: usize,
    heights: &[ThicknessValue],
    positions: &[S],
) -> Vec<LayerSpec> {
    (0..num_layers)
        .map(|i| LayerSpec::new(i, heights.get(i), positions.get(i).map(AsRef::as_ref)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_thickness() {
        assert_eq!(ThicknessValue::from(3.5).positive(), Some(3.5));
        assert_eq!(ThicknessValue::from(" 1.25 ").positive(), Some(1.25));
        assert_eq!(ThicknessValue::from("4").positive(), Some(4.0));
    }

    #[test]
    fn unusable_thickness_falls_back() {
        for raw in [
            ThicknessValue::from("abc"),
            ThicknessValue::from(""),
            ThicknessValue::from(0.0),
            ThicknessValue::from(-1.0),
            ThicknessValue::from("-3"),
            ThicknessValue::from(f64::NAN),
            ThicknessValue::from("inf"),
        ] {
            let spec = LayerSpec::new(0, Some(&raw), None);
            assert!((spec.thickness() - DEFAULT_THICKNESS).abs() < f64::EPSILON, "{raw:?}");
        }
    }

    #[test]
    fn non_positive_thickness_never_reaches_a_spec() {
        for raw in [-3.0, 0.0, -0.0, f64::NEG_INFINITY] {
            let spec = LayerSpec::new(4, Some(&ThicknessValue::from(raw)), Some("same"));
            assert!(spec.thickness() > 0.0, "{raw}");
            assert_eq!(spec.index(), 4);
            assert_eq!(spec.placement(), Placement::Same);
        }
    }

    #[test]
    fn placement_parsing() {
        assert_eq!(Placement::parse("same"), Placement::Same);
        assert_eq!(Placement::parse("stack"), Placement::Stack);
        assert_eq!(Placement::parse("SAME"), Placement::Stack);
        assert_eq!(Placement::parse("sideways"), Placement::Stack);
        assert_eq!(Placement::default(), Placement::Stack);
    }

    #[test]
    fn specs_default_past_supplied_entries() {
        let heights = [ThicknessValue::from(3.0)];
        let specs = layer_specs(3, &heights, &["stack", "same"]);
        assert_eq!(specs.len(), 3);
        assert!((specs[0].thickness() - 3.0).abs() < f64::EPSILON);
        assert!((specs[1].thickness() - DEFAULT_THICKNESS).abs() < f64::EPSILON);
        assert_eq!(specs[1].placement(), Placement::Same);
        assert_eq!(specs[2].placement(), Placement::Stack);
        assert_eq!(specs.iter().map(LayerSpec::index).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn empty_inputs_give_defaults() {
        let specs = layer_specs::<&str>(2, &[], &[]);
        assert!(specs.iter().all(|s| {
            (s.thickness() - DEFAULT_THICKNESS).abs() < f64::EPSILON
                && s.placement() == Placement::Stack
        }));
    }
}
