// ABOUTME: Declarative pane size requests and their resolution to pixels.
// ABOUTME: Parses "200px", "30%" and "auto", degrading malformed input to the default.

use std::fmt;
use std::str::FromStr;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Marker for a size that has not been given a pixel value yet (an Auto pane
/// before distribution) and for an absent upper bound.
pub const UNBOUNDED: f64 = f64::INFINITY;

/// A pane size request along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SizeSpec {
    /// Absolute size in pixels
    Fixed(f64),
    /// Percentage of the container extent (30.0 means 30%)
    Percent(f64),
    /// Absorb whatever space is left over
    #[default]
    Auto,
}

impl SizeSpec {
    /// Resolve this spec against the container extent.
    ///
    /// Auto yields `fallback`, as does any spec whose pixel value comes out
    /// negative or non-finite. Pane sizes pass [`UNBOUNDED`] as the fallback,
    /// bounds pass their default edge (0 for min, [`UNBOUNDED`] for max).
    pub fn resolve(&self, extent: f64, fallback: f64) -> f64 {
        let px = match *self {
            SizeSpec::Fixed(px) => px,
            SizeSpec::Percent(pct) => pct / 100.0 * extent,
            SizeSpec::Auto => return fallback,
        };
        if px.is_finite() && px >= 0.0 {
            px
        } else {
            fallback
        }
    }

    /// Parse without failing. Malformed text becomes [`SizeSpec::Auto`].
    pub fn parse_lenient(text: &str) -> Self {
        match text.parse() {
            Ok(spec) => spec,
            Err(e) => {
                tracing::warn!("{}, falling back to auto", e);
                SizeSpec::Auto
            }
        }
    }
}

/// Resolve an optional spec; an absent spec behaves like Auto.
pub fn resolve(spec: Option<&SizeSpec>, extent: f64, fallback: f64) -> f64 {
    spec.map_or(fallback, |s| s.resolve(extent, fallback))
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SizeSpecError {
    #[error("Malformed size spec {0:?}")]
    Malformed(String),

    #[error("Size spec {0:?} is negative or not finite")]
    OutOfRange(String),
}

impl FromStr for SizeSpec {
    type Err = SizeSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.eq_ignore_ascii_case("auto") {
            return Ok(SizeSpec::Auto);
        }

        let (number, percent) = match text.strip_suffix('%') {
            Some(head) => (head, true),
            None => (strip_px(text).unwrap_or(text), false),
        };
        let value: f64 = number
            .trim()
            .parse()
            .map_err(|_| SizeSpecError::Malformed(s.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(SizeSpecError::OutOfRange(s.to_string()));
        }

        Ok(if percent {
            SizeSpec::Percent(value)
        } else {
            SizeSpec::Fixed(value)
        })
    }
}

fn strip_px(text: &str) -> Option<&str> {
    let split = text.len().checked_sub(2)?;
    let (head, tail) = (text.get(..split)?, text.get(split..)?);
    tail.eq_ignore_ascii_case("px").then_some(head)
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeSpec::Fixed(px) => write!(f, "{}px", px),
            SizeSpec::Percent(pct) => write!(f, "{}%", pct),
            SizeSpec::Auto => f.write_str("auto"),
        }
    }
}

impl Serialize for SizeSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SizeSpec::Fixed(px) => serializer.serialize_f64(*px),
            other => serializer.collect_str(other),
        }
    }
}

/// Wire forms accepted for a size spec. Anything else is swallowed so one
/// bad pane never fails a whole config file.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSizeSpec {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for SizeSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawSizeSpec::deserialize(deserializer)? {
            RawSizeSpec::Number(px) => SizeSpec::Fixed(px),
            RawSizeSpec::Text(text) => SizeSpec::parse_lenient(&text),
            RawSizeSpec::Other(_) => {
                tracing::warn!("Unsupported size spec value, falling back to auto");
                SizeSpec::Auto
            }
        })
    }
}
