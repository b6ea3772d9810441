//! Adapter directory layout: `adapters/<direction>/<component>` or the flat
//! `adapters/<component>`.

use serde::Serialize;

const ADAPTER_MARKERS: &[&str] = &["adapters", "adapter", "infra", "infrastructure"];

/// Hexagonal direction of an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterDirection {
    /// Driving side: HTTP handlers, CLI, consumers.
    Inbound,
    /// Driven side: databases, external APIs, publishers.
    Outbound,
}

impl AdapterDirection {
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "inbound" => Some(Self::Inbound),
            "outbound" => Some(Self::Outbound),
            _ => None,
        }
    }
}

fn after_marker(path: &str) -> Option<(&str, Vec<&str>)> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let idx = segments
        .iter()
        .position(|segment| ADAPTER_MARKERS.contains(segment))?;
    Some((segments[idx], segments[idx + 1..].to_vec()))
}

/// Identifier of the adapter subtree `path` belongs to.
///
/// The marker segment plus the direction and component when a direction is
/// present, else the marker plus the component. `None` outside any adapter
/// directory.
pub fn adapter_subtree(path: &str) -> Option<String> {
    let (marker, rest) = after_marker(path)?;
    let take = match rest.first() {
        Some(first) if AdapterDirection::from_segment(first).is_some() => 2,
        _ => 1,
    };
    let mut parts = vec![marker];
    parts.extend(rest.iter().take(take));
    Some(parts.join("/"))
}

/// The segment right after the adapter marker, when it names a direction.
pub fn adapter_direction(path: &str) -> Option<AdapterDirection> {
    let (_, rest) = after_marker(path)?;
    rest.first().and_then(|segment| AdapterDirection::from_segment(segment))
}
