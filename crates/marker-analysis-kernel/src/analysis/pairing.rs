use crate::model::marker::{Marker, MarkerPair, MarkerType};

/// Fold a file-ordered marker sequence into start/end pairs.
///
/// A single optional slot holds the earliest unmatched start: further
/// starts while one is open are ignored, as is an end with no open start.
/// An end on the same line as the open start discards both without
/// producing a pair. A trailing unmatched start yields no pair.
pub fn pair_markers(markers: &[Marker]) -> Vec<MarkerPair> {
    let mut pending: Option<Marker> = None;
    let mut pairs = vec![];

    for marker in markers {
        match marker.marker_type {
            MarkerType::Start => {
                if pending.is_none() {
                    pending = Some(*marker);
                }
            }
            MarkerType::End => {
                if let Some(start) = pending.take() {
                    if marker.position.line != start.position.line {
                        pairs.push(MarkerPair {
                            start,
                            end: *marker,
                        });
                    }
                }
            }
        }
    }
    pairs
}
