use common::model::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Deserialize, Debug, Serialize, Eq, Hash, PartialEq)]
pub enum MarkerType {
    #[serde(rename = "START")]
    Start,
    #[serde(rename = "END")]
    End,
}

impl fmt::Display for MarkerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::End => "end",
        };
        write!(f, "{s}")
    }
}

/// A typed marker token found in a file, with the 1-based position of the
/// token's first character.
#[derive(Copy, Clone, Deserialize, Debug, Serialize, Eq, Hash, PartialEq)]
pub struct Marker {
    pub marker_type: MarkerType,
    pub position: Position,
}

impl Marker {
    pub fn new(marker_type: MarkerType, line: u32, col: u32) -> Self {
        Self {
            marker_type,
            position: Position::new(line, col),
        }
    }
}

/// A matched start/end marker pair. Built only by the pairing engine; for
/// every produced pair the start is on an earlier line than the end.
#[derive(Copy, Clone, Deserialize, Debug, Serialize, Eq, Hash, PartialEq)]
pub struct MarkerPair {
    pub start: Marker,
    pub end: Marker,
}
