// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! JSON import/export of colorings.
//!
//! The wire format is an array of `{ "coord": { "x", "y", "isUp" },
//! "color": "white" | "black" | "gray" }` objects. Export is canonical:
//! descending `y`, then ascending `x`, then upward cells before downward
//! cells at the same coordinates.
//!
//! Import is lenient about colors and strict about structure: entries whose
//! color is not one of the three valid names are silently dropped, while a
//! payload that does not parse is rejected as a whole. No partial coloring
//! is ever produced from a malformed payload.

use serde::{Deserialize, Serialize};

use crate::coloring::{Color, Coloring};
use crate::error::EngineError;
use crate::geometry::Cell;

#[derive(Debug, Serialize, Deserialize)]
struct WireCoord {
    x: i32,
    y: i32,
    #[serde(rename = "isUp")]
    is_up: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireEntry {
    coord: WireCoord,
    color: String,
}

impl WireEntry {
    fn cell(&self) -> Cell {
        if self.coord.is_up {
            Cell::up(self.coord.x, self.coord.y)
        } else {
            Cell::down(self.coord.x, self.coord.y)
        }
    }
}

/// Serialize a coloring in canonical order.
pub fn coloring_to_json(coloring: &Coloring) -> Result<String, EngineError> {
    let wire: Vec<WireEntry> = coloring
        .canonical_entries()
        .into_iter()
        .map(|(cell, color)| WireEntry {
            coord: WireCoord {
                x: cell.x,
                y: cell.y,
                is_up: cell.is_up(),
            },
            color: color.name().to_string(),
        })
        .collect();
    Ok(serde_json::to_string(&wire)?)
}

/// Parse a coloring payload.
///
/// Entries with unknown color names are dropped; a later entry for the same
/// cell replaces an earlier one. An unparsable payload fails atomically.
pub fn coloring_from_json(payload: &str) -> Result<Coloring, EngineError> {
    let wire: Vec<WireEntry> = serde_json::from_str(payload)?;
    let mut coloring = Coloring::new();
    for entry in wire {
        if let Some(color) = Color::from_name(&entry.color) {
            coloring.insert(entry.cell(), color);
        }
    }
    Ok(coloring)
}
