// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Colors, the cyclic color algebra, and partial colorings.

pub mod assignment;
pub mod color;

pub use assignment::Coloring;
pub use color::{rel_diff, Color, NCOLORS};
