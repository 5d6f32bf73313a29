//! Board file handling: model types and the XML extractor.
//!
//! The input is an EAGLE-style XML board file:
//!
//! ```text
//! <eagle>
//!   <layer number="1" name="Top"/>       required, with "Bottom" and "Dimension"
//!   <wire layer="20" x1=".." y1=".." x2=".." y2=".."/>   board outline
//!   <package name="0402">
//!     <smd layer="1" x=".." y=".." dx=".." dy=".." rot="R90"/>
//!   </package>
//!   <element name="R1" value="10k" package="0402" x=".." y=".." rot="MR180"/>
//! </eagle>
//! ```
//!
//! Extraction is a single pass that never exposes a half-built board: the
//! extractor accumulates into a [`BoardBuilder`] and only a fully indexed
//! [`BoardInfo`] ever reaches the caller.

pub mod error;
pub mod extract;
pub mod model;

pub use error::{BoardError, BoardResult};
pub use extract::Extractor;
pub use model::{BoardBuilder, BoardInfo, Bounds, Component, Pad};
