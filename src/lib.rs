//! padsheet: per-value PCB placement-assist sheet generator
//!
//! This library converts an EAGLE-style XML board file into a multi-page
//! PDF of placement sheets for hand assembly: one page per distinct
//! (layer, value, name-prefix) group of components, with the group's
//! surface-mount pads highlighted and every other same-layer pad drawn
//! faintly as positional context.
//!
//! # Pipeline
//!
//! ```text
//! board XML ──extract──▶ BoardInfo ──build_sheets──▶ Canvas ──▶ PDF
//! ```
//!
//! The two risky pieces live here: the extractor, which fixes every
//! geometric/logical assumption about the board (rotation direction,
//! mirror-layer swap, coordinate origin), and the transform pipeline that
//! places pads on pages. A wrong assumption in either produces a wrong
//! diagram with no error raised, so both are kept small, pure and heavily
//! tested.
//!
//! # Modules
//!
//! - [`board`] — board model and XML extraction
//! - [`config`] — optional style configuration
//! - [`error`] — configuration error types
//! - [`geom`] — rotation and numeric parsing primitives
//! - [`render`] — pad transforms, sheet layout and PDF output

pub mod board;
pub mod config;
pub mod error;
pub mod geom;
pub mod render;
