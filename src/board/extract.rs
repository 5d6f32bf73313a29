//! XML board file → [`BoardInfo`] extraction.
//!
//! Works over a parsed [`roxmltree::Document`], scanning descendants rather
//! than assuming a fixed nesting depth, so boards exported with or without
//! the full `drawing/board/...` wrapper hierarchy extract the same way.
//!
//! Two modelling simplifications are carried over deliberately and must be
//! preserved for compatible output:
//!
//! - A component's resolved layer is taken from the *first* pad of its
//!   package; later pads are assumed co-planar.
//! - Mirroring swaps the resolved layer between the top and bottom copper
//!   ids and nothing else. Pad-local geometry is never reflected, so
//!   mirrored footprints render approximately.

use std::collections::HashMap;
use std::path::Path;

use regex::Regex;
use roxmltree::{Document, Node};

use crate::geom;

use super::error::{BoardError, BoardResult};
use super::model::{BoardBuilder, BoardInfo, Bounds, Component, Pad};

/// Rotation descriptor: optional mirror marker, "R", integer degrees, and
/// an optional fractional part that is parsed but discarded.
const ANGLE_PATTERN: &str = r"^(M?)R(\d+)(?:\.\d+)?$";

/// Name prefix: a leading alphabetic run followed by a digit suffix, with
/// optional whitespace around both. Names without digits have no prefix.
const PREFIX_PATTERN: &str = r"^\s*([A-Za-z]+)\s*\d+\s*$";

/// A parsed rotation descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Rotation {
    /// Whether the descriptor carried the leading `M` mirror marker.
    mirrored: bool,
    /// Integer degree value. Fractional degrees are truncated, matching the
    /// established output of this grammar (arguably a precision bug, kept
    /// as-is for compatibility).
    degrees: f64,
}

/// Extracts [`BoardInfo`] models from board XML.
///
/// Holds the compiled descriptor grammars so repeated extractions don't
/// recompile them.
#[derive(Debug)]
pub struct Extractor {
    angle_re: Regex,
    prefix_re: Regex,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    /// Creates an extractor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            angle_re: Regex::new(ANGLE_PATTERN).expect("angle pattern is valid"),
            prefix_re: Regex::new(PREFIX_PATTERN).expect("prefix pattern is valid"),
        }
    }

    /// Reads and extracts a board file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not well-formed XML,
    /// or fails any of the checks described on [`Extractor::extract`].
    pub fn extract_file(&self, path: &Path) -> BoardResult<BoardInfo> {
        let text =
            std::fs::read_to_string(path).map_err(|e| BoardError::file_read(path, e))?;
        self.extract(&text)
    }

    /// Extracts a board model from XML text.
    ///
    /// # Errors
    ///
    /// - [`BoardError::Xml`] — the text is not well-formed XML.
    /// - [`BoardError::MissingLayer`] — no "Dimension", "Top" or "Bottom"
    ///   layer definition.
    /// - [`BoardError::MalformedBoard`] — fewer than two outline segments
    ///   on the dimension layer.
    /// - [`BoardError::MissingAttribute`] / [`BoardError::BadAttribute`] —
    ///   a required attribute is absent or non-numeric.
    /// - [`BoardError::UnresolvedPackage`] — an element references an
    ///   undefined package.
    /// - [`BoardError::BadAngle`] — a rotation descriptor does not match
    ///   the `[M]R<degrees>` grammar.
    pub fn extract(&self, text: &str) -> BoardResult<BoardInfo> {
        let doc = Document::parse(text)?;
        let root = doc.root_element();

        let dimension_layer = layer_number(root, "Dimension", "20")?;
        let top_layer = layer_number(root, "Top", "1")?;
        let bottom_layer = layer_number(root, "Bottom", "16")?;

        let bounds = outline_bounds(root, &dimension_layer)?;
        tracing::debug!(
            width = bounds.width(),
            height = bounds.height(),
            "Computed board outline"
        );

        // Package definitions by name; an element's package reference must
        // resolve against these.
        let packages: HashMap<&str, Node> = root
            .descendants()
            .filter(|n| n.has_tag_name("package"))
            .filter_map(|n| n.attribute("name").map(|name| (name, n)))
            .collect();

        let mut builder = BoardBuilder::new(bounds, dimension_layer, top_layer, bottom_layer);

        for element in root.descendants().filter(|n| n.has_tag_name("element")) {
            if let Some(component) = self.extract_element(element, &packages, &builder)? {
                builder.push(component);
            }
        }

        Ok(builder.finish())
    }

    /// Extracts one `element` placement, or `None` when its package has no
    /// surface-mount pads (through-hole-only and silkscreen-only packages
    /// carry nothing worth drawing on a placement sheet).
    fn extract_element(
        &self,
        element: Node,
        packages: &HashMap<&str, Node>,
        builder: &BoardBuilder,
    ) -> BoardResult<Option<Component>> {
        let name = match element.attribute("name") {
            Some(n) if !n.is_empty() => n,
            _ => return Err(BoardError::missing_attribute("element", "name")),
        };

        let prefix = self
            .prefix_re
            .captures(name)
            .map(|caps| caps[1].to_string());

        let value = element
            .attribute("value")
            .ok_or(BoardError::missing_attribute("element", "value"))?;
        let package_name = element
            .attribute("package")
            .ok_or(BoardError::missing_attribute("element", "package"))?;

        let package = packages
            .get(package_name)
            .ok_or_else(|| BoardError::unresolved_package(package_name))?;

        let smds: Vec<Node> = package
            .children()
            .filter(|n| n.has_tag_name("smd"))
            .collect();
        if smds.is_empty() {
            tracing::info!(
                package = package_name,
                component = name,
                "Skipping component: package has no surface-mount pads"
            );
            return Ok(None);
        }

        let x = float_attr(element, "element", "x")?;
        let y = float_attr(element, "element", "y")?;

        let rotation = element
            .attribute("rot")
            .map(|rot| self.parse_rotation(rot))
            .transpose()?;
        let angle = rotation.map(|r| r.degrees);
        let mirrored = rotation.is_some_and(|r| r.mirrored);

        let mut pads = Vec::with_capacity(smds.len());
        let mut layer = String::new();
        for (index, smd) in smds.into_iter().enumerate() {
            let nominal = smd
                .attribute("layer")
                .ok_or(BoardError::missing_attribute("smd", "layer"))?;

            // First pad fixes the component's layer; mirroring only swaps
            // the copper side, never the pad geometry. The zero-pad case
            // returned above, so this branch always runs.
            if index == 0 {
                layer = if mirrored && nominal == builder.top_layer() {
                    builder.bottom_layer()
                } else if mirrored && nominal == builder.bottom_layer() {
                    builder.top_layer()
                } else {
                    nominal
                }
                .to_string();
            }

            // Pads reuse the element descriptor grammar; a mirror marker
            // here is accepted and ignored, as it always has been.
            let pad_angle = smd
                .attribute("rot")
                .map(|rot| self.parse_rotation(rot))
                .transpose()?
                .map(|r| r.degrees);

            pads.push(Pad {
                x: float_attr(smd, "smd", "x")?,
                y: float_attr(smd, "smd", "y")?,
                width: float_attr(smd, "smd", "dx")?,
                height: float_attr(smd, "smd", "dy")?,
                angle: pad_angle,
            });
        }

        Ok(Some(Component {
            x,
            y,
            name: name.to_string(),
            prefix,
            value: value.to_string(),
            pads,
            angle,
            layer,
        }))
    }

    /// Parses a `[M]R<degrees>[.frac]` rotation descriptor.
    fn parse_rotation(&self, descriptor: &str) -> BoardResult<Rotation> {
        let caps = self
            .angle_re
            .captures(descriptor)
            .ok_or_else(|| BoardError::bad_angle(descriptor))?;
        let degrees: f64 = caps[2]
            .parse()
            .map_err(|_| BoardError::bad_angle(descriptor))?;
        Ok(Rotation {
            mirrored: &caps[1] == "M",
            degrees,
        })
    }
}

/// Finds a layer definition by name and returns its number.
///
/// The definition element itself is required; its `number` attribute falls
/// back to the conventional EAGLE default when absent.
fn layer_number(root: Node, name: &str, default: &str) -> BoardResult<String> {
    let layer = root
        .descendants()
        .find(|n| n.has_tag_name("layer") && n.attribute("name") == Some(name))
        .ok_or_else(|| BoardError::missing_layer(name))?;
    Ok(layer.attribute("number").unwrap_or(default).to_string())
}

/// Computes the bounding box over every outline segment on the dimension
/// layer, independently in x and y.
fn outline_bounds(root: Node, dimension_layer: &str) -> BoardResult<Bounds> {
    let wires: Vec<Node> = root
        .descendants()
        .filter(|n| {
            n.has_tag_name("wire") && n.attribute("layer") == Some(dimension_layer)
        })
        .collect();

    // One segment cannot bound a rectangle in this model.
    if wires.len() < 2 {
        return Err(BoardError::malformed_board(format!(
            "expected at least two dimension layer wires, found {}",
            wires.len()
        )));
    }

    let mut bounds = Bounds {
        xmin: f64::INFINITY,
        xmax: f64::NEG_INFINITY,
        ymin: f64::INFINITY,
        ymax: f64::NEG_INFINITY,
    };
    for wire in wires {
        let x1 = float_attr(wire, "wire", "x1")?;
        let y1 = float_attr(wire, "wire", "y1")?;
        let x2 = float_attr(wire, "wire", "x2")?;
        let y2 = float_attr(wire, "wire", "y2")?;
        bounds.xmin = bounds.xmin.min(x1).min(x2);
        bounds.xmax = bounds.xmax.max(x1).max(x2);
        bounds.ymin = bounds.ymin.min(y1).min(y2);
        bounds.ymax = bounds.ymax.max(y1).max(y2);
    }
    Ok(bounds)
}

/// Reads a required finite numeric attribute.
fn float_attr(node: Node, element: &'static str, attr: &'static str) -> BoardResult<f64> {
    let raw = node
        .attribute(attr)
        .ok_or(BoardError::missing_attribute(element, attr))?;
    geom::parse_finite(raw).ok_or_else(|| BoardError::bad_attribute(attr, raw))
}
