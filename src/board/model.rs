//! In-memory board model.
//!
//! Built once by the extractor and read-only afterwards. Ownership runs one
//! way: [`BoardInfo`] owns the component list, each [`Component`] owns its
//! pads, and every lookup index holds positions into the component list
//! rather than copies, so there is exactly one mutation path and it closes
//! when the builder finishes.

use indexmap::IndexMap;

/// One surface-mount contact of a package, in package-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Pad {
    /// X offset from the package origin.
    pub x: f64,

    /// Y offset from the package origin.
    pub y: f64,

    /// Pad width. Non-negative and finite.
    pub width: f64,

    /// Pad height. Non-negative and finite.
    pub height: f64,

    /// Rotation in degrees. `None` means unrotated.
    pub angle: Option<f64>,
}

/// One placed instance of a package on the board.
///
/// `layer` is the *resolved* physical layer: the nominal layer of the first
/// pad encountered, swapped between the top and bottom copper ids when the
/// placement is mirrored. All pads of a component are treated as co-planar
/// on that one layer, a deliberate simplification inherited from the source
/// format's usage in practice.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// X position in board coordinates.
    pub x: f64,

    /// Y position in board coordinates.
    pub y: f64,

    /// Declared name (e.g., "R101"). Unique and non-empty.
    pub name: String,

    /// Leading alphabetic run of the name when the name ends in digits
    /// (e.g., "R" for "R101"). `None` when the name has no numeric suffix.
    pub prefix: Option<String>,

    /// Declared value (e.g., "10k"). Free-form, required.
    pub value: String,

    /// Owned pads. Never empty: zero-pad packages are skipped during
    /// extraction and never reach the model.
    pub pads: Vec<Pad>,

    /// Placement rotation in degrees. `None` means unrotated.
    pub angle: Option<f64>,

    /// Resolved physical layer id, as the XML spells it.
    pub layer: String,
}

/// Board outline bounding box, derived from the dimension layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum x over all outline segment endpoints.
    pub xmin: f64,
    /// Maximum x over all outline segment endpoints.
    pub xmax: f64,
    /// Minimum y over all outline segment endpoints.
    pub ymin: f64,
    /// Maximum y over all outline segment endpoints.
    pub ymax: f64,
}

impl Bounds {
    /// Board width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Board height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }
}

/// The whole-board context: outline, layer ids, components and indices.
///
/// Constructed through [`BoardBuilder`] so that the lookup indices are
/// computed in one finalisation pass and partially populated state is never
/// observable.
#[derive(Debug)]
pub struct BoardInfo {
    /// Board outline bounding box.
    pub bounds: Bounds,

    /// Layer id of the "Dimension" outline layer.
    pub dimension_layer: String,

    /// Layer id of the "Top" copper layer.
    pub top_layer: String,

    /// Layer id of the "Bottom" copper layer.
    pub bottom_layer: String,

    components: Vec<Component>,
    name_index: IndexMap<String, usize>,
    value_index: IndexMap<String, Vec<usize>>,
    layer_index: IndexMap<String, Vec<usize>>,
    layer_value_index: IndexMap<(String, String), Vec<usize>>,
}

impl BoardInfo {
    /// All components, in board-file order.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Looks up a component by name.
    ///
    /// Duplicate names are not treated as an error during extraction; the
    /// last one parsed wins here.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Component> {
        self.name_index.get(name).map(|&i| &self.components[i])
    }

    /// Every distinct component value, in first-seen order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.value_index.keys().map(String::as_str)
    }

    /// Components sharing a value, in board-file order.
    pub fn with_value<'a>(&'a self, value: &str) -> impl Iterator<Item = &'a Component> {
        self.value_index
            .get(value)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&i| &self.components[i])
    }

    /// Components resolved to a layer, in board-file order.
    pub fn on_layer<'a>(&'a self, layer: &str) -> impl Iterator<Item = &'a Component> {
        self.layer_index
            .get(layer)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&i| &self.components[i])
    }

    /// Components resolved to a layer that also share a value.
    ///
    /// Returns `None` when no component matches, so callers can distinguish
    /// "nothing to draw" without allocating.
    #[must_use]
    pub fn on_layer_with_value(&self, layer: &str, value: &str) -> Option<Vec<&Component>> {
        self.layer_value_index
            .get(&(layer.to_string(), value.to_string()))
            .map(|ids| ids.iter().map(|&i| &self.components[i]).collect())
    }
}

/// Accumulates components, then computes the lookup indices in one pass.
#[derive(Debug)]
pub struct BoardBuilder {
    bounds: Bounds,
    dimension_layer: String,
    top_layer: String,
    bottom_layer: String,
    components: Vec<Component>,
}

impl BoardBuilder {
    /// Creates a builder for a board with known outline and layer ids.
    #[must_use]
    pub fn new(
        bounds: Bounds,
        dimension_layer: impl Into<String>,
        top_layer: impl Into<String>,
        bottom_layer: impl Into<String>,
    ) -> Self {
        Self {
            bounds,
            dimension_layer: dimension_layer.into(),
            top_layer: top_layer.into(),
            bottom_layer: bottom_layer.into(),
            components: Vec::new(),
        }
    }

    /// Id of the top copper layer, needed for mirror resolution mid-build.
    #[must_use]
    pub fn top_layer(&self) -> &str {
        &self.top_layer
    }

    /// Id of the bottom copper layer, needed for mirror resolution mid-build.
    #[must_use]
    pub fn bottom_layer(&self) -> &str {
        &self.bottom_layer
    }

    /// Appends one extracted component.
    pub fn push(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Finalises the board: computes all four indices and freezes the model.
    #[must_use]
    pub fn finish(self) -> BoardInfo {
        let mut name_index = IndexMap::new();
        let mut value_index: IndexMap<String, Vec<usize>> = IndexMap::new();
        let mut layer_index: IndexMap<String, Vec<usize>> = IndexMap::new();
        let mut layer_value_index: IndexMap<(String, String), Vec<usize>> = IndexMap::new();

        for (i, c) in self.components.iter().enumerate() {
            // Last parse wins on a name clash.
            name_index.insert(c.name.clone(), i);
            value_index.entry(c.value.clone()).or_default().push(i);
            layer_index.entry(c.layer.clone()).or_default().push(i);
            layer_value_index
                .entry((c.layer.clone(), c.value.clone()))
                .or_default()
                .push(i);
        }

        BoardInfo {
            bounds: self.bounds,
            dimension_layer: self.dimension_layer,
            top_layer: self.top_layer,
            bottom_layer: self.bottom_layer,
            components: self.components,
            name_index,
            value_index,
            layer_index,
            layer_value_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad() -> Pad {
        Pad {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 0.5,
            angle: None,
        }
    }

    fn component(name: &str, value: &str, layer: &str) -> Component {
        Component {
            x: 0.0,
            y: 0.0,
            name: name.to_string(),
            prefix: None,
            value: value.to_string(),
            pads: vec![pad()],
            angle: None,
            layer: layer.to_string(),
        }
    }

    fn builder() -> BoardBuilder {
        let bounds = Bounds {
            xmin: 0.0,
            xmax: 100.0,
            ymin: 0.0,
            ymax: 50.0,
        };
        BoardBuilder::new(bounds, "20", "1", "16")
    }

    #[test]
    fn bounds_derive_width_and_height() {
        let b = Bounds {
            xmin: -5.0,
            xmax: 95.0,
            ymin: 10.0,
            ymax: 60.0,
        };
        assert!((b.width() - 100.0).abs() < f64::EPSILON);
        assert!((b.height() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn indices_resolve_to_same_components() {
        let mut b = builder();
        b.push(component("R1", "10k", "1"));
        b.push(component("R2", "10k", "16"));
        b.push(component("C1", "100n", "1"));
        let bi = b.finish();

        assert_eq!(bi.components().len(), 3);
        assert_eq!(bi.by_name("R2").unwrap().layer, "16");
        assert_eq!(bi.with_value("10k").count(), 2);
        assert_eq!(bi.on_layer("1").count(), 2);

        let subset = bi.on_layer_with_value("1", "10k").unwrap();
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].name, "R1");
        assert!(bi.on_layer_with_value("16", "100n").is_none());
    }

    #[test]
    fn values_iterate_in_first_seen_order() {
        let mut b = builder();
        b.push(component("R1", "10k", "1"));
        b.push(component("C1", "100n", "1"));
        b.push(component("R2", "10k", "1"));
        let bi = b.finish();

        let values: Vec<_> = bi.values().collect();
        assert_eq!(values, vec!["10k", "100n"]);
    }

    #[test]
    fn duplicate_name_last_parse_wins() {
        let mut b = builder();
        b.push(component("R1", "10k", "1"));
        b.push(component("R1", "22k", "16"));
        let bi = b.finish();

        let c = bi.by_name("R1").unwrap();
        assert_eq!(c.value, "22k");
        // Both placements still exist in the component list.
        assert_eq!(bi.components().len(), 2);
    }
}
