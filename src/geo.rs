//! Geographic-to-planar projection for map pins
//!
//! A linear projection from decimal degrees to a bounded 2D surface,
//! centered on a reference coordinate with independently tunable spans
//! per axis (a degree of longitude at Berlin's latitude covers less
//! ground than a degree of latitude). Output is clamped to 5%..95% of
//! the surface so pins never sit flush against the container edge.
//!
//! The client places pins two ways - percentages inside a responsive
//! box, and absolute pixels inside a fixed canvas - so both conventions
//! are exposed over the same underlying math.

use crate::catalog::{Coordinate, VenueId};

/// Lower clamp bound as a fraction of the drawing surface.
const CLAMP_MIN: f64 = 0.05;
/// Upper clamp bound as a fraction of the drawing surface.
const CLAMP_MAX: f64 = 0.95;

/// Position on the drawing surface. Units depend on the projection
/// operation: percent of container, or pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarPosition {
    pub x: f64,
    pub y: f64,
}

/// Linear map from geographic coordinates to a bounded plane.
#[derive(Debug, Clone, Copy)]
pub struct MapProjection {
    center: Coordinate,
    /// Degrees of longitude covered by the full surface width.
    lon_span: f64,
    /// Degrees of latitude covered by the full surface height.
    lat_span: f64,
}

impl MapProjection {
    pub fn new(center: Coordinate, lon_span: f64, lat_span: f64) -> Self {
        Self {
            center,
            lon_span,
            lat_span,
        }
    }

    /// The projection the client uses: centered on Berlin, 0.3° of
    /// longitude across, 0.16° of latitude down.
    pub fn berlin() -> Self {
        Self::new(Coordinate::new(52.52, 13.405), 0.3, 0.16)
    }

    /// Project to percent-of-container, each axis clamped to [5, 95].
    pub fn percent_position(&self, coordinate: Coordinate) -> PlanarPosition {
        let (x, y) = self.unit_offset(coordinate);
        PlanarPosition {
            x: x.clamp(CLAMP_MIN, CLAMP_MAX) * 100.0,
            y: y.clamp(CLAMP_MIN, CLAMP_MAX) * 100.0,
        }
    }

    /// Project to absolute pixels on a fixed canvas, each axis clamped
    /// to [5%, 95%] of the canvas dimension.
    pub fn pixel_position(
        &self,
        coordinate: Coordinate,
        canvas_width: f64,
        canvas_height: f64,
    ) -> PlanarPosition {
        let (x, y) = self.unit_offset(coordinate);
        PlanarPosition {
            x: x.clamp(CLAMP_MIN, CLAMP_MAX) * canvas_width,
            y: y.clamp(CLAMP_MIN, CLAMP_MAX) * canvas_height,
        }
    }

    // Offset from center normalized to 0..1 over each span. North maps
    // to smaller y (screen coordinates grow downward).
    fn unit_offset(&self, coordinate: Coordinate) -> (f64, f64) {
        let x = (coordinate.longitude - self.center.longitude + self.lon_span / 2.0) / self.lon_span;
        let y = (self.center.latitude - coordinate.latitude + self.lat_span / 2.0) / self.lat_span;
        (x, y)
    }
}

/// Single-selection state for map pins: selecting a pin deselects any
/// previously selected one, clicking the selected pin deselects it.
#[derive(Debug, Clone, Default)]
pub struct PinSelection {
    selected: Option<VenueId>,
}

impl PinSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a click on a pin. Returns whether the pin is selected
    /// after the click.
    pub fn click(&mut self, id: &VenueId) -> bool {
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
            false
        } else {
            self.selected = Some(id.clone());
            true
        }
    }

    pub fn selected(&self) -> Option<&VenueId> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &VenueId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}
