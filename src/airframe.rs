use thiserror::Error;

use crate::constants::DRAG_COEFF_BASE;
use crate::drag;

// ---------------------------------------------------------------------------
// Airframe configuration
// ---------------------------------------------------------------------------

/// Rejected airframe configuration values.
///
/// Construction and setters are the one place the model validates input;
/// per-call queries stay permissive and rely on numerical guards instead.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("drag coefficient must be positive and finite, got {0}")]
    InvalidDragCoefficient(f64),
    #[error("cross-sectional area must be positive and finite, got {0} m^2")]
    InvalidArea(f64),
}

/// Which drag-coefficient law the airframe uses.
///
/// `Fixed` keeps the configured base coefficient at every Mach number (the
/// minimal static model); `MachDependent` applies the transonic ramp and
/// supersonic logarithmic growth on top of it and is the canonical choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragLaw {
    Fixed,
    #[default]
    MachDependent,
}

/// Long-lived aerodynamic configuration of a projectile: base drag
/// coefficient and reference cross-sectional area.
///
/// Fields are private and mutate only through the explicit setters; no
/// query on this type writes state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Airframe {
    drag_coefficient: f64, // dimensionless, at reference conditions
    cross_section: f64,    // m^2
    drag_law: DragLaw,
}

impl Airframe {
    /// Airframe with the canonical Mach-dependent drag law.
    pub fn new(drag_coefficient: f64, cross_section: f64) -> Result<Self, ConfigError> {
        Self::with_drag_law(drag_coefficient, cross_section, DragLaw::default())
    }

    /// Airframe with an explicit drag-law selection.
    pub fn with_drag_law(
        drag_coefficient: f64,
        cross_section: f64,
        drag_law: DragLaw,
    ) -> Result<Self, ConfigError> {
        validate_coefficient(drag_coefficient)?;
        validate_area(cross_section)?;
        Ok(Self {
            drag_coefficient,
            cross_section,
            drag_law,
        })
    }

    /// Base drag coefficient.
    pub fn drag_coefficient(&self) -> f64 {
        self.drag_coefficient
    }

    /// Reference cross-sectional area, m^2.
    pub fn cross_section(&self) -> f64 {
        self.cross_section
    }

    pub fn drag_law(&self) -> DragLaw {
        self.drag_law
    }

    pub fn set_drag_coefficient(&mut self, drag_coefficient: f64) -> Result<(), ConfigError> {
        validate_coefficient(drag_coefficient)?;
        self.drag_coefficient = drag_coefficient;
        Ok(())
    }

    pub fn set_cross_section(&mut self, cross_section: f64) -> Result<(), ConfigError> {
        validate_area(cross_section)?;
        self.cross_section = cross_section;
        Ok(())
    }

    pub fn set_drag_law(&mut self, drag_law: DragLaw) {
        self.drag_law = drag_law;
    }

    /// Drag coefficient at a Mach number under the configured law.
    pub fn drag_coefficient_at(&self, mach: f64) -> f64 {
        match self.drag_law {
            DragLaw::Fixed => self.drag_coefficient,
            DragLaw::MachDependent => drag::dynamic_drag_from(self.drag_coefficient, mach),
        }
    }
}

impl Default for Airframe {
    /// Reference projectile: baseline coefficient, 10 cm diameter circle.
    fn default() -> Self {
        Self {
            drag_coefficient: DRAG_COEFF_BASE,
            cross_section: 0.007_854,
            drag_law: DragLaw::default(),
        }
    }
}

fn validate_coefficient(cd: f64) -> Result<(), ConfigError> {
    if cd.is_finite() && cd > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDragCoefficient(cd))
    }
}

fn validate_area(area: f64) -> Result<(), ConfigError> {
    if area.is_finite() && area > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidArea(area))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nonpositive_area() {
        assert_eq!(
            Airframe::new(0.3, 0.0).unwrap_err(),
            ConfigError::InvalidArea(0.0)
        );
        assert!(Airframe::new(0.3, -0.01).is_err());
    }

    #[test]
    fn rejects_nonfinite_coefficient() {
        assert!(Airframe::new(f64::NAN, 0.01).is_err());
        assert!(Airframe::new(f64::INFINITY, 0.01).is_err());
        assert!(Airframe::new(-0.1, 0.01).is_err());
    }

    #[test]
    fn setters_validate_and_mutate() {
        let mut af = Airframe::new(0.3, 0.01).unwrap();
        af.set_drag_coefficient(0.5).unwrap();
        assert_eq!(af.drag_coefficient(), 0.5);
        assert!(af.set_cross_section(-1.0).is_err());
        assert_eq!(af.cross_section(), 0.01); // untouched on rejection
    }

    #[test]
    fn fixed_law_ignores_mach() {
        let af = Airframe::with_drag_law(0.42, 0.01, DragLaw::Fixed).unwrap();
        assert_eq!(af.drag_coefficient_at(0.3), 0.42);
        assert_eq!(af.drag_coefficient_at(2.5), 0.42);
    }

    #[test]
    fn mach_dependent_law_rises_through_transonic() {
        let af = Airframe::new(0.295, 0.01).unwrap();
        assert!(af.drag_coefficient_at(1.0) > af.drag_coefficient_at(0.5));
    }
}
