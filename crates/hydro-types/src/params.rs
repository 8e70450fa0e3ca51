use serde::{Deserialize, Serialize};

/// The physical inputs of a rig. Lengths are centimeters.
///
/// This is the single source of truth an editor holds; every derived
/// measurement and every scene part is a pure function of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterVector {
    /// Overall rig width.
    pub width: f64,
    /// Overall rig height.
    pub height: f64,
    /// Number of horizontal growing tubes.
    pub num_tubes: u32,
    /// Planting holes cut into each tube.
    pub holes_per_tube: u32,
    /// Diameter of a planting hole (and of the net pot that sits in it).
    pub hole_size: f64,
    /// Outer tube *diameter*. The name is kept for compatibility with saved
    /// parameter sets.
    pub tube_radius: f64,
    /// Drainage slope, in percent.
    pub slope: f64,
}

impl Default for ParameterVector {
    fn default() -> Self {
        Self {
            width: 120.0,
            height: 220.0,
            num_tubes: 4,
            holes_per_tube: 4,
            hole_size: 5.0,
            tube_radius: 10.0,
            slope: 2.0,
        }
    }
}

impl ParameterVector {
    /// Radius of a main tube in centimeters (`tube_radius` holds the diameter).
    pub fn radius(&self) -> f64 {
        self.tube_radius / 2.0
    }

    /// Read a parameter as a float, for table-driven checks and editors.
    pub fn get(&self, name: ParamName) -> f64 {
        match name {
            ParamName::Width => self.width,
            ParamName::Height => self.height,
            ParamName::NumTubes => self.num_tubes as f64,
            ParamName::HolesPerTube => self.holes_per_tube as f64,
            ParamName::HoleSize => self.hole_size,
            ParamName::TubeRadius => self.tube_radius,
            ParamName::Slope => self.slope,
        }
    }

    /// Check every parameter against its documented bounds.
    ///
    /// The resolver never calls this: out-of-range input flows through the
    /// formulas unchanged. Callers at an input boundary use it to reject a
    /// vector before it reaches the core.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for name in ParamName::ALL {
            let value = self.get(name);
            if !value.is_finite() {
                return Err(ParameterError::NotFinite { name });
            }
            let bounds = name.constraint();
            if value < bounds.min || value > bounds.max {
                return Err(ParameterError::OutOfRange {
                    name,
                    value,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }
        Ok(())
    }
}

/// Names of the parameter vector's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamName {
    Width,
    Height,
    NumTubes,
    HolesPerTube,
    HoleSize,
    TubeRadius,
    Slope,
}

impl ParamName {
    pub const ALL: [ParamName; 7] = [
        ParamName::Width,
        ParamName::Height,
        ParamName::NumTubes,
        ParamName::HolesPerTube,
        ParamName::HoleSize,
        ParamName::TubeRadius,
        ParamName::Slope,
    ];

    /// The field name as it appears in serialized parameter sets.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamName::Width => "width",
            ParamName::Height => "height",
            ParamName::NumTubes => "numTubes",
            ParamName::HolesPerTube => "holesPerTube",
            ParamName::HoleSize => "holeSize",
            ParamName::TubeRadius => "tubeRadius",
            ParamName::Slope => "slope",
        }
    }

    /// Editor bounds and increment for this parameter.
    pub fn constraint(&self) -> ParamConstraint {
        match self {
            ParamName::Width | ParamName::Height => ParamConstraint::new(100.0, 500.0, 5.0),
            ParamName::NumTubes | ParamName::HolesPerTube => ParamConstraint::new(1.0, 10.0, 1.0),
            ParamName::HoleSize => ParamConstraint::new(2.5, 10.0, 0.5),
            ParamName::TubeRadius => ParamConstraint::new(5.0, 20.0, 0.5),
            ParamName::Slope => ParamConstraint::new(0.0, 3.0, 0.1),
        }
    }
}

impl std::fmt::Display for ParamName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive bounds plus the editor step for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamConstraint {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamConstraint {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The full bounds table, in field order.
pub fn constraint_table() -> Vec<(ParamName, ParamConstraint)> {
    ParamName::ALL.iter().map(|n| (*n, n.constraint())).collect()
}

/// Rejection reasons for a parameter vector at an input boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("{name} must be a finite number")]
    NotFinite { name: ParamName },

    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: ParamName,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ParameterVector::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_names_the_field() {
        let params = ParameterVector {
            num_tubes: 11,
            ..ParameterVector::default()
        };
        let err = params.validate().unwrap_err();
        assert_eq!(
            err,
            ParameterError::OutOfRange {
                name: ParamName::NumTubes,
                value: 11.0,
                min: 1.0,
                max: 10.0,
            }
        );
        assert_eq!(err.to_string(), "numTubes = 11 is outside [1, 10]");
    }

    #[test]
    fn test_nan_rejected() {
        let params = ParameterVector {
            slope: f64::NAN,
            ..ParameterVector::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParameterError::NotFinite {
                name: ParamName::Slope
            })
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let params = ParameterVector {
            width: 100.0,
            height: 500.0,
            num_tubes: 1,
            holes_per_tube: 10,
            hole_size: 2.5,
            tube_radius: 20.0,
            slope: 0.0,
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_camel_case_json() {
        let json = serde_json::to_value(ParameterVector::default()).unwrap();
        assert_eq!(json["numTubes"], 4);
        assert_eq!(json["holesPerTube"], 4);
        assert_eq!(json["tubeRadius"], 10.0);
    }

    #[test]
    fn test_radius_is_half_the_diameter_field() {
        assert!((ParameterVector::default().radius() - 5.0).abs() < 1e-12);
    }
}
