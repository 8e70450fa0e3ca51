use dimension_resolver::SystemModel;
use hydro_geometry::units::{cm_to_inches, fixed};
use hydro_types::ParameterVector;
use serde::{Deserialize, Serialize};

/// The value half of a measurement line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Measurement {
    /// Centimeters, shown with the inch equivalent.
    Length { cm: f64 },
    Count { value: u32 },
    Liters { value: f64 },
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Measurement::Length { cm } => {
                write!(f, "{} cm ({} inches)", fixed(*cm, 1), fixed(cm_to_inches(*cm), 2))
            }
            Measurement::Count { value } => write!(f, "{value}"),
            Measurement::Liters { value } => write!(f, "{} L", fixed(*value, 1)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub entries: Vec<(String, Measurement)>,
}

impl Measurements {
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn get(&self, name: &str) -> Option<&Measurement> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, m)| m)
    }
}

pub fn measurements(params: &ParameterVector, model: &SystemModel) -> Measurements {
    let length = |cm: f64| Measurement::Length { cm };
    let count = |value: u32| Measurement::Count { value };
    let entries = vec![
        ("Width", length(model.dimensions.width)),
        ("Height", length(model.dimensions.height)),
        ("Depth", length(model.dimensions.depth)),
        ("Number of Plants", count(model.misc.number_of_plants)),
        ("Number of Tubes", count(model.tubes.main_tubes.quantity)),
        ("Holes per Tube", count(params.holes_per_tube)),
        ("Hole Size", length(model.net_pots.diameter)),
        ("Hole Spacing", length(model.misc.hole_spacing)),
        ("Tube Diameter", length(model.tubes.main_tubes.diameter)),
        (
            "Reservoir Size",
            Measurement::Liters {
                value: model.reservoir.capacity,
            },
        ),
        ("Reservoir Height", length(model.reservoir.height)),
    ];
    Measurements {
        entries: entries
            .into_iter()
            .map(|(name, m)| (name.to_string(), m))
            .collect(),
    }
}
