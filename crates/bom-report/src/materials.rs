use dimension_resolver::{Fitting, PipeCut, SystemModel};
use hydro_geometry::units::fixed;
use serde::{Deserialize, Serialize};

/// A titled group of shopping-list lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSection {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialsList {
    pub sections: Vec<MaterialSection>,
}

impl MaterialsList {
    /// Numbered sections separated by blank lines, ready to paste or save.
    pub fn to_text(&self) -> String {
        self.sections
            .iter()
            .map(|section| {
                let mut block = format!("{}:", section.title);
                for (i, item) in section.items.iter().enumerate() {
                    block.push_str(&format!("\n  {}. {}", i + 1, item));
                }
                block
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

fn pipe(cut: &PipeCut) -> String {
    format!(
        "{} PVC pipes ({} cm long, {} cm diameter)",
        cut.quantity,
        fixed(cut.length, 1),
        fixed(cut.diameter, 1)
    )
}

fn elbow(fitting: &Fitting) -> String {
    format!(
        "{} 90 degree elbow PVC Connectors ({} cm diameter)",
        fitting.quantity,
        fixed(fitting.diameter, 1)
    )
}

fn section(title: &str, items: Vec<String>) -> MaterialSection {
    MaterialSection {
        title: title.to_string(),
        items,
    }
}

/// Everything to buy for the rig, grouped by where it goes.
pub fn materials_list(model: &SystemModel) -> MaterialsList {
    let tubes = &model.tubes;
    let capacity = fixed(model.reservoir.capacity, 1);
    let planks = &model.wall_stand.planks;
    let straps = &model.wall_stand.tube_straps;

    MaterialsList {
        sections: vec![
            section(
                "Pipes",
                vec![
                    pipe(&tubes.main_tubes),
                    pipe(&tubes.vertical_connectors.big),
                    pipe(&tubes.pump_tube),
                    pipe(&tubes.vertical_connectors.small),
                    pipe(&tubes.horizontal_connector),
                ],
            ),
            section("Connectors", vec![elbow(&model.elbows.big), elbow(&model.elbows.small)]),
            section(
                "End Caps",
                vec![format!(
                    "{} End caps ({} cm diameter)",
                    model.end_caps.quantity,
                    fixed(model.end_caps.diameter, 1)
                )],
            ),
            section(
                "Growing Containers",
                vec![
                    format!(
                        "{} Net pots ({} cm diameter)",
                        model.net_pots.quantity,
                        fixed(model.net_pots.diameter, 1)
                    ),
                    "Growing medium (e.g., rockwool, perlite, or clay pebbles)".to_string(),
                ],
            ),
            section(
                "Water System",
                vec![
                    format!("1 Water reservoir ({capacity} L capacity)"),
                    format!("1 Water pump (appropriate for {capacity} L capacity)"),
                    "1 Air pump with air stone".to_string(),
                    format!(
                        "Tubing for water circulation (length depends on setup, recommend at least {} cm)",
                        fixed(model.dimensions.height, 1)
                    ),
                    "Nutrient solution".to_string(),
                ],
            ),
            section(
                "Support Structure",
                vec![
                    format!(
                        "{} Wooden planks ({} cm long, {} cm wide)",
                        planks.quantity,
                        fixed(planks.length, 1),
                        fixed(planks.width, 1)
                    ),
                    format!(
                        "{} Tube straps ({} cm diameter)",
                        straps.quantity,
                        fixed(straps.diameter, 1)
                    ),
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimension_resolver::resolve;
    use hydro_types::ParameterVector;

    #[test]
    fn test_default_pipes() {
        let list = materials_list(&resolve(&ParameterVector::default()));
        let pipes = &list.sections[0];
        assert_eq!(pipes.title, "Pipes");
        assert_eq!(pipes.items[0], "4 PVC pipes (80.0 cm long, 10.0 cm diameter)");
        assert_eq!(pipes.items[1], "4 PVC pipes (24.0 cm long, 10.0 cm diameter)");
        assert_eq!(pipes.items[2], "1 PVC pipes (211.0 cm long, 5.0 cm diameter)");
        assert_eq!(pipes.items[3], "1 PVC pipes (6.3 cm long, 5.0 cm diameter)");
        assert_eq!(pipes.items[4], "1 PVC pipes (20.0 cm long, 5.0 cm diameter)");
    }

    #[test]
    fn test_six_sections() {
        let list = materials_list(&resolve(&ParameterVector::default()));
        let titles: Vec<_> = list.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Pipes",
                "Connectors",
                "End Caps",
                "Growing Containers",
                "Water System",
                "Support Structure"
            ]
        );
        assert_eq!(list.item_count(), 17);
    }

    #[test]
    fn test_to_text_layout() {
        let list = MaterialsList {
            sections: vec![
                section("A", vec!["x".into(), "y".into()]),
                section("B", vec!["z".into()]),
            ],
        };
        assert_eq!(list.to_text(), "A:\n  1. x\n  2. y\n\nB:\n  1. z");
    }
}
