use hydro_geometry::units::fixed;
use layout_builder::CutListEntry;

/// One line per letter: `A  4 x 80.00 cm, 10.0 cm diameter`.
pub fn cut_list_text(entries: &[CutListEntry]) -> String {
    entries
        .iter()
        .map(|e| match e.length_cm {
            Some(len) => format!(
                "{}  {} x {} cm, {} cm diameter",
                e.letter,
                e.quantity,
                fixed(len, 2),
                fixed(e.diameter_cm, 1)
            ),
            None => format!(
                "{}  {} x elbow, {} cm diameter",
                e.letter,
                e.quantity,
                fixed(e.diameter_cm, 1)
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
