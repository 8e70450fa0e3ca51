use serde::{Deserialize, Serialize};

/// The kind of physical (or annotation) part a scene node draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PartType {
    MainTube,
    VerticalConnector,
    PumpTube,
    HorizontalConnector,
    Elbow,
    TubeCap,
    TubeStrap,
    Reservoir,
    WallPlank,
    PlantHole,
    PlantModel,
    BackgroundBoardGrid,
    Label,
}

impl PartType {
    pub const ALL: [PartType; 13] = [
        PartType::MainTube,
        PartType::VerticalConnector,
        PartType::PumpTube,
        PartType::HorizontalConnector,
        PartType::Elbow,
        PartType::TubeCap,
        PartType::TubeStrap,
        PartType::Reservoir,
        PartType::WallPlank,
        PartType::PlantHole,
        PartType::PlantModel,
        PartType::BackgroundBoardGrid,
        PartType::Label,
    ];
}

/// Semantic role of a part within the plumbing.
///
/// Roles stay attached to the same physical piece whatever the parameters
/// are, which is what lets blueprint letters stay stable across edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SegmentRole {
    /// A horizontal growing tube.
    MainRun,
    /// The short vertical connector between stacked tube ends.
    Jog,
    /// The half-diameter riser from the reservoir pump.
    PumpRiser,
    /// The half-diameter horizontal jumper above the stack.
    Jumper,
    /// The short half-diameter drop from the jumper into the top tube.
    DropTail,
    /// A full-diameter elbow on the serpentine.
    MainElbow,
    /// A half-diameter elbow on the return path.
    ReturnElbow,
    /// The sealed end of the terminal tube.
    EndCap,
    /// A pipe strap holding a tube to the wall planks.
    Strap,
    /// A vertical wall plank.
    Plank,
    /// The nutrient reservoir.
    Reservoir,
    /// A planting hole cut into a tube.
    Hole,
    /// A plant sitting in a hole.
    Plant,
    /// The measuring grid.
    Board,
    /// A tick label on the measuring grid.
    GridTick,
    /// A blueprint letter tag.
    Tag,
}

/// Which end of the rig, seen from the front before any mirroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// -1 for left, +1 for right.
    pub fn sign(&self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn opposite(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Parity of a tube index or a tube count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(n: u32) -> Parity {
        if n % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

/// Which of the two decorative plant models sits in a hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlantVariant {
    Primary,
    Alternate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_sign_and_opposite() {
        assert_eq!(Side::Left.sign(), -1.0);
        assert_eq!(Side::Right.sign(), 1.0);
        assert_eq!(Side::Left.opposite(), Side::Right);
    }

    #[test]
    fn test_parity() {
        assert_eq!(Parity::of(0), Parity::Even);
        assert_eq!(Parity::of(3), Parity::Odd);
    }

    #[test]
    fn test_part_type_tagged_json() {
        let json = serde_json::to_string(&PartType::MainTube).unwrap();
        assert_eq!(json, r#"{"type":"MainTube"}"#);
    }
}
