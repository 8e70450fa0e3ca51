//! Which end of each tube drains, and how the return line reaches the top.

use hydro_types::{Parity, Side};
use serde::{Deserialize, Serialize};

/// The fitting at a tube's higher end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpperFitting {
    /// An elbow turning up to receive the jog of the tube above.
    RiserElbow,
    /// The sealed end of the top tube.
    EndCap,
}

/// Plumbing of a single tube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TubeRoute {
    /// End with the down elbow and the jog below it.
    pub drain: Side,
    pub upper: UpperFitting,
    pub upper_side: Side,
    /// +1 tilts the tube so its left end is low, -1 so its right end is.
    pub tilt_sign: f64,
}

/// Routing keyed by whether the tube is the top one and the parity of its index.
pub fn route_table(is_terminal: bool, parity: Parity) -> TubeRoute {
    match (is_terminal, parity) {
        (false, Parity::Even) => TubeRoute {
            drain: Side::Left,
            upper: UpperFitting::RiserElbow,
            upper_side: Side::Right,
            tilt_sign: 1.0,
        },
        (false, Parity::Odd) => TubeRoute {
            drain: Side::Right,
            upper: UpperFitting::RiserElbow,
            upper_side: Side::Left,
            tilt_sign: -1.0,
        },
        (true, Parity::Even) => TubeRoute {
            drain: Side::Left,
            upper: UpperFitting::EndCap,
            upper_side: Side::Right,
            tilt_sign: 1.0,
        },
        (true, Parity::Odd) => TubeRoute {
            drain: Side::Right,
            upper: UpperFitting::EndCap,
            upper_side: Side::Left,
            tilt_sign: -1.0,
        },
    }
}

/// Route of tube `index` (0 at the bottom) in a stack of `num_tubes`.
pub fn tube_route(index: u32, num_tubes: u32) -> TubeRoute {
    route_table(index + 1 == num_tubes, Parity::of(index))
}

/// Which jumper formula applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumperKind {
    /// Even tube count: the cap sits on the pump side.
    Short,
    /// Odd tube count: the jumper crosses the whole top tube.
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnRoute {
    pub jumper: JumperKind,
    /// End of the top tube the drop tail enters (its capped end).
    pub drop_side: Side,
}

pub fn return_route(num_tubes: u32) -> ReturnRoute {
    match Parity::of(num_tubes) {
        Parity::Even => ReturnRoute {
            jumper: JumperKind::Short,
            drop_side: Side::Left,
        },
        Parity::Odd => ReturnRoute {
            jumper: JumperKind::Long,
            drop_side: Side::Right,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serpentine_alternates() {
        for i in 0..3 {
            let lower = tube_route(i, 4);
            let upper = tube_route(i + 1, 4);
            // The tube above drains onto this tube's riser elbow.
            assert_eq!(upper.drain, lower.upper_side);
            assert_eq!(lower.upper, UpperFitting::RiserElbow);
            assert_eq!(upper.tilt_sign, -lower.tilt_sign);
        }
        assert_eq!(tube_route(3, 4).upper, UpperFitting::EndCap);
    }

    #[test]
    fn test_upper_fitting_opposite_drain() {
        for terminal in [false, true] {
            for parity in [Parity::Even, Parity::Odd] {
                let r = route_table(terminal, parity);
                assert_eq!(r.upper_side, r.drain.opposite());
            }
        }
    }

    #[test]
    fn test_drop_enters_capped_end() {
        for n in 1..=10 {
            let top = tube_route(n - 1, n);
            assert_eq!(top.upper, UpperFitting::EndCap);
            assert_eq!(return_route(n).drop_side, top.upper_side);
        }
    }

    #[test]
    fn test_single_tube_route() {
        let r = tube_route(0, 1);
        assert_eq!(r.drain, Side::Left);
        assert_eq!(r.upper, UpperFitting::EndCap);
        assert_eq!(return_route(1).jumper, JumperKind::Long);
    }
}
