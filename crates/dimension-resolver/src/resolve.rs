use hydro_geometry::units::slope_angle_deg;
use hydro_types::{Parity, ParameterVector};
use tracing::{debug, instrument, warn};

use crate::model::*;

/// Minimum reservoir size in liters.
pub const MIN_RESERVOIR_LITERS: f64 = 20.0;
/// Reservoir liters budgeted per plant.
pub const LITERS_PER_PLANT: f64 = 2.0;
/// Width of a wall plank in centimeters.
pub const PLANK_WIDTH_CM: f64 = 5.0;
/// Divisor of the long (odd tube count) jumper formula.
pub const LONG_JUMPER_DIVISOR: f64 = 2.05;

/// Derive the full system model from a parameter vector.
///
/// Pure and total. Nothing is clamped; degenerate results are logged and
/// left for [`SystemModel::physical_warnings`] to report.
#[instrument(level = "debug")]
pub fn resolve(params: &ParameterVector) -> SystemModel {
    let r = params.radius();
    let n = params.num_tubes;
    let holes = params.holes_per_tube;

    let tube_spacing = params.height / (n as f64 + 1.0);
    let tube_length = params.width - 8.0 * r;
    let jog_length = tube_spacing - 4.0 * r;

    let number_of_plants = n * holes;
    let capacity = MIN_RESERVOIR_LITERS.max(number_of_plants as f64 * LITERS_PER_PLANT);
    let reservoir_height = capacity;

    let pump_length = pump_tube_length(params.height, reservoir_height, tube_spacing, r);
    let jumper_length = horizontal_connector_length(n, params.width, tube_length, r);

    debug!(
        tube_spacing,
        tube_length, jog_length, capacity, pump_length, jumper_length, "resolved rig dimensions"
    );

    let model = SystemModel {
        dimensions: Dimensions {
            width: params.width,
            height: params.height,
            depth: 4.0 * r,
        },
        tubes: Tubes {
            main_tubes: PipeCut {
                quantity: n,
                length: tube_length,
                diameter: 2.0 * r,
            },
            vertical_connectors: VerticalConnectors {
                big: PipeCut {
                    quantity: n,
                    length: jog_length,
                    diameter: 2.0 * r,
                },
                small: PipeCut {
                    quantity: 1,
                    length: 1.25 * r,
                    diameter: r,
                },
            },
            pump_tube: PipeCut {
                quantity: 1,
                length: pump_length,
                diameter: r,
            },
            horizontal_connector: PipeCut {
                quantity: 1,
                length: jumper_length,
                diameter: r,
            },
        },
        elbows: Elbows {
            big: Fitting {
                quantity: (2 * n).saturating_sub(1),
                diameter: 2.0 * r,
            },
            small: Fitting {
                quantity: 2,
                diameter: r,
            },
        },
        end_caps: Fitting {
            quantity: 1,
            diameter: 2.0 * r,
        },
        net_pots: Fitting {
            quantity: number_of_plants,
            diameter: params.hole_size,
        },
        reservoir: Reservoir {
            capacity,
            height: reservoir_height,
        },
        wall_stand: WallStand {
            planks: Planks {
                quantity: 2,
                length: params.height - tube_spacing,
                width: PLANK_WIDTH_CM,
            },
            tube_straps: Fitting {
                quantity: 2 * n,
                diameter: 2.0 * r,
            },
        },
        misc: Misc {
            number_of_plants,
            hole_spacing: tube_length / (holes as f64 + 1.0),
            tube_spacing,
            slope_angle_deg: slope_angle_deg(params.slope),
        },
    };

    for w in model.physical_warnings() {
        warn!(warning = %w, "degenerate rig geometry");
    }
    model
}

/// Pump riser length: from the reservoir floor to the return elbow above the
/// top tube.
pub fn pump_tube_length(height: f64, reservoir_height: f64, tube_spacing: f64, r: f64) -> f64 {
    height + reservoir_height - tube_spacing + r / 2.0 + 0.5
}

/// Jumper length over the top of the stack. The long form applies when the
/// tube count is odd and the return has to cross the full tube.
pub fn horizontal_connector_length(num_tubes: u32, width: f64, tube_length: f64, r: f64) -> f64 {
    match Parity::of(num_tubes) {
        Parity::Even => (width - tube_length) / 2.0,
        Parity::Odd => (width + tube_length - 2.0 * r) / LONG_JUMPER_DIVISOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn defaults() -> ParameterVector {
        ParameterVector::default()
    }

    #[test]
    fn test_default_rig() {
        let m = resolve(&defaults());
        assert_relative_eq!(m.misc.tube_spacing, 44.0);
        assert_relative_eq!(m.tubes.main_tubes.length, 80.0);
        assert_relative_eq!(m.tubes.main_tubes.diameter, 10.0);
        assert_relative_eq!(m.tubes.vertical_connectors.big.length, 24.0);
        assert_relative_eq!(m.tubes.vertical_connectors.small.length, 6.25);
        assert_relative_eq!(m.tubes.vertical_connectors.small.diameter, 5.0);
        assert_eq!(m.net_pots.quantity, 16);
        assert_relative_eq!(m.reservoir.capacity, 32.0);
        assert_relative_eq!(m.reservoir.height, 32.0);
        assert_eq!(m.elbows.big.quantity, 7);
        assert_eq!(m.elbows.small.quantity, 2);
        assert_relative_eq!(m.dimensions.depth, 20.0);
        assert_relative_eq!(m.misc.hole_spacing, 16.0);
        assert_relative_eq!(m.wall_stand.planks.length, 176.0);
        assert_eq!(m.wall_stand.tube_straps.quantity, 8);
        assert_relative_eq!(m.misc.slope_angle_deg, 1.8);
    }

    #[test]
    fn test_pump_tube_length() {
        // 220 + 32 - 44 + 2.5 + 0.5
        let m = resolve(&defaults());
        assert_relative_eq!(m.tubes.pump_tube.length, 211.0);
        assert_relative_eq!(m.tubes.pump_tube.diameter, 5.0);
    }

    #[test]
    fn test_jumper_even() {
        let m = resolve(&defaults());
        assert_relative_eq!(m.tubes.horizontal_connector.length, 20.0);
    }

    #[test]
    fn test_jumper_odd() {
        let m = resolve(&ParameterVector {
            num_tubes: 3,
            ..defaults()
        });
        assert_relative_eq!(m.tubes.horizontal_connector.length, 190.0 / 2.05);
    }

    #[test]
    fn test_small_rig_reservoir_floor() {
        let m = resolve(&ParameterVector {
            num_tubes: 1,
            holes_per_tube: 3,
            ..defaults()
        });
        assert_relative_eq!(m.reservoir.capacity, 20.0);
        assert_eq!(m.elbows.big.quantity, 1);
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        let m = resolve(&ParameterVector {
            width: 50.0,
            tube_radius: 20.0,
            ..defaults()
        });
        assert_relative_eq!(m.tube_length(), -30.0);
        assert!(matches!(
            m.physical_warnings()[0],
            PhysicalWarning::NonPositiveTubeLength { .. }
        ));
    }

    #[test]
    fn test_zero_tubes_does_not_underflow() {
        let m = resolve(&ParameterVector {
            num_tubes: 0,
            ..defaults()
        });
        assert_eq!(m.elbows.big.quantity, 0);
        assert!(m.physical_warnings().contains(&PhysicalWarning::NoTubes));
    }

    #[test]
    fn test_default_has_no_warnings() {
        assert!(resolve(&defaults()).physical_warnings().is_empty());
    }
}
