use crate::snell::{Quadrant, RayAngles};

#[cfg(test)]
mod tests {

    use super::*;
    use std::f32::consts::{FRAC_PI_4, PI};

    #[test]
    fn absent_angle_reads_as_zero() {
        assert_eq!(rad_to_deg(None), 0.0);
        assert_eq!(rad_to_deg(Some(0.0)), 0.0);
        assert!((rad_to_deg(Some(PI)) - 180.0).abs() < 1e-4);
    }

    #[test]
    fn quadrant_one_conventions() {
        let angles = RayAngles {
            incident: -FRAC_PI_4,
            reflected: PI + FRAC_PI_4,
            refracted: Some(-0.490_88),
            axis: Some(PI),
        };
        let readout = readout(Quadrant::One, &angles, 0.05);
        assert_eq!(readout.incident, "Incident angle: 45");
        assert_eq!(readout.refracted, "Refracted angle: 28");
        assert_eq!(readout.reflected, "Reflected angle: 45");
        assert!((readout.reflectance - 0.05).abs() < 1e-6);
    }

    #[test]
    fn quadrant_two_conventions() {
        let angles = RayAngles {
            incident: -FRAC_PI_4,
            reflected: FRAC_PI_4,
            refracted: Some(3.632_48),
            axis: None,
        };
        let readout = readout(Quadrant::Two, &angles, 0.05);
        assert_eq!(readout.incident, "Incident angle: 45");
        assert_eq!(readout.refracted, "Refracted angle: 28");
        assert_eq!(readout.reflected, "Reflected angle: 45");
    }

    #[test]
    fn total_internal_reflection_reads_not_applicable() {
        let angles = RayAngles {
            incident: -FRAC_PI_4,
            reflected: PI + FRAC_PI_4,
            refracted: None,
            axis: Some(PI),
        };
        let readout = readout(Quadrant::One, &angles, 1.0);
        assert_eq!(readout.refracted, "Refracted angle: N/A");
    }

    #[test]
    fn straight_in_reads_all_zero() {
        let angles = RayAngles {
            incident: 0.0,
            reflected: PI,
            refracted: Some(0.0),
            axis: Some(PI),
        };
        let readout = readout(Quadrant::One, &angles, 0.04);
        assert_eq!(readout.incident, "Incident angle: 0");
        assert_eq!(readout.refracted, "Refracted angle: 0");
        assert_eq!(readout.reflected, "Reflected angle: 0");
    }
}

/// The three angle strings shown next to the rays, plus the fraction of
/// incident power reflected at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub incident: String,
    pub refracted: String,
    pub reflected: String,
    pub reflectance: f32,
}

/// Converts radians to degrees for display. An absent angle reads as 0.
pub fn rad_to_deg(angle: Option<f32>) -> f32 {
    match angle {
        Some(alpha) => alpha.to_degrees(),
        None => 0.0,
    }
}

/// Formats the on-screen readout. Angles are truncated to whole degrees;
/// the sign and offset conventions differ between the two quadrants.
pub fn readout(quadrant: Quadrant, angles: &RayAngles, reflectance: f32) -> Readout {
    match quadrant {
        Quadrant::One => {
            let incident = -rad_to_deg(Some(angles.incident));
            let reflected = -(180.0 - rad_to_deg(Some(angles.reflected)));
            Readout {
                incident: format!("Incident angle: {}", incident as i32),
                refracted: match angles.refracted {
                    Some(alpha) => {
                        format!("Refracted angle: {}", -rad_to_deg(Some(alpha)) as i32)
                    }
                    None => "Refracted angle: N/A".to_string(),
                },
                reflected: format!("Reflected angle: {}", reflected as i32),
                reflectance,
            }
        }
        Quadrant::Two => {
            let incident = -rad_to_deg(Some(angles.incident));
            let reflected = rad_to_deg(Some(angles.reflected));
            Readout {
                incident: format!("Incident angle: {}", incident as i32),
                refracted: match angles.refracted {
                    Some(alpha) => {
                        format!("Refracted angle: {}", (rad_to_deg(Some(alpha)) - 180.0) as i32)
                    }
                    None => "Refracted angle: N/A".to_string(),
                },
                reflected: format!("Reflected angle: {}", reflected as i32),
                reflectance,
            }
        }
    }
}
