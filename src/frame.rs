use anyhow::Result;
use nalgebra::Point2;

use crate::{
    fresnel, geom,
    output::{self, Readout},
    settings::Settings,
    snell::{self, Quadrant},
};

#[cfg(test)]
mod tests {

    use super::*;

    fn settings() -> Settings {
        Settings {
            n1: 1.0,
            n2: 1.5,
            width: 800.0,
            height: 600.0,
            ray_length: 1000.0,
            cursor: None,
        }
    }

    #[test]
    fn upper_half_is_inactive() {
        let settings = settings();
        let input = FrameInput {
            cursor: Point2::new(100.0, 100.0),
            n1: 1.0,
            n2: 1.5,
        };
        let render = Frame::new(&settings, input).solve();
        assert!(render.rays.is_empty());
        assert!(render.readout.is_none());
        assert_eq!(render.boundary.start, Point2::new(400.0, 0.0));
        assert_eq!(render.boundary.end, Point2::new(400.0, 600.0));
    }

    #[test]
    fn cursor_on_the_origin_is_inactive() {
        let settings = settings();
        let input = FrameInput {
            cursor: settings.origin(),
            n1: 1.0,
            n2: 1.5,
        };
        let render = Frame::new(&settings, input).solve();
        assert!(render.rays.is_empty());
        assert!(render.readout.is_none());
    }

    #[test]
    fn quadrant_one_renders_three_rays() {
        let settings = settings();
        let input = FrameInput {
            cursor: Point2::new(300.0, 400.0),
            n1: 1.0,
            n2: 1.5,
        };
        let render = Frame::new(&settings, input).solve();
        let kinds: Vec<_> = render.rays.iter().map(|ray| ray.kind).collect();
        assert_eq!(
            kinds,
            vec![RayKind::Incident, RayKind::Reflected, RayKind::Refracted]
        );
        // Incident ray is drawn from the cursor to the origin.
        assert_eq!(render.rays[0].segment.start, Point2::new(300.0, 400.0));
        assert_eq!(render.rays[0].segment.end, Point2::new(400.0, 300.0));
        // Reflected ray leaves the origin up-left at 45 degrees.
        let reflected = render.rays[1].segment.end;
        assert!((reflected.x - (400.0 - 1000.0 * std::f32::consts::FRAC_1_SQRT_2)).abs() < 1e-2);
        assert!((reflected.y - (300.0 - 1000.0 * std::f32::consts::FRAC_1_SQRT_2)).abs() < 1e-2);

        let readout = render.readout.unwrap();
        assert_eq!(readout.incident, "Incident angle: 45");
        assert_eq!(readout.refracted, "Refracted angle: 28");
        assert_eq!(readout.reflected, "Reflected angle: 45");
        assert!((readout.reflectance - 0.0502).abs() < 1e-3);
    }

    #[test]
    fn total_internal_reflection_drops_the_refracted_ray() {
        let settings = settings();
        let input = FrameInput {
            cursor: Point2::new(300.0, 400.0),
            n1: 1.5,
            n2: 1.0,
        };
        let render = Frame::new(&settings, input).solve();
        let kinds: Vec<_> = render.rays.iter().map(|ray| ray.kind).collect();
        assert_eq!(kinds, vec![RayKind::Incident, RayKind::Reflected]);

        let readout = render.readout.unwrap();
        assert_eq!(readout.refracted, "Refracted angle: N/A");
        assert!((readout.reflectance - 1.0).abs() < 1e-6);
    }

    #[test]
    fn quadrant_two_adds_the_incident_direction() {
        let settings = settings();
        let input = FrameInput {
            cursor: Point2::new(500.0, 400.0),
            n1: 1.5,
            n2: 1.0,
        };
        let render = Frame::new(&settings, input).solve();
        let kinds: Vec<_> = render.rays.iter().map(|ray| ray.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RayKind::Incident,
                RayKind::Reflected,
                RayKind::Refracted,
                RayKind::Incident
            ]
        );

        let readout = render.readout.unwrap();
        assert_eq!(readout.incident, "Incident angle: 45");
        assert_eq!(readout.refracted, "Refracted angle: 28");
        assert_eq!(readout.reflected, "Reflected angle: 45");
    }
}

/// Inputs read from the UI collaborator once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    pub cursor: Point2<f32>,
    pub n1: f32,
    pub n2: f32,
}

/// A line to draw, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2<f32>,
    pub end: Point2<f32>,
}

/// Which ray a segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayKind {
    Incident,
    Reflected,
    Refracted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySegment {
    pub kind: RayKind,
    pub segment: Segment,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSet {
    pub boundary: Segment,
    pub rays: Vec<RaySegment>,
    pub readout: Option<Readout>,
}

/// A single frame of the demonstration. Every frame is an independent,
/// stateless recomputation from the current cursor and slider values.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    settings: &'a Settings,
    input: FrameInput,
}

impl<'a> Frame<'a> {
    pub fn new(settings: &'a Settings, input: FrameInput) -> Self {
        Self { settings, input }
    }

    /// Computes the render instruction set for this frame. A cursor outside
    /// the two active quadrants, or degenerate geometry, yields the boundary
    /// line alone.
    pub fn solve(&self) -> RenderSet {
        let boundary = Segment {
            start: self.settings.boundary_start(),
            end: self.settings.boundary_end(),
        };
        match self.solve_rays() {
            Ok(Some((rays, readout))) => RenderSet {
                boundary,
                rays,
                readout: Some(readout),
            },
            _ => RenderSet {
                boundary,
                rays: Vec::new(),
                readout: None,
            },
        }
    }

    fn solve_rays(&self) -> Result<Option<(Vec<RaySegment>, Readout)>> {
        let origin = self.settings.origin();
        let quadrant = match classify(&self.input.cursor, &origin) {
            Some(quadrant) => quadrant,
            None => return Ok(None),
        };

        let ray = geom::unit_vector(&self.input.cursor, &origin)?;
        let normal = geom::boundary_normal(
            &self.settings.boundary_start(),
            &self.settings.boundary_end(),
        )?;
        let angles = snell::ray_angles(self.input.n1, self.input.n2, &ray, &normal, None, quadrant)?;
        let reflectance = self.reflectance(quadrant, &angles);

        let length = self.settings.ray_length;
        let mut rays = vec![RaySegment {
            kind: RayKind::Incident,
            segment: Segment {
                start: self.input.cursor,
                end: origin,
            },
        }];
        rays.push(RaySegment {
            kind: RayKind::Reflected,
            segment: Segment {
                start: origin,
                end: geom::ray_endpoint(&origin, angles.reflected, length),
            },
        });
        if let Some(alpha) = angles.refracted {
            rays.push(RaySegment {
                kind: RayKind::Refracted,
                segment: Segment {
                    start: origin,
                    end: geom::ray_endpoint(&origin, alpha, length),
                },
            });
        }
        if quadrant == Quadrant::Two {
            // Quadrant 2 also draws the undeviated incident direction.
            rays.push(RaySegment {
                kind: RayKind::Incident,
                segment: Segment {
                    start: origin,
                    end: geom::ray_endpoint(&origin, angles.incident, length),
                },
            });
        }

        let readout = output::readout(quadrant, &angles, reflectance);
        Ok(Some((rays, readout)))
    }

    /// Unpolarized power reflectance at the interface. The media order
    /// follows the travel direction: n1 into n2 in quadrant 1, n2 into n1
    /// in quadrant 2. All power reflects when no ray is transmitted.
    fn reflectance(&self, quadrant: Quadrant, angles: &snell::RayAngles) -> f32 {
        if angles.refracted.is_none() {
            return 1.0;
        }
        let theta_i = angles.incident;
        match quadrant {
            Quadrant::One => {
                let theta_t = (self.input.n1 * theta_i.sin() / self.input.n2).asin();
                fresnel::reflectance(self.input.n1, self.input.n2, theta_i, theta_t)
            }
            Quadrant::Two => {
                let theta_t = (self.input.n2 * theta_i.sin() / self.input.n1).asin();
                fresnel::reflectance(self.input.n2, self.input.n1, theta_i, theta_t)
            }
        }
    }
}

/// Classifies the cursor against the ray origin. Cursor positions on the
/// boundary, on the transmission axis, or in the upper half-plane are
/// inactive.
pub fn classify(cursor: &Point2<f32>, origin: &Point2<f32>) -> Option<Quadrant> {
    if cursor.x < origin.x && cursor.y > origin.y {
        Some(Quadrant::One)
    } else if cursor.x > origin.x && cursor.y > origin.y {
        Some(Quadrant::Two)
    } else {
        None
    }
}
