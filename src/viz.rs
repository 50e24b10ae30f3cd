//! Interactive macroquad window around the per-frame calculator.
//!
//! This is the sole side-effecting module: it reads the mouse and sliders,
//! hands them to [`Frame`](crate::frame::Frame), and draws whatever render
//! instruction set comes back.

use macroquad::hash;
use macroquad::prelude::*;
use macroquad::ui::{root_ui, widgets};
use nalgebra::Point2;

use crate::frame::{Frame, FrameInput, RenderSet, Segment};
use crate::settings::{Settings, MAX_REFR_INDEX, MIN_REFR_INDEX};

const BACKGROUND: Color = WHITE;
const BOUNDARY_COLOR: Color = BLACK;
const RAY_COLOR: Color = RED;
const PANEL_COLOR: Color = Color::new(0.204, 0.922, 0.561, 1.0);
const LINE_THICKNESS: f32 = 1.0;
const TEXT_SIZE: f32 = 18.0;

/// Window configuration derived from the runtime settings.
pub fn window_conf(settings: &Settings) -> Conf {
    Conf {
        window_title: "Refraction Demonstration".to_string(),
        window_width: settings.width as i32,
        window_height: settings.height as i32,
        ..Default::default()
    }
}

/// Runs the frame loop until the window is closed. The slider values start
/// from the configured indices and are clamped to the slider range by the
/// widgets.
pub async fn run(settings: Settings) {
    let mut n1 = settings.n1;
    let mut n2 = settings.n2;

    loop {
        clear_background(BACKGROUND);

        let (mouse_x, mouse_y) = mouse_position();
        let input = FrameInput {
            cursor: Point2::new(mouse_x, mouse_y),
            n1,
            n2,
        };
        let render = Frame::new(&settings, input).solve();

        draw_render_set(&render);
        draw_panels(&settings, &render, n1, n2);

        widgets::Window::new(
            hash!(),
            vec2(20.0, settings.height - 44.0),
            vec2(400.0, 40.0),
        )
        .label("Media")
        .titlebar(false)
        .ui(&mut *root_ui(), |ui| {
            ui.slider(hash!(), "N1", MIN_REFR_INDEX..MAX_REFR_INDEX, &mut n1);
            ui.slider(hash!(), "N2", MIN_REFR_INDEX..MAX_REFR_INDEX, &mut n2);
        });

        next_frame().await
    }
}

fn draw_render_set(render: &RenderSet) {
    draw_segment(&render.boundary, BOUNDARY_COLOR);
    for ray in &render.rays {
        draw_segment(&ray.segment, RAY_COLOR);
    }
}

fn draw_segment(segment: &Segment, color: Color) {
    draw_line(
        segment.start.x,
        segment.start.y,
        segment.end.x,
        segment.end.y,
        LINE_THICKNESS,
        color,
    );
}

fn draw_panels(settings: &Settings, render: &RenderSet, n1: f32, n2: f32) {
    draw_text("N1 Region", 20.0, 40.0, 24.0, BOUNDARY_COLOR);
    draw_text("N2 Region", settings.width / 2.0 + 20.0, 40.0, 24.0, BOUNDARY_COLOR);

    // Angle readout, top right
    let panel_x = settings.width - 270.0;
    draw_rectangle(panel_x, 25.0, 250.0, 110.0, PANEL_COLOR);
    if let Some(readout) = &render.readout {
        draw_text(&readout.incident, panel_x + 10.0, 50.0, TEXT_SIZE, BOUNDARY_COLOR);
        draw_text(&readout.refracted, panel_x + 10.0, 75.0, TEXT_SIZE, BOUNDARY_COLOR);
        draw_text(&readout.reflected, panel_x + 10.0, 100.0, TEXT_SIZE, BOUNDARY_COLOR);
        let power = format!("Reflected power: {:.0}%", readout.reflectance * 100.0);
        draw_text(&power, panel_x + 10.0, 125.0, TEXT_SIZE, BOUNDARY_COLOR);
    }

    // Footer with the current indices
    draw_rectangle(0.0, settings.height - 50.0, settings.width, 50.0, PANEL_COLOR);
    let indices = format!("N1 = {:.2}    N2 = {:.2}", n1, n2);
    draw_text(
        &indices,
        settings.width - 220.0,
        settings.height - 20.0,
        TEXT_SIZE,
        BOUNDARY_COLOR,
    );
}
