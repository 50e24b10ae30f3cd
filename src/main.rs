use nalgebra::Point2;
use refract2d::frame::{Frame, FrameInput};
use refract2d::settings::{self};

fn main() {
    let settings = settings::load_config().unwrap();

    if let Some((x, y)) = settings.cursor {
        let input = FrameInput {
            cursor: Point2::new(x, y),
            n1: settings.n1,
            n2: settings.n2,
        };
        let render = Frame::new(&settings, input).solve();
        match render.readout {
            Some(readout) => {
                println!("{}", readout.incident);
                println!("{}", readout.refracted);
                println!("{}", readout.reflected);
                println!("Reflected power: {:.0}%", readout.reflectance * 100.0);
            }
            None => println!("Cursor outside the active quadrants; nothing to display."),
        }
        return;
    }

    #[cfg(feature = "macroquad")]
    macroquad::Window::from_config(
        refract2d::viz::window_conf(&settings),
        refract2d::viz::run(settings),
    );

    #[cfg(not(feature = "macroquad"))]
    eprintln!("Built without visualization; pass --cursor X Y for a headless readout.");
}
