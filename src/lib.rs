pub mod frame;
pub mod fresnel;
pub mod geom;
pub mod output;
pub mod settings;
pub mod snell;
#[cfg(feature = "macroquad")]
pub mod viz;
