pub mod cairo_layers;
pub mod color;
pub mod config;
pub mod geometry;
pub mod layer;
pub mod path;
pub mod recording;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod wedge;

pub use cairo_layers::LayerTree;
pub use color::{Color, ColorPair};
pub use config::Configuration;
pub use geometry::{Point, Rect};
pub use layer::ShapeLayer;
pub use recording::RecordingSurface;
pub use renderer::PieRenderer;
pub use state::ProgressState;
pub use surface::{DrawingSurface, TimingFunction, Transaction};
