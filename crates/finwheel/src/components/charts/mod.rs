//! Chart components for data visualization.

mod pie;

pub use pie::{ChartGeometry, PieChart, center_shade, glow_alpha, slice_at};
