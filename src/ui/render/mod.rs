mod chart;
mod dashboard;
mod form;
mod frame;
mod table;
mod theme;

#[cfg(test)]
pub(crate) use chart::place_x_labels;
pub use dashboard::{Dashboard, draw_snapshot};
pub use frame::draw_frame;
