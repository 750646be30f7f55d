//! Interactive dashboard: a two-field form, a status line and the forecast
//! drawn as a table and a line chart.
mod input;
mod model;
pub(crate) mod render;


pub use input::{KeyOutcome, handle_key};
pub use model::{FormState, UiRenderData};
pub use render::{Dashboard, draw_frame, draw_snapshot};
