//! CPU-side drawing: card faces tessellated into colored triangles.
//!
//! Nothing here touches the GPU. A frame is built by calling
//! [`draw_game`] on a [`Canvas`]; the platform renderer uploads
//! [`Canvas::vertices`] as-is.

pub mod canvas;
pub mod card;

pub use canvas::{rgba, Canvas, ColorVertex, Rgba, BLACK, WHITE};
pub use card::{diamond_points, draw_card, draw_game, shape_slots};
