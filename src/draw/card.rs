//! Card faces and the full table scene.

use super::canvas::{rgba, Canvas, BLACK, WHITE};
use crate::cards::{Attribute, Card, Shape};
use crate::game::Game;
use crate::layout::{Layout, Rect};

/// Card border width in pixels.
pub const BORDER_WIDTH: f32 = 2.0;

/// Stroke width for outlined shapes.
pub const OUTLINE_WIDTH: f32 = 5.0;

/// Bounding boxes of the shapes on a card, top to bottom.
///
/// The card is cut into `2 * amount + 3` bands (amount counted from zero);
/// shapes start on the odd bands, are a seventh of the card tall, and leave a
/// fifth of the width free on either side.
#[must_use]
pub fn shape_slots(card: &Card, rect: Rect) -> Vec<Rect> {
    let band = rect.h / (2 * card.amount.index() + 3) as f32;
    let x_min = rect.w / 5.0;
    let x_max = rect.w - rect.w / 5.0;
    let shape_h = rect.h / 7.0;
    (0..card.amount.count())
        .map(|row| {
            let y = (2 * row + 1) as f32 * band;
            Rect::new(rect.x + x_min, rect.y + y, x_max - x_min, shape_h)
        })
        .collect()
}

/// The four corners of a diamond inscribed in `slot`: left, bottom, right, top.
#[must_use]
pub fn diamond_points(slot: Rect) -> [[f32; 2]; 4] {
    let mid_x = slot.x + slot.w / 2.0;
    let mid_y = slot.y + slot.h / 2.0;
    [
        [slot.x, mid_y],
        [mid_x, slot.y + slot.h],
        [slot.x + slot.w, mid_y],
        [mid_x, slot.y],
    ]
}

/// Draw one card face into `rect`.
pub fn draw_card(canvas: &mut Canvas, card: &Card, rect: Rect) {
    canvas.rect(rect, WHITE);

    let color = rgba(card.color.rgb(), card.fill.alpha());
    let outline = card.fill.is_outline();
    for slot in shape_slots(card, rect) {
        match (card.shape, outline) {
            (Shape::Square, false) => canvas.rect(slot, color),
            (Shape::Square, true) => canvas.rect_outline(slot, OUTLINE_WIDTH, color),
            (Shape::Circle, false) => canvas.ellipse(slot, color),
            (Shape::Circle, true) => canvas.ellipse_outline(slot, OUTLINE_WIDTH, color),
            (Shape::Diamond, false) => canvas.polygon(&diamond_points(slot), color),
            (Shape::Diamond, true) => {
                canvas.polygon_outline(&diamond_points(slot), OUTLINE_WIDTH, color);
            }
        }
    }

    canvas.rect_outline(rect, BORDER_WIDTH, BLACK);
}

/// Draw the table and the chosen column for the current game state.
pub fn draw_game(canvas: &mut Canvas, game: &Game) {
    let layout = Layout::new(game.config(), game.table().len());

    for (i, card) in game.table().iter().enumerate() {
        if let Some(rect) = layout.table_rect(i) {
            draw_card(canvas, card, rect);
        }
    }

    for (slot, card) in game.chosen().iter().enumerate() {
        if let Some(rect) = layout.chosen_rect(slot) {
            draw_card(canvas, card, rect);
        }
    }
}
