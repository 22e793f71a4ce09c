//! Board rendering for the Othello GUI

use crate::{Board, Pos, Side, Stone, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any.
    ///
    /// Only squares listed in `hints` are clickable.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Side,
        hints: &[Pos],
        last_move: Option<Pos>,
        suggested_move: Option<Pos>,
        game_over: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        self.draw_grid(&painter);
        self.draw_guide_dots(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        for &pos in hints {
            self.draw_hint(&painter, pos);
        }

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(pos) = suggested_move {
            self.draw_suggestion(&painter, pos, current_turn);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if !game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = hints.contains(&board_pos);
                    if board.is_empty(board_pos) {
                        self.draw_hover_preview(&painter, board_pos, current_turn, is_valid);
                    }

                    if response.clicked() && is_valid {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the 9x9 lines bounding the 8x8 squares
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 0..=BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_guide_dots(&self, painter: &Painter) {
        for (row, col) in GUIDE_DOTS {
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;
            painter.circle_filled(Pos2::new(x, y), GUIDE_DOT_RADIUS, GUIDE_DOT);
        }
    }

    /// Draw coordinate labels (a-h, 1-8), matching move notation
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(14.0);
        let half = BOARD_MARGIN * 0.5;

        for i in 0..BOARD_SIZE {
            let center = BOARD_MARGIN + (i as f32 + 0.5) * self.cell_size;
            let letter = (b'a' + i as u8) as char;
            let number = format!("{}", i + 1);

            let top = Pos2::new(self.board_rect.min.x + center, self.board_rect.min.y + half);
            painter.text(top, egui::Align2::CENTER_CENTER, letter, font.clone(), LABEL);

            let bottom = Pos2::new(self.board_rect.min.x + center, self.board_rect.max.y - half);
            painter.text(bottom, egui::Align2::CENTER_CENTER, letter, font.clone(), LABEL);

            let left = Pos2::new(self.board_rect.min.x + half, self.board_rect.min.y + center);
            painter.text(left, egui::Align2::CENTER_CENTER, &number, font.clone(), LABEL);

            let right = Pos2::new(self.board_rect.max.x - half, self.board_rect.min.y + center);
            painter.text(right, egui::Align2::CENTER_CENTER, &number, font.clone(), LABEL);
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for pos in board.occupied().iter_ones() {
            if let Some(side) = board.get(pos).side() {
                self.draw_stone(painter, pos, side);
            }
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, side: Side) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match side {
            Side::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);

                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(
                    center + highlight_offset,
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Side::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
        }
    }

    /// Small dot on a square the player may move to
    fn draw_hint(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, self.cell_size * HINT_RADIUS_RATIO, legal_hint());
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw move suggestion
    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Side) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let (fill, text) = match turn {
            Side::Black => (Color32::from_rgba_unmultiplied(20, 20, 20, 100), WHITE_STONE),
            Side::White => (Color32::from_rgba_unmultiplied(240, 240, 240, 100), BLACK_STONE),
        };

        painter.circle_filled(center, radius, fill);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(18.0),
            text,
        );
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Side, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = if is_valid {
            match Stone::from(turn) {
                Stone::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                _ => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
            }
        } else {
            hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN) / self.cell_size;

        let col = x.floor() as i32;
        let row = y.floor() as i32;

        if Pos::is_valid(row, col) {
            Pos::try_new(row as u8, col as u8)
        } else {
            None
        }
    }

    /// Centre of a square in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col() as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row() as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
