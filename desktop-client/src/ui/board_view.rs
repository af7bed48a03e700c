use eframe::egui;
use tictactoe_common::games::tictactoe::{BOARD_SIDE, Board, Mark, WinningLine, to_index, to_position};

pub struct BoardView {
    last_hover: Option<usize>,
}

impl BoardView {
    const BOARD_PADDING: f32 = 20.0;
    const MIN_CELL_SIZE: f32 = 60.0;
    const MAX_CELL_SIZE: f32 = 140.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let available_board = (available_width.min(available_height) - Self::BOARD_PADDING * 2.0)
            / BOARD_SIDE as f32;
        available_board.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    fn cell_rect(board_rect: egui::Rect, index: usize, cell_size: f32) -> egui::Rect {
        let (x, y) = to_position(index);
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + x as f32 * cell_size,
                board_rect.top() + y as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    /// Draws the board and returns the cell the user clicked, if any.
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<WinningLine>,
        accepts_input: bool,
    ) -> Option<usize> {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height());
        let side = cell_size * BOARD_SIDE as f32;

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        for i in 0..=BOARD_SIDE {
            let offset = i as f32 * cell_size;
            let stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK);
            painter.line_segment(
                [egui::pos2(rect.left() + offset, rect.top()), egui::pos2(rect.left() + offset, rect.bottom())],
                stroke,
            );
            painter.line_segment(
                [egui::pos2(rect.left(), rect.top() + offset), egui::pos2(rect.right(), rect.top() + offset)],
                stroke,
            );
        }

        self.last_hover = None;
        if accepts_input
            && let Some(hover_pos) = response.hover_pos()
        {
            let x = ((hover_pos.x - rect.left()) / cell_size) as usize;
            let y = ((hover_pos.y - rect.top()) / cell_size) as usize;
            if x < BOARD_SIDE && y < BOARD_SIDE && board.is_cell_empty(to_index(x, y)) {
                let index = to_index(x, y);
                painter.rect_filled(
                    Self::cell_rect(rect, index, cell_size),
                    0.0,
                    egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
                );
                self.last_hover = Some(index);
            }
        }

        for (index, &mark) in board.cells().iter().enumerate() {
            let cell_rect = Self::cell_rect(rect, index, cell_size);
            match mark {
                Mark::X => Self::draw_x(&painter, cell_rect),
                Mark::O => Self::draw_o(&painter, cell_rect),
                Mark::Empty => {}
            }
        }

        if let Some(line) = winning_line {
            let start = Self::cell_rect(rect, line.start(), cell_size).center();
            let end = Self::cell_rect(rect, line.end(), cell_size).center();
            painter.line_segment(
                [start, end],
                egui::Stroke::new(6.0, egui::Color32::from_rgba_unmultiplied(50, 200, 50, 200)),
            );
        }

        if response.clicked() {
            self.last_hover
        } else {
            None
        }
    }

    fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(220, 50, 50));

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(50, 50, 220));
        painter.circle_stroke(rect.center(), radius, stroke);
    }
}
