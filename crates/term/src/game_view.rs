//! GameView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. The same layout is
//! used for drawing and for hit-testing mouse clicks, so a click always lands
//! on what is shown.
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │          FRUIT MEMORY MATCH         │
//! │       Match the pairs to win!       │
//! │  TIME    SCORE   MOVES  ACCURACY    │
//! │  00:12    20       3       67%      │
//! │                                     │
//! │ ┌──────┐ ┌──────┐ ┌──────┐ ┌──────┐ │
//! │ │  ?   │ │  🍎  │ │  ?   │ │  ?   │ │
//! │ └──────┘ └──────┘ └──────┘ └──────┘ │
//! │   ...                               │
//! │           [ Restart Game ]          │
//! │  arrows move  enter flip  q quit    │
//! └─────────────────────────────────────┘
//! ```

use crate::core::SessionSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{TileFace, GRID_COLUMNS};

const TITLE: &str = "FRUIT MEMORY MATCH";
const SUBTITLE: &str = "Match the pairs to win!";
const RESTART_LABEL: &str = "[ Restart Game ]";
const PLAY_AGAIN_LABEL: &str = "[ Play Again ]";
const HINT: &str = "arrows move  enter flip  r restart  q quit";
const HIDDEN_MARK: char = '?';
const STAT_LABELS: [&str; 4] = ["TIME", "SCORE", "MOVES", "ACCURACY"];

/// Rows above the grid inside the frame: title, subtitle, labels, values, blank.
const HEADER_ROWS: u16 = 5;
/// Rows below the grid inside the frame: blank, restart button, hint.
const FOOTER_ROWS: u16 = 3;

const MODAL_W: u16 = 28;
const MODAL_H: u16 = 10;

const BG: Rgb = Rgb::new(24, 20, 36);
const PANEL_FG: Rgb = Rgb::new(220, 220, 230);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Something a click can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Tile(usize),
    /// The restart button, or "play again" on the summary.
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rect {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl Rect {
    fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && y >= self.y && x - self.x < self.w && y - self.y < self.h
    }
}

/// Screen positions of everything the view draws.
#[derive(Debug, Clone, Copy)]
struct Layout {
    frame: Rect,
    grid_x: u16,
    grid_y: u16,
    restart: Rect,
    modal: Rect,
    play_again: Rect,
}

/// Terminal renderer for the tile board and its scoreboard.
pub struct GameView {
    /// Tile width in terminal columns (including its border).
    tile_w: u16,
    /// Tile height in terminal rows (including its border).
    tile_h: u16,
    /// Columns between tiles.
    gap: u16,
    columns: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            tile_w: 8,
            tile_h: 3,
            gap: 1,
            columns: GRID_COLUMNS as u16,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn grid_w(&self) -> u16 {
        self.columns * self.tile_w + self.columns.saturating_sub(1) * self.gap
    }

    /// Frame size needed for a deck of `tiles` tiles.
    pub fn frame_size(&self, tiles: usize) -> (u16, u16) {
        let rows = self.rows_for(tiles);
        (
            self.grid_w() + 4,
            2 + HEADER_ROWS + rows * self.tile_h + FOOTER_ROWS,
        )
    }

    fn rows_for(&self, tiles: usize) -> u16 {
        let columns = self.columns.max(1) as usize;
        tiles.div_ceil(columns) as u16
    }

    fn layout(&self, tiles: usize, viewport: Viewport) -> Layout {
        let (frame_w, frame_h) = self.frame_size(tiles);
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let frame = Rect {
            x,
            y,
            w: frame_w,
            h: frame_h,
        };

        let rows = self.rows_for(tiles);
        let grid_x = x + 2;
        let grid_y = y + 1 + HEADER_ROWS;

        let label_w = RESTART_LABEL.chars().count() as u16;
        let restart = Rect {
            x: x + frame_w.saturating_sub(label_w) / 2,
            y: grid_y + rows * self.tile_h + 1,
            w: label_w,
            h: 1,
        };

        let modal = Rect {
            x: x + frame_w.saturating_sub(MODAL_W) / 2,
            y: y + frame_h.saturating_sub(MODAL_H) / 2,
            w: MODAL_W,
            h: MODAL_H,
        };
        let again_w = PLAY_AGAIN_LABEL.chars().count() as u16;
        let play_again = Rect {
            x: modal.x + MODAL_W.saturating_sub(again_w) / 2,
            y: modal.y + MODAL_H - 2,
            w: again_w,
            h: 1,
        };

        Layout {
            frame,
            grid_x,
            grid_y,
            restart,
            modal,
            play_again,
        }
    }

    fn tile_rect(&self, layout: &Layout, index: usize) -> Rect {
        let columns = self.columns.max(1) as usize;
        let col = (index % columns) as u16;
        let row = (index / columns) as u16;
        Rect {
            x: layout.grid_x + col * (self.tile_w + self.gap),
            y: layout.grid_y + row * self.tile_h,
            w: self.tile_w,
            h: self.tile_h,
        }
    }

    /// What is under terminal cell `(x, y)`.
    ///
    /// Matched tiles are not targets. While the summary is shown only its
    /// "play again" button responds.
    pub fn hit_test(
        &self,
        snap: &SessionSnapshot,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<HitTarget> {
        let layout = self.layout(snap.tiles.len(), viewport);

        if snap.show_summary() {
            return layout
                .play_again
                .contains(x, y)
                .then_some(HitTarget::Restart);
        }

        if layout.restart.contains(x, y) {
            return Some(HitTarget::Restart);
        }

        (0..snap.tiles.len())
            .find(|&i| self.tile_rect(&layout, i).contains(x, y))
            .filter(|&i| snap.tiles[i].face.is_interactive())
            .map(HitTarget::Tile)
    }

    /// Render into an existing framebuffer.
    ///
    /// `focus` is the keyboard cursor; `None` hides it.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        focus: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(snap.tiles.len(), viewport);
        let frame = layout.frame;
        let panel = CellStyle::new(PANEL_FG, BG);

        fb.fill_rect(frame.x, frame.y, frame.w, frame.h, ' ', panel);
        draw_box(fb, frame, BoxStyle::Light, CellStyle::new(Rgb::new(150, 120, 200), BG));

        // Header.
        let title = CellStyle::new(Rgb::new(230, 110, 200), BG).bold();
        put_centered(fb, frame.x, frame.w, frame.y + 1, TITLE, title);
        let subtitle = CellStyle::new(Rgb::new(150, 150, 160), BG);
        put_centered(fb, frame.x, frame.w, frame.y + 2, SUBTITLE, subtitle);

        self.draw_stats(fb, snap, &layout);

        // Tiles.
        for (i, tile) in snap.tiles.iter().enumerate() {
            let rect = self.tile_rect(&layout, i);
            let focused = focus == Some(i) && !snap.show_summary();
            draw_tile(fb, rect, tile.face, tile.symbol.glyph_char(), focused);
        }

        // Footer.
        let button = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(90, 70, 180)).bold();
        fb.put_str(layout.restart.x, layout.restart.y, RESTART_LABEL, button);
        let hint = CellStyle::new(Rgb::new(120, 120, 130), BG).dim();
        put_centered(fb, frame.x, frame.w, layout.restart.y + 1, HINT, hint);

        if snap.show_summary() {
            self.draw_summary(fb, snap, &layout);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &SessionSnapshot,
        focus: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, focus, viewport, &mut fb);
        fb
    }

    fn draw_stats(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, layout: &Layout) {
        let label = CellStyle::new(Rgb::new(160, 160, 170), BG).bold();
        let colors = [
            Rgb::new(110, 120, 240),
            Rgb::new(190, 110, 240),
            Rgb::new(100, 160, 250),
            Rgb::new(90, 210, 120),
        ];

        let col_w = self.grid_w() / 4;
        let label_y = layout.frame.y + 3;
        let value_y = label_y + 1;

        let mut values: [String; 4] = Default::default();
        snap.write_time(&mut values[0]);
        values[1] = snap.score.to_string();
        values[2] = snap.moves.to_string();
        values[3] = format!("{}%", snap.accuracy);

        for (i, (name, value)) in STAT_LABELS.iter().zip(values.iter()).enumerate() {
            let x = layout.grid_x + (i as u16) * col_w;
            put_centered(fb, x, col_w, label_y, name, label);
            put_centered(fb, x, col_w, value_y, value, CellStyle::new(colors[i], BG).bold());
        }
    }

    fn draw_summary(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, layout: &Layout) {
        let modal = layout.modal;
        let body = CellStyle::new(Rgb::new(40, 40, 50), Rgb::new(250, 250, 250));
        fb.fill_rect(modal.x, modal.y, modal.w, modal.h, ' ', body);
        draw_box(fb, modal, BoxStyle::Heavy, CellStyle::new(Rgb::new(150, 90, 220), Rgb::new(250, 250, 250)));

        let heading = CellStyle::new(Rgb::new(140, 60, 220), Rgb::new(250, 250, 250)).bold();
        put_centered(fb, modal.x, modal.w, modal.y + 1, "YOU WIN! 🎉", heading);

        let value = CellStyle { bold: true, ..body };
        let rows: [(&str, String); 4] = [
            ("Time:", snap.time()),
            ("Final Score:", snap.score.to_string()),
            ("Moves:", snap.moves.to_string()),
            ("Accuracy:", format!("{}%", snap.accuracy)),
        ];
        for (i, (name, text)) in rows.iter().enumerate() {
            let y = modal.y + 3 + i as u16;
            fb.put_str(modal.x + 3, y, name, body);
            let w = text.chars().count() as u16;
            fb.put_str(modal.x + modal.w - 3 - w, y, text, value);
        }

        let button = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(90, 70, 180)).bold();
        fb.put_str(layout.play_again.x, layout.play_again.y, PLAY_AGAIN_LABEL, button);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoxStyle {
    Light,
    Heavy,
}

fn draw_box(fb: &mut FrameBuffer, r: Rect, kind: BoxStyle, style: CellStyle) {
    if r.w < 2 || r.h < 2 {
        return;
    }
    let (tl, tr, bl, br, horiz, vert) = match kind {
        BoxStyle::Light => ('┌', '┐', '└', '┘', '─', '│'),
        BoxStyle::Heavy => ('┏', '┓', '┗', '┛', '━', '┃'),
    };

    fb.put_char(r.x, r.y, tl, style);
    fb.put_char(r.x + r.w - 1, r.y, tr, style);
    fb.put_char(r.x, r.y + r.h - 1, bl, style);
    fb.put_char(r.x + r.w - 1, r.y + r.h - 1, br, style);

    for dx in 1..r.w - 1 {
        fb.put_char(r.x + dx, r.y, horiz, style);
        fb.put_char(r.x + dx, r.y + r.h - 1, horiz, style);
    }
    for dy in 1..r.h - 1 {
        fb.put_char(r.x, r.y + dy, vert, style);
        fb.put_char(r.x + r.w - 1, r.y + dy, vert, style);
    }
}

fn draw_tile(fb: &mut FrameBuffer, r: Rect, face: TileFace, glyph: char, focused: bool) {
    let (border_fg, bg) = match face {
        TileFace::Hidden => (Rgb::new(240, 170, 80), Rgb::new(70, 50, 30)),
        TileFace::Revealed => (Rgb::new(110, 160, 250), Rgb::new(30, 50, 90)),
        TileFace::Matched => (Rgb::new(90, 200, 110), Rgb::new(25, 70, 40)),
    };

    let mut border = CellStyle::new(border_fg, bg);
    if face == TileFace::Matched {
        border = border.dim();
    }
    let kind = if focused {
        border = CellStyle::new(Rgb::new(255, 255, 255), bg).bold();
        BoxStyle::Heavy
    } else {
        BoxStyle::Light
    };

    fb.fill_rect(r.x, r.y, r.w, r.h, ' ', CellStyle::new(PANEL_FG, bg));
    draw_box(fb, r, kind, border);

    let cx = r.x + r.w.saturating_sub(2) / 2;
    let cy = r.y + r.h / 2;
    if face.shows_symbol() {
        fb.put_wide(cx, cy, glyph, CellStyle::new(PANEL_FG, bg));
    } else {
        let mark = CellStyle::new(Rgb::new(200, 190, 170), bg).bold();
        fb.put_char(cx, cy, HIDDEN_MARK, mark);
    }
}

fn put_centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let text_w: u16 = text.chars().map(crate::fb::char_width).sum();
    fb.put_str(x + w.saturating_sub(text_w) / 2, y, text, style);
}
