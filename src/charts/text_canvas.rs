//! A character-cell drawing backend so charts can be shown on a terminal.
//!
//! Each backend pixel is one character. Text is written left to right (or
//! top to bottom when rotated) and always wins over line work. Opaque
//! bright fills erase the cells they cover; other fills use a glyph picked
//! by the dominant colour channel.

use plotters_backend::text_anchor::{HPos, VPos};
use plotters_backend::{
    BackendColor, BackendCoord, BackendStyle, BackendTextStyle, DrawingBackend, DrawingErrorKind,
    FontTransform,
};
use std::io;

const MIN_ALPHA: f64 = 0.3;
const ERASE_BRIGHTNESS: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Cell {
    Empty,
    HLine,
    VLine,
    Cross,
    Pixel,
    Fill(char),
    Text(char),
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::HLine => '-',
            Cell::VLine => '|',
            Cell::Cross => '+',
            Cell::Pixel => '.',
            Cell::Fill(c) | Cell::Text(c) => c,
        }
    }

    fn merge(self, next: Cell) -> Cell {
        match (self, next) {
            (_, Cell::Text(c)) | (Cell::Text(c), _) => Cell::Text(c),
            (Cell::HLine, Cell::VLine)
            | (Cell::VLine, Cell::HLine)
            | (Cell::Cross, Cell::HLine | Cell::VLine) => Cell::Cross,
            (_, next) => next,
        }
    }
}

fn is_visible(color: &BackendColor) -> bool {
    color.alpha > MIN_ALPHA
}

fn is_background(color: &BackendColor) -> bool {
    let (r, g, b) = color.rgb;
    r as u32 + g as u32 + b as u32 >= ERASE_BRIGHTNESS
}

fn fill_glyph(color: &BackendColor) -> char {
    let (r, g, b) = color.rgb;
    if b >= r && b >= g {
        '#'
    } else if r >= g {
        '='
    } else {
        '*'
    }
}

/// Drawing backend that rasterises into a grid of characters and writes the
/// finished grid into `frame` on `present`.
pub struct TextCanvas<'a> {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    frame: &'a mut String,
}

impl<'a> TextCanvas<'a> {
    pub fn new(frame: &'a mut String, (width, height): (u32, u32)) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; (width * height) as usize],
            frame,
        }
    }

    fn cell_mut(&mut self, (x, y): BackendCoord) -> Option<&mut Cell> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        self.cells.get_mut((y as u32 * self.width + x as u32) as usize)
    }

    fn put(&mut self, point: BackendCoord, next: Cell) {
        if let Some(cell) = self.cell_mut(point) {
            *cell = cell.merge(next);
        }
    }
}

impl DrawingBackend for TextCanvas<'_> {
    type ErrorType = io::Error;

    fn get_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn ensure_prepared(&mut self) -> Result<(), DrawingErrorKind<io::Error>> {
        Ok(())
    }

    fn present(&mut self) -> Result<(), DrawingErrorKind<io::Error>> {
        let mut frame = String::with_capacity(((self.width + 1) * self.height) as usize);
        for row in self.cells.chunks(self.width.max(1) as usize) {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            frame.push_str(line.trim_end());
            frame.push('\n');
        }
        *self.frame = frame;
        Ok(())
    }

    fn draw_pixel(
        &mut self,
        point: BackendCoord,
        color: BackendColor,
    ) -> Result<(), DrawingErrorKind<io::Error>> {
        if is_visible(&color) {
            self.put(point, Cell::Pixel);
        }
        Ok(())
    }

    fn draw_line<S: BackendStyle>(
        &mut self,
        from: BackendCoord,
        to: BackendCoord,
        style: &S,
    ) -> Result<(), DrawingErrorKind<io::Error>> {
        if !is_visible(&style.color()) {
            return Ok(());
        }

        if from.0 == to.0 {
            for y in from.1.min(to.1)..=from.1.max(to.1) {
                self.put((from.0, y), Cell::VLine);
            }
            return Ok(());
        }

        if from.1 == to.1 {
            for x in from.0.min(to.0)..=from.0.max(to.0) {
                self.put((x, from.1), Cell::HLine);
            }
            return Ok(());
        }

        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let steps = dx.abs().max(dy.abs());
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let x = from.0 as f64 + dx as f64 * t;
            let y = from.1 as f64 + dy as f64 * t;
            self.put((x.round() as i32, y.round() as i32), Cell::Pixel);
        }
        Ok(())
    }

    fn draw_rect<S: BackendStyle>(
        &mut self,
        upper_left: BackendCoord,
        bottom_right: BackendCoord,
        style: &S,
        fill: bool,
    ) -> Result<(), DrawingErrorKind<io::Error>> {
        let color = style.color();
        if !is_visible(&color) {
            return Ok(());
        }

        if !fill {
            let (x0, y0) = upper_left;
            let (x1, y1) = bottom_right;
            self.draw_line((x0, y0), (x1, y0), style)?;
            self.draw_line((x0, y1), (x1, y1), style)?;
            self.draw_line((x0, y0), (x0, y1), style)?;
            return self.draw_line((x1, y0), (x1, y1), style);
        }

        let erase = is_background(&color);
        let glyph = fill_glyph(&color);
        for y in upper_left.1.min(bottom_right.1)..=upper_left.1.max(bottom_right.1) {
            for x in upper_left.0.min(bottom_right.0)..=upper_left.0.max(bottom_right.0) {
                if erase {
                    if let Some(cell) = self.cell_mut((x, y)) {
                        *cell = Cell::Empty;
                    }
                } else {
                    self.put((x, y), Cell::Fill(glyph));
                }
            }
        }
        Ok(())
    }

    fn estimate_text_size<TStyle: BackendTextStyle>(
        &self,
        text: &str,
        style: &TStyle,
    ) -> Result<(u32, u32), DrawingErrorKind<io::Error>> {
        let len = text.chars().count() as u32;
        match style.transform() {
            FontTransform::Rotate90 | FontTransform::Rotate270 => Ok((1, len)),
            _ => Ok((len, 1)),
        }
    }

    fn draw_text<TStyle: BackendTextStyle>(
        &mut self,
        text: &str,
        style: &TStyle,
        pos: BackendCoord,
    ) -> Result<(), DrawingErrorKind<io::Error>> {
        let (width, height) = self.estimate_text_size(text, style)?;
        let (width, height) = (width as i32, height as i32);
        let anchor = style.anchor();
        let dx = match anchor.h_pos {
            HPos::Left => 0,
            HPos::Right => -width,
            HPos::Center => -width / 2,
        };
        let dy = match anchor.v_pos {
            VPos::Top => 0,
            VPos::Center => -height / 2,
            VPos::Bottom => -height,
        };

        let vertical = height > 1;
        let (x0, y0) = (pos.0 + dx, pos.1 + dy);
        for (i, ch) in text.chars().enumerate() {
            let i = i as i32;
            let point = if vertical { (x0, y0 + i) } else { (x0 + i, y0) };
            self.put(point, Cell::Text(ch));
        }
        Ok(())
    }
}
