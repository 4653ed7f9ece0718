//! Half-block rendering of decoded pictures.

use guessr_core::resource::{fit_within, Picture};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

const UPPER_HALF: char = '▀';

/// Draws a [`Picture`] centred in its area, two pixels per cell.
pub struct PictureView<'a> {
    picture: &'a Picture,
    background: Color,
}

impl<'a> PictureView<'a> {
    pub fn new(picture: &'a Picture, background: Color) -> Self {
        Self {
            picture,
            background,
        }
    }

    fn sample(&self, x: u32, y: u32, width: u32, height: u32) -> Color {
        let source_x = x * self.picture.width / width;
        let source_y = y * self.picture.height / height;
        let [r, g, b] = self.picture.pixel(source_x, source_y);
        Color::Rgb(r, g, b)
    }
}

impl Widget for PictureView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.picture.width == 0 {
            return;
        }

        let (width, height) = fit_within(
            self.picture.width,
            self.picture.height,
            u32::from(area.width),
            u32::from(area.height) * 2,
        );
        let rows = (height + 1) / 2;
        let x0 = area.x + (area.width - width as u16) / 2;
        let y0 = area.y + (area.height - rows as u16) / 2;

        for row in 0..rows {
            for col in 0..width {
                let top = self.sample(col, row * 2, width, height);
                let bottom = if row * 2 + 1 < height {
                    self.sample(col, row * 2 + 1, width, height)
                } else {
                    self.background
                };
                buf.get_mut(x0 + col as u16, y0 + row as u16)
                    .set_char(UPPER_HALF)
                    .set_fg(top)
                    .set_bg(bottom);
            }
        }
    }
}
