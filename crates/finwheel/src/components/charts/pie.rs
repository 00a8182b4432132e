//! Category pie chart.
//!
//! The chart is rasterized into the terminal buffer with upper half blocks:
//! every cell holds two vertically stacked pixels (foreground = top pixel,
//! background = bottom pixel), which makes pixels roughly square on common
//! terminal fonts. All geometry is computed in that pixel space.
//!
//! Paint order: glow ring, slices, rounded caps with their outlines, the
//! inner disc, then the percentage labels and the total.

use finwheel_core::format::{format_amount, format_percentage};
use finwheel_core::{Palette, Rgb, SliceGeometry};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Widget,
};

use crate::util::styles::{ACCENT_TEXT, CHART_BACKGROUND, LABEL_TEXT, to_color};

/// Reference widget size the proportions below are expressed in
const DESIGN_SIZE: f64 = 200.0;
/// Space reserved around the disc for labels, in design units
const DESIGN_MARGIN: f64 = 55.0;
const DESIGN_GLOW: f64 = 3.0;
const DESIGN_CAP_RADIUS: f64 = 12.0;
const DESIGN_LABEL_OFFSET: f64 = 18.0;

/// Inner disc diameter relative to the chart's
const INNER_DISC_RATIO: f64 = 2.0 / 3.0;

const GLOW_COLOR: Rgb = Rgb::new(200, 250, 250);

/// Alpha stops of the glow, from the center outwards
const GLOW_STOPS: [(f64, u8); 7] = [
    (0.0, 100),
    (0.5, 90),
    (0.6, 80),
    (0.7, 70),
    (0.8, 60),
    (0.9, 50),
    (1.0, 5),
];

const CAP_OUTLINE_ALPHA: u8 = 40;

const CENTER_BASE_SHADE: u8 = 18;
const CENTER_STOP_COUNT: usize = 20;
const CENTER_MAX_LIFT: usize = 14;

const UPPER_HALF_BLOCK: &str = "▀";

/// Pixel-space layout of the chart inside a widget area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub center_x: f64,
    pub center_y: f64,
    /// Radius of the base square's inscribed circle
    pub base_radius: f64,
    pub glow: f64,
    /// Radius of the slices
    pub radius: f64,
    pub cap_radius: f64,
    pub label_radius: f64,
    pub inner_radius: f64,
}

impl ChartGeometry {
    /// Fit the chart into `width` × `height` pixels. `None` if it would be too
    /// small to draw.
    pub fn fit(width: f64, height: f64) -> Option<Self> {
        let side = width.min(height);
        let scale = side / DESIGN_SIZE;
        let glow = (DESIGN_GLOW * scale).max(1.0);
        let base_size = side - DESIGN_MARGIN * scale - glow * 2.0;
        let base_radius = base_size / 2.0;
        let radius = base_radius - glow / 4.0;
        if radius < 3.0 {
            return None;
        }

        Some(Self {
            center_x: width / 2.0,
            center_y: height / 2.0,
            base_radius,
            glow,
            radius,
            cap_radius: (DESIGN_CAP_RADIUS * scale).max(1.0),
            label_radius: radius + (DESIGN_LABEL_OFFSET * scale).max(2.0),
            inner_radius: radius * INNER_DISC_RATIO,
        })
    }

    /// Pixel grid for a terminal area (two pixels per cell vertically)
    pub fn for_area(area: Rect) -> Option<Self> {
        Self::fit(area.width as f64, area.height as f64 * 2.0)
    }

    pub fn distance(&self, x: f64, y: f64) -> f64 {
        (x - self.center_x).hypot(y - self.center_y)
    }

    /// Angle of a point around the center, degrees counter-clockwise from east
    pub fn angle_of(&self, x: f64, y: f64) -> f64 {
        polar_angle(x - self.center_x, self.center_y - y)
    }

    /// Point on the rim at `angle` (math convention)
    pub fn rim_point(&self, angle: f64, radius: f64) -> (f64, f64) {
        let rad = angle.to_radians();
        (
            self.center_x + radius * rad.cos(),
            self.center_y - radius * rad.sin(),
        )
    }

    /// Center of the rounded cap drawn on a slice's leading edge
    pub fn cap_center(&self, start_angle: f64) -> (f64, f64) {
        self.rim_point(start_angle, self.radius - self.cap_radius)
    }

    /// Where the percentage label of a slice is centered.
    ///
    /// The bisector is converted to the clockwise-from-top convention before
    /// projecting.
    pub fn label_anchor(&self, slice: &SliceGeometry) -> (f64, f64) {
        let clockwise = (360.0 - slice.bisector() + 90.0).rem_euclid(360.0);
        let rad = clockwise.to_radians();
        (
            self.center_x + self.label_radius * rad.sin(),
            self.center_y - self.label_radius * rad.cos(),
        )
    }
}

/// Angle in `[0, 360)` for a vector with y pointing up
fn polar_angle(dx: f64, dy: f64) -> f64 {
    dy.atan2(dx).to_degrees().rem_euclid(360.0)
}

/// Glow alpha at relative distance `t` (0 = center, 1 = outer edge).
/// Outside the glow the alpha is zero.
pub fn glow_alpha(t: f64) -> u8 {
    if !(0.0..=1.0).contains(&t) {
        return 0;
    }
    let stops = GLOW_STOPS.map(|(pos, alpha)| (pos, alpha as f64));
    interpolate_stops(&stops, t).round() as u8
}

/// Gray level of the inner disc at relative distance `t`
pub fn center_shade(t: f64) -> u8 {
    let stops = center_stops();
    interpolate_stops(&stops, t.clamp(0.0, 1.0)).round() as u8
}

fn center_stops() -> [(f64, f64); CENTER_STOP_COUNT + 1] {
    let mut stops = [(0.0, CENTER_BASE_SHADE as f64); CENTER_STOP_COUNT + 1];
    for (i, stop) in stops.iter_mut().enumerate().skip(1) {
        let lift = (i + 1).min(CENTER_MAX_LIFT);
        *stop = (
            i as f64 / CENTER_STOP_COUNT as f64,
            (CENTER_BASE_SHADE as usize + lift) as f64,
        );
    }
    stops
}

fn interpolate_stops(stops: &[(f64, f64)], t: f64) -> f64 {
    let Some(&(first_pos, first_value)) = stops.first() else {
        return 0.0;
    };
    if t <= first_pos {
        return first_value;
    }
    for pair in stops.windows(2) {
        let (p0, v0) = pair[0];
        let (p1, v1) = pair[1];
        if t <= p1 {
            let span = p1 - p0;
            if span <= f64::EPSILON {
                return v1;
            }
            return v0 + (v1 - v0) * (t - p0) / span;
        }
    }
    stops.last().map_or(first_value, |&(_, v)| v)
}

/// Index of the slice covering `angle`. Angles past the accumulated end
/// (floating point drift) belong to the last slice.
pub fn slice_at(slices: &[SliceGeometry], angle: f64) -> Option<usize> {
    if slices.is_empty() {
        return None;
    }
    slices
        .iter()
        .position(|s| s.span_angle > 0.0 && angle >= s.start_angle && angle < s.end_angle())
        .or(Some(slices.len() - 1))
}

/// Pie chart widget for one side's ranked categories.
pub struct PieChart<'a> {
    slices: &'a [SliceGeometry],
    total: f64,
    palette: &'a Palette,
    currency: &'a str,
}

impl<'a> PieChart<'a> {
    pub fn new(slices: &'a [SliceGeometry], total: f64, palette: &'a Palette) -> Self {
        Self {
            slices,
            total,
            palette,
            currency: "",
        }
    }

    pub fn currency(mut self, currency: &'a str) -> Self {
        self.currency = currency;
        self
    }

    fn slice_color(&self, slice: &SliceGeometry) -> Rgb {
        self.palette.color_for_rank(slice.color_index)
    }

    /// Composited color of the pixel centered at `(x, y)`
    pub fn pixel_color(&self, geometry: &ChartGeometry, x: f64, y: f64) -> Rgb {
        let mut color = CHART_BACKGROUND;
        let distance = geometry.distance(x, y);

        let glow_radius = geometry.base_radius + geometry.glow;
        if distance <= glow_radius {
            color = color.blend(GLOW_COLOR, glow_alpha(distance / glow_radius));
        }

        if distance <= geometry.radius {
            if let Some(index) = slice_at(self.slices, geometry.angle_of(x, y)) {
                color = self.slice_color(&self.slices[index]);
            }
        }

        for slice in self.slices {
            color = self.paint_cap(geometry, slice, x, y, color);
        }

        if distance <= geometry.inner_radius {
            color = Rgb::gray(center_shade(distance / geometry.inner_radius));
        }

        color
    }

    /// Filled cap on the slice's leading edge plus a faint outline along the
    /// half of the cap that trails into the previous slice.
    fn paint_cap(
        &self,
        geometry: &ChartGeometry,
        slice: &SliceGeometry,
        x: f64,
        y: f64,
        under: Rgb,
    ) -> Rgb {
        let (cx, cy) = geometry.cap_center(slice.start_angle);
        let distance = (x - cx).hypot(y - cy);
        let mut color = under;

        if distance <= geometry.cap_radius {
            color = self.slice_color(slice);
        }

        if (distance - geometry.cap_radius).abs() <= 0.5 {
            let relative = (polar_angle(x - cx, cy - y) - (slice.start_angle + 180.0))
                .rem_euclid(360.0);
            if relative <= 180.0 {
                color = color.blend(Rgb::BLACK, CAP_OUTLINE_ALPHA);
            }
        }

        color
    }

    fn paint_pixels(&self, geometry: &ChartGeometry, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                let x = col as f64 + 0.5;
                let top = self.pixel_color(geometry, x, row as f64 * 2.0 + 0.5);
                let bottom = self.pixel_color(geometry, x, row as f64 * 2.0 + 1.5);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(UPPER_HALF_BLOCK)
                        .set_fg(to_color(top))
                        .set_bg(to_color(bottom));
                }
            }
        }
    }

    fn paint_labels(
        &self,
        geometry: &ChartGeometry,
        area: Rect,
        slots: &mut LabelSlots,
        buf: &mut Buffer,
    ) {
        let style = Style::default()
            .fg(to_color(LABEL_TEXT))
            .bg(to_color(CHART_BACKGROUND))
            .add_modifier(Modifier::BOLD);
        for slice in self.slices {
            let text = format_percentage(slice.percentage);
            let (x, y) = geometry.label_anchor(slice);
            if let Some(rect) = slots.place(area, x, y, geometry.center_y, text_width(&text)) {
                buf.set_stringn(rect.x, rect.y, &text, rect.width as usize, style);
            }
        }
    }
}

/// Display width of `text` in cells
fn text_width(text: &str) -> u16 {
    Span::raw(text).width().min(u16::MAX as usize) as u16
}

/// Cells for `width` columns centered on pixel column `x` in `row`.
///
/// The start column is clamped so the whole text stays inside `area`.
/// `None` if the text is wider than the area or the row is outside it.
fn text_rect(area: Rect, x: f64, row: i32, width: u16) -> Option<Rect> {
    if width == 0 || width > area.width || row < 0 || row >= area.height as i32 {
        return None;
    }
    let max_col = (area.width - width) as f64;
    let col = (x - width as f64 / 2.0).round().clamp(0.0, max_col) as u16;
    Some(Rect::new(area.x + col, area.y + row as u16, width, 1))
}

/// Rows a label may move away from the center when its own row is taken
const LABEL_NUDGE_ROWS: i32 = 2;

/// Text cells claimed so far; labels keep one free column between them.
#[derive(Debug, Default)]
struct LabelSlots {
    taken: Vec<Rect>,
}

impl LabelSlots {
    fn is_free(&self, rect: Rect) -> bool {
        let padded = Rect {
            x: rect.x.saturating_sub(1),
            width: rect.width.saturating_add(2),
            ..rect
        };
        self.taken.iter().all(|taken| !taken.intersects(padded))
    }

    /// Claim cells for a label anchored at pixel `(x, y)`.
    ///
    /// Tries the anchor row, then rows further from `center_y`, then one row
    /// closer. `None` means the label is left out.
    fn place(&mut self, area: Rect, x: f64, y: f64, center_y: f64, width: u16) -> Option<Rect> {
        if area.height == 0 {
            return None;
        }
        let row = ((y / 2.0).floor() as i32).clamp(0, area.height as i32 - 1);
        let outward = if y < center_y { -1 } else { 1 };
        let candidates = (0..=LABEL_NUDGE_ROWS)
            .map(|step| row + outward * step)
            .chain(std::iter::once(row - outward));

        for candidate in candidates {
            let Some(rect) = text_rect(area, x, candidate, width) else {
                continue;
            };
            if self.is_free(rect) {
                self.taken.push(rect);
                return Some(rect);
            }
        }
        None
    }
}

impl Widget for PieChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(geometry) = ChartGeometry::for_area(area) else {
            return;
        };
        self.paint_pixels(&geometry, area, buf);

        // The total is claimed first so labels steer around it
        let mut slots = LabelSlots::default();
        let total = format_amount(self.total, self.currency);
        let total_rect = slots.place(
            area,
            geometry.center_x,
            geometry.center_y,
            geometry.center_y,
            text_width(&total),
        );

        self.paint_labels(&geometry, area, &mut slots, buf);

        if let Some(rect) = total_rect {
            let style = Style::default()
                .fg(to_color(ACCENT_TEXT))
                .bg(to_color(Rgb::gray(center_shade(0.0))))
                .add_modifier(Modifier::BOLD);
            buf.set_stringn(rect.x, rect.y, &total, rect.width as usize, style);
        }
    }
}
