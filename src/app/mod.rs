//! eframe application: paints the render surface and feeds pointer input to the controller.

pub mod layout;
pub mod run;

use std::f32::consts::FRAC_PI_2;

use egui::epaint::TextShape;
use egui::{vec2, Align2, Color32, CursorIcon, FontId, Painter, Pos2, Sense, Stroke, Vec2};

use crate::config::ChartConfig;
use crate::controller::AxisSelectionController;
use crate::data::{AxisKind, Dataset};
use crate::error::Result;
use crate::events::ChartEvent;

pub use run::{run_scatter, run_scatter_from_path};

const MARKER_FILL: Color32 = Color32::from_rgb(137, 189, 211);
const MARKER_STROKE: Color32 = Color32::WHITE;
const POINT_LABEL: Color32 = Color32::WHITE;
const AXIS_COLOR: Color32 = Color32::from_gray(40);
const ACTIVE_LABEL: Color32 = Color32::BLACK;
const INACTIVE_LABEL: Color32 = Color32::from_gray(160);
const TICK_LENGTH: f32 = 6.0;

/// Interactive scatter chart window.
pub struct ScatterApp {
    controller: AxisSelectionController,
    config: ChartConfig,
    hovered: Option<usize>,
}

impl ScatterApp {
    pub fn new(dataset: Dataset, config: ChartConfig) -> Result<Self> {
        let controller = AxisSelectionController::new(dataset, &config, 0.0)?;
        Ok(Self {
            controller,
            config,
            hovered: None,
        })
    }

    pub fn controller(&self) -> &AxisSelectionController {
        &self.controller
    }

    fn plot_size(&self) -> Vec2 {
        vec2(self.config.plot_width(), self.config.plot_height())
    }

    fn dispatch(&mut self, event: ChartEvent, now: f64) {
        if let Err(e) = self.controller.handle(event, now) {
            tracing::warn!("Rejected chart event: {e}");
        }
    }

    fn paint_axes(&self, painter: &Painter, origin: Pos2, now: f64) {
        let size = self.plot_size();
        let stroke = Stroke::new(1.0, AXIS_COLOR);
        let font = FontId::proportional(11.0);
        let surface = self.controller.surface();

        let x_axis_y = origin.y + size.y;
        painter.line_segment([Pos2::new(origin.x, x_axis_y), Pos2::new(origin.x + size.x, x_axis_y)], stroke);
        for tick in surface.ticks(AxisKind::Horizontal).visible(now) {
            let color = AXIS_COLOR.gamma_multiply(tick.opacity);
            let x = origin.x + tick.position;
            painter.line_segment(
                [Pos2::new(x, x_axis_y), Pos2::new(x, x_axis_y + TICK_LENGTH)],
                Stroke::new(1.0, color),
            );
            painter.text(
                Pos2::new(x, x_axis_y + TICK_LENGTH + 2.0),
                Align2::CENTER_TOP,
                tick.label,
                font.clone(),
                color,
            );
        }

        painter.line_segment([origin, Pos2::new(origin.x, origin.y + size.y)], stroke);
        for tick in surface.ticks(AxisKind::Vertical).visible(now) {
            let color = AXIS_COLOR.gamma_multiply(tick.opacity);
            let y = origin.y + tick.position;
            painter.line_segment(
                [Pos2::new(origin.x - TICK_LENGTH, y), Pos2::new(origin.x, y)],
                Stroke::new(1.0, color),
            );
            painter.text(
                Pos2::new(origin.x - TICK_LENGTH - 3.0, y),
                Align2::RIGHT_CENTER,
                tick.label,
                font.clone(),
                color,
            );
        }
    }

    fn paint_points(&self, painter: &Painter, origin: Pos2, now: f64) {
        let surface = self.controller.surface();
        let fill = MARKER_FILL.gamma_multiply(self.config.marker_opacity);
        let font = FontId::proportional(10.0);
        for i in 0..surface.markers().len() {
            if let Some(c) = surface.marker_center(i, now) {
                painter.circle(origin + c.to_vec2(), surface.marker_radius, fill, Stroke::new(1.0, MARKER_STROKE));
            }
        }
        for (i, label) in surface.labels().iter().enumerate() {
            if let Some(p) = surface.label_anchor(i, now) {
                painter.text(origin + p.to_vec2(), Align2::CENTER_CENTER, &label.text, font.clone(), POINT_LABEL);
            }
        }
    }

    /// Draw both label groups and collect clicks. Each group only ever reports
    /// its own axis.
    /// Draw both label groups and collect clicks. Each group only ever reports
    /// its own axis. The active label is drawn larger, dark and with a second
    /// offset pass so it reads bold.
    fn axis_labels(&self, ui: &egui::Ui, painter: &Painter, origin: Pos2) -> Vec<ChartEvent> {
        let mut clicks = Vec::new();
        let surface = self.controller.surface();
        for axis in AxisKind::BOTH {
            for (slot, dim) in axis.choices().iter().enumerate() {
                let emphasized = surface.is_emphasized(axis, *dim);
                let color = if emphasized { ACTIVE_LABEL } else { INACTIVE_LABEL };
                let font = FontId::proportional(layout::label_font_size(emphasized));
                let galley = painter.layout_no_wrap(dim.title().to_string(), font, color);
                let text_size = galley.size();
                let center = origin + layout::axis_label_center(axis, slot, self.plot_size()).to_vec2();
                let pos = match axis {
                    AxisKind::Horizontal => center - text_size / 2.0,
                    AxisKind::Vertical => layout::rotated_text_origin(center, text_size),
                };
                let offsets = [Vec2::ZERO, layout::emphasis_stroke_offset(axis)];
                let passes = if emphasized { 2 } else { 1 };
                for offset in &offsets[..passes] {
                    let shape = TextShape::new(pos + *offset, galley.clone(), color);
                    match axis {
                        AxisKind::Horizontal => painter.add(shape),
                        AxisKind::Vertical => painter.add(shape.with_angle(-FRAC_PI_2)),
                    };
                }
                let rect = layout::axis_label_rect(axis, center, text_size);
                let response = ui
                    .interact(rect, ui.id().with(("axis_label", dim.key())), Sense::click())
                    .on_hover_cursor(CursorIcon::PointingHand);
                if response.clicked() {
                    clicks.push(ChartEvent::label_clicked(axis, dim.key()));
                }
            }
        }
        clicks
    }

    fn track_hover(&mut self, pointer: Option<Pos2>, origin: Pos2, now: f64) {
        let local = pointer.map(|p| p - origin.to_vec2());
        let hit = local.and_then(|p| self.controller.surface().hit_test(p, now));
        if let Some(prev) = self.hovered.filter(|prev| Some(*prev) != hit) {
            self.dispatch(ChartEvent::PointerLeft { index: prev }, now);
        }
        if let (Some(index), Some(pointer)) = (hit, local) {
            self.dispatch(ChartEvent::PointerEntered { index, pointer }, now);
        }
        self.hovered = hit;
    }

    fn paint_tooltip(&self, painter: &Painter, origin: Pos2) {
        let Some(shown) = self.controller.tooltips().shown() else {
            return;
        };
        let galley = painter.layout_no_wrap(shown.text.clone(), FontId::proportional(12.0), Color32::WHITE);
        let pad = vec2(8.0, 6.0);
        let min = origin + shown.anchor.to_vec2();
        let rect = egui::Rect::from_min_size(min, galley.size() + pad * 2.0);
        painter.rect_filled(rect, 4.0, Color32::from_rgba_unmultiplied(0, 0, 0, 200));
        painter.galley(min + pad, galley, Color32::WHITE);
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(Color32::WHITE))
            .show(ctx, |ui| {
                let canvas = vec2(self.config.canvas.width, self.config.canvas.height);
                let (response, painter) = ui.allocate_painter(canvas, Sense::hover());
                let origin = response.rect.min + vec2(self.config.margin.left, self.config.margin.top);

                self.paint_axes(&painter, origin, now);
                self.paint_points(&painter, origin, now);
                for event in self.axis_labels(ui, &painter, origin) {
                    self.dispatch(event, now);
                }
                self.track_hover(response.hover_pos(), origin, now);
                self.paint_tooltip(&painter, origin);
            });

        if self.controller.surface().is_animating(now) {
            ctx.request_repaint();
        }
    }
}
