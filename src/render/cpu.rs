use kurbo::Shape as _;

use crate::foundation::color::Color;
use crate::foundation::core::{Affine, BezPath, Canvas, Point, Vec2};
use crate::foundation::error::{SceneError, SceneResult};
use crate::mobject::geometry::{Angle, Arrow, Dot, Line};
use crate::mobject::graph::GraphMobject;
use crate::mobject::label::{Label, MatrixLabel};
use crate::mobject::model::{Mobject, Style};
use crate::mobject::plane::NumberPlane;
use crate::render::backend::FrameRGBA;
use crate::render::camera::Camera;
use crate::render::text::LabelRasterizer;
use crate::runtime::store::ObjectStore;

/// Font size of number plane tick labels, in 1080p pixels.
const PLANE_LABEL_SIZE: f64 = 24.0;

/// Rasterizes a scene's mobjects with `vello_cpu`, in insertion order.
pub struct CpuRenderer {
    camera: Camera,
    background: Color,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    text: LabelRasterizer,
}

impl CpuRenderer {
    pub fn new(canvas: Canvas, background: Color) -> SceneResult<Self> {
        let w: u16 = canvas
            .width
            .try_into()
            .map_err(|_| SceneError::evaluation("canvas width exceeds u16"))?;
        let h: u16 = canvas
            .height
            .try_into()
            .map_err(|_| SceneError::evaluation("canvas height exceeds u16"))?;
        Ok(Self {
            camera: Camera::new(canvas),
            background,
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
            text: LabelRasterizer::new(),
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn render(&mut self, objects: &ObjectStore) -> SceneResult<FrameRGBA> {
        let canvas = self.camera.canvas();
        self.ctx.reset();
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint_color(self.background));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(canvas.width),
            f64::from(canvas.height),
        ));

        let mut painter = Painter {
            ctx: &mut self.ctx,
            text: &mut self.text,
            camera: self.camera,
        };
        for (_, m) in objects.iter() {
            painter.mobject(m)?;
        }

        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

struct Painter<'r> {
    ctx: &'r mut vello_cpu::RenderContext,
    text: &'r mut LabelRasterizer,
    camera: Camera,
}

impl Painter<'_> {
    fn mobject(&mut self, m: &Mobject) -> SceneResult<()> {
        let style = m.style();
        if style.reveal <= 0.0 || style.opacity <= 0.0 {
            return Ok(());
        }
        match m {
            Mobject::Line(l) => self.line(l),
            Mobject::Arrow(a) => self.arrow(a),
            Mobject::Angle(a) => self.angle(a),
            Mobject::Dot(d) => self.dot(d),
            Mobject::Label(l) => self.label(l),
            Mobject::Matrix(mx) => self.matrix(mx),
            Mobject::Graph(g) => self.graph(g),
            Mobject::Plane(p) => self.plane(p),
        }
    }

    fn stroke_px(&self, style: &Style) -> f64 {
        style.stroke_width * self.camera.px_scale()
    }

    /// Stroke a path given in scene units.
    fn stroke(&mut self, path: &BezPath, color: Color, width_px: f64, opacity: f64) {
        let px = self.camera.to_pixel_affine() * path.clone();
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(width_px)
                .with_caps(vello_cpu::kurbo::Cap::Round)
                .with_join(vello_cpu::kurbo::Join::Round),
        );
        self.ctx.set_paint(paint_color(color.with_opacity(opacity)));
        self.ctx.stroke_path(&bezpath_to_cpu(&px));
    }

    /// Fill a path given in scene units.
    fn fill(&mut self, path: &BezPath, color: Color, opacity: f64) {
        let px = self.camera.to_pixel_affine() * path.clone();
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint_color(color.with_opacity(opacity)));
        self.ctx.fill_path(&bezpath_to_cpu(&px));
    }

    fn segment(&mut self, a: Point, b: Point, style: &Style) {
        let mut path = BezPath::new();
        path.move_to(a);
        path.line_to(partial(a, b, style.reveal));
        let w = self.stroke_px(style);
        self.stroke(&path, style.stroke, w, style.opacity);
    }

    fn line(&mut self, l: &Line) -> SceneResult<()> {
        self.segment(l.start, l.end, &l.style);
        Ok(())
    }

    fn arrow(&mut self, a: &Arrow) -> SceneResult<()> {
        let tip = partial(a.start, a.end, a.style.reveal);
        let v = tip - a.start;
        let len = v.hypot();
        if len <= f64::EPSILON {
            return Ok(());
        }
        let u = v / len;
        let n = Vec2::new(-u.y, u.x);
        let tip_len = a.tip_length.min(0.5 * len);
        let base = tip - u * tip_len;

        let mut shaft = BezPath::new();
        shaft.move_to(a.start);
        shaft.line_to(base);
        let w = self.stroke_px(&a.style);
        self.stroke(&shaft, a.style.stroke, w, a.style.opacity);

        let mut head = BezPath::new();
        head.move_to(tip);
        head.line_to(base + n * (tip_len * 0.5));
        head.line_to(base - n * (tip_len * 0.5));
        head.close_path();
        let color = a.style.fill.unwrap_or(a.style.stroke);
        self.fill(&head, color, a.style.opacity);
        Ok(())
    }

    fn angle(&mut self, a: &Angle) -> SceneResult<()> {
        if a.sweep.abs() <= f64::EPSILON {
            return Ok(());
        }
        let mut arc = a.to_arc();
        arc.sweep_angle *= a.style.reveal.min(1.0);
        let path = BezPath::from_vec(arc.path_elements(1e-3).collect());
        let w = self.stroke_px(&a.style);
        self.stroke(&path, a.style.stroke, w, a.style.opacity);
        Ok(())
    }

    fn disc(&mut self, center: Point, radius: f64, color: Color, opacity: f64) {
        let path = kurbo::Circle::new(center, radius).to_path(1e-3);
        self.fill(&path, color, opacity);
    }

    fn dot(&mut self, d: &Dot) -> SceneResult<()> {
        let color = d.style.fill.unwrap_or(d.style.stroke);
        self.disc(d.center, d.radius * d.style.reveal, color, d.style.opacity);
        Ok(())
    }

    fn graph(&mut self, g: &GraphMobject) -> SceneResult<()> {
        for (a, b) in g.edge_segments() {
            self.segment(a, b, &g.style);
        }
        let color = g.style.fill.unwrap_or(g.style.stroke);
        for p in &g.positions {
            self.disc(*p, g.vertex_radius * g.style.reveal, color, g.style.opacity);
        }
        Ok(())
    }

    fn plane(&mut self, p: &NumberPlane) -> SceneResult<()> {
        for (a, b) in p.grid_segments() {
            self.segment(a, b, &p.style);
        }
        let axis_style = Style {
            stroke: p.axis_color,
            ..p.style
        };
        for (a, b) in p.axes() {
            self.segment(a, b, &axis_style);
        }
        let size = PLANE_LABEL_SIZE * self.camera.px_scale();
        for (text, at) in p.coordinate_labels() {
            self.text_at(&text, at, Color::WHITE, size, p.style.opacity * p.style.reveal)?;
        }
        Ok(())
    }

    fn label(&mut self, l: &Label) -> SceneResult<()> {
        let color = l.style.fill.unwrap_or(l.style.stroke);
        let size = l.font_size * self.camera.px_scale();
        self.text_at(&l.text, l.center, color, size, l.style.opacity * l.style.reveal)
    }

    fn matrix(&mut self, m: &MatrixLabel) -> SceneResult<()> {
        let color = m.style.fill.unwrap_or(m.style.stroke);
        let opacity = m.style.opacity * m.style.reveal;
        let size = m.font_size * self.camera.px_scale();
        let unit = self.camera.units_to_px();

        // Cells are sized from the font, in scene units.
        let row_h = size * 1.3 / unit;
        let widest = m
            .entries
            .iter()
            .flatten()
            .map(|e| e.chars().count())
            .max()
            .unwrap_or(1) as f64;
        let col_w = (widest * 0.6 + 0.8) * size / unit;
        let rows = m.rows() as f64;
        let cols = m.cols() as f64;
        let half_w = 0.5 * cols * col_w;
        let half_h = 0.5 * rows * row_h;

        for (r, row) in m.entries.iter().enumerate() {
            for (c, entry) in row.iter().enumerate() {
                let at = m.center
                    + Vec2::new(
                        -half_w + (c as f64 + 0.5) * col_w,
                        half_h - (r as f64 + 0.5) * row_h,
                    );
                self.text_at(entry, at, color, size, opacity)?;
            }
        }

        let arm = 0.25 * col_w.min(row_h);
        let (x0, x1) = (m.center.x - half_w, m.center.x + half_w);
        let (y0, y1) = (m.center.y - half_h, m.center.y + half_h);
        let w = self.stroke_px(&m.style).min(3.0 * self.camera.px_scale());
        for (x, dir) in [(x0, 1.0), (x1, -1.0)] {
            let mut bracket = BezPath::new();
            bracket.move_to(Point::new(x + dir * arm, y1));
            bracket.line_to(Point::new(x, y1));
            bracket.line_to(Point::new(x, y0));
            bracket.line_to(Point::new(x + dir * arm, y0));
            self.stroke(&bracket, color, w, opacity);
        }
        Ok(())
    }

    /// Paint `text` centered on the scene point `at`.
    fn text_at(
        &mut self,
        text: &str,
        at: Point,
        color: Color,
        size_px: f64,
        opacity: f64,
    ) -> SceneResult<()> {
        let Some(sprite) = self.text.sprite(text, color, size_px)? else {
            return Ok(());
        };
        let center = self.camera.to_px(at);
        let origin = Vec2::new(
            (center.x - f64::from(sprite.width) / 2.0).round(),
            (center.y - f64::from(sprite.height) / 2.0).round(),
        );
        let opacity = opacity.clamp(0.0, 1.0);
        let layered = opacity < 1.0;
        if layered {
            self.ctx.push_opacity_layer(opacity as f32);
        }
        self.ctx
            .set_transform(affine_to_cpu(Affine::translate(origin)));
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(sprite.paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(sprite.width),
            f64::from(sprite.height),
        ));
        if layered {
            self.ctx.pop_layer();
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }
}

/// The point `t` of the way from `a` to `b`; exactly `b` once fully revealed.
fn partial(a: Point, b: Point, t: f64) -> Point {
    if t >= 1.0 { b } else { a.lerp(b, t) }
}

fn paint_color(c: Color) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
