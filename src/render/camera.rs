use crate::foundation::core::{Affine, Canvas, Point, Vec2};

/// Maps scene units (origin at the frame center, y up) to output pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    canvas: Canvas,
    frame_height: f64,
}

impl Camera {
    /// Visible height in scene units.
    pub const FRAME_HEIGHT: f64 = 8.0;
    /// Output height that stroke widths and font sizes are specified against.
    pub const REFERENCE_HEIGHT: f64 = 1080.0;

    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            frame_height: Self::FRAME_HEIGHT,
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn frame_height(&self) -> f64 {
        self.frame_height
    }

    pub fn frame_width(&self) -> f64 {
        self.frame_height * self.canvas.aspect()
    }

    /// Pixels per scene unit.
    pub fn units_to_px(&self) -> f64 {
        f64::from(self.canvas.height) / self.frame_height
    }

    /// Scale applied to sizes given in 1080p pixels.
    pub fn px_scale(&self) -> f64 {
        f64::from(self.canvas.height) / Self::REFERENCE_HEIGHT
    }

    pub fn to_pixel_affine(&self) -> Affine {
        let s = self.units_to_px();
        Affine::translate(Vec2::new(
            f64::from(self.canvas.width) / 2.0,
            f64::from(self.canvas.height) / 2.0,
        )) * Affine::scale_non_uniform(s, -s)
    }

    pub fn to_px(&self, p: Point) -> Point {
        self.to_pixel_affine() * p
    }
}
