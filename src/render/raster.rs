// raster.rs - Software surface backed by an RGBA image
//
// Native only. Used by the trail2png preview tool and by tests that want to
// look at actual pixels rather than recorded calls.

use image::{Rgba as Pixel, RgbaImage};

use super::{Rgba, Surface};

pub struct RasterSurface {
    img: RgbaImage,
}

impl RasterSurface {
    pub fn new(w: u32, h: u32) -> Self {
        Self { img: RgbaImage::new(w, h) }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.img
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.img.get_pixel(x, y).0
    }

    pub fn save(&self, path: &std::path::Path) -> image::ImageResult<()> {
        self.img.save(path)
    }

    // Source-over with straight alpha
    fn blend(&mut self, x: u32, y: u32, c: Rgba) {
        let dst = self.img.get_pixel_mut(x, y);
        let sa = c.alpha();
        let da = dst[3] as f32 / 255.0;
        let oa = sa + da * (1.0 - sa);
        if oa <= 0.0 {
            *dst = Pixel([0, 0, 0, 0]);
            return;
        }

        let mix = |s: u8, d: u8| -> u8 {
            let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / oa;
            v.round().clamp(0.0, 255.0) as u8
        };
        *dst = Pixel([
            mix(c.r, dst[0]),
            mix(c.g, dst[1]),
            mix(c.b, dst[2]),
            (oa * 255.0).round() as u8,
        ]);
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    fn resize(&mut self, w: u32, h: u32) {
        self.img = RgbaImage::new(w, h);
    }

    fn clear(&mut self) {
        for p in self.img.pixels_mut() {
            *p = Pixel([0, 0, 0, 0]);
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        if color.alpha() <= 0.0 || radius <= 0.0 { return; }

        let (w, h) = self.img.dimensions();
        let x0 = (cx - radius).floor().max(0.0) as u32;
        let y0 = (cy - radius).floor().max(0.0) as u32;
        let x1 = ((cx + radius).ceil().max(0.0) as u32).min(w);
        let y1 = ((cy + radius).ceil().max(0.0) as u32).min(h);
        let r2 = radius * radius;

        for y in y0..y1 {
            for x in x0..x1 {
                // Sample at pixel centre
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.blend(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_circle_covers_centre_not_corner() {
        let mut s = RasterSurface::new(20, 20);
        s.fill_circle(10.0, 10.0, 4.0, Rgba::rgb([96, 165, 250]));
        assert_eq!(s.pixel(10, 10), [96, 165, 250, 255]);
        assert_eq!(s.pixel(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn translucent_fill_sets_alpha() {
        let mut s = RasterSurface::new(8, 8);
        s.fill_circle(4.0, 4.0, 3.0, Rgba::rgb([255, 0, 0]).with_alpha(0.5));
        let p = s.pixel(4, 4);
        assert_eq!(&p[..3], &[255, 0, 0]);
        assert_eq!(p[3], 128);
    }

    #[test]
    fn clear_wipes_pixels() {
        let mut s = RasterSurface::new(8, 8);
        s.fill_circle(4.0, 4.0, 3.0, Rgba::rgb([1, 2, 3]));
        s.clear();
        assert!(s.image().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn offscreen_circle_is_ignored() {
        let mut s = RasterSurface::new(8, 8);
        s.fill_circle(-50.0, -50.0, 3.0, Rgba::rgb([1, 2, 3]));
        s.fill_circle(500.0, 4.0, 3.0, Rgba::rgb([1, 2, 3]));
        assert!(s.image().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn resize_changes_dimensions() {
        let mut s = RasterSurface::new(8, 8);
        s.resize(32, 16);
        assert_eq!(s.size(), (32, 16));
    }
}
