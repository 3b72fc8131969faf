//! Linear colour framebuffer and image output.

use std::path::Path;

use tray_math::Color;

/// Render target of linear, unclamped colours.
///
/// Row 0 is the bottom of the view plane; `to_rgb8` flips rows so images
/// come out upright.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; pixel_count(width, height)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Store `color` at column `x`, row `y`.
    pub fn write_pixel(&mut self, color: Color, x: u32, y: u32) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Get the pixel at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// All pixels, row by row from the bottom.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds"
        );
        y as usize * self.width as usize + x as usize
    }

    /// Convert to 8-bit RGB, top row first.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                bytes.extend_from_slice(&color_to_rgb8(self.get(x, y)));
            }
        }
        bytes
    }

    /// Write the image to `path`; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        let path = path.as_ref();
        image::save_buffer(
            path,
            &self.to_rgb8(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )?;
        log::info!(
            "Saved {}x{} image to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}

/// Number of cells in a `width` x `height` image, computed without `u32` overflow.
#[inline]
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Convert a linear color to 8-bit RGB. No gamma is applied.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let r = (255.0 * clamp_01(color.x)) as u8;
    let g = (255.0 * clamp_01(color.y)) as u8;
    let b = (255.0 * clamp_01(color.z)) as u8;
    [r, g, b]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_get() {
        let mut fb = Framebuffer::new(4, 3);
        fb.write_pixel(Color::new(0.1, 0.2, 0.3), 3, 2);

        assert_eq!(fb.get(3, 2), Color::new(0.1, 0.2, 0.3));
        assert_eq!(fb.get(0, 0), Color::ZERO);
        assert_eq!(fb.pixels().len(), 12);
    }

    #[test]
    fn test_color_to_rgb8_clamps() {
        assert_eq!(color_to_rgb8(Color::new(-1.0, 0.5, 7.0)), [0, 127, 255]);
        assert_eq!(color_to_rgb8(Color::ONE), [255, 255, 255]);
    }

    #[test]
    fn test_to_rgb8_flips_rows() {
        let mut fb = Framebuffer::new(2, 2);
        fb.write_pixel(Color::X, 0, 0);
        fb.write_pixel(Color::Z, 1, 1);

        let bytes = fb.to_rgb8();
        assert_eq!(bytes.len(), 12);
        // Top-left output pixel is black, top-right is the blue written to row 1
        assert_eq!(&bytes[0..3], &[0, 0, 0]);
        assert_eq!(&bytes[3..6], &[0, 0, 255]);
        // Bottom-left output pixel is row 0
        assert_eq!(&bytes[6..9], &[255, 0, 0]);
    }

    #[test]
    fn test_size_beyond_u32_pixel_count() {
        // 70_000 * 70_000 overflows u32; a one-pixel-high strip keeps the test small
        let mut fb = Framebuffer::new(70_000, 1);
        fb.write_pixel(Color::ONE, 69_999, 0);

        assert_eq!(fb.pixels().len(), 70_000);
        assert_eq!(fb.get(69_999, 0), Color::ONE);
        assert_eq!(pixel_count(70_000, 70_000), 4_900_000_000);
    }

    #[test]
    fn test_save_png() {
        let mut fb = Framebuffer::new(3, 2);
        fb.write_pixel(Color::new(1.0, 0.5, 0.0), 1, 1);

        let name = format!("tray_framebuffer_{}.png", std::process::id());
        let path = std::env::temp_dir().join(name);
        fb.save(&path).expect("png should be written");

        let image = image::open(&path).expect("png should load").to_rgb8();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(1, 0).0, [255, 127, 0]);

        let _ = std::fs::remove_file(&path);
    }
}
