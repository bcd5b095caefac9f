use image::{Rgba, RgbaImage};

/// Pixels with alpha above this value count as solid for collisions.
const ALPHA_THRESHOLD: u8 = 127;

/// Per-pixel collision mask built from a sprite's alpha channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    pub fn from_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        // ImageBuffer pixels are stored row-major, same as `bits`
        let bits = image.pixels().map(|p| p.0[3] > ALPHA_THRESHOLD).collect();

        Self {
            width,
            height,
            bits,
        }
    }

    pub fn filled(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![true; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at (x, y) is solid. Out-of-range coordinates are empty.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.bits[(y as u32 * self.width + x as u32) as usize]
    }

    /// Number of solid pixels
    #[cfg(test)]
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Finds the first solid pixel shared with `other` when `other` is placed
    /// at `offset` relative to this mask's top-left corner.
    ///
    /// Returns the point in this mask's coordinates, or `None` if the masks
    /// don't touch. Only the intersection of the two bounding boxes is scanned,
    /// so far-apart masks cost nothing.
    pub fn overlap(&self, other: &Mask, offset: (i32, i32)) -> Option<(u32, u32)> {
        let (dx, dy) = offset;
        let x_start = dx.max(0);
        let y_start = dy.max(0);
        let x_end = (dx + other.width as i32).min(self.width as i32);
        let y_end = (dy + other.height as i32).min(self.height as i32);

        if x_start >= x_end || y_start >= y_end {
            return None;
        }

        for y in y_start..y_end {
            for x in x_start..x_end {
                if self.get(x, y) && other.get(x - dx, y - dy) {
                    return Some((x as u32, y as u32));
                }
            }
        }

        None
    }
}

/// An image plus its collision mask. Shared between entities of the same kind.
#[derive(Debug, Clone)]
pub struct Sprite {
    image: RgbaImage,
    mask: Mask,
}

impl Sprite {
    pub fn new(image: RgbaImage) -> Self {
        let mask = Mask::from_image(&image);
        Self { image, mask }
    }

    /// A fully opaque rectangle of a single colour
    pub fn solid(width: u32, height: u32, color: Rgba<u8>) -> Self {
        Self::new(RgbaImage::from_pixel(width, height, color))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Solid pixels in sprite-local coordinates together with their colour
    pub fn opaque_pixels(&self) -> impl Iterator<Item = (u32, u32, Rgba<u8>)> + '_ {
        self.image
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[3] > ALPHA_THRESHOLD)
            .map(|(x, y, p)| (x, y, *p))
    }
}
