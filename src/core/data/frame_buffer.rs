use crate::core::data::colour::Colour;
use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameBufferError {
    ZeroDimension { width: u32, height: u32 },
    Allocation(TryReserveError),
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "frame buffer dimensions {}x{} must be non-zero", width, height)
            }
            Self::Allocation(source) => {
                write!(f, "failed to allocate frame buffer: {}", source)
            }
        }
    }
}

impl Error for FrameBufferError {}

/// Row-major colour buffer, one entry per pixel.
///
/// Dimensions are fixed at creation and never change. Every `step` rewrites
/// the buffer in full; nothing carries over between frames.
#[derive(Debug)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, FrameBufferError> {
        if width == 0 || height == 0 {
            return Err(FrameBufferError::ZeroDimension { width, height });
        }

        let len = width as usize * height as usize;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(FrameBufferError::Allocation)?;
        pixels.resize(len, Colour::INTERIOR);

        Ok(Self { width, height, pixels })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[must_use]
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Colour] {
        &mut self.pixels
    }

    /// Colour at pixel (x, y). Row-major: index `y * width + x`.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Colour {
        self.pixels[(y * self.width + x) as usize]
    }
}
