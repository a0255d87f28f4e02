//! Image loading and rendering for alpha-channel steganography.
//!
//! The codec works on a [`PixelBuffer`]. Getting one out of a file, URL or
//! in-memory image and turning the modified buffer back into an image file
//! is the job of an [`ImageLoader`] and an [`ImageRenderer`].
//! [`PngImageIo`] implements both on top of the `image` crate.
//!
//! Output is always PNG: the payload lives in exact alpha values, so any
//! lossy or alpha-less format would destroy it.

use std::fmt;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use image::{DynamicImage, GenericImageView, ImageFormat, RgbaImage};
use tracing::debug;

use super::pixels::PixelBuffer;
use crate::error::{Result, StegoError};

/// Where an image comes from.
#[derive(Clone)]
pub enum ImageSource {
    /// A path, a `file://` URL or a `data:` URL with base64 payload.
    Url(String),
    /// A filesystem path.
    Path(PathBuf),
    /// An encoded image file held in memory.
    Bytes(Vec<u8>),
    /// An already decoded image.
    Image(DynamicImage),
    /// Raw RGBA pixels.
    Pixels(PixelBuffer),
}

impl fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) if url.starts_with("data:") => write!(f, "Url(data: {} chars)", url.len()),
            Self::Url(url) => write!(f, "Url({url:?})"),
            Self::Path(path) => write!(f, "Path({})", path.display()),
            Self::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
            Self::Image(image) => {
                let (width, height) = image.dimensions();
                write!(f, "Image({width}x{height})")
            }
            Self::Pixels(buffer) => write!(f, "Pixels({}x{})", buffer.width(), buffer.height()),
        }
    }
}

impl From<&str> for ImageSource {
    fn from(url: &str) -> Self {
        Self::Url(url.to_string())
    }
}

impl From<String> for ImageSource {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<DynamicImage> for ImageSource {
    fn from(image: DynamicImage) -> Self {
        Self::Image(image)
    }
}

impl From<PixelBuffer> for ImageSource {
    fn from(buffer: PixelBuffer) -> Self {
        Self::Pixels(buffer)
    }
}

/// Turns an [`ImageSource`] into RGBA pixels.
pub trait ImageLoader {
    fn load(&self, source: &ImageSource) -> Result<PixelBuffer>;
}

/// Turns RGBA pixels into an image artifact.
pub trait ImageRenderer {
    fn render(&self, buffer: &PixelBuffer) -> Result<RenderedImage>;
}

/// An encoded PNG produced by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    png: Vec<u8>,
    width: u32,
    height: u32,
}

impl RenderedImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The PNG file bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.png
    }

    /// The PNG as a `data:image/png;base64,...` URL.
    pub fn to_data_url(&self) -> String {
        format!("data:image/png;base64,{}", BASE64.encode(&self.png))
    }

    /// Writes the PNG to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, &self.png)?;
        Ok(())
    }
}

/// [`ImageLoader`] and [`ImageRenderer`] backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngImageIo;

impl PngImageIo {
    pub fn new() -> Self {
        Self
    }

    fn load_url(&self, url: &str) -> Result<DynamicImage> {
        if url.is_empty() {
            return Err(StegoError::InvalidInput(
                "the input image is neither a URL nor an image".to_string(),
            ));
        }
        if let Some(rest) = url.strip_prefix("data:") {
            let bytes = decode_data_url(rest)?;
            return self.load_bytes(&bytes);
        }
        if let Some(path) = url.strip_prefix("file://") {
            return self.load_path(Path::new(path));
        }
        if let Some((scheme, _)) = url.split_once("://") {
            return Err(StegoError::InvalidInput(format!(
                "unsupported URL scheme '{}'",
                scheme
            )));
        }
        self.load_path(Path::new(url))
    }

    fn load_path(&self, path: &Path) -> Result<DynamicImage> {
        image::open(path)
            .map_err(|e| StegoError::InvalidInput(format!("{}: {}", path.display(), e)))
    }

    fn load_bytes(&self, bytes: &[u8]) -> Result<DynamicImage> {
        image::load_from_memory(bytes).map_err(|e| StegoError::InvalidInput(e.to_string()))
    }
}

impl ImageLoader for PngImageIo {
    fn load(&self, source: &ImageSource) -> Result<PixelBuffer> {
        let image = match source {
            ImageSource::Url(url) => self.load_url(url)?,
            ImageSource::Path(path) => self.load_path(path)?,
            ImageSource::Bytes(bytes) => self.load_bytes(bytes)?,
            ImageSource::Image(image) => return pixels_from_image(image),
            ImageSource::Pixels(buffer) => return Ok(buffer.clone()),
        };

        debug!(source = ?source, "loaded image");
        pixels_from_image(&image)
    }
}

impl ImageRenderer for PngImageIo {
    fn render(&self, buffer: &PixelBuffer) -> Result<RenderedImage> {
        let image = RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.data().to_vec())
            .ok_or_else(|| {
                StegoError::Context(format!(
                    "could not create a {}x{} RGBA surface",
                    buffer.width(),
                    buffer.height()
                ))
            })?;

        let mut png = Vec::new();
        DynamicImage::ImageRgba8(image)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| StegoError::Context(e.to_string()))?;

        debug!(
            width = buffer.width(),
            height = buffer.height(),
            bytes = png.len(),
            "rendered PNG"
        );

        Ok(RenderedImage {
            png,
            width: buffer.width(),
            height: buffer.height(),
        })
    }
}

/// Converts a decoded image to RGBA pixels.
pub fn pixels_from_image(image: &DynamicImage) -> Result<PixelBuffer> {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::new(width, height, rgba.into_raw())
}

/// Decodes the part of a data URL after `data:`.
fn decode_data_url(rest: &str) -> Result<Vec<u8>> {
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| StegoError::InvalidInput("data URL has no payload".to_string()))?;

    if !header.ends_with(";base64") {
        return Err(StegoError::InvalidInput(
            "only base64 data URLs are supported".to_string(),
        ));
    }

    BASE64
        .decode(payload.trim())
        .map_err(|e| StegoError::InvalidInput(format!("data URL: {}", e)))
}
