use anyhow::{Context, Result};
use std::path::Path;

/// Decoded RGBA8 image ready for upload
#[derive(Debug, Clone, PartialEq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureImage {
    /// Decode an image file into RGBA8
    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("Failed to load texture {}", path.display()))?
            .to_rgba8();
        let (width, height) = image.dimensions();
        log::info!("Loaded texture {} ({}x{})", path.display(), width, height);

        Ok(Self {
            width,
            height,
            rgba: image.into_raw(),
        })
    }

    /// Two-tone checkerboard with `cells` squares per side
    pub fn checkerboard(size: u32, cells: u32) -> Self {
        let cell = (size / cells.max(1)).max(1);
        let light: [u8; 4] = [235, 225, 200, 255];
        let dark: [u8; 4] = [70, 110, 150, 255];

        let rgba = (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .flat_map(|(x, y)| if (x / cell + y / cell) % 2 == 0 { light } else { dark })
            .collect();

        Self {
            width: size,
            height: size,
            rgba,
        }
    }

    /// File texture if a path was given, checkerboard otherwise
    pub fn from_optional_path(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::checkerboard(256, 8)),
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]]
    }
}
