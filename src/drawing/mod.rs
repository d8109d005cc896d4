//! Encoding the canvas as an image, and the file sinks built on it.

use {
  crate::{
    compositor::Canvas,
    config::Channel,
    driver::{PreviewSink, RasterSink},
    error::{Error, Result}
  },
  anyhow::Context,
  image::{DynamicImage, GrayImage, RgbImage},
  std::path::{Path, PathBuf}
};

#[cfg(test)] mod tests;

impl Canvas {
  /// Gray image, or RGB with the intensity in one channel and the others black.
  pub fn to_image(&self, channel: Channel) -> Result<DynamicImage> {
    use rayon::prelude::*;

    let side = self.size();
    let mismatch = || Error::ImageBuffer { len: self.pixels().len(), side };
    let offset = match channel {
      Channel::Gray => {
        let image = GrayImage::from_raw(side, side, self.pixels().to_vec())
          .ok_or_else(mismatch)?;
        return Ok(DynamicImage::ImageLuma8(image));
      }
      Channel::Red => 0,
      Channel::Green => 1,
      Channel::Blue => 2
    };
    let mut rgb = vec![0u8; self.pixels().len() * 3];
    rgb.par_chunks_mut(3)
      .zip(self.pixels().par_iter())
      .for_each(|(px, &value)| px[offset] = value);
    let image = RgbImage::from_raw(side, side, rgb)
      .ok_or_else(mismatch)?;
    Ok(DynamicImage::ImageRgb8(image))
  }

  /// Encodes by extension of `path`, creating missing parent directories.
  pub fn save(&self, path: impl AsRef<Path>, channel: Channel) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      std::fs::create_dir_all(parent)
        .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    self.to_image(channel)?
      .save(path)
      .with_context(|| format!("failed to write {}", path.display()))
  }
}

/// Writes the final canvas to a single file.
#[derive(Debug, Clone)]
pub struct ImageFile {
  pub path: PathBuf,
  pub channel: Channel
}

impl RasterSink for ImageFile {
  fn write(&mut self, canvas: &Canvas) -> Result<()> {
    canvas.save(&self.path, self.channel)?;
    tracing::info!(path = %self.path.display(), size = canvas.size(), "raster written");
    Ok(())
  }
}

/// Writes every preview to `{dir}/thumb_{iteration}.{format}`.
#[derive(Debug, Clone)]
pub struct PreviewDir {
  pub dir: PathBuf,
  pub format: String,
  pub channel: Channel
}

impl PreviewDir {
  pub fn path_for(&self, iteration: u64) -> PathBuf {
    self.dir.join(format!("thumb_{iteration}.{}", self.format))
  }
}

impl PreviewSink for PreviewDir {
  fn preview(&mut self, iteration: u64, thumbnail: &Canvas) -> Result<()> {
    let path = self.path_for(iteration);
    thumbnail.save(&path, self.channel)?;
    tracing::debug!(path = %path.display(), "preview written");
    Ok(())
  }
}
