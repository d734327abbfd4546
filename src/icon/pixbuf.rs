use std::path::PathBuf;

use gtk4::gdk_pixbuf::{InterpType, Pixbuf};
use gtk4::glib;
use tracing::warn;

use super::{Asset, AssetError, IconBackend, Rect, Size};

/// Loads artwork from a resource directory and draws with gdk-pixbuf.
///
/// Artwork is composed at its natural size and each finished icon is then
/// scaled once by `scale`, so bar geometry stays in artwork pixels.
#[derive(Debug, Clone)]
pub struct PixbufBackend {
    resource_dir: PathBuf,
    scale: f64,
}

impl PixbufBackend {
    pub fn new(resource_dir: impl Into<PathBuf>, scale: f64) -> Self {
        Self {
            resource_dir: resource_dir.into(),
            scale,
        }
    }

    pub fn path(&self, asset: Asset) -> PathBuf {
        self.resource_dir.join(asset.file_name())
    }

    /// Checks that the bar outline can be decoded with the installed
    /// gdk-pixbuf loaders.
    pub fn verify_artwork(&self) -> Result<(), AssetError> {
        self.load(Asset::Empty).map(|_| ())
    }
}

impl IconBackend for PixbufBackend {
    type Image = Pixbuf;

    fn load(&self, asset: Asset) -> Result<Pixbuf, AssetError> {
        let path = self.path(asset);
        Pixbuf::from_file(&path).map_err(|source| {
            if source.matches(glib::FileError::Noent) {
                AssetError::NotFound { asset, path }
            } else {
                AssetError::Decode { asset, path, source }
            }
        })
    }

    fn size(&self, image: &Pixbuf) -> Size {
        Size {
            width: f64::from(image.width()),
            height: f64::from(image.height()),
        }
    }

    fn draw_three_part(
        &self,
        canvas: &mut Pixbuf,
        frame: Rect,
        left: &Pixbuf,
        middle: &Pixbuf,
        right: &Pixbuf,
    ) {
        let x = frame.x.round() as i32;
        let y = frame.y.round() as i32;
        let width = frame.width.round() as i32;
        let height = frame.height.round().max(1.0) as i32;

        let left_width = left.width();
        let right_width = right.width();
        let middle_width = width - left_width - right_width;

        blit(left, canvas, x, y, left_width, height);
        if middle_width > 0 {
            blit(middle, canvas, x + left_width, y, middle_width, height);
        }
        blit(right, canvas, x + width - right_width, y, right_width, height);
    }

    fn finish(&self, image: Pixbuf) -> Pixbuf {
        if (self.scale - 1.0).abs() < f64::EPSILON {
            return image;
        }
        let width = (f64::from(image.width()) * self.scale).round().max(1.0) as i32;
        let height = (f64::from(image.height()) * self.scale).round().max(1.0) as i32;
        match image.scale_simple(width, height, InterpType::Bilinear) {
            Some(scaled) => scaled,
            None => {
                warn!(width, height, "cannot scale icon, showing it at natural size");
                image
            }
        }
    }
}

/// Scales `src` into the `width` x `height` box at (`x`, `y`) of `dest`,
/// clipped to `dest`.
fn blit(src: &Pixbuf, dest: &Pixbuf, x: i32, y: i32, width: i32, height: i32) {
    if src.width() == 0 || src.height() == 0 || width <= 0 || height <= 0 {
        return;
    }
    let left = x.max(0);
    let top = y.max(0);
    let right = (x + width).min(dest.width());
    let bottom = (y + height).min(dest.height());
    if right <= left || bottom <= top {
        return;
    }

    src.composite(
        dest,
        left,
        top,
        right - left,
        bottom - top,
        f64::from(x),
        f64::from(y),
        f64::from(width) / f64::from(src.width()),
        f64::from(height) / f64::from(src.height()),
        InterpType::Bilinear,
        255,
    );
}
