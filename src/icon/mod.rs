pub mod assets;
pub mod cache;
pub mod composer;
pub mod pixbuf;

#[cfg(test)]
pub(crate) mod testing;

pub use assets::{Asset, AssetError};
pub use cache::{InvalidationPolicy, RenderCache};
pub use composer::IconComposer;
pub use pixbuf::PixbufBackend;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Rectangle in canvas coordinates, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Image source and drawing surface the composer renders with.
pub trait IconBackend {
    type Image;

    /// Opens a fresh, independently mutable copy of `asset` at its natural
    /// size.
    fn load(&self, asset: Asset) -> Result<Self::Image, AssetError>;

    fn size(&self, image: &Self::Image) -> Size;

    /// Draws `left` and `right` at their natural widths at the ends of
    /// `frame` and stretches `middle` across the space between them.
    fn draw_three_part(
        &self,
        canvas: &mut Self::Image,
        frame: Rect,
        left: &Self::Image,
        middle: &Self::Image,
        right: &Self::Image,
    );

    /// Last step applied to every finished icon, after all drawing.
    fn finish(&self, image: Self::Image) -> Self::Image {
        image
    }
}
