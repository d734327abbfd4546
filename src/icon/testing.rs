//! In-memory backend for composer and cache tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use super::{Asset, AssetError, IconBackend, Rect, Size};

pub(crate) const OUTLINE: Size = Size { width: 22.0, height: 11.0 };
pub(crate) const CAP: Size = Size { width: 1.0, height: 7.0 };
pub(crate) const FILL_UNIT: Size = Size { width: 2.0, height: 7.0 };

/// Every load yields a new id, so two handles with the same id are the
/// same rendered instance.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FakeImage {
    pub id: u32,
    pub asset: Asset,
    pub frames: Vec<Rect>,
}

#[derive(Debug, Default)]
pub(crate) struct FakeBackend {
    next_id: Cell<u32>,
    loads: RefCell<HashMap<Asset, u32>>,
    missing: HashSet<Asset>,
}

impl FakeBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn without(assets: &[Asset]) -> Self {
        Self {
            missing: assets.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub(crate) fn loads(&self, asset: Asset) -> u32 {
        self.loads.borrow().get(&asset).copied().unwrap_or(0)
    }
}

impl IconBackend for FakeBackend {
    type Image = FakeImage;

    fn load(&self, asset: Asset) -> Result<FakeImage, AssetError> {
        *self.loads.borrow_mut().entry(asset).or_default() += 1;
        if self.missing.contains(&asset) {
            return Err(AssetError::NotFound {
                asset,
                path: PathBuf::from(asset.file_name()),
            });
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        Ok(FakeImage { id, asset, frames: Vec::new() })
    }

    fn size(&self, image: &FakeImage) -> Size {
        match image.asset {
            Asset::Left | Asset::Right => CAP,
            Asset::Middle => FILL_UNIT,
            _ => OUTLINE,
        }
    }

    fn draw_three_part(
        &self,
        canvas: &mut FakeImage,
        frame: Rect,
        left: &FakeImage,
        middle: &FakeImage,
        right: &FakeImage,
    ) {
        assert_eq!(
            (left.asset, middle.asset, right.asset),
            (Asset::Left, Asset::Middle, Asset::Right),
            "three-part draw received parts out of order"
        );
        canvas.frames.push(frame);
    }
}
