//! Turning the puzzle artwork into tiles.

use std::fmt::{self, Debug, Formatter};
use std::path::Path;
use std::sync::Arc;

use image::imageops::FilterType;
use tracing::{debug, warn};

use crate::coord::GridCoord;
use crate::error::{AssetError, ConfigError};
use crate::tile::Tile;

/// Fill color used when the artwork is missing.
pub const PLACEHOLDER_COLOR: [u8; 4] = [200, 200, 255, 255];

const BYTES_PER_PIXEL: usize = 4;

/// Tightly packed RGBA8 pixels, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Debug for PixelBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl PixelBuffer {
    /// Returns `None` if `rgba` does not hold exactly `width * height` pixels.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        (rgba.len() == width as usize * height as usize * BYTES_PER_PIXEL).then_some(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn solid(width: u32, height: u32, color: [u8; 4]) -> Self {
        let rgba = color.repeat(width as usize * height as usize);
        Self {
            width,
            height,
            rgba,
        }
    }

    /// Decodes the image at `path` and scales it to an `edge` x `edge` square.
    pub fn load(path: &Path, edge: u32) -> Result<Self, AssetError> {
        let bytes = std::fs::read(path).map_err(|source| AssetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "Decoded {path:?} ({}x{}), scaling to {edge}x{edge}",
            decoded.width(),
            decoded.height()
        );
        let rgba = decoded
            .resize_exact(edge, edge, FilterType::Triangle)
            .to_rgba8()
            .into_raw();
        Ok(Self {
            width: edge,
            height: edge,
            rgba,
        })
    }

    /// Like [`PixelBuffer::load`], but falls back to a solid placeholder.
    pub fn load_or_placeholder(path: &Path, edge: u32) -> SourceImage {
        match Self::load(path, edge) {
            Ok(pixels) => SourceImage {
                pixels,
                placeholder: false,
            },
            Err(err) => {
                warn!("{err}, using a placeholder image");
                SourceImage {
                    pixels: Self::solid(edge, edge, PLACEHOLDER_COLOR),
                    placeholder: true,
                }
            }
        }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub fn as_rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let bytes = self.rgba.get(start..start + BYTES_PER_PIXEL)?;
        bytes.try_into().ok()
    }

    /// Copies out a sub-rectangle. Returns `None` if it reaches past the buffer.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Option<Self> {
        if x + width > self.width || y + height > self.height {
            return None;
        }
        let stride = self.width as usize * BYTES_PER_PIXEL;
        let start = x as usize * BYTES_PER_PIXEL;
        let end = start + width as usize * BYTES_PER_PIXEL;
        let mut rgba = Vec::with_capacity(width as usize * height as usize * BYTES_PER_PIXEL);
        for row in self.rgba.chunks_exact(stride).skip(y as usize).take(height as usize) {
            rgba.extend_from_slice(row.get(start..end)?);
        }
        Some(Self {
            width,
            height,
            rgba,
        })
    }
}

/// The decoded artwork plus whether it is the stand-in.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub pixels: PixelBuffer,
    pub placeholder: bool,
}

/// The N x N slices of the artwork, indexed by their correct cell.
///
/// Slicing happens once. Every deal hands out fresh tiles over the same
/// shared slices.
#[derive(Debug, Clone)]
pub struct TileSet {
    grid_size: u32,
    slices: Vec<Arc<PixelBuffer>>,
}

impl TileSet {
    /// Cuts a square source into `n * n` equal slices, row-major.
    ///
    /// Pixels past the last full multiple of `n` are dropped.
    pub fn slice(source: &PixelBuffer, n: u32) -> Result<Self, ConfigError> {
        if n == 0 {
            return Err(ConfigError::GridSize(n));
        }
        if source.width() != source.height() {
            return Err(ConfigError::SourceNotSquare {
                width: source.width(),
                height: source.height(),
            });
        }
        let edge = source.width() / n;
        if edge == 0 {
            return Err(ConfigError::SourceTooSmall {
                edge: source.width(),
                grid: n,
            });
        }

        let mut slices = Vec::with_capacity((n * n) as usize);
        for row in 0..n {
            for col in 0..n {
                let slice = source
                    .crop(col * edge, row * edge, edge, edge)
                    .ok_or(ConfigError::SourceTooSmall {
                        edge: source.width(),
                        grid: n,
                    })?;
                slices.push(Arc::new(slice));
            }
        }
        Ok(Self {
            grid_size: n,
            slices,
        })
    }

    /// Slices the source and deals the first shuffled tile list.
    pub fn build(
        source: &PixelBuffer,
        n: u32,
        rng: &mut fastrand::Rng,
    ) -> Result<(Self, Vec<Tile>), ConfigError> {
        let set = Self::slice(source, n)?;
        let tiles = set.deal(rng);
        Ok((set, tiles))
    }

    /// A fresh, uniformly shuffled tile list. Every tile starts unplaced.
    pub fn deal(&self, rng: &mut fastrand::Rng) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = self
            .slices
            .iter()
            .enumerate()
            .map(|(index, slice)| {
                Tile::new(Arc::clone(slice), GridCoord::from_index(index, self.grid_size))
            })
            .collect();
        rng.shuffle(&mut tiles);
        tiles
    }

    pub fn slice_edge(&self) -> u32 {
        self.slices.first().map_or(0, |slice| slice.width())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Each pixel encodes its own coordinates so slices can be checked.
    fn gradient(edge: u32) -> PixelBuffer {
        let mut rgba = Vec::new();
        for y in 0..edge {
            for x in 0..edge {
                rgba.extend_from_slice(&[x as u8, y as u8, 0, 255]);
            }
        }
        PixelBuffer::from_rgba(edge, edge, rgba).expect("sizes match")
    }

    #[test]
    fn from_rgba_checks_length() {
        assert!(PixelBuffer::from_rgba(2, 2, vec![0; 16]).is_some(), "exact fit");
        assert!(PixelBuffer::from_rgba(2, 2, vec![0; 15]).is_none(), "one byte short");
    }

    #[test]
    fn crop_copies_the_right_pixels() {
        let source = gradient(8);
        let crop = source.crop(2, 4, 3, 2).expect("inside the source");
        assert_eq!((crop.width(), crop.height()), (3, 2), "crop size");
        assert_eq!(crop.pixel(0, 0), Some([2, 4, 0, 255]), "top-left");
        assert_eq!(crop.pixel(2, 1), Some([4, 5, 0, 255]), "bottom-right");
        assert!(source.crop(6, 0, 3, 1).is_none(), "reaches past the right edge");
    }

    #[test]
    fn deal_yields_every_cell_once_all_unplaced() {
        let mut rng = fastrand::Rng::with_seed(1);
        let (_, tiles) = TileSet::build(&gradient(16), 4, &mut rng).expect("valid source");
        assert_eq!(tiles.len(), 16, "n * n tiles");
        let correct: HashSet<_> = tiles.iter().map(Tile::correct).collect();
        assert_eq!(correct.len(), 16, "every correct cell appears once");
        assert!(tiles.iter().all(|tile| !tile.is_placed()), "all tiles start unplaced");
    }

    #[test]
    fn slices_carry_their_part_of_the_image() {
        let mut rng = fastrand::Rng::with_seed(2);
        let (set, tiles) = TileSet::build(&gradient(16), 4, &mut rng).expect("valid source");
        assert_eq!(set.slice_edge(), 4, "16 / 4");
        for tile in &tiles {
            let GridCoord { col, row } = tile.correct();
            assert_eq!(
                tile.image().pixel(0, 0),
                Some([(col * 4) as u8, (row * 4) as u8, 0, 255]),
                "slice for {col},{row} starts at its own corner"
            );
        }
    }

    #[test]
    fn deal_shuffles() {
        let mut rng = fastrand::Rng::with_seed(3);
        let (set, _) = TileSet::build(&gradient(16), 4, &mut rng).expect("valid source");
        let orders: HashSet<Vec<GridCoord>> = (0..8)
            .map(|_| set.deal(&mut rng).iter().map(Tile::correct).collect())
            .collect();
        assert!(orders.len() > 1, "eight deals of 16 tiles should not all agree");
    }

    #[test]
    fn uneven_source_drops_the_remainder() {
        let mut rng = fastrand::Rng::with_seed(4);
        let (set, tiles) = TileSet::build(&gradient(10), 3, &mut rng).expect("valid source");
        assert_eq!(set.slice_edge(), 3, "10 / 3");
        assert_eq!(tiles.len(), 9, "3 * 3 tiles");
    }

    #[test]
    fn bad_sources_are_rejected() {
        let mut rng = fastrand::Rng::with_seed(5);
        let wide = PixelBuffer::solid(8, 4, PLACEHOLDER_COLOR);
        assert!(
            matches!(
                TileSet::build(&wide, 2, &mut rng),
                Err(ConfigError::SourceNotSquare { .. })
            ),
            "non-square source"
        );
        let tiny = PixelBuffer::solid(2, 2, PLACEHOLDER_COLOR);
        assert!(
            matches!(
                TileSet::build(&tiny, 3, &mut rng),
                Err(ConfigError::SourceTooSmall { .. })
            ),
            "fewer pixels than cells"
        );
        assert!(
            matches!(TileSet::build(&tiny, 0, &mut rng), Err(ConfigError::GridSize(0))),
            "zero grid"
        );
    }

    #[test]
    fn missing_artwork_falls_back_to_placeholder() {
        let source = PixelBuffer::load_or_placeholder(Path::new("does/not/exist.png"), 12);
        assert!(source.placeholder, "missing file uses the placeholder");
        assert_eq!(source.pixels.width(), 12, "placeholder has the requested size");
        assert_eq!(source.pixels.pixel(5, 5), Some(PLACEHOLDER_COLOR), "solid fill");
    }

    #[test]
    fn load_reports_read_errors() {
        let err = PixelBuffer::load(Path::new("does/not/exist.png"), 12).expect_err("no such file");
        assert!(matches!(err, AssetError::Read { .. }), "missing file is a read error");
    }

    #[test]
    fn corrupt_artwork_is_a_decode_error() {
        let path = std::env::temp_dir().join(format!("jigsaw-corrupt-{}.png", std::process::id()));
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nnot really a png").expect("write temp file");

        let err = PixelBuffer::load(&path, 12).expect_err("junk bytes");
        let fallback = PixelBuffer::load_or_placeholder(&path, 12);
        std::fs::remove_file(&path).expect("remove temp file");

        assert!(matches!(err, AssetError::Decode { .. }), "unreadable pixels are a decode error");
        assert!(fallback.placeholder, "decode failure uses the placeholder");
        assert_eq!(fallback.pixels.pixel(0, 0), Some(PLACEHOLDER_COLOR), "solid fill");
    }
}
