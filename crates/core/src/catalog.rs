//! Shape catalog - loading piece shapes from a text stream
//!
//! # Format
//!
//! Whitespace-separated integers:
//!
//! ```text
//! N
//! size  c00 c01 ... (size*size cells, row-major, 0 or 1)
//! size  ...
//! ```
//!
//! `N` counts only entries with `size >= 2`. An entry with `size <= 1` is
//! skipped but its `size*size` cell tokens are still consumed, so such
//! entries may sit anywhere in the stream. Reading stops after `N` counted
//! entries; anything after them is ignored.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::rng::SimpleRng;
use crate::shape::Shape;
use crate::types::MAX_SHAPE_SIZE;

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be opened or read
    #[error("catalog unreadable: {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from the stream failed
    #[error("catalog unreadable: {0}")]
    Read(#[from] std::io::Error),

    /// The stream holds no shape count
    #[error("catalog unreadable: missing shape count")]
    MissingCount,

    /// A token is not an integer
    #[error("catalog unreadable: expected an integer, found {0:?}")]
    InvalidToken(String),

    /// The shape count is zero or negative
    #[error("catalog unreadable: shape count must be positive, found {0}")]
    InvalidCount(i64),

    /// An entry declares an unusable size
    #[error("catalog unreadable: entry {entry} has size {size} (supported: up to {max})", max = MAX_SHAPE_SIZE)]
    InvalidSize { entry: usize, size: i64 },

    /// A cell token is neither 0 nor 1
    #[error("catalog unreadable: entry {entry} has cell value {value}, expected 0 or 1")]
    InvalidCell { entry: usize, value: i64 },

    /// The stream ended before all declared shapes were read
    #[error("catalog unreadable: expected {expected} shapes, stream ended after {found}")]
    Truncated { expected: usize, found: usize },
}

/// Integer tokens of a catalog stream
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next_int(&mut self) -> Result<Option<i64>, CatalogError> {
        match self.inner.next() {
            None => Ok(None),
            Some(tok) => tok
                .parse::<i64>()
                .map(Some)
                .map_err(|_| CatalogError::InvalidToken(tok.to_string())),
        }
    }
}

/// The set of shapes new figures are drawn from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    shapes: Vec<Shape>,
}

impl Catalog {
    /// Build a catalog from already constructed shapes
    pub fn new(shapes: Vec<Shape>) -> Result<Self, CatalogError> {
        if shapes.is_empty() {
            return Err(CatalogError::InvalidCount(0));
        }
        Ok(Self { shapes })
    }

    /// Open and parse a catalog file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(file)?;
        tracing::info!(
            "loaded {} shapes from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse a catalog from any reader
    pub fn from_reader(mut reader: impl Read) -> Result<Self, CatalogError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Parse a catalog from text
    ///
    /// ```
    /// use tui_blocks_core::Catalog;
    ///
    /// let catalog = Catalog::parse("1  2  1 1 1 1").unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// assert_eq!(catalog.shapes()[0].block_count(), 4);
    /// ```
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let mut tokens = Tokens::new(text);

        let count = tokens.next_int()?.ok_or(CatalogError::MissingCount)?;
        if count <= 0 {
            return Err(CatalogError::InvalidCount(count));
        }
        let expected = count as usize;

        let mut shapes = Vec::with_capacity(expected);
        let mut entry = 0usize;
        while shapes.len() < expected {
            let truncated = || CatalogError::Truncated {
                expected,
                found: shapes.len(),
            };
            let size = tokens.next_int()?.ok_or_else(truncated)?;
            if size < 0 || size as usize > MAX_SHAPE_SIZE {
                return Err(CatalogError::InvalidSize { entry, size });
            }
            let size = size as usize;

            let mut cells = Vec::with_capacity(size * size);
            for _ in 0..size * size {
                let value = tokens.next_int()?.ok_or_else(truncated)?;
                match value {
                    0 => cells.push(false),
                    1 => cells.push(true),
                    _ => return Err(CatalogError::InvalidCell { entry, value }),
                }
            }

            if size > 1 {
                // Size and cell count were validated above.
                if let Some(shape) = Shape::from_cells(size, &cells) {
                    shapes.push(shape);
                }
            } else {
                tracing::debug!("skipping catalog entry {} of size {}", entry, size);
            }
            entry += 1;
        }

        Ok(Self { shapes })
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Pick one shape uniformly at random (a fresh copy)
    pub fn pick_random(&self, rng: &mut SimpleRng) -> Shape {
        let idx = rng.next_range(self.shapes.len() as u32) as usize;
        self.shapes[idx].clone()
    }
}
