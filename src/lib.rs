//! # blockmesh
//!
//! Converts text descriptions of axis-aligned 3D blocks into mesh files.
//!
//! Two encoders share one cube topology:
//!
//! - **OBJ** ([`ObjIo`]): 13-field track records become grouped,
//!   materialed Wavefront OBJ files, one per channel/type/frame.
//! - **OFF** ([`OffIo`]): 6-field corner lines become a single colored
//!   polyhedron document with a per-block color gradient.
//!
//! ## Example
//!
//! ```rust,no_run
//! use blockmesh::{FrameRange, ObjIo};
//!
//! let stats = ObjIo::export_file("blocks.txt", FrameRange::new(0, 100), ".", None)?;
//! println!("Wrote {} boxes into {} files", stats.boxes_written, stats.files.len());
//! # Ok::<(), blockmesh::Error>(())
//! ```

pub mod cube;
pub mod error;
pub mod log;
pub mod obj;
pub mod off;
pub mod palette;
pub mod record;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
pub use log::LogFile;
pub use obj::{FrameRange, ObjIo, ObjStats, ObjWriter};
pub use off::{OffIo, OffStats};
pub use palette::{ChannelPalette, COLOR_MAPS};
pub use record::{Block, BlockRecord};
pub use types::{BBox3, Rgb, Triangle};
pub use utils::{TempFolder, Utils};
