//! Colored OFF export
//!
//! All blocks go into a single Object File Format document. Coordinates are
//! normalized by a fixed scale, and every block gets a procedural color
//! from a repeating three-block cycle with a brightness ramp across groups.

use crate::cube::{vertices, EDGES_PER_BLOCK, FACES, FACES_PER_BLOCK, VERTICES_PER_BLOCK};
use crate::record::Block;
use crate::types::{BBox3, Rgb};
use crate::{Error, Result};
use nalgebra::Vector3;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Raw corner values are divided by this to land in a bounded float range
pub const COORDINATE_SCALE: f64 = 65536.0;

/// Result summary of an OFF export run
#[derive(Debug)]
pub struct OffStats {
    /// Number of blocks written
    pub block_count: usize,
    /// Scaled extent of all emitted vertices
    pub bbox: BBox3,
}

/// Color of the block at `index`.
///
/// `step` is the group brightness increment. The group index `index / 3`
/// uses integer division; one channel selected by `index % 3` is dimmed by
/// half the group brightness.
fn block_color(index: usize, step: f64) -> Rgb {
    let c = (index / 3) as f64 * step;
    let reduction = 0.5 * c;
    let mut color = Rgb::gray(c);
    match index % 3 {
        0 => color.r -= reduction,
        1 => color.g -= reduction,
        _ => color.b -= reduction,
    }
    color
}

pub struct OffIo;

impl OffIo {
    /// Read a 6-field corner file into blocks. Every line must parse; there
    /// is no filtering.
    pub fn read_blocks<P: AsRef<Path>>(path: P) -> Result<Vec<Block>> {
        let file = File::open(path.as_ref()).map_err(|e| {
            Error::FileLoad(format!("Failed to open {}: {}", path.as_ref().display(), e))
        })?;
        let reader = BufReader::new(file);

        let mut blocks = Vec::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::FileLoad(format!("Failed to read input: {}", e)))?;
            blocks.push(Block::parse(&line, line_no + 1)?);
        }
        Ok(blocks)
    }

    /// Write the full OFF document for `blocks` to `out`
    pub fn write_document<W: Write>(blocks: &[Block], out: &mut W) -> Result<OffStats> {
        writeln!(out, "OFF")?;
        writeln!(
            out,
            "{} {} {} # NVertices NFaces NEdges",
            blocks.len() * VERTICES_PER_BLOCK,
            blocks.len() * FACES_PER_BLOCK,
            blocks.len() * EDGES_PER_BLOCK
        )?;
        writeln!(out)?;

        let mut bbox = BBox3::empty();
        for block in blocks {
            for vertex in vertices(&block.corners) {
                let point = Vector3::new(
                    vertex[0] as f64 / COORDINATE_SCALE,
                    vertex[1] as f64 / COORDINATE_SCALE,
                    vertex[2] as f64 / COORDINATE_SCALE,
                );
                bbox.include_point(point);
                writeln!(out, "{} {} {}", point.x, point.y, point.z)?;
            }
            writeln!(out)?;
        }

        let step = 1.0 / (blocks.len() as f64 / 3.0);
        for index in 0..blocks.len() {
            writeln!(out, "# ---- Box  {} ---- ", index)?;

            let base = VERTICES_PER_BLOCK * index;
            let color = block_color(index, step);
            for tri in FACES {
                let tri = tri.offset(base);
                writeln!(out, "3 {} {} {} {}", tri.v0, tri.v1, tri.v2, color)?;
            }
            writeln!(out)?;
        }

        Ok(OffStats {
            block_count: blocks.len(),
            bbox,
        })
    }

    /// Convert a corner file into an OFF document on `out`
    pub fn export_file<P: AsRef<Path>, W: Write>(input: P, out: &mut W) -> Result<OffStats> {
        let blocks = Self::read_blocks(input)?;
        Self::write_document(&blocks, out)
    }
}
