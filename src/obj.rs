//! Grouped Wavefront OBJ export
//!
//! Block records are routed into one `.obj` file per distinct
//! channel/type/frame combination. Each stream declares an object group,
//! references the external `colormaps.mtl` material library and rotates
//! through per-box materials of the channel's color family.

use crate::cube::{CORNER_SELECTION, FACES, VERTICES_PER_BLOCK};
use crate::palette::ChannelPalette;
use crate::record::BlockRecord;
use crate::{Error, LogFile, Result};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Material library referenced by every output file. Provided externally,
/// never generated here.
pub const MATERIAL_LIBRARY: &str = "colormaps.mtl";

/// Highest rotating material index per color family
pub const MAX_MATERIAL_INDEX: usize = 127;

/// Inclusive frame filter for block records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRange {
    pub start: i64,
    pub end: i64,
}

impl FrameRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, frame: i64) -> bool {
        frame >= self.start && frame <= self.end
    }
}

/// Material name for a box index within a stream, clamped to the rotating
/// palette size.
pub fn material_name(color: &str, box_index: usize) -> String {
    format!("mtl_{}_{}", color, box_index.min(MAX_MATERIAL_INDEX))
}

/// Identity of one output stream.
///
/// Structured on purpose: concatenating the parts into a single string
/// could collide when a channel id contains the separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StreamKey {
    channel: String,
    box_type: String,
    frame: i64,
}

impl StreamKey {
    fn from_record(record: &BlockRecord) -> Self {
        Self {
            channel: record.channel_id.clone(),
            box_type: record.box_type.clone(),
            frame: record.frame_id,
        }
    }

    fn file_name(&self) -> String {
        format!("{}_{}.f{}.obj", self.channel, self.box_type, self.frame)
    }

    fn object_name(&self) -> String {
        format!("{}.{}", self.channel, self.box_type)
    }
}

struct ObjStream {
    writer: BufWriter<File>,
    color: &'static str,
    box_count: usize,
}

/// Result summary of an OBJ export run
#[derive(Debug)]
pub struct ObjStats {
    /// Boxes written across all streams
    pub boxes_written: usize,
    /// Boxes skipped by the frame filter
    pub boxes_skipped: usize,
    /// Output files in creation order
    pub files: Vec<PathBuf>,
    /// Channel color assignments in first-seen order
    pub channels: Vec<(String, String)>,
}

/// Streaming writer holding one open sink per stream key
pub struct ObjWriter {
    out_dir: PathBuf,
    streams: HashMap<StreamKey, ObjStream>,
    palette: ChannelPalette,
    files: Vec<PathBuf>,
    boxes_written: usize,
    boxes_skipped: usize,
}

impl ObjWriter {
    pub fn new<P: AsRef<Path>>(out_dir: P) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
            streams: HashMap::new(),
            palette: ChannelPalette::new(),
            files: Vec::new(),
            boxes_written: 0,
            boxes_skipped: 0,
        }
    }

    /// Append one record to its stream, opening the stream on first use
    pub fn write_record(&mut self, record: &BlockRecord) -> Result<()> {
        let key = StreamKey::from_record(record);
        let stream = match self.streams.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let color = self.palette.color_for(&record.channel_id)?;
                let path = self.out_dir.join(entry.key().file_name());
                let file = File::create(&path).map_err(|e| {
                    Error::FileSave(format!("Failed to create {}: {}", path.display(), e))
                })?;
                let mut writer = BufWriter::new(file);
                writeln!(writer, "mtllib {}", MATERIAL_LIBRARY)?;
                writeln!(writer, "o {}", entry.key().object_name())?;
                writeln!(writer)?;
                self.files.push(path);
                entry.insert(ObjStream {
                    writer,
                    color,
                    box_count: 0,
                })
            }
        };

        let box_index = stream.box_count;
        stream.box_count += 1;

        let writer = &mut stream.writer;
        writeln!(writer, "# ---- box {} ----", box_index)?;
        writeln!(writer, "usemtl {}", material_name(stream.color, box_index))?;
        for sel in CORNER_SELECTION {
            writeln!(
                writer,
                "v {} {} {}",
                record.corners[sel[0]], record.corners[sel[1]], record.corners[sel[2]]
            )?;
        }

        // OBJ face indices are 1-based
        let base = VERTICES_PER_BLOCK * box_index + 1;
        writeln!(writer)?;
        writeln!(writer, "g box_{}", box_index)?;
        for tri in FACES {
            let tri = tri.offset(base);
            writeln!(writer, "f {} {} {}", tri.v0, tri.v1, tri.v2)?;
        }
        writeln!(writer)?;

        self.boxes_written += 1;
        Ok(())
    }

    /// Record a box rejected by the frame filter. Does not touch any stream
    /// counter.
    pub fn note_skipped(&mut self) {
        self.boxes_skipped += 1;
    }

    /// Number of open streams
    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    /// Flush all streams and return the run summary
    pub fn finish(mut self) -> Result<ObjStats> {
        for stream in self.streams.values_mut() {
            stream.writer.flush()?;
        }
        Ok(ObjStats {
            boxes_written: self.boxes_written,
            boxes_skipped: self.boxes_skipped,
            files: std::mem::take(&mut self.files),
            channels: self
                .palette
                .assignments()
                .map(|(id, color)| (id.to_string(), color.to_string()))
                .collect(),
        })
    }
}

pub struct ObjIo;

impl ObjIo {
    /// Convert a 13-field block record file into grouped OBJ files in
    /// `out_dir`, keeping only frames inside `range`.
    pub fn export_file<P: AsRef<Path>, Q: AsRef<Path>>(
        input: P,
        range: FrameRange,
        out_dir: Q,
        log: Option<&LogFile>,
    ) -> Result<ObjStats> {
        let file = File::open(input.as_ref()).map_err(|e| {
            Error::FileLoad(format!(
                "Failed to open {}: {}",
                input.as_ref().display(),
                e
            ))
        })?;
        let reader = BufReader::new(file);
        let mut writer = ObjWriter::new(out_dir);

        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::FileLoad(format!("Failed to read input: {}", e)))?;
            if line.trim().is_empty() {
                continue;
            }

            let record = BlockRecord::parse(&line, line_no + 1)?;
            if !range.contains(record.frame_id) {
                if let Some(log) = log {
                    log.log(format!("Skipping box for frame {}", record.frame_id))?;
                }
                writer.note_skipped();
                continue;
            }

            writer.write_record(&record)?;
        }

        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_name_clamp() {
        assert_eq!(material_name("red", 0), "mtl_red_0");
        assert_eq!(material_name("red", 127), "mtl_red_127");
        assert_eq!(material_name("grey", 130), "mtl_grey_127");
    }

    #[test]
    fn test_frame_range_inclusive() {
        let range = FrameRange::new(10, 20);
        assert!(range.contains(10));
        assert!(range.contains(20));
        assert!(!range.contains(9));
        assert!(!range.contains(21));
    }

    #[test]
    fn test_writer_reuses_streams() {
        let tmp = crate::TempFolder::new().unwrap();
        let mut writer = ObjWriter::new(tmp.path());
        let record =
            BlockRecord::parse("'cam0' 1 prediction 0.9 0 0 0 640 480 1 1 1 1.0", 1).unwrap();
        writer.write_record(&record).unwrap();
        writer.write_record(&record).unwrap();
        assert_eq!(writer.stream_count(), 1);
        let stats = writer.finish().unwrap();
        assert_eq!(stats.boxes_written, 2);
        assert_eq!(stats.files.len(), 1);
    }

    #[test]
    fn test_stream_key_names() {
        let key = StreamKey {
            channel: "cam0".to_string(),
            box_type: "predictions".to_string(),
            frame: 17,
        };
        assert_eq!(key.file_name(), "cam0_predictions.f17.obj");
        assert_eq!(key.object_name(), "cam0.predictions");
    }
}
