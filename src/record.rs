//! Line parsers for block record inputs

use crate::utils::Utils;
use crate::{Error, Result};

/// A block observation from a 13-field track record line.
///
/// Constructed per input line and consumed immediately by the OBJ writer.
/// The corner fields are carried as raw text and written out verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRecord {
    /// Channel identifier with quote characters stripped
    pub channel_id: String,
    /// Frame the block was observed in
    pub frame_id: i64,
    /// Pluralized block category, e.g. `predictions`
    pub box_type: String,
    /// The six bounding corner fields in input order, verbatim
    pub corners: [String; 6],
}

impl BlockRecord {
    /// Expected number of whitespace-separated fields per line
    pub const FIELD_COUNT: usize = 13;

    /// Field indices holding the six corner values. Fields 7 and 8 are not
    /// part of this encoding.
    const CORNER_FIELDS: [usize; 6] = [4, 5, 6, 9, 10, 11];

    /// Parse a single record line. `line_no` is 1-based and only used for
    /// error reporting.
    pub fn parse(line: &str, line_no: usize) -> Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != Self::FIELD_COUNT {
            return Err(Error::MalformedRecord {
                line: line_no,
                reason: format!(
                    "expected {} fields, found {}",
                    Self::FIELD_COUNT,
                    fields.len()
                ),
            });
        }

        let frame_id = fields[1].parse::<i64>().map_err(|_| Error::MalformedRecord {
            line: line_no,
            reason: format!("invalid frame id: {}", Utils::shorten(fields[1], 40)),
        })?;

        let corners = Self::CORNER_FIELDS.map(|idx| fields[idx].to_string());

        Ok(Self {
            channel_id: Utils::strip_quotes(fields[0]),
            frame_id,
            box_type: format!("{}s", fields[2]),
            corners,
        })
    }
}

/// A bare block from a 6-field corner line, used by the OFF exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// The six bounding corner values in input order
    pub corners: [i64; 6],
}

impl Block {
    /// Expected number of whitespace-separated fields per line
    pub const FIELD_COUNT: usize = 6;

    /// Parse a single corner line. `line_no` is 1-based and only used for
    /// error reporting.
    pub fn parse(line: &str, line_no: usize) -> Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != Self::FIELD_COUNT {
            return Err(Error::MalformedRecord {
                line: line_no,
                reason: format!(
                    "expected {} fields, found {}",
                    Self::FIELD_COUNT,
                    fields.len()
                ),
            });
        }

        let mut corners = [0i64; 6];
        for (slot, field) in corners.iter_mut().zip(&fields) {
            *slot = field.parse::<i64>().map_err(|_| Error::MalformedRecord {
                line: line_no,
                reason: format!("invalid corner value: {}", Utils::shorten(field, 40)),
            })?;
        }

        Ok(Self { corners })
    }
}
