use crate::errors::{AnnotationError, Result};

///
/// Shape of a flank row, decided by its number of window columns.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlankKind {
    /// prev, `k` deviants, next
    Snv,
    /// prev, `k - 1` deviants, next
    Deletion,
    Other,
}

///
/// One row of resequencing output: the windows surrounding a candidate
/// variant, with the read id and its observation count.
///
/// Layout (whitespace-delimited): `id _ count _ _ prev deviant... next`, where
/// the window columns start at a fixed offset.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlankRecord {
    pub id: String,
    pub count: u32,
    pub windows: Vec<String>,
}

impl FlankRecord {
    pub fn from_line(line: &str, offset: usize) -> Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();

        let (Some(id), Some(count)) = (fields.first(), fields.get(2)) else {
            return Err(AnnotationError::InvalidFlankRecord(format!(
                "expected an id and a count column: {}",
                line.trim_end()
            )));
        };
        let count = count.parse::<u32>().map_err(|_| {
            AnnotationError::InvalidFlankRecord(format!("count '{}' is not an integer", count))
        })?;

        // at least prev and next
        if fields.len() < offset + 2 {
            return Err(AnnotationError::InvalidFlankRecord(format!(
                "fewer than two window columns after column {}: {}",
                offset,
                line.trim_end()
            )));
        }

        Ok(FlankRecord {
            id: id.to_string(),
            count,
            windows: fields[offset..].iter().map(|w| w.to_string()).collect(),
        })
    }

    pub fn prev(&self) -> &str {
        &self.windows[0]
    }

    pub fn next(&self) -> &str {
        &self.windows[self.windows.len() - 1]
    }

    /// Windows strictly between prev and next.
    pub fn deviants(&self) -> &[String] {
        &self.windows[1..self.windows.len() - 1]
    }

    pub fn kind(&self, window_length: usize) -> FlankKind {
        let n = self.windows.len();
        if n == window_length + 2 {
            FlankKind::Snv
        } else if n == window_length + 1 {
            FlankKind::Deletion
        } else {
            FlankKind::Other
        }
    }

    ///
    /// Alternate base of an SNV row. The variant is the last base of the
    /// first deviant and shifts left as the window slides.
    ///
    pub fn snv_base(&self) -> Option<u8> {
        self.deviants()
            .first()
            .and_then(|window| window.as_bytes().last().copied())
    }
}
