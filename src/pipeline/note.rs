//! Note assembly and output writing.
//!
//! A [`LectureNote`] is the final artifact for one transcript: a header
//! naming the lecture, then each surviving content line separated by blank
//! lines.  The output file name reuses the lecture index when the input
//! stem carries one (`节次N_笔记.txt`), otherwise it is derived from the
//! stem directly (`{stem}_笔记.txt`) and the header names the stem instead
//! of a lecture number.

use std::io;
use std::path::{Path, PathBuf};

use super::discover::lecture_index;

// ---------------------------------------------------------------------------
// LectureNote
// ---------------------------------------------------------------------------

/// Cleaned note content for one lecture, ready to be written.
#[derive(Debug, Clone)]
pub struct LectureNote {
    /// Header line, without trailing newlines.
    header: String,
    /// Output file name (no directory component).
    file_name: String,
    /// Content lines, in transcript order.
    lines: Vec<String>,
}

impl LectureNote {
    /// Assemble a note from the input file stem and its content lines.
    pub fn new(stem: &str, lines: Vec<String>) -> Self {
        let (header, file_name) = match lecture_index(stem) {
            Some(index) => (
                format!("# CSP课程第{index}节笔记"),
                format!("节次{index}_笔记.txt"),
            ),
            None => (format!("# {stem} 笔记"), format!("{stem}_笔记.txt")),
        };
        Self {
            header,
            file_name,
            lines,
        }
    }

    /// Header line naming the lecture.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Output file name within the notes directory.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Number of content lines.
    pub fn entry_count(&self) -> usize {
        self.lines.len()
    }

    /// Render the full file body: header, blank line, then each content
    /// line followed by a blank line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.header);
        out.push_str("\n\n");
        for line in &self.lines {
            out.push_str(line);
            out.push_str("\n\n");
        }
        out
    }

    /// Write the note into `output_dir`, overwriting any existing file.
    /// Returns the full path of the written file.
    pub fn write_to(&self, output_dir: &Path) -> io::Result<PathBuf> {
        let path = output_dir.join(&self.file_name);
        std::fs::write(&path, self.render())?;
        Ok(path)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
