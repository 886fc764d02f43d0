//! End-of-session summary printed to stdout.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use std::fmt;

use canvas::input::Mode;

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeLine {
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub mode: Mode,
    pub frames: u64,
    pub actions: usize,
    pub rejected: usize,
    pub selected: Option<usize>,
    /// Name of the clipboard shape, if any.
    pub clipboard: Option<String>,
    pub shapes: Vec<ShapeLine>,
    /// Commands painted by the last frame.
    pub draw_commands: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.mode {
            Mode::Edit2D => "2D edit",
            Mode::Preview3D => "3D preview",
        };
        writeln!(f, "mode: {mode}")?;
        writeln!(f, "frames: {}", self.frames)?;
        writeln!(f, "actions: {}", self.actions)?;
        if self.rejected > 0 {
            writeln!(f, "rejected: {}", self.rejected)?;
        }
        match self.selected {
            Some(index) => writeln!(f, "selected: {index}")?,
            None => writeln!(f, "selected: none")?,
        }
        writeln!(f, "clipboard: {}", self.clipboard.as_deref().unwrap_or("empty"))?;
        writeln!(f, "shapes: {}", self.shapes.len())?;
        for (i, shape) in self.shapes.iter().enumerate() {
            let mark = if shape.selected { '*' } else { ' ' };
            writeln!(f, "{mark} [{i}] {}", shape.label)?;
        }
        writeln!(f, "draw commands: {}", self.draw_commands)
    }
}
