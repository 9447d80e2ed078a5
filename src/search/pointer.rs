//! JSON pointer accumulation
//!
//! The traversal engine pushes a segment before descending into a child and
//! pops it on the way back out. `render` produces the RFC 6901 string form
//! with `~` and `/` escaped inside segments.

/// Mutable segment stack for building JSON pointers during traversal
#[derive(Debug, Clone, Default)]
pub struct PointerBuf {
    segments: Vec<String>,
}

impl PointerBuf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an object key segment
    pub fn push(&mut self, segment: &str) {
        self.segments.push(segment.to_string());
    }

    /// Push an array index segment in decimal string form
    pub fn push_index(&mut self, index: usize) {
        self.segments.push(index.to_string());
    }

    /// Pop the most recent segment. Must mirror every push.
    pub fn pop(&mut self) {
        self.segments.pop();
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Render the current path as a pointer string. The document root
    /// renders as "/" so a root-level scalar match still has a visible path.
    pub fn render(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }

        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            out.push_str(&escape_segment(segment));
        }
        out
    }
}

/// RFC 6901 escaping: `~` becomes `~0`, `/` becomes `~1`
fn escape_segment(segment: &str) -> String {
    if !segment.contains(['~', '/']) {
        return segment.to_string();
    }
    segment.replace('~', "~0").replace('/', "~1")
}
