/// ATX heading (`# Title` through `###### Title`).
pub struct AtxHeading;

impl AtxHeading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns `(level, content_range)` if `remainder` is an ATX heading.
    ///
    /// The content range is relative to `remainder` and excludes the opening
    /// marker, surrounding whitespace and an optional closing `#` sequence.
    pub fn parse(remainder: &str) -> Option<(u8, std::ops::Range<usize>)> {
        let line = remainder.trim_end_matches(['\r', '\n']);
        let b = line.as_bytes();
        let indent = b.iter().take_while(|&&c| c == b' ').count();
        if indent > 3 {
            return None;
        }
        let level = b[indent..].iter().take_while(|&&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let after = indent + level;
        if after < b.len() && b[after] != b' ' && b[after] != b'\t' {
            return None;
        }

        let mut start = after;
        while start < b.len() && (b[start] == b' ' || b[start] == b'\t') {
            start += 1;
        }
        let mut end = b.len();
        while end > start && (b[end - 1] == b' ' || b[end - 1] == b'\t') {
            end -= 1;
        }
        // Closing sequence counts only when preceded by whitespace (or is everything).
        let hashes = b[start..end].iter().rev().take_while(|&&c| c == Self::MARKER).count();
        if hashes > 0 {
            let before = end - hashes;
            if before == start {
                end = start;
            } else if b[before - 1] == b' ' || b[before - 1] == b'\t' {
                end = before;
                while end > start && (b[end - 1] == b' ' || b[end - 1] == b'\t') {
                    end -= 1;
                }
            }
        }
        Some((level as u8, start..end))
    }
}
