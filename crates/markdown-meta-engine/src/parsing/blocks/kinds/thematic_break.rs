/// Thematic break (`---`, `***`, `___`, optionally spaced).
///
/// A `---` on the first line of a document is front matter, not a break;
/// the builder checks front matter first.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 3] = ['-', '*', '_'];
    pub const MIN_MARKERS: usize = 3;

    pub fn matches(remainder: &str) -> bool {
        let line = remainder.trim_end_matches(['\r', '\n']);
        if line.len() - line.trim_start_matches(' ').len() > 3 {
            return false;
        }
        let mut marker = None;
        let mut count = 0;
        for c in line.chars() {
            match c {
                ' ' | '\t' => {}
                c if Self::MARKERS.contains(&c) => {
                    if marker.is_some_and(|m| m != c) {
                        return false;
                    }
                    marker = Some(c);
                    count += 1;
                }
                _ => return false,
            }
        }
        count >= Self::MIN_MARKERS
    }
}
