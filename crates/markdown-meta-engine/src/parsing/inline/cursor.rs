/// A byte cursor over inline content that reports absolute rope positions.
#[derive(Clone)]
pub struct Cursor<'a> {
    s: &'a [u8],
    base: usize,
    i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `s`; `base` is the rope offset of `s`.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self {
            s: s.as_bytes(),
            base,
            i: 0,
        }
    }

    /// Current absolute byte position.
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.s.get(self.i).copied()
    }

    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Consumes a run of `b`, returning its length.
    pub fn eat_run(&mut self, b: u8) -> usize {
        let start = self.i;
        while self.peek() == Some(b) {
            self.i += 1;
        }
        self.i - start
    }
}
