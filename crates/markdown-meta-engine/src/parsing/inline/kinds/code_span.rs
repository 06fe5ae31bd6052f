/// Code span inline type.
///
/// Code spans are raw zones. A span opened by a run of N backticks is
/// closed by the next run of exactly N backticks.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
