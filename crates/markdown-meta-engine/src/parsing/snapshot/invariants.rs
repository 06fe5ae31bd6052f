use xi_rope::Rope;

use crate::parsing::blocks::BlockNode;

pub fn check(rope: &Rope, blocks: &[BlockNode]) {
    let n = rope.len();
    for b in blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (rope len: {})",
            b.span,
            n
        );
        assert!(
            b.span.contains(b.content_span),
            "content span not contained in block span: content {:?}, block {:?}",
            b.content_span,
            b.span
        );
    }

    let front_matter: Vec<_> = blocks.iter().filter(|b| b.is_front_matter()).collect();
    assert!(
        front_matter.len() <= 1,
        "more than one front matter block: {front_matter:?}"
    );
    if let Some(fm) = front_matter.first() {
        assert_eq!(fm.span.start, 0, "front matter must start the document");
        assert!(fm.containers.is_empty(), "front matter inside a container");
    }

    for pair in blocks.windows(2) {
        assert!(
            pair[0].span.end <= pair[1].span.start,
            "blocks overlap or are out of order: {:?} then {:?}",
            pair[0].span,
            pair[1].span
        );
    }
}
