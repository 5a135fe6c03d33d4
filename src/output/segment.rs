//! Splits a reply into prose lines and fenced code blocks.
//!
//! The parser is a two-state line scanner. A line whose trimmed content starts
//! with the fence marker toggles between prose and fence mode; nested fences
//! are not recognized. Only fences that declare a language tag and are closed
//! before the end of input produce a [`Segment::Code`].

use tracing::debug;

/// Delimiter opening and closing a block of code-formatted text.
pub const FENCE_MARKER: &str = "```";

/// One parsed unit of a reply, in order of appearance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// A single line of prose outside any fence, kept verbatim.
    Text { line: String },
    /// The full body of a closed fence carrying a non-empty language tag.
    Code { language_tag: String, body: String },
}

impl Segment {
    pub fn is_code(&self) -> bool {
        matches!(self, Segment::Code { .. })
    }
}

struct OpenFence<'a> {
    language_tag: &'a str,
    lines: Vec<&'a str>,
}

/// Parse `reply` into an ordered sequence of segments.
///
/// Lines belonging to a fence that is still open when input ends are
/// discarded, as are the lines of fences without a language tag.
pub fn parse(reply: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut fence: Option<OpenFence<'_>> = None;

    for line in reply.split('\n') {
        let fence_rest = line.trim().strip_prefix(FENCE_MARKER);

        match (fence.take(), fence_rest) {
            (None, Some(rest)) => {
                fence = Some(OpenFence {
                    language_tag: rest.trim(),
                    lines: Vec::new(),
                });
            }
            (Some(open), Some(_)) => {
                if open.language_tag.is_empty() {
                    debug!(lines = open.lines.len(), "dropping fence without language tag");
                } else {
                    segments.push(Segment::Code {
                        language_tag: open.language_tag.to_string(),
                        body: open.lines.join("\n"),
                    });
                }
            }
            (Some(mut open), None) => {
                open.lines.push(line);
                fence = Some(open);
            }
            (None, None) => segments.push(Segment::Text {
                line: line.to_string(),
            }),
        }
    }

    if let Some(open) = fence {
        debug!(
            lines = open.lines.len(),
            language = open.language_tag,
            "discarding unterminated fence at end of reply"
        );
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &str) -> Segment {
        Segment::Text {
            line: line.to_string(),
        }
    }

    fn code(tag: &str, body: &str) -> Segment {
        Segment::Code {
            language_tag: tag.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn plain_reply_becomes_text_lines() {
        let segments = parse("first\n\nthird");
        assert_eq!(segments, vec![text("first"), text(""), text("third")]);
    }

    #[test]
    fn fenced_blocks_are_emitted_in_source_order() {
        let reply = "Intro\n```python\nprint(1)\nprint(2)\n```\nMiddle\n```go\nfunc main() {}\n```\nOutro";
        let segments = parse(reply);

        assert_eq!(
            segments,
            vec![
                text("Intro"),
                code("python", "print(1)\nprint(2)"),
                text("Middle"),
                code("go", "func main() {}"),
                text("Outro"),
            ]
        );
    }

    #[test]
    fn fence_lines_are_matched_after_trimming() {
        let segments = parse("  ```rust  \n    let x = 1;\n   ```");
        assert_eq!(segments, vec![code("rust", "    let x = 1;")]);
    }

    #[test]
    fn code_body_keeps_blank_and_indented_lines() {
        let segments = parse("```c\nint main() {\n\n    return 0;\n}\n```");
        assert_eq!(
            segments,
            vec![code("c", "int main() {\n\n    return 0;\n}")]
        );
    }

    #[test]
    fn untagged_fence_produces_no_segment() {
        let segments = parse("before\n```\nsecret\n```\nafter");
        assert_eq!(segments, vec![text("before"), text("after")]);
    }

    #[test]
    fn unterminated_fence_drops_its_lines() {
        let segments = parse("keep me\n```python\nlost = True\nalso lost");
        assert_eq!(segments, vec![text("keep me")]);
        assert!(!segments.iter().any(Segment::is_code));
    }

    #[test]
    fn closing_marker_ignores_trailing_text() {
        let segments = parse("```sh\nls\n``` trailing\nnext");
        assert_eq!(segments, vec![code("sh", "ls"), text("next")]);
    }

    #[test]
    fn empty_fence_body_is_kept() {
        let segments = parse("```css\n```");
        assert_eq!(segments, vec![code("css", "")]);
    }

    #[test]
    fn text_segments_reproduce_lines_outside_fences() {
        let reply = "alpha\n```js\nconsole.log(1)\n```\nbeta\n\ngamma";
        let joined = parse(reply)
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Text { line } => Some(line),
                Segment::Code { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n");

        assert_eq!(joined, "alpha\nbeta\n\ngamma");
    }

    #[test]
    fn n_tagged_pairs_yield_n_code_segments() {
        let reply = (0..5)
            .map(|i| format!("para {i}\n```lang{i}\nbody {i}\n```"))
            .collect::<Vec<_>>()
            .join("\n");

        let codes: Vec<_> = parse(&reply).into_iter().filter(Segment::is_code).collect();
        assert_eq!(codes.len(), 5);
        for (i, segment) in codes.iter().enumerate() {
            assert_eq!(segment, &code(&format!("lang{i}"), &format!("body {i}")));
        }
    }
}
