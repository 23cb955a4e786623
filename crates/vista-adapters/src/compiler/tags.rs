//! Output tag translation.
//!
//! View templates use configurable delimiters for escaped and raw output.
//! The engine underneath speaks MiniJinja, so before a template is handed to
//! it every output tag is rewritten:
//!
//! ```text
//! {{ user.name }}        ->  {{ user.name }}              (HTML-escaped)
//! {!! body !!}           ->  {{ (body)|safe }}            (raw)
//! {{-- note --}}         ->  (removed)
//! @{{ literal }}         ->  {{ '{{' }} literal }}        (printed as-is)
//! {% if user %}...       ->  unchanged
//! ```
//!
//! Comments are built from the escaped delimiters (`<begin>--` ... `--<end>`).
//! Statements (`{% %}`) and MiniJinja comments (`{# #}`) pass through.

use vista_core::domain::TagPair;

/// Escaped form of a literal `{{` in the compiled output.
const LITERAL_OPEN: &str = "{{ '{{' }}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Comment,
    Raw,
    Content,
}

/// The delimiter set a template is written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSyntax {
    content: TagPair,
    raw: TagPair,
    comment: TagPair,
}

impl TagSyntax {
    pub fn new(content: TagPair, raw: TagPair) -> Self {
        let comment = TagPair::new(
            format!("{}--", content.begin),
            format!("--{}", content.end),
        );
        Self {
            content,
            raw,
            comment,
        }
    }

    /// Stable key identifying this delimiter set, used to name compiled files.
    pub fn cache_key(&self) -> String {
        [&self.content, &self.raw, &self.comment]
            .iter()
            .flat_map(|pair| [pair.begin.as_str(), pair.end.as_str()])
            .collect::<Vec<_>>()
            .join("\0")
    }

    /// Translate `source` into MiniJinja syntax.
    ///
    /// Fails with a human-readable reason on an unclosed or empty tag.
    pub fn translate(&self, source: &str) -> Result<String, String> {
        let mut out = String::with_capacity(source.len() + source.len() / 8);
        let mut rest = source;
        let mut offset = 0;

        while let Some((pos, kind)) = self.next_tag(rest) {
            let pair = self.pair(kind);
            let (text, tail) = rest.split_at(pos);

            if kind != TagKind::Comment && text.ends_with('@') {
                push_literal(&mut out, &text[..text.len() - 1]);
                push_literal(&mut out, &pair.begin);
                let consumed = pos + pair.begin.len();
                rest = &rest[consumed..];
                offset += consumed;
                continue;
            }

            push_literal(&mut out, text);

            let body = &tail[pair.begin.len()..];
            let end = body.find(&pair.end).ok_or_else(|| {
                format!("unclosed '{}' at byte {}", pair.begin, offset + pos)
            })?;
            let expression = body[..end].trim();

            match kind {
                TagKind::Comment => {}
                TagKind::Content | TagKind::Raw if expression.is_empty() => {
                    return Err(format!("empty '{}' tag at byte {}", pair.begin, offset + pos));
                }
                TagKind::Content => {
                    out.push_str("{{ ");
                    out.push_str(expression);
                    out.push_str(" }}");
                }
                TagKind::Raw => {
                    out.push_str("{{ (");
                    out.push_str(expression);
                    out.push_str(")|safe }}");
                }
            }

            let consumed = pos + pair.begin.len() + end + pair.end.len();
            rest = &rest[consumed..];
            offset += consumed;
        }

        push_literal(&mut out, rest);
        Ok(out)
    }

    fn pair(&self, kind: TagKind) -> &TagPair {
        match kind {
            TagKind::Comment => &self.comment,
            TagKind::Raw => &self.raw,
            TagKind::Content => &self.content,
        }
    }

    /// Earliest opening delimiter in `text`; the longest one wins a tie.
    fn next_tag(&self, text: &str) -> Option<(usize, TagKind)> {
        [TagKind::Comment, TagKind::Raw, TagKind::Content]
            .into_iter()
            .filter_map(|kind| {
                let begin = &self.pair(kind).begin;
                text.find(begin.as_str()).map(|pos| (pos, begin.len(), kind))
            })
            .min_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)))
            .map(|(pos, _, kind)| (pos, kind))
    }
}

fn push_literal(out: &mut String, text: &str) {
    let mut parts = text.split("{{");
    if let Some(first) = parts.next() {
        out.push_str(first);
    }
    for part in parts {
        out.push_str(LITERAL_OPEN);
        out.push_str(part);
    }
}
