//! Page shell: a pre-built HTML page whose container elements receive the
//! generated fragments.
//!
//! This is not a general HTML parser. It understands what a hand-written
//! page shell contains: start/end tags, quoted attributes, comments, void
//! elements and raw-text `<script>`/`<style>` bodies. Containers are matched
//! by counting nested tags of the same name.

use std::fmt;
use std::ops::Range;

use crate::errors::{FolioError, Result};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// How a container element is located in the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// `.name`: any element whose `class` attribute contains the token.
    Class(&'a str),
    /// `#name`: the element whose `id` equals the value.
    Id(&'a str),
    /// Bare tag name, case-insensitive.
    Tag(&'a str),
}

impl<'a> Selector<'a> {
    /// Parses `.class`, `#id` or `tag` notation.
    pub fn parse(raw: &'a str) -> Self {
        if let Some(class) = raw.strip_prefix('.') {
            Selector::Class(class)
        } else if let Some(id) = raw.strip_prefix('#') {
            Selector::Id(id)
        } else {
            Selector::Tag(raw)
        }
    }

    fn matches(&self, html: &str, tag: &StartTag) -> bool {
        match self {
            Selector::Tag(name) => tag.name(html).eq_ignore_ascii_case(name),
            Selector::Id(id) => tag.attr(html, "id").is_some_and(|v| v == *id),
            Selector::Class(class) => tag
                .attr(html, "class")
                .is_some_and(|v| v.split_whitespace().any(|token| token == *class)),
        }
    }
}

impl fmt::Display for Selector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Class(c) => write!(f, ".{c}"),
            Selector::Id(id) => write!(f, "#{id}"),
            Selector::Tag(t) => f.write_str(t),
        }
    }
}

/// A located element: byte offsets into the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// The start tag, from `<` through `>`.
    pub start_tag: Range<usize>,
    /// Content between the start and end tags. `None` for void and
    /// self-closing elements.
    pub inner: Option<Range<usize>>,
}

#[derive(Debug, Clone)]
struct StartTag {
    start: usize,
    name: Range<usize>,
    attrs: Range<usize>,
    end: usize,
    self_closing: bool,
}

impl StartTag {
    fn name<'h>(&self, html: &'h str) -> &'h str {
        &html[self.name.clone()]
    }

    fn attr<'h>(&self, html: &'h str, wanted: &str) -> Option<&'h str> {
        parse_attrs(html, self.attrs.clone())
            .into_iter()
            .find(|a| html[a.name.clone()].eq_ignore_ascii_case(wanted))
            .map(|a| a.value.map_or("", |v| &html[v]))
    }

    fn is_void(&self, html: &str) -> bool {
        let name = self.name(html);
        self.self_closing || VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone)]
struct Attr {
    name: Range<usize>,
    /// Value without its quotes; `None` for a bare attribute like `disabled`.
    value: Option<Range<usize>>,
}

/// The live page: a mutable HTML string with selector-based edits.
///
/// Content written into an element is kept as a sealed region. Scans still
/// see the elements inside a region, but a malformed fragment stays confined
/// to its own region and never hides or breaks markup outside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    html: String,
    sealed: Vec<Range<usize>>,
}

impl Document {
    pub fn parse(html: impl Into<String>) -> Self {
        Document {
            html: html.into(),
            sealed: Vec::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }

    /// Every element matching `selector`, in document order.
    pub fn find_all(&self, selector: &Selector) -> Result<Vec<Element>> {
        self.collect(0..self.html.len(), selector)
    }

    /// Elements matching `selector` inside the first `scope` element. Empty
    /// when the scope is missing.
    pub fn find_all_within(&self, scope: &Selector, selector: &Selector) -> Result<Vec<Element>> {
        match self.find_first(scope)?.and_then(|el| el.inner) {
            Some(inner) => self.collect(inner, selector),
            None => Ok(Vec::new()),
        }
    }

    pub fn find_first(&self, selector: &Selector) -> Result<Option<Element>> {
        Ok(self.find_all(selector)?.into_iter().next())
    }

    pub fn count(&self, selector: &Selector) -> Result<usize> {
        Ok(self.find_all(selector)?.len())
    }

    /// Content of the first matching element.
    pub fn inner_html(&self, selector: &Selector) -> Result<Option<&str>> {
        Ok(self
            .find_first(selector)?
            .and_then(|el| el.inner)
            .map(|range| &self.html[range]))
    }

    /// Replaces the content of the first matching element. Returns `false`
    /// when no element matches (or it is a void element).
    pub fn replace_inner(&mut self, selector: &Selector, content: &str) -> Result<bool> {
        match self.find_first(selector)?.and_then(|el| el.inner) {
            Some(range) => {
                self.fill(range, content);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Fills several containers in one pass. Every container is located
    /// before any content goes in, so the outcome for one container never
    /// depends on what another receives. One result per entry, in order,
    /// with the same meaning as [`replace_inner`](Self::replace_inner).
    pub fn fill_containers(&mut self, fills: &[(Selector<'_>, &str)]) -> Vec<Result<bool>> {
        let mut outcomes = Vec::with_capacity(fills.len());
        let mut targets: Vec<(Range<usize>, &str)> = Vec::new();

        for (selector, content) in fills {
            match self.find_first(selector).map(|el| el.and_then(|el| el.inner)) {
                Ok(Some(range)) if targets.iter().any(|(t, _)| overlaps(t, &range)) => {
                    outcomes.push(Err(FolioError::Shell(format!(
                        "{selector} overlaps another container"
                    ))));
                }
                Ok(Some(range)) => {
                    targets.push((range, *content));
                    outcomes.push(Ok(true));
                }
                Ok(None) => outcomes.push(Ok(false)),
                Err(e) => outcomes.push(Err(e)),
            }
        }

        // Back to front, so offsets of the remaining targets stay valid.
        targets.sort_by(|a, b| b.0.start.cmp(&a.0.start));
        for (range, content) in targets {
            self.fill(range, content);
        }
        outcomes
    }

    /// Like [`replace_inner`](Self::replace_inner) but with text-content
    /// semantics: the text is escaped.
    pub fn set_text(&mut self, selector: &Selector, text: &str) -> Result<bool> {
        self.replace_inner(selector, &escape_html(text))
    }

    /// Value of `name` on the `nth` matching element. A bare attribute reads
    /// as an empty string.
    pub fn attribute(&self, selector: &Selector, nth: usize, name: &str) -> Result<Option<String>> {
        match self.find_all(selector)?.into_iter().nth(nth) {
            Some(element) => self.attribute_of(&element, name),
            None => Ok(None),
        }
    }

    /// Value of `name` on an element found earlier.
    pub fn attribute_of(&self, element: &Element, name: &str) -> Result<Option<String>> {
        let html = self.html.as_str();
        let start = element.start_tag.start;
        let tag = parse_start_tag(html, start, self.limit_at(start))?;
        Ok(tag.and_then(|t| t.attr(html, name).map(str::to_string)))
    }

    /// Sets (or adds) an attribute on the `nth` matching element.
    pub fn set_attribute(
        &mut self,
        selector: &Selector,
        nth: usize,
        name: &str,
        value: &str,
    ) -> Result<bool> {
        let Some(element) = self.find_all(selector)?.into_iter().nth(nth) else {
            return Ok(false);
        };
        self.write_attribute(element.start_tag.start, name, value)?;
        Ok(true)
    }

    /// Sets (or adds) an attribute on an element found earlier. The edit
    /// shifts every later offset, so when updating several elements from
    /// one lookup, go from last to first.
    pub fn set_attribute_on(&mut self, element: &Element, name: &str, value: &str) -> Result<()> {
        self.write_attribute(element.start_tag.start, name, value)
    }

    /// Sets an attribute on the first `child` element inside the `nth`
    /// element matching `parent`.
    pub fn set_attribute_in(
        &mut self,
        parent: &Selector,
        nth: usize,
        child: &Selector,
        name: &str,
        value: &str,
    ) -> Result<bool> {
        let Some(inner) = self
            .find_all(parent)?
            .into_iter()
            .nth(nth)
            .and_then(|el| el.inner)
        else {
            return Ok(false);
        };

        let html = self.html.as_str();
        let target = self
            .start_tags(inner)?
            .into_iter()
            .find(|tag| child.matches(html, tag))
            .map(|tag| tag.start);

        match target {
            Some(start) => {
                self.write_attribute(start, name, value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Inserts markup right before `</head>`. Returns `false` when the shell
    /// has no head element.
    pub fn append_to_head(&mut self, content: &str) -> bool {
        let mut from = 0;
        while let Some(pos) = find_ascii_case_insensitive(&self.html, "</head", from) {
            match self.region_at(pos) {
                Some(region) => from = region.end,
                None => {
                    self.splice(pos..pos, content);
                    return true;
                }
            }
        }
        false
    }

    fn write_attribute(&mut self, tag_start: usize, name: &str, value: &str) -> Result<()> {
        let tag = parse_start_tag(&self.html, tag_start, self.limit_at(tag_start))?
            .ok_or_else(|| FolioError::Shell(format!("no start tag at offset {tag_start}")))?;
        let escaped = escape_html(value);

        let existing = parse_attrs(&self.html, tag.attrs.clone())
            .into_iter()
            .find(|a| self.html[a.name.clone()].eq_ignore_ascii_case(name));

        let (range, text) = match existing {
            Some(Attr {
                value: Some(range), ..
            }) => (range, escaped),
            Some(Attr { name: range, .. }) => (range.end..range.end, format!("=\"{escaped}\"")),
            None => {
                let attrs = &self.html[tag.attrs.clone()];
                let kept = attrs.trim_end_matches(|c: char| c == '/' || c.is_whitespace());
                let at = tag.attrs.start + kept.len();
                (at..at, format!(" {name}=\"{escaped}\""))
            }
        };
        self.splice(range, &text);
        Ok(())
    }

    /// Writes `content` over `range` and seals it, unless the range already
    /// sits inside a sealed region.
    fn fill(&mut self, range: Range<usize>, content: &str) {
        let nested = self
            .sealed
            .iter()
            .any(|r| *r != range && r.start <= range.start && range.end <= r.end);
        self.sealed
            .retain(|r| !(range.start <= r.start && r.end <= range.end));

        let start = range.start;
        self.splice(range, content);
        if !nested {
            self.sealed.push(start..start + content.len());
        }
    }

    /// Replaces `range` with `content` and moves sealed regions with the text.
    fn splice(&mut self, range: Range<usize>, content: &str) {
        let Range { start, end } = range;
        let new_end = start + content.len();
        self.html.replace_range(start..end, content);

        for region in &mut self.sealed {
            if region.end <= start {
                continue;
            }
            if region.start >= end {
                region.start = region.start - end + new_end;
                region.end = region.end - end + new_end;
            } else if start >= region.start && end <= region.end {
                region.end = region.end - end + new_end;
            } else {
                region.start = region.start.min(start);
                region.end = if region.end > end {
                    region.end - end + new_end
                } else {
                    new_end
                };
            }
        }
    }

    fn region_at(&self, pos: usize) -> Option<Range<usize>> {
        self.sealed.iter().find(|r| r.contains(&pos)).cloned()
    }

    /// How far a scan starting at `pos` may read.
    fn limit_at(&self, pos: usize) -> usize {
        self.region_at(pos).map_or(self.html.len(), |r| r.end)
    }

    fn collect(&self, window: Range<usize>, selector: &Selector) -> Result<Vec<Element>> {
        let html = self.html.as_str();
        let mut found = Vec::new();
        for tag in self.start_tags(window)? {
            if selector.matches(html, &tag) {
                found.push(self.element_for(&tag)?);
            }
        }
        Ok(found)
    }

    // ────────────────────────────────────────────────────────────────────────
    // Scanner
    // ────────────────────────────────────────────────────────────────────────

    /// Start tags within `window` in document order, skipping comments,
    /// doctype and the bodies of raw-text elements. A broken tag inside a
    /// sealed region ends the scan of that region only.
    fn start_tags(&self, window: Range<usize>) -> Result<Vec<StartTag>> {
        let html = self.html.as_str();
        let mut tags = Vec::new();
        let mut pos = window.start;

        while pos < window.end {
            let Some(offset) = html[pos..window.end].find('<') else {
                break;
            };
            let lt = pos + offset;
            let region = self.region_at(lt);
            let limit = region.as_ref().map_or(window.end, |r| r.end.min(window.end));
            let rest = &html[lt..limit];

            if rest.starts_with("<!--") {
                pos = rest[4..].find("-->").map_or(limit, |end| lt + 4 + end + 3);
                continue;
            }
            if rest.starts_with("</") || rest.starts_with("<!") || rest.starts_with("<?") {
                pos = rest.find('>').map_or(limit, |end| lt + end + 1);
                continue;
            }

            match parse_start_tag(html, lt, limit) {
                Ok(Some(tag)) => {
                    pos = tag.end;
                    let name = tag.name(html);
                    if is_raw_text(name) {
                        let close = format!("</{name}");
                        pos = find_ascii_case_insensitive(&html[..limit], &close, pos)
                            .unwrap_or(limit);
                    }
                    tags.push(tag);
                }
                Ok(None) => pos = lt + 1,
                Err(_) if region.is_some() => pos = limit,
                Err(e) => return Err(e),
            }
        }

        Ok(tags)
    }

    /// Resolves the inner range of `tag` by counting nested same-name tags.
    /// Sealed regions are stepped over whole when the tag itself lies outside
    /// them.
    fn element_for(&self, tag: &StartTag) -> Result<Element> {
        let html = self.html.as_str();
        if tag.is_void(html) {
            return Ok(Element {
                start_tag: tag.start..tag.end,
                inner: None,
            });
        }

        let own = self.region_at(tag.start);
        let limit = own.as_ref().map_or(html.len(), |r| r.end);
        let name = tag.name(html);
        let mut depth = 1usize;
        let mut pos = tag.end;

        while pos < limit {
            let Some(offset) = html[pos..limit].find('<') else {
                break;
            };
            let lt = pos + offset;

            if own.is_none() {
                if let Some(region) = self.region_at(lt) {
                    pos = region.end;
                    continue;
                }
            }

            let rest = &html[lt..limit];
            if rest.starts_with("<!--") {
                match rest[4..].find("-->") {
                    Some(end) => {
                        pos = lt + 4 + end + 3;
                        continue;
                    }
                    None => break,
                }
            }

            if let Some(after) = rest.strip_prefix("</") {
                let close_name_len = after
                    .bytes()
                    .take_while(|b| b.is_ascii_alphanumeric() || *b == b'-')
                    .count();
                if after[..close_name_len].eq_ignore_ascii_case(name) {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(Element {
                            start_tag: tag.start..tag.end,
                            inner: Some(tag.end..lt),
                        });
                    }
                }
                pos = lt + 2;
                continue;
            }

            match parse_start_tag(html, lt, limit)? {
                Some(inner_tag) => {
                    let inner_name = inner_tag.name(html);
                    if inner_name.eq_ignore_ascii_case(name) && !inner_tag.self_closing {
                        depth += 1;
                    }
                    pos = inner_tag.end;
                    if is_raw_text(inner_name) {
                        let close = format!("</{inner_name}");
                        pos = find_ascii_case_insensitive(&html[..limit], &close, pos)
                            .unwrap_or(limit);
                    }
                }
                None => pos = lt + 1,
            }
        }

        Err(FolioError::Shell(format!(
            "<{name}> at offset {} is never closed",
            tag.start
        )))
    }
}

/// Escapes text for use as element content or a quoted attribute value.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Parses the start tag beginning at `lt`, reading no further than `limit`.
/// `Ok(None)` when the `<` does not open a tag (e.g. a stray `<` in text).
fn parse_start_tag(html: &str, lt: usize, limit: usize) -> Result<Option<StartTag>> {
    let bytes = &html.as_bytes()[..limit];
    let name_start = lt + 1;
    let mut i = name_start;
    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-') {
        i += 1;
    }
    if i == name_start || !bytes[name_start].is_ascii_alphabetic() {
        return Ok(None);
    }
    let name = name_start..i;

    let mut quote: Option<u8> = None;
    let mut j = i;
    while j < bytes.len() {
        let b = bytes[j];
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => break,
            None => {}
        }
        j += 1;
    }
    if j >= bytes.len() {
        return Err(FolioError::Shell(format!(
            "unterminated <{}> tag at offset {lt}",
            &html[name]
        )));
    }

    let attrs = i..j;
    let self_closing = html[attrs.clone()].trim_end().ends_with('/');
    Ok(Some(StartTag {
        start: lt,
        name,
        attrs,
        end: j + 1,
        self_closing,
    }))
}

fn parse_attrs(html: &str, range: Range<usize>) -> Vec<Attr> {
    let bytes = html.as_bytes();
    let mut attrs = Vec::new();
    let mut i = range.start;
    let end = range.end;

    let is_name_byte = |b: u8| !b.is_ascii_whitespace() && b != b'=' && b != b'/' && b != b'>';

    while i < end {
        while i < end && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }
        let name_start = i;
        while i < end && is_name_byte(bytes[i]) {
            i += 1;
        }
        if i == name_start {
            break;
        }
        let name = name_start..i;

        while i < end && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= end || bytes[i] != b'=' {
            attrs.push(Attr { name, value: None });
            continue;
        }
        i += 1;
        while i < end && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        let value = if i < end && (bytes[i] == b'"' || bytes[i] == b'\'') {
            let q = bytes[i];
            let value_start = i + 1;
            let mut k = value_start;
            while k < end && bytes[k] != q {
                k += 1;
            }
            i = (k + 1).min(end);
            value_start..k
        } else {
            let value_start = i;
            while i < end && !bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            value_start..i
        };
        attrs.push(Attr {
            name,
            value: Some(value),
        });
    }

    attrs
}

fn is_raw_text(name: &str) -> bool {
    RAW_TEXT_ELEMENTS.iter().any(|r| r.eq_ignore_ascii_case(name))
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

fn find_ascii_case_insensitive(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || from >= hay.len() {
        return None;
    }
    hay[from..]
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))
        .map(|p| from + p)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHELL: &str = r#"<!DOCTYPE html>
<html>
<head><title>Portfolio</title></head>
<body>
  <!-- <div class="awards-list">commented out</div> -->
  <h1 class="title-name">Your Name</h1>
  <div class="awards-list">
    <div class="award-item"><div>nested</div></div>
  </div>
  <div class="hexagon" data-image="a.png"><img src="a.png" alt="photo"></div>
  <div class="hexagon"><img src="b.png" /></div>
  <span class="stat-number counter-animate" data-target="0">0</span>
  <button id="next-btn" class="pagination-btn" disabled>Next</button>
  <script>if (a < b) { document.querySelector('.awards-list'); }</script>
</body>
</html>"#;

    #[test]
    fn test_selector_parse() {
        assert_eq!(Selector::parse(".awards-list"), Selector::Class("awards-list"));
        assert_eq!(Selector::parse("#prev-btn"), Selector::Id("prev-btn"));
        assert_eq!(Selector::parse("img"), Selector::Tag("img"));
        assert_eq!(Selector::Class("tech-skills").to_string(), ".tech-skills");
    }

    #[test]
    fn test_comments_and_scripts_are_not_matched() {
        let doc = Document::parse(SHELL);
        assert_eq!(doc.count(&Selector::Class("awards-list")).unwrap(), 1);
    }

    #[test]
    fn test_nested_same_name_tags_are_balanced() {
        let doc = Document::parse(SHELL);
        let inner = doc
            .inner_html(&Selector::Class("awards-list"))
            .unwrap()
            .unwrap();
        assert_eq!(
            inner.trim(),
            r#"<div class="award-item"><div>nested</div></div>"#
        );
    }

    #[test]
    fn test_replace_inner_and_missing_container() {
        let mut doc = Document::parse(SHELL);
        assert!(doc
            .replace_inner(&Selector::Class("awards-list"), "<p>new</p>")
            .unwrap());
        assert_eq!(
            doc.inner_html(&Selector::Class("awards-list")).unwrap(),
            Some("<p>new</p>")
        );
        assert!(!doc
            .replace_inner(&Selector::Class("teaching-grid"), "<p>x</p>")
            .unwrap());
    }

    #[test]
    fn test_set_text_escapes() {
        let mut doc = Document::parse(SHELL);
        doc.set_text(&Selector::Class("title-name"), "Ada <Lovelace> & co")
            .unwrap();
        assert_eq!(
            doc.inner_html(&Selector::Class("title-name")).unwrap(),
            Some("Ada &lt;Lovelace&gt; &amp; co")
        );
    }

    #[test]
    fn test_set_attribute_replaces_adds_and_fills_bare() {
        let mut doc = Document::parse(SHELL);
        doc.set_attribute(&Selector::Class("stat-number"), 0, "data-target", "15")
            .unwrap();
        assert!(doc.as_str().contains(r#"data-target="15""#));

        doc.set_attribute(&Selector::Class("hexagon"), 1, "data-image", "zafar2.png")
            .unwrap();
        assert!(doc
            .as_str()
            .contains(r#"<div class="hexagon" data-image="zafar2.png">"#));

        doc.set_attribute(&Selector::Id("next-btn"), 0, "disabled", "disabled")
            .unwrap();
        assert!(doc.as_str().contains(r#"disabled="disabled">Next"#));
    }

    #[test]
    fn test_attribute_reads_value_bare_and_missing() {
        let doc = Document::parse(SHELL);
        assert_eq!(
            doc.attribute(&Selector::Class("hexagon"), 0, "data-image").unwrap(),
            Some("a.png".to_string())
        );
        assert_eq!(
            doc.attribute(&Selector::Id("next-btn"), 0, "disabled").unwrap(),
            Some(String::new())
        );
        assert_eq!(doc.attribute(&Selector::Class("hexagon"), 1, "data-image").unwrap(), None);
        assert_eq!(doc.attribute(&Selector::Class("hexagon"), 5, "class").unwrap(), None);
    }

    #[test]
    fn test_set_attribute_on_missing_nth_is_false() {
        let mut doc = Document::parse(SHELL);
        assert!(!doc
            .set_attribute(&Selector::Class("stat-number"), 2, "data-target", "7")
            .unwrap());
    }

    #[test]
    fn test_set_attribute_in_targets_child_of_nth_parent() {
        let mut doc = Document::parse(SHELL);
        assert!(doc
            .set_attribute_in(
                &Selector::Class("hexagon"),
                1,
                &Selector::Tag("img"),
                "src",
                "zafar2.png"
            )
            .unwrap());
        assert!(doc.as_str().contains(r#"<img src="zafar2.png" />"#));
        assert!(doc.as_str().contains(r#"<img src="a.png" alt="photo">"#));
    }

    #[test]
    fn test_void_element_has_no_inner() {
        let doc = Document::parse(SHELL);
        let img = doc.find_first(&Selector::Tag("img")).unwrap().unwrap();
        assert!(img.inner.is_none());
    }

    #[test]
    fn test_append_to_head() {
        let mut doc = Document::parse(SHELL);
        assert!(doc.append_to_head("<style>:root{}</style>"));
        assert!(doc.as_str().contains("<style>:root{}</style></head>"));

        let mut headless = Document::parse("<div></div>");
        assert!(!headless.append_to_head("<style></style>"));
    }

    #[test]
    fn test_unclosed_container_is_shell_error() {
        let doc = Document::parse(r#"<div class="teaching-grid"><p>never closed</p>"#);
        let err = doc
            .find_all(&Selector::Class("teaching-grid"))
            .unwrap_err();
        assert!(matches!(err, FolioError::Shell(_)));
    }

    #[test]
    fn test_open_comment_in_content_stays_inside_its_container() {
        let mut doc = Document::parse(SHELL);
        doc.replace_inner(&Selector::Class("awards-list"), "<h4>Best <!-- draft</h4>")
            .unwrap();

        assert_eq!(doc.count(&Selector::Class("hexagon")).unwrap(), 2);
        assert!(doc
            .set_attribute(&Selector::Id("next-btn"), 0, "data-page", "2")
            .unwrap());
        assert_eq!(
            doc.inner_html(&Selector::Class("awards-list")).unwrap(),
            Some("<h4>Best <!-- draft</h4>")
        );
    }

    #[test]
    fn test_unbalanced_quote_in_content_stays_inside_its_container() {
        let mut doc = Document::parse(SHELL);
        doc.replace_inner(
            &Selector::Class("awards-list"),
            r#"<div class="award-item"><i class="note>Best</i></div>"#,
        )
        .unwrap();

        assert_eq!(doc.count(&Selector::Class("stat-number")).unwrap(), 1);
        assert!(doc
            .set_attribute_in(&Selector::Class("hexagon"), 0, &Selector::Tag("img"), "src", "c.png")
            .unwrap());
        assert!(doc.append_to_head("<style></style>"));
        assert!(doc.as_str().contains("<style></style></head>"));
    }

    #[test]
    fn test_fill_containers_locates_everything_first() {
        let shell = r#"<div class="a"></div><div class="b"><p>old</p></div><div class="c"></div>"#;
        let mut doc = Document::parse(shell);
        let outcomes = doc.fill_containers(&[
            (Selector::Class("a"), r#"<span class="x>broken"#),
            (Selector::Class("b"), "<p>new</p>"),
            (Selector::Class("missing"), "<p>lost</p>"),
            (Selector::Class("c"), "<!-- open"),
        ]);

        assert!(matches!(outcomes[0], Ok(true)));
        assert!(matches!(outcomes[1], Ok(true)));
        assert!(matches!(outcomes[2], Ok(false)));
        assert!(matches!(outcomes[3], Ok(true)));
        assert_eq!(
            doc.as_str(),
            r#"<div class="a"><span class="x>broken</div><div class="b"><p>new</p></div><div class="c"><!-- open</div>"#
        );
        assert_eq!(doc.inner_html(&Selector::Class("b")).unwrap(), Some("<p>new</p>"));
    }

    #[test]
    fn test_fill_containers_rejects_nested_targets() {
        let mut doc = Document::parse(SHELL);
        let outcomes = doc.fill_containers(&[
            (Selector::Class("awards-list"), "<p>outer</p>"),
            (Selector::Class("award-item"), "<p>inner</p>"),
        ]);
        assert!(matches!(outcomes[0], Ok(true)));
        assert!(matches!(outcomes[1], Err(FolioError::Shell(_))));
        assert!(!doc.as_str().contains("<p>inner</p>"));
    }

    #[test]
    fn test_find_all_within_is_scoped() {
        let mut doc = Document::parse(SHELL);
        let divs = doc
            .find_all_within(&Selector::Class("awards-list"), &Selector::Tag("div"))
            .unwrap();
        assert_eq!(divs.len(), 2);
        assert!(doc
            .find_all_within(&Selector::Class("teaching-grid"), &Selector::Tag("div"))
            .unwrap()
            .is_empty());

        // Edits from last to first keep earlier offsets valid.
        for div in divs.iter().rev() {
            doc.set_attribute_on(div, "data-seen", "1").unwrap();
        }
        assert_eq!(doc.as_str().matches(r#"data-seen="1""#).count(), 2);
        assert_eq!(
            doc.attribute_of(&divs[0], "class").unwrap(),
            Some("award-item".to_string())
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"a & "b" <c> 'd'"#),
            "a &amp; &quot;b&quot; &lt;c&gt; &#39;d&#39;"
        );
    }
}
