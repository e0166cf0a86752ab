//! Text segmentation and wrapping
//!
//! Splits the direct text children of an element into locale-aware segments
//! (graphemes, words or sentences) and wraps every non-whitespace segment in a
//! clone of a template element so it can be styled individually. Whitespace is
//! kept as plain text nodes.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast as _;
use web_sys::{Element, Node};

use crate::error::Result;

/// Unit of text produced by the segmenter
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Grapheme,
    Word,
    Sentence,
}

impl Granularity {
    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Grapheme => "grapheme",
            Granularity::Word => "word",
            Granularity::Sentence => "sentence",
        }
    }
}

/// Segmentation options
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SegmentOptions {
    /// BCP 47 locales handed to the segmenter; empty means the host default
    pub locales: Vec<String>,

    pub granularity: Granularity,

    /// Locale negotiation algorithm; the host default (`"best fit"`) when unset
    pub locale_matcher: Option<LocaleMatcher>,

    /// Merge adjacent segments not separated by whitespace (e.g. a word and its
    /// trailing punctuation). Locales that do not use whitespace between words
    /// collapse to a single segment with this set.
    pub combine_segments: bool,
}

/// `localeMatcher` values accepted by `Intl.Segmenter`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocaleMatcher {
    #[serde(rename = "lookup")]
    Lookup,
    #[serde(rename = "best fit")]
    BestFit,
}

impl LocaleMatcher {
    pub fn as_str(self) -> &'static str {
        match self {
            LocaleMatcher::Lookup => "lookup",
            LocaleMatcher::BestFit => "best fit",
        }
    }
}

/// Locale-aware tokenizer
pub trait Segmenter {
    /// Split `text` into ordered segments
    fn segment(&self, text: &str) -> Vec<String>;
}

mod sys {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = Intl)]
        pub type Segmenter;

        #[wasm_bindgen(constructor, js_namespace = Intl, catch)]
        pub fn new(locales: &js_sys::Array, options: &js_sys::Object) -> Result<Segmenter, JsValue>;

        #[wasm_bindgen(method)]
        pub fn segment(this: &Segmenter, input: &str) -> JsValue;
    }
}

/// [`Segmenter`] backed by the host's `Intl.Segmenter`
pub struct IntlSegmenter {
    inner: sys::Segmenter,
}

impl std::fmt::Debug for IntlSegmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntlSegmenter").finish_non_exhaustive()
    }
}

impl IntlSegmenter {
    /// Whether the host provides `Intl.Segmenter`
    pub fn is_supported() -> bool {
        let global = js_sys::global();
        js_sys::Reflect::get(&global, &JsValue::from_str("Intl"))
            .ok()
            .filter(|intl| intl.is_object())
            .and_then(|intl| js_sys::Reflect::get(&intl, &JsValue::from_str("Segmenter")).ok())
            .is_some_and(|segmenter| segmenter.is_function())
    }

    /// Build a segmenter, or `None` when the host has no `Intl.Segmenter`
    pub fn new(options: &SegmentOptions) -> Result<Option<Self>> {
        if !Self::is_supported() {
            log::warn!("Intl.Segmenter unavailable, skipping segmentation");
            return Ok(None);
        }

        let locales: js_sys::Array = options
            .locales
            .iter()
            .map(|locale| JsValue::from_str(locale))
            .collect();
        let init = js_sys::Object::new();
        js_sys::Reflect::set(
            &init,
            &JsValue::from_str("granularity"),
            &JsValue::from_str(options.granularity.as_str()),
        )?;
        if let Some(matcher) = options.locale_matcher {
            js_sys::Reflect::set(
                &init,
                &JsValue::from_str("localeMatcher"),
                &JsValue::from_str(matcher.as_str()),
            )?;
        }

        let inner = sys::Segmenter::new(&locales, &init)?;
        Ok(Some(Self { inner }))
    }
}

impl Segmenter for IntlSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let segments = self.inner.segment(text);
        let iter = match js_sys::try_iter(&segments) {
            Ok(Some(iter)) => iter,
            _ => return vec![text.to_string()],
        };

        iter.filter_map(|item| item.ok())
            .filter_map(|item| js_sys::Reflect::get(&item, &JsValue::from_str("segment")).ok())
            .filter_map(|segment| segment.as_string())
            .collect()
    }
}

/// One node of split output
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Piece {
    /// Whitespace kept as a plain text node
    Whitespace(String),
    /// Text to be wrapped in a template clone
    Segment(String),
}

impl Piece {
    pub fn text(&self) -> &str {
        match self {
            Piece::Whitespace(text) | Piece::Segment(text) => text,
        }
    }
}

/// Whitespace as JS `\s` defines it: Unicode `White_Space` plus U+FEFF, minus U+0085
fn is_js_whitespace(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{85}' => false,
        c => c.is_whitespace(),
    }
}

fn is_whitespace(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_js_whitespace)
}

fn leading_whitespace(text: &str) -> &str {
    &text[..text.len() - text.trim_start_matches(is_js_whitespace).len()]
}

fn trailing_whitespace(text: &str) -> &str {
    &text[text.trim_end_matches(is_js_whitespace).len()..]
}

/// Classify segmenter output for `text` into whitespace and wrappable pieces.
///
/// Whitespace the segmenter dropped from either end of `text` is restored, and
/// adjacent whitespace is merged, so concatenating the pieces reproduces `text`
/// for any segmenter that does not lose inner content.
pub fn split_pieces<I>(text: &str, segments: I, combine_segments: bool) -> Vec<Piece>
where
    I: IntoIterator<Item = String>,
{
    let segments: Vec<String> = segments.into_iter().filter(|s| !s.is_empty()).collect();
    let mut pieces: Vec<Piece> = Vec::with_capacity(segments.len());

    let mut i = 0;
    while i < segments.len() {
        let segment = &segments[i];
        if is_whitespace(segment) {
            push_whitespace(&mut pieces, segment);
            i += 1;
            continue;
        }

        let mut wrapped = segment.clone();
        i += 1;
        if combine_segments {
            while let Some(next) = segments.get(i).filter(|next| !is_whitespace(next)) {
                wrapped.push_str(next);
                i += 1;
            }
        }
        pieces.push(Piece::Segment(wrapped));
    }

    // Restore only the part of each edge the segmenter did not yield
    let prefix = leading_whitespace(text);
    let suffix = trailing_whitespace(text);
    let mut covered: String = pieces.iter().map(Piece::text).collect();

    let lead = leading_whitespace(&covered);
    if prefix.len() > lead.len() && prefix.ends_with(lead) {
        let missing = &prefix[..prefix.len() - lead.len()];
        match pieces.first_mut() {
            Some(Piece::Whitespace(existing)) => existing.insert_str(0, missing),
            _ => pieces.insert(0, Piece::Whitespace(missing.to_string())),
        }
        covered.insert_str(0, missing);
    }

    let trail = trailing_whitespace(&covered);
    if suffix.len() > trail.len() && suffix.starts_with(trail) {
        push_whitespace(&mut pieces, &suffix[trail.len()..]);
    }

    pieces
}

fn push_whitespace(pieces: &mut Vec<Piece>, text: &str) {
    match pieces.last_mut() {
        Some(Piece::Whitespace(existing)) => existing.push_str(text),
        _ => pieces.push(Piece::Whitespace(text.to_string())),
    }
}

/// Wrap segments of `element`'s direct text children using the host segmenter.
///
/// Returns `None` when `Intl.Segmenter` is unavailable; the element is left
/// untouched in that case.
pub fn wrap_segments(
    element: &Element,
    template: &Element,
    options: &SegmentOptions,
) -> Result<Option<Vec<Element>>> {
    let Some(segmenter) = IntlSegmenter::new(options)? else {
        return Ok(None);
    };
    wrap_segments_with(element, template, &segmenter, options.combine_segments).map(Some)
}

/// Wrap segments of `element`'s direct text children with an explicit segmenter.
///
/// Non-text children stay in place. Returns the created wrappers in document order.
pub fn wrap_segments_with(
    element: &Element,
    template: &Element,
    segmenter: &dyn Segmenter,
    combine_segments: bool,
) -> Result<Vec<Element>> {
    let document = element
        .owner_document()
        .ok_or(crate::error::EffectsError::NoDocument)?;

    // childNodes is live, take a snapshot before inserting
    let child_nodes = element.child_nodes();
    let nodes: Vec<Node> = (0..child_nodes.length())
        .filter_map(|i| child_nodes.item(i))
        .collect();

    let mut wrappers = Vec::new();
    for node in nodes {
        if node.node_type() != Node::TEXT_NODE {
            continue;
        }

        let text = node.text_content().unwrap_or_default();
        for piece in split_pieces(&text, segmenter.segment(&text), combine_segments) {
            let new_node: Node = match piece {
                Piece::Whitespace(whitespace) => document.create_text_node(&whitespace).into(),
                Piece::Segment(segment) => {
                    let wrapper: Element = template.clone_node_with_deep(true)?.unchecked_into();
                    wrapper.set_text_content(Some(&segment));
                    wrappers.push(wrapper.clone());
                    wrapper.into()
                }
            };
            element.insert_before(&new_node, Some(&node))?;
        }
        element.remove_child(&node)?;
    }

    log::debug!("wrapped {} segments", wrappers.len());
    Ok(wrappers)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Segmenter;

    /// Word-boundary segmenter close to `Intl.Segmenter` with `granularity: "word"`:
    /// runs of alphanumerics, runs of whitespace, and single punctuation marks.
    pub(crate) struct WordBoundaries;

    impl Segmenter for WordBoundaries {
        fn segment(&self, text: &str) -> Vec<String> {
            #[derive(PartialEq)]
            enum Class {
                Word,
                Space,
                Other,
            }
            let class = |c: char| {
                if c.is_alphanumeric() {
                    Class::Word
                } else if c.is_whitespace() {
                    Class::Space
                } else {
                    Class::Other
                }
            };

            let mut segments: Vec<String> = Vec::new();
            let mut previous: Option<Class> = None;
            for c in text.chars() {
                let current = class(c);
                let extend = matches!(&previous, Some(p) if *p == current && current != Class::Other);
                match segments.last_mut() {
                    Some(last) if extend => last.push(c),
                    _ => segments.push(c.to_string()),
                }
                previous = Some(current);
            }
            segments
        }
    }

    /// Segmenter that trims its input like some legacy tokenizers do
    pub(crate) struct Trimming;

    impl Segmenter for Trimming {
        fn segment(&self, text: &str) -> Vec<String> {
            text.split_whitespace().map(str::to_string).collect()
        }
    }
}
