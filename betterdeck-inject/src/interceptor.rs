//! Wrapping host capabilities without the host's cooperation.
//!
//! The host exposes rendering and filtering under known contracts; the
//! companion wants to add behavior before or after them. Instead of
//! rewriting host prototypes, capabilities run through an explicit
//! interceptor list: each layer receives the input and a `next` it may
//! call once, not at all (short-circuit), or with a rewritten input.

use regex::Regex;
use tracing::warn;

/// One layer wrapped around a host capability.
pub trait Interceptor<I, O = I> {
    fn around(&self, input: I, next: &mut dyn FnMut(I) -> O) -> O;
}

/// An ordered interceptor list around a base capability. The first layer
/// pushed runs outermost.
pub struct InterceptorStack<I, O = I> {
    layers: Vec<Box<dyn Interceptor<I, O>>>,
}

impl<I, O> Default for InterceptorStack<I, O> {
    fn default() -> Self {
        Self { layers: Vec::new() }
    }
}

impl<I, O> InterceptorStack<I, O> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, layer: Box<dyn Interceptor<I, O>>) {
        self.layers.push(layer);
    }

    /// Number of registered layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True when no layers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Runs the capability with every layer applied around `base`.
    pub fn run(&self, input: I, base: &mut dyn FnMut(I) -> O) -> O {
        fn drive<I, O>(
            layers: &[Box<dyn Interceptor<I, O>>],
            input: I,
            base: &mut dyn FnMut(I) -> O,
        ) -> O {
            match layers.split_first() {
                None => base(input),
                Some((head, rest)) => {
                    head.around(input, &mut |value| drive(rest, value, &mut *base))
                }
            }
        }
        drive(&self.layers, input, base)
    }
}

/// Rewrites rendered anchor markup so the `href` carries the full URL
/// from the anchor's `data-full-url` attribute instead of the shortened
/// form.
pub struct FullUrlAnchors {
    full_url: Regex,
    href: Regex,
}

impl FullUrlAnchors {
    #[must_use]
    pub fn new() -> Self {
        Self {
            full_url: Regex::new(r#"data-full-url="([^"]+)""#).expect("valid literal pattern"),
            href: Regex::new(r#"href="[^"]*""#).expect("valid literal pattern"),
        }
    }
}

impl Default for FullUrlAnchors {
    fn default() -> Self {
        Self::new()
    }
}

impl Interceptor<String> for FullUrlAnchors {
    fn around(&self, input: String, next: &mut dyn FnMut(String) -> String) -> String {
        let rendered = next(input);
        let Some(caps) = self.full_url.captures(&rendered) else {
            return rendered;
        };
        let replacement = format!(r#"href="{}""#, &caps[1]);
        // NoExpand: URLs may contain `$`, which is not a capture reference.
        self.href
            .replace(&rendered, regex::NoExpand(replacement.as_str()))
            .into_owned()
    }
}

/// Replaces the host's substring phrase-filter test with a regex match.
///
/// An invalid pattern falls through to the host's own test instead of
/// filtering everything or nothing.
pub struct RegexPhraseFilter {
    pattern: String,
    positive: bool,
    regex: Option<Regex>,
}

impl RegexPhraseFilter {
    #[must_use]
    pub fn new(pattern: impl Into<String>, positive: bool) -> Self {
        let pattern = pattern.into();
        let regex = match Regex::new(&pattern) {
            Ok(re) => Some(re),
            Err(err) => {
                warn!(%pattern, %err, "invalid filter pattern, keeping host test");
                None
            }
        };
        Self {
            pattern,
            positive,
            regex,
        }
    }
}

impl Interceptor<String, bool> for RegexPhraseFilter {
    fn around(&self, text: String, next: &mut dyn FnMut(String) -> bool) -> bool {
        if text.is_empty() || self.pattern.is_empty() {
            return true;
        }
        match &self.regex {
            Some(re) => {
                if re.is_match(&text) {
                    self.positive
                } else {
                    !self.positive
                }
            }
            None => next(text),
        }
    }
}
