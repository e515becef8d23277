use betterdeck_inject::{chirp_url, original_text, silence_range, unescape_html};
use betterdeck_types::{
    Account, Chirp, ChirpType, IndexRange, MediaEntity, MediaType, MentionEntity, UrlEntity,
};
use pretty_assertions::assert_eq;
use std::rc::Rc;

// ── silence_range ─────────────────────────────────────────────────

#[test]
fn silence_range_pads_without_shifting_indices() {
    let silenced = silence_range("hello world", IndexRange::new(6, 11));
    assert_eq!(silenced, "hello \u{7}\u{7}\u{7}\u{7}\u{7}");
    assert_eq!(silenced.chars().count(), 11);
}

#[test]
fn silence_range_clamps_out_of_bounds() {
    assert_eq!(silence_range("abc", IndexRange::new(2, 99)), "ab\u{7}");
    assert_eq!(silence_range("abc", IndexRange::new(99, 120)), "abc");
}

#[test]
fn silence_range_counts_characters_not_bytes() {
    let silenced = silence_range("héllo", IndexRange::new(0, 2));
    assert_eq!(silenced, "\u{7}\u{7}llo");
}

// ── unescape_html ─────────────────────────────────────────────────

#[test]
fn unescape_handles_the_host_entities() {
    assert_eq!(
        unescape_html("a &lt;b&gt; &quot;c&quot; &#39;d&#39; &amp; e"),
        "a <b> \"c\" 'd' & e"
    );
}

#[test]
fn unescape_double_escaped_ampersand_stays_escaped_once() {
    assert_eq!(unescape_html("&amp;lt;"), "&lt;");
}

// ── chirp_url ─────────────────────────────────────────────────────

#[test]
fn chirp_url_needs_an_author() {
    let mut chirp = Chirp::new("42", ChirpType::Tweet);
    assert_eq!(chirp_url(&chirp), None);

    chirp.user = Some(Rc::new(Account::new("jane", "Jane")));
    assert_eq!(
        chirp_url(&chirp).unwrap(),
        "https://twitter.com/jane/status/42"
    );
}

// ── original_text ─────────────────────────────────────────────────

#[test]
fn strips_media_link_and_implicit_mentions() {
    // "@a hey https://t.co/xyz" with an implicit leading mention and a
    // trailing media link.
    let mut chirp = Chirp::new("1", ChirpType::Tweet);
    chirp.text = Some("@a hey https://t.co/xyz".to_string());
    chirp.entities.user_mentions.push(MentionEntity {
        screen_name: "a".to_string(),
        is_implicit: true,
        indices: Some(IndexRange::new(0, 2)),
    });
    chirp.entities.media.push(MediaEntity {
        media_type: MediaType::Photo,
        media_url_https: "https://img.example/a.jpg".to_string(),
        video_variants: vec![],
        sizes: None,
        indices: Some(IndexRange::new(7, 23)),
    });

    assert_eq!(original_text(&chirp), "hey");
}

#[test]
fn explicit_mentions_are_kept() {
    let mut chirp = Chirp::new("1", ChirpType::Tweet);
    chirp.text = Some("shoutout to @b".to_string());
    chirp.entities.user_mentions.push(MentionEntity {
        screen_name: "b".to_string(),
        is_implicit: false,
        indices: Some(IndexRange::new(12, 14)),
    });

    assert_eq!(original_text(&chirp), "shoutout to @b");
}

#[test]
fn quote_url_is_removed_and_other_urls_expand() {
    let quoted = {
        let mut q = Chirp::new("9", ChirpType::Tweet);
        q.user = Some(Rc::new(Account::new("jane", "Jane")));
        Rc::new(q)
    };

    let mut chirp = Chirp::new("1", ChirpType::Tweet);
    chirp.text = Some("look https://t.co/quote and https://t.co/art".to_string());
    chirp.quoted_tweet.borrow_mut().replace(Rc::clone(&quoted));
    chirp.entities.urls.push(UrlEntity {
        url: "https://t.co/quote".to_string(),
        expanded_url: "https://twitter.com/jane/status/9".to_string(),
        indices: Some(IndexRange::new(5, 23)),
    });
    chirp.entities.urls.push(UrlEntity {
        url: "https://t.co/art".to_string(),
        expanded_url: "https://example.com/article".to_string(),
        indices: Some(IndexRange::new(28, 44)),
    });

    // Silencing leaves the spaces that surrounded the quote URL.
    assert_eq!(original_text(&chirp), "look  and https://example.com/article");
}

#[test]
fn unescapes_and_trims_the_result() {
    let mut chirp = Chirp::new("1", ChirpType::Tweet);
    chirp.text = Some("  fish &amp; chips  ".to_string());
    assert_eq!(original_text(&chirp), "fish & chips");
}

#[test]
fn empty_text_reconstructs_to_empty() {
    let chirp = Chirp::new("1", ChirpType::Tweet);
    assert_eq!(original_text(&chirp), "");
}
