use betterdeck_inject::TitleState;
use pretty_assertions::assert_eq;

fn titles() -> TitleState {
    TitleState::new("TweetDeck")
}

#[test]
fn message_count_shows_on_the_default_title() {
    let next = titles().next_title("TweetDeck", None, Some(3), true);
    assert_eq!(next, Some("[3] TweetDeck".to_string()));
}

#[test]
fn unread_marker_shows_without_a_count() {
    let next = titles().next_title("TweetDeck", Some(false), None, true);
    assert_eq!(next, Some("[*] TweetDeck".to_string()));
}

#[test]
fn decorated_title_resets_when_nothing_is_unread() {
    let next = titles().next_title("[*] TweetDeck", None, None, false);
    assert_eq!(next, Some("TweetDeck".to_string()));

    let next = titles().next_title("[7] TweetDeck", Some(true), None, false);
    assert_eq!(next, Some("TweetDeck".to_string()));
}

#[test]
fn decorated_title_stays_while_unread_remains() {
    assert_eq!(titles().next_title("[*] TweetDeck", None, None, true), None);
}

#[test]
fn fresh_count_wins_but_resets_if_nothing_visible() {
    // A count arrives while no unread markers are visible: the count
    // title is immediately reset to the default, so nothing changes.
    assert_eq!(titles().next_title("TweetDeck", None, Some(2), false), None);
}

#[test]
fn default_title_stays_default_when_read() {
    assert_eq!(titles().next_title("TweetDeck", Some(true), None, false), None);
    assert_eq!(titles().next_title("TweetDeck", None, Some(0), true), None);
}
