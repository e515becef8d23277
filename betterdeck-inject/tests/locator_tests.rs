mod common;

use betterdeck_inject::host::ColumnSource;
use betterdeck_inject::Locator;
use betterdeck_types::{Column, DetailView};
use common::{chirp, chirp_with_user, FakeHost};
use std::rc::Rc;

fn locator_with(column: Rc<Column>) -> Locator {
    let host = Rc::new(FakeHost::default());
    host.add_column(column);
    Locator::new(host as Rc<dyn ColumnSource>)
}

// ── Direct index hits ─────────────────────────────────────────────

#[test]
fn finds_directly_indexed_chirp() {
    let col = Rc::new(Column::new("col-1"));
    let c = chirp("42");
    col.index("u1", Rc::clone(&c));

    let locator = locator_with(col);
    let found = locator.locate(&"42".into(), &"col-1".into()).unwrap();
    assert!(Rc::ptr_eq(&found, &c));
}

#[test]
fn update_key_is_not_the_chirp_id() {
    let col = Rc::new(Column::new("col-1"));
    col.index("slot-abc", chirp("42"));

    let locator = locator_with(col);
    // Slot keys address index entries, not chirps.
    assert!(locator.locate(&"slot-abc".into(), &"col-1".into()).is_none());
    assert!(locator.locate(&"42".into(), &"col-1".into()).is_some());
}

// ── One-level nesting ─────────────────────────────────────────────

#[test]
fn finds_repost_target_nested_in_index() {
    // updateIndex = {"u1": {id:"42", retweetedStatus: {id:"7"}}}
    let col = Rc::new(Column::new("col-1"));
    let nested = chirp_with_user("7", "x");
    let outer = chirp("42");
    outer.retweeted_status.borrow_mut().replace(Rc::clone(&nested));
    col.index("u1", outer);

    let locator = locator_with(col);
    let found = locator.locate(&"7".into(), &"col-1".into()).unwrap();
    assert!(Rc::ptr_eq(&found, &nested));
}

#[test]
fn finds_quoted_thread_member_and_action_target() {
    let col = Rc::new(Column::new("col-1"));

    let quoted = chirp("q");
    let holder1 = chirp("h1");
    holder1.quoted_tweet.borrow_mut().replace(Rc::clone(&quoted));
    col.index("u1", holder1);

    let member = chirp("m");
    let thread = chirp("t");
    thread.messages.borrow_mut().push(Rc::clone(&member));
    col.index("u2", thread);

    let target = chirp("at");
    let action = chirp("a");
    action.target_tweet.borrow_mut().replace(Rc::clone(&target));
    col.index("u3", action);

    let locator = locator_with(col);
    assert!(Rc::ptr_eq(
        &locator.locate(&"q".into(), &"col-1".into()).unwrap(),
        &quoted
    ));
    assert!(Rc::ptr_eq(
        &locator.locate(&"m".into(), &"col-1".into()).unwrap(),
        &member
    ));
    assert!(Rc::ptr_eq(
        &locator.locate(&"at".into(), &"col-1".into()).unwrap(),
        &target
    ));
}

// ── Detail view ───────────────────────────────────────────────────

#[test]
fn finds_detail_view_chirps_and_replies() {
    let col = Rc::new(Column::new("col-1"));
    let focused = chirp("f");
    let main = chirp("main");
    let before = chirp("b");
    let after = chirp("a");
    col.detail_view.borrow_mut().replace(DetailView {
        chirp: Some(Rc::clone(&focused)),
        main_chirp: Some(Rc::clone(&main)),
        replies_before: vec![Rc::clone(&before)],
        replies_after: vec![Rc::clone(&after)],
    });

    let locator = locator_with(col);
    for (key, expected) in [("f", &focused), ("main", &main), ("b", &before), ("a", &after)] {
        let found = locator.locate(&key.into(), &"col-1".into()).unwrap();
        assert!(Rc::ptr_eq(&found, expected), "key {key}");
    }
}

// ── Misses ────────────────────────────────────────────────────────

#[test]
fn missing_chirp_returns_none() {
    let col = Rc::new(Column::new("col-1"));
    col.index("u1", chirp("42"));

    let locator = locator_with(col);
    assert!(locator.locate(&"99".into(), &"col-1".into()).is_none());
}

#[test]
fn missing_column_returns_none() {
    let locator = locator_with(Rc::new(Column::new("col-1")));
    assert!(locator.locate(&"42".into(), &"col-9".into()).is_none());
}

#[test]
fn leading_zero_keys_do_not_match() {
    // Forced string coercion means "007" never matches id "7".
    let col = Rc::new(Column::new("col-1"));
    col.index("u1", chirp("7"));

    let locator = locator_with(col);
    assert!(locator.locate(&"007".into(), &"col-1".into()).is_none());
    assert!(locator.locate(&"7".into(), &"col-1".into()).is_some());
}

#[test]
fn two_levels_deep_is_not_discovered() {
    // Nesting is searched one level deep only.
    let col = Rc::new(Column::new("col-1"));
    let deep = chirp("deep");
    let mid = chirp("mid");
    mid.quoted_tweet.borrow_mut().replace(Rc::clone(&deep));
    let top = chirp("top");
    top.retweeted_status.borrow_mut().replace(mid);
    col.index("u1", top);

    let locator = locator_with(col);
    assert!(locator.locate(&"mid".into(), &"col-1".into()).is_some());
    assert!(locator.locate(&"deep".into(), &"col-1".into()).is_none());
}
