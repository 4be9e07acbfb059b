mod common;

use login_manager::prelude::*;

fn ctrl_shift(key: Key) -> KeyChord {
    KeyChord {
        key,
        ctrl: true,
        meta: false,
        shift: true,
    }
}

#[tokio::test]
async fn test_escape_clears_fields_and_refocuses_username() {
    let h = common::harness(LoginConfig::user_login(), false);
    h.manager.init().await;
    h.fill("alice", "correct-horse");

    let disposition = h.manager.handle_key(&KeyChord::plain(Key::Escape)).await;

    assert_eq!(disposition, EventDisposition::Continue);
    assert_eq!(h.page.field_value(Field::Username).await.as_deref(), Some(""));
    assert_eq!(h.page.field_value(Field::Password).await.as_deref(), Some(""));
    assert_eq!(h.page.focused(), Some(Field::Username));
}

#[tokio::test]
async fn test_escape_leaves_theme_untouched() {
    let h = common::harness(LoginConfig::user_login(), true);
    h.manager.init().await;
    assert!(h.page.is_dark());

    h.manager.handle_key(&KeyChord::plain(Key::Escape)).await;

    assert!(h.page.is_dark());
    assert_eq!(h.store.raw("theme").as_deref(), Some("dark"));
}

#[tokio::test]
async fn test_ctrl_shift_t_toggles_and_consumes_the_event() {
    let h = common::harness(LoginConfig::user_login(), false);
    h.manager.init().await;
    assert!(!h.page.is_dark());

    let disposition = h
        .manager
        .handle_key(&ctrl_shift(Key::Character('T')))
        .await;

    assert_eq!(disposition, EventDisposition::PreventDefault);
    assert!(h.page.is_dark());
    assert_eq!(h.store.raw("theme").as_deref(), Some("dark"));
}

#[tokio::test]
async fn test_meta_shift_t_works_too() {
    let h = common::harness(LoginConfig::user_login(), false);
    h.manager.init().await;

    let chord = KeyChord {
        key: Key::Character('T'),
        ctrl: false,
        meta: true,
        shift: true,
    };
    let disposition = h.manager.handle_key(&chord).await;

    assert_eq!(disposition, EventDisposition::PreventDefault);
    assert!(h.page.is_dark());
}

#[tokio::test]
async fn test_unrelated_keys_pass_through() {
    let h = common::harness(LoginConfig::user_login(), false);
    h.manager.init().await;
    h.fill("alice", "correct-horse");

    for chord in [
        KeyChord::plain(Key::Character('t')),
        KeyChord::plain(Key::Enter),
        ctrl_shift(Key::Character('S')),
        // Shift alone is not a toggle modifier.
        KeyChord {
            key: Key::Character('T'),
            ctrl: false,
            meta: false,
            shift: true,
        },
    ] {
        let disposition = h.manager.handle_key(&chord).await;
        assert_eq!(disposition, EventDisposition::Continue);
    }

    // Nothing observable changed.
    assert!(!h.page.is_dark());
    assert_eq!(
        h.page.field_value(Field::Username).await.as_deref(),
        Some("alice")
    );
}

#[tokio::test]
async fn test_shortcut_dispatched_through_worker() {
    let h = common::harness(LoginConfig::user_login(), false);
    h.manager.init().await;

    let (tx, worker) = h.spawn_worker();
    tx.send(UiEvent::KeyPressed(ctrl_shift(Key::Character('T'))))
        .await
        .unwrap();
    tx.send(UiEvent::KeyPressed(KeyChord::plain(Key::Escape)))
        .await
        .unwrap();
    drop(tx);
    worker.await.unwrap();

    assert!(h.page.is_dark());
    assert_eq!(h.page.focused(), Some(Field::Username));
}
