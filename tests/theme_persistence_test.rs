//! Theme preference survives a restart
//!
//! Uses a real SQLite file so that reopening the store behaves like a new
//! session.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::mpsc;

use newstui::logic::theme::{initial_theme, THEME_KEY};
use newstui::model::{Model, Theme};
use newstui::store::PreferenceStore;
use newstui::App;

fn temp_db_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!(
        "newstui-{}-{}-{}.db",
        name,
        std::process::id(),
        nanos
    ))
}

fn app_with_store(store: PreferenceStore, theme: Theme) -> App {
    let (request_tx, _request_rx) = mpsc::unbounded_channel();
    let (_result_tx, result_rx) = mpsc::unbounded_channel();
    App::new(Model::new(theme, false), store, request_tx, result_rx, "true".to_string())
}

#[test]
fn test_toggle_survives_reload() {
    let path = temp_db_path("toggle");

    {
        let store = PreferenceStore::open(&path).expect("open store");
        let stored = store.get(THEME_KEY).unwrap();
        assert_eq!(stored, None, "fresh store has no preference");

        let theme = initial_theme(stored.as_deref(), true);
        assert_eq!(theme, Theme::Dark);

        let mut app = app_with_store(store, theme);
        app.toggle_theme();
        assert_eq!(app.model.ui.theme, Theme::Light);
    }

    // Simulated reload: a new store on the same file
    let store = PreferenceStore::open(&path).expect("reopen store");
    let stored = store.get(THEME_KEY).unwrap();
    assert_eq!(stored.as_deref(), Some("light"));
    assert_eq!(initial_theme(stored.as_deref(), true), Theme::Light);

    drop(store);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_every_toggle_is_persisted() {
    let store = PreferenceStore::new_in_memory().unwrap();
    let mut app = app_with_store(store, Theme::Light);

    app.toggle_theme();
    assert_eq!(app.store().get(THEME_KEY).unwrap().as_deref(), Some("dark"));

    app.toggle_theme();
    assert_eq!(app.store().get(THEME_KEY).unwrap().as_deref(), Some("light"));
    assert_eq!(app.model.ui.theme, Theme::Light);
}

#[test]
fn test_set_theme_is_idempotent() {
    let store = PreferenceStore::new_in_memory().unwrap();
    let mut app = app_with_store(store, Theme::Dark);

    app.set_theme(Theme::Dark);
    app.set_theme(Theme::Dark);

    assert_eq!(app.model.ui.theme, Theme::Dark);
    assert_eq!(app.store().get(THEME_KEY).unwrap().as_deref(), Some("dark"));
}
