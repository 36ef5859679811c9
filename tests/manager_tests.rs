//! Tests for the multi-bar manager and its update records.

use pbar::manager::{ManagerBuilder, Update};
use pbar::render::{erase_lines, Style};
use pbar::Error;
use std::sync::Arc;
use std::thread;

mod common;
use common::helpers::*;

#[test]
fn test_default_configuration() {
    let manager = ManagerBuilder::new().writer(std::io::sink()).build();
    assert_eq!(manager.config().width, 50);
    assert_eq!(manager.config().style, Style::Classic);
    assert!(manager.is_empty().unwrap());

    let block = ManagerBuilder::new()
        .style(Style::Block)
        .writer(std::io::sink())
        .build();
    block.apply_update(Update::new("a", 1, 2)).unwrap();
    assert_eq!(block.with_bar("a", |bar| bar.style).unwrap(), Some(Style::Block));
}

#[test]
fn test_new_bar_takes_configuration() {
    let (manager, _) = create_test_manager(12);
    manager.apply_update(Update::new("job", 1, 4)).unwrap();
    let (width, managed, started) = manager
        .with_bar("job", |bar| (bar.width, bar.managed, bar.start_time.is_some()))
        .unwrap()
        .unwrap();
    assert_eq!(width, 12);
    assert!(managed);
    assert!(started);
    assert_eq!(manager.with_bar("other", |bar| bar.width).unwrap(), None);
}

#[test]
fn test_render_all_draws_sorted_block() {
    let (manager, buffer) = create_test_manager(10);
    manager.apply_update(create_quiet_update("b", 5, 10)).unwrap();
    manager.apply_update(create_quiet_update("a", 1, 10)).unwrap();

    let out = manager.render_all().unwrap();
    assert_eq!(out, "\r[#---------] 10%\x1b[K\n\r[#####-----] 50%\x1b[K");
    assert_eq!(buffer.contents(), out);
    assert_eq!(manager.ids().unwrap(), vec!["a", "b"]);
    assert_eq!(manager.last_line_count().unwrap(), 2);
}

#[test]
fn test_repaint_erases_previous_block() {
    let (manager, buffer) = create_test_manager(10);
    manager.apply_update(create_quiet_update("a", 1, 10)).unwrap();
    manager.apply_update(create_quiet_update("b", 5, 10)).unwrap();
    let first = manager.render_all().unwrap();

    let second = manager.render_all().unwrap();
    assert!(second.starts_with("\r\x1b[K\x1b[A\r\x1b[K\r"));
    assert_eq!(second, format!("{}{}", erase_lines(2), first));
    assert_eq!(buffer.contents(), format!("{first}{second}"));
}

#[test]
fn test_repeated_updates_do_not_duplicate_lines() {
    let (manager, _) = create_test_manager(10);
    for current in 0..=5 {
        manager.apply_update(create_quiet_update("same", current, 5)).unwrap();
        let out = manager.render_all().unwrap();
        let drawn = out.trim_start_matches(&erase_lines(manager.last_line_count().unwrap()));
        assert_eq!(drawn.lines().count(), 1);
    }
    assert_eq!(manager.len().unwrap(), 1);
    assert_eq!(manager.last_line_count().unwrap(), 1);
}

#[test]
fn test_new_id_adds_exactly_one_line() {
    let (manager, _) = create_test_manager(10);
    manager.apply_update(create_quiet_update("c", 1, 10)).unwrap();
    manager.apply_update(create_quiet_update("a", 1, 10)).unwrap();
    manager.render_all().unwrap();
    assert_eq!(manager.last_line_count().unwrap(), 2);

    manager.apply_update(create_quiet_update("b", 9, 10)).unwrap();
    let out = manager.render_all().unwrap();
    assert!(out.starts_with(&erase_lines(2)));
    assert_eq!(manager.last_line_count().unwrap(), 3);
    assert_eq!(manager.ids().unwrap(), vec!["a", "b", "c"]);

    let lines: Vec<&str> = out[erase_lines(2).len()..].split('\n').collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("90%"));
}

#[test]
fn test_sparse_merge_keeps_untouched_fields() {
    let (manager, _) = create_test_manager(10);
    manager
        .apply_update(Update {
            width: 20,
            style: "arrow".to_string(),
            message: "copying".to_string(),
            custom_chars: "#=".to_string(),
            ..Update::new("a", 5, 10)
        })
        .unwrap();

    manager
        .apply_update(Update {
            id: "a".to_string(),
            current: Some(7),
            ..Update::default()
        })
        .unwrap();

    manager
        .with_bar("a", |bar| {
            assert_eq!(bar.current, 7);
            assert_eq!(bar.total, 10);
            assert_eq!(bar.width, 20);
            assert_eq!(bar.style, Style::Arrow);
            assert_eq!(bar.message, "copying");
            assert_eq!(bar.custom_chars, "#=");
            assert!(bar.show_eta);
        })
        .unwrap();
}

#[test]
fn test_zero_values_do_not_overwrite() {
    let (manager, _) = create_test_manager(10);
    manager
        .apply_update(Update {
            width: 30,
            ..Update::new("a", 5, 10)
        })
        .unwrap();
    manager
        .apply_update(Update::parse(r#"{"id":"a","width":0,"style":"","colorbar":""}"#).unwrap())
        .unwrap();
    assert_eq!(manager.with_bar("a", |bar| bar.width).unwrap(), Some(30));
}

#[test]
fn test_finished_flag_is_sticky() {
    let (manager, _) = create_test_manager(10);
    manager
        .apply_update(Update::parse(r#"{"id":"a","current":3,"total":10,"finished":true}"#).unwrap())
        .unwrap();
    manager
        .apply_update(Update::parse(r#"{"id":"a","current":4,"finished":false}"#).unwrap())
        .unwrap();
    assert_eq!(manager.with_bar("a", |bar| bar.finished).unwrap(), Some(true));

    let out = manager.render_all().unwrap();
    assert!(out.starts_with("\r[✔] 100%"));
}

#[test]
fn test_complete_bar_is_not_finished_automatically() {
    let (manager, _) = create_test_manager(10);
    manager.apply_update(create_quiet_update("a", 10, 10)).unwrap();
    let out = manager.render_all().unwrap();
    assert_eq!(out, "\r[##########] 100%\x1b[K");
    assert_eq!(manager.with_bar("a", |bar| bar.finished).unwrap(), Some(false));
}

#[test]
fn test_unknown_style_falls_back_to_classic() {
    let (manager, _) = create_test_manager(10);
    manager
        .apply_update(Update {
            style: "neon".to_string(),
            ..create_quiet_update("a", 5, 10)
        })
        .unwrap();
    assert_eq!(manager.with_bar("a", |bar| bar.style).unwrap(), Some(Style::Classic));
}

#[test]
fn test_color_names_are_resolved() {
    let (manager, _) = create_test_manager(10);
    manager
        .apply_update(Update {
            color_bar: "green".to_string(),
            color_text: "mauve".to_string(),
            ..create_quiet_update("a", 5, 10)
        })
        .unwrap();
    let (bar_color, text_color) = manager
        .with_bar("a", |bar| (bar.color_bar.clone(), bar.color_text.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(bar_color, "\x1b[32m");
    assert_eq!(text_color, "");

    let out = manager.render_all().unwrap();
    assert_eq!(out, "\r\x1b[32m[#####-----]\x1b[0m 50%\x1b[K");
}

#[test]
fn test_empty_id_is_rejected() {
    let (manager, buffer) = create_test_manager(10);
    let result = manager.apply_update(Update::new("", 1, 2));
    assert!(matches!(result, Err(Error::InvalidRecord(_))));
    assert!(manager.is_empty().unwrap());
    assert_eq!(buffer.contents(), "");
}

#[test]
fn test_clear_erases_block() {
    let (manager, buffer) = create_test_manager(10);
    manager.apply_update(create_quiet_update("a", 1, 2)).unwrap();
    manager.apply_update(create_quiet_update("b", 1, 2)).unwrap();
    let drawn = manager.render_all().unwrap();

    manager.clear().unwrap();
    assert_eq!(buffer.contents(), format!("{drawn}{}", erase_lines(2)));
    assert_eq!(manager.last_line_count().unwrap(), 0);

    // Nothing left to erase, and the bars are still tracked.
    let next = manager.render_all().unwrap();
    assert!(next.starts_with('\r') && !next.starts_with("\r\x1b[K"));
    assert_eq!(manager.len().unwrap(), 2);
}

#[test]
fn test_concurrent_updates_and_renders() {
    let (manager, buffer) = create_test_manager(10);
    let manager = Arc::new(manager);

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let manager = Arc::clone(&manager);
            thread::spawn(move || {
                let id = format!("worker-{worker}");
                for current in 0..=20 {
                    manager
                        .apply_update(create_quiet_update(&id, current, 20))
                        .unwrap();
                    manager.render_all().unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(manager.len().unwrap(), 8);
    assert_eq!(manager.last_line_count().unwrap(), 8);

    let last = manager.render_all().unwrap();
    let block = &last[erase_lines(8).len()..];
    assert_eq!(block.lines().count(), 8);
    assert!(block.lines().all(|line| line == "\r[##########] 100%\x1b[K"));
    assert!(buffer.contents().ends_with(block));
}

#[test]
fn test_update_parse_field_names() {
    let update = Update::parse(
        r#"{"id":"x","current":2,"total":8,"width":12,"style":"custom","colorbar":"red",
            "colortext":"blue","chars":"=.","message":"hi","finished":true,
            "showelapsed":false,"showthroughput":true,"showeta":false}"#,
    )
    .unwrap();
    assert_eq!(update.id, "x");
    assert_eq!(update.current, Some(2));
    assert_eq!(update.total, Some(8));
    assert_eq!(update.width, 12);
    assert_eq!(update.style, "custom");
    assert_eq!(update.color_bar, "red");
    assert_eq!(update.color_text, "blue");
    assert_eq!(update.custom_chars, "=.");
    assert_eq!(update.message, "hi");
    assert!(update.finished);
    assert_eq!(update.show_elapsed, Some(false));
    assert_eq!(update.show_throughput, Some(true));
    assert_eq!(update.show_eta, Some(false));
}

#[test]
fn test_update_parse_errors() {
    assert!(matches!(Update::parse("{broken"), Err(Error::Json { .. })));
    assert!(matches!(
        Update::parse(r#"{"current":1}"#),
        Err(Error::InvalidRecord(_))
    ));
    assert!(Update::parse(r#"{"id":"a","current":"lots"}"#).is_err());
}

#[test]
fn test_visibility_defaults_only_fill_gaps() {
    let update = Update::parse(r#"{"id":"a","showeta":true}"#)
        .unwrap()
        .with_visibility_defaults(false, false, false);
    assert_eq!(update.show_elapsed, Some(false));
    assert_eq!(update.show_throughput, Some(false));
    assert_eq!(update.show_eta, Some(true));
}

#[test]
fn test_extreme_record_values_keep_manager_usable() {
    let (manager, _) = create_test_manager(10);
    manager
        .apply_update(
            Update::parse(r#"{"id":"a","current":1,"total":2,"style":"braille","width":4611686018427387904}"#)
                .unwrap(),
        )
        .unwrap();
    manager.render_all().unwrap();

    manager.apply_update(Update::new("b", 5, 10)).unwrap();
    manager.render_all().unwrap();
    manager.apply_update(Update::new("b", -2, i64::MAX)).unwrap();
    manager.render_all().unwrap();

    assert_eq!(manager.len().unwrap(), 2);
    assert_eq!(manager.last_line_count().unwrap(), 2);
}

#[test]
fn test_finished_record_shows_its_message() {
    let (manager, _) = create_test_manager(10);
    manager.apply_update(create_quiet_update("a", 3, 10)).unwrap();
    manager
        .apply_update(Update::parse(r#"{"id":"a","finished":true,"message":"done"}"#).unwrap())
        .unwrap();
    assert_eq!(manager.render_all().unwrap(), "\r[✔] 100% done\x1b[K");
}
