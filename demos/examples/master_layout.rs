// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Master layout.
//!
//! Save settings through the configuration protocol, then normalize, border, and pack a
//! scattered set of photos onto page frames.
//!
//! Run:
//! - `cargo run -p matboard_demos --example master_layout`

use futures::executor::block_on;
use kurbo::Rect;
use matboard_layout::adapters::scene::SceneDocument;
use matboard_layout::batch::CancelToken;
use matboard_layout::command::{Command, CommandOutcome, run_command};
use matboard_layout::flow::LogNotifier;
use matboard_layout::message::ConfigOutcome;
use matboard_layout::settings::JsonFileStore;
use matboard_scene::{LocalNode, NodeKind, Scene};

fn main() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("matboard.json"));

    let mut scene = Scene::new();
    let page = scene.insert(None, LocalNode::page("Page 1"));
    let photos: Vec<_> = (0..9)
        .map(|i| {
            let x = f64::from(i) * 150.0;
            let (w, h) = if i % 3 == 0 { (120.0, 90.0) } else { (80.0, 110.0) };
            scene.insert(
                Some(page),
                LocalNode::rectangle(Rect::new(x, 0.0, x + w, h)),
            )
        })
        .collect();
    let cancel = CancelToken::new();

    // Configure: the form opens with defaults and saves a wider gap.
    let outcome = block_on(run_command(
        Command::from_id("configure"),
        &mut SceneDocument::new(&mut scene, page),
        &photos,
        &store,
        &cancel,
        &mut LogNotifier,
    ));
    let CommandOutcome::Configure { mut session, load } = outcome else {
        unreachable!("unknown ids open the settings form");
    };
    println!("form: {load:?}");
    let saved = session
        .handle_json(
            &mut store,
            r#"{"type":"save","settings":{"gap":16,"strokeWidth":2,"strokeAlign":"INSIDE"}}"#,
        )
        .unwrap();
    assert!(matches!(saved, ConfigOutcome::Saved(_)));

    // Master: picks the saved settings up from the store.
    let mut notes: Vec<String> = Vec::new();
    let outcome = block_on(run_command(
        Command::from_id("master"),
        &mut SceneDocument::new(&mut scene, page),
        &photos,
        &store,
        &cancel,
        &mut notes,
    ));
    println!("{outcome:?}");
    println!("{}", notes.join("\n"));

    for &frame in scene.children_of(page) {
        if scene.kind(frame) != Some(NodeKind::Frame) {
            continue;
        }
        println!(
            "{} at {:?} holds {} group(s)",
            scene.local(frame).map_or("?", |l| l.name.as_str()),
            scene.absolute_bounds(frame),
            scene.children_of(frame).len()
        );
    }
}
