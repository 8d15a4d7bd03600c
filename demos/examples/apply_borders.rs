// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Apply borders.
//!
//! Place a few photos (one inside a rotated frame), border them, and print the result.
//!
//! Run:
//! - `cargo run -p matboard_demos --example apply_borders`

use futures::executor::block_on;
use kurbo::{Affine, Rect, Size, Vec2};
use matboard_layout::adapters::scene::SceneDocument;
use matboard_layout::batch::CancelToken;
use matboard_layout::flow::apply_borders;
use matboard_layout::settings::Settings;
use matboard_scene::{LocalNode, Scene};

fn main() {
    let mut scene = Scene::new();
    let page = scene.insert(None, LocalNode::page("Page 1"));
    let a = scene.insert(
        Some(page),
        LocalNode::rectangle(Rect::new(10.0, 10.0, 110.0, 60.0)),
    );
    let b = scene.insert(
        Some(page),
        LocalNode::rectangle(Rect::new(200.0, 40.0, 260.0, 140.0)),
    );

    // A photo inside a rotated frame.
    let frame = scene.insert(Some(page), LocalNode::frame(Size::new(300.0, 300.0)));
    scene.set_local_transform(
        frame,
        Affine::translate(Vec2::new(400.0, 100.0)) * Affine::rotate(0.25),
    );
    let c = scene.insert(
        Some(frame),
        LocalNode::rectangle(Rect::new(20.0, 20.0, 120.0, 100.0)),
    );

    let settings = Settings {
        gap: 12.0,
        ..Settings::default()
    };
    let mut notes: Vec<String> = Vec::new();
    let report = block_on(apply_borders(
        &mut SceneDocument::new(&mut scene, page),
        &[a, b, c],
        &settings,
        &CancelToken::new(),
        &mut notes,
    ));
    println!("{}", notes.join("\n"));
    assert_eq!(report.succeeded, 3);

    for photo in [a, b, c] {
        let Some(group) = scene.parent_of(photo) else {
            continue;
        };
        let border = scene.children_of(group)[0];
        println!(
            "photo {:?}: bounds {:?}, border {:?}",
            photo,
            scene.absolute_bounds(photo),
            scene.absolute_bounds(border)
        );
    }
}
