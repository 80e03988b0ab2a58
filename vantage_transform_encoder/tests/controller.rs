// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end input handling against an affine sink.

use kurbo::{Affine, Point, Size, Vec2};
use ui_events::ScrollDelta;
use ui_events::keyboard::{Key, KeyState, NamedKey};
use ui_events::pointer::PointerType;
use vantage_transform_encoder::{HitTarget, ViewController};
use vantage_view2d::{ContentBounds, ViewportConfig};

fn image_view() -> ViewController<Affine> {
    let mut view = ViewController::new(&ViewportConfig::image(), Affine::IDENTITY);
    view.resize(Size::new(800.0, 600.0));
    view.set_content(ContentBounds::new(1_600.0, 1_200.0));
    view
}

#[test]
fn arrows_and_reset() {
    let mut view = image_view();
    assert!(view.key(&Key::Named(NamedKey::ArrowLeft), KeyState::Down));
    assert!(view.key(&Key::Named(NamedKey::ArrowUp), KeyState::Down));
    assert_eq!(view.viewport().translate(), Vec2::new(50.0, 50.0));

    assert!(view.key(&Key::Character("0".into()), KeyState::Down));
    assert_eq!(*view.sink(), Affine::IDENTITY);
}

#[test]
fn wheel_zooms_toward_pointer() {
    let mut view = image_view();
    view.wheel(&ScrollDelta::LineDelta(0.0, -1.0), Point::new(600.0, 300.0));
    assert!((view.viewport().scale() - 1.2).abs() < 1e-12);
    assert!((view.viewport().translate().x + 20.0).abs() < 1e-12);
    assert_eq!(view.viewport().translate().y, 0.0);
}

#[test]
fn press_on_node_leaves_view_alone() {
    let mut view = image_view();
    assert!(!view.pointer_down(Point::ZERO, HitTarget::Interactive, PointerType::Mouse));
    assert!(!view.pointer_move(Point::new(200.0, 0.0), PointerType::Mouse));
    assert_eq!(view.pointer_up(), None);
    assert!(view.click());
    assert_eq!(view.viewport().translate(), Vec2::ZERO);
}

#[test]
fn scale_stays_within_limits_under_repeated_input() {
    let mut view = image_view();
    for _ in 0..50 {
        view.wheel(&ScrollDelta::LineDelta(0.0, -1.0), Point::new(400.0, 300.0));
    }
    assert_eq!(view.viewport().scale(), 5.0);
    for _ in 0..50 {
        view.key(&Key::Character("-".into()), KeyState::Down);
    }
    assert_eq!(view.viewport().scale(), 0.5);
}
