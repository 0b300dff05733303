// File: crates/visualize-core/tests/axis_layout.rs
// Purpose: X/Y axis layout geometry with a fixed-width text measure (no fonts involved).

use approx::assert_relative_eq;
use visualize_core::axis::{Align, Edge};
use visualize_core::{layout_x_axis, layout_y_axis, AxisOptions, FixedMeasure, Label, LineTier};

const MEASURE: FixedMeasure = FixedMeasure::new(6.0, 10.0);

#[test]
fn text_labels_are_centered_in_equal_bands() {
    let labels = Label::from_texts(&["Jan", "Feb", "Mar"]);
    let layout = layout_x_axis(&labels, &AxisOptions::default(), 300.0, 100.0, &MEASURE);

    assert!(layout.centered);
    assert_relative_eq!(layout.band, 100.0);
    let lefts: Vec<f32> = layout.labels.iter().map(|l| l.left).collect();
    assert_eq!(lefts, vec![0.0, 100.0, 200.0]);
    assert!(layout.labels.iter().all(|l| l.width == 100.0 && l.align == Align::Center));
    assert!(layout.lines.is_empty(), "centered labels draw no gridlines by default");
}

#[test]
fn numeric_labels_sit_on_ticks() {
    let labels = Label::from_numbers(&[0.0, 50.0, 100.0]);
    let layout = layout_x_axis(&labels, &AxisOptions::default(), 200.0, 80.0, &MEASURE);

    assert!(!layout.centered);
    assert_relative_eq!(layout.band, 100.0);
    assert_relative_eq!(layout.labels[0].margin_left, 0.0);
    // "50" is two chars of 6px: shifted left by half its width
    assert_relative_eq!(layout.labels[1].margin_left, -6.0);
    assert_relative_eq!(layout.labels[2].margin_left, -9.0);
    assert_relative_eq!(layout.labels[2].text_x(), 191.0);

    let xs: Vec<f32> = layout.lines.iter().map(|l| l.x1).collect();
    assert_eq!(xs, vec![100.0, 200.0, 300.0]);
    assert!(layout.lines.iter().all(|l| l.y1 == 0.0 && l.y2 == 80.0 && l.tier == LineTier::Day));
}

#[test]
fn y_offsets_grow_from_the_bottom() {
    let labels = Label::from_numbers(&[0.0, 10.0, 20.0]);
    let layout = layout_y_axis(&labels, &AxisOptions::default(), 300.0, 200.0, &MEASURE);

    assert_relative_eq!(layout.band, 100.0);
    let ys: Vec<f32> = layout.labels.iter().map(|l| l.y(200.0)).collect();
    assert_eq!(ys, vec![200.0, 100.0, 0.0]);
    assert!(layout.labels.iter().all(|l| l.edge == Edge::Bottom && l.margin_top == -5.0));
    assert_relative_eq!(layout.labels[1].text_top(200.0), 95.0);
    assert_eq!(layout.lines.len(), 3);
    assert_relative_eq!(layout.lines[0].y1, 100.0);
    assert_relative_eq!(layout.lines[0].x2, 300.0);
}

#[test]
fn from_top_inverts_the_y_axis() {
    let labels = Label::from_numbers(&[0.0, 10.0, 20.0]);
    let opts = AxisOptions::default().top_down(true);
    let layout = layout_y_axis(&labels, &opts, 300.0, 200.0, &MEASURE);

    let ys: Vec<f32> = layout.labels.iter().map(|l| l.y(200.0)).collect();
    assert_eq!(ys, vec![0.0, 100.0, 200.0]);
    assert!(layout.labels.iter().all(|l| l.edge == Edge::Top));
}

#[test]
fn centered_y_labels_sit_mid_band() {
    let labels = Label::from_texts(&["a", "b", "c", "d"]);
    let layout = layout_y_axis(&labels, &AxisOptions::default(), 100.0, 200.0, &MEASURE);

    assert!(layout.centered);
    assert_relative_eq!(layout.band, 50.0);
    for (label, want) in layout.labels.iter().zip([25.0, 75.0, 125.0, 175.0]) {
        assert_relative_eq!(label.offset, want);
    }
    assert!(layout.lines.is_empty());
}

#[test]
fn explicit_flags_override_derivation() {
    let labels = Label::from_texts(&["x", "y"]);
    let opts = AxisOptions::default().centered(true).lines(true);
    let layout = layout_x_axis(&labels, &opts, 100.0, 10.0, &MEASURE);
    assert_eq!(layout.lines.len(), 2);

    let opts = AxisOptions::default().lines(false);
    let layout = layout_x_axis(&Label::from_numbers(&[1.0, 2.0]), &opts, 100.0, 10.0, &MEASURE);
    assert!(layout.lines.is_empty());
}

#[test]
fn empty_label_list_lays_out_nothing() {
    let layout = layout_x_axis(&[], &AxisOptions::default(), 100.0, 10.0, &MEASURE);
    assert!(layout.labels.is_empty());
    assert!(layout.lines.is_empty());
}
