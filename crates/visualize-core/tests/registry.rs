// File: crates/visualize-core/tests/registry.rs
// Purpose: Chart type resolution: direct registration, lazy family loaders, load failures.

use std::cell::Cell;
use std::rc::Rc;

use visualize_core::plugin::family_of;
use visualize_core::{ChartRegistry, ChartRenderer, DrawContext, VisualizeError};

struct Noop;

impl ChartRenderer for Noop {
    fn render(&self, _ctx: &mut DrawContext<'_>) -> visualize_core::Result<()> {
        Ok(())
    }
}

fn reason(err: VisualizeError) -> String {
    match err {
        VisualizeError::ExtensionLoad { reason, .. } => reason,
        other => panic!("expected extension load error, got {other}"),
    }
}

#[test]
fn family_is_prefix_before_separator() {
    assert_eq!(family_of("bar"), "bar");
    assert_eq!(family_of("bar-stacked"), "bar");
    assert_eq!(family_of("line_area"), "line");
}

#[test]
fn registered_type_resolves() {
    let mut reg = ChartRegistry::new();
    reg.register("bar", Noop);
    assert!(reg.contains("bar"));
    assert!(reg.resolve("bar").is_ok());
    assert_eq!(reg.types(), vec!["bar"]);
}

#[test]
fn loader_runs_once_for_its_family() {
    let runs = Rc::new(Cell::new(0));
    let counter = Rc::clone(&runs);
    let mut reg = ChartRegistry::new();
    reg.register_loader("line", move |reg: &mut ChartRegistry| {
        counter.set(counter.get() + 1);
        reg.register("line", Noop);
        reg.register("line-area", Noop);
    });

    assert!(!reg.contains("line-area"));
    assert!(reg.resolve("line-area").is_ok());
    assert!(reg.resolve("line").is_ok());
    assert_eq!(runs.get(), 1);
    assert_eq!(reg.types(), vec!["line", "line-area"]);

    // family already loaded, unknown variant fails without rerunning
    let err = reg.resolve("line-bogus").err().expect("unknown variant");
    assert!(reason(err).contains("no loader"));
    assert_eq!(runs.get(), 1);
}

#[test]
fn unknown_type_is_a_load_error() {
    let mut reg = ChartRegistry::new();
    match reg.resolve("radar") {
        Err(VisualizeError::ExtensionLoad { type_key, .. }) => assert_eq!(type_key, "radar"),
        Err(other) => panic!("unexpected error {other}"),
        Ok(_) => panic!("radar should not resolve"),
    }
}

#[test]
fn loader_that_skips_the_type_is_reported() {
    let mut reg = ChartRegistry::new();
    reg.register_loader("pie", |reg: &mut ChartRegistry| reg.register("pie", Noop));
    let err = reg.resolve("pie-3d").err().expect("pie-3d not registered");
    assert!(reason(err).contains("did not register"));
    assert!(reg.contains("pie"));
}
