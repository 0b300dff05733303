// File: crates/visualize-core/src/grid.rs
// Summary: Evenly spaced positions across a span (category anchors for point-based charts).

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps == 0 { return Vec::new(); }
    if steps == 1 { return vec![start]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::linspace;

    #[test]
    fn includes_both_ends() {
        assert_eq!(linspace(0.0, 300.0, 4), vec![0.0, 100.0, 200.0, 300.0]);
        assert_eq!(linspace(5.0, 9.0, 1), vec![5.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}
