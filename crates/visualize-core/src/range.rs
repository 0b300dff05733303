// File: crates/visualize-core/src/range.rs
// Summary: Evenly spaced tick labels for a numeric range.

/// Tick count used when the caller has no better estimate.
pub const DEFAULT_TICKS: usize = 5;

// Guards `ceil` against binary representation error (0.3 * 100 = 30.000000000000004).
const ROUND_EPSILON: f64 = 1e-9;

/// Labels from `first` to `last` inclusive, `ticks` entries in total.
///
/// When `ticks` is at least the span of the range, it is clamped to
/// `span + 1` so an integer range never gets more ticks than integers.
/// The endpoints are emitted verbatim; interior values are rounded for
/// display (see [`round_label`]).
pub fn range_labels(first: f64, last: f64, ticks: usize) -> Vec<f64> {
    let domain = last - first;
    let requested = ticks as f64;
    let ticks = if requested >= domain { domain + 1.0 } else { requested };
    let slices = ticks - 1.0;

    let mut labels = vec![first];
    let mut i = 1usize;
    while (i as f64) < slices {
        let value = first + domain / slices * i as f64;
        labels.push(round_label(value));
        i += 1;
    }
    labels.push(last);
    labels
}

/// Display rounding for interior tick values.
///
/// Below 10 in magnitude a fractional value keeps at most two decimals,
/// rounded up in magnitude; integral values and anything from 10 upward are
/// truncated to an integer. The rule is symmetric: `round_label(-x) == -round_label(x)`.
pub fn round_label(value: f64) -> f64 {
    let magnitude = value.abs();
    let rounded = if magnitude < 10.0 && magnitude.fract() != 0.0 {
        ((magnitude * 100.0) - ROUND_EPSILON).ceil() / 100.0
    } else {
        magnitude.trunc()
    };
    if value < 0.0 { -rounded } else { rounded }
}
