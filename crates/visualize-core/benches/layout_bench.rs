use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use visualize_core::stats::parse_float;
use visualize_core::{
    layout_date_range, layout_x_axis, range_labels, scrape, AxisOptions, ChronoCalendar, ColFilter, FixedMeasure,
    Label, RowFilter, Table,
};

const MEASURE: FixedMeasure = FixedMeasure::new(6.0, 12.0);

fn gen_table(rows: usize, cols: usize) -> Table {
    let mut grid = Vec::with_capacity(rows + 1);
    let mut header = vec![String::new()];
    header.extend((0..cols).map(|j| format!("c{j}")));
    grid.push(header);
    for i in 0..rows {
        let mut row = vec![format!("r{i}")];
        // simple waveform, stringified like table cells
        row.extend((0..cols).map(|j| format!("{:.2}", ((i * cols + j) as f64 * 0.01).sin() * 10.0)));
        grid.push(row);
    }
    Table::from_grid(&grid)
}

fn bench_scrape(c: &mut Criterion) {
    let mut group = c.benchmark_group("scrape");
    for &(rows, cols) in &[(20usize, 12usize), (500, 50)] {
        let table = gen_table(rows, cols);
        group.bench_with_input(BenchmarkId::from_parameter(format!("r{rows}_c{cols}")), &table, |b, t| {
            b.iter(|| black_box(scrape(t, &RowFilter::All, &ColFilter::All, &parse_float)));
        });
    }
    group.finish();
}

fn bench_axes(c: &mut Criterion) {
    let mut group = c.benchmark_group("axes");
    group.bench_function("range_labels_t12", |b| b.iter(|| black_box(range_labels(-37.0, 1234.5, 12))));

    let labels = Label::from_numbers(&range_labels(0.0, 1000.0, 40));
    group.bench_function("x_ticks_40", |b| {
        b.iter(|| black_box(layout_x_axis(&labels, &AxisOptions::default(), 1280.0, 480.0, &MEASURE)));
    });

    let months: Vec<String> = visualize_core::calendar::MONTH_ABBREVIATIONS.iter().map(|s| s.to_string()).collect();
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default();
    let end = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap_or_default();
    group.bench_function("date_range_year", |b| {
        b.iter(|| black_box(layout_date_range(&ChronoCalendar, start, end, &months, 1280.0, 480.0, &MEASURE)));
    });
    group.finish();
}

criterion_group!(benches, bench_scrape, bench_axes);
criterion_main!(benches);
