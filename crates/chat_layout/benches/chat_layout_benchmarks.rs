use std::sync::Arc;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use chat_layout::{Alignment, Layout, WidthTable, last_colors, strip_codes};

const SAMPLE_LINE: &str = "§6The quick brown §lfox§r jumps over the lazy dog.";
const SAMPLE_PARAGRAPH: &str =
    "§7Lorem ipsum §bdolor sit amet§7, consectetur adipiscing elit. Sed do eiusmod tempor incididunt.";

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("chat_layout/measure");
    let layout = Layout::default();

    group.bench_function("measure/short", |b| {
        b.iter(|| black_box(layout.measure(black_box(SAMPLE_LINE))));
    });

    let long = SAMPLE_PARAGRAPH.repeat(40);
    group.throughput(Throughput::Bytes(long.len() as u64));
    group.bench_function("measure/long", |b| {
        b.iter(|| black_box(layout.measure(long.as_str())));
    });

    let table = Arc::new(WidthTable::new());
    for (i, ch) in ('\u{2600}'..'\u{2680}').enumerate() {
        table.register(ch, 5 + (i % 4) as u16, 6 + (i % 4) as u16);
    }
    let custom = Layout::new(table);
    let symbols: String = ('\u{2600}'..'\u{2680}').collect();
    group.bench_function("measure/custom_glyphs", |b| {
        b.iter(|| black_box(custom.measure(symbols.as_str())));
    });

    group.finish();
}

fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("chat_layout/wrap");
    let layout = Layout::default();

    group.bench_function("wrap/fits", |b| {
        b.iter(|| black_box(layout.wrap(SAMPLE_LINE)));
    });

    let long = SAMPLE_PARAGRAPH.repeat(20);
    group.throughput(Throughput::Bytes(long.len() as u64));
    group.bench_function("wrap/long", |b| {
        b.iter(|| black_box(layout.wrap(long.as_str())));
    });

    group.bench_function("wrap/long_indented", |b| {
        b.iter(|| black_box(layout.wrap_indented(long.as_str(), 4)));
    });

    group.finish();
}

fn bench_align(c: &mut Criterion) {
    let mut group = c.benchmark_group("chat_layout/align");
    let layout = Layout::default();

    group.bench_function("align/center", |b| {
        b.iter(|| black_box(layout.align_center(SAMPLE_LINE)));
    });

    group.bench_function("align/right", |b| {
        b.iter(|| black_box(layout.align_right(SAMPLE_LINE)));
    });

    let long = SAMPLE_PARAGRAPH.repeat(5);
    group.bench_function("align_lines/center", |b| {
        b.iter(|| black_box(layout.align_lines(long.as_str(), Alignment::Center)));
    });

    group.finish();
}

fn bench_codes(c: &mut Criterion) {
    let mut group = c.benchmark_group("chat_layout/codes");
    let long = SAMPLE_PARAGRAPH.repeat(10);

    group.bench_function("last_colors", |b| {
        b.iter(|| black_box(last_colors(long.as_str())));
    });

    group.bench_function("strip_codes", |b| {
        b.iter(|| black_box(strip_codes(long.as_str())));
    });

    group.finish();
}

criterion_group!(
    chat_layout_benches,
    bench_measure,
    bench_wrap,
    bench_align,
    bench_codes
);
criterion_main!(chat_layout_benches);
