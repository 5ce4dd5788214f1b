//! Benchmarks for MMSeg segmentation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mmseg::{Dictionary, FrequencyTable, MmSeg};

const WORDS: &[&str] = &[
    "研究",
    "研究生",
    "生命",
    "命运",
    "起源",
    "中国",
    "人民",
    "共和国",
    "中华人民共和国",
    "我们",
    "今天",
    "学习",
    "科学",
    "技术",
    "发展",
    "经济",
    "社会",
    "历史",
    "文化",
];

fn sample_text(chars: usize) -> Vec<char> {
    let sentences = [
        "研究生命起源是科学研究的重要课题。",
        "中华人民共和国成立以来经济社会发展迅速。",
        "我们今天学习历史文化和科学技术。",
    ];
    sentences
        .iter()
        .flat_map(|s| s.chars())
        .cycle()
        .take(chars)
        .collect()
}

fn segmenter() -> MmSeg {
    let dict: Dictionary = WORDS.iter().collect();
    let freqs = FrequencyTable::from_reader("的 100000\n是 80000\n和 60000\n".as_bytes())
        .expect("static frequency table");
    MmSeg::new(dict, freqs)
}

fn bench_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_depth");
    let seg = segmenter();
    let text = sample_text(10_000);

    for depth in [1, 2, 3, 4] {
        group.throughput(Throughput::Elements(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("depth", depth), &text, |b, text| {
            b.iter(|| seg.segment_with_depth(black_box(text), depth))
        });
    }

    group.finish();
}

fn bench_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_length");
    let seg = segmenter();

    for size in [1_000, 10_000, 100_000] {
        let text: String = sample_text(size).into_iter().collect();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("segment_str", size), &text, |b, text| {
            b.iter(|| seg.segment_str(black_box(text)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_depth, bench_length);
criterion_main!(benches);
