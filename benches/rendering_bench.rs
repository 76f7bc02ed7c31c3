// benches/rendering_bench.rs
//! Benchmarks for block rendering and table-of-contents generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use notion2report::formatting::{generate_table_of_contents, render_blocks, RenderConfig};
use notion2report::model::{Block, BlockCommon, MarkerBlock, TextBlock, ToDoBlock};
use notion2report::types::{Annotations, BlockId, RichTextItem};

fn block_common(n: usize) -> BlockCommon {
    BlockCommon::new(BlockId::parse(&format!("{:032x}", n)).unwrap())
}

/// A flat document cycling through headings, styled paragraphs, to-dos and dividers.
fn create_sample_blocks(count: usize) -> Vec<Block> {
    let bold = Annotations {
        bold: true,
        ..Annotations::default()
    };

    (0..count)
        .map(|n| match n % 4 {
            0 => Block::Heading2(TextBlock {
                common: block_common(n),
                rich_text: vec![RichTextItem::plain_text(&format!("Section {}", n))],
            }),
            1 => Block::Paragraph(TextBlock {
                common: block_common(n),
                rich_text: vec![
                    RichTextItem::plain_text("A paragraph with "),
                    RichTextItem::styled("emphasis", bold, Some("https://example.com")),
                    RichTextItem::plain_text(" to make it more realistic."),
                ],
            }),
            2 => Block::ToDo(ToDoBlock {
                common: block_common(n),
                rich_text: vec![RichTextItem::plain_text("Follow up")],
                checked: n % 8 == 2,
            }),
            _ => Block::Divider(MarkerBlock {
                common: block_common(n),
            }),
        })
        .collect()
}

fn bench_render_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_blocks");

    for size in [10, 100, 1000] {
        let blocks = create_sample_blocks(size);
        for (name, config) in [
            ("primary", RenderConfig::primary()),
            ("embedded", RenderConfig::embedded(true)),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), &blocks, |b, blocks| {
                b.iter(|| render_blocks(black_box(blocks), black_box(&config)))
            });
        }
    }

    group.finish();
}

fn bench_table_of_contents(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_of_contents");

    for size in [100, 1000] {
        let text = render_blocks(&create_sample_blocks(size), &RenderConfig::primary());
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| generate_table_of_contents(black_box(text)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_blocks, bench_table_of_contents);
criterion_main!(benches);
