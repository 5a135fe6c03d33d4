use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seek::output::extension::extension_for;
use seek::output::segment::{parse, Segment};

fn make_reply(blocks: usize, prose: &str) -> String {
    let mut reply = String::new();
    for i in 0..blocks {
        reply.push_str(prose);
        reply.push('\n');
        reply.push_str(if i % 2 == 0 { "```python\n" } else { "```rust\n" });
        for line in 0..20 {
            reply.push_str(&format!("    value_{line} = {i} * {line}\n"));
        }
        reply.push_str("```\n");
    }
    reply
}

fn bench_segment_parse(c: &mut Criterion) {
    let prose = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod tempor incididunt ut labore et dolore magna aliqua";

    for &blocks in &[10usize, 200usize] {
        let reply = make_reply(blocks, prose);
        let lines = reply.lines().count();

        let mut group = c.benchmark_group(format!("segment_parse_blocks{}", blocks));
        group.throughput(Throughput::Elements(lines as u64));

        group.bench_function(BenchmarkId::new("parse", lines), |b| {
            b.iter(|| parse(&reply))
        });

        // Parse plus extension lookup, as done when writing code files
        group.bench_function(BenchmarkId::new("parse_and_resolve", lines), |b| {
            b.iter(|| {
                parse(&reply)
                    .iter()
                    .filter_map(|segment| match segment {
                        Segment::Code { language_tag, .. } => Some(extension_for(language_tag)),
                        Segment::Text { .. } => None,
                    })
                    .count()
            })
        });

        // Unterminated trailing fence: everything after the last marker is dropped
        let truncated = format!("{reply}```python\nunfinished = True\n");
        group.bench_function(BenchmarkId::new("parse_unterminated", lines), |b| {
            b.iter(|| parse(&truncated))
        });

        group.finish();
    }
}

criterion_group!(benches, bench_segment_parse);
criterion_main!(benches);
