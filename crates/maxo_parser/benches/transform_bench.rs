use criterion::{black_box, criterion_group, criterion_main, Criterion};
use maxo_lexer::tokenize;
use maxo_options::LexerOptions;
use maxo_parser::{reverse_words, transform_with};

// A medium-size prose source with mixed whitespace and some multi-byte text
const PROSE_SOURCE: &str = r#"
The scanner walks its input one code point at a time.  Every run of
non-whitespace becomes a text item, every run of whitespace becomes a
whitespace item, and the consumer sees them in exactly the order they
were found.

	Tabs, newlines and   runs of spaces are kept verbatim.
Unicode is fine too: naïve café, Grüße, ｆｕｌｌｗｉｄｔｈ　space, 🦀 crabs.

Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod
tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim
veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea
commodo consequat. Duis aute irure dolor in reprehenderit in voluptate
velit esse cillum dolore eu fugiat nulla pariatur.
"#;

fn bench_tokenize(c: &mut Criterion) {
    let options = LexerOptions::default();
    c.bench_function("tokenize_prose", |b| {
        b.iter(|| {
            let items = tokenize(black_box(PROSE_SOURCE), &options);
            black_box(items);
        });
    });
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_prose");
    for capacity in [1usize, 16, 256] {
        let options = LexerOptions::default().with_buffer_capacity(capacity);
        group.bench_function(format!("capacity_{}", capacity), |b| {
            b.iter(|| {
                let output = transform_with(black_box(PROSE_SOURCE), &options).unwrap();
                black_box(output);
            });
        });
    }
    group.finish();
}

fn bench_reverse_words(c: &mut Criterion) {
    c.bench_function("reverse_words_prose", |b| {
        b.iter(|| black_box(reverse_words(black_box(PROSE_SOURCE))));
    });
}

criterion_group!(benches, bench_tokenize, bench_transform, bench_reverse_words);
criterion_main!(benches);
