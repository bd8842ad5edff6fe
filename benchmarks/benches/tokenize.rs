use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lettergram_tokenizer::normalize;

/// Mixed case, digits, punctuation, newlines and accented letters.
const LETTER: &str = "Dear Zoë,\nThe 3 QUICK brown foxes (née \"Fuchs\") jumped over 12 lazy dogs; \
    Ñandú & Œuvre were there too!\t-- P.S. ¿Qué tal?\n";

fn normalize_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for repeat in [1, 64, 4096] {
        let text = LETTER.repeat(repeat);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("{} bytes", text.len()), |b| {
            b.iter(|| normalize(black_box(&text)))
        });
    }

    group.bench_function("no letters", |b| {
        b.iter(|| normalize(black_box("0123456789 !?;:.,\n€ ¿¡ 42")))
    });

    group.finish();
}

criterion_group!(benches, normalize_benchmark);
criterion_main!(benches);
