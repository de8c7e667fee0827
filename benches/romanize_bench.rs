use criterion::{Criterion, criterion_group, criterion_main};
use onomast::{NameRequest, Transliterator};
use std::hint::black_box;

fn bench_romanize(c: &mut Criterion) {
    let service = Transliterator::new();

    let mut group = c.benchmark_group("romanize");

    let cases = [
        ("arabic_dictionary", NameRequest::new("محمد", "علي", "EG")),
        ("japanese_dictionary", NameRequest::new("太郎", "山田", "JP")),
        ("korean_romanizer", NameRequest::new("민수", "김", "KR")),
        ("chinese_pinyin", NameRequest::new("小明", "王", "CN")),
        ("cyrillic_charmap", NameRequest::new("Наталья", "Иванова", "RU")),
        ("latin_diacritics", NameRequest::new("José", "García", "ES")),
        ("latin_passthrough", NameRequest::new("John", "Smith", "US")),
    ];

    for (name, request) in cases {
        group.bench_function(name, |b| {
            b.iter(|| service.transliterate(black_box(&request)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_romanize);
criterion_main!(benches);
