// benches/csv_codec.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use cat_tracker::{cat::Cat, csv};

fn sample(n: usize) -> Vec<Cat> {
    (0..n)
        .map(|i| Cat {
            id: format!("17000000{i:05}-abc{i:05}"),
            external_code: format!("CAT{i:04}"),
            display_name: format!("Cat {i}"),
            owner_name: format!("Owner {}", i % 50),
            physical_description: s_or(i, "orange tabby, white paws", "black"),
            medical_notes: s_or(i, "", "spayed; \"shy\" at the vet"),
            additional_notes: s_or(i, "likes boxes\nhates baths", ""),
            sprite_reference: String::new(),
            photo_reference: format!("https://photos.example/{i}.jpg"),
            created_at: "2024-03-09T12:00:00.000Z".into(),
        })
        .collect()
}

fn s_or(i: usize, even: &str, odd: &str) -> String {
    if i % 2 == 0 { even.into() } else { odd.into() }
}

fn bench_csv(c: &mut Criterion) {
    let cats = sample(2_000);
    let text = csv::to_csv(&cats);

    c.bench_function("csv_serialize_2000", |b| {
        b.iter(|| {
            let out = csv::to_csv(black_box(&cats));
            black_box(out.len())
        })
    });

    c.bench_function("csv_parse_2000", |b| {
        b.iter(|| {
            let parsed = csv::from_csv(black_box(&text));
            black_box(parsed.len())
        })
    });
}

criterion_group!(benches, bench_csv);
criterion_main!(benches);
