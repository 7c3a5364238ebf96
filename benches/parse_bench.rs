use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tbl_table::{ParseOptions, Table};

fn generate_text(rows: usize, quoted: bool) -> String {
    let mut text = String::from("Name,Count,Ratio,Note\n");
    for i in 0..rows {
        if quoted {
            text.push_str(&format!(
                "row{i},{i},{}.5,\"note, with \"\"quotes\"\" {i}\"\n",
                i % 97
            ));
        } else {
            text.push_str(&format!("row{i},{i},{}.5,plain note {i}\n", i % 97));
        }
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [100, 1_000, 10_000] {
        for quoted in [false, true] {
            let text = generate_text(size, quoted);
            let label = if quoted { "quoted" } else { "plain" };
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(BenchmarkId::new(label, size), &text, |b, text| {
                b.iter(|| Table::with_options(black_box(text), ParseOptions::default()));
            });
        }
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let text = generate_text(10_000, false);
    let table = Table::new(&text);

    c.bench_function("lookup_by_name", |b| {
        b.iter(|| table.value_by_name::<i64>(black_box("row5000"), black_box("Count")));
    });
}

criterion_group!(benches, bench_parse, bench_lookup);
criterion_main!(benches);
