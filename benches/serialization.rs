use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ini_doc::{from_str, to_git_string, to_string};

fn config_text(sections: usize, keys_per_section: usize) -> String {
    let mut text = String::from("name = tool\nversion = 1.5\n");
    for s in 0..sections {
        text.push_str(&format!("\n[section{}]\n", s));
        for k in 0..keys_per_section {
            text.push_str(&format!("key{} = value{}\n", k, k));
        }
    }
    text
}

fn benchmark_parse_small(c: &mut Criterion) {
    let text = config_text(2, 4);

    c.bench_function("parse_small_config", |b| {
        b.iter(|| from_str(black_box(&text)))
    });
}

fn benchmark_parse_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_sections");

    for size in [10, 50, 100, 500].iter() {
        let text = config_text(*size, 8);

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_parse_typed_values(c: &mut Criterion) {
    let mut text = String::new();
    for i in 0..200 {
        text.push_str(&format!("int{i} = {i}\nfloat{i} = {i}.5\nword{i} = value\n"));
    }

    c.bench_function("parse_typed_values", |b| {
        b.iter(|| from_str(black_box(&text)))
    });
}

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_sections");

    for size in [10, 50, 100, 500].iter() {
        let root = from_str(&config_text(*size, 8));

        group.bench_with_input(BenchmarkId::from_parameter(size), &root, |b, root| {
            b.iter(|| to_string(black_box(root)))
        });
    }
    group.finish();
}

fn benchmark_render_layouts(c: &mut Criterion) {
    let root = from_str(&config_text(20, 8));

    let mut group = c.benchmark_group("layouts");

    group.bench_function("plain", |b| b.iter(|| to_string(black_box(&root))));
    group.bench_function("git", |b| b.iter(|| to_git_string(black_box(&root))));

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let text = config_text(5, 6);

    c.bench_function("roundtrip_small_config", |b| {
        b.iter(|| {
            let root = from_str(black_box(&text));
            to_string(black_box(&root))
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_small,
    benchmark_parse_scaling,
    benchmark_parse_typed_values,
    benchmark_render,
    benchmark_render_layouts,
    benchmark_roundtrip
);
criterion_main!(benches);
