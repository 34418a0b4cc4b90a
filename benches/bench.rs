use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn resolve(c: &mut Criterion) {
    c.bench_function("resolve_qualified", |b| {
        b.iter(|| colormap_tex::registry::resolve_spec(black_box("colorgrad:preset.plasma")).unwrap())
    });
}

fn sample(c: &mut Criterion) {
    let cmap = colormap_tex::registry::resolve_spec("plasma").unwrap();
    c.bench_function("sample_row_256", |b| b.iter(|| black_box(cmap.sample_row())));
}

criterion_group!(benches, resolve, sample);
criterion_main!(benches);
