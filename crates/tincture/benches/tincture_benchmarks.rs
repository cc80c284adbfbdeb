use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tincture::{
    Color, CriticalColors, CriticalInput, Harmony, Theme, adjust_lightness, audit_theme, blend,
    contrast_ratio, derive_theme, select_best_contrast, validate,
};

const BRAND: Color = Color::rgb(0x66, 0x7e, 0xea);
const INK: Color = Color::rgb(0x1a, 0x1a, 0x1a);

fn bench_colors(c: &mut Criterion) {
    let mut group = c.benchmark_group("tincture/colors");

    group.bench_function("Color::parse", |b| {
        b.iter(|| black_box(Color::parse(black_box("#667EEA"))));
    });

    group.bench_function("Color::to_hsl", |b| {
        b.iter(|| black_box(black_box(BRAND).to_hsl()));
    });

    group.bench_function("adjust_lightness", |b| {
        b.iter(|| black_box(adjust_lightness(black_box(BRAND), 0.8)));
    });

    group.bench_function("blend", |b| {
        b.iter(|| black_box(blend(black_box(Color::WHITE), black_box(INK), 0.2)));
    });

    group.finish();
}

fn bench_contrast(c: &mut Criterion) {
    let mut group = c.benchmark_group("tincture/contrast");

    group.bench_function("contrast_ratio_hex", |b| {
        b.iter(|| black_box(contrast_ratio(black_box("#667eea"), black_box("#ffffff"))));
    });

    group.bench_function("validate_fail", |b| {
        let gray = Color::rgb(0x77, 0x77, 0x77);
        b.iter(|| black_box(validate(black_box(gray), Color::WHITE)));
    });

    let candidates: Vec<Color> = (0..32u8).map(|i| Color::rgb(i * 8, 255 - i * 8, i)).collect();
    group.bench_function("select_best_contrast_32", |b| {
        b.iter(|| black_box(select_best_contrast(black_box(&candidates), Color::WHITE)));
    });

    group.finish();
}

fn bench_themes(c: &mut Criterion) {
    let mut group = c.benchmark_group("tincture/themes");

    group.bench_function("harmonies_triadic", |b| {
        b.iter(|| black_box(black_box(BRAND).harmonies(Harmony::Triadic)));
    });

    let input = CriticalInput::new("#667eea", "#ffffff", "#1a1a1a");
    group.bench_function("derive_theme", |b| {
        b.iter(|| black_box(derive_theme(black_box(&input))));
    });

    let critical = CriticalColors::new(BRAND, Color::WHITE, INK);
    group.bench_function("Theme::derive", |b| {
        b.iter(|| black_box(Theme::derive(black_box(critical))));
    });

    if let Ok(theme) = Theme::derive(critical) {
        group.bench_function("audit_theme", |b| {
            b.iter(|| black_box(audit_theme(black_box(&theme))));
        });
        group.bench_function("to_css_variables", |b| {
            b.iter(|| black_box(theme.to_css_variables()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_colors, bench_contrast, bench_themes);
criterion_main!(benches);
