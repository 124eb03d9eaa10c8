// SPDX-License-Identifier: MPL-2.0
use badge_icons::config::defaults;
use badge_icons::domain::icon::{IconSize, Palette, DEFAULT_GLYPH};
use badge_icons::infrastructure::raster::{GlyphFont, RasterRenderer};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn icon_rendering_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("icon_rendering");
    let palette = Palette::default();

    // Whatever font the machine has; the built-in one otherwise.
    let system_font = GlyphFont::load(&defaults::font_paths());
    let builtin_font = GlyphFont::Builtin;

    for size in IconSize::DEFAULT_SEQUENCE {
        group.bench_function(format!("system_font_{}", size.side()), |b| {
            b.iter(|| {
                let _ = black_box(RasterRenderer::render_icon(
                    size,
                    &palette,
                    DEFAULT_GLYPH,
                    &system_font,
                ));
            });
        });
    }

    group.bench_function("builtin_font_128", |b| {
        b.iter(|| {
            let _ = black_box(RasterRenderer::render_icon(
                IconSize::FALLBACK_BASE,
                &palette,
                DEFAULT_GLYPH,
                &builtin_font,
            ));
        });
    });

    group.finish();
}

criterion_group!(benches, icon_rendering_benchmark);
criterion_main!(benches);
