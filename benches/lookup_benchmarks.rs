//! Lookup Benchmarks
//!
//! Measures string lookup through the shared current locale and through an
//! invocation scope, plus bulk command localization.
//!
//! Run with: cargo bench --bench lookup_benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use polyglot::prelude::*;
use std::hint::black_box;

fn translations(strings: usize) -> Vec<(&'static str, Internationalization)> {
    ["de", "fr", "ja", "pt_BR"]
        .into_iter()
        .map(|locale| {
            let mut bundle = Internationalization::new();
            for i in 0..strings {
                bundle = bundle.with_string(format!("message {}", i), format!("{} {}", locale, i));
            }
            for i in 0..20 {
                bundle = bundle.with_command(
                    format!("command{}", i),
                    CommandLocalization::new()
                        .with_name(format!("{}-cmd{}", locale, i))
                        .with_option("target", OptionLocalization::new().with_name("ziel")),
                );
            }
            (locale, bundle)
        })
        .collect()
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    let i18n = I18n::detached(I18nConfig::default(), translations(500));
    let ctx = Invocation::new("bench").with_guild_locale("pt-BR");
    i18n.set_current_locale(&ctx);

    group.bench_function("shared/hit", |b| {
        b.iter(|| black_box(i18n.get_text(black_box("message 250"))))
    });

    group.bench_function("shared/miss", |b| {
        b.iter(|| black_box(i18n.get_text(black_box("not translated"))))
    });

    group.bench_function("shared/formatted", |b| {
        b.iter(|| black_box(i18n.get_text_fmt(black_box("Hello {0}"), &[&"Sam"])))
    });

    let scope = i18n.scope(&ctx);
    group.bench_function("scoped/hit", |b| {
        b.iter(|| {
            let translator = scope.translator(i18n.store());
            black_box(translator.text(black_box("message 250")).len())
        })
    });

    group.finish();
}

fn bench_localize_commands(c: &mut Criterion) {
    let i18n = I18n::detached(I18nConfig::default(), translations(10));

    c.bench_function("localize_commands/20x4", |b| {
        b.iter(|| {
            let mut bot = CommandRegistry::new();
            for i in 0..20 {
                bot.add_command(
                    SlashCommand::new(format!("command{}", i), "bench")
                        .option(CommandOption::new("target", "bench")),
                );
            }
            black_box(i18n.localize_commands(&mut bot))
        })
    });
}

criterion_group!(benches, bench_lookup, bench_localize_commands);
criterion_main!(benches);
