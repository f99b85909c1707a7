use criterion::{black_box, criterion_group, criterion_main, Criterion};

use aerofoil_rs::aerofoil::naca4::Naca4;
use aerofoil_rs::thin_aerofoil::ThinAerofoil;

fn benchmark(c: &mut Criterion) {
    let naca = Naca4::parse("2412").expect("valid code");
    let foil = ThinAerofoil::new(naca);

    c.bench_function("Fourier coefficients to order 100", |b| {
        b.iter(|| {
            foil.fourier_coefficients(black_box(0.05), black_box(100))
                .expect("solver converges")
        })
    });

    c.bench_function("Surface outline at 100 points per side", |b| {
        b.iter(|| naca.surface(black_box(Some(100))).expect("valid resolution"))
    });

    c.bench_function("Vortex sheet sweep across the chord", |b| {
        let cached = ThinAerofoil::new(naca).memoized();
        b.iter(|| {
            (1..100)
                .map(|i| {
                    cached
                        .vortex_sheet_strength(black_box(i as f64 / 100.0), 10.0, 0.05, None)
                        .expect("solver converges")
                })
                .sum::<f64>()
        })
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
