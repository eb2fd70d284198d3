use criterion::{Criterion, black_box};

use bench_util::configure_criterion;

use stubconsts::TableId;
use stubconsts::consts::layout::ctable_entry;
use stubconsts::reference::rem_pio32;

fn bench_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("tables/lookup");
    group.bench_function("address_all", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for id in TableId::ALL {
                acc ^= black_box(id).address() as usize;
            }
            black_box(acc)
        })
    });
    group.bench_function("from_name", |b| {
        b.iter(|| black_box(TableId::from_name(black_box("PI_INV_TABLE"))))
    });
    group.bench_function("ctable_entry", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for k in 0..64 {
                acc += ctable_entry(black_box(k)).sin();
            }
            black_box(acc)
        })
    });
    group.finish();

    let mut group = c.benchmark_group("tables/reduce");
    for (name, x) in [("medium", 12345.678), ("huge", 1.0e300)] {
        group.bench_function(name, |b| b.iter(|| black_box(rem_pio32(black_box(x)))));
    }
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_tables(&mut c);
    c.final_summary();
}
