use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hinode_core::{Body, Calculator, EventKind, GeoLocation};
use hinode_time::{CivilTime, Dut1Table, LeapSecondTable, TimeTables};

fn tables() -> TimeTables {
    TimeTables::new(
        LeapSecondTable::parse("19720101 -10\n20150701 -36\n20170101 -37\n")
            .expect("valid table"),
        Dut1Table::parse("20190701 -0.2\n20210901 -0.1\n").expect("valid table"),
    )
}

fn calculator() -> Calculator {
    let location = GeoLocation::new(35.6586, 139.7454, 0.0).expect("valid location");
    let civil = CivilTime::parse_jst("20210409").expect("valid date");
    Calculator::new(civil, location, &tables()).expect("calculator should build")
}

fn construct_bench(c: &mut Criterion) {
    let tables = tables();
    let location = GeoLocation::new(35.6586, 139.7454, 0.0).expect("valid location");
    let civil = CivilTime::parse_jst("20210409").expect("valid date");
    c.bench_function("calculator_new", |b| {
        b.iter(|| Calculator::new(black_box(civil), black_box(location), &tables))
    });
}

fn event_bench(c: &mut Criterion) {
    let calc = calculator();
    let mut group = c.benchmark_group("riseset_event");
    for body in [Body::Sun, Body::Moon] {
        for kind in EventKind::ALL {
            group.bench_function(format!("{body}_{kind}"), |b| {
                b.iter(|| calc.compute_event(black_box(body), black_box(kind)))
            });
        }
    }
    group.finish();
}

fn daily_bench(c: &mut Criterion) {
    let calc = calculator();
    c.bench_function("compute_all", |b| b.iter(|| black_box(&calc).compute_all()));
}

criterion_group!(benches, construct_bench, event_bench, daily_bench);
criterion_main!(benches);
