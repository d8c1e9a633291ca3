use criterion::{criterion_group, criterion_main, Criterion};

use waypoint::router::PatternTable;
use waypoint::{RouteCatalog, RouteDescriptor};

fn build_catalog(sections: usize) -> RouteCatalog {
    let mut routes = vec![RouteDescriptor::new("/", "dashboard", "Dashboard")];
    for i in 0..sections {
        let base = format!("/section{i}");
        routes.push(
            RouteDescriptor::new(&base, format!("section{i}"), format!("Section {i}"))
                .with_children(vec![
                    RouteDescriptor::new(
                        format!("{base}/create"),
                        format!("section{i}-create"),
                        "Create",
                    ),
                    RouteDescriptor::new(
                        format!("{base}/:id"),
                        format!("section{i}-detail"),
                        "Detail",
                    ),
                ]),
        );
    }
    RouteCatalog::new(routes)
}

fn bench_resolution(c: &mut Criterion) {
    let catalog = build_catalog(50);
    let table = PatternTable::new(&catalog);

    c.bench_function("exact_match_lookup", |b| {
        b.iter(|| catalog.find_by_path(std::hint::black_box("/section49/create")))
    });

    c.bench_function("pattern_resolve_static", |b| {
        b.iter(|| table.resolve(std::hint::black_box("/section49/create")))
    });

    c.bench_function("pattern_resolve_parameterized", |b| {
        b.iter(|| table.resolve(std::hint::black_box("/section49/12345")))
    });

    c.bench_function("pattern_resolve_miss", |b| {
        b.iter(|| table.resolve(std::hint::black_box("/not/declared/anywhere")))
    });
}

criterion_group!(benches, bench_resolution);
criterion_main!(benches);
