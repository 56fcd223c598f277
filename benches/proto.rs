use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use flowfmt::{l7, proto};

fn lookup(c: &mut Criterion) {
    let mut number_group = c.benchmark_group("Protocol Number Lookup");
    for num in [6u8, 137, 200] {
        number_group.bench_with_input(BenchmarkId::new("proto_string", num), &num, |b, num| {
            b.iter(|| proto::proto_string(black_box(*num)));
        });
    }
    number_group.finish();

    let mut name_group = c.benchmark_group("Protocol Name Lookup");
    for name in ["ICMP", "mpls", "nope"] {
        name_group.bench_with_input(BenchmarkId::new("proto_num", name), name, |b, name| {
            b.iter(|| proto::proto_num(black_box(name)));
        });
    }
    name_group.bench_function(BenchmarkId::new("l7_proto_num", "h323callsigalt"), |b| {
        b.iter(|| l7::l7_proto_num(black_box("h323callsigalt")));
    });
    name_group.finish();
}

criterion_group!(benches, lookup);
criterion_main!(benches);
