use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::truck::{Truck, TruckService};
use service::truck::repository::mock::MockTruckRepository;

fn bench_register_and_lookup(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("truck_register_then_get", |b| {
        b.iter_batched(
            || TruckService::new(Arc::new(MockTruckRepository::default())),
            |svc| {
                rt.block_on(async {
                    let t = svc.register_truck(Truck::new("TRK-BENCH", "Bench").with_capacity(18000)).await.unwrap();
                    svc.get_truck_by_id(t.id.unwrap()).await.unwrap();
                })
            },
            criterion::BatchSize::SmallInput,
        );
    });

    // lookups against a populated registry
    let svc = TruckService::new(Arc::new(MockTruckRepository::default()));
    for i in 0..1000 {
        rt.block_on(svc.register_truck(Truck::new(format!("TRK-{i:04}"), "Driver"))).unwrap();
    }
    c.bench_function("truck_get_all_1000", |b| {
        b.iter(|| rt.block_on(svc.get_all_trucks()).unwrap());
    });
}

criterion_group!(benches, bench_register_and_lookup);
criterion_main!(benches);
