use criterion::{Criterion, criterion_group, criterion_main};
use domain::{
    BrandMix, BrandSelection, Catalog, InMemoryOrderStore, OrderIntake, OrderService, PlanRequest,
    SmartMixPlanner, allocate, estimate_crates,
};

fn intake() -> OrderIntake {
    let mix: BrandMix = [("nile", 7), ("club", 5), ("castle", 4)].into_iter().collect();
    OrderIntake::new(100, 4, 16, mix, "Kololo Airstrip, Kampala")
}

fn bench_estimate(c: &mut Criterion) {
    c.bench_function("domain/estimate_crates", |b| {
        b.iter(|| {
            for guests in (10..=1000).step_by(10) {
                std::hint::black_box(estimate_crates(guests, 6));
            }
        });
    });
}

fn bench_allocate(c: &mut Criterion) {
    let brands = ["nile", "club", "castle", "eagle"];

    c.bench_function("domain/allocate_4_brands", |b| {
        b.iter(|| std::hint::black_box(allocate(977, &brands)));
    });
}

fn bench_plan(c: &mut Criterion) {
    let catalog = Catalog::standard();
    let planner = SmartMixPlanner::new(&catalog);
    let request = PlanRequest::new(450, 8)
        .with_selection(BrandSelection::Custom(vec![
            "nile".to_string(),
            "club".to_string(),
            "eagle".to_string(),
        ]))
        .with_brand_override("club", 40);

    c.bench_function("domain/plan_custom_mix", |b| {
        b.iter(|| planner.plan(&request).unwrap());
    });
}

fn bench_create_order(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("domain/create_order", |b| {
        b.iter(|| {
            rt.block_on(async {
                let service = OrderService::new(InMemoryOrderStore::new());
                service.create(intake()).await.unwrap();
            });
        });
    });
}

fn bench_statistics_1000_orders(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = OrderService::new(InMemoryOrderStore::new());

    rt.block_on(async {
        for _ in 0..1000 {
            service.create(intake()).await.unwrap();
        }
    });

    c.bench_function("domain/statistics_1000_orders", |b| {
        b.iter(|| rt.block_on(service.statistics()));
    });
}

criterion_group!(
    benches,
    bench_estimate,
    bench_allocate,
    bench_plan,
    bench_create_order,
    bench_statistics_1000_orders,
);
criterion_main!(benches);
