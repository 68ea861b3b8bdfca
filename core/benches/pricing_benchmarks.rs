use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use flexlease::{
  parse_plan_snapshot, resolve_order_amounts, resolve_order_total, serialize_plan_snapshot, OrderItem, PlanSnapshot,
  RentalOrder,
};

// --- Helpers ---
fn snapshot_text() -> String {
  serialize_plan_snapshot(&PlanSnapshot {
    plan_id: Some("plan-bench".to_string()),
    plan_type: Some("STANDARD".to_string()),
    term_months: Some(12.0),
    deposit_amount: Some(1200.0),
    rent_amount_monthly: Some(199.0),
    buyout_price: Some(4999.0),
  })
}

/// Half the items carry explicit prices, half rely on their snapshot.
fn build_order(item_count: usize) -> RentalOrder {
  let snapshot = snapshot_text();
  let items = (0..item_count)
    .map(|i| {
      let explicit = i % 2 == 0;
      OrderItem {
        product_id: format!("prod-{}", i),
        product_name: format!("Item {}", i),
        plan_snapshot: Some(snapshot.clone()),
        quantity: Some((i % 3 + 1) as f64),
        unit_deposit_amount: explicit.then_some(300.0),
        unit_rent_amount: explicit.then_some(45.5),
        buyout_price: None,
        ..Default::default()
      }
    })
    .collect();
  RentalOrder {
    id: "ord-bench".to_string(),
    items,
    ..Default::default()
  }
}

// --- Benchmark Functions ---
fn bench_snapshot_parse(c: &mut Criterion) {
  let text = snapshot_text();
  c.bench_function("parse_plan_snapshot", |b| {
    b.iter(|| parse_plan_snapshot(Some(std::hint::black_box(text.as_str()))))
  });
}

fn bench_order_aggregation(c: &mut Criterion) {
  let mut group = c.benchmark_group("order_aggregation");
  for item_count in [1usize, 10, 100] {
    let order = build_order(item_count);
    group.throughput(Throughput::Elements(item_count as u64));
    group.bench_with_input(BenchmarkId::new("resolve_order_amounts", item_count), &order, |b, order| {
      b.iter(|| resolve_order_amounts(std::hint::black_box(order)))
    });
    group.bench_with_input(BenchmarkId::new("resolve_order_total", item_count), &order, |b, order| {
      b.iter(|| resolve_order_total(std::hint::black_box(order)))
    });
  }
  group.finish();
}

criterion_group!(benches, bench_snapshot_parse, bench_order_aggregation);
criterion_main!(benches);
