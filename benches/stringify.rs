use criterion::{black_box, criterion_group, criterion_main, Criterion};
use typed_rules::{
    equal, get, includes, is, not_equal, or, rule, secure, stringify_rule, Collection,
    DatabaseRules, DatabaseRulesBuilder, Map, MapExpr, Rule, RuleType, Text, TypeTag, Value,
};

/// Build a document with `n` collections, each carrying a read rule that
/// follows a `get()` chain and a write rule with several checks.
fn build_document(n: usize) -> DatabaseRules {
    let accounts = Collection::<Map>::new("accounts");
    let mut builder = DatabaseRulesBuilder::new();

    for i in 0..n {
        let collection = Collection::<Map>::new(format!("c{i}"));
        let read = rule::<Map>([RuleType::Read], |ctx| {
            let account = get(&accounts, ctx.resource.data().get::<Text>("accountId", Value::Null));
            vec![
                not_equal(ctx.request.auth().uid(), Value::Null),
                includes(account.data().keys(), ctx.request.auth().uid()),
            ]
        });
        let write = rule::<Map>([RuleType::Create, RuleType::Update], |ctx| {
            let data = ctx.request.resource().data();
            vec![
                is(data.keys(), TypeTag::List),
                equal(data.size(), 3_i64),
                equal(&ctx.resource_id, ctx.request.auth().uid()),
            ]
        });
        builder = builder.collection(secure(&collection, [read, write]));
    }

    builder.build()
}

/// A balanced `||` tree of the given depth.
fn build_tree(depth: u32) -> Rule {
    if depth == 0 {
        return equal(typed_rules::Path::new("resource.data.n"), 1_i64);
    }
    or(build_tree(depth - 1), build_tree(depth - 1))
}

fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("document");

    for &n in &[1, 10, 100] {
        group.bench_function(&format!("{n}_collections_build"), |b| {
            b.iter(|| build_document(black_box(n)));
        });

        let document = build_document(n);
        group.bench_function(&format!("{n}_collections_render"), |b| {
            b.iter(|| black_box(&document).render());
        });
    }

    group.finish();
}

fn bench_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_tree");

    for &depth in &[4, 8, 12] {
        let tree = build_tree(depth);
        group.bench_function(&format!("depth_{depth}"), |b| {
            b.iter(|| stringify_rule(black_box(&tree)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_document, bench_tree);
criterion_main!(benches);
