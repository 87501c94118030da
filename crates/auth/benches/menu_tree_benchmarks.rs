use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use menugate_auth::{MenuNode, RolePermission, aggregate, build_tree, extract_actions};
use menugate_core::MenuId;

/// Menu catalogue with `sections` top-level sections, each holding `screens`
/// screens with three actions apiece.
fn catalogue(sections: usize, screens: usize) -> Vec<MenuNode> {
    let mut nodes = Vec::with_capacity(sections * (screens + 1));
    for s in 0..sections {
        let section = format!("s{s}");
        nodes.push(MenuNode::new(section.as_str(), None));
        for c in 0..screens {
            let id = format!("s{s}-c{c}");
            nodes.push(
                MenuNode::new(id.as_str(), Some(MenuId::new(section.as_str())))
                    .with_actions([format!("{id}-add"), format!("{id}-edit"), format!("{id}-delete")]),
            );
        }
    }
    nodes
}

/// Naive reconstruction: rescan the whole record set for every parent.
fn naive_tree(nodes: &[MenuNode], parent: Option<&MenuId>) -> Vec<MenuNode> {
    nodes
        .iter()
        .filter(|n| n.parent_id.as_ref() == parent)
        .map(|n| {
            let mut node = n.clone();
            node.children = naive_tree(nodes, Some(&n.id));
            node
        })
        .collect()
}

fn bench_build_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_tree");

    for &(sections, screens) in &[(10usize, 10usize), (20, 50), (50, 100)] {
        let nodes = catalogue(sections, screens);
        group.throughput(Throughput::Elements(nodes.len() as u64));

        group.bench_with_input(BenchmarkId::new("indexed", nodes.len()), &nodes, |b, nodes| {
            b.iter(|| build_tree(black_box(nodes), None).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("naive_rescan", nodes.len()), &nodes, |b, nodes| {
            b.iter(|| naive_tree(black_box(nodes), None))
        });
    }

    group.finish();
}

fn bench_resolution_pipeline(c: &mut Criterion) {
    let nodes = catalogue(20, 50);
    let roles: Vec<RolePermission> = (0..8)
        .map(|r| {
            let checked: Vec<String> = (0..50).step_by(r + 1).map(|c| format!("s{r}-c{c}")).collect();
            RolePermission::new(format!("r{r}")).checked(checked).half_checked([format!("s{r}")])
        })
        .collect();

    c.bench_function("aggregate_filter_build_extract", |b| {
        b.iter(|| {
            let allowed = aggregate(black_box(&roles));
            let scoped: Vec<MenuNode> = nodes.iter().filter(|n| allowed.contains(&n.id)).cloned().collect();
            let tree = build_tree(&scoped, None).unwrap();
            extract_actions(&tree)
        })
    });
}

criterion_group!(benches, bench_build_tree, bench_resolution_pipeline);
criterion_main!(benches);
