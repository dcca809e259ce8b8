use core::ptr::NonNull;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use slink_collections::linked_list::arena::{ArenaList, NodeId};
use slink_collections::linked_list::intrusive::{
    list::LinkedList,
    single::SingleNode,
    traits::{List, NodeWithData},
};

const CHAIN_LEN: usize = 1024;

fn arena_chain() -> (ArenaList<u64>, Vec<NodeId>) {
    let mut list = ArenaList::with_capacity(CHAIN_LEN);
    let ids: Vec<NodeId> = (0..CHAIN_LEN).map(|i| list.alloc(i as u64)).collect();
    for id in ids.iter().rev() {
        list.push_front(*id);
    }
    (list, ids)
}

fn intrusive_chain() -> (LinkedList<SingleNode<u64>>, Vec<Box<SingleNode<u64>>>) {
    let mut nodes: Vec<Box<SingleNode<u64>>> = (0..CHAIN_LEN)
        .map(|i| {
            let mut node = Box::new(SingleNode::<u64>::default());
            *node.data_mut() = i as u64;
            node
        })
        .collect();
    let mut list = LinkedList::<SingleNode<u64>>::new();
    for node in nodes.iter_mut().rev() {
        list.push(NonNull::from(node.as_mut()));
    }
    (list, nodes)
}

fn arena_unlink_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("arena_unlink");

    group.bench_function("middle_of_1024", |b| {
        b.iter_batched(
            arena_chain,
            |(mut list, ids)| {
                list.unlink(black_box(ids[CHAIN_LEN / 2])).unwrap();
                black_box(list.len())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("random_of_1024", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter_batched(
            || {
                let (list, ids) = arena_chain();
                let victim = ids[rng.random_range(0..CHAIN_LEN)];
                (list, victim)
            },
            |(mut list, victim)| {
                list.unlink(black_box(victim)).unwrap();
                black_box(list.len())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn intrusive_unlink_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("intrusive_unlink");

    group.bench_function("middle_of_1024", |b| {
        b.iter_batched(
            intrusive_chain,
            |(mut list, mut nodes)| {
                let victim = NonNull::from(nodes[CHAIN_LEN / 2].as_mut());
                list.unlink(black_box(victim)).unwrap();
                black_box(list.count())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("random_of_1024", |b| {
        let mut rng = StdRng::seed_from_u64(2);
        b.iter_batched(
            || {
                let chain = intrusive_chain();
                let victim = rng.random_range(0..CHAIN_LEN);
                (chain, victim)
            },
            |((mut list, mut nodes), victim)| {
                let victim = NonNull::from(nodes[victim].as_mut());
                list.unlink(black_box(victim)).unwrap();
                black_box(list.count())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, arena_unlink_benchmark, intrusive_unlink_benchmark);
criterion_main!(benches);
