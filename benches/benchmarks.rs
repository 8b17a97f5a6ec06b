use bucketeer::cards::Board;
use bucketeer::cards::Street;
use bucketeer::clustering::Bucket;
use bucketeer::clustering::Centroid;
use bucketeer::clustering::ClusterTable;
use bucketeer::clustering::Features;
use bucketeer::gameplay::Action;
use bucketeer::gameplay::Path;
use bucketeer::Arbitrary;
use std::collections::BTreeMap;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        extracting_river_features,
        assigning_nearest_centroid,
        digesting_action_path,
}

fn table(k: u16) -> ClusterTable {
    let partitions: BTreeMap<Street, Vec<Centroid>> = Street::clustered()
        .iter()
        .map(|&street| {
            let centroids = (0..k)
                .map(|i| Centroid::from((Bucket::from(i), Features::random())))
                .collect();
            (street, centroids)
        })
        .collect();
    ClusterTable::from(partitions)
}

fn extracting_river_features(c: &mut criterion::Criterion) {
    c.bench_function("extract features from a River board", |b| {
        let board = Board::from(Street::Rive);
        b.iter(|| Features::from(&board))
    });
}

fn assigning_nearest_centroid(c: &mut criterion::Criterion) {
    let table = table(144);
    let board = Board::from(Street::Turn);
    c.bench_function("assign a Turn board to its nearest centroid", |b| {
        b.iter(|| table.bucket(&board))
    });
}

fn digesting_action_path(c: &mut criterion::Criterion) {
    let actions = (0..13).map(|_| Action::random()).collect::<Vec<Action>>();
    c.bench_function("digest a 13-action street history", |b| {
        b.iter(|| actions.iter().copied().collect::<Path>().digest())
    });
}
