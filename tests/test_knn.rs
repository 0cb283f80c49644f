use ndarray::{array, Array2};
use bbgt::knn::{distance_matrix, majority_vote, DistanceMetric, KnnModel};
use bbgt::BbGtError;

fn two_clusters() -> (Array2<f32>, Vec<usize>) {
    let reference = array![
        [0., 0.],
        [1., 0.],
        [0., 1.],
        [10., 10.],
        [11., 10.],
        [10., 11.],
    ];
    (reference, vec![0, 0, 0, 1, 1, 1])
}

#[test]
fn forward_picks_nearest_cluster() {
    let (reference, labels) = two_clusters();
    let model = KnnModel::new(reference, labels, 3, DistanceMetric::SqEuclidean).unwrap();

    let x = array![[0.5, 0.5], [9.5, 10.5], [2., 1.]];
    assert_eq!(model.forward(x.view()).unwrap(), vec![0, 1, 0]);
}

#[test]
fn forward_rejects_wrong_feature_width() {
    let (reference, labels) = two_clusters();
    let model = KnnModel::new(reference, labels, 1, DistanceMetric::Euclidean).unwrap();

    let x = array![[0., 0., 0.]];
    let err = model.forward(x.view()).unwrap_err();
    assert!(matches!(err, BbGtError::DimensionMismatch { expected: 2, actual: 3 }));
}

#[test]
fn model_validation() {
    let (reference, _) = two_clusters();
    assert!(KnnModel::new(reference.clone(), vec![0, 1], 1, DistanceMetric::L1).is_err());
    assert!(KnnModel::new(reference, vec![0; 6], 0, DistanceMetric::L1).is_err());
}

#[test]
fn metrics() {
    let x = array![[1., 0.]];
    let r = array![[0., 1.], [2., 0.]];

    let expected: Array2<f32> = array![[2., 1.]];
    let d = distance_matrix(x.view(), r.view(), DistanceMetric::SqEuclidean).unwrap();
    assert_eq!(d, expected);

    let d = distance_matrix(x.view(), r.view(), DistanceMetric::L1).unwrap();
    assert_eq!(d, expected);

    let expected: Array2<f32> = array![[1., 0.]];
    let d = distance_matrix(x.view(), r.view(), DistanceMetric::Cosine).unwrap();
    assert_eq!(d, expected);

    let expected: Array2<f32> = array![[1., 0.5 * (1. / 3.)]];
    let d = distance_matrix(x.view(), r.view(), DistanceMetric::ChiSquared).unwrap();
    assert_eq!(d, expected);
}

#[test]
fn vote_ties_go_to_nearest() {
    let distances = array![[0.3, 0.1, 0.2, 0.4]];
    let labels = [7, 8, 7, 8];
    // nearest two: label 8 (0.1) and 7 (0.2) tie one vote each
    assert_eq!(majority_vote(distances.view(), &labels, 2).unwrap(), vec![8]);
    // nearest three: 8, 7, 7
    assert_eq!(majority_vote(distances.view(), &labels, 3).unwrap(), vec![7]);
    // k larger than the reference set uses all of it, 2:2 tie again
    assert_eq!(majority_vote(distances.view(), &labels, 10).unwrap(), vec![8]);
}
