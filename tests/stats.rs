use klara_report::math::stats::{five_number_summary, mean, median, quantile};

#[test]
fn mean_basic() {
    assert!((mean(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < 1e-12);
    assert_eq!(mean(&[]), 0.0);
}

#[test]
fn median_odd_even() {
    let mut v1 = vec![3.0, 1.0, 2.0];
    assert_eq!(median(&mut v1), 2.0);
    let mut v2 = vec![4.0, 1.0, 2.0, 3.0];
    assert_eq!(median(&mut v2), 2.5);
}

#[test]
fn quantile_interpolates() {
    let mut v = vec![1.0, 2.0, 3.0, 4.0];
    // rank 0.25 * 3 = 0.75 -> between 1.0 and 2.0
    assert!((quantile(&mut v, 0.25) - 1.75).abs() < 1e-12);
    let mut v = vec![1.0, 2.0, 3.0, 4.0];
    assert!((quantile(&mut v, 0.75) - 3.25).abs() < 1e-12);
}

#[test]
fn quantile_bounds() {
    let mut v = vec![5.0, 1.0, 3.0];
    assert_eq!(quantile(&mut v, 0.0), 1.0);
    let mut v = vec![5.0, 1.0, 3.0];
    assert_eq!(quantile(&mut v, 1.0), 5.0);
    let mut single = vec![7.0];
    assert_eq!(quantile(&mut single, 0.5), 7.0);
}

#[test]
fn five_number_summary_ordered() {
    let mut v = vec![9.0, 2.0, 7.0, 4.0, 5.0, 1.0, 8.0];
    let s = five_number_summary(&mut v);
    assert!(s.min <= s.q1);
    assert!(s.q1 <= s.median);
    assert!(s.median <= s.q3);
    assert!(s.q3 <= s.max);
    assert_eq!(s.min, 1.0);
    assert_eq!(s.max, 9.0);
}

#[test]
fn five_number_summary_empty() {
    let mut v: Vec<f64> = Vec::new();
    let s = five_number_summary(&mut v);
    assert_eq!(s.min, 0.0);
    assert_eq!(s.max, 0.0);
}
