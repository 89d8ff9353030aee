use loadout_core::*;

#[test]
fn test_distribution_is_normalised_density() {
    let catalog = Catalog::from_items(vec![
        Item::from_parts("A", 100, 0.0, 0.5).unwrap(),
        Item::from_parts("B", 100, 1.5, 0.5).unwrap(),
        Item::from_parts("C", 0, 3.0, 0.5).unwrap(),
        Item::from_parts("D", 500, 4.5, 0.5).unwrap(),
    ]);
    let distribution = SamplingDistribution::new(&catalog).unwrap();
    let probabilities = distribution.probabilities();
    assert_eq!(probabilities.len(), 4);
    assert!((probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-12);

    // densities are 200, 50, 0, 100
    assert!((probabilities[0] - 200.0 / 350.0).abs() < 1e-12);
    assert!((probabilities[1] - 50.0 / 350.0).abs() < 1e-12);
    assert_eq!(probabilities[2], 0.0);
    assert!((probabilities[0] / probabilities[3] - 2.0).abs() < 1e-12);
}

#[test]
fn test_empty_catalog() {
    let err = SamplingDistribution::new(&Catalog::default()).unwrap_err();
    assert!(err.is_invalid_catalog());
}

#[test]
fn test_zero_density_catalog() {
    let catalog = Catalog::from_items(vec![
        Item::from_parts("Free", 0, 1.0, 0.5).unwrap(),
        Item::from_parts("Also free", 0, 0.0, 0.5).unwrap(),
    ]);
    let err = SamplingDistribution::new(&catalog).unwrap_err();
    assert!(err.is_invalid_catalog());
}
