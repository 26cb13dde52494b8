use tincture_core::illuminants::{Observer, illuminant_chromaticity};
use tincture_core::{ColourArray, ColourError, KeyKind};
use tincture_optimal::{
    LocusConfig, is_within_macadam_limits, macadam_illuminants, macadam_locus, within_macadam_limits,
};

#[test]
fn test_is_within_macadam_limits() {
    assert!(is_within_macadam_limits([0.3205, 0.4131, 0.51], "A").unwrap());
    assert!(!is_within_macadam_limits([0.0005, 0.0031, 0.001], "A").unwrap());
    assert!(is_within_macadam_limits([0.4325, 0.3788, 0.1034], "C").unwrap());
    assert!(!is_within_macadam_limits([0.0025, 0.0088, 0.034], "C").unwrap());
}

#[test]
fn test_whitepoint_is_inside_at_mid_luminance() {
    for &label in macadam_illuminants() {
        let [x, y] = illuminant_chromaticity(Observer::Cie1931TwoDegree, label).unwrap();
        for luminance in [0.05, 0.5, 0.9] {
            assert!(
                is_within_macadam_limits([x, y, luminance], label).unwrap(),
                "{label} whitepoint at Y = {luminance}"
            );
        }
    }
}

#[test]
fn test_boundary_separates_nearby_points() {
    for &label in macadam_illuminants() {
        let locus = macadam_locus(label).unwrap();
        let [wx, wy] = locus.levels().last().unwrap().vertices[0];
        let boundary = locus.boundary_at(0.5).unwrap();
        for [vx, vy] in boundary {
            let inside = [wx + (vx - wx) * 0.97, wy + (vy - wy) * 0.97, 0.5];
            let outside = [wx + (vx - wx) * 1.03, wy + (vy - wy) * 1.03, 0.5];
            assert!(is_within_macadam_limits(inside, label).unwrap(), "{label} {inside:?}");
            assert!(!is_within_macadam_limits(outside, label).unwrap(), "{label} {outside:?}");
        }
    }
}

#[test]
fn test_built_in_loci_follow_standard_config() {
    let levels = LocusConfig::STANDARD.levels;
    for &label in macadam_illuminants() {
        let locus = macadam_locus(label).unwrap();
        assert_eq!(locus.levels().len(), levels);
        assert_eq!(locus.levels()[0].luminance, 1.0 / levels as f64);
    }
}

#[test]
fn test_out_of_range_luminance_is_outside() {
    for &label in macadam_illuminants() {
        for luminance in [0.0, -0.1, 1.01, f64::NAN] {
            assert!(!is_within_macadam_limits([0.33, 0.33, luminance], label).unwrap());
        }
    }
}

#[test]
fn test_unknown_illuminant_is_rejected() {
    let err = is_within_macadam_limits([0.3205, 0.4131, 0.51], "B").unwrap_err();
    assert_eq!(
        err,
        ColourError::UnknownKey {
            kind: KeyKind::MacAdamLocus,
            key: "B".to_string()
        }
    );
}

#[test]
fn test_batch_matches_scalar_for_every_shape() {
    let pixels = [
        [0.3205, 0.4131, 0.51],
        [0.0005, 0.0031, 0.001],
        [0.4325, 0.3788, 0.1034],
        [0.0025, 0.0088, 0.034],
        [0.33, 0.33, 0.5],
        [0.33, 0.33, 1.5],
    ];
    let expected: Vec<bool> = pixels
        .iter()
        .map(|&xyy| is_within_macadam_limits(xyy, "C").unwrap())
        .collect();

    let flat = ColourArray::from_pixels(&pixels);
    assert_eq!(within_macadam_limits(&flat, "C").unwrap(), expected);

    let cube = flat.reshape([2, 3, 3]).unwrap();
    assert_eq!(within_macadam_limits(&cube, "C").unwrap(), expected);
}

#[test]
fn test_limits_are_safe_to_share_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| is_within_macadam_limits([0.4325, 0.3788, 0.1034], "C")))
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().unwrap());
    }
}
