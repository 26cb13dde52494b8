//! RGB ↔ CMY and CMY ↔ CMYK (subtractive device models).

/// `C = 1 − R, M = 1 − G, Y = 1 − B`.
pub fn rgb_to_cmy(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(|c| 1.0 - c)
}

/// `R = 1 − C, G = 1 − M, B = 1 − Y`.
pub fn cmy_to_rgb(cmy: [f64; 3]) -> [f64; 3] {
    cmy.map(|c| 1.0 - c)
}

/// Extract the key (black) channel from CMY.
///
/// ```text
/// K  = min(1, C, M, Y)
/// C' = (C − K) / (1 − K)      (0 when K = 1)
/// ```
///
/// Output order is `[C', M', Y', K]`. Pure black (`K = 1`) loses its
/// chromatic channels.
pub fn cmy_to_cmyk(cmy: [f64; 3]) -> [f64; 4] {
    let [c, m, y] = cmy;
    let k = 1.0_f64.min(c).min(m).min(y);

    if k == 1.0 {
        return [0.0, 0.0, 0.0, k];
    }

    let scale = 1.0 - k;
    [(c - k) / scale, (m - k) / scale, (y - k) / scale, k]
}

/// Fold the key channel back into CMY: `C = C'(1 − K) + K`.
pub fn cmyk_to_cmy(cmyk: [f64; 4]) -> [f64; 3] {
    let [c, m, y, k] = cmyk;
    let scale = 1.0 - k;
    [c * scale + k, m * scale + k, y * scale + k]
}
