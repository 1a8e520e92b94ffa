//! Band colors sampled from the plasma colormap

/// Plasma colormap at 0, 0.25, 0.5, 0.75 and 1
const PLASMA_STOPS: [[u8; 3]; 5] = [
    [13, 8, 135],
    [126, 3, 168],
    [204, 71, 120],
    [248, 149, 64],
    [240, 249, 33],
];

/// `count` evenly spaced plasma colors as `#rrggbb`, dark purple first
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn plasma(count: usize) -> Vec<String> {
    let segments = (PLASMA_STOPS.len() - 1) as f64;
    (0..count)
        .map(|idx| {
            let t = if count > 1 {
                idx as f64 / (count - 1) as f64
            } else {
                0.0
            };
            let scaled = t * segments;
            let lower = (scaled.floor() as usize).min(PLASMA_STOPS.len() - 2);
            let frac = scaled - lower as f64;
            let [r, g, b] = [0, 1, 2].map(|channel| {
                let from = f64::from(PLASMA_STOPS[lower][channel]);
                let to = f64::from(PLASMA_STOPS[lower + 1][channel]);
                (from + (to - from) * frac).round() as u8
            });
            format!("#{r:02x}{g:02x}{b:02x}")
        })
        .collect()
}
