use itertools::Itertools;

use crate::{Error, RoadNetwork};

/// Display frame of the warped network
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Extent {
    /// `[min_x, min_y, max_x, max_y]`, the GeoJSON bbox order
    pub fn to_bbox(&self) -> Vec<f64> {
        vec![self.min_x, self.min_y, self.max_x, self.max_y]
    }
}

/// Bounding box that leaves out the `outlier_fraction` most extreme node
/// positions on each side of each axis.
///
/// Axes are trimmed independently: with `n` nodes and
/// `cut = floor(n * outlier_fraction)` the box spans from the `cut`-th
/// smallest to the `cut`-th largest coordinate. Nodes are not removed.
///
/// # Errors
///
/// Returns `EmptyNetwork` for a network without nodes and `InvalidData`
/// unless `0 <= outlier_fraction < 0.5`
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn trim_extent(network: &RoadNetwork, outlier_fraction: f64) -> Result<Extent, Error> {
    if !(0.0..0.5).contains(&outlier_fraction) {
        return Err(Error::InvalidData(format!(
            "Outlier fraction must be in [0, 0.5), got {outlier_fraction}"
        )));
    }
    if network.is_empty() {
        return Err(Error::EmptyNetwork);
    }

    let count = network.node_count();
    let cut = (count as f64 * outlier_fraction).floor() as usize;
    let low = cut.min(count - 1);
    let high = count - 1 - low;

    let xs = network
        .nodes()
        .map(|node| node.position.x())
        .sorted_by(f64::total_cmp)
        .collect_vec();
    let ys = network
        .nodes()
        .map(|node| node.position.y())
        .sorted_by(f64::total_cmp)
        .collect_vec();

    Ok(Extent {
        min_x: xs[low],
        max_x: xs[high],
        min_y: ys[low],
        max_y: ys[high],
    })
}
