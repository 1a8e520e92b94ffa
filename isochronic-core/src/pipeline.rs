//! End-to-end construction of an isochronic map from a road network

use log::info;

use crate::algo::center::locate_center;
use crate::algo::extent::{Extent, trim_extent};
use crate::algo::isochrone::{BandAssignment, Isochrone, assign_bands, validate_isochrones};
use crate::algo::scale::{bird_distances, scale_factor};
use crate::algo::warp::warp_network;
use crate::routing::{SolverOptions, TravelTimes, solve_travel_times};
use crate::{Error, NodeId, RoadNetwork};

/// Parameters of one map run
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Latitude of the desired center
    pub lat: f64,
    /// Longitude of the desired center
    pub lon: f64,
    /// Travel-time zones, cutoffs strictly ascending
    pub isochrones: Vec<Isochrone>,
    /// Share of extreme coordinates left out of the display frame, per side
    pub outlier_fraction: f64,
    pub solver: SolverOptions,
}

/// Everything a renderer needs: the warped network, the node bands and the frame
#[derive(Debug, Clone)]
pub struct IsochronicMap {
    pub network: RoadNetwork,
    pub center: NodeId,
    pub travel_times: TravelTimes,
    pub scale_factor: f64,
    pub extent: Extent,
    pub bands: BandAssignment,
    /// Nodes dropped as unreachable from the center
    pub removed: usize,
    /// Nodes that shared the center's planar position and were not moved
    pub coincident: Vec<NodeId>,
}

/// Runs the whole transform: center lookup, travel times, scaling, warping,
/// extent trimming and banding.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the network is empty,
/// or the network is too degenerate to derive a scale factor
pub fn build_isochronic_map(network: RoadNetwork, config: &MapConfig) -> Result<IsochronicMap, Error> {
    validate_config(config)?;

    let center = locate_center(&network, config.lat, config.lon)?;
    info!(
        "Center node {center} for query ({}, {})",
        config.lat, config.lon
    );

    let travel_times = solve_travel_times(&network, center, &config.solver)?;
    let bird = bird_distances(&network, center)?;
    let scale_factor = scale_factor(&bird, &travel_times)?;

    let warped = warp_network(network, center, &travel_times, &bird, scale_factor)?;
    let extent = trim_extent(&warped.network, config.outlier_fraction)?;
    info!(
        "Display extent x [{:.1}, {:.1}], y [{:.1}, {:.1}]",
        extent.min_x, extent.max_x, extent.min_y, extent.max_y
    );

    let bands = assign_bands(&warped.network, center, &config.isochrones)?;

    Ok(IsochronicMap {
        network: warped.network,
        center,
        travel_times,
        scale_factor,
        extent,
        bands,
        removed: warped.removed,
        coincident: warped.coincident,
    })
}

fn validate_config(config: &MapConfig) -> Result<(), Error> {
    if !config.lat.is_finite() || !config.lon.is_finite() {
        return Err(Error::InvalidData(format!(
            "Center coordinates must be finite, got ({}, {})",
            config.lat, config.lon
        )));
    }

    if !(0.0..0.5).contains(&config.outlier_fraction) {
        return Err(Error::InvalidData(format!(
            "Outlier fraction must be in [0, 0.5), got {}",
            config.outlier_fraction
        )));
    }

    if let Some(bound) = config.solver.max_travel_time
        && (!bound.is_finite() || bound <= 0.0)
    {
        return Err(Error::InvalidData(format!(
            "Maximum travel time must be positive, got {bound}"
        )));
    }

    validate_isochrones(&config.isochrones)
}
