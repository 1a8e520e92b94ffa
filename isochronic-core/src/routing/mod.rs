//! Shortest travel-time search from the map center

pub mod dijkstra;
mod travel_times;

pub use dijkstra::dijkstra_travel_times;
pub use travel_times::{RouteError, SolverOptions, SolverStrategy, TravelTimes, solve_travel_times};
