use serde::Deserialize;

/// Node row; extra columns are ignored
#[derive(Debug, Deserialize)]
pub struct RawNode {
    pub osmid: i64,
    pub lat: f64,
    pub lon: f64,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub street_count: u32,
}

/// Edge row; `travel_time` is in seconds
#[derive(Debug, Deserialize)]
pub struct RawEdge {
    pub u: i64,
    pub v: i64,
    pub travel_time: f64,
}
