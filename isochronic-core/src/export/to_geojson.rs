use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use crate::{Error, IsochronicMap, RoadEdge, RoadNode};

impl IsochronicMap {
    /// Converts the warped network to a `GeoJSON` `FeatureCollection`.
    ///
    /// Nodes become `Point` features carrying their band label (`"none"` when
    /// unassigned), edges become `LineString` features, and the trimmed
    /// display extent is stored as the collection's `bbox`.
    pub fn to_geojson(&self) -> Result<FeatureCollection, Error> {
        let mut features = Vec::with_capacity(self.network.node_count() + self.network.edge_count());

        for (from, to, edge) in self.network.edges() {
            features.push(edge_feature(from, to, edge)?);
        }
        for node in self.network.nodes() {
            features.push(self.node_feature(node)?);
        }

        Ok(FeatureCollection {
            features,
            bbox: Some(self.extent.to_bbox()),
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }

    fn node_feature(&self, node: &RoadNode) -> Result<Feature, Error> {
        let value = json!({
            "type": "Feature",
            "geometry": Geometry::new(GeoJsonValue::from(&node.position)),
            "properties": {
                "feature_type": "node",
                "id": node.id,
                "street_count": node.street_count,
                "travel_time": self.travel_times.get(&node.id),
                "band": self.bands.band_index(node.id),
                "label": self.bands.label(node.id),
                "is_center": node.id == self.center,
            }
        });

        serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

fn edge_feature(from: &RoadNode, to: &RoadNode, edge: &RoadEdge) -> Result<Feature, Error> {
    let value = json!({
        "type": "Feature",
        "geometry": Geometry::new(GeoJsonValue::from(&edge.geometry)),
        "properties": {
            "feature_type": "edge",
            "from": from.id,
            "to": to.id,
            "travel_time": edge.travel_time,
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}
