//! Conversion of finished maps into formats external renderers read

mod to_geojson;
