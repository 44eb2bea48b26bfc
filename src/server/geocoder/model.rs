//! Wire format of the geocoding collaborator.
//!
//! Only the fields the client unpacks are modeled; the collaborator sends far more.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct GeocoderResponse {
    pub response: GeocoderResponseBody,
}

#[derive(Serialize, Deserialize)]
pub struct GeocoderResponseBody {
    #[serde(rename = "GeoObjectCollection")]
    pub geo_object_collection: GeoObjectCollection,
}

#[derive(Serialize, Deserialize)]
pub struct GeoObjectCollection {
    /// Matches ordered by relevance; empty when the address is unknown
    #[serde(rename = "featureMember", default)]
    pub feature_member: Vec<FeatureMember>,
}

#[derive(Serialize, Deserialize)]
pub struct FeatureMember {
    #[serde(rename = "GeoObject")]
    pub geo_object: GeoObject,
}

#[derive(Serialize, Deserialize)]
pub struct GeoObject {
    #[serde(rename = "Point")]
    pub point: Point,
}

#[derive(Serialize, Deserialize)]
pub struct Point {
    /// Two space-separated numbers, longitude first then latitude
    pub pos: String,
}
