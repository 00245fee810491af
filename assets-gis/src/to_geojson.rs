/*
 * Copyright 2019 Boyd Johnson
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use assets_common::error::AssetError;
use geojson::FeatureCollection;
use std::io::Write;

/// Write the collection as GeoJSON with deterministic formatting: object
/// keys sorted, 2-space indentation. Going through `serde_json::Value`
/// sorts the keys (its map is ordered by key), so identical collections
/// serialize to identical bytes.
pub fn write_geojson<W: Write>(
    collection: &FeatureCollection,
    write: W,
) -> Result<(), AssetError> {
    let value = serde_json::to_value(collection)
        .map_err(|e| AssetError::Json(format!("during geojson serialization: {}", e)))?;
    serde_json::to_writer_pretty(write, &value)
        .map_err(|e| AssetError::Json(format!("during geojson write: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::{Feature, GeoJson, Geometry, Value};
    use serde_json::Map;

    fn buoy_collection() -> FeatureCollection {
        let mut properties = Map::new();
        properties.insert("name".to_string(), "Buoy1".into());

        FeatureCollection {
            bbox: None,
            features: vec![Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![-80.5, 28.3]))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }],
            foreign_members: None,
        }
    }

    #[test]
    fn test_sorted_keys_and_two_space_indent() {
        let mut output = vec![];
        write_geojson(&buoy_collection(), &mut output).unwrap();

        let expected = "{\n  \"features\": [\n    {\n      \"geometry\": {\n        \"coordinates\": [\n          -80.5,\n          28.3\n        ],\n        \"type\": \"Point\"\n      },\n      \"properties\": {\n        \"name\": \"Buoy1\"\n      },\n      \"type\": \"Feature\"\n    }\n  ],\n  \"type\": \"FeatureCollection\"\n}";
        assert_eq!(std::str::from_utf8(&output).unwrap(), expected);
    }

    #[test]
    fn test_repeated_runs_are_byte_identical() {
        let mut first = vec![];
        let mut second = vec![];
        write_geojson(&buoy_collection(), &mut first).unwrap();
        write_geojson(&buoy_collection(), &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_round_trip() {
        let collection = buoy_collection();

        let mut output = vec![];
        write_geojson(&collection, &mut output).unwrap();

        let parsed = std::str::from_utf8(&output)
            .expect("Output was utf-8")
            .parse::<GeoJson>()
            .expect("Output was valid geojson");

        match parsed {
            GeoJson::FeatureCollection(parsed) => {
                assert_eq!(parsed.features, collection.features);
            }
            other => panic!("Expected a feature collection, got {:?}", other),
        }
    }
}
