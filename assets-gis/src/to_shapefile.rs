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
use geojson::{Feature, FeatureCollection, Value};
use shapefile::dbase::{FieldValue, Record, TableWriterBuilder};
use shapefile::{PolygonRing, Writer};
use std::convert::TryInto;
use std::path::Path;

const NAME_LENGTH: u8 = 80;

/// Which features of the collection a shapefile holds. A shapefile stores a
/// single geometry type, so the radar collection is exported twice.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShapeKind {
    Point,
    Polygon,
}

/// Write the features whose geometry matches `kind` as a shapefile.
///
/// CAVEAT: this is a lossy conversion. Only the `name` property is carried
/// over, capped at 80 characters; a feature without one gets its position
/// in the collection as its name.
pub fn write_shapefile<P: AsRef<Path>>(
    collection: &FeatureCollection,
    path: P,
    kind: ShapeKind,
) -> Result<(), AssetError> {
    let table = TableWriterBuilder::new().add_character_field(
        "name".try_into().expect("name is a valid dbase field name"),
        NAME_LENGTH,
    );
    let mut writer = Writer::from_path(path, table)
        .map_err(|e| AssetError::Shapefile(format!("during shapefile create: {}", e)))?;

    for (index, feature) in collection.features.iter().enumerate() {
        let geometry = match &feature.geometry {
            Some(geometry) => geometry,
            None => continue,
        };
        match (kind, &geometry.value) {
            (ShapeKind::Point, Value::Point(position)) => {
                let (x, y) = match position.as_slice() {
                    [x, y, ..] => (*x, *y),
                    _ => {
                        return Err(AssetError::Shapefile(format!(
                            "feature {} has a point without two coordinates",
                            index
                        )));
                    }
                };
                writer
                    .write_shape_and_record(
                        &shapefile::Point::new(x, y),
                        &name_record(feature, index),
                    )
                    .map_err(|e| {
                        AssetError::Shapefile(format!("during shapefile write: {}", e))
                    })?;
            }
            (ShapeKind::Polygon, Value::Polygon(rings)) => {
                if rings.is_empty() {
                    return Err(AssetError::Shapefile(format!(
                        "feature {} has a polygon without rings",
                        index
                    )));
                }
                let mut shape_rings = Vec::with_capacity(rings.len());
                for (ring_index, ring) in rings.iter().enumerate() {
                    let points = ring
                        .iter()
                        .map(|position| match position.as_slice() {
                            [x, y, ..] => Ok(shapefile::Point::new(*x, *y)),
                            _ => Err(AssetError::Shapefile(format!(
                                "feature {} has a ring coordinate without two values",
                                index
                            ))),
                        })
                        .collect::<Result<Vec<_>, AssetError>>()?;
                    if ring_index == 0 {
                        shape_rings.push(PolygonRing::Outer(points));
                    } else {
                        shape_rings.push(PolygonRing::Inner(points));
                    }
                }
                writer
                    .write_shape_and_record(
                        &shapefile::Polygon::with_rings(shape_rings),
                        &name_record(feature, index),
                    )
                    .map_err(|e| {
                        AssetError::Shapefile(format!("during shapefile write: {}", e))
                    })?;
            }
            _ => {}
        }
    }

    Ok(())
}

fn name_record(feature: &Feature, index: usize) -> Record {
    let name = feature
        .properties
        .as_ref()
        .and_then(|properties| properties.get("name"))
        .and_then(|value| value.as_str())
        .map(|name| name.to_string())
        .unwrap_or_else(|| index.to_string());
    let name: String = name.chars().take(NAME_LENGTH as usize).collect();

    let mut record = Record::default();
    record.insert("name".to_string(), FieldValue::Character(Some(name)));
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::Geometry;
    use serde_json::Map;
    use shapefile::Shape;
    use std::path::PathBuf;

    fn point_feature(x: f64, y: f64, name: Option<&str>) -> Feature {
        let mut properties = Map::new();
        if let Some(name) = name {
            properties.insert("name".to_string(), name.into());
        }
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![x, y]))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }

    fn polygon_feature() -> Feature {
        let ring = vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, 1.0],
            vec![0.0, 0.0],
        ];
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
            id: None,
            properties: Some(Map::new()),
            foreign_members: None,
        }
    }

    fn mixed_collection() -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: vec![
                point_feature(-80.5, 28.3, Some("Alpha")),
                point_feature(-81.0, 29.0, None),
                polygon_feature(),
            ],
            foreign_members: None,
        }
    }

    fn temp_shapefile(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{}.shp", name))
    }

    fn read_names(path: &PathBuf) -> Vec<(Shape, String)> {
        let mut reader = shapefile::Reader::from_path(path).expect("shapefile opens");
        let mut out = vec![];
        for result in reader.iter_shapes_and_records() {
            let (shape, record) = result.expect("record reads");
            match record.get("name") {
                Some(FieldValue::Character(Some(name))) => out.push((shape, name.clone())),
                other => panic!("Expected a character name field, got {:?}", other),
            }
        }
        out
    }

    #[test]
    fn test_point_export_keeps_only_points_and_names() {
        let path = temp_shapefile("assets_gis_test_points");
        write_shapefile(&mixed_collection(), &path, ShapeKind::Point).unwrap();

        let records = read_names(&path);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|(shape, _)| matches!(shape, Shape::Point(_))));
        assert_eq!(records[0].1, "Alpha");
        // Feature without a name falls back to its position in the
        // collection.
        assert_eq!(records[1].1, "1");
    }

    #[test]
    fn test_polygon_export_keeps_only_polygons() {
        let path = temp_shapefile("assets_gis_test_polygons");
        write_shapefile(&mixed_collection(), &path, ShapeKind::Polygon).unwrap();

        let records = read_names(&path);
        assert_eq!(records.len(), 1);
        assert!(matches!(records[0].0, Shape::Polygon(_)));
        // Index within the full collection, points included.
        assert_eq!(records[0].1, "2");
    }

    #[test]
    fn test_names_are_capped_at_80_characters() {
        let long_name = "x".repeat(100);
        let collection = FeatureCollection {
            bbox: None,
            features: vec![point_feature(0.0, 0.0, Some(&long_name))],
            foreign_members: None,
        };

        let path = temp_shapefile("assets_gis_test_long_names");
        write_shapefile(&collection, &path, ShapeKind::Point).unwrap();

        let records = read_names(&path);
        assert_eq!(records[0].1.len(), 80);
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let path = std::env::temp_dir()
            .join("assets_gis_no_such_directory")
            .join("out.shp");

        let result = write_shapefile(&mixed_collection(), &path, ShapeKind::Point);
        assert!(matches!(result, Err(AssetError::Shapefile(_))));
    }

    #[test]
    fn test_polygon_without_rings_is_an_error() {
        let collection = FeatureCollection {
            bbox: None,
            features: vec![Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Polygon(vec![]))),
                id: None,
                properties: None,
                foreign_members: None,
            }],
            foreign_members: None,
        };

        let path = temp_shapefile("assets_gis_test_empty_polygon");
        let result = write_shapefile(&collection, &path, ShapeKind::Polygon);
        assert!(matches!(result, Err(AssetError::Shapefile(_))));
    }
}
