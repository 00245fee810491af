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

use crate::wedge::{wedge_ring, KM_PER_DEGREE};
use assets_common::{
    categories::{icon_url, radar_range_km, PlatformType, Status},
    error::AssetError,
    table::{AssetTable, Row},
};
use geojson::{Feature, FeatureCollection, Geometry, Value};
use itertools::Itertools;
use serde_json::Map;

const REQUIRED_COLUMNS: &[&str] = &[
    "AbbreviatedId",
    "DisplayTitle",
    "Status",
    "MHz",
    "StartAngle",
    "SpreadAngle",
    "Longitude",
    "Latitude",
];

/// Default styling for the coverage polygons.
pub fn polygon_style(overrides: &Map<String, serde_json::Value>) -> Map<String, serde_json::Value> {
    let mut style = Map::new();
    style.insert("stroke".to_string(), "#aeccae".into());
    style.insert("stroke_width".to_string(), 1.into());
    style.insert("stroke_opacity".to_string(), 0.5.into());
    style.insert("fill".to_string(), "#deffde".into());
    style.insert("fill_opacity".to_string(), 0.25.into());
    for (key, value) in overrides {
        style.insert(key.clone(), value.clone());
    }
    style
}

/// One point feature per radar site plus, where the wedge geometry is
/// well-defined, one coverage polygon. Points come first in the collection,
/// then all polygons. Rows group by status; an unknown status or frequency
/// band aborts the run, a degenerate wedge only drops that row's polygon.
pub fn hfradar_features(
    table: &AssetTable,
    overrides: &Map<String, serde_json::Value>,
) -> Result<FeatureCollection, AssetError> {
    table.require_columns(REQUIRED_COLUMNS)?;

    let style = polygon_style(overrides);

    let keyed: Vec<(String, Row)> = table
        .rows()
        .map(|row| Ok((row.get("Status")?.to_string(), row)))
        .collect::<Result<_, AssetError>>()?;

    let groups = keyed
        .into_iter()
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .group_by(|(status, _)| status.clone());

    let mut points = vec![];
    let mut polygons = vec![];
    for (status_label, group) in &groups {
        let status = Status::from_label(&status_label)?;
        let icon = icon_url(PlatformType::HfRadar.icon(), status.color());

        for (_, row) in group {
            let longitude = row.get_f64("Longitude")?;
            let latitude = row.get_f64("Latitude")?;
            let mhz = row.get_f64("MHz")? as i64;

            let mut properties = Map::new();
            properties.insert("icon".to_string(), icon.clone().into());
            properties.insert("name".to_string(), row.get("AbbreviatedId")?.into());
            properties.insert(
                "popupContent".to_string(),
                format!("{} ({} MHz)", row.get("DisplayTitle")?, row.get("MHz")?).into(),
            );

            points.push(Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![longitude, latitude]))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            });

            let radius = radar_range_km(mhz)? / KM_PER_DEGREE;
            let ring = wedge_ring(
                (longitude, latitude),
                radius,
                row.get_f64("StartAngle")?,
                row.get_f64("SpreadAngle")?,
            );
            if let Some(ring) = ring {
                polygons.push(Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
                    id: None,
                    properties: Some(style.clone()),
                    foreign_members: None,
                });
            }
        }
    }

    Ok(FeatureCollection {
        bbox: None,
        features: points.into_iter().chain(polygons).collect(),
        foreign_members: None,
    })
}
