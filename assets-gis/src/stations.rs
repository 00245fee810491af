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

use assets_common::{
    categories::{icon_url, PlatformType, Status},
    error::AssetError,
    table::{AssetTable, Row},
};
use geojson::{Feature, FeatureCollection, Geometry, Value};
use itertools::Itertools;
use serde_json::Map;

const REQUIRED_COLUMNS: &[&str] = &[
    "PlatformType",
    "Status",
    "Name",
    "LocationDescription",
    "Longitude",
    "Latitude",
];

/// One point feature per station row, grouped by platform type and status.
/// Groups are ordered by their labels; rows keep spreadsheet order within a
/// group.
pub fn stations_features(table: &AssetTable) -> Result<FeatureCollection, AssetError> {
    table.require_columns(REQUIRED_COLUMNS)?;

    let keyed: Vec<((String, String), Row)> = table
        .rows()
        .map(|row| {
            let key = (
                row.get("PlatformType")?.to_string(),
                row.get("Status")?.to_string(),
            );
            Ok((key, row))
        })
        .collect::<Result<_, AssetError>>()?;

    let groups = keyed
        .into_iter()
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .group_by(|(key, _)| key.clone());

    let mut features = vec![];
    for ((platform_label, status_label), group) in &groups {
        let platform = PlatformType::from_label(&platform_label)?;
        let status = Status::from_label(&status_label)?;
        let icon = icon_url(platform.icon(), status.color());

        for (_, row) in group {
            let mut properties = Map::new();
            properties.insert("icon".to_string(), icon.clone().into());
            properties.insert("name".to_string(), row.get("Name")?.into());
            properties.insert(
                "popupContent".to_string(),
                row.get("LocationDescription")?.into(),
            );

            let geometry = Geometry::new(Value::Point(vec![
                row.get_f64("Longitude")?,
                row.get_f64("Latitude")?,
            ]));

            features.push(Feature {
                bbox: None,
                geometry: Some(geometry),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            });
        }
    }

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}
