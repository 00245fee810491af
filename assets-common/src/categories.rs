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

use crate::error::AssetError;

/// Where the map icons are hosted.
pub const ICON_BASE_URL: &str =
    "https://raw.githubusercontent.com/ocefpaf/secoora_assets_map/gh-pages/secoora_icons/";

/// Deployment status of an asset. Every status in the spreadsheet must be
/// one of these; anything else aborts the run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Planned,
    Operational,
    Permitting,
    Construction,
}

impl Status {
    pub fn from_label(label: &str) -> Result<Status, AssetError> {
        match label {
            "Planned" => Ok(Status::Planned),
            "Operational" => Ok(Status::Operational),
            "Permitting" => Ok(Status::Permitting),
            "Construction" => Ok(Status::Construction),
            other => Err(AssetError::UnknownStatus(other.to_string())),
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Status::Planned => "orange",
            Status::Operational => "green",
            Status::Permitting => "yellow",
            Status::Construction => "yellow",
        }
    }
}

/// Platform category of an asset row, mapped to the icon name used on the
/// assets map.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlatformType {
    FixedSurfaceBuoy,
    FixedBottomStation,
    FixedBottomMountMooring,
    FixedCoastalStation,
    HfRadar,
}

impl PlatformType {
    pub fn from_label(label: &str) -> Result<PlatformType, AssetError> {
        match label {
            "Fixed Surface Buoy" => Ok(PlatformType::FixedSurfaceBuoy),
            "Fixed Bottom Station" => Ok(PlatformType::FixedBottomStation),
            "Fixed Bottom Mount Mooring" => Ok(PlatformType::FixedBottomMountMooring),
            "Fixed Coastal Station" => Ok(PlatformType::FixedCoastalStation),
            "HFRadar" => Ok(PlatformType::HfRadar),
            other => Err(AssetError::UnknownPlatform(other.to_string())),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PlatformType::FixedSurfaceBuoy => "buoy",
            PlatformType::FixedBottomStation => "circ",
            PlatformType::FixedBottomMountMooring => "tri",
            PlatformType::FixedCoastalStation => "shore_station",
            PlatformType::HfRadar => "hfradar",
        }
    }
}

/// Nominal radar range in km by frequency band. The values came from the
/// operators' GMT script; the commented values are the older csv-to-gis
/// numbers.
pub fn radar_range_km(mhz: i64) -> Result<f64, AssetError> {
    match mhz {
        5 => Ok(190.0),  // 225
        8 => Ok(160.0),  // 175
        12 => Ok(130.0), // 124
        16 => Ok(100.0), // 100
        other => Err(AssetError::UnknownBand(other)),
    }
}

/// Icon URL for a platform icon name and status color, e.g.
/// `.../buoy-green.png`. Callers pass the mapped strings, never the raw
/// spreadsheet labels.
pub fn icon_url(platform_icon: &str, status_color: &str) -> String {
    format!("{}{}-{}.png", ICON_BASE_URL, platform_icon, status_color)
}
