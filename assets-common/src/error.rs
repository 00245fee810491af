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

use std::fmt;

/// Errors from loading asset tables and serializing the resulting
/// feature collections. Unknown category values are unrecoverable:
/// there is no sensible default icon, color, or radar range.
#[derive(Clone, Debug, PartialEq)]
pub enum AssetError {
    Io(String),
    Csv(String),
    Json(String),
    Shapefile(String),
    MissingColumn(String),
    BadValue { column: String, value: String },
    UnknownStatus(String),
    UnknownPlatform(String),
    UnknownBand(i64),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssetError::Io(msg) => write!(f, "io error: {}", msg),
            AssetError::Csv(msg) => write!(f, "csv error: {}", msg),
            AssetError::Json(msg) => write!(f, "json error: {}", msg),
            AssetError::Shapefile(msg) => write!(f, "shapefile error: {}", msg),
            AssetError::MissingColumn(column) => {
                write!(f, "spreadsheet is missing the column {}", column)
            }
            AssetError::BadValue { column, value } => {
                write!(f, "could not parse {} value {:?} as a number", column, value)
            }
            AssetError::UnknownStatus(status) => {
                write!(f, "unknown status {:?}, no color mapping", status)
            }
            AssetError::UnknownPlatform(platform) => {
                write!(f, "unknown platform type {:?}, no icon mapping", platform)
            }
            AssetError::UnknownBand(mhz) => {
                write!(f, "unknown radar frequency band {} MHz, no range mapping", mhz)
            }
        }
    }
}

impl std::error::Error for AssetError {}

impl From<std::io::Error> for AssetError {
    fn from(error: std::io::Error) -> Self {
        AssetError::Io(format!("{}", error))
    }
}

impl From<csv::Error> for AssetError {
    fn from(error: csv::Error) -> Self {
        AssetError::Csv(format!("{}", error))
    }
}
