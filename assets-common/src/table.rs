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
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// An asset spreadsheet (csv export) held in memory. The tables are small
/// and hand-maintained, so everything is read up front and the expected
/// columns are checked once before any row is processed.
pub struct AssetTable {
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl AssetTable {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<AssetTable, AssetError> {
        let file = File::open(path)?;
        AssetTable::from_reader(file)
    }

    pub fn from_reader<R: Read>(read: R) -> Result<AssetTable, AssetError> {
        let mut reader = csv::ReaderBuilder::new().from_reader(read);
        let headers = reader
            .headers()
            .map_err(|e| AssetError::Csv(format!("during read of csv headers: {}", e)))?
            .clone();
        let mut records = vec![];
        for row in reader.records() {
            records.push(row?);
        }
        Ok(AssetTable { headers, records })
    }

    /// Fails with the name of the first expected column that the
    /// spreadsheet does not have.
    pub fn require_columns(&self, columns: &[&str]) -> Result<(), AssetError> {
        for column in columns {
            if !self.headers.iter().any(|h| h == *column) {
                return Err(AssetError::MissingColumn((*column).to_string()));
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        let headers = &self.headers;
        self.records.iter().map(move |record| Row { headers, record })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One spreadsheet row with access to fields by column name.
#[derive(Clone, Copy)]
pub struct Row<'a> {
    headers: &'a StringRecord,
    record: &'a StringRecord,
}

impl<'a> Row<'a> {
    pub fn get(&self, column: &str) -> Result<&'a str, AssetError> {
        let index = self
            .headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| AssetError::MissingColumn(column.to_string()))?;
        self.record
            .get(index)
            .ok_or_else(|| AssetError::MissingColumn(column.to_string()))
    }

    pub fn get_f64(&self, column: &str) -> Result<f64, AssetError> {
        let raw = self.get(column)?;
        raw.parse().map_err(|_| AssetError::BadValue {
            column: column.to_string(),
            value: raw.to_string(),
        })
    }
}
