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

use assets_common::{error::AssetError, table::AssetTable};
use clap::{
    crate_authors, crate_description, crate_name, crate_version, App, Arg, ArgMatches, SubCommand,
};
use serde_json::Map;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process::exit;

mod hfradar;
mod stations;
mod to_geojson;
mod to_shapefile;
mod wedge;

use to_shapefile::ShapeKind;

fn main() {
    let args = parse_args();

    if let Some(args) = args.subcommand_matches("stations") {
        let input = args.value_of("input").expect("input is required");
        let geojson = args.value_of("geojson").expect("geojson has a default");
        let shapefile = args.value_of("shapefile").expect("shapefile has a default");

        if let Err(e) = run_stations(
            Path::new(input),
            Path::new(geojson),
            Path::new(shapefile),
        ) {
            writeln!(std::io::stderr(), "Error: {}", e).expect("Unable to write to stderr");
            exit(1);
        }
    } else if let Some(args) = args.subcommand_matches("hfradar") {
        let input = args.value_of("input").expect("input is required");
        let geojson = args.value_of("geojson").expect("geojson has a default");
        let points = args
            .value_of("point-shapefile")
            .expect("point-shapefile has a default");
        let polygons = args
            .value_of("polygon-shapefile")
            .expect("polygon-shapefile has a default");

        if let Err(e) = run_hfradar(
            Path::new(input),
            Path::new(geojson),
            Path::new(points),
            Path::new(polygons),
        ) {
            writeln!(std::io::stderr(), "Error: {}", e).expect("Unable to write to stderr");
            exit(1);
        }
    } else if let Some(args) = args.subcommand_matches("all") {
        let stations = args.value_of("stations").expect("stations is required");
        let hfradar = args.value_of("hfradar").expect("hfradar is required");
        let out_dir = args.value_of("out-dir").expect("out-dir has a default");

        if let Err(e) = run_all(Path::new(stations), Path::new(hfradar), Path::new(out_dir)) {
            writeln!(std::io::stderr(), "Error: {}", e).expect("Unable to write to stderr");
            exit(1);
        }
    } else {
        println!("{}", args.usage());
        exit(1);
    }
}

fn run_stations(input: &Path, geojson: &Path, shapefile: &Path) -> Result<(), AssetError> {
    let table = AssetTable::from_path(input)?;
    let collection = stations::stations_features(&table)?;

    let file = File::create(geojson)?;
    to_geojson::write_geojson(&collection, BufWriter::new(file))?;
    to_shapefile::write_shapefile(&collection, shapefile, ShapeKind::Point)?;
    Ok(())
}

fn run_hfradar(
    input: &Path,
    geojson: &Path,
    point_shapefile: &Path,
    polygon_shapefile: &Path,
) -> Result<(), AssetError> {
    let table = AssetTable::from_path(input)?;
    let collection = hfradar::hfradar_features(&table, &Map::new())?;

    let file = File::create(geojson)?;
    to_geojson::write_geojson(&collection, BufWriter::new(file))?;
    to_shapefile::write_shapefile(&collection, point_shapefile, ShapeKind::Point)?;
    to_shapefile::write_shapefile(&collection, polygon_shapefile, ShapeKind::Polygon)?;
    Ok(())
}

fn run_all(stations: &Path, hfradar: &Path, out_dir: &Path) -> Result<(), AssetError> {
    std::fs::create_dir_all(out_dir)?;

    run_stations(
        stations,
        &out_dir.join("stations.geojson"),
        &out_dir.join("stations.shp"),
    )?;
    run_hfradar(
        hfradar,
        &out_dir.join("hfradar.geojson"),
        &out_dir.join("hfradar_point.shp"),
        &out_dir.join("hfradar_polygon.shp"),
    )?;
    Ok(())
}

fn parse_args<'a>() -> ArgMatches<'a> {
    App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .subcommands(vec![
            stations_subcommand(),
            hfradar_subcommand(),
            all_subcommand(),
        ])
        .get_matches()
}

fn stations_subcommand<'a>() -> App<'a, 'a> {
    SubCommand::with_name("stations")
        .about("converts a station assets spreadsheet to GeoJSON and a point shapefile")
        .arg(
            Arg::with_name("input")
                .required(true)
                .help("csv export of the station assets spreadsheet"),
        )
        .arg(
            Arg::with_name("geojson")
                .long("geojson")
                .takes_value(true)
                .number_of_values(1)
                .default_value("stations.geojson")
                .help("output GeoJSON file"),
        )
        .arg(
            Arg::with_name("shapefile")
                .long("shapefile")
                .takes_value(true)
                .number_of_values(1)
                .default_value("stations.shp")
                .help("output point shapefile"),
        )
}

fn hfradar_subcommand<'a>() -> App<'a, 'a> {
    SubCommand::with_name("hfradar")
        .about("converts an hf-radar sites spreadsheet to GeoJSON and shapefiles")
        .arg(
            Arg::with_name("input")
                .required(true)
                .help("csv export of the hf-radar sites spreadsheet"),
        )
        .arg(
            Arg::with_name("geojson")
                .long("geojson")
                .takes_value(true)
                .number_of_values(1)
                .default_value("hfradar.geojson")
                .help("output GeoJSON file"),
        )
        .arg(
            Arg::with_name("point-shapefile")
                .long("point-shapefile")
                .takes_value(true)
                .number_of_values(1)
                .default_value("hfradar_point.shp")
                .help("output shapefile with the site locations"),
        )
        .arg(
            Arg::with_name("polygon-shapefile")
                .long("polygon-shapefile")
                .takes_value(true)
                .number_of_values(1)
                .default_value("hfradar_polygon.shp")
                .help("output shapefile with the coverage areas"),
        )
}

fn all_subcommand<'a>() -> App<'a, 'a> {
    SubCommand::with_name("all")
        .about("converts both spreadsheets in one run")
        .arg(
            Arg::with_name("stations")
                .long("stations")
                .required(true)
                .takes_value(true)
                .number_of_values(1)
                .help("csv export of the station assets spreadsheet"),
        )
        .arg(
            Arg::with_name("hfradar")
                .long("hfradar")
                .required(true)
                .takes_value(true)
                .number_of_values(1)
                .help("csv export of the hf-radar sites spreadsheet"),
        )
        .arg(
            Arg::with_name("out-dir")
                .long("out-dir")
                .takes_value(true)
                .number_of_values(1)
                .default_value("data")
                .help("directory for the output files"),
        )
}
