//! CSV → appData.json 変換の統合テスト

use std::path::Path;
use tempfile::tempdir;
use wine_converter::{export, pipeline};
use wine_converter_common::{to_json, AppData};

const HEADER: &str = "id,referralId,name,producer,originCountry,region,grapeType,wineType,harvest,alcoholLevel,agingProcess,harmonization,tasteDescription";

fn write_csv(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("CSV書き込み失敗");
    path
}

#[test]
fn test_convert_full_catalog() {
    let dir = tempdir().expect("Failed to create temp dir");
    let csv = format!(
        "{}\n{}\n{}\n{}\n",
        HEADER,
        "7798145140141,1,\"Norton  Reserva\",Bodega Norton,Argentina,Mendoza,Malbec,Tinto,Safra 2019,14%,12 meses,\"Carnes vermelhas\n\nMassas\",Frutas negras",
        ",,,Produtor sem vinho,,,,,,,,,",
        "3760245210066,2,Château Test,Maison,França,Bordeaux,Merlot,Tinto,2018,13.5%,,,"
    );
    let input = write_csv(dir.path(), "vinhos.csv", &csv);

    let conversion = pipeline::convert_file(&input, true).expect("変換失敗");
    let data = &conversion.data;

    assert_eq!(conversion.input_rows, 3);
    assert_eq!(data.wine.len(), 2);
    assert_eq!(data.steak.len(), 4);
    assert_eq!(data.sommelier_suggestions.len(), 3);

    let norton = &data.wine[0];
    assert_eq!(norton.id, Some(7798145140141));
    assert_eq!(norton.name, "Norton Reserva");
    assert_eq!(norton.harvest, Some(2019));
    assert_eq!(norton.harmonization, "Carnes vermelhas\nMassas");

    let chateau = &data.wine[1];
    assert_eq!(chateau.origin_country, "França");
    assert!((chateau.alcohol_level.unwrap() - 0.135).abs() < 1e-12);
    assert_eq!(chateau.aging_process, "");
}

#[test]
fn test_convert_reordered_headers() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = write_csv(
        dir.path(),
        "reordered.csv",
        "NAME , Harvest,ID\nCarménère,2017,99\n",
    );

    let data = pipeline::convert_file(&input, true).unwrap().data;
    assert_eq!(data.wine.len(), 1);
    assert_eq!(data.wine[0].name, "Carménère");
    assert_eq!(data.wine[0].harvest, Some(2017));
    assert_eq!(data.wine[0].id, Some(99));
}

#[test]
fn test_convert_renamed_headers_use_positions() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = write_csv(
        dir.path(),
        "renamed.csv",
        "codigo,ref,vinho,produtor\n10,20,Tannat,Pisano\n",
    );

    let data = pipeline::convert_file(&input, true).unwrap().data;
    assert_eq!(data.wine[0].id, Some(10));
    assert_eq!(data.wine[0].referral_id, Some(20));
    assert_eq!(data.wine[0].name, "Tannat");
    assert_eq!(data.wine[0].producer, "Pisano");
}

#[test]
fn test_convert_without_headers() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = write_csv(dir.path(), "raw.csv", "1,,Syrah\n2,,Pinot\n");

    let with_headers = pipeline::convert_file(&input, true).unwrap();
    assert_eq!(with_headers.data.wine.len(), 1);

    let without_headers = pipeline::convert_file(&input, false).unwrap();
    assert_eq!(without_headers.data.wine.len(), 2);
    assert_eq!(without_headers.data.wine[0].name, "Syrah");
}

#[test]
fn test_header_only_file_keeps_static_lists() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = write_csv(dir.path(), "empty.csv", &format!("{}\n", HEADER));

    let data = pipeline::convert_file(&input, true).unwrap().data;
    assert!(data.wine.is_empty());
    assert_eq!(data.steak.len(), 4);
    assert_eq!(data.sommelier_suggestions.len(), 3);
}

#[test]
fn test_write_app_data_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = write_csv(
        dir.path(),
        "vinhos.csv",
        &format!("{}\n1,2,Alvarinho,Soalheiro,Portugal,Monção e Melgaço,Alvarinho,Branco,2021,12.5%,,Peixes,\n", HEADER),
    );
    let data = pipeline::convert_file(&input, true).unwrap().data;

    let output = export::output_path(Some(dir.path().join("out").as_path()), "appData.json");
    export::write_app_data(&data, &output).expect("書き込み失敗");

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, to_json(&data).unwrap());
    // 非ASCII文字はエスケープしない
    assert!(written.contains("Monção e Melgaço"));
    assert!(written.contains("\n  \"steak\": ["));

    let loaded: AppData = serde_json::from_str(&written).unwrap();
    assert_eq!(loaded, data);
}
