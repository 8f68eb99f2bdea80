use serde_json::json;
use std::io::Write;
use topograph::{
    shared::Coordinate,
    source::{self, Config, TransportMode},
};

#[test]
fn stop_reads_nested_point() {
    let stops = source::parse_stops(vec![json!({
        "stop_id": "IDFM:22101",
        "stop_name": "Châtelet",
        "pointgeo": { "lat": 48.8583, "lon": 2.3470 },
    })]);
    assert_eq!(stops.len(), 1);
    assert_eq!(&*stops[0].id, "IDFM:22101");
    assert_eq!(stops[0].name.as_deref(), Some("Châtelet"));
    assert_eq!(stops[0].coordinate, Some(Coordinate::new(48.8583, 2.3470)));
}

#[test]
fn stop_reads_split_fields_as_text() {
    let stops = source::parse_stops(vec![json!({
        "stop_id": 22101,
        "stop_lat": "48.8583",
        "stop_lon": "2.3470",
        "id": "C01371",
        "nom_commune": "Paris",
    })]);
    assert_eq!(stops.len(), 1);
    assert_eq!(&*stops[0].id, "22101");
    assert_eq!(stops[0].name, None);
    assert_eq!(stops[0].coordinate, Some(Coordinate::new(48.8583, 2.3470)));
    assert_eq!(stops[0].line_id.as_deref(), Some("C01371"));
    assert_eq!(stops[0].city.as_deref(), Some("Paris"));
}

#[test]
fn stop_without_id_is_skipped() {
    let stops = source::parse_stops(vec![
        json!({ "stop_id": null, "stop_name": "Ghost" }),
        json!({ "stop_id": "", "stop_name": "Ghost" }),
        json!({ "stop_name": "Ghost" }),
        json!("not a record"),
        json!({ "stop_id": "A", "stop_name": { "unexpected": true } }),
    ]);
    assert_eq!(stops.len(), 1);
    assert_eq!(&*stops[0].id, "A");
    assert_eq!(stops[0].name, None);
}

#[test]
fn trace_reads_multi_line_string() {
    let traces = source::parse_traces(
        vec![json!({
            "id_ilico": "C01371",
            "route_short_name": "1",
            "shape": {
                "type": "Feature",
                "geometry": {
                    "type": "MultiLineString",
                    "coordinates": [
                        [[2.1, 48.1], [2.2, 48.2]],
                        [[2.3, 48.3, 35.0]],
                    ],
                },
            },
        })],
        &Config::default(),
    );
    assert_eq!(traces.len(), 1);
    assert_eq!(&*traces[0].route_id, "IDFM:C01371");
    assert_eq!(traces[0].short_name.as_deref(), Some("1"));
    assert_eq!(traces[0].segments.len(), 2);
    assert_eq!(traces[0].segments[0][1], Coordinate::new(48.2, 2.2));
    assert_eq!(traces[0].segments[1][0], Coordinate::new(48.3, 2.3));
}

#[test]
fn trace_reads_line_string_as_one_segment() {
    let traces = source::parse_traces(
        vec![json!({
            "id_ilico": "C01742",
            "shape": {
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[2.1, 48.1], [2.2, 48.2]],
                },
            },
        })],
        &Config::default(),
    );
    assert_eq!(traces.len(), 1);
    assert_eq!(traces[0].segments.len(), 1);
    assert_eq!(traces[0].short_name, None);
}

#[test]
fn malformed_trace_is_skipped_alone() {
    let geometry = json!({
        "type": "MultiLineString",
        "coordinates": [[[2.1, 48.1], [2.2, 48.2]]],
    });
    let traces = source::parse_traces(
        vec![
            json!({ "id_ilico": "A", "shape": { "geometry": { "type": "MultiLineString", "coordinates": [[[2.1]]] } } }),
            json!({ "id_ilico": "B", "shape": { "geometry": { "type": "Polygon", "coordinates": [] } } }),
            json!({ "id_ilico": "C" }),
            json!({ "id_ilico": null, "shape": { "geometry": geometry.clone() } }),
            json!({ "id_ilico": "", "shape": { "geometry": geometry.clone() } }),
            json!({ "id_ilico": "D", "shape": { "geometry": geometry } }),
        ],
        &Config::default(),
    );
    assert_eq!(traces.len(), 1);
    assert_eq!(&*traces[0].route_id, "IDFM:D");
}

#[test]
fn line_mode_detection() {
    assert_eq!(TransportMode::detect("metro", None), TransportMode::Metro);
    assert_eq!(
        TransportMode::detect("rail", Some("local")),
        TransportMode::Rer
    );
    assert_eq!(
        TransportMode::detect("rail", Some("regionalRail")),
        TransportMode::Ter
    );
    assert_eq!(
        TransportMode::detect("rail", Some("railShuttle")),
        TransportMode::Navette
    );
    assert_eq!(
        TransportMode::detect("rail", None),
        TransportMode::Transilien
    );
    assert_eq!(
        TransportMode::detect("funicular", None),
        TransportMode::Other("funicular".into())
    );
}

#[test]
fn lines_keep_metadata_and_skip_missing_ids() {
    let lines = source::parse_lines(vec![
        json!({
            "id_line": "C01371",
            "name_line": "1",
            "transportmode": "metro",
            "transportsubmode": "metro",
            "colourweb_hexa": "FFCD00",
            "textcolourweb_hexa": "000000",
        }),
        json!({ "id_line": null, "transportmode": "bus" }),
    ]);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].mode, TransportMode::Metro);
    assert_eq!(lines[0].background_color.as_deref(), Some("FFCD00"));

    let published = serde_json::to_value(&lines).unwrap();
    assert_eq!(published[0]["mode"], json!("metro"));
    assert_eq!(published[0]["id"], json!("C01371"));
}

#[test]
fn decode_rejects_non_array_payload() {
    assert!(source::decode(br#"[{"stop_id": "A"}]"#).is_ok());
    assert!(source::decode(br#"{"error": "quota"}"#).is_err());
    assert!(source::decode(b"[{").is_err());
}

#[test]
fn gtfs_stops_are_read_from_archive() {
    let path = std::env::temp_dir().join(format!("topograph-gtfs-{}.zip", std::process::id()));
    {
        let file = std::fs::File::create(&path).unwrap();
        let mut archive = zip::ZipWriter::new(file);
        archive
            .start_file("stops.txt", zip::write::SimpleFileOptions::default())
            .unwrap();
        archive
            .write_all(
                b"stop_id,stop_name,stop_lat,stop_lon,location_type\n\
                  S1,Nation,48.8483,2.3959,0\n\
                  S2,,48.8443,2.3739,0\n\
                  ,Nowhere,48.0,2.0,0\n\
                  S3,Broken,north,2.0,0\n",
            )
            .unwrap();
        archive.finish().unwrap();
    }

    let stops = source::gtfs::read_stops(&path, &Config::default()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(stops.len(), 2);
    assert_eq!(&*stops[0].id, "S1");
    assert_eq!(stops[0].name.as_deref(), Some("Nation"));
    assert_eq!(stops[0].coordinate, Some(Coordinate::new(48.8483, 2.3959)));
    assert_eq!(&*stops[1].id, "S2");
    assert_eq!(stops[1].name, None);
}

#[test]
fn gtfs_archive_without_stops_file_fails() {
    let path = std::env::temp_dir().join(format!(
        "topograph-gtfs-empty-{}.zip",
        std::process::id()
    ));
    {
        let file = std::fs::File::create(&path).unwrap();
        let mut archive = zip::ZipWriter::new(file);
        archive
            .start_file("agency.txt", zip::write::SimpleFileOptions::default())
            .unwrap();
        archive.write_all(b"agency_id\nA\n").unwrap();
        archive.finish().unwrap();
    }

    let result = source::gtfs::read_stops(&path, &Config::default());
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(result, Err(source::Error::FileNotFound(_))));
}
