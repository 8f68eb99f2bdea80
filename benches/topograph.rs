use criterion::{Criterion, criterion_group, criterion_main};
use std::{hint::black_box, time::Duration};
use topograph::{
    prelude::*,
    topology::{build_infrastructure, extract_variants},
};

const LINES: usize = 60;
const STOPS_PER_LINE: usize = 40;

fn coordinate(line: usize, stop: usize, platform: usize) -> Coordinate {
    Coordinate::new(
        48.5 + line as f64 * 0.01 + platform as f64 * 0.0002,
        2.0 + stop as f64 * 0.01,
    )
}

fn stop_id(line: usize, stop: usize, platform: usize) -> Id {
    format!("IDFM:{line}-{stop}-{platform}").into()
}

/// Every line has two platforms per station, both named after the station.
fn synthetic_stops() -> Vec<StopRecord> {
    (0..LINES)
        .flat_map(|line| {
            (0..STOPS_PER_LINE).flat_map(move |stop| {
                (0..2).map(move |platform| StopRecord {
                    id: stop_id(line, stop, platform),
                    name: Some(format!("Station {line}-{stop}").into()),
                    coordinate: Some(coordinate(line, stop, platform)),
                    line_id: None,
                    city: None,
                })
            })
        })
        .collect()
}

/// One full run per direction plus a short turn back service.
fn synthetic_traces() -> Vec<TraceRecord> {
    (0..LINES)
        .map(|line| {
            let forward: Vec<Coordinate> = (0..STOPS_PER_LINE)
                .map(|stop| coordinate(line, stop, 0))
                .collect();
            let backward: Vec<Coordinate> = (0..STOPS_PER_LINE)
                .rev()
                .map(|stop| coordinate(line, stop, 1))
                .collect();
            let short_turn: Vec<Coordinate> = (STOPS_PER_LINE / 4..STOPS_PER_LINE / 2)
                .map(|stop| coordinate(line, stop, 0))
                .collect();
            TraceRecord {
                route_id: format!("IDFM:C{line:05}").into(),
                short_name: Some(line.to_string().into()),
                segments: vec![forward, backward, short_turn],
            }
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let stops = synthetic_stops();
    let traces = synthetic_traces();
    let metro_routes: MetroRouteSet = (0..LINES)
        .filter(|line| line % 2 == 0)
        .map(|line| format!("IDFM:C{line:05}"))
        .collect();
    let repository = match Repository::new().load_stops(&stops) {
        Ok(repository) => repository.with_metro_routes(metro_routes),
        Err(err) => {
            println!("Failed to build repository: {err}");
            return;
        }
    };
    let raw = extract_variants(&traces, &repository.stops);

    let mut group = c.benchmark_group("Topology");

    group.warm_up_time(Duration::from_secs(5));

    group.measurement_time(Duration::from_secs(15));

    group.bench_function("Stop index", |b| {
        b.iter(|| black_box(Repository::new().load_stops(&stops)))
    });

    group.bench_function("Extract variants", |b| {
        b.iter(|| black_box(extract_variants(&traces, &repository.stops)))
    });

    group.bench_function("Infrastructure", |b| {
        b.iter(|| {
            for route_id in raw.route_ids() {
                if let Some(variants) = raw.variants_by_route_id(route_id) {
                    black_box(build_infrastructure(variants));
                }
            }
        })
    });

    group.bench_function("Full build", |b| {
        b.iter(|| black_box(Topology::build(&repository, &traces)))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
