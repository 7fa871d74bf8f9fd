use super::*;
use std::fs::File;

fn get_coordinates(points: &[Point]) -> Vec<(i32, i32)> {
    points.iter().map(|point| (point.x as i32, point.y as i32)).collect()
}

#[test]
fn can_read_json_points() {
    let points = read_points(BufReader::new(File::open("tests/data/square.json").unwrap()), JSON_FORMAT).unwrap();

    assert_eq!(get_coordinates(points.as_slice()), vec![(0, 0), (10, 0), (10, 10), (0, 10)]);
}

#[cfg(feature = "csv-format")]
#[test]
fn can_read_csv_points() {
    let points = read_points(BufReader::new(File::open("tests/data/square.csv").unwrap()), CSV_FORMAT).unwrap();

    assert_eq!(get_coordinates(points.as_slice()), vec![(0, 0), (10, 0), (10, 10), (0, 10)]);
}

#[cfg(feature = "csv-format")]
#[test]
fn can_reject_non_finite_points() {
    let data = "x,y\n1,1\nNaN,0\n2,inf\n";

    let result = read_points(BufReader::new(data.as_bytes()), CSV_FORMAT);

    let error = result.err().expect("non-finite points should be rejected").to_string();
    assert!(error.contains("point #1"));
    assert!(error.contains("point #2"));
    assert!(!error.contains("point #0"));
}

#[test]
fn can_return_error_for_unknown_format() {
    let result = read_points(BufReader::new("[]".as_bytes()), "xml");

    assert_eq!(result.err(), Some(GenericError::from("unknown points format: 'xml'")));
}

#[test]
fn can_return_error_for_malformed_json() {
    let result = read_points(BufReader::new(r#"[{ "x": 1 }]"#.as_bytes()), JSON_FORMAT);

    assert!(result.err().map_or(false, |err| err.to_string().starts_with("cannot read json points")));
}

#[cfg(feature = "csv-format")]
#[test]
fn can_write_csv_points_readable_back() {
    let points = vec![Point::new(1.5, 2.), Point::new(-3., 4.25)];
    let mut buffer = Vec::new();

    write_points(BufWriter::new(&mut buffer), points.as_slice(), CSV_FORMAT).unwrap();

    assert!(String::from_utf8(buffer.clone()).unwrap().starts_with("x,y\n1.5,"));
    assert_eq!(read_points(BufReader::new(buffer.as_slice()), CSV_FORMAT).unwrap(), points);
}

#[test]
fn can_write_solution() {
    let mut builder = TourBuilder::default();
    builder.add_points(vec![Point::new(0., 0.), Point::new(3., 4.)], InsertionMode::Nearest);
    let mut buffer = Vec::new();

    write_solution(BufWriter::new(&mut buffer), &TourSolution::new(InsertionMode::Nearest, &builder)).unwrap();

    let solution: TourSolution = serde_json::from_slice(buffer.as_slice()).unwrap();
    assert_eq!(solution.mode, InsertionMode::Nearest);
    assert_eq!(solution.length, 10.);
    assert_eq!(solution.tour, vec![Point::new(0., 0.), Point::new(3., 4.)]);
}
