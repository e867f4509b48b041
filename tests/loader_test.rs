//! Loading and rendering tests against files on disk.

use image::Rgb;
use polyplot::{render, LineLoader, PlotError, ZoomFactor, CANVAS_HEIGHT, CANVAS_WIDTH};
use std::io::Write;
use tempfile::NamedTempFile;

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

fn write_temp_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_two_lines_with_zoom_two() {
    let lines = LineLoader::new(ZoomFactor::new(2.0))
        .load_path(test_data_path("two_lines.csv"))
        .unwrap();

    let values: Vec<_> = lines.iter().map(|l| l.values().to_vec()).collect();
    assert_eq!(
        values,
        vec![vec![0.0, 0.0, 10.0, 10.0], vec![2.0, 2.0, 4.0, 16.0]]
    );

    let canvas = render(&lines);
    assert_eq!(canvas.pixel(5, 5), Some(BLACK));
    assert_eq!(canvas.pixel(500, 500), Some(WHITE));
}

#[test]
fn test_default_zoom_scales_by_ten() {
    let lines = LineLoader::default()
        .load_path(test_data_path("two_lines.csv"))
        .unwrap();
    assert_eq!(lines[0].values(), &[0.0, 0.0, 50.0, 50.0]);
    assert_eq!(lines[1].values(), &[10.0, 10.0, 20.0, 80.0]);
}

#[test]
fn test_square_with_quotes_and_blank_row() {
    let lines = LineLoader::new(ZoomFactor::new(1.0))
        .load_path(test_data_path("square.csv"))
        .unwrap();

    assert_eq!(lines.len(), 4);
    assert!(lines[2].is_empty());
    assert_eq!(lines[0].values(), &[0.0, 0.0, 10.0, 0.0]);

    let canvas = render(&lines);
    assert_eq!(canvas.pixel(5, 0), Some(BLACK));
    assert_eq!(canvas.pixel(10, 5), Some(BLACK));
    assert_eq!(canvas.pixel(0, 5), Some(BLACK));
    assert_eq!(canvas.pixel(5, 5), Some(WHITE));
}

#[test]
fn test_empty_file_still_renders_full_canvas() {
    let lines = LineLoader::default()
        .load_path(test_data_path("empty.csv"))
        .unwrap();
    assert!(lines.is_empty());

    let canvas = render(&lines);
    assert_eq!(canvas.width(), CANVAS_WIDTH);
    assert_eq!(canvas.height(), CANVAS_HEIGHT);
    assert!(canvas.as_image().pixels().all(|p| *p == WHITE));
}

#[test]
fn test_non_numeric_file_fails() {
    let err = LineLoader::default()
        .load_path(test_data_path("non_numeric.csv"))
        .unwrap_err();
    assert!(matches!(err, PlotError::InvalidNumber { row: 2, field: 2, .. }));
}

#[test]
fn test_temp_file_with_exact_multiplication() {
    let file = write_temp_csv("0.1,0.2,0.3\n");
    let zoom = ZoomFactor::new(3.0);
    let lines = LineLoader::new(zoom).load_path(file.path()).unwrap();
    assert_eq!(lines[0].values(), &[0.1 * 3.0, 0.2 * 3.0, 0.3 * 3.0]);
}

#[test]
fn test_many_rows_keep_file_order() {
    let contents: String = (0..100).map(|i| format!("{},{}\n", i, i + 1)).collect();
    let file = write_temp_csv(&contents);

    let lines = LineLoader::new(ZoomFactor::new(1.0))
        .load_path(file.path())
        .unwrap();
    assert_eq!(lines.len(), 100);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(line.values(), &[i as f64, (i + 1) as f64]);
    }
}

#[test]
fn test_directory_is_not_a_readable_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = LineLoader::default().load_path(dir.path()).unwrap_err();
    assert!(matches!(err, PlotError::FileAccess { .. }));
}
