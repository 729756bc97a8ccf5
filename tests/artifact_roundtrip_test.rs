// SPDX-License-Identifier: Apache-2.0

//! End-to-end checks on the view artifacts: CSV write/read round-trips and
//! the non-fatal skip of views whose sequences do not line up.

use pretty_assertions::assert_eq;

use cellsize_driver::artifact::{write_view, write_view_csv};
use cellsize_driver::report::parse_report;
use cellsize_driver::trend::read_view_csv;

#[test]
fn csv_round_trip_preserves_pairs() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("add.sum.csv");

    let widths = vec![5, 5, 9, 12, 5];
    let gates = vec![17, 21, 40, 77, 17];
    write_view_csv(&path, &widths, &gates).unwrap();

    let (xs, ys) = read_view_csv(&path).unwrap();
    assert_eq!(xs, widths);
    assert_eq!(ys, gates);
}

#[test]
fn csv_layout_is_headerless_two_column() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("mux.y.csv");

    write_view_csv(&path, &[1, 2], &[3, 4]).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "1,3\n2,4\n");
}

#[test]
fn mismatched_view_is_skipped_without_artifacts() {
    let tmp = tempfile::tempdir().unwrap();

    let written = write_view(tmp.path(), "lut", "max_inp", &[1, 2, 3], &[10, 20], "$lut").unwrap();
    assert!(!written);
    assert!(!tmp.path().join("lut.max_inp.csv").exists());
    assert!(!tmp.path().join("lut.max_inp.png").exists());
}

#[test]
fn inputless_cell_still_produces_other_views() {
    // A cell with no input ports has an empty max-input aggregate; that view
    // is skipped but the y and sum views still apply.
    let mut report = String::new();
    for gates in [3, 5] {
        report.push_str(&format!("   Number of cells:                 {}\n", gates));
        report.push_str("  wire output 1 \\Y\n");
    }
    let sweep = parse_report(&report, 2).unwrap();

    let tmp = tempfile::tempdir().unwrap();
    let skipped = write_view(
        tmp.path(),
        "const",
        "max_inp",
        &sweep.max_input_widths(),
        &sweep.gate_counts,
        "$const",
    )
    .unwrap();
    assert!(!skipped);

    let y_path = tmp.path().join("const.y.csv");
    write_view_csv(&y_path, &sweep.y_widths, &sweep.gate_counts).unwrap();
    let (xs, ys) = read_view_csv(&y_path).unwrap();
    assert_eq!(xs, vec![1, 1]);
    assert_eq!(ys, vec![3, 5]);
}

#[test]
fn parsed_report_round_trips_through_csv() {
    let mut report = String::new();
    for gates in [12, 15, 99] {
        report.push_str(&format!("   Number of cells:                 {}\n", gates));
        report.push_str("  wire width 4 input 1 \\A\n");
        report.push_str("  wire output 2 \\Y\n");
    }
    let sweep = parse_report(&report, 3).unwrap();
    assert_eq!(sweep.port_width_sums(), vec![5, 5, 5]);

    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("add.max_inp.csv");
    write_view_csv(&path, &sweep.max_input_widths(), &sweep.gate_counts).unwrap();

    let (xs, ys) = read_view_csv(&path).unwrap();
    assert_eq!(xs, vec![4, 4, 4]);
    assert_eq!(ys, vec![12, 15, 99]);
}
