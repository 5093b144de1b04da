//! Integration test: a mixed collection of figures rendered as a report.
//!
//! Builds one figure of every kind through the facade crate, both directly
//! and through the generic constructor, and checks the rendered lines.

use approx::assert_relative_eq;

use planimetry::{
    Circle, Figure, FigureKind, Kite, Parallelogram, Planar, Rectangle, Rhombus, Square, Trapeze,
    Triangle,
};

fn sample_figures() -> Vec<Figure> {
    vec![
        Square::new("S1", 4.0).unwrap().into(),
        Rectangle::new("R1", 3.0, 5.0).unwrap().into(),
        Parallelogram::new("P1", 3.0, 6.0, 2.0).unwrap().into(),
        Triangle::new("T1", 3.0, 4.0, 5.0, 4.0).unwrap().into(),
        Trapeze::new("Tz1", 2.0, 4.0, 3.0, 3.0, 5.0).unwrap().into(),
        Rhombus::new("Rh1", 5.0, 6.0, 8.0).unwrap().into(),
        Kite::new("K1", 5.0, 6.0, 10.0, 7.0).unwrap().into(),
        Circle::new("C1", 2.0).unwrap().into(),
    ]
}

#[test]
fn test_report_lines_for_every_kind() {
    let lines: Vec<String> = sample_figures().iter().map(|f| f.to_string()).collect();
    let expected = [
        "S1            => Area......:     16.00000 Perimeter:     16.00000",
        "R1            => Area......:     15.00000 Perimeter:     16.00000",
        "P1            => Area......:     12.00000 Perimeter:     18.00000",
        "T1            => Area......:      8.00000 Perimeter:     12.00000",
        "Tz1           => Area......:     17.50000 Perimeter:     12.00000",
        "Rh1           => Area......:     24.00000 Perimeter:     20.00000",
        "K1            => Area......:     30.00000 Perimeter:     24.00000",
        "C1            => Area......:     12.56637 Perimeter:     12.56637",
    ];
    assert_eq!(lines, expected);
}

#[test]
fn test_kinds_cover_the_catalogue() {
    let kinds: Vec<FigureKind> = sample_figures().iter().map(Figure::kind).collect();
    assert_eq!(kinds, FigureKind::ALL.to_vec());
}

#[test]
fn test_large_values_use_thousands_separators() {
    let sq = Square::new("Big", 1234.5).unwrap();
    assert_relative_eq!(sq.area(), 1_523_990.25);
    assert_eq!(
        sq.to_string(),
        "Big           => Area......: 1,523,990.25000 Perimeter:  4,938.00000"
    );
}

#[test]
fn test_total_area_of_collection() {
    let total: f64 = sample_figures().iter().map(|f| f.area()).sum();
    assert_relative_eq!(
        total,
        16.0 + 15.0 + 12.0 + 8.0 + 17.5 + 24.0 + 30.0 + 4.0 * std::f64::consts::PI,
        epsilon = 1e-9
    );
}
