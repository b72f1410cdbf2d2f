
extern crate zpoly;

use zpoly::{load_scene, load_scene_file, parse_polygon};
use zpoly::{Error, ParseError, Point, Rgb, Tokens, VertexFormat};

const TWO: &str = "
3
10 10
50 90
90 10
0.5 0.25 1
1 1 0 0 0

4
1 1
3 1
3 3
1 3
1 0 0
2 0.5 10 -5 90
";

#[test]
fn planar_records() {
    let polys = load_scene(TWO, VertexFormat::Planar);
    assert_eq!(polys.len(), 2);

    assert_eq!(polys[0].points(), &[Point::xy(10., 10.), Point::xy(50., 90.), Point::xy(90., 10.)]);
    assert_eq!(polys[0].color(), Rgb::new(0.5, 0.25, 1.0));

    assert_eq!(polys[1].points().len(), 4);
    assert_eq!(polys[1].scale(), (2.0, 0.5));
    assert_eq!(polys[1].translation(), (10.0, -5.0));
    assert_eq!(polys[1].rotation_degrees(), 90.0);
}

#[test]
fn spatial_records() {
    let text = "3  0 0 1.5  4 0 2.5  0 4 -1   0 1 0   1 1 0 0 0";
    let polys = load_scene(text, VertexFormat::Spatial);
    assert_eq!(polys.len(), 1);
    assert_eq!(polys[0].points()[0], Point::new(0., 0., 1.5));
    assert_eq!(polys[0].points()[2], Point::new(0., 4., -1.));

    // Read as planar, depths shift into the color and placement fields
    let polys = load_scene(text, VertexFormat::Planar);
    assert_eq!(polys.len(), 1);
    assert_eq!(polys[0].points()[1], Point::xy(1.5, 4.));
}

#[test]
fn truncated_record_ends_scene() {
    let mut text = String::from(TWO);
    text.push_str("3  0 0  1 0  0 1   1 1 1   1 1");
    assert_eq!(load_scene(&text, VertexFormat::Planar).len(), 2);
}

#[test]
fn bad_record_ends_scene() {
    let text = format!("{}\n3 0 0 1 zz 0 1 1 1 1 1 1 0 0 0\n{}", TWO, TWO);
    assert_eq!(load_scene(&text, VertexFormat::Planar).len(), 2);
}

#[test]
fn non_finite_numbers_end_scene() {
    for bad in &["nan", "NaN", "inf", "-inf", "infinity"] {
        let color = format!("{}\n3 0 0 4 0 0 4  {} 0 0  1 1 0 0 0\n{}", TWO, bad, TWO);
        assert_eq!(load_scene(&color, VertexFormat::Planar).len(), 2, "{}", bad);
        let vertex = format!("3 0 0 4 {} 0 4  1 0 0  1 1 0 0 0", bad);
        assert!(load_scene(&vertex, VertexFormat::Planar).is_empty(), "{}", bad);
    }
    let mut toks = Tokens::new("inf");
    assert_eq!(toks.number("rotation"),
               Err(ParseError::InvalidNumber { token: "inf".to_string(), expected: "rotation" }));
}

#[test]
fn parse_errors() {
    let mut toks = Tokens::new("3 0 0 1 0 0 1 1 0");
    assert_eq!(parse_polygon(&mut toks, VertexFormat::Planar),
               Err(ParseError::UnexpectedEof { expected: "blue" }));
    assert!(toks.is_exhausted());

    let mut toks = Tokens::new("3 0 0 1 zz");
    let err = parse_polygon(&mut toks, VertexFormat::Planar).unwrap_err();
    assert_eq!(err, ParseError::InvalidNumber { token: String::from("zz"), expected: "vertex y" });
    assert!(!err.is_eof());
    assert_eq!(toks.consumed(), 5);

    let mut toks = Tokens::new("-3 0 0");
    assert_eq!(parse_polygon(&mut toks, VertexFormat::Planar),
               Err(ParseError::InvalidVertexCount { token: String::from("-3") }));

    let mut toks = Tokens::new("");
    assert!(parse_polygon(&mut toks, VertexFormat::Planar).unwrap_err().is_eof());
}

#[test]
fn error_messages() {
    let err = ParseError::InvalidNumber { token: String::from("q"), expected: "red" };
    assert_eq!(err.to_string(), "invalid number \"q\", expected red");
    let err = ParseError::UnexpectedEof { expected: "rotation" };
    assert_eq!(err.to_string(), "unexpected end of input, expected rotation");
}

#[test]
fn scene_files() {
    std::fs::create_dir_all("tests/tmp").unwrap();
    std::fs::write("tests/tmp/two.scene", TWO).unwrap();
    let polys = load_scene_file("tests/tmp/two.scene", VertexFormat::Planar).unwrap();
    assert_eq!(polys.len(), 2);

    match load_scene_file("tests/tmp/does-not-exist.scene", VertexFormat::Planar) {
        Err(Error::Io { path, .. }) => assert!(path.ends_with("does-not-exist.scene")),
        other => panic!("expected io error, got {:?}", other),
    }
}
