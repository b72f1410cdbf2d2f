
#[test]
fn t00_example() {
    use zpoly::DrawingSurface;

    // Create a blank image 100x100 pixels
    let mut canvas = zpoly::Canvas::new(100, 100);
    canvas.clear(zpoly::Rgb::white());

    // Draw a polygon from (10,10) - (50,90) - (90,10)
    let mut tri = zpoly::ConvexPolygon::with_points(vec![zpoly::Point::xy(10.0, 10.0),
                                                         zpoly::Point::xy(50.0, 90.0),
                                                         zpoly::Point::xy(90.0, 10.0)],
                                                    zpoly::Rgb::black());

    // Render with the depth test in front of the image
    let mut ren = zpoly::DepthRenderer::new(canvas);
    assert_eq!(tri.render(&mut ren), Some(0));
    let canvas = ren.into_inner();
    assert_eq!(canvas.drawables().len(), 1);
    assert_eq!(canvas.get(50, 50), zpoly::Rgb8::black());
    assert_eq!(canvas.get(5, 5), zpoly::Rgb8::white());
    assert_eq!(canvas.get(89, 89), zpoly::Rgb8::white());

    // Save the image to a file
    std::fs::create_dir_all("tests/tmp").unwrap();
    canvas.to_file("tests/tmp/little_black_triangle.png").unwrap();

    // Surfaces can also be used directly, without a depth test
    let mut plain = zpoly::Canvas::new(4, 4);
    let n = plain.add_points(&[zpoly::Point::xy(1.0, 1.0)], zpoly::Rgb::white(),
                             1.0, &zpoly::Transform::new());
    assert_eq!(n, Some(0));
}
