
extern crate zpoly;

use zpoly::{Canvas, ConvexPolygon, DepthRenderer, DrawingSurface, Point, Rgb, Rgb8};
use zpoly::{SceneRenderer, Transform, VertexFormat};

fn square(x0: f64, y0: f64, x1: f64, y1: f64, z: f64) -> Vec<Point> {
    vec![Point::new(x0, y0, z), Point::new(x1, y0, z),
         Point::new(x1, y1, z), Point::new(x0, y1, z)]
}

fn red() -> Rgb { Rgb::new(1.0, 0.0, 0.0) }
fn blue() -> Rgb { Rgb::new(0.0, 0.0, 1.0) }

fn depth_renderer(w: usize, h: usize) -> DepthRenderer<Canvas> {
    let mut canvas = Canvas::new(w, h);
    canvas.clear(Rgb::white());
    DepthRenderer::new(canvas)
}

#[test]
fn nearer_polygon_wins_in_either_order() {
    let near = ConvexPolygon::with_points(square(1., 1., 2., 2., 1.0), red());
    let far = ConvexPolygon::with_points(square(1., 1., 2., 2., 2.0), blue());

    for (order, drawn) in [(vec![near.clone(), far.clone()], 1),
                           (vec![far.clone(), near.clone()], 2)].iter() {
        let ren = SceneRenderer::new(depth_renderer(4, 4), order.clone());
        let zren = ren.into_inner();
        assert_eq!(zren.depth_buffer()[(1, 1)], 1.0);
        assert_eq!(zren.depth_buffer()[(2, 2)], 1.0);
        assert_eq!(zren.depth_buffer()[(0, 0)], f64::INFINITY);
        let canvas = zren.surface();
        assert_eq!(canvas.drawables().len(), *drawn);
        for &(x, y) in &[(1, 1), (2, 1), (1, 2), (2, 2)] {
            assert_eq!(canvas.get(x, y), Rgb8::new(255, 0, 0));
        }
        assert_eq!(canvas.get(3, 3), Rgb8::white());
    }
}

#[test]
fn far_polygon_after_near_draws_nothing() {
    let mut zren = depth_renderer(4, 4);
    let mut near = ConvexPolygon::with_points(square(1., 1., 2., 2., 1.0), red());
    let mut far = ConvexPolygon::with_points(square(1., 1., 2., 2., 2.0), blue());
    assert_eq!(near.render(&mut zren), Some(0));
    assert_eq!(far.render(&mut zren), None);
    assert_eq!(far.render_id(), None);
}

#[test]
fn submitting_twice_changes_nothing() {
    let mut zren = depth_renderer(8, 8);
    let poly = ConvexPolygon::with_points(vec![Point::new(1.0, 1.0, 0.5),
                                               Point::new(6.0, 2.0, 3.0),
                                               Point::new(3.0, 6.0, 1.5)],
                                          red());
    let frags = poly.fragments();
    assert_eq!(zren.submit(&frags, red()), Some(0));
    let zbuf = zren.depth_buffer().clone();
    let pixels = zren.surface().as_bytes().to_vec();

    assert_eq!(zren.submit(&frags, blue()), None);
    assert_eq!(zren.depth_buffer(), &zbuf);
    assert_eq!(zren.surface().as_bytes(), &pixels[..]);
    assert_eq!(zren.surface().drawables().len(), 1);
}

#[test]
fn equal_depth_does_not_overwrite() {
    let mut zren = depth_renderer(4, 4);
    let pts = square(0., 0., 3., 3., 0.0);
    zren.submit(&zpoly::polygon_fill(&pts), red());
    zren.submit(&zpoly::polygon_fill(&pts), blue());
    assert_eq!(zren.surface().get(1, 1), Rgb8::new(255, 0, 0));
    assert_eq!(zren.depth_buffer()[(1, 1)], 0.0);
}

#[test]
fn only_winning_points_are_forwarded() {
    let mut zren = depth_renderer(4, 1);
    let t = Transform::new();
    let first = [Point::new(0., 0., 5.), Point::new(1., 0., 5.), Point::new(2., 0., 5.)];
    let second = [Point::new(0., 0., 6.), Point::new(1., 0., 4.), Point::new(3., 0., 9.)];
    zren.add_points(&first, red(), 1.0, &t);
    assert_eq!(zren.add_points(&second, blue(), 1.0, &t), Some(1));

    let d = &zren.surface().drawables()[1];
    assert_eq!(d.points, vec![Point::new(1., 0., 4.), Point::new(3., 0., 9.)]);
    assert_eq!(zren.depth_buffer().row(0), &[5.0, 4.0, 5.0, 9.0]);
}

#[test]
fn depth_test_uses_transformed_position() {
    let mut zren = depth_renderer(8, 1);
    let shift = Transform::new_translate(5.0, 0.0);
    assert_eq!(zren.add_points(&[Point::new(0., 0., 1.)], red(), 1.0, &shift), Some(0));
    assert_eq!(zren.depth_buffer()[(0, 5)], 1.0);
    assert_eq!(zren.depth_buffer()[(0, 0)], f64::INFINITY);
    assert_eq!(zren.surface().get(5, 0), Rgb8::new(255, 0, 0));

    assert_eq!(zren.add_points(&[Point::new(5., 0., 3.)], blue(), 1.0, &Transform::new()), None);
    assert_eq!(zren.surface().get(5, 0), Rgb8::new(255, 0, 0));
    assert_eq!(zren.surface().get(0, 0), Rgb8::white());

    let d = &zren.surface().drawables()[0];
    assert_eq!(d.points, vec![Point::new(5., 0., 1.)]);
    assert!(d.transform.is_identity());
}

#[test]
fn half_pixel_rounds_up_for_both_depth_and_color() {
    let mut zren = depth_renderer(2, 1);
    let pts = [Point::new(-0.5, 0., 1.), Point::new(0.5, 0., 2.)];
    assert_eq!(zren.add_points(&pts, red(), 1.0, &Transform::new()), Some(0));
    assert_eq!(zren.depth_buffer().row(0), &[1.0, 2.0]);
    assert_eq!(zren.surface().get(0, 0), Rgb8::new(255, 0, 0));
    assert_eq!(zren.surface().get(1, 0), Rgb8::new(255, 0, 0));
}

#[test]
fn points_outside_are_skipped() {
    let mut zren = depth_renderer(4, 4);
    let poly = ConvexPolygon::with_points(square(-2., -2., 1., 1., 0.0), red());
    assert_eq!(zren.submit(&poly.fragments(), red()), Some(0));
    assert_eq!(zren.surface().drawables()[0].points.len(), 4);
    assert_eq!(zren.depth_buffer()[(1, 1)], 0.0);
    assert_eq!(zren.depth_buffer()[(2, 2)], f64::INFINITY);
}

#[test]
fn empty_scene_draws_nothing() {
    for text in &["", "   \n\t", "not a scene", "3 0 0 1 0"] {
        let ren = SceneRenderer::from_text(depth_renderer(6, 4), text, VertexFormat::Planar);
        assert!(ren.polygons().is_empty());
        let zren = ren.into_inner();
        assert!(zren.depth_buffer().is_clear());
        assert_eq!(zren.depth_buffer().dims(), (4, 6));
        assert!(zren.surface().drawables().is_empty());
    }
}

#[test]
fn scene_with_depth() {
    let text = "
        4   0 0 2   7 0 2   7 7 2   0 7 2
        0 0 1
        1 1 0 0 0

        3   2 2 1   5 2 1   2 5 1
        1 0 0
        1 1 0 0 0
    ";
    let ren = SceneRenderer::from_text(depth_renderer(8, 8), text, VertexFormat::Spatial);
    assert_eq!(ren.polygons().len(), 2);
    assert_eq!(ren.polygons()[1].render_id(), Some(1));
    let canvas = ren.into_inner().into_inner();
    assert_eq!(canvas.get(3, 3), Rgb8::new(255, 0, 0));
    assert_eq!(canvas.get(6, 6), Rgb8::new(0, 0, 255));
    assert_eq!(canvas.get(2, 5), Rgb8::new(255, 0, 0));
}
