use herocam::domain::composite::{
    geometry::{Dimensions, OverlayGeometry},
    params::{PlacementParams, Side},
};

const HERO: Dimensions = Dimensions::new(800, 1200);

#[test]
fn reference_portrait_placement() {
    let params = PlacementParams::new(Side::Right, 1.0, 30, 30, 1.0);
    let geometry = OverlayGeometry::compute(Dimensions::new(1080, 1920), HERO, &params);
    assert_eq!((geometry.width, geometry.height), (1024, 1536));
    assert_eq!((geometry.x, geometry.y), (26, 354));
}

#[test]
fn opacity_clamps_to_documented_bounds() {
    assert_eq!(PlacementParams::new(Side::Right, 1.0, 0, 0, 0.0).opacity(), 0.2);
    assert_eq!(PlacementParams::new(Side::Right, 1.0, 0, 0, 5.0).opacity(), 1.0);
}

#[test]
fn scale_clamps_to_documented_bounds() {
    assert_eq!(PlacementParams::new(Side::Right, 0.1, 0, 0, 1.0).scale(), 0.5);
    assert_eq!(PlacementParams::new(Side::Right, 10.0, 0, 0, 1.0).scale(), 2.0);
}

#[test]
fn landscape_photo_keeps_overlay_inside_frame() {
    let base = Dimensions::new(1920, 1080);
    for side in [Side::Left, Side::Right] {
        for scale in [0.5, 0.75, 1.0, 1.1] {
            for inset in [-500, 0, 30, 200, 5000] {
                let params = PlacementParams::new(side, scale, inset, inset, 1.0);
                let geometry = OverlayGeometry::compute(base, HERO, &params);
                assert!(
                    geometry.fits_within(base),
                    "{:?} escaped the frame for {:?}",
                    geometry,
                    params
                );
            }
        }
    }
}

#[test]
fn width_never_stretches_independently() {
    let base = Dimensions::new(640, 480);
    let params = PlacementParams::new(Side::Left, 1.0, 0, 0, 1.0);
    let geometry = OverlayGeometry::compute(base, Dimensions::new(300, 300), &params);
    assert_eq!(geometry.width, geometry.height);
    assert_eq!(geometry.height, 384);
}
