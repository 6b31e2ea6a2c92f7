// Host-side tests for the color field generator.

use glam::DVec3;
use mosaic_core::{
    compute_tile_color, light_blend, normal_blend, ChannelWaves, FrameField, Grid, Rgb8,
    VisualMode,
};

#[test]
fn tile_color_is_pure() {
    for &(t, x, y) in &[(0.0, 0.0, 0.0), (31_415.9, 0.25, 0.75), (-8_000.0, 0.9, 0.1)] {
        for mode in [VisualMode::Normal, VisualMode::Light] {
            let a = compute_tile_color(t, x, y, mode);
            let b = compute_tile_color(t, x, y, mode);
            assert_eq!(a, b, "t={t} x={x} y={y} {mode:?}");
        }
    }
}

#[test]
fn frame_field_matches_one_off_lookup() {
    let field = FrameField::at(45_000.0);
    let grid = Grid::for_surface(240.0, 120.0);
    for tile in grid.tiles() {
        assert_eq!(
            field.tile_color(tile.x, tile.y, VisualMode::Normal),
            compute_tile_color(45_000.0, tile.x, tile.y, VisualMode::Normal)
        );
    }
}

#[test]
fn light_mode_uses_only_the_second_wave() {
    let field = FrameField::at(12_000.0);
    for &(x, y) in &[(0.1, 0.2), (0.5, 0.5), (0.8, 0.3)] {
        let w = field.waves(x, y);
        let expected = Rgb8::from_unit(w.second * 0.68 + 0.32);
        assert_eq!(field.tile_color(x, y, VisualMode::Light), expected);

        let scrambled = ChannelWaves {
            first: DVec3::new(0.9, 0.1, 0.4),
            second: w.second,
            third: DVec3::ZERO,
        };
        assert_eq!(light_blend(&scrambled), light_blend(&w));
    }
}

#[test]
fn normal_mode_extremes() {
    let ones = ChannelWaves {
        first: DVec3::ONE,
        second: DVec3::ONE,
        third: DVec3::ONE,
    };
    assert_eq!(normal_blend(&ones), DVec3::ONE);
    assert_eq!(Rgb8::from_unit(normal_blend(&ones)), Rgb8::new(255, 255, 255));

    let zeros = ChannelWaves {
        first: DVec3::ZERO,
        second: DVec3::ZERO,
        third: DVec3::ZERO,
    };
    assert_eq!(normal_blend(&zeros), DVec3::ZERO);
}

#[test]
fn light_mode_never_drops_below_floor() {
    let floor = (0.32_f64 * 255.0).floor() as u8;
    for i in 0..200 {
        let t = i as f64 * 997.0;
        let (x, y) = ((i % 10) as f64 / 10.0, (i % 7) as f64 / 7.0);
        let c = compute_tile_color(t, x, y, VisualMode::Light);
        assert!(c.r >= floor && c.g >= floor && c.b >= floor, "{c:?} at t={t}");
    }
}

#[test]
fn rotation_offsets_follow_the_two_minute_period() {
    let a = FrameField::at(1_000.0).rotation_offsets();
    let b = FrameField::at(121_000.0).rotation_offsets();
    for (oa, ob) in a.iter().zip(b.iter()) {
        assert!((*oa - *ob).length() < 1e-9);
    }
    let start = FrameField::at(0.0).rotation_offsets();
    assert!(start[0].x.abs() < 1e-12 && (start[0].y - 1.0).abs() < 1e-12);
    assert!((start[2].x - 1.0).abs() < 1e-12, "third offset leads by a quarter turn");
}

#[test]
fn waves_stay_in_unit_range() {
    let field = FrameField::at(-77_777.0);
    let grid = Grid::for_surface(480.0, 480.0);
    for tile in grid.tiles() {
        let w = field.waves(tile.x, tile.y);
        for v in [w.first, w.second, w.third] {
            assert!(v.min_element() >= 0.0 && v.max_element() <= 1.0, "{v:?}");
        }
    }
}

#[test]
fn g1_frequency_multiplier_cycles_every_24_seconds() {
    assert!(FrameField::at(0.0).g1_freq_mult().abs() < 1e-12);
    assert!((FrameField::at(6_000.0).g1_freq_mult() - 1.0).abs() < 1e-12);
    assert!((FrameField::at(18_000.0).g1_freq_mult() + 1.0).abs() < 1e-12);
    let a = FrameField::at(3_000.0).g1_freq_mult();
    let b = FrameField::at(27_000.0).g1_freq_mult();
    assert!((a - b).abs() < 1e-9);
}
