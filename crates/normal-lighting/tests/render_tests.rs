//! Tests for frame and sweep rendering.

use normal_lighting::{
    render_frame, render_frame_with, render_lights, render_sweep, Channel, DVec3, LightError,
    LightSweep, LightVector, LitColorSource, MaterialModel, PixelGrid, PixelLightingCache, Rgb8,
    Uncached,
};

/// Deterministic pseudo-random pixels (LCG), avoiding the all-128 normal.
fn noise_pixels(count: usize, seed: u32, normal: bool) -> Vec<Rgb8> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (state >> 24) as u8
    };
    (0..count)
        .map(|_| {
            // Quantize to a small palette so colors repeat across the grid.
            let r = next() & 0xC0;
            let g = next() & 0xC0;
            let b = next() & 0xC0;
            if normal {
                [r, g, b | 0x81]
            } else {
                [r, g, b]
            }
        })
        .collect()
}

fn noise_grid(width: u32, height: u32, seed: u32, normal: bool) -> PixelGrid {
    PixelGrid::new(
        width,
        height,
        noise_pixels((width * height) as usize, seed, normal),
    )
    .unwrap()
}

fn overhead() -> LightVector {
    LightVector::new(DVec3::new(0.3, -0.2, 1.0)).unwrap()
}

mod frame {
    use super::*;

    #[test]
    fn output_matches_input_dimensions() {
        for &(w, h) in &[(1, 1), (7, 3), (16, 16), (3, 11)] {
            let normal = noise_grid(w, h, 1, true);
            let diffuse = noise_grid(w, h, 2, false);
            let frame = render_frame(&normal, &diffuse, &overhead(), &MaterialModel::default())
                .unwrap();
            assert_eq!(frame.dimensions(), (w, h));
            assert_eq!(frame.rows().count(), h as usize);
            assert!(frame.rows().all(|row| row.len() == w as usize));
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let normal = noise_grid(32, 24, 7, true);
        let diffuse = noise_grid(32, 24, 8, false);
        let material = MaterialModel::default();
        let first = render_frame(&normal, &diffuse, &overhead(), &material).unwrap();
        let second = render_frame(&normal, &diffuse, &overhead(), &material).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn cache_does_not_change_output() {
        let normal = noise_grid(40, 30, 11, true);
        let diffuse = noise_grid(40, 30, 12, false);
        let material = MaterialModel::default();

        for light in LightSweep::new(6, 0.4).unwrap() {
            let light = light.unwrap();
            let mut cache = PixelLightingCache::new();
            let mut uncached = Uncached::default();
            let cached_frame =
                render_frame_with(&normal, &diffuse, &light, &material, &mut cache).unwrap();
            let plain_frame =
                render_frame_with(&normal, &diffuse, &light, &material, &mut uncached).unwrap();

            assert_eq!(cached_frame, plain_frame);
            assert_eq!(uncached.evaluations(), 40 * 30);
            assert!(cache.evaluations() < uncached.evaluations());
        }
    }

    #[test]
    fn repeated_pairs_evaluate_once() {
        let a: Rgb8 = [128, 128, 255];
        let b: Rgb8 = [200, 90, 220];
        let normal = PixelGrid::new(3, 2, vec![a, b, a, b, b, a]).unwrap();
        let diffuse = PixelGrid::new(
            3,
            2,
            vec![[10, 20, 30], [10, 20, 30], [10, 20, 30], [10, 20, 30], [10, 20, 30], [10, 20, 30]],
        )
        .unwrap();
        let mut cache = PixelLightingCache::new();

        let frame =
            render_frame_with(&normal, &diffuse, &overhead(), &MaterialModel::default(), &mut cache)
                .unwrap();

        let px = frame.pixels();
        assert_eq!(px[0], px[2]);
        assert_eq!(px[0], px[5]);
        assert_eq!(px[1], px[3]);
        assert_eq!(px[1], px[4]);
        assert_eq!(cache.evaluations(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn same_normal_different_diffuse_is_distinct() {
        let normal = PixelGrid::filled(2, 1, [128, 128, 255]);
        let diffuse = PixelGrid::new(2, 1, vec![[255, 255, 255], [0, 0, 0]]).unwrap();
        let mut cache = PixelLightingCache::new();
        let frame =
            render_frame_with(&normal, &diffuse, &overhead(), &MaterialModel::default(), &mut cache)
                .unwrap();
        assert_ne!(frame.pixels()[0], frame.pixels()[1]);
        assert_eq!(cache.evaluations(), 2);
    }

    #[test]
    fn flat_surface_scenarios() {
        let normal = PixelGrid::filled(4, 4, [128, 128, 255]);
        let diffuse = PixelGrid::filled(4, 4, [255, 255, 255]);
        let material = MaterialModel::default();

        let grazing = LightVector::new(DVec3::X).unwrap();
        let frame = render_frame(&normal, &diffuse, &grazing, &material).unwrap();
        assert!(frame.pixels().iter().all(|&p| p == [5, 5, 5]));

        let overhead = LightVector::new(DVec3::Z).unwrap();
        let frame = render_frame(&normal, &diffuse, &overhead, &material).unwrap();
        assert!(frame.pixels().iter().all(|&p| p == [255, 255, 255]));
    }
}

mod preconditions {
    use super::*;

    #[test]
    fn dimension_mismatch_is_rejected() {
        let normal = PixelGrid::filled(4, 4, [128, 128, 255]);
        let diffuse = PixelGrid::filled(4, 5, [255, 255, 255]);
        let err = render_frame(&normal, &diffuse, &overhead(), &MaterialModel::default())
            .unwrap_err();
        assert_eq!(
            err,
            LightError::DimensionMismatch {
                normal: (4, 4),
                diffuse: (4, 5),
            }
        );
    }

    #[test]
    fn sweep_rejects_mismatch_before_rendering() {
        let normal = PixelGrid::filled(4, 4, [128, 128, 255]);
        let diffuse = PixelGrid::filled(5, 4, [255, 255, 255]);
        let sweep = LightSweep::new(3, 1.0).unwrap();
        let result = render_sweep(&normal, &diffuse, &sweep, &MaterialModel::default());
        assert!(matches!(result, Err(LightError::DimensionMismatch { .. })));
    }

    #[test]
    fn luminance_normal_map_is_rejected() {
        let normal =
            PixelGrid::with_channels(2, 2, vec![Channel::Luma], vec![[128, 128, 128]; 4]).unwrap();
        let diffuse = PixelGrid::filled(2, 2, [255, 255, 255]);
        let err = render_frame(&normal, &diffuse, &overhead(), &MaterialModel::default())
            .unwrap_err();
        assert_eq!(
            err,
            LightError::InvalidFormat {
                channels: vec![Channel::Luma]
            }
        );
    }

    #[test]
    fn rgba_normal_map_is_accepted() {
        let channels = vec![Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];
        let normal = PixelGrid::with_channels(1, 1, channels, vec![[128, 128, 255]]).unwrap();
        let diffuse = PixelGrid::filled(1, 1, [255, 255, 255]);
        assert!(render_frame(&normal, &diffuse, &overhead(), &MaterialModel::default()).is_ok());
    }

    #[test]
    fn degenerate_normal_fails_the_run() {
        let mut pixels = vec![[128, 128, 255]; 6];
        pixels[4] = [128, 128, 128];
        let normal = PixelGrid::new(3, 2, pixels).unwrap();
        let diffuse = PixelGrid::filled(3, 2, [255, 255, 255]);
        let sweep = LightSweep::new(4, 1.0).unwrap();
        let result = render_sweep(&normal, &diffuse, &sweep, &MaterialModel::default());
        assert_eq!(result, Err(LightError::DegenerateVector { pixel: Some(4) }));
    }
}

mod sweep {
    use super::*;

    #[test]
    fn one_frame_per_light_in_order() {
        let normal = noise_grid(12, 9, 21, true);
        let diffuse = noise_grid(12, 9, 22, false);
        let material = MaterialModel::default();
        let sweep = LightSweep::new(5, 0.6).unwrap();

        let frames = render_sweep(&normal, &diffuse, &sweep, &material).unwrap();
        assert_eq!(frames.len(), 5);

        for (frame, light) in frames.iter().zip(sweep.iter()) {
            let expected = render_frame(&normal, &diffuse, &light.unwrap(), &material).unwrap();
            assert_eq!(frame, &expected);
            assert_eq!(frame.dimensions(), (12, 9));
        }
    }

    #[test]
    fn frames_differ_as_light_moves() {
        let normal = noise_grid(16, 16, 31, true);
        let diffuse = PixelGrid::filled(16, 16, [255, 255, 255]);
        let sweep = LightSweep::new(4, 0.2).unwrap();
        let frames = render_sweep(&normal, &diffuse, &sweep, &MaterialModel::default()).unwrap();
        assert_ne!(frames[0], frames[2]);
    }

    #[test]
    fn explicit_lights() {
        let normal = PixelGrid::filled(2, 2, [128, 128, 255]);
        let diffuse = PixelGrid::filled(2, 2, [255, 255, 255]);
        let lights = [
            LightVector::new(DVec3::X).unwrap(),
            LightVector::new(DVec3::Z).unwrap(),
        ];
        let frames = render_lights(&normal, &diffuse, &lights, &MaterialModel::default()).unwrap();
        assert_eq!(frames[0], PixelGrid::filled(2, 2, [5, 5, 5]));
        assert_eq!(frames[1], PixelGrid::filled(2, 2, [255, 255, 255]));
    }
}
