mod tests {
    use lumio_light_state::{ColorValues, LightTraits, Rgb};

    #[test]
    fn test_lerp_endpoints() {
        let begin = ColorValues::new(false, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let end = ColorValues::new(true, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0);

        assert_eq!(ColorValues::lerp(&begin, &end, 0.0), begin);
        assert_eq!(ColorValues::lerp(&begin, &end, 1.0), end);
    }

    #[test]
    fn test_lerp_on_flips_early() {
        let begin = ColorValues::new(false, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let end = ColorValues::new(true, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0);

        assert!(!ColorValues::lerp(&begin, &end, 0.0).is_on());
        assert!(ColorValues::lerp(&begin, &end, 0.25).is_on());

        let mid = ColorValues::lerp(&begin, &end, 0.5);
        assert_eq!(mid.brightness(), 0.5);
        assert_eq!(mid.red(), 0.5);
    }

    #[test]
    fn test_lerp_completion_clamped() {
        let begin = ColorValues::new(false, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let end = ColorValues::new(true, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0);

        assert_eq!(ColorValues::lerp(&begin, &end, -1.0), begin);
        assert_eq!(ColorValues::lerp(&begin, &end, 2.0), end);
    }

    #[test]
    fn test_setters_clamp() {
        let values = ColorValues::default()
            .with_brightness(1.5)
            .with_red(-0.5)
            .with_white(2.0)
            .with_color_temperature(-1.0);

        assert_eq!(values.brightness(), 1.0);
        assert_eq!(values.red(), 0.0);
        assert_eq!(values.white(), 1.0);
        assert_eq!(values.color_temperature(), 0.0);
    }

    #[test]
    fn test_new_clamps() {
        let values = ColorValues::new(true, 3.0, -1.0, 0.5, 1.5, -0.1, 7.0);
        assert_eq!(values.brightness(), 1.0);
        assert_eq!(values.red(), 0.0);
        assert_eq!(values.green(), 0.5);
        assert_eq!(values.blue(), 1.0);
        assert_eq!(values.white(), 0.0);
        assert_eq!(values.color_temperature(), 1.0);
    }

    #[test]
    fn test_matches_gated_by_traits() {
        let traits = LightTraits::new().with_brightness().with_rgb();
        let a = ColorValues::new(true, 0.5, 1.0, 0.0, 0.0, 0.2, 0.1);
        let b = a.with_white(0.9).with_color_temperature(0.7);

        // White and color temperature are not part of this light.
        assert!(a.matches(&b, &traits));
        assert!(!a.matches(&b.with_brightness(0.6), &traits));
        assert!(!a.matches(&b.with_green(1.0), &traits));
        assert!(!a.matches(&b.with_on(false), &traits));
    }

    #[test]
    fn test_as_rgb() {
        let values = ColorValues::new(true, 0.5, 1.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(values.as_rgb(), Rgb { r: 127, g: 0, b: 0 });

        let off = values.with_on(false);
        assert_eq!(off.as_rgb(), Rgb { r: 0, g: 0, b: 0 });
    }
}
