mod tests {
    use embassy_time::{Duration, Instant};
    use lumio_light_state::effect::{Effect, PulseEffect, StrobeEffect};
    use lumio_light_state::{ColorValues, EffectId, EffectRegistry};

    #[test]
    fn test_registry_lookup_case_insensitive() {
        let registry = EffectRegistry::all();
        assert_eq!(registry.lookup("pulse"), Some(EffectId::Pulse));
        assert_eq!(registry.lookup("PULSE"), Some(EffectId::Pulse));
        assert_eq!(registry.lookup("Rainbow"), registry.lookup("rainbow"));
        assert_eq!(registry.lookup("bogus"), None);
    }

    #[test]
    fn test_registry_register_is_idempotent() {
        let mut registry = EffectRegistry::new();
        assert!(registry.is_empty());
        registry.register(EffectId::Strobe).unwrap();
        registry.register(EffectId::Strobe).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_effect_id_round_trip() {
        for id in [EffectId::Pulse, EffectId::Rainbow, EffectId::Strobe] {
            assert_eq!(id.to_slot().id(), id);
            assert_eq!(id.to_slot().name(), id.as_str());
        }
    }

    #[test]
    fn test_pulse_breathes_brightness() {
        let mut pulse = PulseEffect::default().with_period(Duration::from_millis(2000));
        let values = ColorValues::new(true, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0);

        // Top of the breath: brightness stays at full scale.
        let top = pulse.apply(Instant::from_millis(0), &values);
        assert!((top.brightness() - 1.0).abs() < 1e-3);

        // Bottom of the breath: brightness drops to the floor level.
        let bottom = pulse.apply(Instant::from_millis(1000), &values);
        assert!((bottom.brightness() - 0.2).abs() < 1e-3);

        // Everything else passes through.
        assert!(bottom.is_on());
        assert_eq!(bottom.red(), values.red());
    }

    #[test]
    fn test_strobe_alternates() {
        let mut strobe = StrobeEffect::default().with_period(Duration::from_millis(500));
        let values = ColorValues::new(true, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0);

        // On phase passes the snapshot through unchanged.
        assert_eq!(strobe.apply(Instant::from_millis(100), &values), values);
        // Off phase switches the light off, keeping the channels.
        let off = strobe.apply(Instant::from_millis(300), &values);
        assert!(!off.is_on());
        assert_eq!(off.red(), values.red());
    }

    #[test]
    fn test_rainbow_rotates_color() {
        use lumio_light_state::effect::RainbowEffect;

        let mut rainbow =
            RainbowEffect::default().with_cycle_duration(Duration::from_millis(8000));
        let values = ColorValues::new(true, 0.5, 1.0, 1.0, 1.0, 0.0, 0.0);

        let start = rainbow.apply(Instant::from_millis(0), &values);
        let later = rainbow.apply(Instant::from_millis(4000), &values);

        // The hue moves while on/off state and brightness are preserved.
        assert_ne!(
            (start.red(), start.green(), start.blue()),
            (later.red(), later.green(), later.blue())
        );
        assert!(start.is_on());
        assert_eq!(start.brightness(), 0.5);
    }
}
