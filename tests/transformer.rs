mod tests {
    use embassy_time::{Duration, Instant};
    use lumio_light_state::{ColorValues, Flash, Transition, TransformerSlot};

    fn begin() -> ColorValues {
        ColorValues::new(false, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    fn target() -> ColorValues {
        ColorValues::new(true, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0)
    }

    #[test]
    fn test_transition_endpoints() {
        let transition = TransformerSlot::Transition(Transition::new(
            begin(),
            target(),
            Duration::from_millis(500),
            Instant::from_millis(0),
        ));

        assert_eq!(transition.value_at(Instant::from_millis(0)), begin());
        assert_eq!(transition.value_at(Instant::from_millis(500)), target());
        assert!(!transition.is_finished(Instant::from_millis(499)));
        assert!(transition.is_finished(Instant::from_millis(500)));
        assert_eq!(transition.finish_values(), target());
    }

    #[test]
    fn test_transition_progress_monotone() {
        let transition = TransformerSlot::Transition(Transition::new(
            begin(),
            target(),
            Duration::from_millis(1000),
            Instant::from_millis(0),
        ));

        let mut last = -1.0;
        for millis in (0..=1000).step_by(50) {
            let brightness = transition.value_at(Instant::from_millis(millis)).brightness();
            assert!(brightness >= last);
            last = brightness;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_transition_midpoint() {
        let transition = TransformerSlot::Transition(Transition::new(
            begin(),
            target(),
            Duration::from_millis(500),
            Instant::from_millis(0),
        ));

        let mid = transition.value_at(Instant::from_millis(250));
        assert!(mid.is_on());
        assert_eq!(mid.brightness(), 0.5);
        assert_eq!(mid.red(), 0.5);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let transition = TransformerSlot::Transition(Transition::new(
            begin(),
            target(),
            Duration::from_millis(0),
            Instant::from_millis(100),
        ));

        assert!(transition.is_finished(Instant::from_millis(100)));
        assert_eq!(transition.value_at(Instant::from_millis(100)), target());
    }

    #[test]
    fn test_clock_before_start_clamps() {
        let transition = TransformerSlot::Transition(Transition::new(
            begin(),
            target(),
            Duration::from_millis(500),
            Instant::from_millis(1000),
        ));

        // A tick from before the start time reports zero progress.
        assert_eq!(transition.value_at(Instant::from_millis(200)), begin());
        assert!(!transition.is_finished(Instant::from_millis(200)));
    }

    #[test]
    fn test_flash_holds_target_and_reverts_to_begin() {
        let flash = TransformerSlot::Flash(Flash::new(
            begin(),
            target(),
            Duration::from_millis(1000),
            Instant::from_millis(0),
        ));

        assert_eq!(flash.value_at(Instant::from_millis(0)), target());
        assert_eq!(flash.value_at(Instant::from_millis(500)), target());
        assert!(!flash.is_finished(Instant::from_millis(999)));
        assert!(flash.is_finished(Instant::from_millis(1000)));
        assert_eq!(flash.finish_values(), begin());
    }

    #[test]
    fn test_slot_accessors() {
        let transition = TransformerSlot::Transition(Transition::new(
            begin(),
            target(),
            Duration::from_millis(500),
            Instant::from_millis(0),
        ));
        assert_eq!(*transition.target(), target());
        assert_eq!(*transition.begin(), begin());
    }
}
