#[cfg(test)]
mod telemetry_snapshot_tests {
    use std::time::Duration;

    use compress_core::compression::BufferCompressor;
    use compress_core::telemetry::{Stage, StageTimes, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};

    fn make_counters() -> TelemetryCounters {
        TelemetryCounters {
            calls: 3,
            failures: 1,
            bytes_input: 1000,
            bytes_output: 250,
            bytes_reserved: 1030,
        }
    }

    fn make_timer() -> TelemetryTimer {
        let mut timer = TelemetryTimer::new();
        timer.add_stage_time(Stage::Bound, Duration::from_micros(1));
        timer.add_stage_time(Stage::Allocate, Duration::from_micros(2));
        std::thread::sleep(Duration::from_millis(5)); // ensure elapsed > stage times
        timer.finish();
        timer
    }

    #[test]
    fn ratio_and_throughput_are_computed() {
        let snapshot = TelemetrySnapshot::from(&make_counters(), &make_timer());

        assert!((snapshot.compression_ratio - 0.25).abs() < f64::EPSILON);
        assert!(snapshot.throughput_input_bytes_per_sec > 0.0);
    }

    #[test]
    fn ratio_is_not_capped_for_expanding_input() {
        let mut counters = make_counters();
        counters.bytes_output = 1011;
        let snapshot = TelemetrySnapshot::from(&counters, &make_timer());

        assert!(snapshot.compression_ratio > 1.0);
    }

    #[test]
    fn zero_input_gives_zero_ratio() {
        let snapshot = TelemetrySnapshot::from(&TelemetryCounters::default(), &make_timer());
        assert_eq!(snapshot.compression_ratio, 0.0);
    }

    #[test]
    fn sanity_check_passes_for_valid_snapshot() {
        let snapshot = TelemetrySnapshot::from(&make_counters(), &make_timer());
        assert!(snapshot.sanity_check());
    }

    #[test]
    fn sanity_check_fails_when_output_exceeds_reserved() {
        let mut counters = make_counters();
        counters.bytes_output = counters.bytes_reserved + 1;
        let snapshot = TelemetrySnapshot::from(&counters, &make_timer());
        assert!(!snapshot.sanity_check());
    }

    #[test]
    fn counters_merge_and_add_assign_agree() {
        let mut a = make_counters();
        let mut b = make_counters();
        a.merge(&make_counters());
        b += make_counters();

        assert_eq!(a, b);
        assert_eq!(a.calls, 6);
        assert_eq!(a.successes(), 4);
        assert_eq!(a.slack_bytes(), 2 * (1030 - 250));
    }

    #[test]
    fn recorded_compress_fills_counters_and_stages() {
        let compressor = BufferCompressor::new();
        let mut counters = TelemetryCounters::default();
        let mut timer = TelemetryTimer::new();

        let input = vec![b'z'; 64 * 1024];
        let buf = compressor.compress_recorded(&input, &mut counters, &mut timer).unwrap();
        timer.finish();

        assert_eq!(counters.calls, 1);
        assert_eq!(counters.failures, 0);
        assert_eq!(counters.bytes_input, input.len() as u64);
        assert_eq!(counters.bytes_output, buf.len() as u64);
        assert_eq!(counters.bytes_reserved, buf.bound() as u64);

        let snapshot = TelemetrySnapshot::from(&counters, &timer);
        assert!(snapshot.has_all_stages(&Stage::ALL));
        assert!(snapshot.sanity_check());
        assert!(snapshot.compression_ratio < 1.0);
    }

    #[test]
    fn recorded_failure_counts_input_only() {
        let compressor = BufferCompressor::with_level(99);
        let mut counters = TelemetryCounters::default();
        let mut timer = TelemetryTimer::new();

        assert!(compressor.compress_recorded(b"abc", &mut counters, &mut timer).is_err());

        assert_eq!(counters.calls, 1);
        assert_eq!(counters.failures, 1);
        assert_eq!(counters.bytes_input, 3);
        assert_eq!(counters.bytes_output, 0);
        // Rejected before any stage ran.
        assert!(!timer.stage_times.has_all(&[Stage::Compress]));
    }

    #[test]
    fn snapshot_serialises_to_json() {
        let snapshot = TelemetrySnapshot::from(&make_counters(), &make_timer());
        let json = snapshot.to_json().unwrap();

        assert!(json.contains(r#""calls":3"#));
        assert!(json.contains(r#""failures":1"#));
        assert!(json.contains(r#""bound":{"#));
        assert!(json.contains(r#""compress":null"#));
    }

    #[test]
    fn stage_times_accumulate_per_stage() {
        let mut times = StageTimes::default();
        assert_eq!(times.get(Stage::Compress), None);

        times.add(Stage::Compress, Duration::from_micros(10));
        times.add(Stage::Compress, Duration::from_micros(15));
        times.add(Stage::Bound, Duration::from_micros(1));

        assert_eq!(times.get(Stage::Compress), Some(Duration::from_micros(25)));
        assert_eq!(times.total(), Duration::from_micros(26));
        assert!(times.has_all(&[Stage::Bound, Stage::Compress]));
        assert!(!times.has_all(&Stage::ALL));
    }

    #[test]
    fn repeated_calls_accumulate_on_one_timer() {
        let compressor = BufferCompressor::new();
        let mut counters = TelemetryCounters::default();
        let mut timer = TelemetryTimer::default();

        compressor.compress_recorded(b"first", &mut counters, &mut timer).unwrap();
        let after_one = timer.stage_times.total();
        compressor.compress_recorded(b"second", &mut counters, &mut timer).unwrap();
        timer.finish();

        assert_eq!(counters.calls, 2);
        assert!(timer.stage_times.total() >= after_one);
        assert!(timer.stage_times.total() <= timer.elapsed());
    }

    #[test]
    fn successes_saturate_on_inconsistent_counters() {
        let counters = TelemetryCounters { calls: 1, failures: 3, ..Default::default() };
        assert_eq!(counters.successes(), 0);
    }
}
