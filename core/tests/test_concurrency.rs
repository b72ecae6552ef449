#[cfg(test)]
mod concurrency_tests {
    use crossbeam::channel::unbounded;
    use compress_core::compression::{compress, BufferCompressor};
    use compress_core::telemetry::{TelemetryCounters, TelemetryTimer};

    fn payload(seed: u8) -> Vec<u8> {
        (0..32 * 1024u32).map(|i| (i as u8).wrapping_mul(seed) ^ (i >> 7) as u8).collect()
    }

    #[test]
    fn parallel_calls_match_sequential() {
        let inputs: Vec<Vec<u8>> = (1..=8u8).map(payload).collect();
        let expected: Vec<_> = inputs.iter().map(|i| compress(i)).collect();

        let (tx, rx) = unbounded();
        crossbeam::thread::scope(|s| {
            for (idx, input) in inputs.iter().enumerate() {
                let tx = tx.clone();
                s.spawn(move |_| {
                    tx.send((idx, compress(input))).unwrap();
                });
            }
        })
        .unwrap();
        drop(tx);

        let mut seen = 0;
        for (idx, res) in rx.iter() {
            assert_eq!(res, expected[idx], "thread result {idx} differs");
            seen += 1;
        }
        assert_eq!(seen, inputs.len());
    }

    #[test]
    fn shared_compressor_with_per_thread_counters() {
        let compressor = BufferCompressor::with_level(9);
        let inputs: Vec<Vec<u8>> = (1..=4u8).map(payload).collect();

        let per_thread: Vec<TelemetryCounters> = crossbeam::thread::scope(|s| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|input| {
                    let compressor = &compressor;
                    s.spawn(move |_| {
                        let mut counters = TelemetryCounters::default();
                        let mut timer = TelemetryTimer::new();
                        for _ in 0..5 {
                            compressor.compress_recorded(input, &mut counters, &mut timer).unwrap();
                        }
                        counters
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        })
        .unwrap();

        let mut total = TelemetryCounters::default();
        for c in &per_thread {
            total.merge(c);
        }
        assert_eq!(total.calls, 20);
        assert_eq!(total.failures, 0);
        assert_eq!(total.bytes_input, 20 * 32 * 1024);
        assert!(total.bytes_output <= total.bytes_reserved);
    }
}
