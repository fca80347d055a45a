use super::*;

fn frame(v: u8) -> FrameRGBA {
    FrameRGBA {
        width: 1,
        height: 1,
        data: vec![v, v, v, 255],
        premultiplied: true,
    }
}

#[test]
fn in_memory_sink_records_lifecycle() {
    let mut sink = InMemorySink::new();
    assert!(sink.config().is_none());

    let cfg = SinkConfig {
        width: 1,
        height: 1,
        fps: Fps::new(10, 1).unwrap(),
    };
    sink.begin(cfg.clone()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(1)).unwrap();
    sink.push_frame(FrameIndex(1), &frame(2)).unwrap();
    assert!(!sink.is_finished());
    sink.end().unwrap();

    assert!(sink.is_finished());
    assert_eq!(sink.config(), Some(cfg));
    let indices: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(indices, vec![0, 1]);
    assert_eq!(sink.frames()[1].1.data[0], 2);
}

#[test]
fn begin_resets_previous_run() {
    let mut sink = InMemorySink::new();
    let cfg = SinkConfig {
        width: 1,
        height: 1,
        fps: Fps::new(30, 1).unwrap(),
    };
    sink.begin(cfg.clone()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(9)).unwrap();
    sink.end().unwrap();

    sink.begin(cfg).unwrap();
    assert!(sink.frames().is_empty());
    assert!(!sink.is_finished());
}

#[test]
fn abort_discards_frames() {
    let mut sink = InMemorySink::new();
    sink.begin(SinkConfig {
        width: 1,
        height: 1,
        fps: Fps::new(30, 1).unwrap(),
    })
    .unwrap();
    sink.push_frame(FrameIndex(0), &frame(3)).unwrap();
    sink.abort();

    assert!(sink.is_aborted());
    assert!(!sink.is_finished());
    assert!(sink.frames().is_empty());
}
