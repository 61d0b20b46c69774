use super::*;

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::new(30, 1).unwrap(),
    }
}

fn frame() -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    }
}

#[test]
fn in_memory_sink_keeps_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame()).unwrap();
    sink.push_frame(FrameIndex(1), &frame()).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.config(), Some(cfg()));
    assert_eq!(sink.frames().len(), 2);
    assert!(sink.is_ended());
}

#[test]
fn sinks_reject_out_of_order_frames() {
    let mut mem = InMemorySink::new();
    mem.begin(cfg()).unwrap();
    mem.push_frame(FrameIndex(3), &frame()).unwrap();
    assert!(mem.push_frame(FrameIndex(3), &frame()).is_err());
    assert!(mem.push_frame(FrameIndex(2), &frame()).is_err());

    let mut null = NullSink::new();
    null.begin(cfg()).unwrap();
    null.push_frame(FrameIndex(0), &frame()).unwrap();
    assert!(null.push_frame(FrameIndex(0), &frame()).is_err());
    assert_eq!(null.frame_count(), 1);
}

#[test]
fn begin_resets_state() {
    let mut null = NullSink::new();
    null.begin(cfg()).unwrap();
    null.push_frame(FrameIndex(5), &frame()).unwrap();
    null.begin(cfg()).unwrap();
    assert_eq!(null.frame_count(), 0);
    null.push_frame(FrameIndex(0), &frame()).unwrap();
}
