//! End-to-end scenario tests mirroring SPEC_FULL.md §8's concrete scenarios
//! (S1-S6). Each exercises several modules together through the public API,
//! which is why these live under `tests/` rather than as unit tests
//! colocated with one module.

mod common;

use std::time::{Duration, Instant};

use seal::buf::Buffer;
use seal::raw::{RawPcm, RawPcmAttr};
use seal::source::{
    MAX_CHUNK_SIZE, MAX_QUEUE_SIZE, MIN_CHUNK_SIZE, MIN_QUEUE_SIZE, SourceState, SourceType,
};
use seal::stream::Stream;
use seal::{SealError, Source};

use common::{test_engine, write_minimal_wav};

/// S1 — static playback round-trip.
#[test]
fn s1_static_playback_round_trip() {
    let engine = test_engine();
    let data = vec![0x7fu8; 4096];
    let wav = write_minimal_wav(11025, 8, 1, &data);

    let buffer = Buffer::init(engine);
    buffer.load_from_file(engine, wav.path(), None).unwrap();
    assert_eq!(buffer.freq(engine).unwrap(), 11025);
    assert_eq!(buffer.bps(engine).unwrap(), 8);
    assert_eq!(buffer.channels(engine).unwrap(), 1);
    assert_eq!(buffer.size(engine).unwrap(), data.len());

    let source = Source::init(engine).unwrap();
    source.set_buffer(&buffer).unwrap();
    source.play().unwrap();
    assert_eq!(source.state().unwrap(), SourceState::Playing);

    source.stop().unwrap();
    assert_eq!(source.state().unwrap(), SourceState::Stopped);

    source.destroy().unwrap();
    buffer.destroy(engine).unwrap();
}

/// S2 — streaming switch between two same-format streams, plus the
/// in-use rejection for a stream still bound elsewhere. Uses WAV streams
/// rather than the OV streams named in the scenario prose: this crate's
/// decode stack (`symphonia`) has no encoder to synthesize a well-formed
/// Ogg Vorbis fixture, and the behavior under test (format-match switch,
/// `Arc`-refcount in-use detection) doesn't depend on the container format.
#[test]
fn s2_streaming_switch_same_format_and_inuse_rejection() {
    let engine = test_engine();
    let attr_a = vec![0u8; 8000];
    let attr_b = vec![1u8; 8000];
    let wav_a = write_minimal_wav(44100, 16, 2, &attr_a);
    let wav_b = write_minimal_wav(44100, 16, 2, &attr_b);

    let stream_a = Stream::open(wav_a.path(), None).unwrap();
    let stream_b = Stream::open(wav_b.path(), None).unwrap();

    let source1 = Source::init(engine).unwrap();
    source1.set_stream(&stream_a).unwrap();
    source1.play().unwrap();
    assert_eq!(source1.state().unwrap(), SourceState::Playing);

    let source2 = Source::init(engine).unwrap();
    let err = source2.set_stream(&stream_a).unwrap_err();
    assert!(matches!(err, SealError::StreamInUse));

    std::thread::sleep(Duration::from_millis(100));
    source1.set_stream(&stream_b).unwrap();
    assert_eq!(source1.state().unwrap(), SourceState::Playing);

    source1.detach_audio().unwrap();
    source2.destroy().unwrap();
    source1.destroy().unwrap();
}

/// S3 — streaming format mismatch: replacing a bound stream with one of
/// different sample attributes is rejected, and the source stays bound to
/// the original.
#[test]
fn s3_streaming_format_mismatch_rejected() {
    let engine = test_engine();
    let wav_x = write_minimal_wav(44100, 16, 2, &vec![0u8; 4000]);
    let wav_y = write_minimal_wav(48000, 16, 2, &vec![0u8; 4000]);

    let stream_x = Stream::open(wav_x.path(), None).unwrap();
    let stream_y = Stream::open(wav_y.path(), None).unwrap();

    let source = Source::init(engine).unwrap();
    source.set_stream(&stream_x).unwrap();

    let err = source.set_stream(&stream_y).unwrap_err();
    assert!(matches!(err, SealError::MixingStreamFmt));

    // Still bound to X: re-offering X is the documented no-op, not a mixing
    // error, which only holds if the source never actually switched away.
    assert!(source.set_stream(&stream_x).is_ok());

    source.detach_audio().unwrap();
    source.destroy().unwrap();
}

/// S4 — looping streaming never stops at end-of-content. Content is scaled
/// down to tens of milliseconds (rather than the scenario's literal
/// 1-second/5-second figures) so the suite stays fast while still forcing
/// several refill-and-rewind cycles within the test's deadline.
#[test]
fn s4_looping_streaming_never_ends() {
    let engine = test_engine();
    let data = vec![7u8; 800];
    let wav = write_minimal_wav(8000, 16, 1, &data);
    let stream = Stream::open(wav.path(), None).unwrap();

    let source = Source::init(engine).unwrap();
    source.set_auto_update(false);
    source.set_looping(true);
    source.set_queue_size(3);
    source.set_chunk_size(MIN_CHUNK_SIZE);
    source.set_stream(&stream).unwrap();
    source.play().unwrap();

    let deadline = Instant::now() + Duration::from_millis(250);
    let mut polls = 0;
    while Instant::now() < deadline {
        source.update().unwrap();
        polls += 1;
        std::thread::sleep(Duration::from_millis(5));
    }
    assert!(polls > 5, "expected several manual refill polls within the deadline");
    assert_eq!(source.state().unwrap(), SourceState::Playing);

    source.stop().unwrap();
    source.detach_audio().unwrap();
    source.destroy().unwrap();
}

/// S5 — queue/chunk size clamp. The scenario's literal text (carried
/// unchanged from spec.md) says these five inputs return `BadValue`; that's
/// superseded by §4.2.2/property 4 and the original's `limit_val` clamping
/// behavior (`examples/original_source/src/seal/src.c:452-463`) — see
/// SPEC_FULL.md §9 and DESIGN.md's Open Question decision 7.
#[test]
fn s5_queue_and_chunk_values_clamp_rather_than_error() {
    let engine = test_engine();
    let source = Source::init(engine).unwrap();

    source.set_queue_size(0);
    assert_eq!(source.queue_size(), MIN_QUEUE_SIZE);
    source.set_queue_size(64);
    assert_eq!(source.queue_size(), MAX_QUEUE_SIZE);

    source.set_chunk_size(9215);
    assert_eq!(source.chunk_size(), MIN_CHUNK_SIZE);
    source.set_chunk_size(16_773_121);
    assert_eq!(source.chunk_size(), MAX_CHUNK_SIZE);

    source.set_chunk_size(294_912);
    assert_eq!(source.chunk_size(), 294_912);

    source.destroy().unwrap();
}

/// S6 — type mixing rejection in both directions.
#[test]
fn s6_type_mixing_rejection() {
    let engine = test_engine();

    let buffer = Buffer::init(engine);
    let raw = RawPcm::with_data(
        vec![0u8; 4000],
        RawPcmAttr {
            bit_depth: 16,
            channels: 1,
            sample_rate_hz: 8000,
        },
    );
    buffer.copy_from_raw(engine, &raw).unwrap();

    let wav = write_minimal_wav(8000, 16, 1, &vec![0u8; 4000]);
    let stream = Stream::open(wav.path(), None).unwrap();

    let source = Source::init(engine).unwrap();
    source.set_buffer(&buffer).unwrap();
    assert_eq!(source.source_type(), SourceType::Static);
    let err = source.set_stream(&stream).unwrap_err();
    assert!(matches!(err, SealError::MixingSrcType));

    source.detach_audio().unwrap();
    source.set_stream(&stream).unwrap();
    assert_eq!(source.source_type(), SourceType::Streaming);
    let err2 = source.set_buffer(&buffer).unwrap_err();
    assert!(matches!(err2, SealError::MixingSrcType));

    source.detach_audio().unwrap();
    buffer.destroy(engine).unwrap();
    source.destroy().unwrap();
}
