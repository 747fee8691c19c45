//! Property tests for the clamp and round-trip invariants listed in
//! SPEC_FULL.md §8 (testable properties 4 and 9). The `proptest`
//! dev-dependency is declared for exactly this purpose.

mod common;

use proptest::prelude::*;

use seal::buf::Buffer;
use seal::source::{MAX_CHUNK_SIZE, MAX_QUEUE_SIZE, MIN_CHUNK_SIZE, MIN_QUEUE_SIZE, Source};

use common::{test_engine, write_minimal_wav};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property 4 (queue_size half): every `u8` clamps into `[MIN_QUEUE_SIZE, MAX_QUEUE_SIZE]`.
    #[test]
    fn queue_size_always_clamps_into_range(raw in any::<u8>()) {
        let engine = test_engine();
        let source = Source::init(engine).unwrap();
        source.set_queue_size(raw);
        let got = source.queue_size();
        prop_assert!(got >= MIN_QUEUE_SIZE && got <= MAX_QUEUE_SIZE);
        source.destroy().unwrap();
    }

    /// Property 4 (chunk_size half): every `u32` clamps into range and is
    /// rounded down to a multiple of `MIN_CHUNK_SIZE`.
    #[test]
    fn chunk_size_always_clamps_and_aligns(raw in any::<u32>()) {
        let engine = test_engine();
        let source = Source::init(engine).unwrap();
        source.set_chunk_size(raw);
        let got = source.chunk_size();
        prop_assert!(got >= MIN_CHUNK_SIZE && got <= MAX_CHUNK_SIZE);
        prop_assert_eq!(got % MIN_CHUNK_SIZE, 0);
        source.destroy().unwrap();
    }

    /// Property 9: `load_from_file` then the getters round-trip the WAV
    /// header fields exactly, for any well-formed PCM WAV.
    #[test]
    fn wav_header_fields_round_trip(
        sample_rate in 4000u32..96_000,
        bits_is_16 in any::<bool>(),
        stereo in any::<bool>(),
        frames in 1usize..256,
    ) {
        let bits: u16 = if bits_is_16 { 16 } else { 8 };
        let channels: u16 = if stereo { 2 } else { 1 };
        let frame_bytes = (bits as usize / 8) * channels as usize;
        let data = vec![0x42u8; frames * frame_bytes];

        let engine = test_engine();
        let wav = write_minimal_wav(sample_rate, bits, channels, &data);

        let buffer = Buffer::init(engine);
        buffer.load_from_file(engine, wav.path(), None).unwrap();

        prop_assert_eq!(buffer.freq(engine).unwrap(), sample_rate);
        prop_assert_eq!(buffer.bps(engine).unwrap(), bits);
        prop_assert_eq!(buffer.channels(engine).unwrap(), channels);
        prop_assert_eq!(buffer.size(engine).unwrap(), data.len());

        buffer.destroy(engine).unwrap();
    }
}
