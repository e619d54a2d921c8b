use opus_compat::{
    ChannelLayout, DecoderConfig, Error, PcmFormat, SILENT_CHANNEL, SampleRate, deinterleave,
    deinterleave_into, supports_decoding, supports_encoding,
};

#[test]
fn standard_surround_5_1_couples_front_and_side_pairs() {
    let layout = ChannelLayout::standard_surround(6);
    assert_eq!(layout.channels(), 6);
    assert_eq!(layout.streams(), 4);
    assert_eq!(layout.coupled_streams(), 2);
    assert_eq!(layout.mapping(), &[0, 4, 1, 2, 3, 5]);
}

#[test]
fn standard_surround_7_1_couples_three_pairs() {
    let layout = ChannelLayout::standard_surround(8);
    assert_eq!(layout.streams(), 5);
    assert_eq!(layout.coupled_streams(), 3);
    assert_eq!(layout.mapping(), &[0, 6, 1, 2, 3, 4, 5, 7]);
    assert_eq!(layout.coded_channels(), 8);
}

#[test]
fn mono_and_stereo_layouts_are_single_stream() {
    let mono = ChannelLayout::mono();
    assert_eq!((mono.channels(), mono.streams(), mono.coupled_streams()), (1, 1, 0));
    assert_eq!(mono.mapping(), &[0]);

    let stereo = ChannelLayout::stereo();
    assert_eq!((stereo.channels(), stereo.streams(), stereo.coupled_streams()), (2, 1, 1));
    assert_eq!(stereo.mapping(), &[0, 1]);
}

#[test]
fn unusual_channel_counts_fall_back_to_discrete_streams() {
    let quad = ChannelLayout::standard_surround(4);
    assert_eq!(quad.streams(), 4);
    assert_eq!(quad.coupled_streams(), 0);
    assert_eq!(quad.mapping(), &[0, 1, 2, 3]);
}

#[test]
fn custom_layout_may_leave_channels_silent() {
    let layout = ChannelLayout::new(3, 2, 0, vec![0, SILENT_CHANNEL, 1]).unwrap();
    assert_eq!(layout.coded_channels(), 2);
}

#[test]
fn layout_rejects_duplicate_slots() {
    let err = ChannelLayout::new(2, 2, 0, vec![0, 0]).unwrap_err();
    assert!(matches!(err, Error::InvalidLayout { .. }));
}

#[test]
fn layout_rejects_out_of_range_entries() {
    // One mono stream exposes a single coded channel, so entry 1 is bad
    let err = ChannelLayout::new(2, 1, 0, vec![0, 1]).unwrap_err();
    assert!(matches!(err, Error::InvalidLayout { .. }));
}

#[test]
fn layout_rejects_mismatched_mapping_length() {
    let err = ChannelLayout::new(3, 2, 1, vec![0, 1]).unwrap_err();
    assert!(matches!(err, Error::InvalidLayout { mapping_len: 2, .. }));
}

#[test]
fn layout_rejects_inconsistent_stream_counts() {
    assert!(ChannelLayout::new(2, 1, 2, vec![0, 1]).is_err());
    assert!(ChannelLayout::new(1, 0, 0, vec![0]).is_err());
}

#[test]
fn layout_rejects_zero_channels() {
    let err = ChannelLayout::new(0, 1, 0, vec![]).unwrap_err();
    assert_eq!(err, Error::UnsupportedChannelCount(0));
}

#[test]
fn config_bounds_channel_count() {
    assert!(DecoderConfig::new(SampleRate::Hz48000, 1).is_ok());
    assert!(DecoderConfig::new(SampleRate::Hz48000, 8).is_ok());
    assert_eq!(
        DecoderConfig::new(SampleRate::Hz48000, 0).unwrap_err(),
        Error::UnsupportedChannelCount(0)
    );
    assert_eq!(
        DecoderConfig::new(SampleRate::Hz48000, 9).unwrap_err(),
        Error::UnsupportedChannelCount(9)
    );
}

#[test]
fn config_bounds_frame_budget() {
    let config = DecoderConfig::new(SampleRate::Hz48000, 2).unwrap();
    assert_eq!(
        config.clone().with_max_samples_per_channel(19).unwrap_err(),
        Error::InvalidFrameSize(19)
    );
    assert_eq!(
        config.clone().with_max_samples_per_channel(5761).unwrap_err(),
        Error::InvalidFrameSize(5761)
    );

    let trimmed = config.with_max_samples_per_channel(960).unwrap();
    assert_eq!(trimmed.max_samples_per_channel(), 960);
    assert_eq!(trimmed.required_output_capacity(), 1920);
}

#[test]
fn config_layout_must_cover_the_same_channels() {
    let config = DecoderConfig::new(SampleRate::Hz48000, 6).unwrap();
    let err = config
        .clone()
        .with_layout(ChannelLayout::standard_surround(8))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidLayout { channels: 6, .. }));

    let config = config
        .with_layout(ChannelLayout::standard_surround(6))
        .unwrap();
    assert_eq!(config.layout().map(ChannelLayout::channels), Some(6));
    assert!(config.uses_multistream());
}

#[test]
fn config_selects_pcm_format() {
    let config = DecoderConfig::new(SampleRate::Hz48000, 2)
        .unwrap()
        .with_pcm_format(PcmFormat::Int16);
    assert_eq!(config.pcm_format(), PcmFormat::Int16);
    assert_eq!(config.pcm_format().bytes_per_sample(), 2);
}

#[test]
fn output_capacity_reports_exact_shortfall() {
    let config = DecoderConfig::new(SampleRate::Hz48000, 2)
        .unwrap()
        .with_max_samples_per_channel(960)
        .unwrap();
    assert!(config.validate_output_capacity(1920).is_ok());
    assert!(config.validate_output_capacity(4096).is_ok());
    assert_eq!(
        config.validate_output_capacity(959).unwrap_err(),
        Error::OutputBufferTooSmall {
            needed: 1920,
            actual: 959
        }
    );
}

#[test]
fn payload_size_allows_empty_and_rejects_unaddressable() {
    let config = DecoderConfig::new(SampleRate::Hz48000, 2).unwrap();
    assert!(config.validate_payload_size(0).is_ok());
    assert!(config.validate_payload_size(1500).is_ok());

    let too_big = usize::try_from(i32::MAX).unwrap() + 1;
    assert_eq!(
        config.validate_payload_size(too_big).unwrap_err(),
        Error::PayloadTooLarge(too_big)
    );
}

#[test]
fn default_layouts_exist_only_for_surround_counts() {
    assert_eq!(DecoderConfig::default_layout(1), None);
    assert_eq!(DecoderConfig::default_layout(2), None);
    assert_eq!(
        DecoderConfig::default_layout(6),
        Some(ChannelLayout::standard_surround(6))
    );
    assert_eq!(
        DecoderConfig::default_layout(5),
        Some(ChannelLayout::discrete(5))
    );
}

#[test]
fn decode_support_covers_all_opus_rates_and_channels() {
    assert!(supports_decoding(48_000, 2));
    assert!(supports_decoding(8000, 8));
    assert!(supports_decoding(16_000, 6));
    assert!(!supports_decoding(44_100, 2));
    assert!(!supports_decoding(48_000, 0));
    assert!(!supports_decoding(48_000, 9));
}

#[test]
fn encode_support_is_mono_or_stereo_only() {
    assert!(supports_encoding(48_000, 1));
    assert!(supports_encoding(16_000, 2));
    assert!(!supports_encoding(48_000, 6));
    assert!(!supports_encoding(44_100, 1));
}

#[test]
fn deinterleave_splits_surround_frames() {
    // Two frames of 6-channel audio
    let interleaved: Vec<i16> = (0..12).collect();
    let planes = deinterleave(&interleaved, 6).unwrap();
    assert_eq!(planes.len(), 6);
    for (channel, plane) in planes.iter().enumerate() {
        let channel = i16::try_from(channel).unwrap();
        assert_eq!(plane.as_slice(), &[channel, channel + 6]);
    }
}

#[test]
fn deinterleave_of_empty_input_yields_empty_planes() {
    let planes = deinterleave::<f32>(&[], 2).unwrap();
    assert_eq!(planes, vec![Vec::<f32>::new(), Vec::new()]);
}

#[test]
fn deinterleave_rejects_bad_shapes() {
    assert_eq!(
        deinterleave(&[1i16], 0).unwrap_err(),
        Error::UnsupportedChannelCount(0)
    );
    assert_eq!(deinterleave(&[1i16, 2, 3], 2).unwrap_err(), Error::BadArg);
}

#[test]
fn deinterleave_into_packs_planes_contiguously() {
    let interleaved = [0.1f32, -0.1, 0.2, -0.2];
    let mut planar = [0.0f32; 4];
    assert_eq!(deinterleave_into(&interleaved, 2, &mut planar).unwrap(), 2);
    assert_eq!(planar, [0.1, 0.2, -0.1, -0.2]);
}

#[test]
fn deinterleave_into_rejects_short_destination() {
    let interleaved = [1i16, 2, 3, 4, 5, 6];
    let mut planar = [0i16; 4];
    assert_eq!(
        deinterleave_into(&interleaved, 2, &mut planar).unwrap_err(),
        Error::OutputBufferTooSmall {
            needed: 6,
            actual: 4
        }
    );
}
