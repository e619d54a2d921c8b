//! Example resolving a libopus version string into a capability profile

use opus_compat::{CompatibilityProfile, DecoderConfig, LibopusTag, SampleRate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    opus_compat::init();

    println!("Opus Runtime Compatibility Example");
    println!("==================================");

    // Version string from argv, falling back to the environment variable
    let profile = match std::env::args().nth(1) {
        Some(raw) => CompatibilityProfile::detect(&raw),
        None => CompatibilityProfile::from_env(),
    };

    println!(
        "✓ Inspected version string: {:?}",
        profile.runtime_version_string()
    );
    match profile.runtime_version() {
        Some(version) => println!("✓ Parsed version: {version}"),
        None => println!("✗ Version string not recognized, using conservative defaults"),
    }
    match profile.resolved_runtime_tag() {
        Some(tag) => println!("✓ Resolved release tag: {tag}"),
        None => println!("✗ No known release at or below this version"),
    }
    if let Some(tag) = profile.resolved_crate_tag() {
        println!("✓ Crate release line: {tag}");
    }

    println!(
        "✓ In-band FEC: {} (requires {})",
        yes_no(profile.supports_inband_fec()),
        CompatibilityProfile::MIN_TAG_FOR_FEC
    );
    println!(
        "✓ Multistream surround: {} (requires {})",
        yes_no(profile.supports_multistream()),
        CompatibilityProfile::MIN_TAG_FOR_MULTISTREAM
    );
    println!(
        "✓ Recommended packet budget: {} bytes",
        profile.max_recommended_packet_bytes()
    );

    // Pick the widest decoder setup the runtime can handle
    let channels = if profile.supports_surround_decoding(6) {
        6
    } else {
        2
    };
    let mut config = DecoderConfig::new(SampleRate::Hz48000, channels)?;
    if let Some(layout) = DecoderConfig::default_layout(channels) {
        config = config.with_layout(layout)?;
    }
    println!(
        "✓ Decoder config: {} Hz, {} channel(s), multistream: {}",
        config.sample_rate().as_i32(),
        config.channels(),
        yes_no(config.uses_multistream())
    );
    println!(
        "✓ Output buffer needs {} samples for a maximal frame",
        config.required_output_capacity()
    );

    if let Some(newest) = LibopusTag::ALL.last() {
        println!(
            "\nCatalog covers {} releases up to {newest}",
            LibopusTag::ALL.len()
        );
    }
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
