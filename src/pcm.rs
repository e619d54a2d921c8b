//! Interleaved PCM reshaping helpers

use crate::error::{Error, Result};

/// Split interleaved samples into one plane per channel.
///
/// Works for any `Copy` sample type, so both 16-bit and float PCM go
/// through the same path.
///
/// # Errors
/// Returns [`Error::UnsupportedChannelCount`] for zero channels and
/// [`Error::BadArg`] when the sample count is not a whole number of
/// frames.
pub fn deinterleave<T: Copy>(interleaved: &[T], channels: usize) -> Result<Vec<Vec<T>>> {
    if channels == 0 {
        return Err(Error::UnsupportedChannelCount(0));
    }
    if !interleaved.len().is_multiple_of(channels) {
        return Err(Error::BadArg);
    }

    let frames = interleaved.len() / channels;
    let mut planes: Vec<Vec<T>> = (0..channels).map(|_| Vec::with_capacity(frames)).collect();
    for frame in interleaved.chunks_exact(channels) {
        for (plane, &sample) in planes.iter_mut().zip(frame) {
            plane.push(sample);
        }
    }
    Ok(planes)
}

/// Deinterleave into a caller-provided buffer laid out plane after
/// plane, returning the number of frames written.
///
/// Only the first `interleaved.len()` slots of `planar` are written.
///
/// # Errors
/// Rejects zero channels and ragged input like [`deinterleave`], plus
/// [`Error::OutputBufferTooSmall`] when `planar` is shorter than the
/// input.
pub fn deinterleave_into<T: Copy>(
    interleaved: &[T],
    channels: usize,
    planar: &mut [T],
) -> Result<usize> {
    if channels == 0 {
        return Err(Error::UnsupportedChannelCount(0));
    }
    if !interleaved.len().is_multiple_of(channels) {
        return Err(Error::BadArg);
    }
    if planar.len() < interleaved.len() {
        return Err(Error::OutputBufferTooSmall {
            needed: interleaved.len(),
            actual: planar.len(),
        });
    }

    let frames = interleaved.len() / channels;
    for (index, &sample) in interleaved.iter().enumerate() {
        let channel = index % channels;
        let frame = index / channels;
        planar[channel * frames + frame] = sample;
    }
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_stereo_into_planes() {
        let planes = deinterleave(&[1i16, -1, 2, -2, 3, -3], 2).unwrap();
        assert_eq!(planes, vec![vec![1, 2, 3], vec![-1, -2, -3]]);
    }

    #[test]
    fn rejects_ragged_input() {
        assert_eq!(
            deinterleave(&[1.0f32, 2.0, 3.0], 2).unwrap_err(),
            Error::BadArg
        );
    }

    #[test]
    fn planar_buffer_matches_vec_planes() {
        let interleaved = [0i16, 10, 1, 11, 2, 12];
        let mut planar = [0i16; 6];
        let frames = deinterleave_into(&interleaved, 2, &mut planar).unwrap();
        assert_eq!(frames, 3);
        assert_eq!(planar, [0, 1, 2, 10, 11, 12]);
    }
}
