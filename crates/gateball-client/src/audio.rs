use bevy::audio::AudioSource;
use bevy::prelude::*;

/// Goal chime parameters: a short bright sine, same register as a ball-sink
/// cue.
const CHIME_FREQUENCY_HZ: f32 = 520.0;
const CHIME_SECONDS: f32 = 0.3;
const CHIME_VOLUME: f32 = 0.35;

const SAMPLE_RATE: u32 = 44_100;

/// Handle to the synthesized goal chime.
#[derive(Resource)]
pub struct GoalChime(pub Handle<AudioSource>);

/// Render the chime to an in-memory WAV and register it as an audio asset.
pub fn setup_goal_chime(mut commands: Commands, mut audio: ResMut<Assets<AudioSource>>) {
    let bytes = sine_wav(CHIME_FREQUENCY_HZ, CHIME_SECONDS, CHIME_VOLUME);
    let handle = audio.add(AudioSource {
        bytes: bytes.into(),
    });
    commands.insert_resource(GoalChime(handle));
}

/// Synthesize a mono 16-bit PCM WAV: a sine at `frequency` with a linear
/// ramp-down envelope so the tone doesn't click at the end.
fn sine_wav(frequency: f32, duration: f32, volume: f32) -> Vec<u8> {
    let sample_count = (SAMPLE_RATE as f32 * duration) as u32;
    let data_len = sample_count * 2;

    let mut wav = Vec::with_capacity(44 + data_len as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes()); // PCM chunk size
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    wav.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes()); // byte rate
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());

    for i in 0..sample_count {
        let t = i as f32 / SAMPLE_RATE as f32;
        let envelope = 1.0 - t / duration;
        let sample = (t * frequency * std::f32::consts::TAU).sin() * envelope * volume;
        wav.extend_from_slice(&((sample * i16::MAX as f32) as i16).to_le_bytes());
    }

    wav
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wav_header_is_well_formed() {
        let wav = sine_wav(440.0, 0.1, 0.5);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[36..40], b"data");

        let samples = (SAMPLE_RATE as f32 * 0.1) as usize;
        assert_eq!(wav.len(), 44 + samples * 2);

        let riff_len = u32::from_le_bytes(wav[4..8].try_into().unwrap());
        assert_eq!(riff_len as usize, wav.len() - 8);
    }

    #[test]
    fn envelope_ends_near_silence() {
        let wav = sine_wav(440.0, 0.05, 1.0);
        let last = i16::from_le_bytes(wav[wav.len() - 2..].try_into().unwrap());
        assert!(last.unsigned_abs() < 2000, "tail sample {last} should be quiet");
    }

    #[test]
    fn volume_scales_peak_amplitude() {
        let loud = sine_wav(440.0, 0.05, 1.0);
        let quiet = sine_wav(440.0, 0.05, 0.1);
        let peak = |wav: &[u8]| {
            wav[44..]
                .chunks_exact(2)
                .map(|c| i16::from_le_bytes([c[0], c[1]]).unsigned_abs())
                .max()
                .unwrap()
        };
        assert!(peak(&loud) > peak(&quiet) * 5);
    }
}
