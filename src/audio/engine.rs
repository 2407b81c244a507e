use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleRate, StreamConfig};
use crossbeam_channel::{Receiver, Sender};

use crate::audio::voice::VoiceSlot;
use crate::constants::{AUTO_STOP_SECS, SAMPLE_RATE};
use crate::messages::{AudioCmd, AudioMsg};

pub struct AudioEngine;

impl AudioEngine {
    pub fn new() -> Self {
        Self
    }

    /// Open the default output device and hand the preview voice to its
    /// callback. The returned stream must be kept alive by the caller.
    pub fn start(
        &self,
        cmd_rx: Receiver<AudioCmd>,
        msg_tx: Sender<AudioMsg>,
    ) -> Result<cpal::Stream, Box<dyn std::error::Error>> {
        let host = cpal::default_host();

        let output_device = host
            .default_output_device()
            .ok_or("No output device available")?;

        let output_config = StreamConfig {
            channels: 2,
            sample_rate: SampleRate(SAMPLE_RATE),
            buffer_size: cpal::BufferSize::Default,
        };

        // --- All audio state lives inside the output callback closure ---
        let mut slot = VoiceSlot::new();
        let auto_stop_samples = (SAMPLE_RATE * AUTO_STOP_SECS) as usize;
        let mut samples_remaining: usize = 0;

        let output_stream = output_device.build_output_stream(
            &output_config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                // --- Process commands ---
                while let Ok(cmd) = cmd_rx.try_recv() {
                    match cmd {
                        AudioCmd::Start(params) => {
                            // One live voice at a time; this drops any
                            // previous tone before the new one starts
                            slot.start(params);
                            samples_remaining = auto_stop_samples;
                        }
                        AudioCmd::Stop => {
                            slot.stop();
                            samples_remaining = 0;
                        }
                    }
                }

                for frame in data.chunks_mut(2) {
                    if slot.is_active() {
                        if samples_remaining == 0 {
                            // Runaway-playback guard
                            slot.stop();
                            let _ = msg_tx.try_send(AudioMsg::Finished);
                        } else {
                            samples_remaining -= 1;
                        }
                    }

                    let sample = slot.next_sample().clamp(-1.0, 1.0);
                    frame[0] = sample;
                    if frame.len() > 1 {
                        frame[1] = sample;
                    }
                }
            },
            |err| {
                eprintln!("Audio output error: {}", err);
            },
            None,
        )?;

        output_stream.play()?;

        Ok(output_stream)
    }
}
