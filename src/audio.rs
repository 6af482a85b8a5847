use crate::constants::MASTER_GAIN;
use crate::core::{AudioCue, Tone, Waveform};
use web_sys as web;

struct Voice {
    osc: web::OscillatorNode,
    gain: web::GainNode,
}

/// Four always-running oscillators, each behind its own gain, summed into a
/// master gain. Scenes shape the sound purely through gain ramps and retuning.
pub struct AudioBank {
    ctx: web::AudioContext,
    master: web::GainNode,
    voices: Vec<Voice>,
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx).map_err(|e| {
        log::error!("[audio] {} GainNode error: {:?}", label, e);
        anyhow::anyhow!("{} GainNode: {:?}", label, e)
    })?;
    g.gain().set_value(value);
    Ok(g)
}

fn oscillator_type(w: Waveform) -> web::OscillatorType {
    match w {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Triangle => web::OscillatorType::Triangle,
        Waveform::Square => web::OscillatorType::Square,
        Waveform::Saw => web::OscillatorType::Sawtooth,
    }
}

impl AudioBank {
    /// Build and start the graph. Must run inside a user-gesture handler or
    /// the browser keeps the context suspended.
    pub fn start() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("AudioContext: {:?}", e))?;
        _ = ctx.resume();
        let master = create_gain(&ctx, MASTER_GAIN, "Master")?;
        _ = master.connect_with_audio_node(&ctx.destination());

        let mut voices = Vec::with_capacity(Tone::ALL.len());
        for tone in Tone::ALL {
            let osc = web::OscillatorNode::new(&ctx)
                .map_err(|e| anyhow::anyhow!("{:?} OscillatorNode: {:?}", tone, e))?;
            osc.set_type(oscillator_type(tone.waveform()));
            osc.frequency().set_value(tone.initial_hz());
            let gain = create_gain(&ctx, 0.0, "Voice")?;
            _ = osc.connect_with_audio_node(&gain);
            _ = gain.connect_with_audio_node(&master);
            _ = osc.start();
            voices.push(Voice { osc, gain });
        }
        log::info!("[audio] started {} voices at {} Hz", voices.len(), ctx.sample_rate());
        Ok(Self { ctx, master, voices })
    }

    pub fn play(&self, cue: &AudioCue) {
        let Some(v) = self.voices.get(cue.tone().slot()) else {
            return;
        };
        match *cue {
            AudioCue::Blip {
                freq_hz,
                amp,
                attack_sec,
                release_sec,
                ..
            } => self.blip(v, freq_hz, amp, attack_sec, release_sec),
            AudioCue::Level { amp, ramp_sec, .. } => self.level(v, amp, ramp_sec),
        }
    }

    /// Two-stage envelope: up to `amp` over `attack`, then down to silence
    /// over `release`. Restarting mid-envelope ramps from the current value.
    fn blip(&self, v: &Voice, freq_hz: f32, amp: f32, attack: f64, release: f64) {
        v.osc.frequency().set_value(freq_hz);
        let g = v.gain.gain();
        let now = self.ctx.current_time();
        _ = g.cancel_scheduled_values(now);
        _ = g.set_value_at_time(g.value(), now);
        _ = g.linear_ramp_to_value_at_time(amp, now + attack);
        _ = g.linear_ramp_to_value_at_time(0.0, now + attack + release);
    }

    fn level(&self, v: &Voice, amp: f32, ramp: f64) {
        let g = v.gain.gain();
        let now = self.ctx.current_time();
        _ = g.cancel_scheduled_values(now);
        _ = g.set_value_at_time(g.value(), now);
        _ = g.linear_ramp_to_value_at_time(amp, now + ramp);
    }

    pub fn nudge_master(&self, delta: f32) {
        let g = self.master.gain();
        let nv = (g.value() + delta).clamp(0.0, 1.0);
        g.set_value(nv);
        log::info!("[audio] master gain {:.2}", nv);
    }
}
