use anyhow::{Context, Result};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

/// The logger stops after this many conversions.
const N_SAMPLES: u32 = 20_000;

/// ADS1115 data rate the logger paces itself to.
const SAMPLE_RATE: f64 = 860.0;

/// ±4.096 V full scale over a signed 16-bit conversion.
const PGA_RANGE: f64 = 4.096;
const ADC_RESOLUTION: f64 = 32768.0;

/// Electret mic modules sit at half of a 3.3 V supply.
const MIC_BIAS: f64 = 1.65;

/// Peak amplitude of the noise floor, in volts.
const NOISE: f64 = 0.006;

/// One row as the logger prints it: `%d,%.5f`.
#[derive(Debug, Serialize)]
struct Sample {
    index: u32,
    voltage: String,
}

impl Sample {
    fn new(index: u32, voltage: f64) -> Self {
        Self {
            index,
            voltage: format!("{voltage:.5}"),
        }
    }
}

/// Round-trip a voltage through the converter: clamp to the signed range,
/// truncate to a count, scale back.
fn quantize(voltage: f64) -> f64 {
    let raw = (voltage * ADC_RESOLUTION / PGA_RANGE)
        .clamp(-ADC_RESOLUTION, ADC_RESOLUTION - 1.0) as i16;
    f64::from(raw) * PGA_RANGE / ADC_RESOLUTION
}

/// A few tones under a slow envelope in the middle of the recording,
/// silence on either side.
fn mic_signal(t: f64, duration: f64) -> f64 {
    let (start, end) = (duration * 0.3, duration * 0.7);
    let envelope = if (start..end).contains(&t) {
        (std::f64::consts::PI * (t - start) / (end - start))
            .sin()
            .powi(2)
    } else {
        0.0
    };
    let tones = [(97.0, 0.35), (181.0, 0.2), (263.0, 0.1)]
        .iter()
        .map(|&(freq, amp)| amp * (2.0 * std::f64::consts::PI * freq * t).sin())
        .sum::<f64>();

    MIC_BIAS + envelope * tones
}

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let noise = Uniform::new_inclusive(-NOISE, NOISE);

    let output_path = "adc_log.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let duration = f64::from(N_SAMPLES) / SAMPLE_RATE;
    for index in 0..N_SAMPLES {
        let t = f64::from(index) / SAMPLE_RATE;
        let voltage = quantize(mic_signal(t, duration) + noise.sample(&mut rng));
        writer
            .serialize(Sample::new(index, voltage))
            .with_context(|| format!("writing sample {index}"))?;
    }
    writer.flush().context("flushing CSV writer")?;

    println!(
        "Wrote {N_SAMPLES} samples ({duration:.1} s at {SAMPLE_RATE} SPS) to {output_path}"
    );
    Ok(())
}
