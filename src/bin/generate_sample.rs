//! Writes `model.json` and `sample_data.csv` into the working directory so
//! the predictor can be tried without a training pipeline.

use anyhow::{Context, Result};

#[allow(dead_code)]
#[path = "../data/schema.rs"]
mod schema;
#[path = "../model/sample.rs"]
mod sample;

use schema::FEATURES;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Normalised readings for one hour: a daily traffic cycle drives the
/// combustion pollutants, the rest is noise.
fn hourly_reading(hour: usize, rng: &mut SimpleRng) -> Vec<f64> {
    let cycle = 0.5 - 0.4 * (2.0 * std::f64::consts::PI * (hour as f64 - 3.0) / 24.0).cos();
    FEATURES
        .iter()
        .map(|&name| {
            let base = match name {
                "CO" | "NO" | "NOX" | "NO2" | "traffic" => cycle,
                "O3" | "TMP" => 1.0 - cycle,
                _ => 0.5,
            };
            let v = base + (rng.next_f64() - 0.5) * 0.2;
            (v.clamp(0.0, 1.0) * 100.0).round() / 100.0
        })
        .collect()
}

fn main() -> Result<()> {
    let model = sample::sample_model_json(&FEATURES);
    std::fs::write("model.json", serde_json::to_string_pretty(&model)?)
        .context("writing model.json")?;

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path("sample_data.csv").context("creating sample_data.csv")?;

    let mut header = vec!["hour".to_string()];
    header.extend(FEATURES.iter().map(|f| f.to_string()));
    writer.write_record(&header)?;

    let n_rows = 48;
    for hour in 0..n_rows {
        let mut record = vec![format!("{:02}:00", hour % 24)];
        record.extend(hourly_reading(hour, &mut rng).iter().map(|v| v.to_string()));
        writer.write_record(&record)?;
    }
    writer.flush()?;

    println!("Wrote model.json and sample_data.csv ({n_rows} rows)");
    Ok(())
}
