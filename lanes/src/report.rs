//! Text and JSON rendering of measurement samples.

use crate::compare::MeasurementSample;
use crate::error::Result;

const SEPARATOR_WIDTH: usize = 100;

/// How samples are arranged in the text table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grouping {
    /// One table; the size is appended to each operation name.
    #[default]
    None,
    /// One titled table per size, in order of first appearance.
    BySize,
}

/// Renders the fixed-width comparison table.
///
/// Columns are right-aligned at widths 25/15/20/20/20. Latencies are milliseconds with
/// four decimals, speedup has two.
pub fn render_table(samples: &[MeasurementSample], grouping: Grouping) -> String {
    let mut out = String::new();
    match grouping {
        Grouping::None => {
            write_header(&mut out);
            for sample in samples {
                let name = format!("{} [{}]", sample.op().label(), sample.size());
                write_row(&mut out, &name, sample);
            }
        }
        Grouping::BySize => {
            let mut sizes: Vec<usize> = Vec::new();
            for sample in samples {
                if !sizes.contains(&sample.size()) {
                    sizes.push(sample.size());
                }
            }
            for (i, &size) in sizes.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&format!("{size} elements\n"));
                write_header(&mut out);
                for sample in samples.iter().filter(|s| s.size() == size) {
                    write_row(&mut out, sample.op().label(), sample);
                }
            }
        }
    }
    out
}

fn write_header(out: &mut String) {
    out.push_str(&format!(
        "{:>25}{:>15}{:>20}{:>20}{:>20}\n",
        "Operation", "Type", "Scalar (ms)", "Vector (ms)", "Speedup"
    ));
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');
}

fn write_row(out: &mut String, name: &str, sample: &MeasurementSample) {
    out.push_str(&format!(
        "{:>25}{:>15}{:>20.4}{:>20.4}{:>20.2}\n",
        name,
        sample.data_type().to_string(),
        sample.scalar_ms(),
        sample.vector_ms(),
        sample.speedup()
    ));
}

/// Pretty JSON array of the samples, including derived milliseconds and speedup.
pub fn render_json(samples: &[MeasurementSample]) -> Result<String> {
    Ok(serde_json::to_string_pretty(samples)?)
}
