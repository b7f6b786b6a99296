/// Data layer: the sample table and its loader.
///
/// Architecture:
/// ```text
///    adc_log.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SampleTable
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ SampleTable  │  named columns of CellValue
///   └─────────────┘
/// ```

pub mod loader;
pub mod model;
