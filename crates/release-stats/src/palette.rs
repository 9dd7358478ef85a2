//! Display colours for chart datasets.
//!
//! Purely cosmetic: the colour is attached next to each dataset for chart
//! renderers and carries no meaning of its own.

use release_core::models::{ChartMatrix, Dataset};
use serde::Serialize;

/// Fill colours cycled by dataset position.
pub const PALETTE: &[&str] = &[
    "rgba(54, 162, 235, 0.6)",
    "rgba(255, 99, 132, 0.6)",
    "rgba(75, 192, 192, 0.6)",
    "rgba(255, 159, 64, 0.6)",
    "rgba(153, 102, 255, 0.6)",
    "rgba(255, 205, 86, 0.6)",
    "rgba(201, 203, 207, 0.6)",
    "rgba(46, 139, 87, 0.6)",
];

/// A dataset with its display colour.
#[derive(Debug, Clone, Serialize)]
pub struct ColoredDataset<'a> {
    #[serde(flatten)]
    pub dataset: &'a Dataset,
    #[serde(rename = "backgroundColor")]
    pub background_color: &'static str,
}

/// Chart output with a colour on every dataset.
#[derive(Debug, Clone, Serialize)]
pub struct ColoredChart<'a> {
    pub labels: &'a [String],
    pub datasets: Vec<ColoredDataset<'a>>,
}

/// Colour for the dataset at `index`.
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Attach a palette colour to each dataset of `matrix`.
pub fn colorize(matrix: &ChartMatrix) -> ColoredChart<'_> {
    ColoredChart {
        labels: &matrix.labels,
        datasets: matrix
            .datasets
            .iter()
            .enumerate()
            .map(|(i, dataset)| ColoredDataset {
                dataset,
                background_color: color_for(i),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(series: usize) -> ChartMatrix {
        ChartMatrix {
            labels: vec!["v1".to_string()],
            datasets: (0..series)
                .map(|i| Dataset {
                    label: format!("asset{}", i),
                    data: vec![i as u64],
                })
                .collect(),
        }
    }

    #[test]
    fn test_colors_cycle() {
        assert_eq!(color_for(0), PALETTE[0]);
        assert_eq!(color_for(PALETTE.len()), PALETTE[0]);
        assert_eq!(color_for(PALETTE.len() + 2), PALETTE[2]);
    }

    #[test]
    fn test_colored_chart_keeps_core_fields() {
        let m = matrix(2);
        let value = serde_json::to_value(colorize(&m)).unwrap();

        assert_eq!(value["labels"], serde_json::json!(["v1"]));
        assert_eq!(value["datasets"][1]["label"], "asset1");
        assert_eq!(value["datasets"][1]["data"], serde_json::json!([1]));
        assert_eq!(value["datasets"][1]["backgroundColor"], PALETTE[1]);
    }

    #[test]
    fn test_colorize_empty_matrix() {
        let m = ChartMatrix::default();
        let value = serde_json::to_value(colorize(&m)).unwrap();
        assert_eq!(value, serde_json::json!({"labels": [], "datasets": []}));
    }
}
