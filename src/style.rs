use anyhow::{ensure, Context};
use serde::Deserialize;
use std::path::Path;

/// Largest accepted `point-type-offset`; gnuplot point types are small integers.
pub const MAX_POINT_TYPE_OFFSET: usize = 1000;

/// Visual settings of the cross section plot.
///
/// Every field is optional in a style file; missing fields keep the
/// defaults listed below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PlotStyle {
    /// gnuplot terminal specification.
    /// Default: `pngcairo enhanced font 'Arial,10' size 800,600`.
    pub terminal: String,

    /// Default: `Cross Section Plot`.
    pub title: String,

    /// Default: `Energy (MeV)`.
    pub xlabel: String,

    /// Default: `Cross Section (mb)`.
    pub ylabel: String,

    /// Minimum value of X axis. Default: `0`.
    pub xmin: f64,

    /// Maximum value of X axis. Default: `40`.
    pub xmax: f64,

    /// Default: `true`.
    pub grid: bool,

    /// Saturation of the external series colors. Default: `1.0`.
    pub saturation: f64,

    /// Lightness of the external series colors. Default: `0.5`.
    pub lightness: f64,

    /// Point type of the first external series; the next ones count up.
    /// Default: `7`.
    pub point_type_offset: usize,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            terminal: "pngcairo enhanced font 'Arial,10' size 800,600".to_owned(),
            title: "Cross Section Plot".to_owned(),
            xlabel: "Energy (MeV)".to_owned(),
            ylabel: "Cross Section (mb)".to_owned(),
            xmin: 0.0,
            xmax: 40.0,
            grid: true,
            saturation: 1.0,
            lightness: 0.5,
            point_type_offset: 7,
        }
    }
}

impl PlotStyle {
    pub fn from_reader(reader: impl std::io::Read) -> anyhow::Result<Self> {
        let style: Self = serde_json::from_reader(reader)?;
        style.validate()?;
        Ok(style)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            (0.0..=1.0).contains(&self.saturation),
            "saturation must be within [0, 1], got {}",
            self.saturation
        );
        ensure!(
            (0.0..=1.0).contains(&self.lightness),
            "lightness must be within [0, 1], got {}",
            self.lightness
        );
        ensure!(
            self.xmin < self.xmax,
            "xmin ({}) must be less than xmax ({})",
            self.xmin,
            self.xmax
        );
        ensure!(
            self.point_type_offset <= MAX_POINT_TYPE_OFFSET,
            "point-type-offset must be at most {}, got {}",
            MAX_POINT_TYPE_OFFSET,
            self.point_type_offset
        );
        Ok(())
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("cannot open style file {:?}", path))?;
        Self::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("invalid style file {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let style = PlotStyle::from_reader("{}".as_bytes()).unwrap();
        assert_eq!(style, PlotStyle::default());
    }

    #[test]
    fn partial_override() {
        let json = r#"{"title": "n + Fe56", "xmax": 20, "point-type-offset": 1}"#;
        let style = PlotStyle::from_reader(json.as_bytes()).unwrap();
        assert_eq!(style.title, "n + Fe56");
        assert_eq!(style.xmax, 20.0);
        assert_eq!(style.point_type_offset, 1);
        assert_eq!(style.xlabel, "Energy (MeV)");
        assert!(style.grid);
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(PlotStyle::from_reader(r#"{"grid": "yes"}"#.as_bytes()).is_err());
    }

    #[test]
    fn default_is_valid() {
        PlotStyle::default().validate().unwrap();
    }

    fn rejection(json: &str) -> String {
        let err = PlotStyle::from_reader(json.as_bytes()).unwrap_err();
        format!("{:#}", err)
    }

    #[test]
    fn rejects_out_of_range_color() {
        assert!(rejection(r#"{"saturation": 3.0}"#).contains("saturation"));
        assert!(rejection(r#"{"saturation": -0.1}"#).contains("saturation"));
        assert!(rejection(r#"{"lightness": -1}"#).contains("lightness"));
        assert!(rejection(r#"{"lightness": 1.5}"#).contains("lightness"));
    }

    #[test]
    fn rejects_reversed_or_empty_range() {
        assert!(rejection(r#"{"xmin": 40, "xmax": 0}"#).contains("xmin"));
        assert!(rejection(r#"{"xmin": 5, "xmax": 5}"#).contains("xmin"));
    }

    #[test]
    fn rejects_huge_point_type_offset() {
        assert!(rejection(r#"{"point-type-offset": 4294967295}"#)
            .contains("point-type-offset"));
        let at_limit = format!(r#"{{"point-type-offset": {}}}"#, MAX_POINT_TYPE_OFFSET);
        assert!(PlotStyle::from_reader(at_limit.as_bytes()).is_ok());
    }

    #[test]
    fn missing_file() {
        let err = PlotStyle::from_path("/nonexistent/style.json").unwrap_err();
        assert!(format!("{:#}", err).contains("cannot open style file"));
    }
}
