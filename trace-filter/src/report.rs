use serde::Serialize;
use std::fmt::{Display, Formatter, Result};
use trapezoid_common::Real;
use trapezoidal_filter::{
    EnergyParameters, FilterResult, TraceAnalysis, TraceFilter, TriggerParameters,
};

/// Everything written to stdout for one trace.
#[derive(Debug, Serialize)]
pub(crate) struct Report<'a> {
    trigger_parameters: &'a TriggerParameters,
    energy_parameters: &'a EnergyParameters,
    #[serde(flatten)]
    analysis: &'a TraceAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    trigger_filter: Option<&'a [Real]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    energy_filter: Option<Vec<Real>>,
}

impl<'a> Report<'a> {
    pub(crate) fn new(
        filter: &'a TraceFilter,
        analysis: &'a TraceAnalysis,
        trace: &[Real],
        include_filters: bool,
    ) -> FilterResult<Self> {
        let energy_filter = include_filters
            .then(|| filter.energy_filter(trace, analysis.baseline))
            .transpose()?;
        Ok(Self {
            trigger_parameters: filter.trigger_parameters(),
            energy_parameters: filter.energy_parameters(),
            analysis,
            trigger_filter: include_filters.then_some(analysis.trigger_filter.as_slice()),
            energy_filter,
        })
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let analysis = self.analysis;
        writeln!(f, "Triggers: {:?}", analysis.triggers)?;
        writeln!(f, "Baseline: {}", analysis.baseline)?;
        writeln!(
            f,
            "Window: rise {}..={}, gap {}..={}, fall {}..={}",
            analysis.window.rise.start,
            analysis.window.rise.end,
            analysis.window.gap.start,
            analysis.window.gap.end,
            analysis.window.fall.start,
            analysis.window.fall.end
        )?;
        write!(f, "Energy: {}", analysis.energy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn setup() -> (TraceFilter, Vec<Real>) {
        let filter = TraceFilter::new(
            TriggerParameters {
                length: 10,
                gap: 5,
                threshold: 50.0,
            },
            EnergyParameters {
                length: 10,
                gap: 5,
                decay_constant: 1e9,
            },
        )
        .unwrap();
        let trace = (0..200)
            .map(|i| if i < 100 { 20.0 } else { 120.0 })
            .collect();
        (filter, trace)
    }

    #[test]
    fn json_omits_filters_by_default() {
        let (filter, trace) = setup();
        let analysis = filter.analyse(&trace).unwrap();
        let report = Report::new(&filter, &analysis, &trace, false).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["trigger"], 104);
        assert_approx_eq!(json["baseline"].as_f64().unwrap(), 20.0);
        assert_eq!(json["window"]["rise"]["start"], 84);
        assert_eq!(json["energy_parameters"]["length"], 10);
        assert!(json.get("trigger_filter").is_none());
        assert!(json.get("energy_filter").is_none());
    }

    #[test]
    fn json_includes_filters_on_request() {
        let (filter, trace) = setup();
        let analysis = filter.analyse(&trace).unwrap();
        let report = Report::new(&filter, &analysis, &trace, true).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["trigger_filter"].as_array().unwrap().len(), 200);
        assert_eq!(json["energy_filter"].as_array().unwrap().len(), 200);
    }

    #[test]
    fn summary() {
        let (filter, trace) = setup();
        let analysis = filter.analyse(&trace).unwrap();
        let report = Report::new(&filter, &analysis, &trace, false).unwrap();
        let summary = report.to_string();
        assert!(summary.starts_with("Triggers: [104]\nBaseline: 20\n"));
        assert!(summary.contains("Window: rise 84..=93, gap 94..=98, fall 99..=108"));
    }
}
