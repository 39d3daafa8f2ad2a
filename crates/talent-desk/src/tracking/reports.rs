use serde::Serialize;

/// Applications and hires attributed to one sourcing channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEffectiveness {
    pub source: String,
    pub applications: u32,
    pub hires: u32,
}

impl SourceEffectiveness {
    pub fn hire_rate_pct(&self) -> f64 {
        percentage(self.hires, self.applications)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunnelStage {
    pub stage: String,
    pub count: u32,
}

/// Sourcing and funnel figures behind the hiring report page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiringReport {
    pub headline: HeadlineMetrics,
    pub sources: Vec<SourceEffectiveness>,
    pub funnel: Vec<FunnelStage>,
}

/// Period-level figures reported as-is rather than derived from sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadlineMetrics {
    pub time_to_hire_days: u32,
    pub cost_per_hire_usd: u32,
    pub offer_acceptance_pct: u32,
}

impl HeadlineMetrics {
    /// Cost per hire with thousands separators, e.g. `$4,200`.
    pub fn cost_per_hire_display(&self) -> String {
        let digits = self.cost_per_hire_usd.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        format!("${grouped}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceEffectivenessView {
    pub source: String,
    pub applications: u32,
    pub hires: u32,
    pub hire_rate_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelStageView {
    pub stage: String,
    pub count: u32,
    /// Share of the first stage that reached this one.
    pub conversion_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiringReportView {
    #[serde(flatten)]
    pub headline: HeadlineMetrics,
    pub total_applications: u32,
    pub total_hires: u32,
    pub overall_hire_rate_pct: f64,
    pub sources: Vec<SourceEffectivenessView>,
    pub funnel: Vec<FunnelStageView>,
}

impl HiringReport {
    pub fn standard() -> Self {
        let sources = [
            ("LinkedIn", 245, 18),
            ("Indeed", 189, 12),
            ("Referrals", 67, 15),
            ("Company Website", 156, 8),
        ]
        .into_iter()
        .map(|(source, applications, hires)| SourceEffectiveness {
            source: source.to_string(),
            applications,
            hires,
        })
        .collect();

        let funnel = [
            ("Applied", 657),
            ("Screening", 234),
            ("Technical", 89),
            ("Final", 53),
            ("Offer", 34),
            ("Hired", 28),
        ]
        .into_iter()
        .map(|(stage, count)| FunnelStage {
            stage: stage.to_string(),
            count,
        })
        .collect();

        Self {
            headline: HeadlineMetrics {
                time_to_hire_days: 32,
                cost_per_hire_usd: 4_200,
                offer_acceptance_pct: 78,
            },
            sources,
            funnel,
        }
    }

    /// Source with the best hire rate; ties keep the earlier source.
    pub fn most_effective_source(&self) -> Option<&SourceEffectiveness> {
        self.sources.iter().fold(None, |best, source| match best {
            Some(current) if current.hire_rate_pct() >= source.hire_rate_pct() => Some(current),
            _ => Some(source),
        })
    }

    pub fn view(&self) -> HiringReportView {
        let total_applications = self.sources.iter().map(|source| source.applications).sum();
        let total_hires = self.sources.iter().map(|source| source.hires).sum();

        HiringReportView {
            headline: self.headline,
            total_applications,
            total_hires,
            overall_hire_rate_pct: percentage(total_hires, total_applications),
            sources: self
                .sources
                .iter()
                .map(|source| SourceEffectivenessView {
                    source: source.source.clone(),
                    applications: source.applications,
                    hires: source.hires,
                    hire_rate_pct: source.hire_rate_pct(),
                })
                .collect(),
            funnel: funnel_view(&self.funnel),
        }
    }
}

/// Stage counts with conversion relative to the first stage.
pub(crate) fn funnel_view(stages: &[FunnelStage]) -> Vec<FunnelStageView> {
    let baseline = stages.first().map(|stage| stage.count).unwrap_or_default();
    stages
        .iter()
        .map(|stage| FunnelStageView {
            stage: stage.stage.clone(),
            count: stage.count,
            conversion_pct: percentage(stage.count, baseline),
        })
        .collect()
}

/// Percentage rounded to one decimal place; zero when the denominator is zero.
pub(crate) fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (f64::from(part) * 1000.0 / f64::from(whole)).round() / 10.0
}
