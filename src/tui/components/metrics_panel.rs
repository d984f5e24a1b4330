//! Summary counters and the SLA achievement gauge

use iocraft::prelude::*;

use crate::dashboard::metrics::MetricsView;
use crate::tui::theme::theme;

/// Cells in the achievement bar
const GAUGE_WIDTH: usize = 24;

#[derive(Default, Props)]
pub struct MetricsPanelProps {
    pub metrics: MetricsView,
}

#[component]
pub fn MetricsPanel(props: &MetricsPanelProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let m = &props.metrics;

    let counters = [
        ("Total", m.total.clone(), theme.text),
        ("High", m.high.clone(), theme.priority_high),
        ("Medium", m.medium.clone(), theme.priority_medium),
        ("Low", m.low.clone(), theme.priority_low),
        ("Unassigned", m.unassigned.clone(), theme.text),
    ];

    let (achieved, missed) = m
        .gauge
        .map(|g| g.segments(GAUGE_WIDTH))
        .unwrap_or((0, GAUGE_WIDTH));
    let missed_color = if m.gauge.is_some() {
        theme.gauge_missed
    } else {
        theme.text_dimmed
    };

    let extras: Vec<String> = m
        .breached
        .map(|n| format!("breached {n}"))
        .into_iter()
        .chain(m.by_status.iter().map(|(status, n)| format!("{status} {n}")))
        .collect();

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            flex_wrap: FlexWrap::Wrap,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding_left: 1,
            padding_right: 1,
            column_gap: 3,
        ) {
            #(counters.into_iter().map(|(label, value, color)| element! {
                View(flex_direction: FlexDirection::Row, gap: 1) {
                    Text(content: format!("{label}:"), color: theme.text_dimmed)
                    Text(content: value, color, weight: Weight::Bold)
                }
            }))

            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(content: "SLA:", color: theme.text_dimmed)
                Text(content: "█".repeat(achieved), color: theme.gauge_achieved)
                Text(content: "░".repeat(missed), color: missed_color)
                Text(content: m.sla_percentage.clone(), weight: Weight::Bold, color: theme.text)
            }

            #((!extras.is_empty()).then(|| element! {
                Text(content: extras.join("  "), color: theme.text_dimmed)
            }))
        }
    }
}
