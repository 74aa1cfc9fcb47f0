//! 用户互动折线图
//!
//! 数据为静态样例，绘制为纯 SVG。

use leptos::prelude::*;

use crate::styles;
use crate::theme::use_theme;

/// 一天的互动数据
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyInteraction {
    pub day: &'static str,
    pub views: u32,
    pub interactions: u32,
    pub messages: u32,
}

const fn day(day: &'static str, views: u32, interactions: u32, messages: u32) -> DailyInteraction {
    DailyInteraction {
        day,
        views,
        interactions,
        messages,
    }
}

pub const SAMPLE_WEEK: [DailyInteraction; 7] = [
    day("Mon", 420, 240, 24),
    day("Tue", 380, 139, 22),
    day("Wed", 520, 380, 29),
    day("Thu", 478, 390, 20),
    day("Fri", 589, 480, 21),
    day("Sat", 439, 380, 25),
    day("Sun", 549, 430, 31),
];

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 220.0;
const PADDING: f64 = 20.0;

/// 将一组数值映射为 SVG `points` 属性
///
/// x 轴均匀分布，y 轴按 `max` 归一化（SVG 坐标向下为正）。
pub fn polyline_points(values: &[u32], max: u32, width: f64, height: f64, padding: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let max = max.max(1) as f64;
    let inner_w = width - padding * 2.0;
    let inner_h = height - padding * 2.0;
    let step = if values.len() > 1 {
        inner_w / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = padding + step * i as f64;
            let y = padding + inner_h * (1.0 - (v as f64 / max).min(1.0));
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 各系列共享的纵轴上限
pub fn series_max(data: &[DailyInteraction]) -> u32 {
    data.iter()
        .flat_map(|d| [d.views, d.interactions, d.messages])
        .max()
        .unwrap_or(0)
}

#[component]
pub fn InteractionChart() -> impl IntoView {
    let theme = use_theme();
    let max = series_max(&SAMPLE_WEEK);

    let series = [
        ("Views", "#3b82f6", SAMPLE_WEEK.map(|d| d.views)),
        ("Interactions", "#10b981", SAMPLE_WEEK.map(|d| d.interactions)),
        ("Messages", "#f59e0b", SAMPLE_WEEK.map(|d| d.messages)),
    ];
    let step = (WIDTH - PADDING * 2.0) / (SAMPLE_WEEK.len() - 1) as f64;

    view! {
        <div class=move || format!("card border shadow-sm {}", styles::surface(theme.is_dark()))>
            <div class="card-body">
                <h3 class="card-title">"User Interactions"</h3>
                <svg viewBox=format!("0 0 {} {}", WIDTH, HEIGHT + PADDING) class="w-full h-56">
                    {series
                        .iter()
                        .map(|(_, color, values)| view! {
                            <polyline
                                fill="none"
                                stroke=*color
                                stroke-width="2"
                                points=polyline_points(values, max, WIDTH, HEIGHT, PADDING)
                            />
                        })
                        .collect_view()}
                    {SAMPLE_WEEK
                        .iter()
                        .enumerate()
                        .map(|(i, d)| view! {
                            <text
                                x=format!("{:.1}", PADDING + step * i as f64)
                                y=format!("{:.1}", HEIGHT + PADDING / 2.0)
                                text-anchor="middle"
                                font-size="12"
                                fill="currentColor"
                            >
                                {d.day}
                            </text>
                        })
                        .collect_view()}
                </svg>
                <div class="flex gap-4 text-sm">
                    {series
                        .iter()
                        .map(|(label, color, _)| view! {
                            <span class="flex items-center gap-1">
                                <span class="inline-block w-3 h-3 rounded-full" style=format!("background:{}", color)></span>
                                {*label}
                            </span>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_span_the_padded_area() {
        let points = polyline_points(&[0, 50, 100], 100, 120.0, 60.0, 10.0);
        assert_eq!(points, "10.0,50.0 60.0,30.0 110.0,10.0");
    }

    #[test]
    fn values_above_max_are_capped() {
        let points = polyline_points(&[200], 100, 100.0, 100.0, 0.0);
        assert_eq!(points, "0.0,0.0");
    }

    #[test]
    fn empty_series_and_zero_max() {
        assert_eq!(polyline_points(&[], 10, 100.0, 100.0, 0.0), "");
        assert_eq!(polyline_points(&[0, 0], 0, 100.0, 100.0, 0.0), "0.0,100.0 100.0,100.0");
    }

    #[test]
    fn sample_max_is_peak_views() {
        assert_eq!(series_max(&SAMPLE_WEEK), 589);
    }
}
