use std::f64::consts::PI;

use dioxus::prelude::*;
use ids_console::models::{donut_shares, DonutSlice};

const COLORS: [&str; 5] = ["#16a34a", "#60a5fa", "#f59e0b", "#ef4444", "#8b5cf6"];
const RADIUS: f64 = 35.0;
const RING_WIDTH: f64 = 15.0;

#[component]
pub fn Donut(
    data: Vec<DonutSlice>,
    #[props(into, default = "Chart title".to_string())] title: String,
    #[props(default = 220)] height: u32,
) -> Element {
    let shares = donut_shares(&data);
    let circumference = 2.0 * PI * RADIUS;

    let mut offset = 0.0;
    let arcs: Vec<(String, String, &str)> = shares
        .iter()
        .enumerate()
        .map(|(idx, share)| {
            let length = share * circumference;
            let arc = (
                format!("{length:.2} {circumference:.2}"),
                format!("{:.2}", -offset),
                COLORS[idx % COLORS.len()],
            );
            offset += length;
            arc
        })
        .collect();

    let legend: Vec<(String, &str)> = data
        .iter()
        .zip(shares.iter())
        .enumerate()
        .map(|(idx, (slice, share))| {
            (
                format!("{} · {} ({:.0}%)", slice.name, slice.value, share * 100.0),
                COLORS[idx % COLORS.len()],
            )
        })
        .collect();

    rsx! {
        div { class: "h-full rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
            h3 { class: "mb-3 text-sm font-semibold text-slate-800", "{title}" }
            div { class: "flex items-center gap-4",
                svg {
                    view_box: "0 0 100 100",
                    height: "{height}",
                    g { transform: "rotate(-90 50 50)",
                        for (dash, dash_offset, color) in arcs {
                            circle {
                                cx: "50",
                                cy: "50",
                                r: "{RADIUS}",
                                fill: "none",
                                stroke: color,
                                stroke_width: "{RING_WIDTH}",
                                stroke_dasharray: dash,
                                stroke_dashoffset: dash_offset,
                            }
                        }
                    }
                }
                ul { class: "space-y-1 text-xs text-slate-600",
                    for (idx, (label, color)) in legend.into_iter().enumerate() {
                        li { key: "{idx}", class: "flex items-center gap-2",
                            span {
                                class: "inline-block h-2 w-2 rounded-full",
                                style: "background-color: {color}",
                            }
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
