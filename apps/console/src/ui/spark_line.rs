use dioxus::prelude::*;
use ids_console::models::{polyline_points, SeriesPoint};

const VIEW_WIDTH: f64 = 300.0;

#[component]
pub fn SparkLine(
    data: Vec<SeriesPoint>,
    #[props(into, default = "Event Volume".to_string())] title: String,
    #[props(default = 220)] height: u32,
) -> Element {
    let points = polyline_points(&data, VIEW_WIDTH, f64::from(height));

    rsx! {
        div { class: "h-full rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
            h3 { class: "mb-3 text-sm font-semibold text-slate-800", "{title}" }
            svg {
                class: "w-full",
                view_box: "0 0 {VIEW_WIDTH} {height}",
                height: "{height}",
                polyline {
                    points: "{points}",
                    fill: "none",
                    stroke: "#2563eb",
                    stroke_width: "2",
                }
            }
        }
    }
}
