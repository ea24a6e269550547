use super::{ChartSeries, PIE_BORDER_COLOR, PIE_BORDER_WIDTH};
use leptos::prelude::*;

const SIZE: f64 = 200.0;
const RADIUS: f64 = 90.0;

#[component]
pub fn PieChart(
    #[prop(into)] series: Signal<ChartSeries>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let center = SIZE / 2.0;

    let wedges = move || {
        series
            .get()
            .slices()
            .into_iter()
            .map(|slice| {
                let title = format!("{}: {} ({})", slice.label, slice.value, slice.percent_label());
                if slice.is_full_circle() {
                    view! {
                        <circle
                            cx=center
                            cy=center
                            r=RADIUS
                            fill=slice.color
                            stroke=PIE_BORDER_COLOR
                            stroke-width=PIE_BORDER_WIDTH
                            aria-label=title
                        />
                    }
                    .into_any()
                } else {
                    view! {
                        <path
                            d=slice.path(center, center, RADIUS)
                            fill=slice.color
                            stroke=PIE_BORDER_COLOR
                            stroke-width=PIE_BORDER_WIDTH
                            aria-label=title
                        />
                    }
                    .into_any()
                }
            })
            .collect_view()
    };

    let legend = move || {
        series
            .get()
            .slices()
            .into_iter()
            .map(|slice| {
                view! {
                    <li class="flex items-center gap-2 text-xs">
                        <span
                            class="inline-block size-3 rounded-sm border"
                            style=format!("background-color: {}; border-color: {}", slice.color, PIE_BORDER_COLOR)
                        />
                        <span>{slice.label.clone()}</span>
                        <span class="text-muted-foreground">{slice.percent_label()}</span>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class=format!("flex flex-col items-center gap-4 sm:flex-row {class}") data-name="PieChart">
            <Show
                when=move || series.with(|s| !s.is_empty() && s.total() > 0.0)
                fallback=|| view! { <div class="text-xs text-muted-foreground">"No chart data."</div> }
            >
                <svg
                    viewBox=format!("0 0 {SIZE} {SIZE}")
                    class="size-64"
                    role="img"
                    aria-label="Promet by region"
                >
                    {wedges}
                </svg>
                <ul class="flex flex-col gap-1">{legend}</ul>
            </Show>
        </div>
    }
}
