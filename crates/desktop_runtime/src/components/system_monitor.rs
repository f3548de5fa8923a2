//! Decorative resource monitor pinned behind the windows on large viewports.

use std::collections::VecDeque;
use std::time::Duration;

use leptos::leptos_dom::helpers::IntervalHandle;

use super::*;
use system_ui::IconName;

const TICK: Duration = Duration::from_millis(50);
/// Resource gauges move once every this many ticks.
const GAUGE_EVERY_TICKS: u32 = 10;
const TRAFFIC_SAMPLES: usize = 50;
const GRAPH_WIDTH: f64 = 220.0;
const GRAPH_HEIGHT: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct WalkBounds {
    spread: f64,
    min: f64,
    max: f64,
}

const TRAFFIC_WALK: WalkBounds = WalkBounds {
    spread: 20.0,
    min: 10.0,
    max: 90.0,
};
const CPU_WALK: WalkBounds = WalkBounds {
    spread: 20.0,
    min: 10.0,
    max: 95.0,
};
const RAM_WALK: WalkBounds = WalkBounds {
    spread: 10.0,
    min: 20.0,
    max: 80.0,
};

/// One bounded random-walk step for a uniform `sample` in `[0, 1)`.
fn random_walk(value: f64, sample: f64, bounds: WalkBounds) -> f64 {
    (value + (sample - 0.5) * bounds.spread).clamp(bounds.min, bounds.max)
}

#[derive(Debug, Clone, PartialEq)]
struct MonitorReadings {
    tick: u32,
    traffic: VecDeque<f64>,
    cpu: f64,
    ram: f64,
}

impl Default for MonitorReadings {
    fn default() -> Self {
        Self {
            tick: 0,
            traffic: VecDeque::from(vec![50.0; TRAFFIC_SAMPLES]),
            cpu: 30.0,
            ram: 45.0,
        }
    }
}

impl MonitorReadings {
    fn advance(&mut self, mut sample: impl FnMut() -> f64) {
        self.tick = self.tick.wrapping_add(1);
        let last = self.traffic.back().copied().unwrap_or(50.0);
        self.traffic.pop_front();
        self.traffic.push_back(random_walk(last, sample(), TRAFFIC_WALK));

        if self.tick % GAUGE_EVERY_TICKS == 0 {
            self.cpu = random_walk(self.cpu, sample(), CPU_WALK);
            self.ram = random_walk(self.ram, sample(), RAM_WALK);
        }
    }
}

/// SVG polyline points for `samples` (percentages) stretched across the graph box.
fn traffic_polyline(samples: &VecDeque<f64>) -> String {
    let last = samples.len().saturating_sub(1).max(1) as f64;
    samples
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let x = index as f64 / last * GRAPH_WIDTH;
            let y = GRAPH_HEIGHT - value / 100.0 * GRAPH_HEIGHT;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
fn Gauge(icon: IconName, label: &'static str, value: Signal<f64>) -> impl IntoView {
    view! {
        <div data-ui-slot="gauge">
            <div data-ui-slot="gauge-label">
                <span>
                    <Icon icon=icon size=IconSize::Xs />
                    {label}
                </span>
                <span>{move || format!("{}%", value.get().round())}</span>
            </div>
            <div data-ui-slot="gauge-track">
                <div
                    data-ui-slot="gauge-fill"
                    style=move || format!("width:{:.1}%;", value.get())
                ></div>
            </div>
        </div>
    }
}

#[component]
pub(super) fn SystemMonitor() -> impl IntoView {
    let readings = create_rw_signal(MonitorReadings::default());
    let ticker = store_value(None::<IntervalHandle>);

    match set_interval_with_handle(
        move || readings.update(|readings| readings.advance(random_unit)),
        TICK,
    ) {
        Ok(handle) => ticker.set_value(Some(handle)),
        Err(err) => logging::warn!("system monitor interval unavailable: {err:?}"),
    }
    on_cleanup(move || {
        if let Some(handle) = ticker.get_value() {
            handle.clear();
        }
    });

    let points = Signal::derive(move || {
        readings.with(|readings| traffic_polyline(&readings.traffic))
    });
    let cpu = Signal::derive(move || readings.with(|readings| readings.cpu));
    let ram = Signal::derive(move || readings.with(|readings| readings.ram));

    view! {
        <aside class="system-monitor" aria-hidden="true" data-ui-kind="system-monitor">
            <div data-ui-slot="header">
                <span>"SYSTEM_MONITOR"</span>
                <Icon icon=IconName::Activity size=IconSize::Xs />
            </div>
            <div data-ui-slot="graph-label">
                <span>
                    <Icon icon=IconName::Wifi size=IconSize::Xs />
                    "UPLINK_TRAFFIC"
                </span>
                <span>"2.4 GB/s"</span>
            </div>
            <svg
                data-ui-slot="graph"
                viewBox=format!("0 0 {GRAPH_WIDTH} {GRAPH_HEIGHT}")
                preserveAspectRatio="none"
            >
                <polygon
                    data-ui-slot="graph-fill"
                    points=move || {
                        format!("0,{GRAPH_HEIGHT} {} {GRAPH_WIDTH},{GRAPH_HEIGHT}", points.get())
                    }
                ></polygon>
                <polyline data-ui-slot="graph-line" points=move || points.get()></polyline>
            </svg>
            <Gauge icon=IconName::Cpu label="CPU_CORE_01" value=cpu />
            <Gauge icon=IconName::Database label="MEMORY_ALLOC" value=ram />
            <div data-ui-slot="footer">"SECURE_SERVER_NODE_X7"</div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn random_walk_is_centered_and_bounded() {
        assert_eq!(random_walk(50.0, 0.5, TRAFFIC_WALK), 50.0);
        assert_eq!(random_walk(50.0, 1.0, TRAFFIC_WALK), 60.0);
        assert_eq!(random_walk(12.0, 0.0, TRAFFIC_WALK), 10.0);
        assert_eq!(random_walk(94.0, 1.0, CPU_WALK), 95.0);
        assert_eq!(random_walk(22.0, 0.0, RAM_WALK), 20.0);
    }

    #[test]
    fn gauges_move_only_every_tenth_tick() {
        let mut readings = MonitorReadings::default();
        for _ in 0..GAUGE_EVERY_TICKS - 1 {
            readings.advance(|| 1.0);
        }
        assert_eq!((readings.cpu, readings.ram), (30.0, 45.0));

        readings.advance(|| 1.0);
        assert_eq!((readings.cpu, readings.ram), (40.0, 50.0));
        assert_eq!(readings.traffic.len(), TRAFFIC_SAMPLES);
        assert_eq!(readings.traffic.back(), Some(&90.0));
    }

    #[test]
    fn polyline_spans_graph_box() {
        let samples = VecDeque::from(vec![100.0, 50.0, 0.0]);
        assert_eq!(traffic_polyline(&samples), "0.0,0.0 110.0,30.0 220.0,60.0");
    }
}
