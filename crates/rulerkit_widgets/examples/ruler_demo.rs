//! Headless ruler session
//!
//! Drives a RulerView the way a list host would: deferred setup, the initial
//! scroll to the delegate's seed value, then a simulated drag that settles on
//! a tick. Run with `RUST_LOG=debug` to watch the state transitions.

use rulerkit_paint::Rect;
use rulerkit_scale::ScaleDelegate;
use rulerkit_widgets::{RulerConfig, RulerView, Widget, WidgetRegistry};

struct PrintingDelegate;

impl ScaleDelegate for PrintingDelegate {
    fn initial_value(&self, label: &str) -> i32 {
        println!("seeding {label} scale at 62");
        62
    }

    fn on_value_settled(&mut self, label: &str, value: i32) {
        println!("settled: {value} {label}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut registry = WidgetRegistry::new();
    let mut ruler = RulerView::new(
        &mut registry,
        Rect::new(0.0, 0.0, 120.0, 480.0),
        RulerConfig::default(),
        Box::new(PrintingDelegate),
    )
    .expect("default configuration is valid");

    // Frame loop: deferred setup fires, then the initial scroll animates in
    let frame = 1.0 / 60.0;
    for _ in 0..60 {
        ruler.update(frame);
    }
    println!(
        "ready: {}, pointer reads {:?}",
        ruler.is_ready(),
        ruler.pointer().map(|p| p.value_text().to_string())
    );

    // Simulated drag: frames stream raw offsets, release corrects the target
    ruler.on_drag_begin();
    for offset in [500.0, 620.0, 700.0, 738.6] {
        ruler.on_scroll(offset);
        ruler.update(frame);
    }
    let target = ruler.on_drag_will_end(738.6);
    println!("release at 738.6, decelerating to {target}");
    ruler.on_deceleration_end(target);

    println!("final selection: {}", ruler.selected_value());
    ruler.teardown();
}
