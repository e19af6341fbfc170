// Example: driving the core controller with a minimal host that prints every write.
use zoomer::{
    BoxLayoutStyle, Events, Listener, Point, Rect, RenderTarget, Scheduler, Surface, TimerId,
    TransformStyle, Transition, Viewport, ZoomController, ZoomOptions, ZoomOutOptions,
    ZoomRequest,
};

struct PrintHost {
    scroll: Point,
    next_timer: u64,
}

impl Surface for PrintHost {
    type Element = ();

    fn supports_transforms(&self) -> bool {
        true
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(1000.0, 800.0)
    }

    fn scroll_offset(&self) -> Point {
        self.scroll
    }

    fn scroll_to(&mut self, offset: Point) {
        println!("scroll_to {offset:?}");
        self.scroll = offset;
    }

    fn bounding_rect(&self, _element: &()) -> Rect {
        Rect::new(50.0, 50.0, 200.0, 100.0)
    }

    fn apply_transform(&mut self, _target: &RenderTarget<()>, style: &TransformStyle) {
        println!(
            "transform-origin={:?} transform={:?}",
            style.css_origin(),
            style.css_transform()
        );
    }

    fn apply_box_layout(&mut self, _target: &RenderTarget<()>, style: &BoxLayoutStyle) {
        println!("box layout {style:?}");
    }

    fn set_zoomed_marker(&mut self, zoomed: bool) {
        println!("zoomed marker: {zoomed}");
    }

    fn install_transition(&mut self, _target: &RenderTarget<()>, transition: &Transition) {
        println!("transition: {}", transition.css());
    }
}

impl Scheduler for PrintHost {
    fn schedule_timeout(&mut self, delay_ms: u64) -> TimerId {
        self.next_timer += 1;
        println!("timeout #{} in {delay_ms}ms", self.next_timer);
        TimerId(self.next_timer)
    }

    fn schedule_interval(&mut self, period_ms: u64) -> TimerId {
        self.next_timer += 1;
        println!("interval #{} every {period_ms}ms", self.next_timer);
        TimerId(self.next_timer)
    }

    fn cancel(&mut self, id: TimerId) {
        println!("cancel #{}", id.0);
    }
}

impl Events for PrintHost {
    fn subscribe(&mut self, listener: Listener) {
        println!("subscribe {listener:?}");
    }

    fn unsubscribe(&mut self, listener: Listener) {
        println!("unsubscribe {listener:?}");
    }
}

fn main() {
    let mut host = PrintHost {
        scroll: Point::new(200.0, 100.0),
        next_timer: 0,
    };
    let mut zoom = match ZoomController::new(&mut host, ZoomOptions::default()) {
        Ok(zoom) => zoom,
        Err(err) => {
            eprintln!("cannot zoom: {err}");
            return;
        }
    };

    let outcome = zoom.zoom_to(&mut host, ZoomRequest::element(()));
    println!("resolved={:?} level={}", outcome.target, zoom.zoom_level());

    // The host would call this once the engage timeout (#1) fires.
    zoom.on_timer(&mut host, TimerId(1));
    zoom.on_pointer_move(990.0, 10.0);
    // ...and this on every tick of the pan interval (#2).
    zoom.on_timer(&mut host, TimerId(2));

    zoom.zoom_out(&mut host, ZoomOutOptions::default());
    println!("level={} offset={:?}", zoom.zoom_level(), zoom.offset());
}
