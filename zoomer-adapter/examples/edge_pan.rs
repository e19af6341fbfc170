// Example: a simulated session with virtual time, edge panning and a sampled transition.
use zoomer::{Key, Rect, Surface, Viewport, ZoomOptions, ZoomRequest};
use zoomer_adapter::{Controller, ElementId, HeadlessSurface};

fn main() {
    let surface = HeadlessSurface::new(Viewport::new(1280.0, 720.0), Viewport::new(4000.0, 3000.0))
        .with_element(ElementId(7), Rect::new(600.0, 300.0, 160.0, 90.0));
    let mut c = match Controller::new(surface, ZoomOptions::default()) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("cannot zoom: {err}");
            return;
        }
    };

    c.zoom_to(ZoomRequest::element(ElementId(7)), 0);

    // Simulate a 60fps host loop with the pointer parked near the bottom-right corner.
    let mut now_ms = 0u64;
    while now_ms < 1600 {
        now_ms += 16;
        if now_ms == 800 {
            c.on_pointer_move(1275.0, 715.0);
        }
        c.tick(now_ms);

        if now_ms % 160 == 0 {
            let frame = c.frame(now_ms);
            println!(
                "t={now_ms}ms scale={:.3} offset=({:.1}, {:.1}) scroll={:?}",
                frame.scale,
                frame.offset.x,
                frame.offset.y,
                c.surface().scroll_offset()
            );
        }
    }

    c.on_key_up(Key::Escape, now_ms);
    println!(
        "after escape: level={} transform={:?}",
        c.zoom().zoom_level(),
        c.surface().transform()
    );
}
