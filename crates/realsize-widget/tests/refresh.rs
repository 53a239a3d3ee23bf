use std::cell::{Cell, RefCell};
use std::rc::Rc;

use realsize_core::*;
use realsize_widget::{ScalableWidget, WidgetFont};

type Shared = Rc<RefCell<ScalableWidget<HeadlessWidget>>>;

fn setup(dpi: &Rc<Cell<u32>>) -> (ScaleContext, Shared) {
    let source = {
        let dpi = dpi.clone();
        move || -> realsize_core::error::Result<u32> { Ok(dpi.get()) }
    };
    let ctx = ScaleContext::new(source).unwrap();
    let state = ctx.state();

    let widget = Rc::new(RefCell::new(ScalableWidget::new(HeadlessWidget::new())));
    {
        let mut w = widget.borrow_mut();
        w.set_scaled_preferred_size(Some(RealDimension::new(2.0, 0.5)), &state)
            .unwrap();
        w.set_maximum_size(PixelDimension::new(400, 300), &state).unwrap();
        w.set_font(ScalableFont::new("Sans", FontStyle::PLAIN, 12.0, &state), &state)
            .unwrap();
    }
    ctx.track(&widget);
    (ctx, widget)
}

#[test]
fn test_resolution_change_reaches_sizes_and_font() {
    let dpi = Rc::new(Cell::new(96));
    let (ctx, widget) = setup(&dpi);
    {
        let w = widget.borrow();
        assert_eq!(w.size(SizeKind::Preferred), PixelDimension::new(192, 48));
        assert_eq!(w.target().font().map(Font::size), Some(16));
    }

    dpi.set(144);
    assert_eq!(ctx.refresh_resolution(), Ok(true));

    let w = widget.borrow();
    assert_eq!(w.size(SizeKind::Preferred), PixelDimension::new(288, 72));
    assert_eq!(w.size(SizeKind::Maximum), PixelDimension::new(400, 300));
    assert_eq!(w.target().font().map(Font::size), Some(24));
    match w.font() {
        Some(WidgetFont::Scalable(f)) => assert_eq!(f.unscaled_size(), 12.0),
        other => panic!("unexpected font {other:?}"),
    }
}

#[test]
fn test_unchanged_resolution_writes_nothing() {
    let dpi = Rc::new(Cell::new(96));
    let (ctx, widget) = setup(&dpi);
    let before = {
        let w = widget.borrow();
        (w.writes(SizeKind::Preferred), w.font_writes())
    };

    assert_eq!(ctx.refresh_resolution(), Ok(false));
    let w = widget.borrow();
    assert_eq!((w.writes(SizeKind::Preferred), w.font_writes()), before);
}

#[test]
fn test_scale_and_text_scale_through_context() {
    let dpi = Rc::new(Cell::new(96));
    let (ctx, widget) = setup(&dpi);

    ctx.set_scale(0.5);
    ctx.set_text_scale(2.0);
    let w = widget.borrow();
    assert_eq!(w.size(SizeKind::Preferred), PixelDimension::new(96, 24));
    // 12pt * 48 ppi * 2.0 / 72
    assert_eq!(w.target().font().map(Font::size), Some(16));
}

#[test]
fn test_dropped_widget_stops_tracking() {
    let dpi = Rc::new(Cell::new(96));
    let (ctx, widget) = setup(&dpi);
    assert_eq!(ctx.observer_count(), 1);

    drop(widget);
    dpi.set(120);
    assert_eq!(ctx.refresh_resolution(), Ok(true));
    assert_eq!(ctx.observer_count(), 0);
}
