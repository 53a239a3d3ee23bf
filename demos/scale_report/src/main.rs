//! Prints how a headless widget's sizes and font follow the scale state.
//!
//! Usage: `scale_report [scale...]` (defaults to 1.0 1.5 2.0). Set
//! `REALSIZE_DPI` to pretend to be on another display.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use realsize_core::prelude::*;
use realsize_platform::{detect_source, init_logging};
use realsize_widget::ScalableWidget;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let scales: Vec<f32> = std::env::args()
        .skip(1)
        .map(|a| a.parse::<f32>().with_context(|| format!("bad scale {a:?}")))
        .collect::<anyhow::Result<_>>()?;
    let scales = if scales.is_empty() {
        vec![1.0, 1.5, 2.0]
    } else {
        scales
    };

    let config = ScaleConfig::default();
    let ctx = ScaleContext::with_config(&config, detect_source(&config))?;
    log::info!("resolution: {} ppi", ctx.resolution());

    let widget = Rc::new(RefCell::new(ScalableWidget::new(HeadlessWidget::new())));
    {
        let state = ctx.state();
        let mut w = widget.borrow_mut();
        w.set_scaled_minimum_size(Some(RealDimension::new(1.0, 0.25)), &state)?;
        w.set_scaled_preferred_size(Some(RealDimension::new(3.0, 0.5)), &state)?;
        w.set_maximum_size(PixelDimension::new(800, 600), &state)?;
        w.set_font(
            ScalableFont::new("Sans", FontStyle::PLAIN, 11.0, &state),
            &state,
        )?;
    }
    ctx.track(&widget);

    for scale in scales {
        ctx.set_scale(scale);
        report(&ctx, &widget.borrow());
    }

    ctx.set_scale(1.0);
    ctx.set_text_scale(1.25);
    report(&ctx, &widget.borrow());
    Ok(())
}

fn report(ctx: &ScaleContext, w: &ScalableWidget<HeadlessWidget>) {
    println!(
        "scale={:<5} text_scale={:<5} min={} pref={} max={} font={}pt",
        ctx.scale(),
        ctx.text_scale(),
        w.size(SizeKind::Minimum),
        w.size(SizeKind::Preferred),
        w.size(SizeKind::Maximum),
        w.font().map(|f| f.font().size()).unwrap_or_default(),
    );
}
