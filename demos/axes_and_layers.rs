//! Builds a two-series plot with log-scaled axes and a legend, then prints the
//! resulting element tree.
//!
//! Run: RUST_LOG=plot_facade=debug cargo run --example axes_and_layers

use plot_facade::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let facade = Facade::new(SceneFactory::new());

    let plot = facade.plot(&named_args! { preferredContentSize = (400.0, 230.0) })?;
    if let Some(legend) = plot.sub_target(SubTarget::Legend) {
        facade.configure(
            &*legend,
            &named_args! {
                position = Value::Null,
                location = (390.0, 90.0),
                columns = 1,
                HAlign = Value::constant("RIGHT"),
                VAlign = Value::constant("TOP"),
            },
        )?;
    }
    let title = facade.title("Resonance widths", &named_args! { fontScale = 1.2 })?;

    let x: Vec<f64> = (1..=20).map(|i| f64::from(i) * 0.1).collect();
    let measured: Vec<f64> = x.iter().map(|v| v.powf(1.5)).collect();
    let fitted: Vec<f64> = x.iter().map(|v| v.powf(1.45) * 1.02).collect();

    let measured = facade.xy_graph(
        &[Value::sequence(&x), Value::sequence(&measured), Value::from("measured")],
        &named_args! {
            lineVisible = false,
            symbolVisible = true,
            symbolShape = Value::constant("FCIRCLE"),
            color = (95.0, 207.0, 125.0),
        },
    )?;
    let stroke = facade.stroke(1.5, Some(&[6.0, 3.0]))?;
    let fitted = facade.xy_graph(
        &[Value::sequence(&x), Value::sequence(&fitted), Value::from("fit")],
        &named_args! { lineStroke = stroke, color = Value::Color(Rgba::BLUE) },
    )?;

    let layer = facade.layer(&[Value::from(&measured), Value::from(&fitted)], &named_args! {})?;
    let x_axis = facade.axis(&named_args! {
        tickSide = Value::constant("OUTWARD"),
        range = (0.1, 2.0),
        type = Value::constant("LOGARITHMIC"),
    })?;
    let y_axes = facade.axes(2, &named_args! { labelVisible = true, range = (0.0, 3.0) })?;
    let band = facade.hstrip_annotation(
        0.8,
        1.2,
        &named_args! { fillPaint = (255.0, 220.0, 220.0) },
    )?;

    println!("{} with {} graphs", plot.kind(), layer.children().len());
    println!("  title: {:?}", title.property("text"));
    let x_range = x_axis
        .sub_target(SubTarget::TickManager)
        .and_then(|tm| tm.property("range"));
    println!("  x axis range: {x_range:?}");
    for (i, axis) in y_axes.iter().enumerate() {
        println!("  y axis {i} position: {:?}", axis.property("position"));
    }
    println!("  strip: {:?}", band.property("valueRange"));
    Ok(())
}
