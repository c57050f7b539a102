//! Builds an image graph with a colorbar and configures the legend through the
//! generic property setter.
//!
//! Run: RUST_LOG=plot_facade=debug cargo run --example colorbar_image

use plot_facade::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = FacadeConfig::parse(
        r#"
version: 1
default_element_type: f32
properties:
  ImageGraph:
    - { name: interpolation, type: opaque }
"#,
    )?;
    let facade = Facade::with_config(SceneFactory::new(), config)?;

    let (width, height) = (32_i64, 24_i64);
    let band: Vec<f64> = (0..width * height)
        .map(|i| {
            let (x, y) = ((i % width) as f64, (i / width) as f64);
            (x * 0.2).sin() * (y * 0.3).cos()
        })
        .collect();

    let image = facade.image_graph(
        &[Value::sequence(&band), Value::Int(width), Value::Int(height)],
        &named_args! { interpolation = Value::constant("BILINEAR") },
    )?;
    let layer = facade.layer(&[Value::from(&image)], &named_args! {})?;
    let colorbar = facade.colorbar(&named_args! {
        barWidth = 12.0,
        tickVisible = 0,
        labelColor = (40.0, 40.0, 40.0),
        range = (-1.0, 1.0),
    })?;
    let marker = facade.symbol_annotation(
        &[Value::Float(8.0), Value::Float(5.0), Value::constant("FTRIANGLE"), Value::from("peak")],
        &named_args! { symbolSize = 6.0 },
    )?;

    let plot = facade.plot(&named_args! { containerSize = (800.0, 600.0) })?;
    if let Some(legend) = plot.sub_target(SubTarget::Legend) {
        facade.configure(&*legend, &named_args! { enabled = false })?;
    }

    println!("{} graphs in layer", layer.children().len());
    if let Some(Value::Grid(grid)) = image.property("data") {
        println!("image {}x{} ({})", grid.width(), grid.height(), grid.data().element_type());
    }
    for role in [SubTarget::InnerAxis, SubTarget::OuterAxis] {
        if let Some(axis) = colorbar.sub_target(role) {
            println!("{role:?} tickVisible = {:?}", axis.property("tickVisible"));
        }
    }
    println!("marker at {:?}", marker.property("valuePoint"));
    Ok(())
}
