use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_annotation::{
    AlignedAnnotation, Annotation, AnnotationConfig, DataAnnotation, DataWindow, LabelAlign,
    Layer, PinnedAnnotation, Point, Rect, Size, Surface,
};

/// Sample series drawn as annotated markers
const SERIES: [(f32, f32); 6] = [
    (0.0, 1.0),
    (1.0, 3.0),
    (2.0, 2.0),
    (3.0, 5.0),
    (4.0, 4.0),
    (5.0, 6.5),
];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = pico_args::Arguments::from_env();
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let output: PathBuf = args
        .opt_value_from_str("--output")?
        .unwrap_or_else(|| PathBuf::from("annotated.png"));
    let width: f32 = args.opt_value_from_str("--width")?.unwrap_or(640.0);
    let height: f32 = args.opt_value_from_str("--height")?.unwrap_or(400.0);

    let config = match config_path {
        Some(path) => AnnotationConfig::load_from(&path),
        None => AnnotationConfig::load(),
    };

    let margin = 40.0;
    let surface = Surface::new(Size::new(width, height))
        .with_plot_area(Rect::new(margin, margin, width - margin, height - margin))
        .with_data_window(DataWindow::new(-0.5, 5.5, 0.0, 7.0));

    let mut annotations: Vec<Box<dyn Annotation<Content = Layer>>> = Vec::new();
    for &(x, y) in &SERIES {
        annotations.push(Box::new(
            DataAnnotation::new(Point::new(x, y)).with_content(Layer::from(config.marker())),
        ));
    }

    let (peak_x, peak_y) = SERIES[SERIES.len() - 1];
    let mut peak = DataAnnotation::new(Point::new(peak_x, peak_y))
        .with_content(Layer::from(config.label(format!("peak {peak_y}"))));
    peak.set_displacement(config.displacement.dx, config.displacement.dy);
    annotations.push(Box::new(peak));

    annotations.push(Box::new(
        AlignedAnnotation::new(1.0, 0.0)
            .with_content(Layer::from(
                config.label("series A").with_align(LabelAlign::TopRight),
            ))
            .with_displacement(-6.0, 6.0),
    ));
    annotations.push(Box::new(
        PinnedAnnotation::new(Point::new(margin, height - margin * 0.5))
            .with_content(Layer::from(config.label("demo").with_align(LabelAlign::Left))),
    ));

    for annotation in annotations.iter_mut() {
        surface.attach(annotation.as_mut());
    }
    log::info!("Attached {} annotations to {}", annotations.len(), surface.id());

    let img = surface.render(annotations.iter().map(|a| a.as_ref()), config.background)?;
    img.save(&output)
        .with_context(|| format!("Failed to save {}", output.display()))?;
    println!("Wrote {}", output.display());

    Ok(())
}
