use crate::events::cap_total;
use cairo::{Context, Format, ImageSurface};
use pie_progress::{
    Configuration, DrawingSurface, LayerTree, PieRenderer, RecordingSurface, Rect, ShapeLayer,
};
use std::io::Write;

fn lay_out<S: DrawingSurface>(
    surface: S,
    configuration: &Configuration,
    passed: i64,
    total: i64,
    size: f64,
) -> PieRenderer<S> {
    let mut renderer = PieRenderer::new(surface, configuration.clone());
    renderer.update_state(passed, cap_total(total), false);
    renderer.layout(Rect::new(0.0, 0.0, size, size));
    renderer
}

pub fn shape_layers(
    configuration: &Configuration,
    passed: i64,
    total: i64,
    size: f64,
) -> Vec<ShapeLayer> {
    lay_out(RecordingSurface::default(), configuration, passed, total, size)
        .surface()
        .commands()
}

pub fn to_json(layers: &[ShapeLayer]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(layers)
}

/// Paints the pie onto a transparent square image and encodes it as PNG.
pub fn write_png<W: Write>(
    out: &mut W,
    configuration: &Configuration,
    passed: i64,
    total: i64,
    size: f64,
) -> anyhow::Result<()> {
    let renderer = lay_out(LayerTree::default(), configuration, passed, total, size);
    let pixels = size.ceil().max(1.0) as i32;

    let surface = ImageSurface::create(Format::ARgb32, pixels, pixels)?;
    {
        let cr = Context::new(&surface)?;
        renderer.surface().paint(&cr)?;
    }
    surface
        .write_to_png(out)
        .map_err(|e| anyhow::anyhow!("Failed to encode png: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::MAX_TOTAL;

    #[test]
    fn test_shape_layers_count() {
        let configuration = Configuration::default();
        assert_eq!(shape_layers(&configuration, 2, 6, 120.0).len(), 6);
        assert_eq!(shape_layers(&configuration, 2, -6, 120.0).len(), 1);
        assert!(shape_layers(&configuration, 2, 6, 0.0).is_empty());
    }

    #[test]
    fn test_huge_total_is_capped() {
        let layers = shape_layers(&Configuration::default(), 3, i64::MAX, 100.0);
        assert_eq!(layers.len() as i64, MAX_TOTAL);
        assert!(layers.iter().all(|layer| layer.frame.origin.x.is_finite()));
    }

    #[test]
    fn test_json_lists_every_wedge() {
        let configuration = Configuration::default();
        let json = to_json(&shape_layers(&configuration, 1, 3, 90.0)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let wedges = value.as_array().unwrap();
        assert_eq!(wedges.len(), 3);
        assert_eq!(wedges[0]["line_cap"], "round");
        assert_eq!(
            wedges[0]["fill"],
            configuration.active_colors.fill.to_string()
        );
        assert_eq!(
            wedges[2]["fill"],
            configuration.inactive_colors.fill.to_string()
        );
        assert_eq!(wedges[1]["path"][0]["op"], "move_to");
    }

    #[test]
    fn test_png_signature() {
        let mut out = Vec::new();
        write_png(&mut out, &Configuration::default(), 1, 2, 32.0).unwrap();
        assert_eq!(&out[..8], b"\x89PNG\r\n\x1a\n");
    }
}
