use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use bevel_engine::coords::{Border, ColorRgba, CornerRadii};
use bevel_engine::layout::{ButtonSizing, FrameLayout, LayoutLimits, SharedFrameLayout};
use bevel_engine::logging::{init_logging, LoggingConfig};
use bevel_engine::paint::{
    AlphaGradientSpec, ColorSpec, GradientSpec, GradientType, Palette, Pixbuf,
};

/// Where and how large to render.
///
/// Positional arguments: `[out_dir] [frame_width]`.
#[derive(Debug, Clone)]
struct PreviewConfig {
    out_dir: PathBuf,
    frame_width: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self { out_dir: PathBuf::from("bevel-preview-out"), frame_width: 320 }
    }
}

impl PreviewConfig {
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(dir) = args.next() {
            config.out_dir = PathBuf::from(dir);
        }
        if let Some(width) = args.next() {
            config.frame_width =
                width.parse().with_context(|| format!("invalid frame width {width:?}"))?;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = PreviewConfig::from_args(std::env::args().skip(1))?;
    log::info!("rendering preview into {}", config.out_dir.display());

    std::fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("creating {}", config.out_dir.display()))?;

    let palette = Palette::new()
        .with("theme_selected_bg_color", ColorRgba::from_rgba8(0x35, 0x84, 0xe4, 0xff))
        .with("theme_bg_color", ColorRgba::from_rgba8(0xf6, 0xf5, 0xf4, 0xff));

    let layout = sample_layout();
    layout
        .validate_with(&LayoutLimits { max_corner_radius: Some(12) })
        .context("sample frame layout is invalid")?;
    let layout: SharedFrameLayout = layout.into_shared();

    let title_height = (layout.title_border.v()
        + layout.title_vertical_pad
        + layout.icon_size as i32)
        .max(1) as u32;
    let width = config.frame_width;

    let title = title_gradient();
    title.validate().context("title gradient is invalid")?;
    let title_buf = title
        .render(&palette, width, title_height)
        .context("title gradient rendered nothing")?;

    let fade = AlphaGradientSpec::from_alphas(GradientType::Horizontal, &[1.0, 1.0, 0.6]);
    let title_buf = fade.apply_alpha(title_buf, false);
    save(&config.out_dir, "titlebar.png", &title_buf)?;

    let border_color = ColorSpec::shade(ColorSpec::symbolic("theme_bg_color"), 0.7).render(&palette);
    let edge = AlphaGradientSpec::from_alphas(GradientType::Vertical, &[0.9, 0.3]);
    let left = edge.render(layout.left_width.max(1) as u32, 64, border_color);
    save(&config.out_dir, "left-border.png", &left)?;

    log::info!(
        "wrote title bar {}x{} and left border {}x{}",
        title_buf.width(),
        title_buf.height(),
        left.width(),
        left.height()
    );
    Ok(())
}

fn sample_layout() -> FrameLayout {
    FrameLayout {
        left_width: 2,
        right_width: 2,
        top_height: 0,
        bottom_height: 3,
        invisible_border: Border::all(8),
        title_border: Border::new(10, 6, 4, 4),
        title_vertical_pad: 2,
        left_titlebar_edge: 4,
        right_titlebar_edge: 4,
        button_sizing: ButtonSizing::Aspect(1.0),
        button_border: Border::all(2),
        titlebar_spacing: 6,
        corner_radii: CornerRadii::top(6),
        ..FrameLayout::default()
    }
}

fn title_gradient() -> GradientSpec {
    let selected = || ColorSpec::symbolic("theme_selected_bg_color");
    GradientSpec::new(GradientType::Vertical)
        .with_stop(ColorSpec::shade(selected(), 1.2))
        .with_stop(selected())
        .with_stop(ColorSpec::blend(
            selected(),
            ColorSpec::basic(ColorRgba::black()),
            0.8,
        ))
}

fn save(dir: &Path, name: &str, pixbuf: &Pixbuf) -> Result<()> {
    let path = dir.join(name);
    pixbuf
        .to_rgba_image()
        .save(&path)
        .with_context(|| format!("writing {}", path.display()))?;
    log::debug!("saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn config_defaults_without_args() {
        let config = PreviewConfig::from_args(args(&[])).unwrap();
        assert_eq!(config.frame_width, 320);
        assert_eq!(config.out_dir, PathBuf::from("bevel-preview-out"));
    }

    #[test]
    fn config_rejects_bad_width() {
        assert!(PreviewConfig::from_args(args(&["out", "wide"])).is_err());
    }

    #[test]
    fn sample_theme_is_valid() {
        assert!(sample_layout().validate_with(&LayoutLimits { max_corner_radius: Some(12) }).is_ok());
        assert!(title_gradient().validate().is_ok());
    }
}
